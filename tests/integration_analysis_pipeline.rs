//! Integration tests for the end-to-end diagnostics pipeline.
//!
//! Purpose
//! -------
//! - Validate `run_analysis` from raw input (vectors and free-form text)
//!   through every stage to the final `AnalysisReport`.
//! - Exercise realistic regimes: a short return series, Gaussian noise,
//!   heavy-tailed draws, and an autocorrelated series.
//!
//! Coverage
//! --------
//! - `sample`: `Sample::from_vec` and `Sample::parse`.
//! - `analysis`: `AnalysisOptions` builders and `run_analysis`.
//! - `distributions`, `statistical_tests`, `tails`, `timeseries`: the
//!   report-level properties that tie the stages together.
//!
//! Exclusions
//! ----------
//! - Exact numerical values of individual estimators; those are pinned by
//!   unit tests next to each estimator.
//! - Python bindings.
use approx::assert_relative_eq;
use rand::{Rng, SeedableRng, rngs::StdRng};
use rand_distr::{StandardNormal, StudentT};
use rust_diagnostics::{
    analysis::{AnalysisError, AnalysisOptions, AnalysisReport, run_analysis},
    distributions::{DistributionFit, StudentTSearch},
    sample::{Sample, SampleError},
    timeseries::Stationarity,
};

const TWENTY: [f64; 20] = [
    1.2, -0.5, 0.3, 2.1, -1.0, 0.8, -0.3, 1.5, 0.2, -0.7, 1.1, 0.4, -0.9, 1.8, 0.1, -0.4, 1.3, 0.6,
    -0.2, 0.9,
];

/// Purpose
/// -------
/// Seeded standard-normal draws.
fn normal_draws(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.sample(StandardNormal)).collect()
}

/// Purpose
/// -------
/// Check the invariants every report must satisfy regardless of input.
fn assert_report_invariants(report: &AnalysisReport, alpha: f64) {
    let s = &report.summary;
    assert!(s.min <= s.p5 && s.p5 <= s.p25 && s.p25 <= s.median);
    assert!(s.median <= s.p75 && s.p75 <= s.p95 && s.p95 <= s.max);
    for test in report.tests() {
        assert!((0.0..=1.0).contains(&test.p_value), "{}: p = {}", test.name, test.p_value);
        assert_eq!(test.reject_null, test.p_value < alpha, "{}", test.name);
        assert_eq!(test.alpha, alpha);
    }
    assert!(report.fits.windows(2).all(|w| w[0].aic <= w[1].aic));
    assert!(report.tail.var99 >= report.tail.var95);
    assert!(report.tail.cvar95 >= report.tail.var95);
    let ts = &report.time_series;
    if let (Some(acf), Some(pacf)) = (ts.acf.first(), ts.pacf.first()) {
        assert_eq!(acf.value.to_bits(), pacf.value.to_bits());
    }
}

#[test]
// Purpose
// -------
// The 20-point return series runs end to end without errors.
//
// Given
// -----
// - The 20 observations with mean 0.415 and default options.
//
// Expect
// ------
// - count 20, mean ≈ 0.415, every invariant holds, Hill index NaN.
fn twenty_point_series_end_to_end() {
    // Arrange
    let sample = Sample::from_vec(TWENTY.to_vec()).unwrap();

    // Act
    let report = run_analysis(&sample, &AnalysisOptions::default()).unwrap();

    // Assert
    assert_eq!(report.summary.count, 20);
    assert_relative_eq!(report.summary.mean, 0.415, epsilon = 1e-3);
    assert_report_invariants(&report, 0.05);
    assert!(report.tail.hill_index.is_nan());
    assert_eq!(report.time_series.squared_returns.len(), 20);
}

#[test]
// Purpose
// -------
// Text input parses to the same sample and the same report.
fn parsed_text_matches_vector_input() {
    let text = TWENTY.iter().map(|x| x.to_string()).collect::<Vec<_>>().join(", ");
    let text = format!("returns:\n{text}; n/a");

    let parsed = Sample::parse(&text).unwrap();
    let direct = Sample::from_vec(TWENTY.to_vec()).unwrap();
    assert_eq!(parsed, direct);

    // Tail indices are NaN at n = 20, so compare the NaN-free parts.
    let opts = AnalysisOptions::default();
    let from_text = run_analysis(&parsed, &opts).unwrap();
    let from_vec = run_analysis(&direct, &opts).unwrap();
    assert_eq!(from_text.summary, from_vec.summary);
    assert_eq!(from_text.fits, from_vec.fits);
    assert_eq!(from_text.tests(), from_vec.tests());
    assert_eq!(from_text.time_series, from_vec.time_series);
}

#[test]
// Purpose
// -------
// Gaussian noise is recognized as such.
//
// Given
// -----
// - 1000 seeded standard-normal draws.
//
// Expect
// ------
// - |μ̂| < 0.2, |σ̂ − 1| < 0.2, finite tail indices, and a stationary AR(1).
fn gaussian_noise_report() {
    // Arrange
    let sample = Sample::from_vec(normal_draws(1000, 7)).unwrap();

    // Act
    let report = run_analysis(&sample, &AnalysisOptions::default()).unwrap();

    // Assert
    assert_report_invariants(&report, 0.05);
    match report.normal_fit {
        DistributionFit::Normal { mu, sigma } => {
            assert!(mu.abs() < 0.2, "mu = {mu}");
            assert!((sigma - 1.0).abs() < 0.2, "sigma = {sigma}");
        }
        other => panic!("expected a Normal fit, got {other}"),
    }
    assert!(report.tail.hill_index.is_finite() && report.tail.left_tail_index.is_finite());
    let ar1 = report.time_series.ar1.unwrap();
    assert!(ar1.stationary && ar1.phi.abs() < 0.2);
    assert_eq!(report.time_series.unit_root.unwrap().classification, Stationarity::Stationary);
}

#[test]
// Purpose
// -------
// Heavy tails push the Normal fit out of first place.
//
// Given
// -----
// - 2000 seeded Student-t(3) draws.
//
// Expect
// ------
// - The best fit by AIC is Laplace or Student-t and Jarque-Bera rejects.
fn heavy_tails_prefer_non_normal_fit() {
    let mut rng = StdRng::seed_from_u64(11);
    let t3 = StudentT::new(3.0).unwrap();
    let values: Vec<f64> = (0..2000).map(|_| rng.sample(&t3)).collect();
    let sample = Sample::from_vec(values).unwrap();

    let report = run_analysis(&sample, &AnalysisOptions::default()).unwrap();

    assert_report_invariants(&report, 0.05);
    let best = report.best_fit().unwrap();
    assert!(!matches!(best.fit, DistributionFit::Normal { .. }), "best = {}", best.fit);
    assert!(report.jarque_bera.as_ref().is_some_and(|t| t.reject_null));
    assert!(report.normality_rejected());
}

#[test]
// Purpose
// -------
// Serial dependence shows up in Ljung-Box, ACF, and AR(1).
//
// Given
// -----
// - 500 points of xₜ = 0.8 xₜ₋₁ + εₜ with seeded Gaussian εₜ.
//
// Expect
// ------
// - Ljung-Box rejects, ACF(1) is significant, φ̂ ≈ 0.8, and the series is
//   classified stationary.
fn autocorrelated_series_is_detected() {
    let noise = normal_draws(500, 3);
    let mut values = Vec::with_capacity(noise.len());
    let mut prev = 0.0;
    for e in noise {
        prev = 0.8 * prev + e;
        values.push(prev);
    }
    let sample = Sample::from_vec(values).unwrap();
    let opts = AnalysisOptions::new(0.01, 10, 50).unwrap();

    let report = run_analysis(&sample, &opts).unwrap();

    assert_report_invariants(&report, 0.01);
    assert!(report.ljung_box_returns.as_ref().is_some_and(|t| t.reject_null));
    assert!(report.time_series.acf[0].significant);
    let ar1 = report.time_series.ar1.unwrap();
    assert!((ar1.phi - 0.8).abs() < 0.1, "phi = {}", ar1.phi);
    assert_eq!(report.time_series.unit_root.unwrap().classification, Stationarity::Stationary);
    assert_eq!(report.time_series.rolling_mean.len(), 451);
}

#[test]
// Purpose
// -------
// Custom options flow through to the report.
fn custom_options_are_honored() {
    let sample = Sample::from_vec(normal_draws(200, 5)).unwrap();
    let opts = AnalysisOptions::new(0.10, 5, 10)
        .unwrap()
        .with_ljung_box_lags(3)
        .with_student_t_search(StudentTSearch { lower: 3.0, upper: 30.0, tol: 0.05 });

    let report = run_analysis(&sample, &opts).unwrap();

    assert_report_invariants(&report, 0.10);
    assert_eq!(report.time_series.acf.len(), 5);
    assert_eq!(report.time_series.rolling_std.len(), 191);
    let nu = report
        .fits
        .iter()
        .find_map(|f| match f.fit {
            DistributionFit::StudentT { nu, .. } => Some(nu),
            _ => None,
        })
        .unwrap();
    assert!((3.0..=30.0).contains(&nu), "nu = {nu}");
}

#[test]
// Purpose
// -------
// Unusable input is rejected with a typed error.
fn unusable_input_is_rejected() {
    let opts = AnalysisOptions::default();
    assert!(matches!(Sample::parse("none, of; these"), Err(SampleError::NoNumericTokens { .. })));
    assert!(matches!(
        Sample::from_vec(vec![1.0, f64::NAN]),
        Err(SampleError::NonFiniteData { index: 1, .. })
    ));
    let constant = Sample::from_vec(vec![2.5; 10]).unwrap();
    assert!(matches!(run_analysis(&constant, &opts), Err(AnalysisError::Sample(_))));
}
