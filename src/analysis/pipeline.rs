//! analysis::pipeline — run every diagnostic on one sample.
//!
//! Purpose
//! -------
//! Provide [`run_analysis`], the single entry point used by Rust callers and
//! the Python bindings.
//!
//! Key behaviors
//! -------------
//! - Validate options, then the sample (n ≥ 2, not constant, variance
//!   finite and positive).
//! - Run summary statistics, the three distribution fits, the normality
//!   tests against the fitted Normal, Ljung-Box on returns and on squared
//!   returns, tail metrics, downside risk, and time-series diagnostics.
//! - Log one record per stage at `debug`, plus `info` records for skipped or
//!   degraded estimators (Shapiro-Wilk out of range, NaN tail indices, no
//!   AR(1) / unit-root result).
//! - Degrade per stage: a test whose statistic is not finite is reported as
//!   `None`, and a family whose fit is degenerate is left out of the
//!   ranking. Both leave an `info` record.
//!
//! Invariants & assumptions
//! ------------------------
//! - Stages are independent: each reads only the sample and the options.
//! - Ljung-Box lag count is `min(ljung_box_lags, n − 1)`, which is ≥ 1 after
//!   sample validation.
use slog::{Logger, debug, info, o};

use crate::analysis::errors::{AnalysisError, AnalysisResult};
use crate::analysis::options::AnalysisOptions;
use crate::analysis::report::AnalysisReport;
use crate::descriptive::compute_summary_stats;
use crate::distributions::{
    DistributionFit, FitError, FitResult, fit_laplace, fit_normal, fit_student_t_with, rank_fits,
};
use crate::sample::{Sample, validate_for_analysis};
use crate::statistical_tests::shapiro_wilk::{SW_MAX_N, SW_MIN_N};
use crate::statistical_tests::{
    StatisticalTest, TestError, TestResult, anderson_darling_test, jarque_bera_from_summary,
    kolmogorov_smirnov_test, ljung_box_test, shapiro_wilk_test,
};
use crate::tails::{compute_tail_metrics, downside_deviation, max_drawdown, sortino_ratio};
use crate::timeseries::compute_time_series_diagnostics;

/// Run the full diagnostics pipeline.
///
/// Parameters
/// ----------
/// - `sample`: `&Sample`
///   Ordered, finite observations (e.g. returns).
/// - `opts`: `&AnalysisOptions`
///   Significance level, lags, windows, ν search, and logger.
///
/// Returns
/// -------
/// `AnalysisResult<AnalysisReport>`
///   Every metric of the sample. Estimators that cannot run on this sample
///   report `NaN` or `None` instead of failing.
///
/// Errors
/// ------
/// - `AnalysisError::InvalidOption` when `opts` does not validate.
/// - `AnalysisError::Sample` for n < 2, a constant sample, or a variance
///   outside the `f64` range.
/// - Other variants only if a stage hits a precondition the checks above do
///   not cover.
pub fn run_analysis(sample: &Sample, opts: &AnalysisOptions) -> AnalysisResult<AnalysisReport> {
    opts.validate()?;
    validate_for_analysis(sample)?;

    let n = sample.len();
    let log = opts.logger.new(o!("n" => n, "alpha" => opts.alpha));
    let values = sample.as_slice();

    let summary = compute_summary_stats(sample)?;
    debug!(log, "summary statistics";
        "mean" => summary.mean, "std_dev" => summary.std_dev,
        "skewness" => summary.skewness, "kurtosis" => summary.kurtosis);

    let normal_fit = fit_normal(sample)?;
    let mut fitted = vec![normal_fit];
    fitted.extend(optional_fit(&log, fit_laplace(sample))?);
    fitted.extend(optional_fit(&log, fit_student_t_with(sample, &opts.student_t))?);
    let fits = rank_fits(fitted, sample);
    if let Some(best) = fits.first() {
        debug!(log, "distribution fits ranked";
            "best" => best.fit.name(), "aic" => best.aic, "fit" => %best.fit);
    }

    let jarque_bera = optional_test(&log, jarque_bera_from_summary(&summary, opts.alpha))?;
    let kolmogorov_smirnov =
        optional_test(&log, kolmogorov_smirnov_test(sample, &normal_fit, opts.alpha))?;
    let anderson_darling =
        optional_test(&log, anderson_darling_test(sample, &normal_fit, opts.alpha))?;
    let shapiro_wilk = match shapiro_wilk_test(sample, opts.alpha).transpose() {
        Some(outcome) => optional_test(&log, outcome)?,
        None => {
            info!(log, "shapiro-wilk skipped"; "min_n" => SW_MIN_N, "max_n" => SW_MAX_N);
            None
        }
    };

    let lags = opts.ljung_box_lags.min(n - 1);
    if lags < opts.ljung_box_lags {
        debug!(log, "ljung-box lags capped"; "requested" => opts.ljung_box_lags, "used" => lags);
    }
    let ljung_box_returns = optional_test(&log, ljung_box_test(sample, lags, opts.alpha))?;
    let squared_log = log.new(o!("series" => "squared"));
    let ljung_box_squared = match Sample::from_vec(sample.squared()) {
        Ok(squared) => optional_test(&squared_log, ljung_box_test(&squared, lags, opts.alpha))?,
        Err(err) => {
            info!(squared_log, "test unavailable"; "reason" => %err);
            None
        }
    };

    let tail = compute_tail_metrics(sample)?;
    debug!(log, "tail metrics"; "var95" => tail.var95, "var99" => tail.var99,
        "cvar95" => tail.cvar95, "cvar99" => tail.cvar99);
    if tail.hill_index.is_nan() || tail.left_tail_index.is_nan() {
        info!(log, "tail index unavailable";
            "hill_index" => tail.hill_index, "left_tail_index" => tail.left_tail_index);
    }

    let drawdown = max_drawdown(values);
    let downside = downside_deviation(values, opts.risk_threshold);
    let sortino = sortino_ratio(values, opts.risk_threshold);
    debug!(log, "downside risk"; "max_drawdown" => drawdown.max_drawdown,
        "downside_deviation" => downside, "sortino_ratio" => sortino);

    let time_series = compute_time_series_diagnostics(sample, opts.max_lag, opts.rolling_window)?;
    match &time_series.ar1 {
        Some(ar1) => debug!(log, "ar(1) fit"; "phi" => ar1.phi, "t_stat" => ar1.t_stat,
            "stationary" => ar1.stationary),
        None => info!(log, "ar(1) fit unavailable"),
    }
    match &time_series.unit_root {
        Some(ur) => debug!(log, "unit-root check"; "statistic" => ur.statistic,
            "p_value" => ur.p_value, "classification" => ur.classification.as_str()),
        None => info!(log, "unit-root check unavailable"),
    }

    let report = AnalysisReport {
        summary,
        fits,
        normal_fit,
        jarque_bera,
        kolmogorov_smirnov,
        anderson_darling,
        shapiro_wilk,
        ljung_box_returns,
        ljung_box_squared,
        tail,
        drawdown,
        downside_deviation: downside,
        sortino_ratio: sortino,
        time_series,
    };
    info!(log, "analysis complete";
        "fits" => report.fits.len(), "tests" => report.tests().len());
    Ok(report)
}

/// Keep a test outcome, or drop it with an `info` record when its statistic
/// is not finite. Other errors propagate.
fn optional_test(
    log: &Logger, outcome: TestResult<StatisticalTest>,
) -> AnalysisResult<Option<StatisticalTest>> {
    match outcome {
        Ok(test) => {
            debug!(log, "test"; "name" => test.name, "statistic" => test.statistic,
                "p_value" => test.p_value, "reject_null" => test.reject_null);
            Ok(Some(test))
        }
        Err(TestError::NonFiniteStatistic { test, value }) => {
            info!(log, "test unavailable"; "name" => test, "statistic" => value);
            Ok(None)
        }
        Err(err) => Err(AnalysisError::from(err)),
    }
}

/// Keep a fitted family, or drop it with an `info` record when the fit is
/// degenerate. Other errors propagate.
fn optional_fit(
    log: &Logger, outcome: FitResult<DistributionFit>,
) -> AnalysisResult<Option<DistributionFit>> {
    match outcome {
        Ok(fit) => Ok(Some(fit)),
        Err(FitError::Degenerate { family, reason }) => {
            info!(log, "fit unavailable"; "family" => family, "reason" => reason);
            Ok(None)
        }
        Err(err) => Err(AnalysisError::from(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::errors::AnalysisError;
    use crate::sample::SampleError;
    use approx::assert_relative_eq;
    use slog::{Drain, Never, OwnedKVList, Record};
    use std::sync::{Arc, Mutex};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Report contents on a 20-point series.
    // - Fail-fast validation of options and samples, including variances
    //   outside the `f64` range.
    // - Degraded estimators on short and large-scale samples and their log
    //   records.
    // -------------------------------------------------------------------------

    /// Drain that keeps every record message.
    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<String>>>);

    impl Drain for Capture {
        type Ok = ();
        type Err = Never;

        fn log(&self, record: &Record, _values: &OwnedKVList) -> Result<(), Never> {
            if let Ok(mut lines) = self.0.lock() {
                lines.push(record.msg().to_string());
            }
            Ok(())
        }
    }

    impl Capture {
        fn logger(&self) -> Logger {
            Logger::root(self.clone(), o!())
        }

        fn messages(&self) -> Vec<String> {
            self.0.lock().map(|lines| lines.clone()).unwrap_or_default()
        }
    }

    fn twenty() -> Sample {
        Sample::from_vec(vec![
            1.2, -0.5, 0.3, 2.1, -1.0, 0.8, -0.3, 1.5, 0.2, -0.7, 1.1, 0.4, -0.9, 1.8, 0.1, -0.4,
            1.3, 0.6, -0.2, 0.9,
        ])
        .unwrap()
    }

    #[test]
    // Purpose
    // -------
    // A 20-point series produces a complete report.
    //
    // Given
    // -----
    // - The 20-point series with mean 0.415 and default options.
    //
    // Expect
    // ------
    // - count 20, all three fits ranked by AIC, Shapiro-Wilk present, 10
    //   Ljung-Box lags, NaN Hill index (k = 2 < 5), and AR(1) present.
    fn twenty_points_full_report() {
        // Arrange
        let sample = twenty();

        // Act
        let report = run_analysis(&sample, &AnalysisOptions::default()).unwrap();

        // Assert
        assert_eq!(report.summary.count, 20);
        assert_relative_eq!(report.summary.mean, 0.415, epsilon = 1e-12);
        assert_eq!(report.fits.len(), 3);
        assert!(report.fits.windows(2).all(|w| w[0].aic <= w[1].aic));
        assert_eq!(report.best_fit(), report.fits.first());
        assert!(report.shapiro_wilk.is_some());
        assert_eq!(report.tests().len(), 6);
        for test in report.tests() {
            assert!((0.0..=1.0).contains(&test.p_value), "{}: {}", test.name, test.p_value);
            assert_eq!(test.reject_null, test.p_value < 0.05);
        }
        assert!(report.tail.hill_index.is_nan());
        assert!(report.tail.var99 >= report.tail.var95);
        assert!(report.time_series.ar1.is_some());
        assert_eq!(report.time_series.acf.len(), 19);
        assert_eq!(report.time_series.rolling_mean.len(), 1);
        assert_relative_eq!(report.normal_fit.location(), 0.415, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Invalid options are rejected before the sample is inspected.
    fn invalid_options_fail_fast() {
        let empty = Sample::from_vec(vec![]).unwrap();
        let opts = AnalysisOptions { alpha: 0.0, ..Default::default() };
        assert!(matches!(
            run_analysis(&empty, &opts),
            Err(AnalysisError::InvalidOption { option: "alpha", .. })
        ));
    }

    #[test]
    // Purpose
    // -------
    // Samples that are too short or constant are errors.
    fn short_and_constant_samples_fail() {
        let opts = AnalysisOptions::default();
        let one = Sample::from_vec(vec![0.5]).unwrap();
        assert!(matches!(
            run_analysis(&one, &opts),
            Err(AnalysisError::Sample(SampleError::InsufficientData { required: 2, actual: 1 }))
        ));
        let flat = Sample::from_vec(vec![0.3; 5]).unwrap();
        assert!(matches!(
            run_analysis(&flat, &opts),
            Err(AnalysisError::Sample(SampleError::ConstantSample { .. }))
        ));
    }

    #[test]
    // Purpose
    // -------
    // Varied samples whose variance under- or overflows fail with a typed
    // sample error before any stage runs.
    //
    // Given
    // -----
    // - Magnitudes near 1e-170 (squared deviations underflow to 0).
    // - Magnitudes near 1e200 (squared deviations overflow).
    fn out_of_range_variance_fails() {
        let opts = AnalysisOptions::default();
        let tiny = Sample::from_vec(vec![1e-170, 2e-170, 3e-170, -1e-170, 5e-170]).unwrap();
        assert!(matches!(
            run_analysis(&tiny, &opts),
            Err(AnalysisError::Sample(SampleError::DegenerateVariance { variance }))
                if variance == 0.0
        ));
        let huge = Sample::from_vec(vec![1e200, -1e200, 3e200, 2e200]).unwrap();
        assert!(matches!(
            run_analysis(&huge, &opts),
            Err(AnalysisError::Sample(SampleError::DegenerateVariance { variance }))
                if variance == f64::INFINITY
        ));
    }

    #[test]
    // Purpose
    // -------
    // A test whose statistic overflows is dropped, not fatal.
    //
    // Given
    // -----
    // - [1e150, −1e150, 3e150, 2e150]: the sample itself is in range, but
    //   the squared series reaches 9e300 and its squared deviations overflow.
    //
    // Expect
    // ------
    // - `Ok` report with Ljung-Box on squares `None` and a "test unavailable"
    //   record; Ljung-Box on returns and the normality tests still run.
    fn overflowing_statistic_is_dropped_and_logged() {
        // Arrange
        let capture = Capture::default();
        let opts = AnalysisOptions::default().with_logger(capture.logger());
        let sample = Sample::from_vec(vec![1e150, -1e150, 3e150, 2e150]).unwrap();

        // Act
        let report = run_analysis(&sample, &opts).unwrap();

        // Assert
        assert!(report.ljung_box_squared.is_none());
        assert!(report.ljung_box_returns.is_some());
        assert!(report.jarque_bera.is_some() && report.kolmogorov_smirnov.is_some());
        assert!(report.summary.skewness.is_finite() && report.summary.kurtosis.is_finite());
        assert!(!report.fits.is_empty());
        assert!(report.tests().iter().all(|t| (0.0..=1.0).contains(&t.p_value)));
        let messages = capture.messages();
        assert!(
            messages.iter().any(|m| m == "test unavailable"),
            "missing record in {messages:?}"
        );
    }

    #[test]
    // Purpose
    // -------
    // The smallest valid sample degrades instead of failing and logs why.
    //
    // Given
    // -----
    // - n = 2 with a capturing logger.
    //
    // Expect
    // ------
    // - Shapiro-Wilk skipped, Ljung-Box with one lag, no AR(1) / unit root,
    //   and matching `info` records.
    fn two_points_degrade_and_log() {
        // Arrange
        let capture = Capture::default();
        let opts = AnalysisOptions::default().with_logger(capture.logger());
        let sample = Sample::from_vec(vec![0.02, -0.01]).unwrap();

        // Act
        let report = run_analysis(&sample, &opts).unwrap();

        // Assert
        assert!(report.shapiro_wilk.is_none());
        assert_eq!(report.tests().len(), 5);
        assert!(report.time_series.ar1.is_none() && report.time_series.unit_root.is_none());
        let messages = capture.messages();
        for expected in [
            "shapiro-wilk skipped",
            "ljung-box lags capped",
            "tail index unavailable",
            "ar(1) fit unavailable",
            "unit-root check unavailable",
            "analysis complete",
        ] {
            assert!(messages.iter().any(|m| m == expected), "missing {expected:?} in {messages:?}");
        }
    }

    #[test]
    // Purpose
    // -------
    // The risk threshold moves downside deviation and Sortino.
    fn risk_threshold_is_applied() {
        let sample = twenty();
        let at_zero = run_analysis(&sample, &AnalysisOptions::default()).unwrap();
        let at_one =
            run_analysis(&sample, &AnalysisOptions::default().with_risk_threshold(1.0)).unwrap();

        assert!(at_one.downside_deviation > at_zero.downside_deviation);
        assert!(at_one.sortino_ratio < 0.0 && at_zero.sortino_ratio > 0.0);
    }
}
