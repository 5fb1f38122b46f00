//! One-sample Kolmogorov-Smirnov test against a fitted distribution.
//!
//! On the sorted copy x₍₀₎ ≤ … ≤ x₍ₙ₋₁₎:
//! - D⁺ = maxᵢ ((i + 1)/n − F(x₍ᵢ₎)),
//! - D⁻ = maxᵢ (F(x₍ᵢ₎) − i/n),
//! - D = max(D⁺, D⁻).
//!
//! The p-value uses the asymptotic Kolmogorov distribution with the
//! Stephens small-sample correction λ = (√n + 0.12 + 0.11/√n) · D.
use crate::distributions::DistributionFit;
use crate::sample::Sample;
use crate::statistical_tests::errors::TestResult;
use crate::statistical_tests::outcome::StatisticalTest;
use crate::statistical_tests::validation::{require_observations, validate_alpha};

pub const KOLMOGOROV_SMIRNOV: &str = "Kolmogorov-Smirnov";

/// Maximum number of terms of the Kolmogorov series.
const KS_MAX_TERMS: usize = 100;
/// Terms below this magnitude stop the series.
const KS_TERM_EPS: f64 = 1e-10;

/// Run the Kolmogorov-Smirnov test of `sample` against `fit`.
///
/// Parameters
/// ----------
/// - `sample`: `&Sample`
///   Non-empty sample.
/// - `fit`: `&DistributionFit`
///   Reference distribution, usually the fitted Normal.
/// - `alpha`: `f64`
///   Significance level in (0, 1).
///
/// Errors
/// ------
/// - `TestError::InvalidAlpha`, `TestError::InsufficientData` (empty).
/// - `TestError::NonFiniteStatistic` when `fit` has a non-positive scale.
pub fn kolmogorov_smirnov_test(
    sample: &Sample, fit: &DistributionFit, alpha: f64,
) -> TestResult<StatisticalTest> {
    validate_alpha(alpha)?;
    require_observations(KOLMOGOROV_SMIRNOV, sample.len(), 1)?;

    let d = ks_statistic(&sample.sorted(), |x| fit.cdf(x));
    let sqrt_n = (sample.len() as f64).sqrt();
    let lambda = (sqrt_n + 0.12 + 0.11 / sqrt_n) * d;
    StatisticalTest::new(KOLMOGOROV_SMIRNOV, d, kolmogorov_p_value(lambda), alpha, None)
}

/// D = max(D⁺, D⁻) for ascending `sorted` data and reference CDF `cdf`.
pub fn ks_statistic<F: Fn(f64) -> f64>(sorted: &[f64], cdf: F) -> f64 {
    let n = sorted.len() as f64;
    let mut d_plus = f64::NEG_INFINITY;
    let mut d_minus = f64::NEG_INFINITY;
    for (i, &x) in sorted.iter().enumerate() {
        let f = cdf(x);
        if f.is_nan() {
            return f64::NAN;
        }
        d_plus = d_plus.max((i + 1) as f64 / n - f);
        d_minus = d_minus.max(f - i as f64 / n);
    }
    d_plus.max(d_minus)
}

/// Upper tail of the Kolmogorov distribution,
/// Q(λ) = 2 Σ_{k≥1} (−1)^{k−1} exp(−2k²λ²).
///
/// The alternating series is cut once a term drops below 1e-10 or after 100
/// terms, whichever comes first; the result is clamped to [0, 1].
pub fn kolmogorov_p_value(lambda: f64) -> f64 {
    if lambda.is_nan() {
        return f64::NAN;
    }
    if lambda <= 0.0 {
        return 1.0;
    }
    let mut sum = 0.0;
    let mut sign = 1.0;
    for k in 1..=KS_MAX_TERMS {
        let kf = k as f64;
        let term = (-2.0 * kf * kf * lambda * lambda).exp();
        sum += sign * term;
        if term < KS_TERM_EPS {
            break;
        }
        sign = -sign;
    }
    (2.0 * sum).clamp(0.0, 1.0)
}
