//! Anderson-Darling goodness-of-fit test.
//!
//! Purpose
//! -------
//! Test a sample against a fitted distribution with a statistic that weights
//! the tails more heavily than Kolmogorov-Smirnov.
//!
//! Key behaviors
//! -------------
//! - A² = −n − (1/n) Σᵢ (2i − 1) [ln F(x₍ᵢ₎) + ln(1 − F(x₍ₙ₊₁₋ᵢ₎))] over the
//!   sorted copy, 1-based i, with F clamped to [1e-10, 1 − 1e-10].
//! - A²* = A² (1 + 0.75/n + 2.25/n²) is the reported statistic.
//! - The p-value is the D'Agostino-Stephens piecewise approximation for the
//!   normal case with estimated parameters.
//!
//! Conventions
//! -----------
//! - The 5 % critical value 0.787 is reported in `critical_value`; the
//!   rejection decision itself is `p < alpha` like every other test.
use crate::distributions::DistributionFit;
use crate::sample::Sample;
use crate::statistical_tests::errors::TestResult;
use crate::statistical_tests::outcome::StatisticalTest;
use crate::statistical_tests::validation::{require_observations, validate_alpha};

pub const ANDERSON_DARLING: &str = "Anderson-Darling";

/// Critical value of A²* at the 5 % level (normal, estimated parameters).
pub const AD_CRITICAL_5PCT: f64 = 0.787;

/// CDF values are kept this far away from 0 and 1.
const CDF_CLAMP: f64 = 1e-10;

/// Run the Anderson-Darling test of `sample` against `fit`.
///
/// Errors
/// ------
/// - `TestError::InvalidAlpha`, `TestError::InsufficientData` (empty).
/// - `TestError::NonFiniteStatistic` when `fit` has a non-positive scale.
pub fn anderson_darling_test(
    sample: &Sample, fit: &DistributionFit, alpha: f64,
) -> TestResult<StatisticalTest> {
    validate_alpha(alpha)?;
    require_observations(ANDERSON_DARLING, sample.len(), 1)?;

    let n = sample.len() as f64;
    let a2 = ad_statistic(&sample.sorted(), |x| fit.cdf(x));
    let adjusted = a2 * (1.0 + 0.75 / n + 2.25 / (n * n));
    ad_outcome(adjusted, alpha)
}

/// Outcome for an adjusted statistic A²*: the decision follows the
/// p-value, and [`AD_CRITICAL_5PCT`] is attached for reference only.
pub(crate) fn ad_outcome(adjusted: f64, alpha: f64) -> TestResult<StatisticalTest> {
    StatisticalTest::new(
        ANDERSON_DARLING,
        adjusted,
        ad_p_value(adjusted),
        alpha,
        Some(AD_CRITICAL_5PCT),
    )
}

/// Unadjusted A² for ascending `sorted` data under `cdf`.
pub fn ad_statistic<F: Fn(f64) -> f64>(sorted: &[f64], cdf: F) -> f64 {
    let n = sorted.len();
    let probs: Vec<f64> =
        sorted.iter().map(|&x| cdf(x).clamp(CDF_CLAMP, 1.0 - CDF_CLAMP)).collect();
    let mut sum = 0.0;
    for i in 0..n {
        let weight = (2 * i + 1) as f64;
        sum += weight * (probs[i].ln() + (1.0 - probs[n - 1 - i]).ln());
    }
    -(n as f64) - sum / n as f64
}

/// Piecewise p-value for the adjusted statistic A²*.
pub fn ad_p_value(a: f64) -> f64 {
    let p = if a >= 0.6 {
        (1.2937 - 5.709 * a + 0.0186 * a * a).exp()
    } else if a >= 0.34 {
        (0.9177 - 4.279 * a - 1.38 * a * a).exp()
    } else if a > 0.2 {
        1.0 - (-8.318 + 42.796 * a - 59.938 * a * a).exp()
    } else {
        1.0 - (-13.436 + 101.14 * a - 223.73 * a * a).exp()
    };
    p.clamp(0.0, 1.0)
}
