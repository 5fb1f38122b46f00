//! Approximate Shapiro-Wilk normality test.
//!
//! Purpose
//! -------
//! Provide a W statistic and p-value in the shape of the Shapiro-Wilk
//! test for 3 ≤ n ≤ 5000.
//!
//! Key behaviors
//! -------------
//! - Coefficients are uniform, aᵢ = 1/√n, instead of the tabulated
//!   expected normal order statistics. W therefore differs from the
//!   canonical statistic and is much smaller on Gaussian data, so the test
//!   rejects far more often than the real Shapiro-Wilk. Treat it as a
//!   coarse heuristic.
//! - W = (Σ_{i<⌊n/2⌋} aᵢ (x₍ₙ₋₁₋ᵢ₎ − x₍ᵢ₎))² / Σ(x − x̄)², clamped to
//!   [0, 1 − 1e-12].
//! - p-value from Royston's normalizing transform of ln(1 − W):
//!   μ = 0.0038915 L³ − 0.083751 L² − 0.31082 L − 1.5861,
//!   σ = exp(0.0030302 L² − 0.082676 L − 0.4803), L = ln n,
//!   p = 1 − Φ((ln(1 − W) − μ) / σ).
//!
//! Invariants & assumptions
//! ------------------------
//! - Outside 3 ≤ n ≤ 5000 the test is not computed (`Ok(None)`).
use crate::sample::Sample;
use crate::special::norm_cdf;
use crate::statistical_tests::errors::TestResult;
use crate::statistical_tests::outcome::StatisticalTest;
use crate::statistical_tests::validation::validate_alpha;

pub const SHAPIRO_WILK: &str = "Shapiro-Wilk";

/// Smallest sample the test is computed for.
pub const SW_MIN_N: usize = 3;
/// Largest sample the test is computed for.
pub const SW_MAX_N: usize = 5000;

/// Upper clamp on W so that ln(1 − W) stays finite.
const W_MAX: f64 = 1.0 - 1e-12;

const ROYSTON_MU: [f64; 4] = [-1.5861, -0.31082, -0.083751, 0.0038915];
const ROYSTON_LN_SIGMA: [f64; 3] = [-0.4803, -0.082676, 0.0030302];

/// Run the approximate Shapiro-Wilk test.
///
/// Returns
/// -------
/// `TestResult<Option<StatisticalTest>>`
///   - `Ok(None)` when n ∉ [3, 5000].
///   - `Ok(Some(_))` with W as the statistic otherwise.
///
/// Errors
/// ------
/// - `TestError::InvalidAlpha` for α ∉ (0, 1), checked before the size
///   range.
/// - `TestError::NonFiniteStatistic` for a constant sample (SS = 0).
pub fn shapiro_wilk_test(sample: &Sample, alpha: f64) -> TestResult<Option<StatisticalTest>> {
    validate_alpha(alpha)?;
    let n = sample.len();
    if !(SW_MIN_N..=SW_MAX_N).contains(&n) {
        return Ok(None);
    }
    let w = sw_statistic(&sample.sorted());
    StatisticalTest::new(SHAPIRO_WILK, w, sw_p_value(w, n), alpha, None).map(Some)
}

/// Approximate W for ascending `sorted` data; `NaN` when SS = 0.
pub fn sw_statistic(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    let mean = sorted.iter().sum::<f64>() / n as f64;
    let ss: f64 = sorted.iter().map(|x| (x - mean) * (x - mean)).sum();
    if ss <= 0.0 {
        return f64::NAN;
    }
    let a = 1.0 / (n as f64).sqrt();
    let b: f64 = (0..n / 2).map(|i| a * (sorted[n - 1 - i] - sorted[i])).sum();
    (b * b / ss).clamp(0.0, W_MAX)
}

/// Royston upper-tail p-value of `w` for sample size `n`.
pub fn sw_p_value(w: f64, n: usize) -> f64 {
    let ln_n = (n as f64).ln();
    let mu = poly(&ROYSTON_MU, ln_n);
    let sigma = poly(&ROYSTON_LN_SIGMA, ln_n).exp();
    let z = ((1.0 - w.clamp(0.0, W_MAX)).ln() - mu) / sigma;
    1.0 - norm_cdf(z)
}

/// c[0] + c[1] x + c[2] x² + …
fn poly(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}
