//! Jarque-Bera normality test.
//!
//! JB = (n / 6) · (S² + K² / 4) with S the bias-corrected skewness and K the
//! bias-corrected excess kurtosis from
//! [`compute_summary_stats`](crate::descriptive::compute_summary_stats).
//! Under normality JB ~ χ²(2), so p = 1 − χ²_cdf(JB, 2).
use crate::descriptive::{SummaryStats, compute_summary_stats};
use crate::sample::Sample;
use crate::special::chi2_cdf;
use crate::statistical_tests::errors::TestResult;
use crate::statistical_tests::outcome::StatisticalTest;
use crate::statistical_tests::validation::{require_observations, validate_alpha};

pub const JARQUE_BERA: &str = "Jarque-Bera";

/// Run the Jarque-Bera test on `sample`.
///
/// Errors
/// ------
/// - `TestError::InvalidAlpha` for α ∉ (0, 1).
/// - `TestError::InsufficientData` for an empty sample.
pub fn jarque_bera_test(sample: &Sample, alpha: f64) -> TestResult<StatisticalTest> {
    validate_alpha(alpha)?;
    require_observations(JARQUE_BERA, sample.len(), 1)?;
    let stats = compute_summary_stats(sample)?;
    jarque_bera_from_summary(&stats, alpha)
}

/// Jarque-Bera from precomputed summary statistics.
pub fn jarque_bera_from_summary(stats: &SummaryStats, alpha: f64) -> TestResult<StatisticalTest> {
    validate_alpha(alpha)?;
    let n = stats.count as f64;
    let s = stats.skewness;
    let k = stats.kurtosis;
    let jb = n / 6.0 * (s * s + k * k / 4.0);
    StatisticalTest::new(JARQUE_BERA, jb, 1.0 - chi2_cdf(jb, 2.0), alpha, None)
}
