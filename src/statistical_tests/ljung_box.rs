//! Ljung-Box portmanteau test for serial correlation.
//!
//! Q = n (n + 2) Σ_{k=1}^{h} r_k² / (n − k), with r_k the divide-by-n sample
//! autocorrelations from [`autocorrelations`]. Under the null of no serial
//! correlation Q ~ χ²(h), so p = 1 − χ²_cdf(Q, h).
//!
//! Applied to returns it checks for linear dependence; applied to squared
//! returns it checks for volatility clustering.
use crate::sample::Sample;
use crate::special::chi2_cdf;
use crate::statistical_tests::errors::TestResult;
use crate::statistical_tests::outcome::StatisticalTest;
use crate::statistical_tests::validation::{validate_alpha, validate_lags};
use crate::timeseries::acf::autocorrelations;

pub const LJUNG_BOX: &str = "Ljung-Box";

/// Run the Ljung-Box test with `lags` autocorrelations.
///
/// Errors
/// ------
/// - `TestError::InvalidAlpha` for α ∉ (0, 1).
/// - `TestError::InvalidLags` unless 1 ≤ `lags` < n.
pub fn ljung_box_test(sample: &Sample, lags: usize, alpha: f64) -> TestResult<StatisticalTest> {
    validate_alpha(alpha)?;
    validate_lags(lags, sample.len())?;
    let q = ljung_box_statistic(sample.as_slice(), lags);
    StatisticalTest::new(LJUNG_BOX, q, 1.0 - chi2_cdf(q, lags as f64), alpha, None)
}

/// Q statistic over lags 1..=`lags` (caller guarantees `lags < n`).
pub fn ljung_box_statistic(values: &[f64], lags: usize) -> f64 {
    let n = values.len() as f64;
    let sum: f64 = autocorrelations(values, lags)
        .iter()
        .enumerate()
        .map(|(i, r)| r * r / (n - (i + 1) as f64))
        .sum();
    n * (n + 2.0) * sum
}
