//! descriptive::summary — moments and percentile summary of a sample.
//!
//! Purpose
//! -------
//! Compute [`SummaryStats`] for a [`Sample`]: count, mean, sample variance,
//! bias-corrected skewness and excess kurtosis, extrema, and the
//! 5/25/50/75/95 percentiles.
//!
//! Key behaviors
//! -------------
//! - Mean and variance use Welford's single-pass recurrence, which stays
//!   accurate for large-offset data with small relative spread.
//! - Variance uses the (n − 1) divisor for n > 1 and is 0 for n = 1.
//! - Percentiles are linear-interpolation quantiles on a sorted copy.
//!
//! Invariants & assumptions
//! ------------------------
//! - `min <= p5 <= p25 <= median <= p75 <= p95 <= max`.
//! - Skewness is 0 when n < 3 or the standard deviation is 0; kurtosis is 0
//!   when n < 4 or the standard deviation is 0.
//!
//! Conventions
//! -----------
//! - Skewness G1 = g1 · √(n(n − 1)) / (n − 2) with g1 = m3 / m2^{3/2}.
//! - Excess kurtosis G2 = (n − 1) / ((n − 2)(n − 3)) · ((n + 1) m4 / m2² − 3(n − 1)).
//! - m2, m3, m4 are population (divide-by-n) central moments.
use crate::descriptive::quantile::quantile;
use crate::sample::{Sample, SampleError, SampleResult};

/// Percentile summary and moments of a sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryStats {
    pub count: usize,
    pub mean: f64,
    pub variance: f64,
    pub std_dev: f64,
    pub median: f64,
    pub skewness: f64,
    pub kurtosis: f64,
    pub min: f64,
    pub max: f64,
    pub p5: f64,
    pub p25: f64,
    pub p50: f64,
    pub p75: f64,
    pub p95: f64,
}

/// Welford running mean and sum of squared deviations.
///
/// Returns `(mean, m2_sum)` where `m2_sum = Σ(x − mean)²`.
pub fn welford(values: &[f64]) -> (f64, f64) {
    let mut mean = 0.0;
    let mut m2_sum = 0.0;
    for (i, &x) in values.iter().enumerate() {
        let delta = x - mean;
        mean += delta / (i + 1) as f64;
        m2_sum += delta * (x - mean);
    }
    (mean, m2_sum)
}

/// Compute the summary statistics of `sample`.
///
/// Parameters
/// ----------
/// - `sample`: `&Sample`
///   Non-empty sample.
///
/// Returns
/// -------
/// `SampleResult<SummaryStats>`
///
/// Errors
/// ------
/// - `SampleError::EmptyInput` when the sample is empty.
///
/// Examples
/// --------
/// ```rust
/// # use rust_diagnostics::sample::Sample;
/// # use rust_diagnostics::descriptive::compute_summary_stats;
/// let stats = compute_summary_stats(&Sample::from_vec(vec![1.0, 2.0, 3.0]).unwrap()).unwrap();
/// assert_eq!(stats.median, 2.0);
/// assert_eq!(stats.variance, 1.0);
/// ```
pub fn compute_summary_stats(sample: &Sample) -> SampleResult<SummaryStats> {
    if sample.is_empty() {
        return Err(SampleError::EmptyInput);
    }
    let values = sample.as_slice();
    let count = values.len();
    let n = count as f64;

    let (mean, m2_sum) = welford(values);
    let variance = if count > 1 { m2_sum / (n - 1.0) } else { 0.0 };
    let std_dev = variance.sqrt();
    let (skewness, kurtosis) = shape_moments(values, mean, std_dev);

    let sorted = sample.sorted();
    Ok(SummaryStats {
        count,
        mean,
        variance,
        std_dev,
        median: quantile(&sorted, 0.5),
        skewness,
        kurtosis,
        min: sorted[0],
        max: sorted[count - 1],
        p5: quantile(&sorted, 0.05),
        p25: quantile(&sorted, 0.25),
        p50: quantile(&sorted, 0.5),
        p75: quantile(&sorted, 0.75),
        p95: quantile(&sorted, 0.95),
    })
}

/// Bias-corrected skewness and excess kurtosis.
fn shape_moments(values: &[f64], mean: f64, std_dev: f64) -> (f64, f64) {
    let count = values.len();
    if count < 3 || std_dev == 0.0 {
        return (0.0, 0.0);
    }
    let n = count as f64;
    let (mut m2, mut m3, mut m4) = (0.0, 0.0, 0.0);
    // Standardized deviations keep the fourth power in range for large-scale data.
    for &x in values {
        let d = (x - mean) / std_dev;
        let d2 = d * d;
        m2 += d2;
        m3 += d2 * d;
        m4 += d2 * d2;
    }
    m2 /= n;
    m3 /= n;
    m4 /= n;
    if m2 == 0.0 {
        return (0.0, 0.0);
    }

    let g1 = m3 / m2.powf(1.5);
    let skewness = g1 * (n * (n - 1.0)).sqrt() / (n - 2.0);
    let kurtosis = if count < 4 {
        0.0
    } else {
        (n - 1.0) / ((n - 2.0) * (n - 3.0)) * ((n + 1.0) * m4 / (m2 * m2) - 3.0 * (n - 1.0))
    };
    (skewness, kurtosis)
}
