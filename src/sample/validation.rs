//! Pre-analysis guards for a [`Sample`].
//!
//! Individual statistics tolerate short samples by returning `NaN` or
//! `None`; a full analysis run does not. These guards are applied once at
//! the entry point so that estimators downstream can assume a non-degenerate
//! sample.
use crate::descriptive::welford;
use crate::sample::data::Sample;
use crate::sample::errors::{SampleError, SampleResult};

/// Smallest sample a full analysis accepts.
pub const MIN_ANALYSIS_LEN: usize = 2;

/// Require at least `required` observations.
///
/// Errors
/// ------
/// - `SampleError::EmptyInput` when the sample is empty.
/// - `SampleError::InsufficientData` when `0 < len < required`.
pub fn require_len(sample: &Sample, required: usize) -> SampleResult<()> {
    if sample.is_empty() {
        return Err(SampleError::EmptyInput);
    }
    if sample.len() < required {
        return Err(SampleError::InsufficientData { required, actual: sample.len() });
    }
    Ok(())
}

/// Validate a sample before running the full diagnostics pipeline.
///
/// Parameters
/// ----------
/// - `sample`: `&Sample`
///   Candidate input.
///
/// Errors
/// ------
/// - `SampleError::EmptyInput` / `SampleError::InsufficientData`
///   Fewer than [`MIN_ANALYSIS_LEN`] observations.
/// - `SampleError::ConstantSample`
///   All observations are identical.
/// - `SampleError::DegenerateVariance`
///   The observations differ but their Welford variance is zero or
///   non-finite (magnitudes near the `f64` limits).
pub fn validate_for_analysis(sample: &Sample) -> SampleResult<()> {
    require_len(sample, MIN_ANALYSIS_LEN)?;
    let values = sample.as_slice();
    let first = values[0];
    if values.iter().all(|&v| v == first) {
        return Err(SampleError::ConstantSample { value: first });
    }
    let (_, m2_sum) = welford(values);
    let variance = m2_sum / (values.len() - 1) as f64;
    if !(variance.is_finite() && variance > 0.0) {
        return Err(SampleError::DegenerateVariance { variance });
    }
    Ok(())
}
