//! Historical Value-at-Risk and Conditional Value-at-Risk.
//!
//! Losses are reported with a positive sign (loss convention): for a
//! sample of returns, VaR(c) = −x₍ᵢ₎ with i = ⌊(1 − c) n⌋ on the ascending
//! sort, and CVaR(c) = −mean(x₍₀₎ … x₍ᵢ₋₁₎), the average of the outcomes
//! strictly worse than the VaR point. When i = 0 only the worst point is in
//! the tail and CVaR equals VaR.
use crate::sample::Sample;
use crate::tails::errors::{TailError, TailResult};

fn tail_index(n: usize, confidence: f64) -> TailResult<usize> {
    if !(confidence > 0.0 && confidence < 1.0) {
        return Err(TailError::InvalidConfidence(confidence));
    }
    if n == 0 {
        return Err(TailError::EmptyInput);
    }
    let idx = ((1.0 - confidence) * n as f64).floor() as usize;
    Ok(idx.min(n - 1))
}

/// VaR at `confidence` from an ascending `sorted` sample.
pub fn var_sorted(sorted: &[f64], confidence: f64) -> TailResult<f64> {
    let idx = tail_index(sorted.len(), confidence)?;
    Ok(-sorted[idx])
}

/// CVaR (expected shortfall) at `confidence` from an ascending sample.
pub fn cvar_sorted(sorted: &[f64], confidence: f64) -> TailResult<f64> {
    let idx = tail_index(sorted.len(), confidence)?;
    if idx == 0 {
        return Ok(-sorted[0]);
    }
    let tail = &sorted[..idx];
    Ok(-tail.iter().sum::<f64>() / idx as f64)
}

/// Historical VaR of `sample` at `confidence` (e.g. 0.95).
///
/// Errors
/// ------
/// - `TailError::InvalidConfidence` unless 0 < c < 1.
/// - `TailError::EmptyInput` for an empty sample.
pub fn value_at_risk(sample: &Sample, confidence: f64) -> TailResult<f64> {
    var_sorted(&sample.sorted(), confidence)
}

/// Historical CVaR of `sample` at `confidence`. Errors as [`value_at_risk`].
pub fn conditional_value_at_risk(sample: &Sample, confidence: f64) -> TailResult<f64> {
    cvar_sorted(&sample.sorted(), confidence)
}
