//! Trailing-window rolling statistics.
//!
//! Window positions are `values.windows(w)`, so the output has n − w + 1
//! entries (none when w > n) and entry i summarizes `values[i..i + w]`.
use crate::descriptive::welford;
use crate::timeseries::errors::{TsError, TsResult};

fn check_window(window: usize) -> TsResult<()> {
    if window == 0 {
        return Err(TsError::InvalidWindow(window));
    }
    Ok(())
}

/// Rolling mean over trailing windows of size `window`.
///
/// Errors
/// ------
/// - `TsError::InvalidWindow` for `window == 0`.
pub fn rolling_mean(values: &[f64], window: usize) -> TsResult<Vec<f64>> {
    check_window(window)?;
    Ok(values.windows(window).map(|w| w.iter().sum::<f64>() / window as f64).collect())
}

/// Rolling sample standard deviation (n − 1 divisor); a window of one
/// observation has deviation 0.
///
/// Errors
/// ------
/// - `TsError::InvalidWindow` for `window == 0`.
pub fn rolling_std(values: &[f64], window: usize) -> TsResult<Vec<f64>> {
    check_window(window)?;
    Ok(values
        .windows(window)
        .map(|w| {
            if window < 2 {
                return 0.0;
            }
            let (_, m2_sum) = welford(w);
            (m2_sum / (window - 1) as f64).sqrt()
        })
        .collect())
}
