//! Linear-interpolation quantiles on sorted data.

/// Quantile of ascending `sorted` data at fraction `p`.
///
/// The position is `p · (n − 1)`; values at the neighbouring order
/// statistics are interpolated linearly.
///
/// # Parameters
/// - `sorted`: ascending, finite values
/// - `p`: fraction in `[0, 1]`
///
/// # Returns
/// - The interpolated quantile; `NaN` when `sorted` is empty or `p` lies
///   outside `[0, 1]`.
pub fn quantile(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() || !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    let pos = p * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + frac * (sorted[hi] - sorted[lo])
}

/// Median of ascending `sorted` data (the 0.5 quantile).
pub fn median(sorted: &[f64]) -> f64 {
    quantile(sorted, 0.5)
}
