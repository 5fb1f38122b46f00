//! Path- and threshold-based risk: drawdown, downside deviation, Sortino.
//!
//! - Max drawdown compounds returns into a wealth path W₀ = 1,
//!   Wₜ₊₁ = Wₜ (1 + rₜ) of length n + 1 and reports the largest proportional
//!   decline from a running peak, with indices into that path.
//! - Downside deviation is √(Σ_{r<τ} (r − τ)² / n): shortfalls only, divided
//!   by the full sample size.
//! - Sortino is (mean − τ) / downside deviation, and 0 when the downside
//!   deviation is 0.

/// Largest peak-to-trough decline of the compounded path.
///
/// Fields
/// ------
/// - `max_drawdown`: (peak − trough) / peak, in [0, ∞).
/// - `peak_index`, `trough_index`: indices into the wealth path of length
///   n + 1 (index 0 is the initial wealth 1).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Drawdown {
    pub max_drawdown: f64,
    pub peak_index: usize,
    pub trough_index: usize,
}

/// Max drawdown of compounded `returns`. An empty series has no drawdown.
pub fn max_drawdown(returns: &[f64]) -> Drawdown {
    let mut wealth = 1.0;
    let mut peak = 1.0;
    let mut peak_at = 0;
    let mut best = Drawdown { max_drawdown: 0.0, peak_index: 0, trough_index: 0 };
    for (i, r) in returns.iter().enumerate() {
        wealth *= 1.0 + r;
        let idx = i + 1;
        if wealth > peak {
            peak = wealth;
            peak_at = idx;
        }
        let dd = (peak - wealth) / peak;
        if dd > best.max_drawdown {
            best = Drawdown { max_drawdown: dd, peak_index: peak_at, trough_index: idx };
        }
    }
    best
}

/// Downside deviation below `threshold`; `NaN` for no data.
pub fn downside_deviation(returns: &[f64], threshold: f64) -> f64 {
    if returns.is_empty() {
        return f64::NAN;
    }
    let shortfall: f64 = returns
        .iter()
        .filter(|&&r| r < threshold)
        .map(|r| (r - threshold) * (r - threshold))
        .sum();
    (shortfall / returns.len() as f64).sqrt()
}

/// Sortino ratio relative to `threshold`; `NaN` for no data.
pub fn sortino_ratio(returns: &[f64], threshold: f64) -> f64 {
    let dd = downside_deviation(returns, threshold);
    if dd.is_nan() {
        return f64::NAN;
    }
    if dd == 0.0 {
        return 0.0;
    }
    let mean = returns.iter().sum::<f64>() / returns.len() as f64;
    (mean - threshold) / dd
}
