//! tails — tail-risk metrics from the sorted sample.
//!
//! Purpose
//! -------
//! Quantify downside and tail behavior of a return-like sample: historical
//! VaR / CVaR at 95 % and 99 %, Hill indices of both tails, max drawdown,
//! downside deviation, and the Sortino ratio.
//!
//! Conventions
//! -----------
//! - VaR / CVaR use the loss sign convention (a 5 % loss reports 0.05).
//! - Insufficient tail data yields `NaN` (Hill); only an empty sample or an
//!   invalid confidence level is an error ([`TailError`]).
//!
//! Testing notes
//! -------------
//! - Unit tests pin index conventions on permutations of integers and
//!   recover the Pareto index from seeded draws.

pub mod drawdown;
pub mod errors;
pub mod hill;
pub mod var;

pub use self::drawdown::{Drawdown, downside_deviation, max_drawdown, sortino_ratio};
pub use self::errors::{TailError, TailResult};
pub use self::hill::{hill_index, hill_k, left_tail_index};
pub use self::var::{conditional_value_at_risk, value_at_risk};

use crate::sample::Sample;

/// Quantile and tail-index summary of a sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TailMetrics {
    pub var95: f64,
    pub var99: f64,
    pub cvar95: f64,
    pub cvar99: f64,
    pub hill_index: f64,
    pub left_tail_index: f64,
}

/// Compute [`TailMetrics`] for `sample`.
///
/// Errors
/// ------
/// - `TailError::EmptyInput` for an empty sample.
pub fn compute_tail_metrics(sample: &Sample) -> TailResult<TailMetrics> {
    let sorted = sample.sorted();
    Ok(TailMetrics {
        var95: var::var_sorted(&sorted, 0.95)?,
        var99: var::var_sorted(&sorted, 0.99)?,
        cvar95: var::cvar_sorted(&sorted, 0.95)?,
        cvar99: var::cvar_sorted(&sorted, 0.99)?,
        hill_index: hill::hill_index_sorted(&sorted),
        left_tail_index: left_tail_index(sample.as_slice()),
    })
}
