//! descriptive — summary statistics and quantiles.
//!
//! Provides [`compute_summary_stats`] (Welford moments, bias-corrected
//! shape statistics, interpolated percentiles) and the [`quantile`] helper
//! shared with `distributions` and `tails`. Errors use
//! [`SampleError`](crate::sample::SampleError).

pub mod quantile;
pub mod summary;

pub use self::quantile::{median, quantile};
pub use self::summary::{SummaryStats, compute_summary_stats, welford};
