//! rust_diagnostics — sample diagnostics with optional Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the diagnostics pipeline to Python via the `_rust_diagnostics`
//! extension module.
//!
//! Key behaviors
//! -------------
//! - Re-export the numerical modules: `sample`, `special`, `optimization`,
//!   `descriptive`, `distributions`, `statistical_tests`, `tails`,
//!   `timeseries`, and the `analysis` orchestration layer.
//! - With feature `python-bindings`, define `analyze(data, alpha=0.05,
//!   max_lag=20, rolling_window=20) -> dict` and `parse_sample(text) ->
//!   list[float]` in the `_rust_diagnostics` module.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work lives in the inner modules; this file performs only
//!   FFI glue, input conversion, and error mapping.
//! - Python inputs are converted into a validated [`sample::Sample`] before
//!   any computation, so NaN / ±∞ are rejected at the boundary.
//!
//! Conventions
//! -----------
//! - Errors from core Rust code are converted to `ValueError` at the PyO3
//!   boundary; input of the wrong type raises `TypeError`.
//! - `NaN` entries in the returned dict mean "not computable for this
//!   sample" (e.g. the Hill index for n < 25); `None` marks skipped
//!   estimators.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code calls [`analysis::run_analysis`] or the individual
//!   module functions and can ignore the PyO3 items.
//! - The Python packaging layer imports `_rust_diagnostics` and wraps it in
//!   user-facing helpers.
//!
//! Testing notes
//! -------------
//! - Numerical behavior is covered by unit tests in the inner modules and by
//!   the end-to-end pipeline test under `tests/`.

pub mod analysis;
pub mod descriptive;
pub mod distributions;
pub mod optimization;
pub mod sample;
pub mod special;
pub mod statistical_tests;
pub mod tails;
pub mod timeseries;
pub mod utils;

#[cfg(feature = "python-bindings")]
use pyo3::{prelude::*, types::PyDict};

#[cfg(feature = "python-bindings")]
use crate::{
    analysis::{AnalysisError, AnalysisOptions, run_analysis},
    sample::Sample,
    utils::{extract_sample, report_to_dict},
};

/// Run the full diagnostics pipeline on a one-dimensional series.
///
/// Parameters
/// ----------
/// Called from Python as `analyze(data, alpha=0.05, max_lag=20,
/// rolling_window=20)`:
/// - `data`: `numpy.ndarray`, `pandas.Series`, or sequence of floats with at
///   least two distinct finite values.
/// - `alpha`: significance level in (0, 1).
/// - `max_lag`: ACF / PACF lags, at least 1.
/// - `rolling_window`: rolling window, at least 1.
///
/// Returns
/// -------
/// `dict` with keys `summary`, `fits`, `tests`, `tail`, `drawdown`,
/// `downside_deviation`, `sortino_ratio`, and `time_series`.
///
/// Errors
/// ------
/// - `TypeError` when `data` is not array-like.
/// - `ValueError` for non-finite data, invalid options, or samples that are
///   too short or constant.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    text_signature = "(data, /, alpha=0.05, max_lag=20, rolling_window=20)",
    signature = (data, alpha = 0.05, max_lag = 20, rolling_window = 20)
)]
pub fn analyze<'py>(
    py: Python<'py>, data: &Bound<'py, PyAny>, alpha: f64, max_lag: usize, rolling_window: usize,
) -> PyResult<Bound<'py, PyDict>> {
    let sample = extract_sample(py, data)?;
    let opts = AnalysisOptions::new(alpha, max_lag, rolling_window)?;
    let report = py.allow_threads(|| run_analysis(&sample, &opts))?;
    report_to_dict(py, &report)
}

/// Parse free-form text into a list of finite floats.
///
/// Tokens are separated by whitespace, commas, or semicolons; tokens that
/// are not finite numbers are skipped.
///
/// Errors
/// ------
/// - `ValueError` when no numeric token is found.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(text_signature = "(text, /)")]
pub fn parse_sample(text: &str) -> PyResult<Vec<f64>> {
    let sample = Sample::parse(text).map_err(AnalysisError::from)?;
    Ok(sample.as_slice().to_vec())
}

#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_diagnostics(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(analyze, m)?)?;
    m.add_function(wrap_pyfunction!(parse_sample, m)?)?;
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    Ok(())
}
