//! analysis::errors — unified error surface of the analysis pipeline.
//!
//! Purpose
//! -------
//! Wrap the error types of every subtree in one enum, [`AnalysisError`],
//! so that `run_analysis` can use `?` throughout and callers (Rust or
//! Python) see one type.
//!
//! Conventions
//! -----------
//! - Each wrapped error keeps its own `Display` message.
//! - Option validation failures name the offending option.
//! - At the Python boundary all variants become `ValueError`.
use crate::distributions::FitError;
use crate::optimization::errors::OptError;
use crate::sample::SampleError;
use crate::statistical_tests::TestError;
use crate::tails::TailError;
use crate::timeseries::TsError;

#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

pub type AnalysisResult<T> = Result<T, AnalysisError>;

#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisError {
    // ---- Configuration ----
    /// An [`AnalysisOptions`](crate::analysis::AnalysisOptions) field is invalid.
    InvalidOption { option: &'static str, reason: &'static str },

    // ---- Wrapped subtree errors ----
    Sample(SampleError),
    Fit(FitError),
    Test(TestError),
    Tail(TailError),
    TimeSeries(TsError),
}

impl std::error::Error for AnalysisError {}

impl std::fmt::Display for AnalysisError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisError::InvalidOption { option, reason } => {
                write!(f, "Invalid option `{option}`: {reason}.")
            }
            AnalysisError::Sample(err) => write!(f, "Sample error: {err}"),
            AnalysisError::Fit(err) => write!(f, "Fit error: {err}"),
            AnalysisError::Test(err) => write!(f, "Test error: {err}"),
            AnalysisError::Tail(err) => write!(f, "Tail-risk error: {err}"),
            AnalysisError::TimeSeries(err) => write!(f, "Time-series error: {err}"),
        }
    }
}

impl From<SampleError> for AnalysisError {
    fn from(err: SampleError) -> Self {
        AnalysisError::Sample(err)
    }
}

impl From<FitError> for AnalysisError {
    fn from(err: FitError) -> Self {
        AnalysisError::Fit(err)
    }
}

impl From<OptError> for AnalysisError {
    fn from(err: OptError) -> Self {
        AnalysisError::Fit(FitError::Optimization(err))
    }
}

impl From<TestError> for AnalysisError {
    fn from(err: TestError) -> Self {
        AnalysisError::Test(err)
    }
}

impl From<TailError> for AnalysisError {
    fn from(err: TailError) -> Self {
        AnalysisError::Tail(err)
    }
}

impl From<TsError> for AnalysisError {
    fn from(err: TsError) -> Self {
        AnalysisError::TimeSeries(err)
    }
}

#[cfg(feature = "python-bindings")]
impl From<AnalysisError> for PyErr {
    fn from(err: AnalysisError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
