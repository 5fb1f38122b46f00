//! Errors for time-series diagnostics.

pub type TsResult<T> = Result<T, TsError>;

#[derive(Debug, Clone, PartialEq)]
pub enum TsError {
    /// Diagnostics need at least one observation.
    EmptyInput,

    /// Rolling windows must contain at least one observation.
    InvalidWindow(usize),
}

impl std::error::Error for TsError {}

impl std::fmt::Display for TsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TsError::EmptyInput => write!(f, "Time-series diagnostics need at least one observation."),
            TsError::InvalidWindow(w) => write!(f, "Invalid rolling window {w}. Must be ≥ 1."),
        }
    }
}
