//! Errors for tail-risk metrics.

pub type TailResult<T> = Result<T, TailError>;

#[derive(Debug, Clone, PartialEq)]
pub enum TailError {
    /// Quantile-based risk needs at least one observation.
    EmptyInput,

    /// Confidence level must lie in (0, 1).
    InvalidConfidence(f64),
}

impl std::error::Error for TailError {}

impl std::fmt::Display for TailError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TailError::EmptyInput => write!(f, "Tail metrics need at least one observation."),
            TailError::InvalidConfidence(c) => {
                write!(f, "Invalid confidence level: {c}. Must lie in (0, 1).")
            }
        }
    }
}
