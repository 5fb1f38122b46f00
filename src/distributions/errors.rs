//! Errors for maximum-likelihood distribution fitting.
//!
//! [`FitError`] covers the two ways a fit can fail: not enough data for
//! the family, and a degenerate sample (zero scale) for which the
//! likelihood is unbounded. Failures of the Student-t ν search surface as
//! [`FitError::Optimization`], converted from
//! [`OptError`](crate::optimization::errors::OptError).
use crate::optimization::errors::OptError;

pub type FitResult<T> = Result<T, FitError>;

#[derive(Debug, Clone, PartialEq)]
pub enum FitError {
    /// Family needs more observations than the sample holds.
    InsufficientData { family: &'static str, required: usize, actual: usize },

    /// Sample has zero spread where the family needs a positive scale.
    Degenerate { family: &'static str, reason: &'static str },

    /// The degrees-of-freedom search failed.
    Optimization(OptError),
}

impl std::error::Error for FitError {}

impl std::fmt::Display for FitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FitError::InsufficientData { family, required, actual } => {
                write!(f, "{family} fit needs at least {required} observations, got {actual}.")
            }
            FitError::Degenerate { family, reason } => {
                write!(f, "{family} fit is degenerate: {reason}.")
            }
            FitError::Optimization(err) => write!(f, "Degrees-of-freedom search failed: {err}"),
        }
    }
}

impl From<OptError> for FitError {
    fn from(err: OptError) -> FitError {
        FitError::Optimization(err)
    }
}

/// Require `required` observations for `family`.
pub(crate) fn require_fit_len(
    family: &'static str, actual: usize, required: usize,
) -> FitResult<()> {
    if actual < required {
        return Err(FitError::InsufficientData { family, required, actual });
    }
    Ok(())
}
