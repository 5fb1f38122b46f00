//! optimization::errors — error surface for the one-dimensional search layer.
//!
//! Purpose
//! -------
//! Normalize configuration mistakes, non-finite objective values and
//! backend (`argmin`) errors raised by user objectives into one enum,
//! [`OptError`], with a result alias [`OptResult<T>`].
//!
//! Conventions
//! -----------
//! - Objectives implement `argmin::core::CostFunction`, whose error type is
//!   `argmin::core::Error`. Errors flowing back out of an objective are
//!   converted with `From<Error> for OptError`; an `OptError` that was
//!   boxed into an `argmin` error on the way in is recovered unchanged.
//! - Messages are phrased in terms of the violated constraint
//!   ("tolerance must be positive and finite").
use argmin::core::{ArgminError, Error};

/// Crate-wide result alias for optimizer operations.
pub type OptResult<T> = Result<T, OptError>;

#[derive(Debug, Clone, PartialEq)]
pub enum OptError {
    // ---- Search configuration ----
    /// Bracket endpoints must be finite with `lower < upper`.
    InvalidBracket { lower: f64, upper: f64 },
    /// Bracket tolerance needs to be positive and finite.
    InvalidTolerance { tol: f64, reason: &'static str },

    // ---- Cost function ----
    /// Objective returned a non-finite value at `x`.
    NonFiniteCost { x: f64, value: f64 },

    // ---- Termination ----
    /// The bracket stopped shrinking before reaching the tolerance
    /// (floating-point resolution of the endpoints).
    IterationLimit { iterations: usize, width: f64 },

    // ---- Argmin ---
    /// Wrapper for argmin::InvalidParameter
    InvalidParameter { text: String },
    /// Any other error raised inside an objective
    BackendError { text: String },
}

impl std::error::Error for OptError {}

impl std::fmt::Display for OptError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Search configuration ----
            OptError::InvalidBracket { lower, upper } => {
                write!(f, "Invalid bracket [{lower}, {upper}]: endpoints must be finite with lower < upper")
            }
            OptError::InvalidTolerance { tol, reason } => {
                write!(f, "Invalid bracket tolerance {tol}: {reason}")
            }

            // ---- Cost function ----
            OptError::NonFiniteCost { x, value } => {
                write!(f, "Non-finite cost value {value} at x = {x}")
            }

            // ---- Termination ----
            OptError::IterationLimit { iterations, width } => {
                write!(f, "Bracket did not shrink below tolerance after {iterations} iterations (width {width})")
            }

            // ---- Argmin ----
            OptError::InvalidParameter { text } => {
                write!(f, "Invalid parameter: {text}")
            }
            OptError::BackendError { text } => {
                write!(f, "Backend error: {text}")
            }
        }
    }
}

impl From<Error> for OptError {
    fn from(original_err: Error) -> Self {
        let original_err = match original_err.downcast::<OptError>() {
            Ok(opt_err) => return opt_err,
            Err(err) => err,
        };
        match original_err.downcast::<ArgminError>() {
            Ok(ArgminError::InvalidParameter { text }) => OptError::InvalidParameter { text },
            Ok(other) => OptError::BackendError { text: other.to_string() },
            Err(err) => OptError::BackendError { text: err.to_string() },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // An OptError boxed into an argmin error by an objective comes back out
    // unchanged.
    fn opt_error_round_trips_through_argmin_error() {
        // Arrange
        let err = OptError::NonFiniteCost { x: 1.0, value: f64::INFINITY };
        let boxed: Error = err.clone().into();

        // Act
        let recovered = OptError::from(boxed);

        // Assert
        assert_eq!(recovered, err);
    }

    #[test]
    // Purpose
    // -------
    // InvalidParameter maps onto its OptError wrapper; every other argmin
    // variant and foreign errors land in BackendError with their message.
    fn argmin_and_foreign_errors_are_wrapped() {
        let argmin_err: Error =
            ArgminError::InvalidParameter { text: "bad bound".to_string() }.into();
        assert_eq!(
            OptError::from(argmin_err),
            OptError::InvalidParameter { text: "bad bound".to_string() }
        );

        let unexpected: Error = ArgminError::NotInitialized { text: "state".to_string() }.into();
        match OptError::from(unexpected) {
            OptError::BackendError { text } => assert!(text.contains("state"), "got: {text}"),
            other => panic!("expected BackendError, got {other:?}"),
        }

        let foreign: Error = Error::msg("objective exploded");
        match OptError::from(foreign) {
            OptError::BackendError { text } => assert!(text.contains("objective exploded")),
            other => panic!("expected BackendError, got {other:?}"),
        }
    }

    #[test]
    // Purpose
    // -------
    // Display messages embed the offending values.
    fn display_embeds_payload() {
        let msg = OptError::InvalidTolerance { tol: -0.5, reason: "must be positive" }.to_string();
        assert!(msg.contains("-0.5"), "got: {msg}");
        let msg = OptError::InvalidBracket { lower: 3.0, upper: 1.0 }.to_string();
        assert!(msg.contains('3') && msg.contains('1'), "got: {msg}");
    }
}
