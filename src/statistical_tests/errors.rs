//! statistical_tests::errors — error surface for hypothesis tests.
//!
//! Purpose
//! -------
//! Provide [`TestError`] and [`TestResult<T>`] for the goodness-of-fit and
//! portmanteau tests in this subtree.
//!
//! Key behaviors
//! -------------
//! - Precondition failures (bad α, too few observations, invalid lag
//!   count) are reported as typed variants carrying the offending value.
//! - A statistic that evaluates to NaN/±∞ (e.g. a test run against a
//!   zero-scale fit) is reported instead of producing a NaN p-value.
//! - `SampleError` from shared descriptive helpers converts via `From`.
//!
//! Conventions
//! -----------
//! - "Not computed" outcomes (Shapiro-Wilk outside its size range) are
//!   `Ok(None)`, not errors.
//! - Error messages are phrased in terms of the violated constraint
//!   ("alpha must lie in (0, 1)").
//!
//! Testing notes
//! -------------
//! - Unit tests check that `Display` embeds the payload of each variant.
use crate::sample::SampleError;

pub type TestResult<T> = Result<T, TestError>;

/// TestError — failures of hypothesis-test routines.
///
/// Variants
/// --------
/// - `InvalidAlpha(alpha)`: significance level outside (0, 1).
/// - `InsufficientData { test, required, actual }`: sample too short.
/// - `InvalidLags { lags, n }`: portmanteau lag count violates 1 ≤ h < n.
/// - `NonFiniteStatistic { test, value }`: statistic is NaN/±∞.
/// - `Sample(SampleError)`: error from shared descriptive statistics.
#[derive(Debug, Clone, PartialEq)]
pub enum TestError {
    InvalidAlpha(f64),
    InsufficientData { test: &'static str, required: usize, actual: usize },
    InvalidLags { lags: usize, n: usize },
    NonFiniteStatistic { test: &'static str, value: f64 },
    Sample(SampleError),
}

impl std::error::Error for TestError {}

impl std::fmt::Display for TestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TestError::InvalidAlpha(alpha) => {
                write!(f, "Invalid alpha: {alpha}. Must lie in (0, 1).")
            }
            TestError::InsufficientData { test, required, actual } => {
                write!(f, "{test} needs at least {required} observations, got {actual}.")
            }
            TestError::InvalidLags { lags, n } => {
                write!(f, "Invalid lag count {lags}. Must satisfy 1 ≤ h < n = {n}.")
            }
            TestError::NonFiniteStatistic { test, value } => {
                write!(f, "{test} statistic is not finite ({value}).")
            }
            TestError::Sample(err) => write!(f, "{err}"),
        }
    }
}

impl From<SampleError> for TestError {
    fn from(err: SampleError) -> TestError {
        TestError::Sample(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - `Display` formatting embeds each variant's payload.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Verify that `TestError::InvalidAlpha` includes the offending value.
    //
    // Given
    // -----
    // - alpha = 1.5.
    //
    // Expect
    // ------
    // - The message contains "1.5".
    fn invalid_alpha_includes_payload_in_display() {
        // Arrange
        let err = TestError::InvalidAlpha(1.5);

        // Act
        let msg = err.to_string();

        // Assert
        assert!(msg.contains("1.5"), "Display message should include alpha.\nGot: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Verify that lag errors report both the lag count and the sample size.
    fn invalid_lags_includes_lags_and_length() {
        let msg = TestError::InvalidLags { lags: 12, n: 9 }.to_string();
        assert!(msg.contains("12") && msg.contains('9'), "Got: {msg}");
    }

    #[test]
    // Purpose
    // -------
    // Sample errors keep their own message through the conversion.
    fn sample_error_converts_with_message() {
        let err: TestError = SampleError::EmptyInput.into();
        assert_eq!(err.to_string(), SampleError::EmptyInput.to_string());
    }
}
