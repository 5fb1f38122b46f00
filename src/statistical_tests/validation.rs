//! statistical_tests::validation — shared input guards for test statistics.
//!
//! Purpose
//! -------
//! Centralize the checks every test repeats: the significance level, the
//! minimum sample size, and the portmanteau lag count.
//!
//! Conventions
//! -----------
//! - Guards perform no allocation and no I/O.
//! - A successful return is a guarantee that the corresponding
//!   precondition holds; test routines do not re-check it.
use crate::statistical_tests::errors::{TestError, TestResult};

/// Default significance level.
pub const DEFAULT_ALPHA: f64 = 0.05;

/// Require `0 < alpha < 1`.
///
/// Errors
/// ------
/// - `TestError::InvalidAlpha(alpha)` otherwise (NaN included).
pub fn validate_alpha(alpha: f64) -> TestResult<()> {
    if alpha > 0.0 && alpha < 1.0 {
        Ok(())
    } else {
        Err(TestError::InvalidAlpha(alpha))
    }
}

/// Require at least `required` observations for `test`.
pub fn require_observations(test: &'static str, actual: usize, required: usize) -> TestResult<()> {
    if actual < required {
        return Err(TestError::InsufficientData { test, required, actual });
    }
    Ok(())
}

/// Require `1 ≤ lags < n`.
pub fn validate_lags(lags: usize, n: usize) -> TestResult<()> {
    if lags == 0 || lags >= n {
        return Err(TestError::InvalidLags { lags, n });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover every error branch plus a success path of each guard.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Alpha must lie strictly inside (0, 1).
    //
    // Given
    // -----
    // - alpha ∈ {0, 1, -0.1, NaN} (invalid) and {0.05, 0.5} (valid).
    fn validate_alpha_accepts_open_unit_interval_only() {
        for bad in [0.0, 1.0, -0.1, f64::NAN] {
            assert!(matches!(validate_alpha(bad), Err(TestError::InvalidAlpha(_))), "{bad}");
        }
        assert!(validate_alpha(DEFAULT_ALPHA).is_ok());
        assert!(validate_alpha(0.5).is_ok());
    }

    #[test]
    // Purpose
    // -------
    // Observation and lag guards report the offending sizes.
    fn length_and_lag_guards() {
        assert_eq!(
            require_observations("JB", 0, 1),
            Err(TestError::InsufficientData { test: "JB", required: 1, actual: 0 })
        );
        assert!(require_observations("JB", 1, 1).is_ok());
        assert_eq!(validate_lags(0, 10), Err(TestError::InvalidLags { lags: 0, n: 10 }));
        assert_eq!(validate_lags(10, 10), Err(TestError::InvalidLags { lags: 10, n: 10 }));
        assert!(validate_lags(9, 10).is_ok());
    }
}
