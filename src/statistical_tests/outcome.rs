//! statistical_tests::outcome — the common hypothesis-test record.
//!
//! Purpose
//! -------
//! Represent the result of one hypothesis test uniformly so reports and
//! bindings can treat all tests alike.
//!
//! Invariants & assumptions
//! ------------------------
//! - `0 <= p_value <= 1` (the constructor clamps).
//! - `reject_null == (p_value < alpha)` for every test, Anderson-Darling
//!   included; its fixed 5 % critical value is carried in
//!   `critical_value` for reference only.
//! - `statistic` is finite; non-finite statistics are errors.
use crate::statistical_tests::errors::{TestError, TestResult};

/// StatisticalTest — outcome of a single hypothesis test.
///
/// Fields
/// ------
/// - `name`: test name used in reports.
/// - `statistic`: test statistic.
/// - `p_value`: p-value in [0, 1].
/// - `reject_null`: `p_value < alpha`.
/// - `alpha`: significance level the decision was made at.
/// - `critical_value`: tabulated critical value, when the test has one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatisticalTest {
    pub name: &'static str,
    pub statistic: f64,
    pub p_value: f64,
    pub reject_null: bool,
    pub alpha: f64,
    pub critical_value: Option<f64>,
}

impl StatisticalTest {
    /// Assemble a test outcome, clamping `p_value` to [0, 1] and deriving
    /// the rejection decision from it.
    ///
    /// Errors
    /// ------
    /// - `TestError::NonFiniteStatistic` when `statistic` or `p_value` is
    ///   NaN/±∞ (the latter reported with the statistic's value).
    pub(crate) fn new(
        name: &'static str, statistic: f64, p_value: f64, alpha: f64,
        critical_value: Option<f64>,
    ) -> TestResult<Self> {
        if !statistic.is_finite() || p_value.is_nan() {
            return Err(TestError::NonFiniteStatistic { test: name, value: statistic });
        }
        let p_value = p_value.clamp(0.0, 1.0);
        Ok(StatisticalTest {
            name,
            statistic,
            p_value,
            reject_null: p_value < alpha,
            alpha,
            critical_value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // The constructor clamps p and derives the decision from it.
    fn new_clamps_and_decides_from_p_value() {
        let low = StatisticalTest::new("T", 9.0, -1e-12, 0.05, None).unwrap();
        assert_eq!((low.p_value, low.reject_null), (0.0, true));

        let high = StatisticalTest::new("T", 0.1, 1.0 + 1e-9, 0.05, Some(0.787)).unwrap();
        assert_eq!((high.p_value, high.reject_null), (1.0, false));
        assert_eq!(high.critical_value, Some(0.787));

        let edge = StatisticalTest::new("T", 1.0, 0.05, 0.05, None).unwrap();
        assert!(!edge.reject_null);
    }

    #[test]
    // Purpose
    // -------
    // Non-finite statistics are rejected.
    fn new_rejects_non_finite_statistic() {
        assert!(matches!(
            StatisticalTest::new("T", f64::NAN, 0.5, 0.05, None),
            Err(TestError::NonFiniteStatistic { test: "T", .. })
        ));
    }
}
