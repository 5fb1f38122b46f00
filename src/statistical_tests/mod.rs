//! statistical_tests — goodness-of-fit, normality, and portmanteau tests.
//!
//! Purpose
//! -------
//! Collect the hypothesis tests run against a sample and its fitted
//! distributions, with a shared outcome record, input validation, and error
//! surface.
//!
//! Key behaviors
//! -------------
//! - [`jarque_bera_test`]: moment-based normality test, χ²(2) p-value.
//! - [`kolmogorov_smirnov_test`]: sup-distance to a fitted CDF, asymptotic
//!   Kolmogorov p-value.
//! - [`anderson_darling_test`]: tail-weighted distance with the
//!   D'Agostino-Stephens p-value.
//! - [`shapiro_wilk_test`]: approximate W (uniform coefficients), only for
//!   3 ≤ n ≤ 5000.
//! - [`ljung_box_test`]: serial-correlation portmanteau, χ²(h) p-value.
//!
//! Invariants & assumptions
//! ------------------------
//! - α is validated by [`validate_alpha`] before any computation.
//! - Every [`StatisticalTest`] has `0 <= p_value <= 1` and
//!   `reject_null == (p_value < alpha)`.
//! - Each test computes its own p-value from its own formula; no test calls
//!   another.
//!
//! Conventions
//! -----------
//! - Errors are [`TestError`] / [`TestResult`]; "not computed" is `Ok(None)`.
//!
//! Downstream usage
//! ----------------
//! - `analysis::run_analysis` runs KS and Anderson-Darling against the
//!   Normal fit and Ljung-Box on returns and squared returns.
//!
//! Testing notes
//! -------------
//! - Unit tests pin statistics on hand-computable inputs and check the
//!   p-value approximations at tabulated points.

pub mod anderson_darling;
pub mod errors;
pub mod jarque_bera;
pub mod kolmogorov_smirnov;
pub mod ljung_box;
pub mod outcome;
pub mod shapiro_wilk;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::anderson_darling::{AD_CRITICAL_5PCT, anderson_darling_test};
pub use self::errors::{TestError, TestResult};
pub use self::jarque_bera::{jarque_bera_from_summary, jarque_bera_test};
pub use self::kolmogorov_smirnov::kolmogorov_smirnov_test;
pub use self::ljung_box::ljung_box_test;
pub use self::outcome::StatisticalTest;
pub use self::shapiro_wilk::shapiro_wilk_test;
pub use self::validation::{DEFAULT_ALPHA, validate_alpha};

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::errors::{TestError, TestResult};
    pub use super::outcome::StatisticalTest;
    pub use super::{
        anderson_darling_test, jarque_bera_test, kolmogorov_smirnov_test, ljung_box_test,
        shapiro_wilk_test,
    };
}
