//! special — scalar special functions behind every probabilistic computation.
//!
//! Purpose
//! -------
//! Provide the closed-form and series approximations used throughout the
//! crate: error function and its inverse, standard normal CDF / PDF /
//! quantile, log-gamma, regularized incomplete beta and gamma functions,
//! Student-t CDF / PDF / quantile, and the χ² CDF.
//!
//! Key behaviors
//! -------------
//! - Every function is a pure `f64 -> f64` map with a documented accuracy.
//! - Out-of-domain inputs return `f64::NAN` instead of an error (e.g.
//!   [`erf_inv`] outside [-1, 1], [`norm_inv`] / [`t_inv`] outside (0, 1),
//!   [`ln_gamma`] at non-positive integers).
//!
//! Invariants & assumptions
//! ------------------------
//! - `erf(-x) == -erf(x)` exactly and `erf(0) == 0`, so `norm_cdf(0) == 0.5`.
//! - Iterative routines ([`beta_inc`], [`gamma_p`]) always terminate after a
//!   fixed iteration budget; they never loop on pathological input.
//!
//! Conventions
//! -----------
//! - NaN is the sentinel for "undefined here". These helpers sit inside
//!   optimization loops and goodness-of-fit statistics where raising would
//!   interrupt the search, so callers check `is_nan()` where it matters.
//! - Degrees of freedom are `f64` so that fractional ν from the Student-t
//!   fit can be passed through unchanged.
//!
//! Downstream usage
//! ----------------
//! - `distributions` evaluates fitted densities through [`norm_pdf`] and
//!   [`t_pdf`].
//! - `statistical_tests` turns statistics into p-values via [`norm_cdf`] and
//!   [`chi2_cdf`].
//!
//! Testing notes
//! -------------
//! - Each submodule checks closed-form values, symmetry, and agreement with
//!   `statrs` as an independent oracle within the stated error bounds.

pub mod beta;
pub mod erf;
pub mod gamma;
pub mod student_t;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::beta::beta_inc;
pub use self::erf::{erf, erf_inv, erfc, norm_cdf, norm_inv, norm_pdf};
pub use self::gamma::{chi2_cdf, gamma, gamma_p, ln_gamma};
pub use self::student_t::{t_cdf, t_inv, t_pdf};

/// Floor used by the modified Lentz continued fractions to avoid division
/// by zero.
pub(crate) const FPMIN: f64 = 1e-30;
