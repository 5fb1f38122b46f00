//! distributions — maximum-likelihood fits and model comparison.
//!
//! Purpose
//! -------
//! Fit Normal, Laplace, and Student-t distributions to a [`Sample`] and
//! compare them by AIC / BIC.
//!
//! Key behaviors
//! -------------
//! - [`fit_normal`] and [`fit_laplace`] are closed-form MLEs.
//! - [`fit_student_t`] profiles ν by golden-section search on the
//!   standardized sample (see [`student_t`]).
//! - [`DistributionFit`] evaluates pdf / cdf / log-likelihood for the
//!   goodness-of-fit tests.
//! - [`compare_fits`] ranks the three families by AIC.
//!
//! Conventions
//! -----------
//! - Errors are [`FitError`] / [`FitResult`]; optimizer failures are
//!   wrapped, not flattened.
//! - Sentinels: `-∞` log-likelihood for impossible data and
//!   [`LOG_PDF_PENALTY`] inside the ν search.
//!
//! Testing notes
//! -------------
//! - Densities are checked against `statrs`; ν recovery and the Normal
//!   fit use seeded `rand` / `rand_distr` draws.
//!
//! [`Sample`]: crate::sample::Sample

pub mod closed_form;
pub mod comparison;
pub mod errors;
pub mod fit;
pub mod student_t;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::closed_form::{fit_laplace, fit_normal};
pub use self::comparison::{FitComparison, compare_fits, compare_fits_with, rank_fits};
pub use self::errors::{FitError, FitResult};
pub use self::fit::DistributionFit;
pub use self::student_t::{
    LOG_PDF_PENALTY, StudentTObjective, StudentTSearch, fit_student_t, fit_student_t_with,
};
