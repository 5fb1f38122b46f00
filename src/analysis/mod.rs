//! analysis — one-call orchestration of every sample diagnostic.
//!
//! Purpose
//! -------
//! Tie the numerical subtrees together: validate a [`Sample`] and an
//! [`AnalysisOptions`], run every independent metric once, and return an
//! [`AnalysisReport`].
//!
//! Key behaviors
//! -------------
//! - [`run_analysis`] fails fast on invalid options or samples that are too
//!   short / constant, and otherwise never fails on estimator-level
//!   degeneracy: those surface as `NaN` / `None` in the report.
//! - Stage outcomes and degraded estimators are logged through the
//!   configured `slog::Logger`; the default logger discards everything.
//! - With feature `obs_slog`, [`term_logger`] provides a ready terminal
//!   drain.
//!
//! Conventions
//! -----------
//! - Errors from every subtree are wrapped in [`AnalysisError`].
//! - Numerical modules never log; logging happens only here.
//!
//! Downstream usage
//! ----------------
//! - Rust callers build a `Sample` (directly or via `Sample::parse`) and call
//!   `run_analysis(&sample, &AnalysisOptions::default())`.
//! - The Python `analyze` function is a thin wrapper over `run_analysis`.
//!
//! [`Sample`]: crate::sample::Sample

pub mod errors;
#[cfg(feature = "obs_slog")]
pub mod logging;
pub mod options;
pub mod pipeline;
pub mod report;

pub use self::errors::{AnalysisError, AnalysisResult};
#[cfg(feature = "obs_slog")]
pub use self::logging::term_logger;
pub use self::options::{AnalysisOptions, DEFAULT_LJUNG_BOX_LAGS, discard_logger};
pub use self::pipeline::run_analysis;
pub use self::report::AnalysisReport;
