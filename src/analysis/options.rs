//! analysis::options — configuration of a full diagnostics run.
//!
//! Purpose
//! -------
//! Collect every knob of [`run_analysis`](crate::analysis::run_analysis) in
//! one validated value so call sites pass explicit configuration instead of
//! loose arguments.
//!
//! Key behaviors
//! -------------
//! - [`AnalysisOptions::default`] matches the documented defaults
//!   (α = 0.05, 20 lags, window 20, threshold 0, ν ∈ [2, 50] with tol 0.1,
//!   10 Ljung-Box lags, discarding logger).
//! - [`AnalysisOptions::new`] validates the three most common knobs; the
//!   `with_*` builders override the rest and [`AnalysisOptions::validate`]
//!   re-checks everything.
//!
//! Invariants & assumptions
//! ------------------------
//! - `0 < alpha < 1`, `max_lag ≥ 1`, `rolling_window ≥ 1`,
//!   `ljung_box_lags ≥ 1`, finite `risk_threshold`, and a Student-t search
//!   with finite `0 < lower < upper` and positive finite `tol`.
//! - `ljung_box_lags` is capped at n − 1 at run time, not here.
use slog::{Discard, Logger, o};

use crate::analysis::errors::{AnalysisError, AnalysisResult};
use crate::distributions::StudentTSearch;
use crate::statistical_tests::DEFAULT_ALPHA;
use crate::timeseries::{DEFAULT_MAX_LAG, DEFAULT_ROLLING_WINDOW};

/// Default number of Ljung-Box lags.
pub const DEFAULT_LJUNG_BOX_LAGS: usize = 10;

/// AnalysisOptions — configuration for [`run_analysis`](crate::analysis::run_analysis).
///
/// Fields
/// ------
/// - `alpha`: significance level of every test.
/// - `max_lag`: ACF / PACF lags.
/// - `rolling_window`: window of the rolling statistics.
/// - `risk_threshold`: target return for downside deviation and Sortino.
/// - `student_t`: ν search of the Student-t fit.
/// - `ljung_box_lags`: lags of both Ljung-Box tests.
/// - `logger`: structured logger for stage outcomes.
#[derive(Debug, Clone)]
pub struct AnalysisOptions {
    pub alpha: f64,
    pub max_lag: usize,
    pub rolling_window: usize,
    pub risk_threshold: f64,
    pub student_t: StudentTSearch,
    pub ljung_box_lags: usize,
    pub logger: Logger,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        AnalysisOptions {
            alpha: DEFAULT_ALPHA,
            max_lag: DEFAULT_MAX_LAG,
            rolling_window: DEFAULT_ROLLING_WINDOW,
            risk_threshold: 0.0,
            student_t: StudentTSearch::default(),
            ljung_box_lags: DEFAULT_LJUNG_BOX_LAGS,
            logger: discard_logger(),
        }
    }
}

impl AnalysisOptions {
    /// Defaults with explicit α, lag count, and rolling window.
    ///
    /// Errors
    /// ------
    /// - `AnalysisError::InvalidOption` naming the first invalid field.
    pub fn new(alpha: f64, max_lag: usize, rolling_window: usize) -> AnalysisResult<Self> {
        let opts = AnalysisOptions { alpha, max_lag, rolling_window, ..Default::default() };
        opts.validate()?;
        Ok(opts)
    }

    pub fn with_risk_threshold(mut self, threshold: f64) -> Self {
        self.risk_threshold = threshold;
        self
    }

    pub fn with_student_t_search(mut self, search: StudentTSearch) -> Self {
        self.student_t = search;
        self
    }

    pub fn with_ljung_box_lags(mut self, lags: usize) -> Self {
        self.ljung_box_lags = lags;
        self
    }

    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = logger;
        self
    }

    /// Check every field.
    pub fn validate(&self) -> AnalysisResult<()> {
        let invalid = |option, reason| Err(AnalysisError::InvalidOption { option, reason });
        if !(self.alpha > 0.0 && self.alpha < 1.0) {
            return invalid("alpha", "must lie in (0, 1)");
        }
        if self.max_lag == 0 {
            return invalid("max_lag", "must be at least 1");
        }
        if self.rolling_window == 0 {
            return invalid("rolling_window", "must be at least 1");
        }
        if self.ljung_box_lags == 0 {
            return invalid("ljung_box_lags", "must be at least 1");
        }
        if !self.risk_threshold.is_finite() {
            return invalid("risk_threshold", "must be finite");
        }
        let StudentTSearch { lower, upper, tol } = self.student_t;
        if !(lower.is_finite() && upper.is_finite() && lower > 0.0 && lower < upper) {
            return invalid("student_t", "bracket must satisfy 0 < lower < upper");
        }
        if !(tol.is_finite() && tol > 0.0) {
            return invalid("student_t", "tolerance must be positive and finite");
        }
        Ok(())
    }
}

/// Logger that drops every record.
pub fn discard_logger() -> Logger {
    Logger::root(Discard, o!())
}
