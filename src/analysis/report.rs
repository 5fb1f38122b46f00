//! analysis::report — the value produced by one diagnostics run.
use crate::descriptive::SummaryStats;
use crate::distributions::{DistributionFit, FitComparison};
use crate::statistical_tests::StatisticalTest;
use crate::tails::{Drawdown, TailMetrics};
use crate::timeseries::TimeSeriesDiagnostics;

/// AnalysisReport — every independent metric of one sample.
///
/// Fields
/// ------
/// - `summary`: moments and percentiles.
/// - `fits`: Normal, Laplace and Student-t fits ranked by AIC (best first).
///   A family whose fit is degenerate on this sample is absent.
/// - `normal_fit`: the Normal fit used as reference by KS and AD.
/// - `jarque_bera`, `kolmogorov_smirnov`, `anderson_darling`: normality tests.
/// - `shapiro_wilk`: also `None` outside 3 ≤ n ≤ 5000.
/// - `ljung_box_returns`, `ljung_box_squared`: serial correlation of the
///   sample and of its squares, with lags capped at n − 1.
///
/// Every test field is `None` when its statistic is not finite for this
/// sample (e.g. squares that overflow).
/// - `tail`: VaR / CVaR and tail indices.
/// - `drawdown`, `downside_deviation`, `sortino_ratio`: downside risk relative
///   to the configured threshold.
/// - `time_series`: ACF / PACF, rolling statistics, AR(1), unit root.
#[derive(Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub summary: SummaryStats,
    pub fits: Vec<FitComparison>,
    pub normal_fit: DistributionFit,
    pub jarque_bera: Option<StatisticalTest>,
    pub kolmogorov_smirnov: Option<StatisticalTest>,
    pub anderson_darling: Option<StatisticalTest>,
    pub shapiro_wilk: Option<StatisticalTest>,
    pub ljung_box_returns: Option<StatisticalTest>,
    pub ljung_box_squared: Option<StatisticalTest>,
    pub tail: TailMetrics,
    pub drawdown: Drawdown,
    pub downside_deviation: f64,
    pub sortino_ratio: f64,
    pub time_series: TimeSeriesDiagnostics,
}

impl AnalysisReport {
    /// Fit with the lowest AIC.
    pub fn best_fit(&self) -> Option<&FitComparison> {
        self.fits.first()
    }

    /// All tests that ran, in report order.
    pub fn tests(&self) -> Vec<&StatisticalTest> {
        self.normality_tests()
            .chain([&self.ljung_box_returns, &self.ljung_box_squared].into_iter().flatten())
            .collect()
    }

    /// True when any normality test that ran rejects at its α.
    pub fn normality_rejected(&self) -> bool {
        self.normality_tests().any(|t| t.reject_null)
    }

    fn normality_tests(&self) -> impl Iterator<Item = &StatisticalTest> {
        [&self.jarque_bera, &self.kolmogorov_smirnov, &self.anderson_darling, &self.shapiro_wilk]
            .into_iter()
            .flatten()
    }
}
