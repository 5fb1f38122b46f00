//! timeseries — serial-dependence diagnostics for an ordered sample.
//!
//! Purpose
//! -------
//! Treat the sample as a time series (e.g. returns) and summarize its
//! dependence structure: ACF / PACF with significance flags, rolling mean
//! and deviation, squared returns, an AR(1) fit, and a unit-root check.
//!
//! Key behaviors
//! -------------
//! - [`compute_time_series_diagnostics`] runs every diagnostic once and
//!   collects them in [`TimeSeriesDiagnostics`].
//! - Estimators that cannot run on a short series return `None` rather than
//!   failing the whole call.
//!
//! Conventions
//! -----------
//! - Divide-by-n autocovariances throughout; significance band 1.96/√n.
//! - Errors are [`TsError`] / [`TsResult`] and cover only an empty sample
//!   and a zero rolling window.
//!
//! Testing notes
//! -------------
//! - Recursions and regressions are pinned on hand-computable series;
//!   seeded AR(1) and white-noise simulations check the qualitative
//!   behavior.

pub mod acf;
pub mod errors;
pub mod regression;
pub mod rolling;

pub use self::acf::{
    AcfPoint, autocorrelations, compute_acf, compute_pacf, partial_autocorrelations,
    significance_bound,
};
pub use self::errors::{TsError, TsResult};
pub use self::regression::{Ar1Fit, Stationarity, UnitRootTest, fit_ar1, unit_root_test};
pub use self::rolling::{rolling_mean, rolling_std};

use crate::sample::Sample;

/// Default number of ACF / PACF lags.
pub const DEFAULT_MAX_LAG: usize = 20;
/// Default rolling window.
pub const DEFAULT_ROLLING_WINDOW: usize = 20;

/// All time-series diagnostics of one sample.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeSeriesDiagnostics {
    pub acf: Vec<AcfPoint>,
    pub pacf: Vec<AcfPoint>,
    pub rolling_mean: Vec<f64>,
    pub rolling_std: Vec<f64>,
    pub squared_returns: Vec<f64>,
    pub ar1: Option<Ar1Fit>,
    pub unit_root: Option<UnitRootTest>,
    pub significance_bound: f64,
}

/// Compute every time-series diagnostic for `sample`.
///
/// Parameters
/// ----------
/// - `sample`: `&Sample`
///   Non-empty ordered series.
/// - `max_lag`: `usize`
///   ACF / PACF lags, capped at n − 1.
/// - `window`: `usize`
///   Rolling window, at least 1.
///
/// Errors
/// ------
/// - `TsError::EmptyInput` for an empty sample.
/// - `TsError::InvalidWindow` for `window == 0`.
pub fn compute_time_series_diagnostics(
    sample: &Sample, max_lag: usize, window: usize,
) -> TsResult<TimeSeriesDiagnostics> {
    if sample.is_empty() {
        return Err(TsError::EmptyInput);
    }
    let values = sample.as_slice();
    let n = values.len();
    let acf_values = autocorrelations(values, max_lag);
    let pacf_values = partial_autocorrelations(&acf_values);
    Ok(TimeSeriesDiagnostics {
        acf: acf::with_significance(&acf_values, n),
        pacf: acf::with_significance(&pacf_values, n),
        rolling_mean: rolling_mean(values, window)?,
        rolling_std: rolling_std(values, window)?,
        squared_returns: sample.squared(),
        ar1: fit_ar1(values),
        unit_root: unit_root_test(values),
        significance_bound: significance_bound(n),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    // Purpose
    // -------
    // Shapes of every output on a 30-point series with defaults.
    //
    // Expect
    // ------
    // - 20 ACF / PACF lags, 11 rolling entries, 30 squared returns, both
    //   regressions present, PACF(1) == ACF(1).
    fn diagnostics_have_expected_shapes() {
        let values: Vec<f64> = (0..30).map(|i| ((i * 5) % 7) as f64 - 3.0).collect();
        let sample = Sample::from_vec(values).unwrap();

        let d =
            compute_time_series_diagnostics(&sample, DEFAULT_MAX_LAG, DEFAULT_ROLLING_WINDOW)
                .unwrap();

        assert_eq!((d.acf.len(), d.pacf.len()), (20, 20));
        assert_eq!((d.rolling_mean.len(), d.rolling_std.len()), (11, 11));
        assert_eq!(d.squared_returns.len(), 30);
        assert!(d.ar1.is_some() && d.unit_root.is_some());
        assert_eq!(d.pacf[0].value.to_bits(), d.acf[0].value.to_bits());
    }

    #[test]
    // Purpose
    // -------
    // Short series degrade to `None`; empty input and zero windows are errors.
    fn short_and_invalid_inputs() {
        let two = Sample::from_vec(vec![0.1, -0.2]).unwrap();
        let d = compute_time_series_diagnostics(&two, 20, 20).unwrap();
        assert_eq!(d.acf.len(), 1);
        assert!(d.rolling_mean.is_empty());
        assert!(d.ar1.is_none() && d.unit_root.is_none());

        let empty = Sample::from_vec(vec![]).unwrap();
        assert_eq!(compute_time_series_diagnostics(&empty, 5, 5), Err(TsError::EmptyInput));
        assert_eq!(compute_time_series_diagnostics(&two, 5, 0), Err(TsError::InvalidWindow(0)));
    }
}
