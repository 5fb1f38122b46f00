//! utils — PyO3 conversion helpers for the `_rust_diagnostics` module.
//!
//! Inputs arrive as numpy arrays, pandas Series, or plain sequences and are
//! turned into a validated [`Sample`]; an [`AnalysisReport`] leaves as nested
//! Python dicts and lists.
#[cfg(feature = "python-bindings")]
use pyo3::{
    exceptions::{PyTypeError, PyValueError},
    prelude::*,
    types::{PyAny, PyDict},
};

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArrayMethods, PyReadonlyArray1};

#[cfg(feature = "python-bindings")]
use crate::{
    analysis::{AnalysisError, AnalysisReport},
    descriptive::SummaryStats,
    distributions::FitComparison,
    sample::Sample,
    statistical_tests::StatisticalTest,
    tails::TailMetrics,
    timeseries::{AcfPoint, TimeSeriesDiagnostics},
};

/// Borrow or copy `raw_data` as a contiguous 1-D `f64` array.
///
/// Tries, in order: a numpy array, an object with `to_numpy()` (pandas), and
/// a plain sequence of floats.
///
/// Errors
/// ------
/// - `TypeError` when none of the three conversions apply.
#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        PyTypeError::new_err("expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64")
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Convert array-like input into a validated [`Sample`].
///
/// Errors
/// ------
/// - `TypeError` from [`extract_f64_array`].
/// - `ValueError` for non-contiguous data or non-finite values.
#[cfg(feature = "python-bindings")]
pub fn extract_sample<'py>(py: Python<'py>, raw_data: &Bound<'py, PyAny>) -> PyResult<Sample> {
    let arr = extract_f64_array(py, raw_data)?;
    let data = arr
        .as_slice()
        .map_err(|_| PyValueError::new_err("data must be a 1-D contiguous float64 array"))?;
    Ok(Sample::from_vec(data.to_vec()).map_err(AnalysisError::from)?)
}

/// Render a full report as nested dicts.
#[cfg(feature = "python-bindings")]
pub fn report_to_dict<'py>(
    py: Python<'py>, report: &AnalysisReport,
) -> PyResult<Bound<'py, PyDict>> {
    let out = PyDict::new(py);
    out.set_item("summary", summary_to_dict(py, &report.summary)?)?;

    let fits = report.fits.iter().map(|f| fit_to_dict(py, f)).collect::<PyResult<Vec<_>>>()?;
    out.set_item("fits", fits)?;

    let tests = PyDict::new(py);
    for (key, test) in [
        ("jarque_bera", &report.jarque_bera),
        ("kolmogorov_smirnov", &report.kolmogorov_smirnov),
        ("anderson_darling", &report.anderson_darling),
        ("shapiro_wilk", &report.shapiro_wilk),
        ("ljung_box", &report.ljung_box_returns),
        ("ljung_box_squared", &report.ljung_box_squared),
    ] {
        tests.set_item(key, test.as_ref().map(|t| test_to_dict(py, t)).transpose()?)?;
    }
    out.set_item("tests", tests)?;

    out.set_item("tail", tail_to_dict(py, &report.tail)?)?;

    let drawdown = PyDict::new(py);
    drawdown.set_item("max_drawdown", report.drawdown.max_drawdown)?;
    drawdown.set_item("peak_index", report.drawdown.peak_index)?;
    drawdown.set_item("trough_index", report.drawdown.trough_index)?;
    out.set_item("drawdown", drawdown)?;
    out.set_item("downside_deviation", report.downside_deviation)?;
    out.set_item("sortino_ratio", report.sortino_ratio)?;

    out.set_item("time_series", time_series_to_dict(py, &report.time_series)?)?;
    Ok(out)
}

#[cfg(feature = "python-bindings")]
fn summary_to_dict<'py>(py: Python<'py>, s: &SummaryStats) -> PyResult<Bound<'py, PyDict>> {
    let d = PyDict::new(py);
    d.set_item("count", s.count)?;
    for (key, value) in [
        ("mean", s.mean),
        ("variance", s.variance),
        ("std_dev", s.std_dev),
        ("median", s.median),
        ("skewness", s.skewness),
        ("kurtosis", s.kurtosis),
        ("min", s.min),
        ("max", s.max),
        ("p5", s.p5),
        ("p25", s.p25),
        ("p50", s.p50),
        ("p75", s.p75),
        ("p95", s.p95),
    ] {
        d.set_item(key, value)?;
    }
    Ok(d)
}

#[cfg(feature = "python-bindings")]
fn fit_to_dict<'py>(py: Python<'py>, f: &FitComparison) -> PyResult<Bound<'py, PyDict>> {
    use crate::distributions::DistributionFit;

    let d = PyDict::new(py);
    d.set_item("name", f.fit.name())?;
    let params = PyDict::new(py);
    match f.fit {
        DistributionFit::Normal { mu, sigma } => {
            params.set_item("mu", mu)?;
            params.set_item("sigma", sigma)?;
        }
        DistributionFit::Laplace { mu, b } => {
            params.set_item("mu", mu)?;
            params.set_item("b", b)?;
        }
        DistributionFit::StudentT { mu, sigma, nu } => {
            params.set_item("mu", mu)?;
            params.set_item("sigma", sigma)?;
            params.set_item("nu", nu)?;
        }
    }
    d.set_item("params", params)?;
    d.set_item("log_likelihood", f.log_likelihood)?;
    d.set_item("aic", f.aic)?;
    d.set_item("bic", f.bic)?;
    Ok(d)
}

#[cfg(feature = "python-bindings")]
fn test_to_dict<'py>(py: Python<'py>, t: &StatisticalTest) -> PyResult<Bound<'py, PyDict>> {
    let d = PyDict::new(py);
    d.set_item("name", t.name)?;
    d.set_item("statistic", t.statistic)?;
    d.set_item("p_value", t.p_value)?;
    d.set_item("reject_null", t.reject_null)?;
    d.set_item("alpha", t.alpha)?;
    d.set_item("critical_value", t.critical_value)?;
    Ok(d)
}

#[cfg(feature = "python-bindings")]
fn tail_to_dict<'py>(py: Python<'py>, t: &TailMetrics) -> PyResult<Bound<'py, PyDict>> {
    let d = PyDict::new(py);
    d.set_item("var95", t.var95)?;
    d.set_item("var99", t.var99)?;
    d.set_item("cvar95", t.cvar95)?;
    d.set_item("cvar99", t.cvar99)?;
    d.set_item("hill_index", t.hill_index)?;
    d.set_item("left_tail_index", t.left_tail_index)?;
    Ok(d)
}

#[cfg(feature = "python-bindings")]
fn acf_to_list<'py>(py: Python<'py>, points: &[AcfPoint]) -> PyResult<Vec<Bound<'py, PyDict>>> {
    points
        .iter()
        .map(|p| {
            let d = PyDict::new(py);
            d.set_item("lag", p.lag)?;
            d.set_item("value", p.value)?;
            d.set_item("significant", p.significant)?;
            Ok(d)
        })
        .collect()
}

#[cfg(feature = "python-bindings")]
fn time_series_to_dict<'py>(
    py: Python<'py>, ts: &TimeSeriesDiagnostics,
) -> PyResult<Bound<'py, PyDict>> {
    let d = PyDict::new(py);
    d.set_item("acf", acf_to_list(py, &ts.acf)?)?;
    d.set_item("pacf", acf_to_list(py, &ts.pacf)?)?;
    d.set_item("significance_bound", ts.significance_bound)?;
    d.set_item("rolling_mean", ts.rolling_mean.clone())?;
    d.set_item("rolling_std", ts.rolling_std.clone())?;
    d.set_item("squared_returns", ts.squared_returns.clone())?;

    let ar1 = match &ts.ar1 {
        Some(fit) => {
            let a = PyDict::new(py);
            a.set_item("phi", fit.phi)?;
            a.set_item("t_stat", fit.t_stat)?;
            a.set_item("r_squared", fit.r_squared)?;
            a.set_item("stationary", fit.stationary)?;
            Some(a)
        }
        None => None,
    };
    d.set_item("ar1", ar1)?;

    let unit_root = match &ts.unit_root {
        Some(ur) => {
            let u = PyDict::new(py);
            u.set_item("statistic", ur.statistic)?;
            u.set_item("p_value", ur.p_value)?;
            u.set_item("classification", ur.classification.as_str())?;
            Some(u)
        }
        None => None,
    };
    d.set_item("unit_root", unit_root)?;
    Ok(d)
}
