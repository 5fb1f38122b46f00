//! timeseries::regression — AR(1) fit and a Dickey-Fuller style unit-root check.
//!
//! Purpose
//! -------
//! Summarize first-order linear dependence of a series with two small OLS
//! regressions.
//!
//! Key behaviors
//! -------------
//! - [`fit_ar1`]: rₜ = φ rₜ₋₁ + εₜ without intercept. φ̂ = Σ rₜ rₜ₋₁ / Σ rₜ₋₁²,
//!   s² = SSR / (m − 1) with m = n − 1 pairs, se = √(s² / Σ rₜ₋₁²),
//!   R² = 1 − SSR / Σ rₜ² (uncentred, matching the no-intercept model).
//! - [`unit_root_test`]: Δxₜ = α + β xₜ₋₁ + εₜ. The t-ratio of β̂ with
//!   s² = SSR / (m − 2) is mapped to a coarse p-value by fixed thresholds
//!   (−3.51 → 0.005, −2.89 → 0.03, −2.58 → 0.08, else 0.15).
//!
//! Invariants & assumptions
//! ------------------------
//! - AR(1) needs n ≥ 3 and a non-zero regressor; the unit-root check needs
//!   n ≥ 4 and a non-constant regressor. Otherwise the result is `None`.
//! - A perfect fit (SSR = 0) gives an infinite t-statistic.

/// Unit-root t-ratio thresholds and the p-value bucket below each.
const UNIT_ROOT_BUCKETS: [(f64, f64); 3] = [(-3.51, 0.005), (-2.89, 0.03), (-2.58, 0.08)];
/// p-value reported above every threshold.
const UNIT_ROOT_P_MAX: f64 = 0.15;

/// OLS AR(1) fit without intercept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ar1Fit {
    pub phi: f64,
    pub t_stat: f64,
    pub r_squared: f64,
    pub stationary: bool,
}

/// Verdict of the unit-root check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stationarity {
    /// p < 0.05
    Stationary,
    /// 0.05 ≤ p < 0.10
    Marginal,
    /// p ≥ 0.10
    NonStationary,
}

impl Stationarity {
    pub fn from_p_value(p: f64) -> Self {
        if p < 0.05 {
            Stationarity::Stationary
        } else if p < 0.10 {
            Stationarity::Marginal
        } else {
            Stationarity::NonStationary
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Stationarity::Stationary => "stationary",
            Stationarity::Marginal => "marginal",
            Stationarity::NonStationary => "non-stationary",
        }
    }
}

impl std::fmt::Display for Stationarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of the unit-root check.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UnitRootTest {
    pub statistic: f64,
    pub p_value: f64,
    pub classification: Stationarity,
}

/// Fit rₜ = φ rₜ₋₁ + εₜ by OLS; `None` for n < 3 or an all-zero regressor.
pub fn fit_ar1(values: &[f64]) -> Option<Ar1Fit> {
    let n = values.len();
    if n < 3 {
        return None;
    }
    let lagged = &values[..n - 1];
    let current = &values[1..];
    let sxx: f64 = lagged.iter().map(|x| x * x).sum();
    if sxx == 0.0 {
        return None;
    }
    let sxy: f64 = lagged.iter().zip(current).map(|(x, y)| x * y).sum();
    let phi = sxy / sxx;

    let ssr: f64 = lagged.iter().zip(current).map(|(x, y)| (y - phi * x).powi(2)).sum();
    let m = (n - 1) as f64;
    let se = (ssr / (m - 1.0) / sxx).sqrt();
    let syy: f64 = current.iter().map(|y| y * y).sum();
    let r_squared = if syy > 0.0 { 1.0 - ssr / syy } else { 0.0 };

    Some(Ar1Fit { phi, t_stat: phi / se, r_squared, stationary: phi.abs() < 1.0 })
}

/// Coarse p-value bucket for a unit-root t-ratio.
pub fn unit_root_p_value(t: f64) -> f64 {
    UNIT_ROOT_BUCKETS
        .iter()
        .find(|(threshold, _)| t < *threshold)
        .map_or(UNIT_ROOT_P_MAX, |&(_, p)| p)
}

/// Regress Δxₜ on xₜ₋₁ with intercept and classify the slope's t-ratio;
/// `None` for n < 4 or a constant regressor.
pub fn unit_root_test(values: &[f64]) -> Option<UnitRootTest> {
    let n = values.len();
    if n < 4 {
        return None;
    }
    let lagged = &values[..n - 1];
    let diffs: Vec<f64> = values.windows(2).map(|w| w[1] - w[0]).collect();
    let m = (n - 1) as f64;

    let x_mean = lagged.iter().sum::<f64>() / m;
    let y_mean = diffs.iter().sum::<f64>() / m;
    let sxx: f64 = lagged.iter().map(|x| (x - x_mean).powi(2)).sum();
    if sxx == 0.0 {
        return None;
    }
    let sxy: f64 = lagged.iter().zip(&diffs).map(|(x, y)| (x - x_mean) * (y - y_mean)).sum();
    let beta = sxy / sxx;
    let alpha = y_mean - beta * x_mean;

    let ssr: f64 = lagged.iter().zip(&diffs).map(|(x, y)| (y - alpha - beta * x).powi(2)).sum();
    let se = (ssr / (m - 2.0) / sxx).sqrt();
    let statistic = beta / se;
    let p_value = unit_root_p_value(statistic);
    Some(UnitRootTest { statistic, p_value, classification: Stationarity::from_p_value(p_value) })
}
