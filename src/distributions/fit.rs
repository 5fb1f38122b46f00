//! distributions::fit — fitted parametric families and their evaluation.
//!
//! Purpose
//! -------
//! Define [`DistributionFit`], the tagged result of a maximum-likelihood
//! fit, and evaluate it: density, CDF, log-likelihood of a sample, and the
//! parameter count used for information criteria.
//!
//! Key behaviors
//! -------------
//! - Normal and Student-t evaluate through the `special` module
//!   ([`norm_pdf`], [`norm_cdf`], [`t_pdf`], [`t_cdf`]) after standardizing
//!   with the fitted location and scale.
//! - Laplace uses its closed forms.
//! - [`DistributionFit::log_likelihood`] returns `-∞` as soon as any point
//!   has non-positive (or undefined) density.
//!
//! Invariants & assumptions
//! ------------------------
//! - A non-positive scale is not a valid density. `pdf` and `cdf` return
//!   `NaN` in that case instead of panicking.
use crate::special::{norm_cdf, norm_pdf, t_cdf, t_pdf};

/// A fitted distribution.
///
/// Variants
/// --------
/// - `Normal { mu, sigma }`: location and standard deviation.
/// - `Laplace { mu, b }`: location and scale.
/// - `StudentT { mu, sigma, nu }`: location, scale, and degrees of freedom.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DistributionFit {
    Normal { mu: f64, sigma: f64 },
    Laplace { mu: f64, b: f64 },
    StudentT { mu: f64, sigma: f64, nu: f64 },
}

impl DistributionFit {
    /// Family name used in reports.
    pub fn name(&self) -> &'static str {
        match self {
            DistributionFit::Normal { .. } => "Normal",
            DistributionFit::Laplace { .. } => "Laplace",
            DistributionFit::StudentT { .. } => "Student-t",
        }
    }

    /// Number of free parameters `k` for AIC / BIC.
    pub fn n_params(&self) -> usize {
        match self {
            DistributionFit::Normal { .. } | DistributionFit::Laplace { .. } => 2,
            DistributionFit::StudentT { .. } => 3,
        }
    }

    /// Location parameter μ.
    pub fn location(&self) -> f64 {
        match *self {
            DistributionFit::Normal { mu, .. }
            | DistributionFit::Laplace { mu, .. }
            | DistributionFit::StudentT { mu, .. } => mu,
        }
    }

    /// Scale parameter (σ for Normal / Student-t, b for Laplace).
    pub fn scale(&self) -> f64 {
        match *self {
            DistributionFit::Normal { sigma, .. } | DistributionFit::StudentT { sigma, .. } => {
                sigma
            }
            DistributionFit::Laplace { b, .. } => b,
        }
    }

    /// Probability density at `x`.
    pub fn pdf(&self, x: f64) -> f64 {
        let scale = self.scale();
        if scale.is_nan() || scale <= 0.0 {
            return f64::NAN;
        }
        let z = (x - self.location()) / scale;
        match *self {
            DistributionFit::Normal { .. } => norm_pdf(z) / scale,
            DistributionFit::Laplace { .. } => (-z.abs()).exp() / (2.0 * scale),
            DistributionFit::StudentT { nu, .. } => t_pdf(z, nu) / scale,
        }
    }

    /// Cumulative distribution function at `x`.
    pub fn cdf(&self, x: f64) -> f64 {
        let scale = self.scale();
        if scale.is_nan() || scale <= 0.0 {
            return f64::NAN;
        }
        let z = (x - self.location()) / scale;
        match *self {
            DistributionFit::Normal { .. } => norm_cdf(z),
            DistributionFit::Laplace { .. } => {
                if z < 0.0 { 0.5 * z.exp() } else { 1.0 - 0.5 * (-z).exp() }
            }
            DistributionFit::StudentT { nu, .. } => t_cdf(z, nu),
        }
    }

    /// Log-likelihood `Σ ln f(xᵢ)` of `values` under this fit.
    ///
    /// Returns `-∞` as soon as any density is non-positive or undefined;
    /// `0` for no data.
    pub fn log_likelihood(&self, values: &[f64]) -> f64 {
        let mut ll = 0.0;
        for &x in values {
            let p = self.pdf(x);
            if p.is_nan() || p <= 0.0 {
                return f64::NEG_INFINITY;
            }
            ll += p.ln();
        }
        ll
    }
}

impl std::fmt::Display for DistributionFit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DistributionFit::Normal { mu, sigma } => write!(f, "Normal(μ={mu:.4}, σ={sigma:.4})"),
            DistributionFit::Laplace { mu, b } => write!(f, "Laplace(μ={mu:.4}, b={b:.4})"),
            DistributionFit::StudentT { mu, sigma, nu } => {
                write!(f, "Student-t(μ={mu:.4}, σ={sigma:.4}, ν={nu:.1})")
            }
        }
    }
}
