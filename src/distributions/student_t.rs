//! distributions::student_t — Student-t fit with a golden-section ν search.
//!
//! Purpose
//! -------
//! Fit a location-scale Student-t distribution by profiling the degrees of
//! freedom ν while location and scale are taken from the Normal MLE.
//!
//! Key behaviors
//! -------------
//! - μ, σ come from the Normal fit; the sample is standardized to
//!   zᵢ = (xᵢ − μ) / σ.
//! - ν maximizes Σ ln t_pdf(zᵢ, ν): the negative sum is minimized by
//!   golden-section search over [`StudentTSearch`] (default ν ∈ [2, 50],
//!   tol 0.1).
//! - A point with non-positive density contributes [`LOG_PDF_PENALTY`]
//!   instead of `-∞`, so the objective stays finite.
//! - The reported scale is σ · √((ν − 2) / ν) when ν > 2 (the variance of a
//!   t with scale s is s² ν / (ν − 2)); ν is rounded to one decimal.
//!
//! Invariants & assumptions
//! ------------------------
//! - n ≥ 2 and σ > 0, otherwise [`FitError::Degenerate`] or
//!   [`FitError::InsufficientData`].
//! - The profile likelihood in ν is treated as unimodal on the bracket.
use argmin::core::{CostFunction, Error};

use crate::distributions::closed_form::normal_params;
use crate::distributions::errors::{FitError, FitResult, require_fit_len};
use crate::distributions::fit::DistributionFit;
use crate::optimization::golden_section::golden_section_search;
use crate::sample::Sample;
use crate::special::t_pdf;

/// Log-density charged to a point whose density is non-positive.
pub const LOG_PDF_PENALTY: f64 = -1e10;

/// Bracket and tolerance of the degrees-of-freedom search.
///
/// Fields
/// ------
/// - `lower`, `upper`: ν bracket, default `[2, 50]`.
/// - `tol`: final bracket width, default `0.1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StudentTSearch {
    pub lower: f64,
    pub upper: f64,
    pub tol: f64,
}

impl Default for StudentTSearch {
    fn default() -> Self {
        StudentTSearch { lower: 2.0, upper: 50.0, tol: 0.1 }
    }
}

/// Negative profile log-likelihood of ν for standardized data.
#[derive(Debug, Clone)]
pub struct StudentTObjective {
    z: Vec<f64>,
}

impl StudentTObjective {
    pub fn new(z: Vec<f64>) -> Self {
        StudentTObjective { z }
    }

    /// Σ ln t_pdf(zᵢ, ν) with the penalty for non-positive densities.
    pub fn log_likelihood(&self, nu: f64) -> f64 {
        self.z
            .iter()
            .map(|&z| {
                let p = t_pdf(z, nu);
                if p > 0.0 { p.ln() } else { LOG_PDF_PENALTY }
            })
            .sum()
    }
}

impl CostFunction for StudentTObjective {
    type Param = f64;
    type Output = f64;

    fn cost(&self, nu: &Self::Param) -> Result<Self::Output, Error> {
        Ok(-self.log_likelihood(*nu))
    }
}

/// Fit a Student-t distribution with the default ν search.
///
/// Errors
/// ------
/// - `FitError::InsufficientData` for n < 2.
/// - `FitError::Degenerate` for a constant sample.
/// - `FitError::Optimization` if the ν search fails.
pub fn fit_student_t(sample: &Sample) -> FitResult<DistributionFit> {
    fit_student_t_with(sample, &StudentTSearch::default())
}

/// Fit a Student-t distribution with an explicit ν search configuration.
///
/// Parameters
/// ----------
/// - `sample`: `&Sample`
///   At least two observations with positive spread.
/// - `search`: `&StudentTSearch`
///   Bracket and tolerance for ν; validated by the search itself.
///
/// Returns
/// -------
/// `FitResult<DistributionFit>`
///   `DistributionFit::StudentT { mu, sigma, nu }` with refined σ and ν
///   rounded to one decimal.
pub fn fit_student_t_with(sample: &Sample, search: &StudentTSearch) -> FitResult<DistributionFit> {
    require_fit_len("Student-t", sample.len(), 2)?;
    let values = sample.as_slice();
    let (mu, sigma) = normal_params(values);
    if sigma <= 0.0 {
        return Err(FitError::Degenerate { family: "Student-t", reason: "zero scale" });
    }

    let objective = StudentTObjective::new(values.iter().map(|x| (x - mu) / sigma).collect());
    let nu = golden_section_search(&objective, search.lower, search.upper, search.tol)?;

    let sigma = if nu > 2.0 { sigma * ((nu - 2.0) / nu).sqrt() } else { sigma };
    let nu = (nu * 10.0).round() / 10.0;
    Ok(DistributionFit::StudentT { mu, sigma, nu })
}
