//! Information-criterion comparison of the fitted families.
//!
//! AIC = 2k − 2ℓ and BIC = k ln n − 2ℓ, with k from
//! [`DistributionFit::n_params`]. Fits are ranked ascending by AIC (lower is
//! better); a NaN AIC sorts last.
use std::cmp::Ordering;

use crate::distributions::closed_form::{fit_laplace, fit_normal};
use crate::distributions::errors::FitResult;
use crate::distributions::fit::DistributionFit;
use crate::distributions::student_t::{StudentTSearch, fit_student_t_with};
use crate::sample::Sample;

/// One fitted family with its likelihood and information criteria.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitComparison {
    pub fit: DistributionFit,
    pub log_likelihood: f64,
    pub aic: f64,
    pub bic: f64,
    pub k: usize,
}

impl FitComparison {
    /// Score `fit` against `sample`.
    pub fn evaluate(fit: DistributionFit, sample: &Sample) -> Self {
        let log_likelihood = fit.log_likelihood(sample.as_slice());
        let k = fit.n_params();
        let kf = k as f64;
        let n = sample.len() as f64;
        FitComparison {
            fit,
            log_likelihood,
            aic: 2.0 * kf - 2.0 * log_likelihood,
            bic: kf * n.ln() - 2.0 * log_likelihood,
            k,
        }
    }
}

/// Fit Normal, Laplace, and Student-t and rank them by AIC.
pub fn compare_fits(sample: &Sample) -> FitResult<Vec<FitComparison>> {
    compare_fits_with(sample, &StudentTSearch::default())
}

/// [`compare_fits`] with an explicit Student-t ν search.
///
/// Errors
/// ------
/// - Any [`FitError`](crate::distributions::errors::FitError) from the
///   individual fits; the Student-t fit is the strictest (n ≥ 2, σ > 0).
pub fn compare_fits_with(
    sample: &Sample, search: &StudentTSearch,
) -> FitResult<Vec<FitComparison>> {
    let fits = [fit_normal(sample)?, fit_laplace(sample)?, fit_student_t_with(sample, search)?];
    Ok(rank_fits(fits, sample))
}

/// Score already-fitted families against `sample`, best AIC first.
pub fn rank_fits(
    fits: impl IntoIterator<Item = DistributionFit>, sample: &Sample,
) -> Vec<FitComparison> {
    let mut ranked: Vec<FitComparison> =
        fits.into_iter().map(|fit| FitComparison::evaluate(fit, sample)).collect();
    ranked.sort_by(|a, b| nan_last(a.aic, b.aic));
    ranked
}

fn nan_last(a: f64, b: f64) -> Ordering {
    match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.total_cmp(&b),
    }
}
