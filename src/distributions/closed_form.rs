//! Closed-form maximum-likelihood fits: Normal and Laplace.
//!
//! - Normal: μ̂ = mean, σ̂ = √(Σ(x − μ̂)² / n) (divide by n, not n − 1).
//! - Laplace: μ̂ = median, b̂ = mean |x − μ̂|.
//!
//! Both need at least one observation. A constant sample yields a zero
//! scale, which is reported as-is; its log-likelihood is then `-∞`.
use crate::descriptive::{median, welford};
use crate::distributions::errors::{FitResult, require_fit_len};
use crate::distributions::fit::DistributionFit;
use crate::sample::Sample;

/// Normal MLE location and scale of `values` (n ≥ 1 assumed).
pub(crate) fn normal_params(values: &[f64]) -> (f64, f64) {
    let (mu, m2_sum) = welford(values);
    (mu, (m2_sum / values.len() as f64).sqrt())
}

/// Fit a Normal distribution by maximum likelihood.
///
/// Errors
/// ------
/// - `FitError::InsufficientData` for an empty sample.
pub fn fit_normal(sample: &Sample) -> FitResult<DistributionFit> {
    require_fit_len("Normal", sample.len(), 1)?;
    let (mu, sigma) = normal_params(sample.as_slice());
    Ok(DistributionFit::Normal { mu, sigma })
}

/// Fit a Laplace distribution by maximum likelihood.
///
/// Errors
/// ------
/// - `FitError::InsufficientData` for an empty sample.
pub fn fit_laplace(sample: &Sample) -> FitResult<DistributionFit> {
    require_fit_len("Laplace", sample.len(), 1)?;
    let mu = median(&sample.sorted());
    let values = sample.as_slice();
    let b = values.iter().map(|x| (x - mu).abs()).sum::<f64>() / values.len() as f64;
    Ok(DistributionFit::Laplace { mu, b })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::distributions::errors::FitError;
    use approx::assert_relative_eq;
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use rand_distr::StandardNormal;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Normal location equals the arithmetic mean; scale uses the n divisor.
    // - Laplace location equals the median; scale is the mean absolute
    //   deviation from it.
    // - Recovery of standard-normal parameters from seeded draws.
    // - Empty-sample errors.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Normal μ̂ is the arithmetic mean and σ̂ uses the population divisor.
    //
    // Given
    // -----
    // - [2, 4, 4, 4, 5, 5, 7, 9]: mean 5, population variance 4.
    fn normal_fit_uses_mean_and_population_scale() {
        let sample = Sample::from_vec(vec![2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        let fit = fit_normal(&sample).unwrap();
        assert_eq!(fit.name(), "Normal");
        assert_relative_eq!(fit.location(), 5.0, epsilon = 1e-12);
        assert_relative_eq!(fit.scale(), 2.0, epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Laplace μ̂ equals the interpolated median for even n.
    //
    // Given
    // -----
    // - [1, 3, 8, -2]: sorted [-2, 1, 3, 8], median 2, |x − 2| = [1, 1, 6, 4].
    fn laplace_fit_uses_median_and_mean_absolute_deviation() {
        let sample = Sample::from_vec(vec![1.0, 3.0, 8.0, -2.0]).unwrap();
        let fit = fit_laplace(&sample).unwrap();
        assert_eq!(fit, DistributionFit::Laplace { mu: 2.0, b: 3.0 });
    }

    #[test]
    // Purpose
    // -------
    // 1000 seeded standard-normal draws recover μ ≈ 0 and σ ≈ 1.
    //
    // Expect
    // ------
    // - |μ̂| < 0.2 and |σ̂ − 1| < 0.2.
    fn normal_fit_recovers_standard_normal_draws() {
        // Arrange
        let mut rng = StdRng::seed_from_u64(20_240_917);
        let draws: Vec<f64> = (0..1000).map(|_| rng.sample(StandardNormal)).collect();
        let sample = Sample::from_vec(draws).unwrap();

        // Act
        let fit = fit_normal(&sample).unwrap();

        // Assert
        assert!(fit.location().abs() < 0.2, "mu = {}", fit.location());
        assert!((fit.scale() - 1.0).abs() < 0.2, "sigma = {}", fit.scale());
    }

    #[test]
    // Purpose
    // -------
    // Empty samples cannot be fitted.
    fn empty_sample_is_rejected() {
        let empty = Sample::from_vec(vec![]).unwrap();
        assert!(matches!(fit_normal(&empty), Err(FitError::InsufficientData { required: 1, .. })));
        assert!(matches!(fit_laplace(&empty), Err(FitError::InsufficientData { .. })));
    }
}
