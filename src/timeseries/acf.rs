//! timeseries::acf — sample autocorrelations and partial autocorrelations.
//!
//! Purpose
//! -------
//! Compute the ACF with the divide-by-n convention and the PACF by the
//! Levinson-Durbin recursion, and flag lags whose value exceeds the
//! ±1.96/√n white-noise band.
//!
//! Key behaviors
//! -------------
//! - ρ̂ₖ = γ̂ₖ / γ̂₀ with γ̂ₖ = (1/n) Σ_{t=k}^{n−1} (xₜ − x̄)(xₜ₋ₖ − x̄), for
//!   k = 1..=min(max_lag, n − 1).
//! - A zero-variance series has all autocorrelations equal to 0.
//! - PACF(1) is ACF(1) itself; later lags come from the recursion
//!   φₖₖ = (ρₖ − Σⱼ φₖ₋₁,ⱼ ρₖ₋ⱼ) / (1 − Σⱼ φₖ₋₁,ⱼ ρⱼ),
//!   φₖⱼ = φₖ₋₁,ⱼ − φₖₖ φₖ₋₁,ₖ₋ⱼ.
//! - A zero denominator ends the recursion; the remaining lags are 0.
//!
//! Conventions
//! -----------
//! - Lags are 1-based in [`AcfPoint::lag`]; vectors are indexed from 0, so
//!   `acf[0]` holds lag 1.

/// Two-sided 95 % normal quantile used for the significance band.
pub const SIGNIFICANCE_Z: f64 = 1.96;

/// One lag of an ACF / PACF with its significance flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AcfPoint {
    pub lag: usize,
    pub value: f64,
    pub significant: bool,
}

/// White-noise band 1.96/√n; `∞` for no data.
pub fn significance_bound(n: usize) -> f64 {
    SIGNIFICANCE_Z / (n as f64).sqrt()
}

/// Sample autocorrelations at lags 1..=min(`max_lag`, n − 1).
pub fn autocorrelations(values: &[f64], max_lag: usize) -> Vec<f64> {
    let n = values.len();
    let lags = max_lag.min(n.saturating_sub(1));
    if lags == 0 {
        return Vec::new();
    }
    let nf = n as f64;
    let mean = values.iter().sum::<f64>() / nf;
    let centred: Vec<f64> = values.iter().map(|x| x - mean).collect();
    let gamma0 = centred.iter().map(|d| d * d).sum::<f64>() / nf;
    if gamma0 == 0.0 {
        return vec![0.0; lags];
    }
    (1..=lags)
        .map(|k| {
            let gamma_k = centred[k..].iter().zip(&centred[..n - k]).map(|(a, b)| a * b).sum::<f64>()
                / nf;
            gamma_k / gamma0
        })
        .collect()
}

/// Partial autocorrelations from autocorrelations `rho` (lag 1 first).
pub fn partial_autocorrelations(rho: &[f64]) -> Vec<f64> {
    let p = rho.len();
    let mut pacf = Vec::with_capacity(p);
    if p == 0 {
        return pacf;
    }
    pacf.push(rho[0]);
    let mut phi = vec![rho[0]];
    for k in 2..=p {
        let mut num = rho[k - 1];
        let mut den = 1.0;
        for j in 1..k {
            num -= phi[j - 1] * rho[k - 1 - j];
            den -= phi[j - 1] * rho[j - 1];
        }
        if den == 0.0 || !den.is_finite() {
            pacf.resize(p, 0.0);
            return pacf;
        }
        let phi_kk = num / den;
        let mut next: Vec<f64> = (1..k).map(|j| phi[j - 1] - phi_kk * phi[k - 1 - j]).collect();
        next.push(phi_kk);
        phi = next;
        pacf.push(phi_kk);
    }
    pacf
}

/// Attach lags and significance flags against the band for `n` observations.
pub fn with_significance(values: &[f64], n: usize) -> Vec<AcfPoint> {
    let bound = significance_bound(n);
    values
        .iter()
        .enumerate()
        .map(|(i, &value)| AcfPoint { lag: i + 1, value, significant: value.abs() > bound })
        .collect()
}

/// ACF with significance flags.
pub fn compute_acf(values: &[f64], max_lag: usize) -> Vec<AcfPoint> {
    with_significance(&autocorrelations(values, max_lag), values.len())
}

/// PACF with significance flags.
pub fn compute_pacf(values: &[f64], max_lag: usize) -> Vec<AcfPoint> {
    with_significance(&partial_autocorrelations(&autocorrelations(values, max_lag)), values.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::{Rng, SeedableRng, rngs::StdRng};
    use rand_distr::StandardNormal;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Closed-form ACF of an alternating series and lag capping.
    // - PACF(1) == ACF(1) bit for bit.
    // - PACF cut-off after lag 1 for a simulated AR(1).
    // - Zero-variance and significance-flag behavior.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // Alternating ±1 series of even length n has ρ̂ₖ = (−1)ᵏ (n − k)/n and
    // PACF(1) equal to ACF(1) exactly.
    fn alternating_series_acf_and_pacf_lag_one() {
        // Arrange
        let values: Vec<f64> = (0..12).map(|i| if i % 2 == 0 { 1.0 } else { -1.0 }).collect();

        // Act
        let acf = autocorrelations(&values, 4);
        let pacf = partial_autocorrelations(&acf);

        // Assert
        assert_relative_eq!(acf[0], -11.0 / 12.0, epsilon = 1e-12);
        assert_relative_eq!(acf[1], 10.0 / 12.0, epsilon = 1e-12);
        assert_eq!(pacf[0].to_bits(), acf[0].to_bits());
        assert_eq!(pacf.len(), acf.len());
    }

    #[test]
    // Purpose
    // -------
    // Lags are capped at n − 1 and constant series give zeros.
    fn lag_cap_and_zero_variance() {
        assert_eq!(autocorrelations(&[1.0, 2.0, 3.0], 20).len(), 2);
        assert_eq!(autocorrelations(&[5.0; 6], 3), vec![0.0; 3]);
        assert!(autocorrelations(&[1.0], 5).is_empty());
        assert!(partial_autocorrelations(&[]).is_empty());
    }

    #[test]
    // Purpose
    // -------
    // For an AR(1) with φ = 0.7 the PACF is ≈ φ at lag 1 and inside the
    // band afterwards.
    //
    // Given
    // -----
    // - 3000 seeded observations.
    //
    // Expect
    // ------
    // - |PACF(1) − 0.7| < 0.05 and |PACF(k)| < 0.1 for k = 2..5.
    fn pacf_cuts_off_for_ar1() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut x = vec![0.0_f64; 3000];
        for t in 1..x.len() {
            let e: f64 = rng.sample(StandardNormal);
            x[t] = 0.7 * x[t - 1] + e;
        }

        let pacf = compute_pacf(&x, 5);

        assert!((pacf[0].value - 0.7).abs() < 0.05, "{:?}", pacf[0]);
        assert!(pacf[0].significant);
        for point in &pacf[1..] {
            assert!(point.value.abs() < 0.1, "{point:?}");
        }
    }

    #[test]
    // Purpose
    // -------
    // Significance compares |ρ| with 1.96/√n and lags are 1-based.
    fn significance_flags() {
        let points = with_significance(&[0.5, -0.1, -0.7], 16);
        assert_eq!(significance_bound(16), 0.49);
        assert_eq!(points.iter().map(|p| p.lag).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(
            points.iter().map(|p| p.significant).collect::<Vec<_>>(),
            vec![true, false, true]
        );
    }
}
