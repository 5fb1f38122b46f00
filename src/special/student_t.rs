//! Student-t distribution: CDF, density and quantile for ν degrees of
//! freedom (ν may be fractional).
use std::f64::consts::PI;

use crate::special::{beta::beta_inc, erf::norm_inv, gamma::ln_gamma};

/// Above this many degrees of freedom [`t_inv`] returns the normal quantile.
pub const T_INV_NORMAL_CUTOFF: f64 = 100.0;

/// Student-t CDF.
///
/// Uses `P(T ≤ t) = 1 − ½ I_{ν/(ν+t²)}(ν/2, ½)` for `t > 0` and the
/// mirrored tail otherwise. `NaN` when `df <= 0` or on `NaN` input.
pub fn t_cdf(t: f64, df: f64) -> f64 {
    if t.is_nan() || df.is_nan() || df <= 0.0 {
        return f64::NAN;
    }
    let x = df / (df + t * t);
    let tail = 0.5 * beta_inc(x, 0.5 * df, 0.5);
    if t > 0.0 { 1.0 - tail } else { tail }
}

/// Student-t density.
///
/// The normalizing ratio Γ((ν+1)/2) / (√(νπ) Γ(ν/2)) is evaluated in log
/// space so that large ν does not overflow. `NaN` when `df <= 0`.
pub fn t_pdf(t: f64, df: f64) -> f64 {
    if t.is_nan() || df.is_nan() || df <= 0.0 {
        return f64::NAN;
    }
    let half_df1 = 0.5 * (df + 1.0);
    let ln_norm = ln_gamma(half_df1) - ln_gamma(0.5 * df) - 0.5 * (df * PI).ln();
    (ln_norm - half_df1 * (t * t / df).ln_1p()).exp()
}

/// Student-t quantile.
///
/// For `df ≤ 100` the normal quantile `z` is corrected with the four-term
/// Hill & Davis (1968) / Cornish-Fisher expansion
///
/// `t ≈ z + g₁/ν + g₂/ν² + g₃/ν³ + g₄/ν⁴`;
///
/// above that the normal quantile is returned unchanged. `NaN` unless
/// `0 < p < 1` and `df > 0`. The expansion degrades for ν < 3.
pub fn t_inv(p: f64, df: f64) -> f64 {
    if df.is_nan() || df <= 0.0 {
        return f64::NAN;
    }
    let z = norm_inv(p);
    if z.is_nan() || df > T_INV_NORMAL_CUTOFF {
        return z;
    }
    let z2 = z * z;
    let z3 = z2 * z;
    let z5 = z3 * z2;
    let z7 = z5 * z2;
    let z9 = z7 * z2;
    let g1 = (z3 + z) / 4.0;
    let g2 = (5.0 * z5 + 16.0 * z3 + 3.0 * z) / 96.0;
    let g3 = (3.0 * z7 + 19.0 * z5 + 17.0 * z3 - 15.0 * z) / 384.0;
    let g4 = (79.0 * z9 + 776.0 * z7 + 1482.0 * z5 - 1920.0 * z3 - 945.0 * z) / 92_160.0;
    z + g1 / df + g2 / df.powi(2) + g3 / df.powi(3) + g4 / df.powi(4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use statrs::distribution::{Continuous, ContinuousCDF, StudentsT};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - CDF / PDF agreement with statrs' StudentsT.
    // - Symmetry t_cdf(−t) = 1 − t_cdf(t) and t_cdf(0) = ½.
    // - Quantile accuracy against tabulated critical values, and the normal
    //   delegation above ν = 100.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // CDF and density agree with statrs across several ν.
    fn t_cdf_and_pdf_agree_with_statrs() {
        for &df in &[1.0, 3.0, 5.0, 12.5, 40.0] {
            let reference = StudentsT::new(0.0, 1.0, df).expect("valid t");
            for &t in &[-3.0, -1.2, 0.0, 0.4, 2.0, 4.5] {
                assert_abs_diff_eq!(t_cdf(t, df), reference.cdf(t), epsilon = 1e-6);
                assert_abs_diff_eq!(t_pdf(t, df), reference.pdf(t), epsilon = 1e-10);
            }
        }
    }

    #[test]
    // Purpose
    // -------
    // Symmetry and centre of the CDF.
    fn t_cdf_is_symmetric() {
        assert_abs_diff_eq!(t_cdf(0.0, 4.0), 0.5, epsilon = 1e-12);
        for &t in &[0.3, 1.0, 2.7] {
            assert_abs_diff_eq!(t_cdf(-t, 6.0), 1.0 - t_cdf(t, 6.0), epsilon = 1e-7);
        }
    }

    #[test]
    // Purpose
    // -------
    // The series-corrected quantile reproduces textbook critical values to
    // within the accuracy of the underlying normal quantile.
    //
    // Given
    // -----
    // - t₀.₉₇₅(10) = 2.228139, t₀.₉₇₅(30) = 2.042272, t₀.₉₅(5) = 2.015048.
    fn t_inv_matches_critical_values() {
        assert_abs_diff_eq!(t_inv(0.975, 10.0), 2.228_139, epsilon = 1e-2);
        assert_abs_diff_eq!(t_inv(0.975, 30.0), 2.042_272, epsilon = 1e-2);
        assert_abs_diff_eq!(t_inv(0.95, 5.0), 2.015_048, epsilon = 1e-2);
        assert_abs_diff_eq!(t_inv(0.025, 10.0), -t_inv(0.975, 10.0), epsilon = 1e-12);
    }

    #[test]
    // Purpose
    // -------
    // Above the cutoff the quantile is exactly the normal one; domain
    // violations give NaN.
    fn t_inv_delegates_to_normal_and_guards_domain() {
        assert_eq!(t_inv(0.9, 150.0), norm_inv(0.9));
        assert!(t_inv(0.0, 5.0).is_nan());
        assert!(t_inv(1.0, 5.0).is_nan());
        assert!(t_inv(0.5, 0.0).is_nan());
        assert!(t_pdf(0.0, -1.0).is_nan());
        assert!(t_cdf(0.0, 0.0).is_nan());
    }
}
