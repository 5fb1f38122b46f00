//! Hill tail-index estimators for the right and left tails.
//!
//! Purpose
//! -------
//! Estimate the extreme-value index γ of a heavy (Pareto-like) tail from
//! the top-k order statistics.
//!
//! Key behaviors
//! -------------
//! - k = max(⌊√n⌋, ⌊0.05 n⌋, 20), capped at ⌊0.2 n⌋; a capped k below 5
//!   yields `NaN` (too few tail points).
//! - The threshold is the k-th largest value, x₍ₙ₋ₖ₎ on the ascending sort,
//!   and γ = (1/k) Σ ln(x / threshold) over the top k values (the threshold
//!   itself contributes ln 1 = 0).
//! - The left-tail index applies the same rule to the negated sample and
//!   accumulates only positive values.
//!
//! Invariants & assumptions
//! ------------------------
//! - A non-positive threshold makes the log-ratio undefined and yields
//!   `NaN`; this is a "cannot compute" result, not an error.

/// Smallest usable number of tail observations.
pub const HILL_MIN_K: usize = 5;

/// Floor on the k selection before the cap.
const HILL_K_FLOOR: usize = 20;

/// Number of tail order statistics used for a sample of size `n`.
pub fn hill_k(n: usize) -> usize {
    let root = (n as f64).sqrt().floor() as usize;
    let five_pct = (0.05 * n as f64).floor() as usize;
    let cap = (0.2 * n as f64).floor() as usize;
    root.max(five_pct).max(HILL_K_FLOOR).min(cap)
}

/// Right-tail Hill index of ascending `sorted` data; `NaN` when k < 5 or
/// the threshold is non-positive.
pub fn hill_index_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    let k = hill_k(n);
    if k < HILL_MIN_K {
        return f64::NAN;
    }
    let threshold = sorted[n - k];
    if threshold <= 0.0 {
        return f64::NAN;
    }
    sorted[n - k..].iter().map(|x| (x / threshold).ln()).sum::<f64>() / k as f64
}

/// Right-tail Hill index of unsorted `values`.
pub fn hill_index(values: &[f64]) -> f64 {
    hill_index_sorted(&crate::sample::sorted_copy(values))
}

/// Left-tail index: the Hill rule applied to the negated sample.
pub fn left_tail_index(values: &[f64]) -> f64 {
    let negated: Vec<f64> = values.iter().map(|x| -x).collect();
    let sorted = crate::sample::sorted_copy(&negated);
    let n = sorted.len();
    let k = hill_k(n);
    if k < HILL_MIN_K {
        return f64::NAN;
    }
    let threshold = sorted[n - k];
    if threshold <= 0.0 {
        return f64::NAN;
    }
    let sum: f64 = sorted[n - k..].iter().filter(|&&x| x > 0.0).map(|x| (x / threshold).ln()).sum();
    sum / k as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - The k selection rule and its cap.
    // - NaN for short samples and non-positive thresholds.
    // - Recovery of γ = 1/α for seeded Pareto draws.
    // -------------------------------------------------------------------------

    #[test]
    // Purpose
    // -------
    // k selection across sizes.
    //
    // Expect
    // ------
    // - n = 10 → 2, n = 25 → 5, n = 100 → 20, n = 10 000 → 500.
    fn k_selection_rule() {
        assert_eq!(hill_k(10), 2);
        assert_eq!(hill_k(25), 5);
        assert_eq!(hill_k(100), 20);
        assert_eq!(hill_k(10_000), 500);
    }

    #[test]
    // Purpose
    // -------
    // n = 10 is too small for either tail.
    fn small_samples_yield_nan() {
        let values: Vec<f64> = (1..=10).map(|i| i as f64).collect();
        assert!(hill_index(&values).is_nan());
        assert!(left_tail_index(&values).is_nan());
    }

    #[test]
    // Purpose
    // -------
    // A non-positive threshold is undefined.
    fn non_positive_threshold_yields_nan() {
        // Top 5 of 25 values are ≤ 0 in the right tail.
        let values: Vec<f64> = (0..25).map(|i| -(i as f64)).collect();
        assert!(hill_index(&values).is_nan());
        // Left tail of positive data: negated values are all < 0.
        let positive: Vec<f64> = (1..=25).map(|i| i as f64).collect();
        assert!(left_tail_index(&positive).is_nan());
    }

    #[test]
    // Purpose
    // -------
    // Pareto(α = 2) tails give γ ≈ 0.5 on both sides.
    //
    // Given
    // -----
    // - 20 000 seeded draws x = U^{-1/2}, and their negation.
    //
    // Expect
    // ------
    // - |γ̂ − 0.5| < 0.1 for the right tail of x and the left tail of −x.
    fn recovers_pareto_index() {
        let mut rng = StdRng::seed_from_u64(17);
        let draws: Vec<f64> =
            (0..20_000).map(|_| rng.gen_range(1e-12..1.0_f64).powf(-0.5)).collect();
        let negated: Vec<f64> = draws.iter().map(|x| -x).collect();

        let right = hill_index(&draws);
        let left = left_tail_index(&negated);

        assert!((right - 0.5).abs() < 0.1, "right = {right}");
        assert_relative_eq!(left, right, epsilon = 1e-12);
    }
}
