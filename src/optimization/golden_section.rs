//! Bounded golden-section search for unimodal one-dimensional objectives.
//!
//! Purpose
//! -------
//! Minimize a scalar objective over a closed bracket `[a, b]` without
//! derivatives. The bracket is shrunk by the inverse golden ratio each
//! iteration until its width is at most `tol`, and the midpoint of the final
//! bracket is returned.
//!
//! Key behaviors
//! -------------
//! - Objectives are `argmin::core::CostFunction`s with `Param = f64` and
//!   `Output = f64`; plain closures are wrapped with [`FnObjective`].
//! - Deterministic: the same objective and bracket always visit the same
//!   points.
//! - Bracket and tolerance are validated up front and objective errors are
//!   propagated as [`OptError`] rather than panicking.
//!
//! Invariants & assumptions
//! ------------------------
//! - The objective is assumed unimodal on `[a, b]`. This is a caveat, not a
//!   guarded condition: on multimodal input the search still terminates but
//!   may return any local minimizer.
//! - Each iteration keeps the interior points `c < d` at the golden ratios
//!   of the current bracket and reuses one cost value, so the number of
//!   evaluations is `iterations + 2`.
//!
//! Downstream usage
//! ----------------
//! - `distributions::student_t` calibrates the degrees of freedom by
//!   minimizing a negative log-likelihood over ν ∈ [2, 50] with `tol = 0.1`.
use argmin::core::{CostFunction, Error};

use crate::optimization::errors::{OptError, OptResult};

/// Golden ratio φ = (1 + √5) / 2.
pub const PHI: f64 = 1.618_033_988_749_895;

/// Interior-point fraction `2 − φ ≈ 0.382`.
pub const RESPHI: f64 = 2.0 - PHI;

/// Safety cap on bracket reductions. A positive tolerance is normally met
/// long before this (the width shrinks by ~0.618 per step); the cap only
/// triggers when `tol` is below the floating-point resolution of the
/// endpoints.
pub const MAX_GOLDEN_ITERS: usize = 2_000;

/// Adapter turning a closure `Fn(f64) -> f64` into an argmin cost function.
#[derive(Debug, Clone, Copy)]
pub struct FnObjective<F>(pub F);

impl<F: Fn(f64) -> f64> CostFunction for FnObjective<F> {
    type Param = f64;
    type Output = f64;

    fn cost(&self, x: &Self::Param) -> Result<Self::Output, Error> {
        Ok((self.0)(*x))
    }
}

/// Result of a golden-section run.
///
/// Fields
/// ------
/// - `x_min`: midpoint of the final bracket (the reported minimizer).
/// - `lower`, `upper`: final bracket, `upper − lower <= tol`.
/// - `iterations`: number of bracket reductions performed.
/// - `cost_evals`: number of objective evaluations (`iterations + 2`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoldenSectionOutcome {
    pub x_min: f64,
    pub lower: f64,
    pub upper: f64,
    pub iterations: usize,
    pub cost_evals: usize,
}

/// Minimize `problem` over `[lower, upper]` and return the midpoint of the
/// final bracket.
///
/// Parameters
/// ----------
/// - `problem`: `&P`
///   Unimodal objective on the bracket.
/// - `lower`, `upper`: `f64`
///   Finite bracket endpoints with `lower < upper`.
/// - `tol`: `f64`
///   Positive, finite bracket width at which the search stops.
///
/// Returns
/// -------
/// `OptResult<f64>`
///   The midpoint of the final bracket.
///
/// Errors
/// ------
/// - `OptError::InvalidBracket` for non-finite or inverted endpoints.
/// - `OptError::InvalidTolerance` for `tol <= 0` or non-finite `tol`.
/// - `OptError::NonFiniteCost` when the objective returns NaN or ±∞.
/// - Any error raised by the objective, converted through
///   `From<argmin::core::Error>`.
/// - `OptError::IterationLimit` if the bracket stalls above `tol`.
///
/// Examples
/// --------
/// ```rust
/// use rust_diagnostics::optimization::golden_section::{FnObjective, golden_section_search};
///
/// let x = golden_section_search(&FnObjective(|x: f64| (x - 3.0).powi(2)), 0.0, 10.0, 1e-6)
///     .unwrap();
/// assert!((x - 3.0).abs() < 1e-6);
/// ```
pub fn golden_section_search<P>(problem: &P, lower: f64, upper: f64, tol: f64) -> OptResult<f64>
where
    P: CostFunction<Param = f64, Output = f64>,
{
    golden_section_minimize(problem, lower, upper, tol).map(|outcome| outcome.x_min)
}

/// Same as [`golden_section_search`] but returns the full
/// [`GoldenSectionOutcome`].
pub fn golden_section_minimize<P>(
    problem: &P, lower: f64, upper: f64, tol: f64,
) -> OptResult<GoldenSectionOutcome>
where
    P: CostFunction<Param = f64, Output = f64>,
{
    validate_search(lower, upper, tol)?;

    let mut a = lower;
    let mut b = upper;
    let mut c = a + RESPHI * (b - a);
    let mut d = b - RESPHI * (b - a);
    let mut fc = eval_cost(problem, c)?;
    let mut fd = eval_cost(problem, d)?;
    let mut iterations = 0;

    while b - a > tol {
        if iterations >= MAX_GOLDEN_ITERS {
            return Err(OptError::IterationLimit { iterations, width: b - a });
        }
        if fc < fd {
            b = d;
            d = c;
            fd = fc;
            c = a + RESPHI * (b - a);
            fc = eval_cost(problem, c)?;
        } else {
            a = c;
            c = d;
            fc = fd;
            d = b - RESPHI * (b - a);
            fd = eval_cost(problem, d)?;
        }
        iterations += 1;
    }

    Ok(GoldenSectionOutcome {
        x_min: 0.5 * (a + b),
        lower: a,
        upper: b,
        iterations,
        cost_evals: iterations + 2,
    })
}

fn validate_search(lower: f64, upper: f64, tol: f64) -> OptResult<()> {
    if !lower.is_finite() || !upper.is_finite() || lower >= upper {
        return Err(OptError::InvalidBracket { lower, upper });
    }
    if !tol.is_finite() {
        return Err(OptError::InvalidTolerance { tol, reason: "tolerance must be finite" });
    }
    if tol <= 0.0 {
        return Err(OptError::InvalidTolerance { tol, reason: "tolerance must be positive" });
    }
    Ok(())
}

#[inline]
fn eval_cost<P>(problem: &P, x: f64) -> OptResult<f64>
where
    P: CostFunction<Param = f64, Output = f64>,
{
    let value = problem.cost(&x)?;
    if !value.is_finite() {
        return Err(OptError::NonFiniteCost { x, value });
    }
    Ok(value)
}
