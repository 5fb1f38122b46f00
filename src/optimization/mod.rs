//! optimization — derivative-free bracket search and its error surface.
//!
//! Purpose
//! -------
//! Provide the one-dimensional minimizer used to calibrate shape
//! parameters by maximum likelihood, together with a single error/result
//! surface. Callers express the objective as an
//! `argmin::core::CostFunction` (or wrap a closure in
//! [`golden_section::FnObjective`]) and obtain the minimizer without
//! touching search internals.
//!
//! Key behaviors
//! -------------
//! - [`golden_section::golden_section_search`] minimizes a unimodal
//!   objective over a bounded bracket to a fixed absolute tolerance.
//! - [`errors::OptError`] normalizes configuration issues, non-finite
//!   costs, and objective errors.
//!
//! Conventions
//! -----------
//! - Likelihood maximization is expressed as minimization of the negative
//!   log-likelihood `c(θ) = −ℓ(θ)`.
//! - This module never logs or performs I/O.
//!
//! Testing notes
//! -------------
//! - Unit tests cover convergence on convex quadratics, edge minima, bracket
//!   and tolerance validation, and error propagation from objectives.

pub mod errors;
pub mod golden_section;

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::errors::{OptError, OptResult};
    pub use super::golden_section::{
        FnObjective, GoldenSectionOutcome, golden_section_minimize, golden_section_search,
    };
}
