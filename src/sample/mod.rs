//! sample — validated input data, tokenizing, and pre-analysis guards.
//!
//! Purpose
//! -------
//! Own the boundary where raw numbers enter the crate. Everything
//! downstream takes a [`Sample`], so finiteness is checked exactly once.
//!
//! Key behaviors
//! -------------
//! - [`Sample::new`] / [`Sample::from_vec`] validate finiteness.
//! - [`Sample::parse`] / [`tokenize`] turn free text into numbers.
//! - [`validate_for_analysis`] enforces length and non-degeneracy for a
//!   full analysis run.
//!
//! Conventions
//! -----------
//! - Errors are reported via [`SampleError`] / [`SampleResult`], which are
//!   also used by `descriptive`.

pub mod data;
pub mod errors;
pub mod parse;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::data::{Sample, sorted_copy};
pub use self::errors::{SampleError, SampleResult};
pub use self::parse::{Tokenized, tokenize};
pub use self::validation::{MIN_ANALYSIS_LEN, require_len, validate_for_analysis};
