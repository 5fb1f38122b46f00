//! Free-text tokenizer for pasted or loaded sample data.
//!
//! Input is split on whitespace, commas, and semicolons. Each token is
//! parsed as `f64`; tokens that fail to parse (headers, labels) or parse to
//! a non-finite value are counted as rejected and skipped. Quoting and
//! column selection are out of scope.
use crate::sample::data::Sample;
use crate::sample::errors::{SampleError, SampleResult};

/// Token separators besides whitespace.
const SEPARATORS: [char; 2] = [',', ';'];

/// Outcome of tokenizing a block of text.
///
/// Fields
/// ------
/// - `values`: finite numbers in input order.
/// - `rejected`: tokens that were skipped, in input order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Tokenized {
    pub values: Vec<f64>,
    pub rejected: Vec<String>,
}

/// Split `text` into finite numbers and rejected tokens.
pub fn tokenize(text: &str) -> Tokenized {
    let mut out = Tokenized::default();
    for token in text
        .split(|c: char| c.is_whitespace() || SEPARATORS.contains(&c))
        .filter(|t| !t.is_empty())
    {
        match token.parse::<f64>() {
            Ok(value) if value.is_finite() => out.values.push(value),
            _ => out.rejected.push(token.to_string()),
        }
    }
    out
}

impl Sample {
    /// Parse free text into a [`Sample`], skipping non-numeric tokens.
    ///
    /// Errors
    /// ------
    /// - `SampleError::NoNumericTokens` when nothing numeric was found
    ///   (including blank input).
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use rust_diagnostics::sample::Sample;
    /// let sample = Sample::parse("returns\n0.5, -1.25; 2e-3\tNaN").unwrap();
    /// assert_eq!(sample.as_slice(), &[0.5, -1.25, 0.002]);
    /// ```
    pub fn parse(text: &str) -> SampleResult<Sample> {
        let Tokenized { values, rejected } = tokenize(text);
        if values.is_empty() {
            return Err(SampleError::NoNumericTokens { rejected: rejected.len() });
        }
        Sample::from_vec(values)
    }
}
