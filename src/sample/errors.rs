//! Errors for sample construction, tokenizing, and pre-analysis validation.
//!
//! [`SampleError`] is the error type of the `sample` and `descriptive`
//! subtrees. Every variant carries just enough payload (offending index,
//! value, or required length) to produce a useful message without holding
//! on to the data.
//!
//! ## Conventions
//! - **Indices are 0-based** and refer to the position in the input vector
//!   (or, for tokenizing, the position among numeric tokens).
//! - Precondition violations fail fast; "cannot compute" results for a
//!   single estimator are not errors and never pass through this type.

/// Result alias for sample construction and descriptive statistics.
pub type SampleResult<T> = Result<T, SampleError>;

#[derive(Debug, Clone, PartialEq)]
pub enum SampleError {
    // ---- Input/data validation ----
    /// Operation requires at least one observation.
    EmptyInput,

    /// A data point is NaN/±inf.
    NonFiniteData { index: usize, value: f64 },

    // ---- Pre-analysis validation ----
    /// Fewer observations than the operation needs.
    InsufficientData { required: usize, actual: usize },

    /// Every observation has the same value, so scale-based statistics are
    /// undefined.
    ConstantSample { value: f64 },

    /// The sample varies, but its variance is zero or non-finite in `f64`
    /// (deviations underflow or their squares overflow).
    DegenerateVariance { variance: f64 },

    // ---- Tokenizing ----
    /// Free text contained no numeric token at all.
    NoNumericTokens { rejected: usize },
}

impl std::error::Error for SampleError {}

impl std::fmt::Display for SampleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SampleError::EmptyInput => write!(f, "Sample must contain at least one observation."),
            SampleError::NonFiniteData { index, value } => {
                write!(f, "Non-finite observation at index {index}: {value}")
            }
            SampleError::InsufficientData { required, actual } => {
                write!(f, "Need at least {required} observations, got {actual}.")
            }
            SampleError::ConstantSample { value } => {
                write!(f, "All observations equal {value}; the sample has zero variance.")
            }
            SampleError::DegenerateVariance { variance } => {
                write!(f, "Sample variance is {variance}; the data are out of numeric range.")
            }
            SampleError::NoNumericTokens { rejected } => {
                write!(f, "No numeric values found in input ({rejected} tokens rejected).")
            }
        }
    }
}
