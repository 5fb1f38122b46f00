//! Validated sample container.
//!
//! Purpose
//! -------
//! Provide [`Sample`], the single input type of every statistic in the
//! crate: an ordered sequence of finite real numbers stored as an
//! `ndarray::Array1<f64>`.
//!
//! Key behaviors
//! -------------
//! - [`Sample::new`] rejects NaN/±∞ and reports the first offending index.
//! - Empty samples are accepted; each operation enforces its own minimum
//!   length and reports [`SampleError::EmptyInput`] or
//!   [`SampleError::InsufficientData`] itself.
//! - Sorting never touches the stored data; [`Sample::sorted`] returns a
//!   fresh, ascending copy.
//!
//! Invariants & assumptions
//! ------------------------
//! - All stored values are finite.
//! - Storage is contiguous in standard layout, so [`Sample::as_slice`]
//!   always sees every observation.
//!
//! Downstream usage
//! ----------------
//! - Statistics take `&Sample` and borrow the slice; none of them keeps a
//!   reference after returning.
use crate::sample::errors::{SampleError, SampleResult};
use ndarray::Array1;

/// `Sample` — ordered, finite real observations.
///
/// Fields
/// ------
/// - `data`: `Array1<f64>`
///   Observations in input order. Finite, possibly empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample {
    data: Array1<f64>,
}

impl Sample {
    /// Construct a validated [`Sample`].
    ///
    /// Parameters
    /// ----------
    /// - `data`: `Array1<f64>`
    ///   Observations in input order.
    ///
    /// Returns
    /// -------
    /// `SampleResult<Sample>`
    ///   The validated sample, stored in standard layout.
    ///
    /// Errors
    /// ------
    /// - `SampleError::NonFiniteData { index, value }`
    ///   Returned for the first NaN/±∞ element.
    ///
    /// Examples
    /// --------
    /// ```rust
    /// # use ndarray::array;
    /// # use rust_diagnostics::sample::Sample;
    /// let sample = Sample::new(array![0.5, -1.0, 2.0]).unwrap();
    /// assert_eq!(sample.len(), 3);
    /// assert!(Sample::new(array![1.0, f64::NAN]).is_err());
    /// ```
    pub fn new(data: Array1<f64>) -> SampleResult<Self> {
        for (index, &value) in data.iter().enumerate() {
            if !value.is_finite() {
                return Err(SampleError::NonFiniteData { index, value });
            }
        }
        let data = data.as_standard_layout().into_owned();
        Ok(Sample { data })
    }

    /// Construct a [`Sample`] from a plain vector.
    pub fn from_vec(values: Vec<f64>) -> SampleResult<Self> {
        Sample::new(Array1::from(values))
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Borrow the observations as a slice, in input order.
    pub fn as_slice(&self) -> &[f64] {
        // Standard layout is enforced in `new`.
        self.data.as_slice().unwrap_or(&[])
    }

    /// Ascending copy of the observations. The sample itself is unchanged.
    pub fn sorted(&self) -> Vec<f64> {
        sorted_copy(self.as_slice())
    }

    /// Element-wise square, `xᵢ²`.
    pub fn squared(&self) -> Vec<f64> {
        self.data.iter().map(|x| x * x).collect()
    }
}

impl TryFrom<Vec<f64>> for Sample {
    type Error = SampleError;

    fn try_from(values: Vec<f64>) -> SampleResult<Self> {
        Sample::from_vec(values)
    }
}

/// Ascending copy of `values` using the IEEE total order.
///
/// All callers pass finite data, where `total_cmp` agrees with `<`.
pub fn sorted_copy(values: &[f64]) -> Vec<f64> {
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    sorted
}
