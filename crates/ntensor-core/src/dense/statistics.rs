//! Reductions over all elements
//!
//! Every reduction folds in linear (stride-1) order. `min`, `max` and `mean`
//! over zero elements fail with [`TensorError::EmptyReduction`]; a
//! constructed tensor always has at least one element, but an empty view
//! window reaches the same code.

use scirs2_core::numeric::NumCast;

use super::types::Tensor;
use crate::error::{TensorError, TensorResult};
use crate::types::Element;

pub(crate) fn sum_of<T: Element>(values: impl Iterator<Item = T>) -> T {
    values.fold(T::zero(), |acc, v| acc + v)
}

pub(crate) fn mean_of<T: Element>(values: impl Iterator<Item = T>) -> TensorResult<T> {
    let (sum, count) = values.fold((T::zero(), 0usize), |(acc, n), v| (acc + v, n + 1));
    if count == 0 {
        return Err(TensorError::EmptyReduction { operation: "mean" });
    }
    let divisor = <T as NumCast>::from(count).ok_or(TensorError::NumericCast { count })?;
    Ok(sum / divisor)
}

/// Keeps the first element that wins `better`; NaN never wins a comparison.
pub(crate) fn extremum_of<T, F>(
    mut values: impl Iterator<Item = T>,
    operation: &'static str,
    better: F,
) -> TensorResult<T>
where
    T: Element,
    F: Fn(&T, &T) -> bool,
{
    let first = values
        .next()
        .ok_or(TensorError::EmptyReduction { operation })?;
    Ok(values.fold(first, |best, v| if better(&v, &best) { v } else { best }))
}

impl<T: Element> Tensor<T> {
    /// Sum of all elements
    ///
    /// # Examples
    ///
    /// ```
    /// use ntensor_core::{Tensor, TensorConfig};
    ///
    /// let t = Tensor::new(&[2, 5], 1.5f64, TensorConfig::default()).unwrap();
    /// assert_eq!(t.sum(), 15.0);
    /// ```
    pub fn sum(&self) -> T {
        sum_of(self.data.iter().copied())
    }

    /// Arithmetic mean of all elements
    ///
    /// For integer element types the division truncates.
    pub fn mean(&self) -> TensorResult<T> {
        mean_of(self.data.iter().copied())
    }

    /// Smallest element
    ///
    /// # Examples
    ///
    /// ```
    /// use ntensor_core::{Tensor, TensorConfig};
    ///
    /// let t = Tensor::from_vec(&[4], vec![3, -1, 7, 2], TensorConfig::default()).unwrap();
    /// assert_eq!(t.min(), Ok(-1));
    /// assert_eq!(t.max(), Ok(7));
    /// ```
    pub fn min(&self) -> TensorResult<T> {
        extremum_of(self.data.iter().copied(), "min", |a, b| a < b)
    }

    /// Largest element
    pub fn max(&self) -> TensorResult<T> {
        extremum_of(self.data.iter().copied(), "max", |a, b| a > b)
    }
}
