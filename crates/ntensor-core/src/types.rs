//! Core type definitions for ntensor tensors.
//!
//! - Element bound shared by tensors, views and kernels ([`Element`])
//! - Shape and stride containers ([`Shape`], [`Strides`])

use std::fmt::{Debug, Display};

use scirs2_core::numeric::{Num, NumCast};

pub use crate::layout::{Shape, Strides};

/// Numeric element stored in a tensor.
///
/// Implemented for every `Copy` numeric type, e.g. `f32`, `f64`, `i32`, `i64`.
///
/// # Examples
///
/// ```
/// use ntensor_core::{Element, Tensor, TensorConfig};
///
/// fn total<T: Element>(tensor: &Tensor<T>) -> T {
///     tensor.sum()
/// }
///
/// let t = Tensor::new(&[2, 2], 3i64, TensorConfig::default()).unwrap();
/// assert_eq!(total(&t), 12);
/// ```
pub trait Element:
    Copy + Num + NumCast + PartialOrd + Debug + Display + Send + Sync + 'static
{
}

impl<T> Element for T where
    T: Copy + Num + NumCast + PartialOrd + Debug + Display + Send + Sync + 'static
{
}
