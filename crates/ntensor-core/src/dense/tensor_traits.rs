//! Trait implementations for Tensor

use std::fmt;

use super::types::Tensor;
use crate::types::Element;
use crate::view::write_flat;

/// Flat dump of every element in linear order, separated by spaces.
///
/// ```
/// use ntensor_core::{Tensor, TensorConfig};
///
/// let t = Tensor::from_vec(&[2, 2], vec![1.5, 2.0, -3.0, 4.25], TensorConfig::default()).unwrap();
/// assert_eq!(t.to_string(), "1.5 2 -3 4.25");
/// ```
impl<T: Element> fmt::Display for Tensor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_flat(f, self.data.iter())
    }
}
