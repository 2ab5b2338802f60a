//! Element access by coordinate
//!
//! A coordinate maps to `Σ pos[i] * stride[i]`. Access fails when the
//! coordinate arity differs from the rank or the offset falls outside the
//! buffer; no per-axis check is made, so `[0, 5]` on a 4×4 tensor addresses
//! the same element as `[1, 1]`.

use super::types::Tensor;
use crate::error::TensorResult;
use crate::layout;
use crate::types::Element;

impl<T: Element> Tensor<T> {
    /// Flat buffer offset of `position`
    ///
    /// # Errors
    ///
    /// [`RankMismatch`](crate::TensorError::RankMismatch) when
    /// `position.len() != rank`, [`IndexOutOfRange`](crate::TensorError::IndexOutOfRange)
    /// when the offset is not below [`len`](Tensor::len).
    pub fn offset_of(&self, position: &[usize]) -> TensorResult<usize> {
        layout::flat_offset(position, &self.strides, self.data.len())
    }

    /// Read an element
    ///
    /// # Examples
    ///
    /// ```
    /// use ntensor_core::{Tensor, TensorConfig, TensorError};
    ///
    /// let t = Tensor::from_vec(&[2, 2], vec![1.0, 2.0, 3.0, 4.0], TensorConfig::default()).unwrap();
    /// assert_eq!(t.get(&[0, 1]), Ok(&2.0));
    /// assert!(matches!(t.get(&[0]), Err(TensorError::RankMismatch { .. })));
    /// assert!(matches!(t.get(&[2, 0]), Err(TensorError::IndexOutOfRange { .. })));
    /// ```
    pub fn get(&self, position: &[usize]) -> TensorResult<&T> {
        let offset = self.offset_of(position)?;
        Ok(&self.data[offset])
    }

    /// Mutable reference to an element
    ///
    /// # Examples
    ///
    /// ```
    /// use ntensor_core::{Tensor, TensorConfig};
    ///
    /// let mut t = Tensor::new(&[2, 3], 0i32, TensorConfig::default()).unwrap();
    /// *t.get_mut(&[1, 2]).unwrap() = 42;
    /// assert_eq!(t.as_slice(), &[0, 0, 0, 0, 0, 42]);
    /// ```
    pub fn get_mut(&mut self, position: &[usize]) -> TensorResult<&mut T> {
        let offset = self.offset_of(position)?;
        Ok(&mut self.data[offset])
    }

    /// Write an element
    pub fn set(&mut self, position: &[usize], value: T) -> TensorResult<()> {
        *self.get_mut(position)? = value;
        Ok(())
    }
}
