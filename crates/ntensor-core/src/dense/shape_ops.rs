//! Shape operations that reuse the existing buffer

use super::types::Tensor;
use crate::error::{TensorError, TensorResult};
use crate::layout::{self, Shape};
use crate::types::Element;

impl<T: Element> Tensor<T> {
    /// Reinterpret the buffer under a new shape
    ///
    /// The tensor is consumed and its buffer moves into the result without
    /// reallocation. Row-major order is unchanged, so element `k` of
    /// [`as_slice`](Tensor::as_slice) is the same before and after.
    ///
    /// # Errors
    ///
    /// [`TensorError::InvalidShape`] if `shape` is invalid or addresses a
    /// different number of elements. The tensor is dropped in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use ntensor_core::{Tensor, TensorConfig};
    ///
    /// let t = Tensor::from_fn(&[2, 3, 4], TensorConfig::default(), |p| p[2]).unwrap();
    /// let r = t.reshape(&[6, 4]).unwrap();
    /// assert_eq!(r.shape(), &[6, 4]);
    /// assert_eq!(r.strides(), &[4, 1]);
    /// ```
    pub fn reshape(self, shape: &[usize]) -> TensorResult<Self> {
        if layout::validate_shape(shape)? != self.data.len() {
            return Err(TensorError::InvalidShape {
                shape: shape.to_vec(),
                reason: "element count differs from the source tensor",
            });
        }
        Ok(Self {
            shape: Shape::from_slice(shape),
            strides: layout::row_major_strides(shape),
            config: self.config,
            data: self.data,
        })
    }

    /// Reshape to `1 × len` over the same buffer
    ///
    /// Works for any source rank; linear order is preserved.
    ///
    /// # Examples
    ///
    /// ```
    /// use ntensor_core::{Tensor, TensorConfig};
    ///
    /// let t = Tensor::from_fn(&[2, 2, 2], TensorConfig::default(), |p| p[0] * 4 + p[1] * 2 + p[2])
    ///     .unwrap();
    /// let flat = t.flatten();
    /// assert_eq!(flat.shape(), &[1, 8]);
    /// assert_eq!(flat.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7]);
    /// ```
    pub fn flatten(self) -> Self {
        let len = self.data.len();
        Self {
            shape: Shape::from_slice(&[1, len]),
            strides: layout::row_major_strides(&[1, len]),
            config: self.config,
            data: self.data,
        }
    }
}
