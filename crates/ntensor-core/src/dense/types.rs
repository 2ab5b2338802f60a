//! Owning tensor type definition and basic operations
//!
//! This module defines the core `Tensor<T>` type and provides creation and
//! accessor methods. Additional operations are organized in sibling modules.

use crate::config::TensorConfig;
use crate::error::{TensorError, TensorResult};
use crate::layout::{self, Shape, Strides};
use crate::types::Element;

/// Dense N-dimensional tensor that exclusively owns a contiguous buffer
///
/// Shape, strides and size are derived once at construction and never change
/// for the lifetime of the value. [`reshape`](Tensor::reshape) and
/// [`flatten`](Tensor::flatten) consume the tensor and hand the same buffer to
/// a new one, so no borrowed view can observe a reshaped parent.
///
/// # Memory Layout
///
/// Elements are stored row-major: the last axis has stride 1.
///
/// # Examples
///
/// ```
/// use ntensor_core::{Tensor, TensorConfig};
///
/// let tensor = Tensor::new(&[2, 3, 4], 0.5f64, TensorConfig::default()).unwrap();
/// assert_eq!(tensor.shape(), &[2, 3, 4]);
/// assert_eq!(tensor.strides(), &[12, 4, 1]);
/// assert_eq!(tensor.rank(), 3);
/// assert_eq!(tensor.len(), 24);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Tensor<T> {
    pub(crate) shape: Shape,
    pub(crate) strides: Strides,
    pub(crate) config: TensorConfig,
    pub(crate) data: Vec<T>,
}

impl<T: Element> Tensor<T> {
    /// Create a tensor with every element set to `fill`
    ///
    /// # Errors
    ///
    /// [`TensorError::InvalidShape`] if `shape` is empty, has a zero extent or
    /// addresses more elements than `usize` can count.
    pub fn new(shape: &[usize], fill: T, config: TensorConfig) -> TensorResult<Self> {
        let size = layout::validate_shape(shape)?;
        Ok(Self {
            shape: Shape::from_slice(shape),
            strides: layout::row_major_strides(shape),
            config,
            data: vec![fill; size],
        })
    }

    /// Create a zero-filled tensor
    ///
    /// # Examples
    ///
    /// ```
    /// use ntensor_core::{Tensor, TensorConfig};
    ///
    /// let zeros = Tensor::<f32>::zeros(&[3, 3], TensorConfig::default()).unwrap();
    /// assert_eq!(zeros.sum(), 0.0);
    /// ```
    pub fn zeros(shape: &[usize], config: TensorConfig) -> TensorResult<Self> {
        Self::new(shape, T::zero(), config)
    }

    /// Create a tensor from row-major data
    ///
    /// # Errors
    ///
    /// [`TensorError::InvalidShape`] for an invalid shape or when `data` does
    /// not hold exactly as many elements as `shape` addresses.
    ///
    /// # Examples
    ///
    /// ```
    /// use ntensor_core::{Tensor, TensorConfig};
    ///
    /// let t = Tensor::from_vec(&[2, 2], vec![1, 2, 3, 4], TensorConfig::default()).unwrap();
    /// assert_eq!(t.get(&[1, 0]), Ok(&3));
    ///
    /// assert!(Tensor::from_vec(&[2, 2], vec![1, 2, 3], TensorConfig::default()).is_err());
    /// ```
    pub fn from_vec(shape: &[usize], data: Vec<T>, config: TensorConfig) -> TensorResult<Self> {
        if data.len() != layout::validate_shape(shape)? {
            return Err(TensorError::InvalidShape {
                shape: shape.to_vec(),
                reason: "element count does not match data length",
            });
        }
        Ok(Self {
            shape: Shape::from_slice(shape),
            strides: layout::row_major_strides(shape),
            config,
            data,
        })
    }

    /// Create a tensor by evaluating `f` at every coordinate in row-major order
    ///
    /// # Examples
    ///
    /// ```
    /// use ntensor_core::{Tensor, TensorConfig};
    ///
    /// let t = Tensor::from_fn(&[2, 3], TensorConfig::default(), |pos| (pos[0] * 10 + pos[1]) as i32)
    ///     .unwrap();
    /// assert_eq!(t.as_slice(), &[0, 1, 2, 10, 11, 12]);
    /// ```
    pub fn from_fn<F>(shape: &[usize], config: TensorConfig, mut f: F) -> TensorResult<Self>
    where
        F: FnMut(&[usize]) -> T,
    {
        let size = layout::validate_shape(shape)?;
        let mut data = Vec::with_capacity(size);
        let mut position = vec![0usize; shape.len()];
        for _ in 0..size {
            data.push(f(&position));
            // Odometer increment, last axis fastest.
            for axis in (0..shape.len()).rev() {
                position[axis] += 1;
                if position[axis] < shape[axis] {
                    break;
                }
                position[axis] = 0;
            }
        }
        Self::from_vec(shape, data, config)
    }
}

impl<T> Tensor<T> {
    /// Dimension extents
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// Row-major strides, one per axis
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Number of dimensions
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// Total number of elements (buffer length)
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always false for a constructed tensor; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Configuration supplied at construction
    pub fn config(&self) -> &TensorConfig {
        &self.config
    }

    /// Check if this is a square matrix (2D tensor with equal dimensions).
    pub fn is_square(&self) -> bool {
        self.rank() == 2 && self.shape[0] == self.shape[1]
    }

    /// Elements in linear (row-major) order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Mutable elements in linear (row-major) order
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Give up the tensor and return its buffer
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Extents as a `(rows, cols)` pair for rank ≤ 2; rank 1 is a single row.
    pub(crate) fn matrix_dims(&self, operation: &'static str) -> TensorResult<(usize, usize)> {
        match self.shape.as_slice() {
            [cols] => Ok((1, *cols)),
            [rows, cols] => Ok((*rows, *cols)),
            _ => Err(TensorError::unsupported_rank(operation, self.rank(), 1, 2)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fills_every_element() {
        let t = Tensor::new(&[3, 4], 7i32, TensorConfig::default()).unwrap();
        assert!(t.as_slice().iter().all(|&v| v == 7));
        assert_eq!(t.len(), 12);
        assert_eq!(t.strides(), &[4, 1]);
    }

    #[test]
    fn test_new_rejects_invalid_shapes() {
        let cfg = TensorConfig::default();
        assert!(matches!(
            Tensor::new(&[], 0.0f32, cfg),
            Err(TensorError::InvalidShape { .. })
        ));
        assert!(matches!(
            Tensor::new(&[3, 0], 0.0f32, cfg),
            Err(TensorError::InvalidShape { .. })
        ));
    }

    #[test]
    fn test_new_rejects_overflowing_element_count() {
        let huge = [1usize << 33, 1 << 33, 1 << 33];
        let err = Tensor::<u8>::new(&huge, 0, TensorConfig::default()).unwrap_err();
        assert_eq!(
            err,
            TensorError::InvalidShape {
                shape: huge.to_vec(),
                reason: "element count overflows usize",
            }
        );
        assert!(Tensor::<u8>::zeros(&huge, TensorConfig::default()).is_err());
    }

    #[test]
    fn test_from_vec_length_mismatch() {
        let err = Tensor::from_vec(&[2, 3], vec![1.0f64; 5], TensorConfig::default()).unwrap_err();
        assert!(matches!(err, TensorError::InvalidShape { .. }));
    }

    #[test]
    fn test_from_fn_row_major_order() {
        let t = Tensor::from_fn(&[2, 2, 2], TensorConfig::default(), |p| {
            (p[0] * 4 + p[1] * 2 + p[2]) as i64
        })
        .unwrap();
        assert_eq!(t.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_config_is_kept() {
        let cfg = TensorConfig::new().with_strassen_threshold(0);
        let t = Tensor::<f32>::zeros(&[2, 2], cfg).unwrap();
        assert_eq!(t.config().strassen_threshold, 0);
        assert!(t.is_square());
    }

    #[test]
    fn test_matrix_dims() {
        let cfg = TensorConfig::default();
        let row = Tensor::<f32>::zeros(&[5], cfg).unwrap();
        assert_eq!(row.matrix_dims("view"), Ok((1, 5)));

        let cube = Tensor::<f32>::zeros(&[2, 2, 2], cfg).unwrap();
        assert!(matches!(
            cube.matrix_dims("view"),
            Err(TensorError::UnsupportedRank { rank: 3, .. })
        ));
    }
}
