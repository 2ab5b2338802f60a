//! Element-wise arithmetic
//!
//! Binary operations require identical shapes; there is no broadcasting.
//! Results inherit the left operand's configuration.

use super::types::Tensor;
use crate::error::{TensorError, TensorResult};
use crate::types::Element;

impl<T: Element> Tensor<T> {
    /// Element-wise sum into a new tensor
    ///
    /// # Errors
    ///
    /// [`TensorError::ShapeMismatch`] carrying both shapes when they differ.
    ///
    /// # Examples
    ///
    /// ```
    /// use ntensor_core::{Tensor, TensorConfig};
    ///
    /// let cfg = TensorConfig::default();
    /// let a = Tensor::from_vec(&[2], vec![1, 2], cfg).unwrap();
    /// let b = Tensor::from_vec(&[2], vec![10, 20], cfg).unwrap();
    /// assert_eq!(a.add(&b).unwrap().as_slice(), &[11, 22]);
    /// ```
    pub fn add(&self, other: &Self) -> TensorResult<Self> {
        self.zip_with(other, "add", |a, b| a + b)
    }

    /// Element-wise difference into a new tensor
    ///
    /// # Errors
    ///
    /// [`TensorError::ShapeMismatch`] carrying both shapes when they differ.
    pub fn sub(&self, other: &Self) -> TensorResult<Self> {
        self.zip_with(other, "sub", |a, b| a - b)
    }

    /// Multiply every element by `scalar` in place
    ///
    /// # Examples
    ///
    /// ```
    /// use ntensor_core::{Tensor, TensorConfig};
    ///
    /// let mut t = Tensor::new(&[2, 2], 1.5f32, TensorConfig::default()).unwrap();
    /// t.scale_in_place(2.0);
    /// assert!(t.as_slice().iter().all(|&v| v == 3.0));
    /// ```
    pub fn scale_in_place(&mut self, scalar: T) {
        self.map_inplace(|v| v * scalar);
    }

    /// Apply `f` to every element in place
    pub fn map_inplace<F>(&mut self, f: F)
    where
        F: Fn(T) -> T,
    {
        for v in self.data.iter_mut() {
            *v = f(*v);
        }
    }

    fn zip_with<F>(&self, other: &Self, operation: &'static str, f: F) -> TensorResult<Self>
    where
        F: Fn(T, T) -> T,
    {
        if self.shape != other.shape {
            return Err(TensorError::shape_mismatch(
                operation,
                &self.shape,
                &other.shape,
            ));
        }
        let data = self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| f(a, b))
            .collect();
        Ok(Self {
            shape: self.shape.clone(),
            strides: self.strides.clone(),
            config: self.config,
            data,
        })
    }
}
