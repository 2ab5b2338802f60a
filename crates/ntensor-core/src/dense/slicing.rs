//! Views over rank ≤ 2 tensors
//!
//! A rank-1 tensor of length `n` is viewed as a single `1 × n` row. Rank 3 and
//! above fail with [`TensorError::UnsupportedRank`].

use super::types::Tensor;
use crate::error::{TensorError, TensorResult};
use crate::types::Element;
use crate::view::{check_window, TensorView, TensorViewMut};

impl<T: Element> Tensor<T> {
    fn view_strides(&self) -> [usize; 2] {
        match self.strides.as_slice() {
            [row, col] => [*row, *col],
            // Rank 1: a single row whose row stride spans the whole buffer.
            _ => [self.data.len(), 1],
        }
    }

    /// Read-only view of the whole tensor
    pub fn view(&self) -> TensorResult<TensorView<'_, T>> {
        let (rows, cols) = self.matrix_dims("view")?;
        self.slice(0, rows, 0, cols)
    }

    /// Writable view of the whole tensor
    pub fn view_mut(&mut self) -> TensorResult<TensorViewMut<'_, T>> {
        let (rows, cols) = self.matrix_dims("view_mut")?;
        self.slice_mut(0, rows, 0, cols)
    }

    /// Read-only window over rows `row_lo..row_hi` and columns `col_lo..col_hi`
    ///
    /// # Errors
    ///
    /// - [`TensorError::UnsupportedRank`] for rank > 2
    /// - [`TensorError::InvalidSlice`] if `row_lo > row_hi`, `col_lo > col_hi`,
    ///   or the window extends past the tensor
    ///
    /// # Examples
    ///
    /// ```
    /// use ntensor_core::{Tensor, TensorConfig};
    ///
    /// let t = Tensor::from_fn(&[4, 4], TensorConfig::default(), |p| p[0] * 4 + p[1]).unwrap();
    /// let top_left = t.slice(0, 2, 0, 2).unwrap();
    /// assert_eq!(top_left.to_string(), "0 1 4 5");
    ///
    /// assert!(t.slice(0, 5, 0, 2).is_err());
    /// assert!(t.slice(3, 2, 0, 2).is_err());
    /// ```
    pub fn slice(
        &self,
        row_lo: usize,
        row_hi: usize,
        col_lo: usize,
        col_hi: usize,
    ) -> TensorResult<TensorView<'_, T>> {
        let (rows, cols) = self.matrix_dims("slice")?;
        check_window([rows, cols], row_lo, row_hi, col_lo, col_hi)?;
        let strides = self.view_strides();
        Ok(TensorView::new(
            &self.data,
            row_lo * strides[0] + col_lo * strides[1],
            [row_hi - row_lo, col_hi - col_lo],
            strides,
        ))
    }

    /// Writable window; writes land in this tensor's buffer
    ///
    /// # Errors
    ///
    /// Same as [`slice`](Tensor::slice).
    pub fn slice_mut(
        &mut self,
        row_lo: usize,
        row_hi: usize,
        col_lo: usize,
        col_hi: usize,
    ) -> TensorResult<TensorViewMut<'_, T>> {
        let (rows, cols) = self.matrix_dims("slice")?;
        check_window([rows, cols], row_lo, row_hi, col_lo, col_hi)?;
        let strides = self.view_strides();
        Ok(TensorViewMut::new(
            &mut self.data,
            row_lo * strides[0] + col_lo * strides[1],
            [row_hi - row_lo, col_hi - col_lo],
            strides,
        ))
    }
}
