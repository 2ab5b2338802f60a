//! Borrowed rectangular windows into a tensor's buffer.
//!
//! A view is a base offset, a `[rows, cols]` extent and a `[row, col]` stride
//! pair over the parent's buffer. Descriptors are copied by value; the buffer
//! is borrowed, so a view cannot outlive its parent and the parent cannot be
//! reshaped, flattened or dropped while a view is alive:
//!
//! ```compile_fail
//! use ntensor_core::{Tensor, TensorConfig};
//!
//! let tensor = Tensor::new(&[4, 4], 0.0f32, TensorConfig::default()).unwrap();
//! let view = tensor.slice(0, 2, 0, 2).unwrap();
//! let flat = tensor.flatten(); // moves the parent while `view` borrows it
//! println!("{}", view);
//! ```
//!
//! Element `(i, j)` lives at `offset + i * strides[0] + j * strides[1]`.
//!
//! [`TensorViewMut`] adds writes and the scratch helpers used by the matmul
//! kernels: [`combine_add`](TensorViewMut::combine_add),
//! [`combine_sub`](TensorViewMut::combine_sub) and
//! [`copy_from`](TensorViewMut::copy_from).

use std::fmt;

use crate::config::TensorConfig;
use crate::dense::statistics::{extremum_of, mean_of, sum_of};
use crate::dense::Tensor;
use crate::error::{TensorError, TensorResult};
use crate::types::Element;

/// Validate `row_lo..row_hi, col_lo..col_hi` against a `[rows, cols]` extent.
pub(crate) fn check_window(
    shape: [usize; 2],
    row_lo: usize,
    row_hi: usize,
    col_lo: usize,
    col_hi: usize,
) -> TensorResult<()> {
    if row_lo <= row_hi && row_hi <= shape[0] && col_lo <= col_hi && col_hi <= shape[1] {
        Ok(())
    } else {
        Err(TensorError::InvalidSlice {
            row_lo,
            row_hi,
            col_lo,
            col_hi,
            shape: shape.to_vec(),
        })
    }
}

fn check_index(shape: [usize; 2], i: usize, j: usize) -> TensorResult<()> {
    if i < shape[0] && j < shape[1] {
        Ok(())
    } else {
        Err(TensorError::IndexOutOfRange {
            position: vec![i, j],
            offset: i.saturating_mul(shape[1]).saturating_add(j),
            size: shape[0] * shape[1],
        })
    }
}

fn check_same_shape(operation: &'static str, lhs: [usize; 2], rhs: [usize; 2]) -> TensorResult<()> {
    if lhs == rhs {
        Ok(())
    } else {
        Err(TensorError::shape_mismatch(operation, &lhs, &rhs))
    }
}

/// Read-only window into a tensor
#[derive(Clone, Copy, Debug)]
pub struct TensorView<'a, T> {
    data: &'a [T],
    offset: usize,
    shape: [usize; 2],
    strides: [usize; 2],
}

impl<'a, T: Element> TensorView<'a, T> {
    /// Caller guarantees every addressed element lies inside `data`.
    pub(crate) fn new(data: &'a [T], offset: usize, shape: [usize; 2], strides: [usize; 2]) -> Self {
        Self {
            data,
            offset,
            shape,
            strides,
        }
    }

    pub fn shape(&self) -> [usize; 2] {
        self.shape
    }

    pub fn rows(&self) -> usize {
        self.shape[0]
    }

    pub fn cols(&self) -> usize {
        self.shape[1]
    }

    pub fn strides(&self) -> [usize; 2] {
        self.strides
    }

    /// Offset of element `(0, 0)` in the parent buffer
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.shape[0] * self.shape[1]
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    fn flat(&self, i: usize, j: usize) -> usize {
        self.offset + i * self.strides[0] + j * self.strides[1]
    }

    /// Reference to element `(i, j)`, tied to the parent's lifetime
    ///
    /// # Examples
    ///
    /// ```
    /// use ntensor_core::{Tensor, TensorConfig};
    ///
    /// let t = Tensor::from_fn(&[3, 3], TensorConfig::default(), |p| p[0] * 3 + p[1]).unwrap();
    /// let view = t.slice(1, 3, 1, 3).unwrap();
    /// assert_eq!(view.get(0, 0), Ok(&4));
    /// assert_eq!(view.get(1, 1), Ok(&8));
    /// assert!(view.get(2, 0).is_err());
    /// ```
    pub fn get(&self, i: usize, j: usize) -> TensorResult<&'a T> {
        check_index(self.shape, i, j)?;
        let data: &'a [T] = self.data;
        Ok(&data[self.flat(i, j)])
    }

    /// Element `(i, j)` by value
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows` or `j >= cols`. Kernels call this after checking
    /// shapes once per operation.
    #[inline]
    pub fn at(&self, i: usize, j: usize) -> T {
        assert!(
            i < self.shape[0] && j < self.shape[1],
            "view index ({}, {}) out of bounds for shape {:?}",
            i,
            j,
            self.shape
        );
        self.data[self.flat(i, j)]
    }

    /// Sub-window relative to this view
    pub fn slice(
        &self,
        row_lo: usize,
        row_hi: usize,
        col_lo: usize,
        col_hi: usize,
    ) -> TensorResult<TensorView<'a, T>> {
        check_window(self.shape, row_lo, row_hi, col_lo, col_hi)?;
        Ok(TensorView::new(
            self.data,
            self.flat(row_lo, col_lo),
            [row_hi - row_lo, col_hi - col_lo],
            self.strides,
        ))
    }

    /// Split into top-left, top-right, bottom-left and bottom-right halves
    ///
    /// # Errors
    ///
    /// [`TensorError::UnsupportedDimension`] unless both extents are even.
    pub fn quadrants(&self) -> TensorResult<[TensorView<'a, T>; 4]> {
        let [rows, cols] = self.shape;
        if rows % 2 != 0 || cols % 2 != 0 {
            return Err(TensorError::UnsupportedDimension {
                operation: "quadrants",
                rows,
                cols,
                reason: "extents must be even",
            });
        }
        let (r, c) = (rows / 2, cols / 2);
        Ok([
            self.slice(0, r, 0, c)?,
            self.slice(0, r, c, cols)?,
            self.slice(r, rows, 0, c)?,
            self.slice(r, rows, c, cols)?,
        ])
    }

    /// Elements in row-major order
    pub fn iter(&self) -> impl Iterator<Item = T> + 'a {
        let view = *self;
        (0..view.shape[0]).flat_map(move |i| (0..view.shape[1]).map(move |j| view.at(i, j)))
    }

    pub fn sum(&self) -> T {
        sum_of(self.iter())
    }

    pub fn mean(&self) -> TensorResult<T> {
        mean_of(self.iter())
    }

    /// # Errors
    ///
    /// [`TensorError::EmptyReduction`] for an empty window.
    pub fn min(&self) -> TensorResult<T> {
        extremum_of(self.iter(), "min", |a, b| a < b)
    }

    /// # Errors
    ///
    /// [`TensorError::EmptyReduction`] for an empty window.
    pub fn max(&self) -> TensorResult<T> {
        extremum_of(self.iter(), "max", |a, b| a > b)
    }

    /// Copy the window into a new `rows × cols` tensor
    ///
    /// # Errors
    ///
    /// [`TensorError::InvalidShape`] for an empty window.
    pub fn to_tensor(&self, config: TensorConfig) -> TensorResult<Tensor<T>> {
        Tensor::from_vec(&self.shape, self.iter().collect(), config)
    }
}

impl<T: Element> fmt::Display for TensorView<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_flat(f, self.iter())
    }
}

/// Space-separated dump of `values`, shared by tensors and views.
pub(crate) fn write_flat<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    values: impl Iterator<Item = T>,
) -> fmt::Result {
    for (n, v) in values.enumerate() {
        if n > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{}", v)?;
    }
    Ok(())
}

/// Writable window into a tensor
#[derive(Debug)]
pub struct TensorViewMut<'a, T> {
    data: &'a mut [T],
    offset: usize,
    shape: [usize; 2],
    strides: [usize; 2],
}

impl<'a, T: Element> TensorViewMut<'a, T> {
    /// Caller guarantees every addressed element lies inside `data`.
    pub(crate) fn new(
        data: &'a mut [T],
        offset: usize,
        shape: [usize; 2],
        strides: [usize; 2],
    ) -> Self {
        Self {
            data,
            offset,
            shape,
            strides,
        }
    }

    pub fn shape(&self) -> [usize; 2] {
        self.shape
    }

    pub fn rows(&self) -> usize {
        self.shape[0]
    }

    pub fn cols(&self) -> usize {
        self.shape[1]
    }

    pub fn strides(&self) -> [usize; 2] {
        self.strides
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn len(&self) -> usize {
        self.shape[0] * self.shape[1]
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    fn flat(&self, i: usize, j: usize) -> usize {
        self.offset + i * self.strides[0] + j * self.strides[1]
    }

    /// Read-only reborrow of the same window
    pub fn as_view(&self) -> TensorView<'_, T> {
        TensorView::new(&*self.data, self.offset, self.shape, self.strides)
    }

    pub fn get(&self, i: usize, j: usize) -> TensorResult<&T> {
        check_index(self.shape, i, j)?;
        Ok(&self.data[self.flat(i, j)])
    }

    pub fn get_mut(&mut self, i: usize, j: usize) -> TensorResult<&mut T> {
        check_index(self.shape, i, j)?;
        let flat = self.flat(i, j);
        Ok(&mut self.data[flat])
    }

    /// Write element `(i, j)`; the parent sees the change.
    ///
    /// # Examples
    ///
    /// ```
    /// use ntensor_core::{Tensor, TensorConfig};
    ///
    /// let mut t = Tensor::new(&[2, 2], 0, TensorConfig::default()).unwrap();
    /// t.slice_mut(1, 2, 0, 2).unwrap().set(0, 1, 5).unwrap();
    /// assert_eq!(t.as_slice(), &[0, 0, 0, 5]);
    /// ```
    pub fn set(&mut self, i: usize, j: usize, value: T) -> TensorResult<()> {
        *self.get_mut(i, j)? = value;
        Ok(())
    }

    /// Element `(i, j)` by value
    ///
    /// # Panics
    ///
    /// Panics if `i >= rows` or `j >= cols`.
    #[inline]
    pub fn at(&self, i: usize, j: usize) -> T {
        self.as_view().at(i, j)
    }

    /// Writable sub-window relative to this view
    pub fn slice_mut(
        &mut self,
        row_lo: usize,
        row_hi: usize,
        col_lo: usize,
        col_hi: usize,
    ) -> TensorResult<TensorViewMut<'_, T>> {
        check_window(self.shape, row_lo, row_hi, col_lo, col_hi)?;
        let offset = self.flat(row_lo, col_lo);
        Ok(TensorViewMut::new(
            &mut *self.data,
            offset,
            [row_hi - row_lo, col_hi - col_lo],
            self.strides,
        ))
    }

    /// Set every element of the window
    pub fn fill(&mut self, value: T) {
        self.fill_with(|_, _| value);
    }

    /// `self[i][j] = a[i][j] + b[i][j]` over this window's extent
    ///
    /// # Errors
    ///
    /// [`TensorError::ShapeMismatch`] unless `a` and `b` match this window.
    ///
    /// # Examples
    ///
    /// ```
    /// use ntensor_core::{Tensor, TensorConfig};
    ///
    /// let cfg = TensorConfig::default();
    /// let src = Tensor::from_vec(&[2, 4], vec![1, 2, 3, 4, 5, 6, 7, 8], cfg).unwrap();
    /// let mut out = Tensor::new(&[2, 2], 0, cfg).unwrap();
    ///
    /// let left = src.slice(0, 2, 0, 2).unwrap();
    /// let right = src.slice(0, 2, 2, 4).unwrap();
    /// out.view_mut().unwrap().combine_add(&left, &right).unwrap();
    /// assert_eq!(out.as_slice(), &[4, 6, 12, 14]);
    /// ```
    pub fn combine_add(&mut self, a: &TensorView<'_, T>, b: &TensorView<'_, T>) -> TensorResult<()> {
        check_same_shape("combine_add", self.shape, a.shape())?;
        check_same_shape("combine_add", self.shape, b.shape())?;
        self.fill_with(|i, j| a.at(i, j) + b.at(i, j));
        Ok(())
    }

    /// `self[i][j] = a[i][j] - b[i][j]` over this window's extent
    ///
    /// # Errors
    ///
    /// [`TensorError::ShapeMismatch`] unless `a` and `b` match this window.
    pub fn combine_sub(&mut self, a: &TensorView<'_, T>, b: &TensorView<'_, T>) -> TensorResult<()> {
        check_same_shape("combine_sub", self.shape, a.shape())?;
        check_same_shape("combine_sub", self.shape, b.shape())?;
        self.fill_with(|i, j| a.at(i, j) - b.at(i, j));
        Ok(())
    }

    /// `self[i][j] = src[i][j]` over this window's extent
    ///
    /// # Errors
    ///
    /// [`TensorError::ShapeMismatch`] unless `src` matches this window.
    pub fn copy_from(&mut self, src: &TensorView<'_, T>) -> TensorResult<()> {
        check_same_shape("copy_from", self.shape, src.shape())?;
        self.fill_with(|i, j| src.at(i, j));
        Ok(())
    }

    fn fill_with<F>(&mut self, f: F)
    where
        F: Fn(usize, usize) -> T,
    {
        for i in 0..self.shape[0] {
            let row = self.offset + i * self.strides[0];
            for j in 0..self.shape[1] {
                self.data[row + j * self.strides[1]] = f(i, j);
            }
        }
    }
}

impl<T: Element> fmt::Display for TensorViewMut<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_flat(f, self.as_view().iter())
    }
}

#[cfg(test)]
mod tests {
    use crate::{Tensor, TensorConfig, TensorError};

    fn grid(rows: usize, cols: usize) -> Tensor<i32> {
        Tensor::from_fn(&[rows, cols], TensorConfig::default(), |p| {
            (p[0] * cols + p[1]) as i32
        })
        .unwrap()
    }

    #[test]
    fn test_view_addressing() {
        let t = grid(4, 4);
        let view = t.slice(1, 3, 2, 4).unwrap();
        assert_eq!(view.shape(), [2, 2]);
        assert_eq!(view.strides(), [4, 1]);
        assert_eq!(view.offset(), 6);
        assert_eq!(view.iter().collect::<Vec<_>>(), vec![6, 7, 10, 11]);
    }

    #[test]
    fn test_view_index_out_of_range() {
        let t = grid(4, 4);
        let view = t.slice(0, 2, 0, 2).unwrap();
        assert!(matches!(
            view.get(0, 2),
            Err(TensorError::IndexOutOfRange { .. })
        ));
    }

    #[test]
    fn test_nested_slice_and_quadrants() {
        let t = grid(4, 4);
        let full = t.view().unwrap();
        let [tl, tr, bl, br] = full.quadrants().unwrap();
        assert_eq!(tl.iter().collect::<Vec<_>>(), vec![0, 1, 4, 5]);
        assert_eq!(tr.iter().collect::<Vec<_>>(), vec![2, 3, 6, 7]);
        assert_eq!(bl.iter().collect::<Vec<_>>(), vec![8, 9, 12, 13]);
        assert_eq!(br.iter().collect::<Vec<_>>(), vec![10, 11, 14, 15]);

        let inner = br.slice(1, 2, 0, 1).unwrap();
        assert_eq!(inner.get(0, 0), Ok(&14));
    }

    #[test]
    fn test_quadrants_reject_odd_extents() {
        let t = grid(3, 4);
        assert!(matches!(
            t.view().unwrap().quadrants(),
            Err(TensorError::UnsupportedDimension { rows: 3, cols: 4, .. })
        ));
    }

    #[test]
    fn test_combine_sub_and_copy_from() {
        let a = grid(2, 2);
        let b = Tensor::new(&[2, 2], 1, TensorConfig::default()).unwrap();
        let mut out = Tensor::new(&[4, 4], 0, TensorConfig::default()).unwrap();
        {
            let mut window = out.slice_mut(2, 4, 2, 4).unwrap();
            window
                .combine_sub(&a.view().unwrap(), &b.view().unwrap())
                .unwrap();
        }
        assert_eq!(out.get(&[2, 2]), Ok(&-1));
        assert_eq!(out.get(&[3, 3]), Ok(&2));
        assert_eq!(out.sum(), -1 + 0 + 1 + 2);

        out.slice_mut(0, 2, 0, 2)
            .unwrap()
            .copy_from(&a.view().unwrap())
            .unwrap();
        assert_eq!(&out.as_slice()[..6], &[0, 1, 0, 0, 2, 3]);
    }

    #[test]
    fn test_combine_shape_mismatch() {
        let a = grid(2, 2);
        let b = grid(2, 3);
        let mut out = grid(2, 2);
        let err = out
            .view_mut()
            .unwrap()
            .combine_add(&a.view().unwrap(), &b.view().unwrap())
            .unwrap_err();
        assert_eq!(
            err,
            TensorError::ShapeMismatch {
                operation: "combine_add",
                lhs: vec![2, 2],
                rhs: vec![2, 3],
            }
        );
    }

    #[test]
    fn test_empty_window_reductions() {
        let t = grid(3, 3);
        let empty = t.slice(1, 1, 0, 3).unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.sum(), 0);
        assert_eq!(
            empty.min(),
            Err(TensorError::EmptyReduction { operation: "min" })
        );
        assert_eq!(
            empty.mean(),
            Err(TensorError::EmptyReduction { operation: "mean" })
        );
        assert!(matches!(
            empty.to_tensor(TensorConfig::default()),
            Err(TensorError::InvalidShape { .. })
        ));
    }

    #[test]
    fn test_view_reductions_and_copy() {
        let t = grid(4, 4);
        let view = t.slice(2, 4, 0, 2).unwrap();
        assert_eq!(view.sum(), 8 + 9 + 12 + 13);
        assert_eq!(view.min(), Ok(8));
        assert_eq!(view.max(), Ok(13));

        let owned = view.to_tensor(TensorConfig::default()).unwrap();
        assert_eq!(owned.shape(), &[2, 2]);
        assert_eq!(owned.as_slice(), &[8, 9, 12, 13]);
    }

    #[test]
    fn test_flat_dump() {
        let t = grid(2, 3);
        assert_eq!(t.slice(0, 2, 1, 3).unwrap().to_string(), "1 2 4 5");
        let mut m = grid(2, 2);
        assert_eq!(m.view_mut().unwrap().to_string(), "0 1 2 3");
    }
}
