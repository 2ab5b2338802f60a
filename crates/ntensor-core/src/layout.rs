//! Shape and stride arithmetic for row-major buffers.
//!
//! A rank-k shape maps to strides where the last axis is contiguous:
//!
//! ```text
//! stride[k-1] = 1
//! stride[i]   = shape[i+1] * stride[i+1]
//! ```
//!
//! and a coordinate maps to the flat offset `Σ pos[i] * stride[i]`.

use smallvec::SmallVec;

use crate::error::{TensorError, TensorResult};

/// Shape type using SmallVec to avoid heap allocation for common ranks.
pub type Shape = SmallVec<[usize; 4]>;

/// Per-axis element steps, same length as the [`Shape`] they belong to.
pub type Strides = SmallVec<[usize; 4]>;

/// Reject zero rank, zero extents and element counts that overflow `usize`.
///
/// Returns the element count of a valid shape.
pub fn validate_shape(shape: &[usize]) -> TensorResult<usize> {
    if shape.is_empty() {
        return Err(TensorError::InvalidShape {
            shape: Vec::new(),
            reason: "rank must be at least 1",
        });
    }
    if shape.contains(&0) {
        return Err(TensorError::InvalidShape {
            shape: shape.to_vec(),
            reason: "extents must be positive",
        });
    }
    shape_size(shape).ok_or_else(|| TensorError::InvalidShape {
        shape: shape.to_vec(),
        reason: "element count overflows usize",
    })
}

/// Number of elements addressed by `shape`, or `None` on overflow.
///
/// # Examples
///
/// ```
/// use ntensor_core::layout::shape_size;
///
/// assert_eq!(shape_size(&[2, 3, 4]), Some(24));
/// assert_eq!(shape_size(&[usize::MAX, 2]), None);
/// ```
pub fn shape_size(shape: &[usize]) -> Option<usize> {
    shape.iter().try_fold(1usize, |acc, &d| acc.checked_mul(d))
}

/// Compute row-major (C-contiguous) strides for `shape`.
///
/// # Examples
///
/// ```
/// use ntensor_core::layout::row_major_strides;
///
/// assert_eq!(row_major_strides(&[2, 3, 4]).as_slice(), &[12, 4, 1]);
/// assert_eq!(row_major_strides(&[5]).as_slice(), &[1]);
/// ```
pub fn row_major_strides(shape: &[usize]) -> Strides {
    let mut strides: Strides = SmallVec::from_elem(1, shape.len());
    for i in (0..shape.len().saturating_sub(1)).rev() {
        strides[i] = strides[i + 1] * shape[i + 1];
    }
    strides
}

/// Map a coordinate to its flat offset.
///
/// Only the arity and the resulting offset are checked: the offset must land
/// inside `[0, size)`. Overflowing arithmetic is reported as out of range.
pub fn flat_offset(position: &[usize], strides: &[usize], size: usize) -> TensorResult<usize> {
    if position.len() != strides.len() {
        return Err(TensorError::RankMismatch {
            expected: strides.len(),
            got: position.len(),
        });
    }

    let offset = position
        .iter()
        .zip(strides)
        .try_fold(0usize, |acc, (&p, &s)| p.checked_mul(s)?.checked_add(acc));

    match offset {
        Some(offset) if offset < size => Ok(offset),
        Some(offset) => Err(TensorError::IndexOutOfRange {
            position: position.to_vec(),
            offset,
            size,
        }),
        None => Err(TensorError::IndexOutOfRange {
            position: position.to_vec(),
            offset: usize::MAX,
            size,
        }),
    }
}

/// Smallest power of two that is at least `n`.
pub fn next_power_of_two(n: usize) -> usize {
    n.max(1).next_power_of_two()
}
