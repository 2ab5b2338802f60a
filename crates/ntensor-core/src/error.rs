//! Error types for tensor operations
//!
//! Every failure the engine can report is a variant of [`TensorError`]. None of
//! them terminates the process; callers that want log-and-exit behaviour opt in
//! through [`OrFatal`](crate::diagnostics::OrFatal).
//!
//! # Examples
//!
//! ```
//! use ntensor_core::{Tensor, TensorConfig, TensorError};
//!
//! let err = Tensor::<f32>::new(&[2, 0], 0.0, TensorConfig::default()).unwrap_err();
//! assert!(matches!(err, TensorError::InvalidShape { .. }));
//! ```

use thiserror::Error;

/// Top-level error type for tensor, view and matmul operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TensorError {
    /// Zero rank or a zero extent at construction
    #[error("invalid shape {shape:?}: {reason}")]
    InvalidShape {
        shape: Vec<usize>,
        reason: &'static str,
    },

    /// Coordinate arity differs from the tensor rank
    #[error("rank mismatch: expected {expected} coordinates, got {got}")]
    RankMismatch { expected: usize, got: usize },

    /// Position maps outside the addressed buffer
    #[error("index {position:?} out of range: offset {offset} >= size {size}")]
    IndexOutOfRange {
        position: Vec<usize>,
        offset: usize,
        size: usize,
    },

    /// Binary operands differ in shape
    #[error("{operation}: shape mismatch between {lhs:?} and {rhs:?}")]
    ShapeMismatch {
        operation: &'static str,
        lhs: Vec<usize>,
        rhs: Vec<usize>,
    },

    /// Operation only defined for ranks `min..=max`
    #[error("{operation}: unsupported rank {rank} ({})", supported_ranks(.min, .max))]
    UnsupportedRank {
        operation: &'static str,
        rank: usize,
        min: usize,
        max: usize,
    },

    /// Dimensions that cannot be split into equal quadrants
    #[error("{operation}: unsupported dimensions {rows}x{cols}: {reason}")]
    UnsupportedDimension {
        operation: &'static str,
        rows: usize,
        cols: usize,
        reason: &'static str,
    },

    /// min/max/mean over zero elements
    #[error("{operation}: reduction over zero elements")]
    EmptyReduction { operation: &'static str },

    /// Slice window outside the parent or with inverted bounds
    #[error("invalid slice rows {row_lo}..{row_hi}, cols {col_lo}..{col_hi} for shape {shape:?}")]
    InvalidSlice {
        row_lo: usize,
        row_hi: usize,
        col_lo: usize,
        col_hi: usize,
        shape: Vec<usize>,
    },

    /// Element count not representable in the element type
    #[error("cannot represent count {count} in the element type")]
    NumericCast { count: usize },
}

/// Result type for tensor operations
pub type TensorResult<T> = Result<T, TensorError>;

impl TensorError {
    /// Create a shape mismatch error carrying both operand shapes
    pub fn shape_mismatch(operation: &'static str, lhs: &[usize], rhs: &[usize]) -> Self {
        TensorError::ShapeMismatch {
            operation,
            lhs: lhs.to_vec(),
            rhs: rhs.to_vec(),
        }
    }

    /// Create an unsupported rank error for an operation accepting ranks `min..=max`
    pub fn unsupported_rank(operation: &'static str, rank: usize, min: usize, max: usize) -> Self {
        TensorError::UnsupportedRank {
            operation,
            rank,
            min,
            max,
        }
    }
}

fn supported_ranks(min: &usize, max: &usize) -> String {
    if min == max {
        format!("requires rank {}", min)
    } else {
        format!("supports ranks {} to {}", min, max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_mismatch_display() {
        let err = TensorError::shape_mismatch("add", &[2, 3], &[3, 2]);

        let msg = format!("{}", err);
        assert!(msg.contains("add"));
        assert!(msg.contains("[2, 3]"));
        assert!(msg.contains("[3, 2]"));
    }

    #[test]
    fn test_unsupported_rank_display() {
        let err = TensorError::unsupported_rank("slice", 3, 1, 2);

        let msg = format!("{}", err);
        assert!(msg.contains("slice"));
        assert!(msg.contains("rank 3"));
        assert!(msg.contains("supports ranks 1 to 2"));
    }

    #[test]
    fn test_exact_rank_display() {
        let err = TensorError::unsupported_rank("matmul", 1, 2, 2);
        assert_eq!(
            err.to_string(),
            "matmul: unsupported rank 1 (requires rank 2)"
        );
    }

    #[test]
    fn test_index_out_of_range_display() {
        let err = TensorError::IndexOutOfRange {
            position: vec![4, 4],
            offset: 20,
            size: 16,
        };

        let msg = format!("{}", err);
        assert!(msg.contains("[4, 4]"));
        assert!(msg.contains("20 >= size 16"));
    }

    #[test]
    fn test_invalid_slice_display() {
        let err = TensorError::InvalidSlice {
            row_lo: 0,
            row_hi: 5,
            col_lo: 0,
            col_hi: 2,
            shape: vec![4, 4],
        };

        let msg = format!("{}", err);
        assert!(msg.contains("rows 0..5"));
        assert!(msg.contains("[4, 4]"));
    }
}
