//! Owning tensor implementation and operations
//!
//! The type lives in [`types`]; operations are grouped by functionality.

// Core type definition
pub mod types;

// Operation modules (organized by functionality)
mod elementwise;
mod indexing;
mod shape_ops;
mod slicing;
pub(crate) mod statistics;

// Supporting modules
mod tensor_traits;

// Re-export the main type
pub use types::Tensor;
