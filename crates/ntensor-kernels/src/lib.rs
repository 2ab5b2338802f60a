//! # ntensor-kernels
//!
//! Matrix multiplication kernels for ntensor.
//!
//! ## Overview
//!
//! **Key Features:**
//! - **Kernel selection** - direct below a size threshold, Strassen above it
//! - **Direct kernel** - schoolbook O(m·k·n) product over borrowed views
//! - **Strassen kernel** - seven recursive sub-products per split, with two
//!   reusable scratch tensors per level
//! - **Transparent padding** - odd and rectangular operands are zero-padded
//!   to the next power of two and the result cropped
//! - **Fork-join Strassen** - the seven products of each split run on rayon
//!   (`parallel` feature)
//! - **Comparison helpers** - tolerance-based equality and relative error for
//!   float results
//!
//! ## Quick Start
//!
//! ```rust
//! use ntensor_core::{Tensor, TensorConfig};
//! use ntensor_kernels::{matmul, select_kernel, MatmulExt, MatmulKernel};
//!
//! let cfg = TensorConfig::default().with_strassen_threshold(0);
//! let a = Tensor::from_fn(&[8, 8], cfg, |p| (p[0] + p[1]) as f64).unwrap();
//! let b = Tensor::from_fn(&[8, 8], cfg, |p| if p[0] == p[1] { 1.0 } else { 0.0 }).unwrap();
//!
//! assert_eq!(select_kernel(8, 8, 8, &cfg), MatmulKernel::Strassen);
//! let c = matmul(&a, &b).unwrap();
//! assert_eq!(c, a);
//!
//! // Method form
//! assert_eq!(a.matmul(&b).unwrap(), c);
//! ```
//!
//! ## Diagnostics
//!
//! Kernel choice, padding and every Strassen split are reported at debug
//! level. [`matmul`] sends them to the `log` facade under the `ntensor`
//! target; the `*_with` variants take any
//! [`Diagnostics`](ntensor_core::Diagnostics) sink.
//!
//! ## Examples
//!
//! Run with:
//! ```bash
//! cargo run --example strassen_matmul
//! cargo run --example strassen_matmul --features parallel
//! ```
//!
//! ## Features
//!
//! - `parallel` - Enable `matmul_parallel` using rayon

mod direct;
pub mod matmul;
mod strassen;
pub mod utils;

#[cfg(test)]
mod property_tests;

// Re-exports
pub use matmul::*;
pub use utils::*;
