//! # ntensor-core
//!
//! Core tensor types, strided addressing and borrowed views for ntensor.
//!
//! This crate provides the building blocks the matmul kernels operate on:
//!
//! - **Shape/stride model** ([`layout`]) turning shapes into row-major strides
//!   and coordinates into flat offsets
//! - **Owning tensor** ([`Tensor`]) with indexed access, element-wise
//!   arithmetic, reductions and buffer-reusing reshape
//! - **Views** ([`TensorView`], [`TensorViewMut`]) borrowing a rectangular
//!   window of a tensor's buffer
//! - **Configuration** ([`TensorConfig`]) carrying the Strassen crossover
//! - **Diagnostics** ([`Diagnostics`]) injected by the caller
//!
//! ## Core Principles
//!
//! ### Memory Layout
//!
//! Tensors are C-contiguous (row-major). The last axis has stride 1 and
//! `stride[i] = shape[i + 1] * stride[i + 1]`.
//!
//! ### Safety
//!
//! Views hold a borrow of their parent's buffer, so the borrow checker rejects
//! any view that would outlive, or observe a reshape of, its parent. No unsafe
//! code.
//!
//! ### Errors
//!
//! Every operation that can fail returns [`TensorResult`]. Nothing in this
//! crate exits the process; see [`OrFatal`] for the opt-in escalation.
//!
//! ## Quick Start
//!
//! ```
//! use ntensor_core::{Tensor, TensorConfig};
//!
//! let cfg = TensorConfig::default();
//! let mut tensor = Tensor::new(&[4, 4], 0.0f32, cfg).unwrap();
//!
//! // Index writes
//! tensor.set(&[1, 2], 3.0).unwrap();
//! assert_eq!(tensor.get(&[1, 2]), Ok(&3.0));
//!
//! // Arithmetic
//! let ones = Tensor::new(&[4, 4], 1.0f32, cfg).unwrap();
//! let sum = tensor.add(&ones).unwrap();
//! assert_eq!(sum.sum(), 19.0);
//!
//! // Views
//! let mut window = tensor.slice_mut(0, 2, 0, 2).unwrap();
//! window.fill(2.0);
//! assert_eq!(tensor.sum(), 11.0);
//! ```
//!
//! ## Features
//!
//! - `serde`: Serialize/deserialize [`TensorConfig`]

pub mod config;
pub mod dense;
pub mod diagnostics;
pub mod error;
pub mod layout;
pub mod types;
pub mod view;


pub use config::{TensorConfig, DEFAULT_STRASSEN_THRESHOLD, STRASSEN_BASE_CASE};
pub use dense::Tensor;
pub use diagnostics::{CollectingDiagnostics, Diagnostics, Level, LogDiagnostics, OrFatal};
pub use error::{TensorError, TensorResult};
pub use types::{Element, Shape, Strides};
pub use view::{TensorView, TensorViewMut};
