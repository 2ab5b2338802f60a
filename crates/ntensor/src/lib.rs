//! # ntensor
//!
//! In-memory tensors with strided addressing, borrowed 2-D views and
//! Strassen matrix multiplication.
//!
//! This is the **meta crate** that re-exports the ntensor components for
//! convenient access.
//!
//! ## Quick Start
//!
//! ```
//! use ntensor::prelude::*;
//!
//! let cfg = TensorConfig::default();
//! let mut a = Tensor::new(&[4, 4], 1.0f64, cfg)?;
//! a.set(&[0, 0], 3.0)?;
//! a.scale_in_place(2.0);
//!
//! let b = Tensor::new(&[4, 4], 0.5f64, cfg)?;
//! let c = a.matmul(&b)?;
//! assert_eq!(c.shape(), &[4, 4]);
//! assert_eq!(c.get(&[0, 0]), Ok(&6.0));
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Components
//!
//! ### Core Tensor Operations ([`core`])
//!
//! Shape/stride arithmetic, the owning [`Tensor`](core::Tensor), borrowed
//! views, reductions, configuration and diagnostics.
//!
//! ```
//! use ntensor::core::{Tensor, TensorConfig};
//!
//! let tensor = Tensor::<f32>::zeros(&[2, 3, 4], TensorConfig::default()).unwrap();
//! let reshaped = tensor.reshape(&[6, 4]).unwrap();
//! assert_eq!(reshaped.shape(), &[6, 4]);
//! ```
//!
//! ### Matmul Kernels ([`kernels`])
//!
//! Direct and Strassen kernels with threshold-based selection.
//!
//! ```
//! use ntensor::core::{Tensor, TensorConfig};
//! use ntensor::kernels::{matmul_strassen, select_kernel, MatmulKernel};
//!
//! let cfg = TensorConfig::default();
//! assert_eq!(select_kernel(8, 8, 8, &cfg), MatmulKernel::Strassen);
//!
//! let a = Tensor::from_vec(&[2, 2], vec![1, 2, 3, 4], cfg).unwrap();
//! let b = Tensor::from_vec(&[2, 2], vec![5, 6, 7, 8], cfg).unwrap();
//! assert_eq!(matmul_strassen(&a, &b).unwrap().to_string(), "19 22 43 50");
//! ```
//!
//! ## Features
//!
//! - `parallel`: Fork-join Strassen via rayon
//! - `serde`: Serialize/deserialize `TensorConfig`

// Re-export all components
pub use ntensor_core as core;
pub use ntensor_kernels as kernels;

pub mod prelude {
    //! Prelude module for convenient imports
    //!
    //! # Example
    //!
    //! ```
    //! use ntensor::prelude::*;
    //!
    //! let tensor = Tensor::<f64>::zeros(&[10, 20], TensorConfig::default()).unwrap();
    //! ```

    // Core types
    pub use crate::core::{
        Diagnostics, Element, Level, LogDiagnostics, OrFatal, Tensor, TensorConfig, TensorError,
        TensorResult, TensorView, TensorViewMut,
    };

    // Kernels
    pub use crate::kernels::{matmul, matmul_strassen, select_kernel, MatmulExt, MatmulKernel};

    #[cfg(feature = "parallel")]
    pub use crate::kernels::matmul_parallel;
}
