//! Utility functions for comparing and timing kernel results
//!
//! Strassen reorders floating-point additions, so its output can differ from
//! the direct kernel in the last few bits. These helpers compare tensors
//! within a tolerance instead of bit for bit.

use ntensor_core::{Element, Tensor};
use scirs2_core::numeric::Float;
use std::time::Instant;

/// Performance timing result for a kernel call
#[derive(Debug, Clone)]
pub struct TimingResult {
    /// Operation name
    pub operation: String,
    /// Elapsed time in milliseconds
    pub elapsed_ms: f64,
    /// Multiply-adds per second in GFLOP/s (if the call took measurable time)
    pub gflops: Option<f64>,
    /// Number of multiply-adds performed
    pub flops: usize,
}

impl TimingResult {
    pub fn new(operation: impl Into<String>, elapsed_ms: f64, flops: usize) -> Self {
        let gflops = if elapsed_ms > 0.0 {
            Some((flops as f64) / (elapsed_ms * 1e6))
        } else {
            None
        };

        TimingResult {
            operation: operation.into(),
            elapsed_ms,
            gflops,
            flops,
        }
    }

    /// Print timing result in a human-readable format
    pub fn print(&self) {
        match self.gflops {
            Some(rate) => println!(
                "{}: {:.3} ms ({:.2} GFLOP/s)",
                self.operation, self.elapsed_ms, rate
            ),
            None => println!("{}: {:.3} ms", self.operation, self.elapsed_ms),
        }
    }
}

/// Time a closure, attributing `flops` multiply-adds to it
///
/// # Examples
///
/// ```
/// use ntensor_kernels::time_operation;
///
/// let (value, timing) = time_operation("sum", 1000, || (0..1000u64).sum::<u64>());
/// assert_eq!(value, 499_500);
/// assert_eq!(timing.operation, "sum");
/// ```
pub fn time_operation<F, R>(name: impl Into<String>, flops: usize, op: F) -> (R, TimingResult)
where
    F: FnOnce() -> R,
{
    let start = Instant::now();
    let result = op();
    let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;
    (result, TimingResult::new(name, elapsed_ms, flops))
}

/// Frobenius norm `sqrt(Σ x²)` over every element
pub fn frobenius_norm<T>(tensor: &Tensor<T>) -> T
where
    T: Element + Float,
{
    tensor
        .as_slice()
        .iter()
        .fold(T::zero(), |acc, &x| acc + x * x)
        .sqrt()
}

/// Relative error `‖a − b‖_F / ‖a‖_F`
///
/// Returns infinity when the shapes differ and the absolute error when `a` is
/// all zeros.
///
/// # Examples
///
/// ```
/// use ntensor_core::{Tensor, TensorConfig};
/// use ntensor_kernels::relative_error;
///
/// let cfg = TensorConfig::default();
/// let a = Tensor::from_vec(&[2, 2], vec![1.0, 2.0, 3.0, 4.0], cfg).unwrap();
/// let b = Tensor::from_vec(&[2, 2], vec![1.1, 2.1, 3.1, 4.1], cfg).unwrap();
/// let error = relative_error(&a, &b);
/// assert!(error > 0.0 && error < 0.1);
/// ```
pub fn relative_error<T>(a: &Tensor<T>, b: &Tensor<T>) -> T
where
    T: Element + Float,
{
    if a.shape() != b.shape() {
        return T::infinity();
    }

    let diff_norm = a
        .as_slice()
        .iter()
        .zip(b.as_slice())
        .fold(T::zero(), |acc, (&x, &y)| acc + (x - y) * (x - y))
        .sqrt();
    let a_norm = frobenius_norm(a);

    if a_norm > T::zero() {
        diff_norm / a_norm
    } else {
        diff_norm
    }
}

/// Check if two tensors have the same shape and agree element-wise within `tol`
///
/// # Examples
///
/// ```
/// use ntensor_core::{Tensor, TensorConfig};
/// use ntensor_kernels::approx_equal;
///
/// let cfg = TensorConfig::default();
/// let a = Tensor::from_vec(&[2, 2], vec![1.0, 2.0, 3.0, 4.0], cfg).unwrap();
/// let b = Tensor::from_vec(&[2, 2], vec![1.0 + 1e-11, 2.0, 3.0, 4.0], cfg).unwrap();
/// assert!(approx_equal(&a, &b, 1e-10));
/// ```
pub fn approx_equal<T>(a: &Tensor<T>, b: &Tensor<T>, tol: T) -> bool
where
    T: Element + Float,
{
    if a.shape() != b.shape() {
        return false;
    }

    a.as_slice()
        .iter()
        .zip(b.as_slice())
        .all(|(&x, &y)| (x - y).abs() <= tol)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ntensor_core::TensorConfig;

    fn tensor(shape: &[usize], data: Vec<f64>) -> Tensor<f64> {
        Tensor::from_vec(shape, data, TensorConfig::default()).unwrap()
    }

    #[test]
    fn test_frobenius_norm() {
        let t = tensor(&[2, 2], vec![3.0, 0.0, 0.0, 4.0]);
        assert!((frobenius_norm(&t) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_relative_error_shape_mismatch() {
        let a = tensor(&[2, 2], vec![1.0; 4]);
        let b = tensor(&[4], vec![1.0; 4]);
        assert!(relative_error(&a, &b).is_infinite());
    }

    #[test]
    fn test_relative_error_zero_reference() {
        let a = tensor(&[2], vec![0.0, 0.0]);
        let b = tensor(&[2], vec![3.0, 4.0]);
        assert!((relative_error(&a, &b) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_approx_equal() {
        let a = tensor(&[2, 2], vec![1.0, 2.0, 3.0, 4.0]);
        let b = tensor(&[2, 2], vec![1.0, 2.0, 3.0, 4.0 + 1e-11]);
        assert!(approx_equal(&a, &b, 1e-10));
        assert!(!approx_equal(&a, &b, 1e-12));

        let reshaped = b.clone().reshape(&[4]).unwrap();
        assert!(!approx_equal(&a, &reshaped, 1.0));
    }

    #[test]
    fn test_timing_result() {
        let timing = TimingResult::new("matmul", 2.0, 4_000_000);
        assert_eq!(timing.gflops, Some(2.0));

        let instant = TimingResult::new("noop", 0.0, 10);
        assert_eq!(instant.gflops, None);
    }
}
