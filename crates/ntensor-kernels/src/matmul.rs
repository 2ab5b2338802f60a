//! Matrix multiplication entry points and kernel selection
//!
//! Both operands must be rank-2 tensors with matching inner dimensions.
//! [`select_kernel`] picks between the direct kernel and Strassen:
//!
//! 1. if `min(m, k, n) <= STRASSEN_BASE_CASE`, direct
//! 2. else if the left operand holds `<= strassen_threshold` elements, direct
//! 3. else Strassen
//!
//! The same rule is applied again to every Strassen sub-product, using the
//! left operand's configuration throughout. When Strassen is chosen and any of
//! `m`, `k`, `n` is not a power of two, [`matmul`] zero-pads each dimension
//! independently to its next power of two, multiplies, and crops the result.
//! A thin `5×512` by `512×5` product is padded to `8×512` by `512×8`, never to
//! `512×512`.

use ntensor_core::layout::next_power_of_two;
use ntensor_core::{
    Diagnostics, Element, Level, LogDiagnostics, Tensor, TensorConfig, TensorError,
    TensorResult, TensorView, STRASSEN_BASE_CASE,
};

use crate::direct;
use crate::strassen::{strassen_views, Execution};

/// Kernel chosen for one multiplication
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MatmulKernel {
    /// Schoolbook triple loop
    Direct,
    /// One Strassen split followed by recursive selection
    Strassen,
}

/// Choose the kernel for an `m×k` by `k×n` product.
///
/// # Examples
///
/// ```
/// use ntensor_core::TensorConfig;
/// use ntensor_kernels::{select_kernel, MatmulKernel};
///
/// let cfg = TensorConfig::default().with_strassen_threshold(36);
/// assert_eq!(select_kernel(6, 6, 6, &cfg), MatmulKernel::Direct);
///
/// let cfg = cfg.with_strassen_threshold(35);
/// assert_eq!(select_kernel(6, 6, 6, &cfg), MatmulKernel::Strassen);
///
/// // Small extents never recurse, whatever the threshold.
/// let cfg = cfg.with_strassen_threshold(0);
/// assert_eq!(select_kernel(4, 64, 64, &cfg), MatmulKernel::Direct);
/// ```
pub fn select_kernel(m: usize, k: usize, n: usize, config: &TensorConfig) -> MatmulKernel {
    if m.min(k).min(n) <= STRASSEN_BASE_CASE {
        MatmulKernel::Direct
    } else if m.saturating_mul(k) <= config.strassen_threshold {
        MatmulKernel::Direct
    } else {
        MatmulKernel::Strassen
    }
}

/// `(m, k, n)` for two rank-2 operands with matching inner dimension.
fn operand_dims<T>(
    a: &Tensor<T>,
    b: &Tensor<T>,
    operation: &'static str,
) -> TensorResult<(usize, usize, usize)> {
    for t in [a, b] {
        if t.rank() != 2 {
            return Err(TensorError::unsupported_rank(operation, t.rank(), 2, 2));
        }
    }
    let (m, k) = (a.shape()[0], a.shape()[1]);
    let (k2, n) = (b.shape()[0], b.shape()[1]);
    if k != k2 {
        return Err(TensorError::shape_mismatch(operation, a.shape(), b.shape()));
    }
    Ok((m, k, n))
}

/// Multiply two matrices, reporting through the `log` facade.
///
/// The result inherits `a`'s configuration.
///
/// # Errors
///
/// - [`TensorError::UnsupportedRank`] if either operand is not rank 2
/// - [`TensorError::ShapeMismatch`] if `a.shape()[1] != b.shape()[0]`
///
/// # Examples
///
/// ```
/// use ntensor_core::{Tensor, TensorConfig};
/// use ntensor_kernels::matmul;
///
/// let cfg = TensorConfig::default();
/// let a = Tensor::from_vec(&[2, 2], vec![1.0, 2.0, 3.0, 4.0], cfg).unwrap();
/// let b = Tensor::from_vec(&[2, 2], vec![5.0, 6.0, 7.0, 8.0], cfg).unwrap();
///
/// let c = matmul(&a, &b).unwrap();
/// assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
/// ```
pub fn matmul<T: Element>(a: &Tensor<T>, b: &Tensor<T>) -> TensorResult<Tensor<T>> {
    matmul_with(a, b, &LogDiagnostics::default())
}

/// [`matmul`] with an explicit diagnostics sink
pub fn matmul_with<T, D>(a: &Tensor<T>, b: &Tensor<T>, diag: &D) -> TensorResult<Tensor<T>>
where
    T: Element,
    D: Diagnostics + ?Sized,
{
    dispatch(a, b, diag, Execution::Serial)
}

/// Multiply with the direct kernel regardless of size or threshold.
///
/// # Errors
///
/// Same as [`matmul`].
pub fn matmul_direct<T: Element>(a: &Tensor<T>, b: &Tensor<T>) -> TensorResult<Tensor<T>> {
    operand_dims(a, b, "matmul")?;
    direct::multiply_views(&a.view()?, &b.view()?, *a.config())
}

/// Multiply with at least one Strassen split at the top level.
///
/// Sub-products still go through [`select_kernel`].
///
/// # Errors
///
/// - [`TensorError::UnsupportedRank`] / [`TensorError::ShapeMismatch`] as for
///   [`matmul`]
/// - [`TensorError::UnsupportedDimension`] unless both operands are square
///   with an even extent; no padding is applied
///
/// # Examples
///
/// ```
/// use ntensor_core::{Tensor, TensorConfig, TensorError};
/// use ntensor_kernels::matmul_strassen;
///
/// let cfg = TensorConfig::default();
/// let a = Tensor::from_vec(&[2, 2], vec![1, 2, 3, 4], cfg).unwrap();
/// let b = Tensor::from_vec(&[2, 2], vec![5, 6, 7, 8], cfg).unwrap();
/// assert_eq!(matmul_strassen(&a, &b).unwrap().as_slice(), &[19, 22, 43, 50]);
///
/// let odd = Tensor::<i32>::zeros(&[3, 3], cfg).unwrap();
/// assert!(matches!(
///     matmul_strassen(&odd, &odd),
///     Err(TensorError::UnsupportedDimension { .. })
/// ));
/// ```
pub fn matmul_strassen<T: Element>(a: &Tensor<T>, b: &Tensor<T>) -> TensorResult<Tensor<T>> {
    matmul_strassen_with(a, b, &LogDiagnostics::default())
}

/// [`matmul_strassen`] with an explicit diagnostics sink
pub fn matmul_strassen_with<T, D>(
    a: &Tensor<T>,
    b: &Tensor<T>,
    diag: &D,
) -> TensorResult<Tensor<T>>
where
    T: Element,
    D: Diagnostics + ?Sized,
{
    operand_dims(a, b, "matmul_strassen")?;
    for operand in [a, b] {
        let (rows, cols) = (operand.shape()[0], operand.shape()[1]);
        let reason = if !operand.is_square() {
            "operands must be square"
        } else if rows % 2 != 0 {
            "extent must be even"
        } else {
            continue;
        };
        return Err(TensorError::UnsupportedDimension {
            operation: "matmul_strassen",
            rows,
            cols,
            reason,
        });
    }
    strassen_views(a.view()?, b.view()?, *a.config(), diag, Execution::Serial)
}

/// [`matmul`] with the seven Strassen products of every split computed in
/// parallel
///
/// Each branch allocates its own scratch tensors; the combine step waits for
/// all seven.
#[cfg(feature = "parallel")]
pub fn matmul_parallel<T: Element>(a: &Tensor<T>, b: &Tensor<T>) -> TensorResult<Tensor<T>> {
    matmul_parallel_with(a, b, &LogDiagnostics::default())
}

/// [`matmul_parallel`] with an explicit diagnostics sink
#[cfg(feature = "parallel")]
pub fn matmul_parallel_with<T, D>(
    a: &Tensor<T>,
    b: &Tensor<T>,
    diag: &D,
) -> TensorResult<Tensor<T>>
where
    T: Element,
    D: Diagnostics + ?Sized,
{
    dispatch(a, b, diag, Execution::Parallel)
}

fn dispatch<T, D>(
    a: &Tensor<T>,
    b: &Tensor<T>,
    diag: &D,
    execution: Execution,
) -> TensorResult<Tensor<T>>
where
    T: Element,
    D: Diagnostics + ?Sized,
{
    let (m, k, n) = operand_dims(a, b, "matmul")?;
    let config = *a.config();
    let kernel = select_kernel(m, k, n, &config);
    diag.message(
        Level::Debug,
        format_args!("matmul: {}x{} * {}x{} using {:?} kernel", m, k, k, n, kernel),
    );

    if kernel == MatmulKernel::Direct {
        return direct::multiply_views(&a.view()?, &b.view()?, config);
    }

    let (pm, pk, pn) = (
        next_power_of_two(m),
        next_power_of_two(k),
        next_power_of_two(n),
    );
    if (pm, pk, pn) == (m, k, n) {
        return strassen_views(a.view()?, b.view()?, config, diag, execution);
    }

    diag.message(
        Level::Debug,
        format_args!(
            "matmul: padding {}x{} * {}x{} to {}x{} * {}x{}",
            m, k, k, n, pm, pk, pk, pn
        ),
    );
    let padded_a = pad_to(a.view()?, pm, pk, config)?;
    let padded_b = pad_to(b.view()?, pk, pn, config)?;
    let full = strassen_views(padded_a.view()?, padded_b.view()?, config, diag, execution)?;
    full.slice(0, m, 0, n)?.to_tensor(config)
}

/// Zero-filled `rows × cols` copy of `src` anchored at the top-left corner.
fn pad_to<T: Element>(
    src: TensorView<'_, T>,
    rows: usize,
    cols: usize,
    config: TensorConfig,
) -> TensorResult<Tensor<T>> {
    let mut padded = Tensor::zeros(&[rows, cols], config)?;
    padded
        .slice_mut(0, src.rows(), 0, src.cols())?
        .copy_from(&src)?;
    Ok(padded)
}

/// Kernel selection for Strassen sub-products.
///
/// Quadrants with an odd extent cannot be split again and fall back to the
/// direct kernel.
pub(crate) fn multiply_views<T, D>(
    a: TensorView<'_, T>,
    b: TensorView<'_, T>,
    config: TensorConfig,
    diag: &D,
    execution: Execution,
) -> TensorResult<Tensor<T>>
where
    T: Element,
    D: Diagnostics + ?Sized,
{
    let (m, k, n) = (a.rows(), a.cols(), b.cols());
    match select_kernel(m, k, n, &config) {
        MatmulKernel::Direct => direct::multiply_views(&a, &b, config),
        MatmulKernel::Strassen if m % 2 == 0 && k % 2 == 0 && n % 2 == 0 => {
            strassen_views(a, b, config, diag, execution)
        }
        MatmulKernel::Strassen => {
            diag.message(
                Level::Debug,
                format_args!("matmul: odd {}x{} * {}x{}, using direct kernel", m, k, k, n),
            );
            direct::multiply_views(&a, &b, config)
        }
    }
}

/// Method form of [`matmul`] on tensors
///
/// Scaling by a scalar is the separate
/// [`Tensor::scale_in_place`](ntensor_core::Tensor::scale_in_place).
///
/// # Examples
///
/// ```
/// use ntensor_core::{Tensor, TensorConfig};
/// use ntensor_kernels::MatmulExt;
///
/// let cfg = TensorConfig::default();
/// let a = Tensor::from_fn(&[3, 3], cfg, |p| if p[0] == p[1] { 2 } else { 0 }).unwrap();
/// let b = Tensor::from_fn(&[3, 3], cfg, |p| (p[0] * 3 + p[1]) as i32).unwrap();
///
/// let c = a.matmul(&b).unwrap();
/// assert_eq!(c.as_slice(), &[0, 2, 4, 6, 8, 10, 12, 14, 16]);
/// ```
pub trait MatmulExt: Sized {
    /// Matrix product `self · rhs`
    fn matmul(&self, rhs: &Self) -> TensorResult<Self>;

    /// Matrix product `self · rhs` reporting to `diag`
    fn matmul_with<D: Diagnostics + ?Sized>(&self, rhs: &Self, diag: &D) -> TensorResult<Self>;
}

impl<T: Element> MatmulExt for Tensor<T> {
    fn matmul(&self, rhs: &Self) -> TensorResult<Self> {
        matmul(self, rhs)
    }

    fn matmul_with<D: Diagnostics + ?Sized>(&self, rhs: &Self, diag: &D) -> TensorResult<Self> {
        matmul_with(self, rhs, diag)
    }
}
