//! Strassen matrix multiplication
//!
//! One level of the recursion splits both operands into quadrants
//!
//! ```text
//! A = | a b |    B = | e f |
//!     | c d |        | g h |
//! ```
//!
//! and forms seven products
//!
//! ```text
//! m1 = (a + d)(e + h)    m5 = a(f - h)
//! m2 = d(g - e)          m6 = (c + d)e
//! m3 = (a + b)h          m7 = (a - c)(e + f)
//! m4 = (b - d)(g + h)
//! ```
//!
//! which combine into
//!
//! ```text
//! c11 = m1 + m2 - m3 + m4    c12 = m5 + m3
//! c21 = m6 + m2              c22 = m5 + m1 - m6 - m7
//! ```
//!
//! Each product goes back through kernel selection, so the recursion bottoms
//! out in the direct kernel. Elements must support subtraction without
//! wrapping; unsigned element types can overflow on `g - e` and friends.

use ntensor_core::{
    Diagnostics, Element, Level, Tensor, TensorConfig, TensorError, TensorResult, TensorView,
};

use crate::matmul::multiply_views;

/// How the seven products of one split are evaluated
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Execution {
    /// One after another, sharing two scratch tensors
    Serial,
    /// Fork-join over rayon; every branch owns its scratch
    #[cfg(feature = "parallel")]
    Parallel,
}

/// One side of a Strassen product, before it is written into scratch
#[derive(Clone, Copy)]
enum Operand<'a, T> {
    Quadrant(TensorView<'a, T>),
    Sum(TensorView<'a, T>, TensorView<'a, T>),
    Difference(TensorView<'a, T>, TensorView<'a, T>),
}

impl<T: Element> Operand<'_, T> {
    fn shape(&self) -> [usize; 2] {
        match self {
            Operand::Quadrant(x) | Operand::Sum(x, _) | Operand::Difference(x, _) => x.shape(),
        }
    }

    /// Overwrite `scratch` with this operand's values.
    fn load_into(&self, scratch: &mut Tensor<T>) -> TensorResult<()> {
        let mut dst = scratch.view_mut()?;
        match self {
            Operand::Quadrant(x) => dst.copy_from(x),
            Operand::Sum(x, y) => dst.combine_add(x, y),
            Operand::Difference(x, y) => dst.combine_sub(x, y),
        }
    }
}

type Product<'a, T> = (Operand<'a, T>, Operand<'a, T>);

/// Split once and recurse through kernel selection.
///
/// # Errors
///
/// [`TensorError::UnsupportedDimension`] if either operand has an odd extent.
pub(crate) fn strassen_views<T, D>(
    lhs: TensorView<'_, T>,
    rhs: TensorView<'_, T>,
    config: TensorConfig,
    diag: &D,
    execution: Execution,
) -> TensorResult<Tensor<T>>
where
    T: Element,
    D: Diagnostics + ?Sized,
{
    let [a, b, c, d] = lhs.quadrants()?;
    let [e, f, g, h] = rhs.quadrants()?;
    diag.message(
        Level::Debug,
        format_args!(
            "strassen: splitting {}x{} * {}x{} into {}x{} * {}x{} quadrants",
            lhs.rows(),
            lhs.cols(),
            rhs.rows(),
            rhs.cols(),
            a.rows(),
            a.cols(),
            e.rows(),
            e.cols()
        ),
    );

    use Operand::{Difference, Quadrant, Sum};
    let products: [Product<'_, T>; 7] = [
        (Sum(a, d), Sum(e, h)),
        (Quadrant(d), Difference(g, e)),
        (Sum(a, b), Quadrant(h)),
        (Difference(b, d), Sum(g, h)),
        (Quadrant(a), Difference(f, h)),
        (Sum(c, d), Quadrant(e)),
        (Difference(a, c), Sum(e, f)),
    ];

    let m = match execution {
        Execution::Serial => serial_products(products, config, diag)?,
        #[cfg(feature = "parallel")]
        Execution::Parallel => parallel_products(products, config, diag)?,
    };
    combine(m, config)
}

fn serial_products<T, D>(
    products: [Product<'_, T>; 7],
    config: TensorConfig,
    diag: &D,
) -> TensorResult<[Tensor<T>; 7]>
where
    T: Element,
    D: Diagnostics + ?Sized,
{
    let (lhs, rhs) = products[0];
    let mut left = Tensor::zeros(&lhs.shape(), config)?;
    let mut right = Tensor::zeros(&rhs.shape(), config)?;

    // Stops at the first failing product.
    let mut next = |i: usize| -> TensorResult<Tensor<T>> {
        let (lhs, rhs) = products[i];
        lhs.load_into(&mut left)?;
        rhs.load_into(&mut right)?;
        multiply_views(left.view()?, right.view()?, config, diag, Execution::Serial)
    };
    Ok([
        next(0)?,
        next(1)?,
        next(2)?,
        next(3)?,
        next(4)?,
        next(5)?,
        next(6)?,
    ])
}

#[cfg(feature = "parallel")]
fn parallel_products<T, D>(
    products: [Product<'_, T>; 7],
    config: TensorConfig,
    diag: &D,
) -> TensorResult<[Tensor<T>; 7]>
where
    T: Element,
    D: Diagnostics + ?Sized,
{
    let branch = |i: usize| -> TensorResult<Tensor<T>> {
        let (lhs, rhs) = products[i];
        let mut left = Tensor::zeros(&lhs.shape(), config)?;
        let mut right = Tensor::zeros(&rhs.shape(), config)?;
        lhs.load_into(&mut left)?;
        rhs.load_into(&mut right)?;
        multiply_views(left.view()?, right.view()?, config, diag, Execution::Parallel)
    };

    // All seven joins complete before any product is read.
    let (((m1, m2), (m3, m4)), ((m5, m6), m7)) = rayon::join(
        || {
            rayon::join(
                || rayon::join(|| branch(0), || branch(1)),
                || rayon::join(|| branch(2), || branch(3)),
            )
        },
        || rayon::join(|| rayon::join(|| branch(4), || branch(5)), || branch(6)),
    );
    collect_products([m1, m2, m3, m4, m5, m6, m7])
}

#[cfg(feature = "parallel")]
fn collect_products<T>(results: [TensorResult<Tensor<T>>; 7]) -> TensorResult<[Tensor<T>; 7]> {
    let [m1, m2, m3, m4, m5, m6, m7] = results;
    Ok([m1?, m2?, m3?, m4?, m5?, m6?, m7?])
}

fn combine<T: Element>(m: [Tensor<T>; 7], config: TensorConfig) -> TensorResult<Tensor<T>> {
    let [m1, m2, m3, m4, m5, m6, m7] = m;
    let c11 = m1.add(&m2)?.sub(&m3)?.add(&m4)?;
    let c12 = m5.add(&m3)?;
    let c21 = m6.add(&m2)?;
    let c22 = m5.add(&m1)?.sub(&m6)?.sub(&m7)?;
    stack_quadrants([&c11, &c12, &c21, &c22], config)
}

/// Lay out four equally shaped `R × C` blocks as one `2R × 2C` tensor.
///
/// Row `i` of the top half is row `i` of `c11` followed by row `i` of `c12`;
/// the bottom half does the same with `c21` and `c22`.
pub(crate) fn stack_quadrants<T: Element>(
    quadrants: [&Tensor<T>; 4],
    config: TensorConfig,
) -> TensorResult<Tensor<T>> {
    let [c11, c12, c21, c22] = quadrants;
    for q in [c12, c21, c22] {
        if q.shape() != c11.shape() {
            return Err(TensorError::shape_mismatch(
                "stack_quadrants",
                c11.shape(),
                q.shape(),
            ));
        }
    }
    let (rows, cols) = match c11.shape() {
        [rows, cols] => (*rows, *cols),
        other => {
            return Err(TensorError::unsupported_rank(
                "stack_quadrants",
                other.len(),
                2,
                2,
            ))
        }
    };

    let width = 2 * cols;
    let mut out = Tensor::zeros(&[2 * rows, width], config)?;
    let (top, bottom) = out.as_mut_slice().split_at_mut(rows * width);

    for (i, (upper, lower)) in top
        .chunks_exact_mut(width)
        .zip(bottom.chunks_exact_mut(width))
        .enumerate()
    {
        let src = i * cols..(i + 1) * cols;
        upper[..cols].copy_from_slice(&c11.as_slice()[src.clone()]);
        upper[cols..].copy_from_slice(&c12.as_slice()[src.clone()]);
        lower[..cols].copy_from_slice(&c21.as_slice()[src.clone()]);
        lower[cols..].copy_from_slice(&c22.as_slice()[src]);
    }
    Ok(out)
}
