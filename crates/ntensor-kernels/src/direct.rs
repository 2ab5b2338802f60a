//! Direct (schoolbook) matrix multiplication
//!
//! `out[i][j] = Σ_p a[i][p] * b[p][j]` over borrowed views, O(m·k·n). The
//! loop order is `i, p, j` so the innermost loop walks a row of `b` and a row
//! of `out` contiguously; each output element still accumulates its products
//! in increasing `p`.

use ntensor_core::{Element, Tensor, TensorConfig, TensorError, TensorResult, TensorView};

/// Multiply two views into a freshly zeroed `rows(a) × cols(b)` tensor.
pub(crate) fn multiply_views<T: Element>(
    a: &TensorView<'_, T>,
    b: &TensorView<'_, T>,
    config: TensorConfig,
) -> TensorResult<Tensor<T>> {
    let (m, k, n) = (a.rows(), a.cols(), b.cols());
    if b.rows() != k {
        return Err(TensorError::shape_mismatch(
            "matmul",
            &a.shape(),
            &b.shape(),
        ));
    }

    let mut out = Tensor::zeros(&[m, n], config)?;
    let data = out.as_mut_slice();
    for i in 0..m {
        let row = &mut data[i * n..(i + 1) * n];
        for p in 0..k {
            let a_ip = a.at(i, p);
            for (j, acc) in row.iter_mut().enumerate() {
                *acc = *acc + a_ip * b.at(p, j);
            }
        }
    }
    Ok(out)
}
