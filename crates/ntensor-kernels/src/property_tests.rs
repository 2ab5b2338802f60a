//! Property-based tests for the matmul kernels
//!
//! Integer-valued inputs keep every intermediate exact, so Strassen and the
//! direct kernel must agree element for element.

use super::*;
use ntensor_core::{CollectingDiagnostics, Tensor, TensorConfig};
use proptest::prelude::*;

/// Power-of-two sizes from 2 to 32
fn power_of_two_size() -> impl Strategy<Value = usize> {
    (1u32..=5).prop_map(|e| 1usize << e)
}

/// Small matrix dimensions, odd sizes included
fn matrix_dims() -> impl Strategy<Value = (usize, usize, usize)> {
    (1usize..14, 1usize..14, 1usize..14)
}

fn int_tensor(rows: usize, cols: usize, seed: i64, config: TensorConfig) -> Tensor<i64> {
    Tensor::from_fn(&[rows, cols], config, |p| {
        ((p[0] as i64 * 31 + p[1] as i64 * 17 + seed) % 19) - 9
    })
    .unwrap()
}

proptest! {
    /// Strassen and direct agree on square power-of-two operands
    #[test]
    fn test_strassen_matches_direct_i64(size in power_of_two_size(), seed in 0i64..1000) {
        let cfg = TensorConfig::default().with_strassen_threshold(0);
        let a = int_tensor(size, size, seed, cfg);
        let b = int_tensor(size, size, seed + 7, cfg);

        let strassen = matmul_strassen_with(&a, &b, &CollectingDiagnostics::new()).unwrap();
        let direct = matmul_direct(&a, &b).unwrap();
        prop_assert_eq!(strassen, direct);
    }

    /// Integer-valued floats stay exact through the Strassen recombination
    #[test]
    fn test_strassen_matches_direct_f64(size in power_of_two_size(), seed in 0i64..1000) {
        let cfg = TensorConfig::default().with_strassen_threshold(0);
        let a = Tensor::from_fn(&[size, size], cfg, |p| ((p[0] * 5 + p[1] + seed as usize) % 9) as f64 - 4.0).unwrap();
        let b = Tensor::from_fn(&[size, size], cfg, |p| ((p[0] + p[1] * 3 + seed as usize) % 7) as f64).unwrap();

        let strassen = matmul_strassen_with(&a, &b, &CollectingDiagnostics::new()).unwrap();
        let direct = matmul_direct(&a, &b).unwrap();
        prop_assert_eq!(strassen.as_slice(), direct.as_slice());
    }

    /// Padding and cropping give the direct result for any shape and threshold
    #[test]
    fn test_matmul_any_shape((m, k, n) in matrix_dims(), threshold in 0usize..64, seed in 0i64..100) {
        let cfg = TensorConfig::default().with_strassen_threshold(threshold);
        let a = int_tensor(m, k, seed, cfg);
        let b = int_tensor(k, n, seed + 3, cfg);

        let result = matmul_with(&a, &b, &CollectingDiagnostics::new()).unwrap();
        prop_assert_eq!(result.shape(), &[m, n]);
        prop_assert_eq!(result, matmul_direct(&a, &b).unwrap());
    }

    /// Inner-dimension mismatch is always reported, never computed
    #[test]
    fn test_inner_mismatch_rejected((m, k, n) in matrix_dims(), extra in 1usize..4) {
        let cfg = TensorConfig::default();
        let a = int_tensor(m, k, 0, cfg);
        let b = int_tensor(k + extra, n, 0, cfg);

        let is_mismatch = matches!(
            matmul(&a, &b),
            Err(ntensor_core::TensorError::ShapeMismatch { operation: "matmul", .. })
        );
        prop_assert!(is_mismatch);
    }

    /// Multiplying by the identity returns the operand
    #[test]
    fn test_identity(size in 1usize..20, threshold in 0usize..16) {
        let cfg = TensorConfig::default().with_strassen_threshold(threshold);
        let a = int_tensor(size, size, 11, cfg);
        let identity = Tensor::from_fn(&[size, size], cfg, |p| i64::from(p[0] == p[1])).unwrap();

        let diag = CollectingDiagnostics::new();
        prop_assert_eq!(&matmul_with(&a, &identity, &diag).unwrap(), &a);
        prop_assert_eq!(&matmul_with(&identity, &a, &diag).unwrap(), &a);
    }
}
