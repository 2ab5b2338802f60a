//! Performance benchmarks for ntensor-kernels
//!
//! Run with: cargo bench -p ntensor-kernels
//!
//! Benchmarks cover:
//! - Direct kernel vs forced Strassen on power-of-two sizes
//! - Automatic selection with padding on odd sizes
//! - Fork-join Strassen (with `--features parallel`)

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use ntensor_core::{Level, LogDiagnostics, Tensor, TensorConfig};
use ntensor_kernels::*;

fn operands(size: usize, config: TensorConfig) -> (Tensor<f64>, Tensor<f64>) {
    let a = Tensor::from_fn(&[size, size], config, |p| ((p[0] * 13 + p[1] * 7) % 17) as f64)
        .unwrap();
    let b = Tensor::from_fn(&[size, size], config, |p| ((p[0] + p[1] * 3) % 11) as f64 - 5.0)
        .unwrap();
    (a, b)
}

// Debug messages are filtered before formatting reaches a logger.
fn quiet() -> LogDiagnostics {
    LogDiagnostics::new(Level::Warn)
}

fn bench_direct_vs_strassen(c: &mut Criterion) {
    let mut group = c.benchmark_group("direct_vs_strassen");
    group.sample_size(20);

    for &size in [32, 64, 128, 256].iter() {
        let (a, b) = operands(size, TensorConfig::default());
        group.throughput(Throughput::Elements((size * size * size) as u64));

        group.bench_with_input(BenchmarkId::new("direct", size), &size, |bencher, _| {
            bencher.iter(|| black_box(matmul_direct(&a, &b).unwrap()));
        });

        let diag = quiet();
        group.bench_with_input(BenchmarkId::new("strassen", size), &size, |bencher, _| {
            bencher.iter(|| black_box(matmul_strassen_with(&a, &b, &diag).unwrap()));
        });
    }
    group.finish();
}

fn bench_threshold_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("threshold_sweep");
    group.sample_size(20);
    let size = 128;

    for &threshold in [0usize, 48, 256, 1024, 4096].iter() {
        let (a, b) = operands(size, TensorConfig::default().with_strassen_threshold(threshold));
        let diag = quiet();

        group.bench_with_input(
            BenchmarkId::new("matmul_128", threshold),
            &threshold,
            |bencher, _| {
                bencher.iter(|| black_box(matmul_with(&a, &b, &diag).unwrap()));
            },
        );
    }
    group.finish();
}

fn bench_padded(c: &mut Criterion) {
    let mut group = c.benchmark_group("padded");
    group.sample_size(20);

    for &size in [33, 65, 100].iter() {
        let (a, b) = operands(size, TensorConfig::default().with_strassen_threshold(0));
        let diag = quiet();

        group.bench_with_input(BenchmarkId::new("auto", size), &size, |bencher, _| {
            bencher.iter(|| black_box(matmul_with(&a, &b, &diag).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("direct", size), &size, |bencher, _| {
            bencher.iter(|| black_box(matmul_direct(&a, &b).unwrap()));
        });

        #[cfg(feature = "parallel")]
        group.bench_with_input(BenchmarkId::new("parallel", size), &size, |bencher, _| {
            bencher.iter(|| black_box(matmul_parallel_with(&a, &b, &diag).unwrap()));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_direct_vs_strassen,
    bench_threshold_sweep,
    bench_padded
);
criterion_main!(benches);
