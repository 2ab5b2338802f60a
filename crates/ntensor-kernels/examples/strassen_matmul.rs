//! Direct vs Strassen matrix multiplication
//!
//! This example demonstrates:
//! - Building and scaling a tensor
//! - How the Strassen threshold changes the kernel choice
//! - Transparent padding for sizes that are not powers of two
//! - Recording the engine's diagnostics in memory
//!
//! Run with: cargo run --example strassen_matmul [--features parallel]

use anyhow::Result;
use ntensor_core::{CollectingDiagnostics, Level, Tensor, TensorConfig};
use ntensor_kernels::{
    approx_equal, matmul_direct, matmul_with, relative_error, select_kernel, time_operation,
    MatmulExt,
};

fn main() -> Result<()> {
    println!("=== Strassen Matmul Example ===\n");

    demo_flow()?;
    threshold_comparison()?;
    padding()?;

    #[cfg(feature = "parallel")]
    parallel()?;

    println!("\n=== Done ===");
    Ok(())
}

fn demo_flow() -> Result<()> {
    println!("--- Fill, scale and multiply ---");

    let cfg = TensorConfig::default().with_strassen_threshold(0);
    let mut a = Tensor::from_fn(&[4, 4], cfg, |p| {
        let (i, j) = (p[0], p[1]);
        2.125 * (i + j) as f32 + (i / (j + 1)) as f32
    })?;
    println!("  A:       {}", a);
    println!("  sum(A) = {}", a.sum());

    a.scale_in_place(2.0);
    println!("  2A:      {}", a);

    let b = Tensor::new(&[4, 4], 1.0f32, cfg)?;
    let c = a.matmul(&b)?;
    println!("  2A · 1:  {}", c);
    println!();
    Ok(())
}

fn threshold_comparison() -> Result<()> {
    println!("--- Threshold comparison (128x128, f64) ---");

    let size = 128;
    for threshold in [usize::MAX, 4096, 48, 0] {
        let cfg = TensorConfig::default().with_strassen_threshold(threshold);
        let a = Tensor::from_fn(&[size, size], cfg, |p| ((p[0] * 13 + p[1]) % 17) as f64 / 4.0)?;
        let b = Tensor::from_fn(&[size, size], cfg, |p| ((p[0] + p[1] * 5) % 11) as f64 - 5.0)?;

        let diag = CollectingDiagnostics::new();
        let flops = size * size * size;
        let (c, timing) = time_operation(format!("threshold {:>20}", threshold), flops, || {
            matmul_with(&a, &b, &diag)
        });
        let c = c?;
        timing.print();

        let splits = diag
            .messages()
            .iter()
            .filter(|(level, msg)| *level == Level::Debug && msg.contains("splitting"))
            .count();
        let reference = matmul_direct(&a, &b)?;
        println!(
            "    kernel: {:?}, splits: {}, relative error vs direct: {:.2e}",
            select_kernel(size, size, size, &cfg),
            splits,
            relative_error(&reference, &c)
        );
    }
    println!();
    Ok(())
}

fn padding() -> Result<()> {
    println!("--- Padding (100x60 · 60x90) ---");

    let cfg = TensorConfig::default().with_strassen_threshold(0);
    let a = Tensor::from_fn(&[100, 60], cfg, |p| (p[0] as f64).sin() + p[1] as f64 * 0.01)?;
    let b = Tensor::from_fn(&[60, 90], cfg, |p| (p[1] as f64).cos() - p[0] as f64 * 0.02)?;

    let diag = CollectingDiagnostics::new();
    let c = matmul_with(&a, &b, &diag)?;
    for (level, msg) in diag.messages().iter().take(3) {
        println!("  [{}] {}", level, msg);
    }
    println!("  result shape: {:?}", c.shape());
    println!(
        "  matches direct within 1e-9: {}",
        approx_equal(&c, &matmul_direct(&a, &b)?, 1e-9)
    );
    Ok(())
}

#[cfg(feature = "parallel")]
fn parallel() -> Result<()> {
    use ntensor_kernels::matmul_parallel_with;

    println!("\n--- Fork-join Strassen (256x256) ---");

    let size = 256;
    let cfg = TensorConfig::default().with_strassen_threshold(0);
    let a = Tensor::from_fn(&[size, size], cfg, |p| ((p[0] * 3 + p[1]) % 13) as f64)?;
    let b = Tensor::from_fn(&[size, size], cfg, |p| ((p[0] + p[1] * 7) % 5) as f64)?;
    let flops = size * size * size;

    let diag = ntensor_core::LogDiagnostics::new(Level::Warn);
    let (serial, t_serial) = time_operation("serial", flops, || matmul_with(&a, &b, &diag));
    let (parallel, t_parallel) =
        time_operation("parallel", flops, || matmul_parallel_with(&a, &b, &diag));
    t_serial.print();
    t_parallel.print();
    println!("  identical: {}", serial? == parallel?);
    Ok(())
}
