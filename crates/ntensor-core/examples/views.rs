//! Tensor views and shape operations examples.
//!
//! This example demonstrates:
//! - Indexed writes and reductions on an owning tensor
//! - Read-only and writable windows borrowing the parent buffer
//! - Buffer-reusing reshape and flatten
//!
//! Run with:
//! ```bash
//! cargo run --example views
//! ```

use anyhow::Result;
use ntensor_core::{Tensor, TensorConfig};

fn main() -> Result<()> {
    println!("=== ntensor-core: Views and Shape Operations ===\n");

    example_indexing()?;
    example_views()?;
    example_reshape()?;

    println!("\n=== All examples completed successfully! ===");
    Ok(())
}

fn example_indexing() -> Result<()> {
    println!("--- Example 1: Indexed Access ---");

    let mut tensor = Tensor::new(&[4, 4], 0.0f32, TensorConfig::default())?;
    for i in 0..4 {
        for j in 0..4 {
            tensor.set(&[i, j], 2.125 * (i + j) as f32 + (i / (j + 1)) as f32)?;
        }
    }

    println!("  Shape:   {:?}", tensor.shape());
    println!("  Strides: {:?}", tensor.strides());
    println!("  Values:  {}", tensor);
    println!("  Sum: {}  Mean: {}", tensor.sum(), tensor.mean()?);
    println!("  Min: {}  Max: {}", tensor.min()?, tensor.max()?);
    println!();
    Ok(())
}

fn example_views() -> Result<()> {
    println!("--- Example 2: Windows ---");

    let mut tensor = Tensor::from_fn(&[4, 4], TensorConfig::default(), |p| (p[0] * 4 + p[1]) as i32)?;

    {
        let view = tensor.view()?;
        let [tl, tr, bl, br] = view.quadrants()?;
        println!("  Top-left:     {}", tl);
        println!("  Top-right:    {}", tr);
        println!("  Bottom-left:  {}", bl);
        println!("  Bottom-right: {}", br);
    }

    {
        let mut window = tensor.slice_mut(1, 3, 1, 3)?;
        window.fill(-1);
        println!("  Window after fill: {}", window);
    }
    println!("  Parent after fill: {}", tensor);
    println!();
    Ok(())
}

fn example_reshape() -> Result<()> {
    println!("--- Example 3: Reshape ---");

    let tensor = Tensor::from_fn(&[2, 3, 4], TensorConfig::default(), |p| {
        (p[0] * 12 + p[1] * 4 + p[2]) as f64
    })?;
    println!("  Original shape: {:?}", tensor.shape());

    let matrix = tensor.reshape(&[6, 4])?;
    println!("  Reshaped:       {:?}", matrix.shape());
    println!("  Row 2:          {}", matrix.slice(2, 3, 0, 4)?);

    let flat = matrix.flatten();
    println!("  Flattened:      {:?}", flat.shape());
    Ok(())
}
