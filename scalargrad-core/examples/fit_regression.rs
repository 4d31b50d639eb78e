//! # Fitting a Small Regression with a Scalar MLP
//!
//! This example walks through the basic steps of training a tiny multi-layer
//! perceptron with `scalargrad-core`.
//!
//! ## Demonstrated features:
//! 1.  **Network construction** from an `MlpConfig` (3 inputs, 8 tanh hidden
//!     neurons, 2 linear outputs) with seeded uniform initialization.
//! 2.  **Loss graph**: per-sample `mse_loss`, averaged over the dataset into a
//!     single root node.
//! 3.  **Backward pass**: one `backward()` call fills every parameter's `grad`.
//! 4.  **Manual SGD step**: parameters are updated from outside the graph with
//!     `set_value`, then the next iteration rebuilds the graph from scratch.
//!
//! ## Running
//! `cargo run --example fit_regression`
//!
//! Set `RUST_LOG=debug` to see the scheduler's per-pass logging.

use scalargrad_core::nn::{mse_loss, Mlp, MlpConfig, Module, UniformInit};
use scalargrad_core::{leaf, leaves, ScalarGradError, Value};

const LEARNING_RATE: f64 = 0.05;
const STEPS: usize = 300;

fn dataset() -> (Vec<Vec<f64>>, Vec<Vec<f64>>) {
    let x = vec![
        vec![0.1, 0.2, 0.3],
        vec![0.4, 0.5, 0.6],
        vec![0.7, 0.8, 0.9],
    ];
    let y = vec![vec![0.1, 0.2], vec![0.3, 0.4], vec![0.5, 0.6]];
    (x, y)
}

/// Builds the mean loss over all samples as one graph.
fn mean_loss(mlp: &Mlp, x: &[Vec<f64>], y: &[Vec<f64>]) -> Result<Value, ScalarGradError> {
    let mut total = leaf(0.0);
    for (inputs, targets) in x.iter().zip(y.iter()) {
        let predictions = mlp.forward(&leaves(inputs))?;
        let sample = mse_loss(&predictions, &leaves(targets))?;
        total = &total + &sample;
    }
    Ok(&total * &leaf(1.0 / x.len() as f64))
}

fn main() -> Result<(), ScalarGradError> {
    env_logger::init();

    let (x, y) = dataset();
    let config = MlpConfig::builder().inputs(3).layer(8).layer(2).build()?;
    let mut init = UniformInit::new(42);
    let mlp = Mlp::new(&config, &mut init)?;
    println!(
        "Model: {} -> {:?} ({} parameters)",
        config.n_inputs,
        config.layer_sizes,
        mlp.num_parameters()
    );

    for step in 0..STEPS {
        let loss = mean_loss(&mlp, &x, &y)?;
        loss.backward()?;

        for param in mlp.parameters() {
            param.set_value(param.value() - LEARNING_RATE * param.grad())?;
        }

        if step % 50 == 0 || step == STEPS - 1 {
            println!("step {:>3}  loss {:.6}", step, loss.value());
        }
    }

    println!("\nPredictions after training:");
    for (inputs, targets) in x.iter().zip(y.iter()) {
        let predictions: Vec<f64> = mlp
            .forward(&leaves(inputs))?
            .iter()
            .map(|p| p.value())
            .collect();
        println!("  x={:?}  y={:?}  pred={:.3?}", inputs, targets, predictions);
    }
    Ok(())
}
