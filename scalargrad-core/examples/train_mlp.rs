//! # Training a small MLP with SGD
//!
//! Fits a 3-4-4-1 multi-layer perceptron to four labelled points with mean
//! squared error and plain gradient descent, printing the loss as it drops.
//!
//! ## Running
//! `cargo run --example train_mlp`

use rand::rngs::StdRng;
use rand::SeedableRng;
use scalargrad_core::nn::{mse_loss, Mlp, Module};
use scalargrad_core::optim::{Optimizer, Sgd, SgdConfig};
use scalargrad_core::{ScalarGradError, Value};

fn main() -> Result<(), ScalarGradError> {
    env_logger::init();

    let xs = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];

    let mut rng = StdRng::seed_from_u64(42);
    let model = Mlp::new(3, &[4, 4, 1], &mut rng)?;
    println!("MLP with {} parameters", model.num_parameters());

    let mut optimizer = Sgd::new(
        model.parameters(),
        SgdConfig {
            lr: 0.005,
            momentum: 0.9,
        },
    )?;
    let targets: Vec<Value> = ys.iter().copied().map(Value::new).collect();

    for epoch in 0..200 {
        let mut preds = Vec::with_capacity(xs.len());
        for x in &xs {
            let input: Vec<Value> = x.iter().copied().map(Value::new).collect();
            preds.extend(model.forward(&input)?);
        }
        let loss = mse_loss(&preds, &targets)?;

        optimizer.zero_grad();
        loss.backward();
        optimizer.step()?;

        if epoch % 20 == 0 {
            println!("epoch {:>3}: loss = {:.6}", epoch, loss.data());
        }
    }

    for (x, y) in xs.iter().zip(ys) {
        let input: Vec<Value> = x.iter().copied().map(Value::new).collect();
        let pred = model.forward(&input)?;
        println!("{:?} -> {:.4} (target {})", x, pred[0].data(), y);
    }
    Ok(())
}
