//! # Expression gradients
//!
//! Builds `o = tanh(x1*w1 + x2*w2 + b)`, the expression computed by a single
//! neuron, differentiates it, and prints every leaf's gradient. Then resets the
//! gradients and differentiates a second expression over the same weights.
//!
//! `RUST_LOG=debug cargo run --example expression_gradients`

use micrograd_core::{constant, zero_grad_all, MicrogradError, Value};

fn neuron(inputs: &[Value], weights: &[Value], bias: &Value) -> Value {
    let activation = inputs
        .iter()
        .zip(weights)
        .fold(bias.clone(), |acc, (x, w)| acc + x * w);
    activation.tanh()
}

fn main() -> Result<(), MicrogradError> {
    env_logger::init();

    let inputs = vec![constant(2.0), constant(0.0)];
    let weights = vec![constant(-3.0), constant(1.0)];
    let bias = constant(6.881_373_587_019_543);

    let o = neuron(&inputs, &weights, &bias);
    o.backward()?;

    println!("o = {}", o);
    for (i, (x, w)) in inputs.iter().zip(&weights).enumerate() {
        println!("x{i}: grad={:.4}  w{i}: grad={:.4}", x.grad(), w.grad());
    }
    println!("b: grad={:.4}", bias.grad());

    // Squared error against a target, reusing the same leaves
    let mut leaves = inputs.clone();
    leaves.extend(weights.iter().cloned());
    leaves.push(bias.clone());
    zero_grad_all(&leaves);

    let loss = (neuron(&inputs, &weights, &bias) - 1.0).powf(2.0)?;
    loss.backward()?;
    println!("loss = {:.6}", loss.data());
    for (i, w) in weights.iter().enumerate() {
        println!("dloss/dw{i} = {:.6}", w.grad());
    }
    Ok(())
}
