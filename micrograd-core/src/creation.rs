// src/creation.rs

use crate::error::MicrogradError;
use crate::value::Value;
use rand::Rng;
use rand_distr::{Distribution, Normal};

/// Creates a leaf node holding `data`, with zero gradient and no operands.
pub fn constant(data: f64) -> Value {
    Value::new(data)
}

/// Creates a leaf drawn uniformly from `[low, high)` using the thread-local RNG.
///
/// Intended for initialising the weights of neurons built on the engine.
pub fn uniform(low: f64, high: f64) -> Result<Value, MicrogradError> {
    uniform_with_rng(&mut rand::thread_rng(), low, high)
}

/// Same as [`uniform`] with an explicit RNG, for reproducible graphs.
pub fn uniform_with_rng<R: Rng + ?Sized>(rng: &mut R, low: f64, high: f64) -> Result<Value, MicrogradError> {
    if low >= high || !low.is_finite() || !high.is_finite() {
        return Err(MicrogradError::DomainError {
            operation: "uniform".to_string(),
            details: format!("invalid range [{}, {})", low, high),
        });
    }
    Ok(constant(rng.gen_range(low..high)))
}

/// Creates a leaf drawn from a normal distribution using the thread-local RNG.
pub fn randn(mean: f64, std_dev: f64) -> Result<Value, MicrogradError> {
    randn_with_rng(&mut rand::thread_rng(), mean, std_dev)
}

/// Same as [`randn`] with an explicit RNG.
pub fn randn_with_rng<R: Rng + ?Sized>(rng: &mut R, mean: f64, std_dev: f64) -> Result<Value, MicrogradError> {
    let normal = Normal::new(mean, std_dev).map_err(|e| MicrogradError::DomainError {
        operation: "randn".to_string(),
        details: e.to_string(),
    })?;
    Ok(constant(normal.sample(rng)))
}
