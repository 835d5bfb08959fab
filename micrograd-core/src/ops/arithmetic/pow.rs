// micrograd-core/src/ops/arithmetic/pow.rs

use crate::autograd::backward_op::Operation;
use crate::error::MicrogradError;
use crate::ops::apply_unary_op;
use crate::value::Value;

/// Raises `base` to the constant power `exponent`.
///
/// The exponent is a plain number, not a graph node: it is stored in
/// `Operation::Power(exponent)` and never receives a gradient.
///
/// # Errors
/// `MicrogradError::DomainError` when a finite base would produce a value that is
/// not a finite real number:
/// * a negative base with a non-integer exponent has no real result;
/// * a zero base with a negative exponent divides by zero;
/// * the result overflows `f64`.
///
/// The exponent itself must be finite. A base that is already NaN or infinite is not
/// an error: like every other operator, `pow_op` lets it flow through.
pub fn pow_op(base: &Value, exponent: f64) -> Result<Value, MicrogradError> {
    check_pow_domain(base.data(), exponent)?;
    Ok(apply_unary_op(base, |v| v.powf(exponent), Operation::Power(exponent)))
}

fn check_pow_domain(base: f64, exponent: f64) -> Result<(), MicrogradError> {
    if !exponent.is_finite() {
        return Err(MicrogradError::DomainError {
            operation: "pow_op".to_string(),
            details: format!("non-finite exponent {}", exponent),
        });
    }
    if !base.is_finite() {
        return Ok(());
    }
    if base < 0.0 && exponent.fract() != 0.0 {
        return Err(MicrogradError::DomainError {
            operation: "pow_op".to_string(),
            details: format!("negative base {} with non-integer exponent {}", base, exponent),
        });
    }
    if base == 0.0 && exponent < 0.0 {
        return Err(MicrogradError::DomainError {
            operation: "pow_op".to_string(),
            details: format!("zero base with negative exponent {}", exponent),
        });
    }
    if !base.powf(exponent).is_finite() {
        return Err(MicrogradError::DomainError {
            operation: "pow_op".to_string(),
            details: format!("{}^{} overflows", base, exponent),
        });
    }
    Ok(())
}

/// Local rule for a constant power: `dbase += e * base^(e-1) * g`.
///
/// A zero exponent makes the node constant, so its slope is exactly zero.
/// A finite base whose slope is not finite (zero base with `0 < e < 1`) is a
/// `DomainError`. A non-finite base propagates into the gradient.
pub(crate) fn pow_backward(grad_output: f64, base: f64, exponent: f64) -> Result<f64, MicrogradError> {
    if exponent == 0.0 {
        return Ok(0.0);
    }
    let slope = exponent * base.powf(exponent - 1.0);
    if base.is_finite() && !slope.is_finite() {
        return Err(MicrogradError::DomainError {
            operation: "pow_backward".to_string(),
            details: format!("derivative of {}^{} is not finite", base, exponent),
        });
    }
    Ok(slope * grad_output)
}

impl Value {
    /// Method form of [`pow_op`].
    pub fn powf(&self, exponent: f64) -> Result<Value, MicrogradError> {
        pow_op(self, exponent)
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
