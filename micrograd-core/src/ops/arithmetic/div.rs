// micrograd-core/src/ops/arithmetic/div.rs

use crate::error::MicrogradError;
use crate::ops::arithmetic::{mul_op, pow_op};
use crate::value::Value;

/// Computes `a / b` as `a * b^(-1)`.
///
/// # Errors
/// Returns `MicrogradError::DomainError` when `b` is zero or too close to zero
/// for its reciprocal to be finite (propagated from `pow_op`).
pub fn div_op(a: &Value, b: &Value) -> Result<Value, MicrogradError> {
    let reciprocal = pow_op(b, -1.0)?;
    Ok(mul_op(a, &reciprocal))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creation::constant;
    use approx::assert_relative_eq;

    #[test]
    fn test_div_forward_and_backward() -> Result<(), MicrogradError> {
        // dz/dx = 1/y, dz/dy = -x/y^2
        let x = constant(2.0);
        let y = constant(4.0);
        let z = div_op(&x, &y)?;
        assert_relative_eq!(z.data(), 0.5);

        z.backward()?;
        assert_relative_eq!(x.grad(), 0.25);
        assert_relative_eq!(y.grad(), -2.0 / 16.0);
        Ok(())
    }

    #[test]
    fn test_div_by_zero_is_domain_error() {
        let x = constant(1.0);
        let zero = constant(0.0);
        assert!(matches!(div_op(&x, &zero), Err(MicrogradError::DomainError { .. })));
    }
}
