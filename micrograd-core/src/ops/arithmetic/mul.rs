// micrograd-core/src/ops/arithmetic/mul.rs

use crate::autograd::backward_op::Operation;
use crate::ops::apply_binary_op;
use crate::value::Value;

/// Computes `a * b`.
///
/// The new node records `Operation::Multiply` with operands `[a, b]`.
pub fn mul_op(a: &Value, b: &Value) -> Value {
    apply_binary_op(a, b, |x, y| x * y, Operation::Multiply)
}

/// Local rule for multiplication.
///
/// Each operand's slope is the other operand's **value**:
/// `da += b * g`, `db += a * g`. Only data fields are read, never gradients.
pub(crate) fn mul_backward(grad_output: f64, a: f64, b: f64) -> [f64; 2] {
    [b * grad_output, a * grad_output]
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
