// micrograd-core/src/ops/arithmetic/add.rs

use crate::autograd::backward_op::Operation;
use crate::ops::apply_binary_op;
use crate::value::Value;

/// Computes `a + b`.
///
/// The new node records `Operation::Add` with operands `[a, b]`.
pub fn add_op(a: &Value, b: &Value) -> Value {
    apply_binary_op(a, b, |x, y| x + y, Operation::Add)
}

/// Local rule for addition: both operands receive the upstream gradient unchanged.
pub(crate) fn add_backward(grad_output: f64) -> [f64; 2] {
    [grad_output, grad_output]
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
