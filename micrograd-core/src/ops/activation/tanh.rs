// micrograd-core/src/ops/activation/tanh.rs

use crate::autograd::backward_op::Operation;
use crate::ops::apply_unary_op;
use crate::value::Value;

/// Applies the hyperbolic tangent.
///
/// The value is the standard `tanh(x) = (e^{2x} - 1) / (e^{2x} + 1)`, evaluated with
/// `f64::tanh`, which stays finite and saturates at ±1 for large `|x|`.
pub fn tanh_op(x: &Value) -> Value {
    apply_unary_op(x, f64::tanh, Operation::Tanh)
}

/// Local rule for tanh: `dx += (1 - t^2) * g`, where `t` is the node's stored value.
pub(crate) fn tanh_backward(grad_output: f64, output: f64) -> f64 {
    (1.0 - output * output) * grad_output
}

impl Value {
    /// Method form of [`tanh_op`].
    pub fn tanh(&self) -> Value {
        tanh_op(self)
    }
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
