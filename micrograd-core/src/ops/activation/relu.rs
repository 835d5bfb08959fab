// micrograd-core/src/ops/activation/relu.rs

use crate::autograd::backward_op::Operation;
use crate::ops::apply_unary_op;
use crate::value::Value;

/// Applies the Rectified Linear Unit: `ReLU(x) = max(x, 0)`.
///
/// A NaN input stays NaN (`f64::max` alone would turn it into 0).
pub fn relu_op(x: &Value) -> Value {
    apply_unary_op(x, |v| if v.is_nan() { v } else { v.max(0.0) }, Operation::Relu)
}

/// Local rule for ReLU.
///
/// The branch tests the **input** value: gradient flows only when `x > 0`, so
/// nothing flows at exactly zero. A NaN input yields a NaN contribution.
pub(crate) fn relu_backward(grad_output: f64, input: f64) -> f64 {
    if input.is_nan() {
        input
    } else if input > 0.0 {
        grad_output
    } else {
        0.0
    }
}

impl Value {
    /// Method form of [`relu_op`].
    pub fn relu(&self) -> Value {
        relu_op(self)
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
