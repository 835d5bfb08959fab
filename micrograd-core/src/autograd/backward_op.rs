use crate::error::MicrogradError;
use crate::ops::activation::relu::relu_backward;
use crate::ops::activation::tanh::tanh_backward;
use crate::ops::arithmetic::add::add_backward;
use crate::ops::arithmetic::mul::mul_backward;
use crate::ops::arithmetic::pow::pow_backward;
use std::fmt::{self, Debug};

/// Defines the interface for the local gradient rule of a differentiable operation.
///
/// During `backward()` the driver hands each derived node's rule the gradient
/// accumulated on that node (`grad_output`), the node's own value (`output`) and
/// the values of its operands (`inputs`). The rule returns one contribution per
/// operand, to be **added** into that operand's gradient:
///
/// \\[ \frac{dL}{d\text{input}_i} \mathrel{+}= \frac{dL}{d\text{output}} \cdot \frac{d\text{output}}{d\text{input}_i} \\]
///
/// Rules only ever read values. They never look at any gradient other than
/// `grad_output`.
pub trait BackwardOp: Debug + Send + Sync {
    /// Computes the contribution of this node to each of its operands' gradients.
    ///
    /// # Returns
    /// * `Ok(Vec<f64>)`: one entry per operand, in operand order.
    /// * `Err(MicrogradError)`: if `inputs` has the wrong length or the local slope
    ///    is undefined (see `Operation::Power`).
    fn backward(&self, grad_output: f64, output: f64, inputs: &[f64]) -> Result<Vec<f64>, MicrogradError>;

    /// Number of operands the operation consumes.
    fn arity(&self) -> usize;
}

/// The operation that produced a node.
///
/// The tag fully determines the node's arity and local gradient rule, so a node
/// carries no per-node closure: `BackwardOp for Operation` is the single dispatch
/// point for every rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    /// A constant created directly by the client. No operands, no rule.
    Leaf,
    /// `operands[0] + operands[1]`
    Add,
    /// `operands[0] * operands[1]`
    Multiply,
    /// `operands[0]` raised to a constant exponent. The exponent is not a graph node
    /// and never receives a gradient.
    Power(f64),
    /// Hyperbolic tangent of `operands[0]`.
    Tanh,
    /// `max(operands[0], 0)`
    Relu,
}

impl Operation {
    pub fn arity(&self) -> usize {
        match self {
            Operation::Leaf => 0,
            Operation::Add | Operation::Multiply => 2,
            Operation::Power(_) | Operation::Tanh | Operation::Relu => 1,
        }
    }

    /// Short lowercase name, used in logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Leaf => "leaf",
            Operation::Add => "add",
            Operation::Multiply => "mul",
            Operation::Power(_) => "pow",
            Operation::Tanh => "tanh",
            Operation::Relu => "relu",
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Operation::Leaf)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operation::Leaf => write!(f, "leaf"),
            Operation::Add => write!(f, "+"),
            Operation::Multiply => write!(f, "*"),
            Operation::Power(exponent) => write!(f, "**{}", exponent),
            Operation::Tanh => write!(f, "tanh"),
            Operation::Relu => write!(f, "relu"),
        }
    }
}

impl BackwardOp for Operation {
    fn backward(&self, grad_output: f64, output: f64, inputs: &[f64]) -> Result<Vec<f64>, MicrogradError> {
        if inputs.len() != self.arity() {
            return Err(MicrogradError::ArityMismatch {
                operation: self.name().to_string(),
                expected: self.arity(),
                actual: inputs.len(),
            });
        }
        match *self {
            Operation::Leaf => Ok(Vec::new()),
            Operation::Add => Ok(add_backward(grad_output).to_vec()),
            Operation::Multiply => Ok(mul_backward(grad_output, inputs[0], inputs[1]).to_vec()),
            Operation::Power(exponent) => Ok(vec![pow_backward(grad_output, inputs[0], exponent)?]),
            // tanh' is expressed through the stored result t: 1 - t^2
            Operation::Tanh => Ok(vec![tanh_backward(grad_output, output)]),
            Operation::Relu => Ok(vec![relu_backward(grad_output, inputs[0])]),
        }
    }

    fn arity(&self) -> usize {
        Operation::arity(self)
    }
}
