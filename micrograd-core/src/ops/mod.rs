//! # Operators
//!
//! Pure functions that read the values of existing nodes and return a new node
//! recording the operation and its operands. No operator mutates an existing node.
//!
//! Each operator lives in its own file together with its local gradient rule,
//! which `Operation::backward` dispatches to during the backward pass.

pub mod activation;
pub mod arithmetic;

use crate::autograd::backward_op::Operation;
use crate::value::Value;

/// Builds a derived node from one operand.
pub(crate) fn apply_unary_op<F>(a: &Value, forward: F, op: Operation) -> Value
where
    F: Fn(f64) -> f64,
{
    let data = forward(a.data());
    Value::from_op(data, op, vec![a.clone()])
}

/// Builds a derived node from two operands, kept in the given order.
pub(crate) fn apply_binary_op<F>(a: &Value, b: &Value, forward: F, op: Operation) -> Value
where
    F: Fn(f64, f64) -> f64,
{
    let data = forward(a.data(), b.data());
    Value::from_op(data, op, vec![a.clone(), b.clone()])
}
