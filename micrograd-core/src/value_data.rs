// src/value_data.rs
use crate::autograd::backward_op::Operation;
use crate::value::Value;
use std::sync::Arc;

/// Internal storage for a single node of the computation graph.
///
/// It is wrapped in `Arc<RwLock<ValueData>>` by the `Value` struct so that one
/// node can be the operand of many parents while its gradient stays mutable.
/// Everything except `grad` and `grad_touched` is fixed at construction.
#[derive(Debug)]
pub struct ValueData {
    /// The scalar result of this node's operation, or the stored constant for a leaf.
    pub(crate) data: f64,
    /// Accumulator for d(root)/d(this). Starts at zero and is only added to,
    /// except for the seed written on the node a backward pass starts from.
    pub(crate) grad: f64,
    /// The operation that produced this node. `Operation::Leaf` for constants.
    pub(crate) op: Operation,
    /// Operands in the order they were passed to the operator.
    pub(crate) operands: Vec<Value>,
    /// Set whenever a backward pass writes into `grad`, cleared by `zero_grad`.
    pub(crate) grad_touched: bool,
}

impl ValueData {
    /// Creates the record for a leaf node holding `data`.
    pub fn new(data: f64) -> Self {
        ValueData {
            data,
            grad: 0.0,
            op: Operation::Leaf,
            operands: Vec::new(),
            grad_touched: false,
        }
    }

    /// Creates the record for a node produced by `op` applied to `operands`.
    pub(crate) fn from_op(data: f64, op: Operation, operands: Vec<Value>) -> Self {
        debug_assert_eq!(
            op.arity(),
            operands.len(),
            "{} expects {} operand(s)",
            op.name(),
            op.arity()
        );
        ValueData {
            data,
            grad: 0.0,
            op,
            operands,
            grad_touched: false,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.operands.is_empty()
    }

    /// Resets the accumulator and the freshness flag.
    pub(crate) fn clear_grad(&mut self) {
        self.grad = 0.0;
        self.grad_touched = false;
    }
}

impl Drop for ValueData {
    // Unlinks operand chains iteratively so that dropping a very deep graph
    // does not recurse once per node.
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.operands);
        while let Some(Value { data }) = pending.pop() {
            if let Ok(lock) = Arc::try_unwrap(data) {
                if let Ok(mut inner) = lock.into_inner() {
                    pending.append(&mut inner.operands);
                }
            }
        }
    }
}
