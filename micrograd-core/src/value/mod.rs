// src/value/mod.rs

use crate::autograd::backward_op::Operation;
use crate::autograd::graph::{topological_sort, NodeId};
use crate::value_data::ValueData;
use std::sync::{Arc, RwLock};

mod autograd_methods;
mod debug;
mod traits;

/// A scalar node in the computation graph.
///
/// `Value` uses `Arc<RwLock<ValueData>>` internally to allow for:
/// 1.  **Shared Ownership:** a node can be the operand of any number of parents, and
///     cloning a `Value` only clones the handle. A node lives as long as some handle
///     or some parent refers to it.
/// 2.  **Interior Mutability:** the gradient accumulator inside `ValueData` is written
///     by the backward pass through shared handles.
///
/// The data, the operation and the operands of a node never change after construction.
pub struct Value {
    pub(crate) data: Arc<RwLock<ValueData>>,
}

impl Value {
    /// Creates a new leaf holding `data`, with zero gradient.
    pub fn new(data: f64) -> Self {
        Value {
            data: Arc::new(RwLock::new(ValueData::new(data))),
        }
    }

    /// Creates a derived node. Only operators call this.
    pub(crate) fn from_op(data: f64, op: Operation, operands: Vec<Value>) -> Self {
        Value {
            data: Arc::new(RwLock::new(ValueData::from_op(data, op, operands))),
        }
    }

    /// Returns the scalar held by this node.
    pub fn data(&self) -> f64 {
        self.read_data().data
    }

    /// Alias of [`Value::data`].
    pub fn value(&self) -> f64 {
        self.data()
    }

    /// Returns the operation that produced this node.
    pub fn operation(&self) -> Operation {
        self.read_data().op
    }

    /// Returns handles to the operands, in the order they were supplied.
    pub fn operands(&self) -> Vec<Value> {
        self.read_data().operands.clone()
    }

    pub fn is_leaf(&self) -> bool {
        self.read_data().is_leaf()
    }

    /// Returns the identity of the underlying node.
    pub fn node_id(&self) -> NodeId {
        Arc::as_ptr(&self.data)
    }

    /// Checks whether two handles refer to the same node.
    pub fn ptr_eq(&self, other: &Value) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }

    /// Returns every node reachable from this one, operands before the nodes
    /// that consume them, `self` last.
    pub fn topological_order(&self) -> Vec<Value> {
        topological_sort(self)
    }

    /// Acquires a read lock on the node's data.
    ///
    /// Panics if the RwLock is poisoned.
    pub fn read_data(&self) -> std::sync::RwLockReadGuard<'_, ValueData> {
        self.data.read().expect("RwLock poisoned")
    }

    /// Acquires a write lock on the node's data.
    ///
    /// Panics if the RwLock is poisoned.
    pub(crate) fn write_data(&self) -> std::sync::RwLockWriteGuard<'_, ValueData> {
        self.data.write().expect("RwLock poisoned")
    }
}
