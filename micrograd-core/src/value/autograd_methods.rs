use crate::autograd::backward_op::BackwardOp;
use crate::autograd::graph::topological_sort;
use crate::error::MicrogradError;
use crate::value::Value;
use log::{debug, trace, warn};

impl Value {
    /// Returns the gradient accumulated on this node.
    ///
    /// Zero until a backward pass reaches the node.
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    /// Adds `grad_to_add` into this node's gradient and marks it as touched.
    pub(crate) fn acc_grad(&self, grad_to_add: f64) -> Result<(), MicrogradError> {
        let mut guard = self.data.write().map_err(|_| {
            MicrogradError::BackwardError("Failed to acquire write lock during gradient accumulation".to_string())
        })?;
        guard.grad += grad_to_add;
        guard.grad_touched = true;
        Ok(())
    }

    /// Performs the backward pass starting from this node.
    ///
    /// Equivalent to `backward_with_grad(1.0)`: afterwards every node reachable from
    /// `self` holds d(self)/d(node) in its gradient.
    ///
    /// # Errors
    /// See [`Value::backward_with_grad`].
    pub fn backward(&self) -> Result<(), MicrogradError> {
        self.backward_with_grad(1.0)
    }

    /// Performs the backward pass starting from this node, seeding it with `gradient`.
    ///
    /// 1. Builds the topological order of the reachable graph.
    /// 2. Writes `gradient` into this node.
    /// 3. Walks the order in reverse and lets each derived node add its contribution
    ///    into its operands. Contributions from every consumer of a node are summed.
    ///
    /// The pass never resets gradients. It refuses to start if any reachable node
    /// still carries gradient from an earlier pass; call [`Value::zero_grad`] first.
    ///
    /// # Errors
    /// * `MicrogradError::StaleGradient` if a reachable node was not reset since a
    ///   previous backward pass. No gradient is modified in that case.
    /// * `MicrogradError::DomainError` if a local slope is undefined (a `pow` node
    ///   with zero base and an exponent in (0, 1)). Nodes processed before the failing
    ///   one keep their final gradients; nodes after it are incomplete.
    /// * `MicrogradError::BackwardError` if a lock is poisoned.
    pub fn backward_with_grad(&self, gradient: f64) -> Result<(), MicrogradError> {
        let sorted_nodes = topological_sort(self);
        debug!(
            "backward: {} reachable node(s), seed gradient {}",
            sorted_nodes.len(),
            gradient
        );

        for node in &sorted_nodes {
            let guard = node.read_data();
            if guard.grad_touched {
                warn!(
                    "backward: node (data={}, grad={}) was not reset since a previous pass",
                    guard.data, guard.grad
                );
                return Err(MicrogradError::StaleGradient {
                    value: guard.data,
                    grad: guard.grad,
                });
            }
        }

        {
            let mut guard = self.write_data();
            guard.grad = gradient;
            guard.grad_touched = true;
        }

        // Reverse topological order: every node's gradient is final before it propagates.
        for node in sorted_nodes.iter().rev() {
            let (op, output, grad_output, operands) = {
                let guard = node.data.read().map_err(|_| {
                    MicrogradError::BackwardError(
                        "Failed to acquire read lock during backward traversal".to_string(),
                    )
                })?;
                if guard.is_leaf() {
                    continue;
                }
                (guard.op, guard.data, guard.grad, guard.operands.clone())
            };

            let inputs: Vec<f64> = operands.iter().map(Value::data).collect();
            let input_grads = op.backward(grad_output, output, &inputs).map_err(|e| {
                warn!("backward: {} node failed: {}", op.name(), e);
                e
            })?;

            debug_assert_eq!(input_grads.len(), operands.len());

            for (operand, grad_to_add) in operands.iter().zip(input_grads) {
                trace!(
                    "backward: {} -> {:?} += {}",
                    op.name(),
                    operand.node_id(),
                    grad_to_add
                );
                operand.acc_grad(grad_to_add)?;
            }
        }

        debug!("backward: done");
        Ok(())
    }

    /// Resets the gradient of every node reachable from this one to zero.
    ///
    /// Must be called between independent backward passes over overlapping graphs.
    pub fn zero_grad(&self) {
        let nodes = topological_sort(self);
        debug!("zero_grad: clearing {} node(s)", nodes.len());
        for node in &nodes {
            node.write_data().clear_grad();
        }
    }
}

#[cfg(test)]
#[path = "autograd_methods_test.rs"]
mod tests;
