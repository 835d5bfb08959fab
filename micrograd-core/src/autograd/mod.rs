//! # Autograd
//!
//! The reverse-mode machinery: the per-operation local gradient rules
//! ([`backward_op`]), node identity and topological ordering ([`graph`]), and a
//! finite-difference checker for validating gradients ([`grad_check`]).
//!
//! The backward driver itself is [`Value::backward`](crate::value::Value::backward).

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::{BackwardOp, Operation};
pub use graph::{topological_sort, NodeId};

use crate::value::Value;
use log::debug;

/// Resets the gradient of every node reachable from any of `values`.
///
/// Meant for a client-held registry of parameters (e.g. all weights of a network)
/// between training iterations. Nodes shared by several graphs are reset once.
pub fn zero_grad_all(values: &[Value]) {
    let nodes = graph::topological_sort_many(values);
    debug!("zero_grad_all: clearing {} node(s) from {} root(s)", nodes.len(), values.len());
    for node in &nodes {
        node.write_data().clear_grad();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creation::constant;
    use crate::error::MicrogradError;
    use crate::ops::arithmetic::{add_op, mul_op};

    #[test]
    fn test_zero_grad_all_over_parameters() -> Result<(), MicrogradError> {
        let w1 = constant(0.5);
        let w2 = constant(-0.25);
        let params = vec![w1.clone(), w2.clone()];

        for _ in 0..3 {
            // Fresh loss graph each iteration over the same parameters
            let loss = add_op(&mul_op(&w1, &constant(2.0)), &mul_op(&w2, &w2));
            loss.backward()?;
            assert_eq!(w1.grad(), 2.0);
            assert_eq!(w2.grad(), -0.5);
            zero_grad_all(&params);
            assert_eq!(w1.grad(), 0.0);
            assert_eq!(w2.grad(), 0.0);
        }
        Ok(())
    }
}
