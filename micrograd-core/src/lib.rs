//! # micrograd-core
//!
//! A scalar-valued, reverse-mode automatic differentiation engine.
//!
//! Client code builds a directed acyclic graph of arithmetic operations over
//! [`Value`] nodes, then calls [`Value::backward`] once on the node it wants to
//! differentiate. Afterwards every reachable node holds the partial derivative of
//! that node with respect to itself.
//!
//! ```
//! use micrograd_core::{constant, MicrogradError};
//!
//! # fn main() -> Result<(), MicrogradError> {
//! let a = constant(4.0);
//! let b = constant(5.0);
//! let result = (&a * &b + &a) * &b;
//! assert_eq!(result.data(), 120.0);
//!
//! result.backward()?;
//! assert_eq!(a.grad(), 30.0); // (b + 1) * b
//! assert_eq!(b.grad(), 44.0); // 2ab + a
//!
//! // Gradients accumulate: reset before differentiating again.
//! result.zero_grad();
//! # Ok(())
//! # }
//! ```

pub mod autograd;
pub mod creation;
pub mod error;
pub mod ops;
pub mod utils;
pub mod value;
pub mod value_data;

pub use autograd::{zero_grad_all, BackwardOp, NodeId, Operation};
pub use creation::{constant, randn, uniform};
pub use error::MicrogradError;
pub use ops::activation::{relu_op, tanh_op};
pub use ops::arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
pub use value::Value;
