//! # Activation Functions
//!
//! Non-linear scalar functions used by neurons built on top of the engine.
//!
//! ## Currently Implemented:
//! - [`tanh`](tanh/fn.tanh_op.html): hyperbolic tangent.
//! - [`ReLU`](relu/fn.relu_op.html): Rectified Linear Unit.

pub mod relu;
pub mod tanh;

pub use relu::relu_op;
pub use tanh::tanh_op;
