// src/value/traits.rs

use crate::creation::constant;
use crate::ops::arithmetic::{add_op, mul_op, neg_op, sub_op};
use crate::value::Value;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

// --- Trait Implementations ---

impl Clone for Value {
    /// Clones the handle. The clone refers to the same node, so gradients written
    /// through one handle are visible through the other.
    fn clone(&self) -> Self {
        Value {
            data: Arc::clone(&self.data),
        }
    }
}

/// Equality is node identity: two distinct nodes holding the same number are not equal.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.node_id().hash(state);
    }
}

impl From<f64> for Value {
    fn from(data: f64) -> Self {
        constant(data)
    }
}

// --- Operator overloads ---
// Each binary operator gets the four owned/borrowed combinations plus `f64` on
// either side. A scalar operand becomes a fresh constant leaf.

macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl std::ops::$trait<&Value> for &Value {
            type Output = Value;

            fn $method(self, rhs: &Value) -> Value {
                $op_fn(self, rhs)
            }
        }

        impl std::ops::$trait<Value> for &Value {
            type Output = Value;

            fn $method(self, rhs: Value) -> Value {
                $op_fn(self, &rhs)
            }
        }

        impl std::ops::$trait<&Value> for Value {
            type Output = Value;

            fn $method(self, rhs: &Value) -> Value {
                $op_fn(&self, rhs)
            }
        }

        impl std::ops::$trait<Value> for Value {
            type Output = Value;

            fn $method(self, rhs: Value) -> Value {
                $op_fn(&self, &rhs)
            }
        }

        impl std::ops::$trait<f64> for &Value {
            type Output = Value;

            fn $method(self, rhs: f64) -> Value {
                $op_fn(self, &constant(rhs))
            }
        }

        impl std::ops::$trait<f64> for Value {
            type Output = Value;

            fn $method(self, rhs: f64) -> Value {
                $op_fn(&self, &constant(rhs))
            }
        }

        impl std::ops::$trait<&Value> for f64 {
            type Output = Value;

            fn $method(self, rhs: &Value) -> Value {
                $op_fn(&constant(self), rhs)
            }
        }

        impl std::ops::$trait<Value> for f64 {
            type Output = Value;

            fn $method(self, rhs: Value) -> Value {
                $op_fn(&constant(self), &rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add_op);
impl_binary_op!(Mul, mul, mul_op);
impl_binary_op!(Sub, sub, sub_op);

impl std::ops::Neg for &Value {
    type Output = Value;

    fn neg(self) -> Value {
        neg_op(self)
    }
}

impl std::ops::Neg for Value {
    type Output = Value;

    fn neg(self) -> Value {
        neg_op(&self)
    }
}
