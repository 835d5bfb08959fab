// src/value/debug.rs
use crate::value::Value;
use std::fmt;

// Manual implementation: operands are summarized, not printed recursively.
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data.read() {
            Ok(guard) => write!(
                f,
                "Value(data={:?}, grad={:?}, op={:?}, operands={}, grad_touched={})",
                guard.data,
                guard.grad,
                guard.op,
                guard.operands.len(),
                guard.grad_touched
            ),
            Err(_) => write!(f, "Value(Error: RwLock poisoned)"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.data.read() {
            Ok(guard) => write!(f, "Value(data={}, grad={}, op={})", guard.data, guard.grad, guard.op),
            Err(_) => write!(f, "Value(<poisoned>)"),
        }
    }
}
