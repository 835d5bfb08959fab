// micrograd-core/src/ops/arithmetic/neg.rs

use crate::creation::constant;
use crate::ops::arithmetic::mul_op;
use crate::value::Value;

/// Computes `-a` as `a * (-1)`.
///
/// No dedicated tag: the result is a `Multiply` node with a fresh constant leaf
/// as its second operand.
pub fn neg_op(a: &Value) -> Value {
    mul_op(a, &constant(-1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::autograd::backward_op::Operation;
    use crate::error::MicrogradError;

    #[test]
    fn test_neg_forward() {
        let a = constant(2.5);
        let n = neg_op(&a);
        assert_eq!(n.data(), -2.5);
        assert_eq!(n.operation(), Operation::Multiply);
        assert!(n.operands()[0].ptr_eq(&a));
    }

    #[test]
    fn test_neg_backward() -> Result<(), MicrogradError> {
        let a = constant(2.5);
        neg_op(&a).backward()?;
        assert_eq!(a.grad(), -1.0);
        Ok(())
    }
}
