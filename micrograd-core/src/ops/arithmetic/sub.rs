// micrograd-core/src/ops/arithmetic/sub.rs

use crate::ops::arithmetic::{add_op, neg_op};
use crate::value::Value;

/// Computes `a - b` as `a + (-b)`.
pub fn sub_op(a: &Value, b: &Value) -> Value {
    add_op(a, &neg_op(b))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::creation::constant;
    use crate::error::MicrogradError;

    #[test]
    fn test_sub_forward_and_backward() -> Result<(), MicrogradError> {
        let a = constant(2.0);
        let b = constant(3.0);
        let d = sub_op(&a, &b);
        assert_eq!(d.data(), -1.0);

        d.backward()?;
        assert_eq!(a.grad(), 1.0);
        assert_eq!(b.grad(), -1.0);
        Ok(())
    }

    #[test]
    fn test_sub_self_is_zero_with_zero_grad() -> Result<(), MicrogradError> {
        let a = constant(4.0);
        let d = sub_op(&a, &a);
        assert_eq!(d.data(), 0.0);
        d.backward()?;
        assert_eq!(a.grad(), 0.0);
        Ok(())
    }
}
