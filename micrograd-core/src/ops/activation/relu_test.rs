// micrograd-core/src/ops/activation/relu_test.rs

use super::*;
use crate::creation::constant;
use crate::error::MicrogradError;
use crate::ops::arithmetic::{add_op, mul_op};

#[test]
fn test_relu_forward() {
    let inputs = [-2.0, -1.0, 0.0, 1.0, 2.0];
    let expected = [0.0, 0.0, 0.0, 1.0, 2.0];
    for (x, e) in inputs.iter().zip(expected.iter()) {
        let r = relu_op(&constant(*x));
        assert_eq!(r.data(), *e);
        assert_eq!(r.operation(), Operation::Relu);
    }
}

#[test]
fn test_relu_backward_negative_and_positive() -> Result<(), MicrogradError> {
    let a = constant(-1.0);
    let r = a.relu();
    assert_eq!(r.data(), 0.0);
    r.backward()?;
    assert_eq!(a.grad(), 0.0);

    let b = constant(1.0);
    let r2 = b.relu();
    assert_eq!(r2.data(), 1.0);
    r2.backward()?;
    assert_eq!(b.grad(), 1.0);
    Ok(())
}

#[test]
fn test_relu_backward_chain() -> Result<(), MicrogradError> {
    // relu(x * 2): slope 2 where x > 0, 0 elsewhere
    for (x, expected) in [(-1.0, 0.0), (1.0, 2.0), (2.0, 2.0)] {
        let leaf = constant(x);
        let out = relu_op(&mul_op(&leaf, &constant(2.0)));
        out.backward()?;
        assert_eq!(leaf.grad(), expected);
    }
    Ok(())
}

#[test]
fn test_relu_backward_rule_at_zero() {
    assert_eq!(relu_backward(5.0, 0.0), 0.0);
    assert_eq!(relu_backward(5.0, 1e-12), 5.0);
}

#[test]
fn test_relu_propagates_nan() -> Result<(), MicrogradError> {
    let pos = constant(f64::INFINITY);
    let neg = constant(f64::NEG_INFINITY);
    let undefined = add_op(&pos, &neg);
    let r = relu_op(&undefined);
    assert!(r.data().is_nan());

    r.backward()?;
    assert!(undefined.grad().is_nan());
    assert!(relu_backward(1.0, f64::NAN).is_nan());
    assert_eq!(relu_op(&pos).data(), f64::INFINITY);
    assert_eq!(relu_op(&neg).data(), 0.0);
    Ok(())
}
