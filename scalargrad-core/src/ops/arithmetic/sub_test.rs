use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckError};
use crate::error::ScalarGradError;

#[test]
fn test_sub_forward_is_ordered() {
    let a = Value::new(10.0);
    let b = Value::new(4.0);
    assert_eq!(sub_op(&a, &b).value(), 6.0);
    assert_eq!(sub_op(&b, &a).value(), -6.0);
    assert_eq!(sub_op(&a, &b).parents(), vec![a, b]);
}

#[test]
fn test_sub_backward_negates_subtrahend() -> Result<(), ScalarGradError> {
    let a = Value::new(10.0);
    let b = Value::new(4.0);
    let c = sub_op(&a, &b);
    c.backward()?;
    assert_eq!(a.grad(), 1.0);
    assert_eq!(b.grad(), -1.0);
    Ok(())
}

#[test]
fn test_sub_self_is_zero_with_zero_grad() -> Result<(), ScalarGradError> {
    let a = Value::new(3.25);
    let c = sub_op(&a, &a);
    c.backward()?;
    assert_eq!(c.value(), 0.0);
    assert_eq!(a.grad(), 0.0);
    Ok(())
}

#[test]
fn test_sub_grad_check() -> Result<(), GradCheckError> {
    let func = |inputs: &[Value]| Ok(sub_op(&inputs[0], &inputs[1]));
    for (x, y) in [(0.3, -1.2), (-4.0, 8.5)] {
        check_grad(func, &[Value::new(x), Value::new(y)], 1e-6, 1e-6, 1e-5)?;
    }
    Ok(())
}
