use super::*;
use crate::autograd::backward_op::Op;
use crate::autograd::grad_check::{check_grad, GradCheckError};
use crate::error::ScalarGradError;

#[test]
fn test_add_forward() {
    let a = Value::new(2.0);
    let b = Value::new(-5.5);
    let c = add_op(&a, &b);
    assert_eq!(c.value(), -3.5);
    assert_eq!(c.op(), Op::Add);
    assert_eq!(c.parents(), vec![a, b]);
}

#[test]
fn test_add_backward() -> Result<(), ScalarGradError> {
    let a = Value::new(2.0);
    let b = Value::new(-5.5);
    let c = add_op(&a, &b);
    c.backward()?;
    assert_eq!(a.grad(), 1.0);
    assert_eq!(b.grad(), 1.0);
    Ok(())
}

#[test]
fn test_add_same_operand_twice() -> Result<(), ScalarGradError> {
    let a = Value::new(7.0);
    let c = add_op(&a, &a);
    c.backward()?;
    assert_eq!(c.value(), 14.0);
    assert_eq!(a.grad(), 2.0);
    Ok(())
}

#[test]
fn test_add_grad_check() -> Result<(), GradCheckError> {
    let func = |inputs: &[Value]| Ok(add_op(&inputs[0], &inputs[1]));
    for (x, y) in [(0.3, -1.2), (-4.0, -8.5), (1e3, 2.0)] {
        check_grad(func, &[Value::new(x), Value::new(y)], 1e-6, 1e-6, 1e-5)?;
    }
    Ok(())
}
