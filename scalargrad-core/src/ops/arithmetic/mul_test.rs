use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckError};
use crate::error::ScalarGradError;

#[test]
fn test_mul_forward() {
    let a = Value::new(-1.5);
    let b = Value::new(4.0);
    assert_eq!(mul_op(&a, &b).value(), -6.0);
}

#[test]
fn test_mul_backward_swaps_operands() -> Result<(), ScalarGradError> {
    let a = Value::new(-1.5);
    let b = Value::new(4.0);
    let c = mul_op(&a, &b);
    c.backward()?;
    assert_eq!(a.grad(), 4.0);
    assert_eq!(b.grad(), -1.5);
    Ok(())
}

#[test]
fn test_square_accumulates_both_paths() -> Result<(), ScalarGradError> {
    let a = Value::new(3.0);
    let c = mul_op(&a, &a);
    c.backward()?;
    assert_eq!(c.value(), 9.0);
    assert_eq!(a.grad(), 6.0, "c = a*a must give 2a, not a");
    Ok(())
}

#[test]
fn test_mul_grad_check() -> Result<(), GradCheckError> {
    let func = |inputs: &[Value]| Ok(mul_op(&inputs[0], &inputs[1]));
    for (x, y) in [(0.3, -1.2), (-4.0, -8.5), (0.0, 3.0)] {
        check_grad(func, &[Value::new(x), Value::new(y)], 1e-6, 1e-6, 1e-5)?;
    }
    Ok(())
}
