use super::*;
use approx::assert_relative_eq;

#[test]
fn test_arity() {
    assert_eq!(Op::Leaf.arity(), 0);
    assert_eq!(Op::Tanh.arity(), 1);
    assert_eq!(Op::Softplus.arity(), 1);
    for op in [Op::Add, Op::Sub, Op::Mul, Op::Pow] {
        assert_eq!(op.arity(), 2, "{:?}", op);
    }
}

#[test]
fn test_rules() -> Result<(), ScalarGradError> {
    assert_eq!(Op::Add.backward(2.0, &[5.0, 7.0])?, vec![Some(2.0), Some(2.0)]);
    assert_eq!(Op::Sub.backward(2.0, &[5.0, 7.0])?, vec![Some(2.0), Some(-2.0)]);
    assert_eq!(Op::Mul.backward(2.0, &[5.0, 7.0])?, vec![Some(14.0), Some(10.0)]);
    assert!(Op::Leaf.backward(1.0, &[])?.is_empty());

    let pow = Op::Pow.backward(1.5, &[3.0, 2.0])?;
    assert_eq!(pow[1], None, "The exponent never receives a gradient");
    assert_relative_eq!(pow[0].unwrap_or(f64::NAN), 1.5 * 2.0 * 3.0, epsilon = 1e-12);

    let t = 0.5f64.tanh();
    let tanh = Op::Tanh.backward(1.0, &[0.5])?;
    assert_relative_eq!(tanh[0].unwrap_or(f64::NAN), 1.0 - t * t, epsilon = 1e-12);

    let softplus = Op::Softplus.backward(2.0, &[0.0])?;
    assert_relative_eq!(softplus[0].unwrap_or(f64::NAN), 1.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_pow_zero_exponent_has_zero_derivative_at_zero_base() -> Result<(), ScalarGradError> {
    let grads = Op::Pow.backward(1.0, &[0.0, 0.0])?;
    assert_eq!(grads[0], Some(0.0));
    Ok(())
}

#[test]
fn test_wrong_input_count_is_internal_error() {
    match Op::Mul.backward(1.0, &[1.0]) {
        Err(ScalarGradError::Internal(_)) => {}
        other => panic!("Expected Internal error, got {:?}", other),
    }
}

#[test]
fn test_display() {
    assert_eq!(Op::Leaf.to_string(), "leaf");
    assert_eq!(Op::Pow.to_string(), "**");
    assert_eq!(Op::Softplus.to_string(), "softplus");
}

#[test]
fn test_sigmoid_saturation() {
    assert_relative_eq!(sigmoid(0.0), 0.5, epsilon = 1e-15);
    assert_eq!(sigmoid(-1000.0), 0.0);
    assert_eq!(sigmoid(1000.0), 1.0);
}
