use super::*;
use crate::nn::init::{ConstantInit, SequenceInit};
use crate::value::leaves;
use approx::assert_relative_eq;

#[test]
fn test_neuron_draws_weights_then_bias() -> Result<(), ScalarGradError> {
    let mut init = SequenceInit::new(vec![0.1, 0.2, 0.3, 0.9]);
    let neuron = Neuron::new(3, Activation::Tanh, &mut init)?;
    let weights: Vec<f64> = neuron.weights().iter().map(|w| w.value()).collect();
    assert_eq!(weights, vec![0.1, 0.2, 0.3]);
    assert_eq!(neuron.bias().value(), 0.9);
    assert_eq!(init.remaining(), 0);
    Ok(())
}

#[test]
fn test_neuron_tanh_forward_backward() -> Result<(), ScalarGradError> {
    let neuron = Neuron::from_values(&[0.5, -0.25], 0.1, Activation::Tanh)?;
    let inputs = leaves(&[1.0, 2.0]);
    let out = neuron.activate(&inputs)?;
    out.backward()?;

    let h = 0.1f64.tanh();
    let d = 1.0 - h * h;
    assert_relative_eq!(out.value(), h, epsilon = 1e-12);
    assert_relative_eq!(neuron.weights()[0].grad(), d * 1.0, epsilon = 1e-12);
    assert_relative_eq!(neuron.weights()[1].grad(), d * 2.0, epsilon = 1e-12);
    assert_relative_eq!(neuron.bias().grad(), d, epsilon = 1e-12);
    assert_relative_eq!(inputs[0].grad(), d * 0.5, epsilon = 1e-12);
    assert_relative_eq!(inputs[1].grad(), d * -0.25, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_neuron_identity_is_affine() -> Result<(), ScalarGradError> {
    let neuron = Neuron::from_values(&[2.0, -1.0, 0.5], 3.0, Activation::Identity)?;
    let out = neuron.activate(&leaves(&[1.0, 4.0, -2.0]))?;
    assert_eq!(out.value(), 2.0 - 4.0 - 1.0 + 3.0);
    Ok(())
}

#[test]
fn test_neuron_softplus() -> Result<(), ScalarGradError> {
    let neuron = Neuron::from_values(&[1.0], 0.0, Activation::Softplus)?;
    let x = leaves(&[0.0]);
    let out = neuron.activate(&x)?;
    out.backward()?;
    assert_relative_eq!(out.value(), std::f64::consts::LN_2, epsilon = 1e-15);
    assert_relative_eq!(neuron.weights()[0].grad(), 0.0, epsilon = 1e-15);
    assert_relative_eq!(neuron.bias().grad(), 0.5, epsilon = 1e-15);
    Ok(())
}

#[test]
fn test_neuron_input_arity_mismatch() -> Result<(), ScalarGradError> {
    let neuron = Neuron::new(3, Activation::Tanh, &mut ConstantInit(0.5))?;
    match neuron.activate(&leaves(&[1.0, 2.0])) {
        Err(ScalarGradError::ArityMismatch { expected, actual, .. }) => {
            assert_eq!(expected, 3);
            assert_eq!(actual, 2);
        }
        other => panic!("Expected ArityMismatch, got {:?}", other),
    }
    Ok(())
}

#[test]
fn test_neuron_needs_inputs() {
    let result = Neuron::new(0, Activation::Tanh, &mut ConstantInit(0.5));
    assert!(matches!(result, Err(ScalarGradError::InvalidConfig(_))));
}

#[test]
fn test_neuron_named_parameters() -> Result<(), ScalarGradError> {
    let neuron = Neuron::from_values(&[1.0, 2.0], 3.0, Activation::Tanh)?;
    let names: Vec<String> = neuron.named_parameters().into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["w.0", "w.1", "b"]);
    assert_eq!(neuron.num_parameters(), 3);
    Ok(())
}

#[test]
fn test_neuron_reused_across_two_inputs_accumulates() -> Result<(), ScalarGradError> {
    // The same weights feed two separate forward graphs joined into one loss.
    let neuron = Neuron::from_values(&[0.7], 0.0, Activation::Identity)?;
    let a = neuron.activate(&leaves(&[2.0]))?;
    let b = neuron.activate(&leaves(&[-5.0]))?;
    let loss = &a + &b;
    loss.backward()?;
    assert_relative_eq!(neuron.weights()[0].grad(), 2.0 - 5.0, epsilon = 1e-12);
    assert_relative_eq!(neuron.bias().grad(), 2.0, epsilon = 1e-12);
    Ok(())
}
