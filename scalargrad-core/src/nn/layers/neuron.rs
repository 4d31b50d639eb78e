use crate::error::ScalarGradError;
use crate::nn::activation::Activation;
use crate::nn::init::ParamInit;
use crate::nn::layers::check_arity;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::ops::{add_op, mul_op};
use crate::value::Value;

/// A single unit: `activation(w_0*x_0 + ... + w_{n-1}*x_{n-1} + b)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<Parameter>,
    bias: Parameter,
    activation: Activation,
}

impl Neuron {
    /// Creates a neuron with `n_inputs` weights, drawing the weights and then
    /// the bias from `init`.
    ///
    /// # Errors
    /// `InvalidConfig` if `n_inputs` is 0, or whatever `init` reports.
    pub fn new(
        n_inputs: usize,
        activation: Activation,
        init: &mut dyn ParamInit,
    ) -> Result<Self, ScalarGradError> {
        if n_inputs == 0 {
            return Err(ScalarGradError::InvalidConfig(
                "a neuron needs at least one input".to_string(),
            ));
        }
        let weights = (0..n_inputs)
            .map(|i| -> Result<Parameter, ScalarGradError> {
                let w = init.sample(n_inputs)?;
                Ok(Parameter::from_scalar(w, Some(format!("w.{}", i))))
            })
            .collect::<Result<Vec<_>, _>>()?;
        let bias = Parameter::from_scalar(init.sample(n_inputs)?, Some("b".to_string()));
        Ok(Neuron {
            weights,
            bias,
            activation,
        })
    }

    /// Creates a neuron with the given weights and bias.
    pub fn from_values(
        weights: &[f64],
        bias: f64,
        activation: Activation,
    ) -> Result<Self, ScalarGradError> {
        let mut init = crate::nn::init::SequenceInit::new(
            weights.iter().copied().chain(std::iter::once(bias)).collect(),
        );
        Self::new(weights.len(), activation, &mut init)
    }

    /// Builds this neuron's output node on top of `inputs`.
    ///
    /// # Errors
    /// `ArityMismatch` if `inputs.len()` differs from the number of weights.
    pub fn activate(&self, inputs: &[Value]) -> Result<Value, ScalarGradError> {
        check_arity(self.weights.len(), inputs.len(), "neuron forward")?;

        let mut terms = self.weights.iter().zip(inputs).map(|(w, x)| mul_op(w, x));
        let first = terms.next().ok_or_else(|| {
            ScalarGradError::Internal("neuron has no weights".to_string())
        })?;
        let weighted_sum = terms.fold(first, |acc, term| add_op(&acc, &term));
        let pre_activation = add_op(&weighted_sum, &self.bias);

        Ok(self.activation.apply(&pre_activation))
    }

    pub fn weights(&self) -> &[Parameter] {
        &self.weights
    }

    pub fn bias(&self) -> &Parameter {
        &self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    pub fn n_inputs(&self) -> usize {
        self.weights.len()
    }
}

impl Module for Neuron {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        Ok(vec![self.activate(inputs)?])
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.weights.iter().chain(std::iter::once(&self.bias)).collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        self.parameters()
            .into_iter()
            .map(|p| (p.name().unwrap_or("param").to_string(), p))
            .collect()
    }
}

#[cfg(test)]
#[path = "neuron_test.rs"]
mod tests;
