use crate::error::ScalarGradError;
use crate::nn::activation::Activation;
use crate::nn::init::ParamInit;
use crate::nn::layers::check_arity;
use crate::nn::layers::neuron::Neuron;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::value::Value;

/// Neurons sharing one input vector; one output node per neuron.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
    n_inputs: usize,
}

impl Layer {
    /// # Errors
    /// `InvalidConfig` if either width is 0, or whatever `init` reports.
    pub fn new(
        n_inputs: usize,
        n_outputs: usize,
        activation: Activation,
        init: &mut dyn ParamInit,
    ) -> Result<Self, ScalarGradError> {
        if n_outputs == 0 {
            return Err(ScalarGradError::InvalidConfig(
                "a layer needs at least one neuron".to_string(),
            ));
        }
        let neurons = (0..n_outputs)
            .map(|_| Neuron::new(n_inputs, activation, &mut *init))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Layer { neurons, n_inputs })
    }

    /// Assembles a layer from prebuilt neurons, which must agree on their input width.
    pub fn from_neurons(neurons: Vec<Neuron>) -> Result<Self, ScalarGradError> {
        let n_inputs = match neurons.first() {
            Some(n) => n.n_inputs(),
            None => {
                return Err(ScalarGradError::InvalidConfig(
                    "a layer needs at least one neuron".to_string(),
                ))
            }
        };
        for neuron in &neurons {
            check_arity(n_inputs, neuron.n_inputs(), "layer assembly")?;
        }
        Ok(Layer { neurons, n_inputs })
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn n_inputs(&self) -> usize {
        self.n_inputs
    }

    pub fn n_outputs(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        check_arity(self.n_inputs, inputs.len(), "layer forward")?;
        self.neurons.iter().map(|n| n.activate(inputs)).collect()
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        let mut named = Vec::new();
        for (i, neuron) in self.neurons.iter().enumerate() {
            for (name, param) in neuron.named_parameters() {
                named.push((format!("neurons.{}.{}", i, name), param));
            }
        }
        named
    }
}
