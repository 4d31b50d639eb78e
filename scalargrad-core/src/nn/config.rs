use crate::error::ScalarGradError;
use crate::nn::activation::Activation;

/// Shape and activations of a multi-layer perceptron.
///
/// `layer_sizes` lists the neuron count of every layer after the input,
/// the last entry being the output width.
#[derive(Debug, Clone, PartialEq)]
pub struct MlpConfig {
    pub n_inputs: usize,
    pub layer_sizes: Vec<usize>,
    pub hidden_activation: Activation,
    pub output_activation: Activation,
}

impl MlpConfig {
    pub fn builder() -> MlpConfigBuilder {
        MlpConfigBuilder::default()
    }

    /// Checks that the configuration describes a buildable network.
    ///
    /// # Errors
    /// `InvalidConfig` if there are no inputs, no layers, or an empty layer.
    pub fn validate(&self) -> Result<(), ScalarGradError> {
        if self.n_inputs == 0 {
            return Err(ScalarGradError::InvalidConfig(
                "an MLP needs at least one input".to_string(),
            ));
        }
        if self.layer_sizes.is_empty() {
            return Err(ScalarGradError::InvalidConfig(
                "an MLP needs at least one layer".to_string(),
            ));
        }
        if let Some(idx) = self.layer_sizes.iter().position(|&n| n == 0) {
            return Err(ScalarGradError::InvalidConfig(format!(
                "layer {} has no neurons",
                idx
            )));
        }
        Ok(())
    }

    pub fn n_outputs(&self) -> usize {
        self.layer_sizes.last().copied().unwrap_or(0)
    }

    /// Activation used by layer `idx`: the last layer gets `output_activation`.
    pub fn activation_for_layer(&self, idx: usize) -> Activation {
        if idx + 1 == self.layer_sizes.len() {
            self.output_activation
        } else {
            self.hidden_activation
        }
    }
}

/// Builder for [`MlpConfig`]. Defaults: tanh hidden layers, linear output.
#[derive(Debug, Clone)]
pub struct MlpConfigBuilder {
    n_inputs: usize,
    layer_sizes: Vec<usize>,
    hidden_activation: Activation,
    output_activation: Activation,
}

impl Default for MlpConfigBuilder {
    fn default() -> Self {
        MlpConfigBuilder {
            n_inputs: 0,
            layer_sizes: Vec::new(),
            hidden_activation: Activation::Tanh,
            output_activation: Activation::Identity,
        }
    }
}

impl MlpConfigBuilder {
    pub fn inputs(mut self, n_inputs: usize) -> Self {
        self.n_inputs = n_inputs;
        self
    }

    /// Appends a layer of `n_neurons`.
    pub fn layer(mut self, n_neurons: usize) -> Self {
        self.layer_sizes.push(n_neurons);
        self
    }

    /// Replaces all layer sizes at once.
    pub fn layers(mut self, sizes: &[usize]) -> Self {
        self.layer_sizes = sizes.to_vec();
        self
    }

    pub fn hidden_activation(mut self, activation: Activation) -> Self {
        self.hidden_activation = activation;
        self
    }

    pub fn output_activation(mut self, activation: Activation) -> Self {
        self.output_activation = activation;
        self
    }

    /// Validates and returns the configuration.
    pub fn build(self) -> Result<MlpConfig, ScalarGradError> {
        let config = MlpConfig {
            n_inputs: self.n_inputs,
            layer_sizes: self.layer_sizes,
            hidden_activation: self.hidden_activation,
            output_activation: self.output_activation,
        };
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
