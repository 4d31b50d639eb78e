use crate::error::ScalarGradError;
use crate::nn::config::MlpConfig;
use crate::nn::init::ParamInit;
use crate::nn::layers::check_arity;
use crate::nn::layers::layer::Layer;
use crate::nn::module::Module;
use crate::nn::parameter::Parameter;
use crate::value::Value;

/// Layers chained output-to-input.
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Builds the network described by `config`, drawing every parameter
    /// from `init` (layer by layer, neuron by neuron, weights then bias).
    pub fn new(config: &MlpConfig, init: &mut dyn ParamInit) -> Result<Self, ScalarGradError> {
        config.validate()?;
        let mut layers = Vec::with_capacity(config.layer_sizes.len());
        let mut n_inputs = config.n_inputs;
        for (idx, &n_outputs) in config.layer_sizes.iter().enumerate() {
            layers.push(Layer::new(
                n_inputs,
                n_outputs,
                config.activation_for_layer(idx),
                init,
            )?);
            n_inputs = n_outputs;
        }
        log::debug!(
            "Mlp::new: {} input(s), layers {:?}, {} parameter(s)",
            config.n_inputs,
            config.layer_sizes,
            layers.iter().map(|l| l.num_parameters()).sum::<usize>()
        );
        Ok(Mlp { layers })
    }

    /// Assembles a network from prebuilt layers; adjacent widths must match.
    pub fn from_layers(layers: Vec<Layer>) -> Result<Self, ScalarGradError> {
        if layers.is_empty() {
            return Err(ScalarGradError::InvalidConfig(
                "an MLP needs at least one layer".to_string(),
            ));
        }
        for pair in layers.windows(2) {
            check_arity(pair[0].n_outputs(), pair[1].n_inputs(), "mlp assembly")?;
        }
        Ok(Mlp { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }

    pub fn n_inputs(&self) -> usize {
        self.layers.first().map_or(0, |l| l.n_inputs())
    }

    pub fn n_outputs(&self) -> usize {
        self.layers.last().map_or(0, |l| l.n_outputs())
    }
}

impl Module for Mlp {
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError> {
        check_arity(self.n_inputs(), inputs.len(), "mlp forward")?;
        let mut activations = inputs.to_vec();
        for layer in &self.layers {
            activations = layer.forward(&activations)?;
        }
        Ok(activations)
    }

    fn parameters(&self) -> Vec<&Parameter> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, &Parameter)> {
        let mut named = Vec::new();
        for (i, layer) in self.layers.iter().enumerate() {
            for (name, param) in layer.named_parameters() {
                named.push((format!("layers.{}.{}", i, name), param));
            }
        }
        named
    }
}

#[cfg(test)]
#[path = "mlp_test.rs"]
mod tests;
