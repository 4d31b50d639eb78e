use crate::value::Value;
use std::fmt;

/// Non-linearity applied to a neuron's affine sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    #[default]
    Tanh,
    Softplus,
    /// No activation: the affine sum is the output (regression heads).
    Identity,
}

impl Activation {
    /// Applies the activation through the graph builder.
    ///
    /// `Identity` returns the same node rather than building a new one.
    pub fn apply(self, pre_activation: &Value) -> Value {
        match self {
            Activation::Tanh => pre_activation.tanh(),
            Activation::Softplus => pre_activation.softplus(),
            Activation::Identity => pre_activation.clone(),
        }
    }
}

impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Activation::Tanh => "tanh",
            Activation::Softplus => "softplus",
            Activation::Identity => "identity",
        };
        f.write_str(name)
    }
}
