// src/nn/mod.rs
// Neurons, layers and the multi-layer perceptron, composed from graph builder calls.

pub mod activation;
pub mod config;
pub mod init;
pub mod layers;
pub mod losses;
pub mod module;
pub mod parameter;

// Re-export common items
pub use activation::Activation;
pub use config::{MlpConfig, MlpConfigBuilder};
pub use init::{ConstantInit, ParamInit, ScaledNormalInit, SequenceInit, UniformInit};
pub use layers::{Layer, Mlp, Neuron};
pub use losses::{mse_loss, MSELoss, Reduction};
pub use module::Module;
pub use parameter::Parameter;
