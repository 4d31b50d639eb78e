use crate::error::ScalarGradError;
use crate::nn::parameter::Parameter;
use crate::value::Value;

/// The base trait for all network modules (neurons, layers, perceptrons).
pub trait Module: std::fmt::Debug {
    /// Builds the module's output nodes on top of `inputs`.
    ///
    /// # Errors
    /// `ArityMismatch` if `inputs` does not have the module's input width.
    fn forward(&self, inputs: &[Value]) -> Result<Vec<Value>, ScalarGradError>;

    /// Returns all learnable parameters, including those of sub-modules, in a
    /// stable order.
    fn parameters(&self) -> Vec<&Parameter>;

    /// Returns all learnable parameters along with hierarchical names
    /// (e.g. "layers.0.neurons.1.w.0").
    fn named_parameters(&self) -> Vec<(String, &Parameter)>;

    /// Resets the gradient of every parameter to 0.
    fn zero_grad(&self) {
        for param in self.parameters() {
            param.zero_grad();
        }
    }

    fn num_parameters(&self) -> usize {
        self.parameters().len()
    }
}
