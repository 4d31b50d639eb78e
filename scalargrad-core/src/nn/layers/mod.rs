pub mod layer;
pub mod mlp;
pub mod neuron;

pub use layer::Layer;
pub use mlp::Mlp;
pub use neuron::Neuron;

use crate::error::ScalarGradError;

/// Rejects an input vector whose width differs from what the module expects.
pub(crate) fn check_arity(expected: usize, actual: usize, operation: &str) -> Result<(), ScalarGradError> {
    if expected != actual {
        return Err(ScalarGradError::ArityMismatch {
            expected,
            actual,
            operation: operation.to_string(),
        });
    }
    Ok(())
}
