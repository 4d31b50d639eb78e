use crate::error::ScalarGradError;
use crate::nn::layers::check_arity;
use crate::ops::{add_op, mul_op, sub_op};
use crate::value::Value;

/// How per-element squared errors are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Mean,
    Sum,
}

/// Squared-error loss, built entirely from graph builder calls so that its
/// gradient flows back into whatever produced the predictions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MSELoss {
    reduction: Reduction,
}

impl MSELoss {
    pub fn new(reduction: Reduction) -> Self {
        MSELoss { reduction }
    }

    pub fn reduction(&self) -> Reduction {
        self.reduction
    }

    /// Builds `sum_i (p_i - t_i)^2`, scaled by `1/n` for `Reduction::Mean`.
    ///
    /// Each squared term is `d * d` on the same difference node, so the
    /// difference receives both halves of its gradient.
    ///
    /// # Errors
    /// `ArityMismatch` if the slices differ in length or are empty.
    pub fn calculate(&self, predictions: &[Value], targets: &[Value]) -> Result<Value, ScalarGradError> {
        check_arity(predictions.len(), targets.len(), "mse loss")?;
        if predictions.is_empty() {
            return Err(ScalarGradError::ArityMismatch {
                expected: 1,
                actual: 0,
                operation: "mse loss".to_string(),
            });
        }

        let mut squared = predictions.iter().zip(targets).map(|(p, t)| {
            let diff = sub_op(p, t);
            mul_op(&diff, &diff)
        });
        // Non-empty, checked above.
        let first = squared.next().ok_or_else(|| {
            ScalarGradError::Internal("mse loss over no elements".to_string())
        })?;
        let total = squared.fold(first, |acc, term| add_op(&acc, &term));

        Ok(match self.reduction {
            Reduction::Sum => total,
            Reduction::Mean => {
                let normalizer = Value::constant(1.0 / predictions.len() as f64);
                mul_op(&total, &normalizer)
            }
        })
    }
}

/// Mean squared error. Shorthand for `MSELoss::new(Reduction::Mean).calculate(..)`.
pub fn mse_loss(predictions: &[Value], targets: &[Value]) -> Result<Value, ScalarGradError> {
    MSELoss::new(Reduction::Mean).calculate(predictions, targets)
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
