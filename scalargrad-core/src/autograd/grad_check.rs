use crate::error::ScalarGradError;
use crate::value::Value;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(ScalarGradError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(ScalarGradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: Loss+: {loss_plus:?}, Loss-: {loss_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        loss_plus: f64,
        loss_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Gradient check input must be a leaf node. Input index: {input_index}")]
    InputNotLeaf { input_index: usize },
    #[error("Node error during gradient check: {0}")]
    ValueError(ScalarGradError),
}

impl From<ScalarGradError> for GradCheckError {
    fn from(err: ScalarGradError) -> Self {
        GradCheckError::ValueError(err)
    }
}

/// Checks analytical gradients against numerical gradients using central
/// finite differences.
///
/// `func` must rebuild its graph from `inputs` on every call: each input is
/// perturbed in place (`x ± epsilon`) and the function re-evaluated. Inputs
/// are restored to their original values before returning, on success and
/// on error alike.
///
/// An analytical gradient `a` and numerical estimate `n` agree when
/// `|a - n| <= abs_tol` or their relative difference is `<= rel_tol`.
pub fn check_grad<F>(
    func: F,
    inputs: &[Value],
    epsilon: f64,
    abs_tol: f64,
    rel_tol: f64,
) -> Result<(), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, ScalarGradError>,
{
    // --- Initial Checks ---
    for (i, input) in inputs.iter().enumerate() {
        if !input.is_leaf() {
            return Err(GradCheckError::InputNotLeaf { input_index: i });
        }
    }

    // --- 1. Initial Forward and Backward Pass ---
    let output = func(inputs).map_err(GradCheckError::ForwardPassError)?;
    output.backward().map_err(GradCheckError::BackwardPassError)?;
    let analytical_grads: Vec<f64> = inputs.iter().map(|input| input.grad()).collect();

    // --- 2. Compare against central differences, one input at a time ---
    for (i, input) in inputs.iter().enumerate() {
        let analytical_grad = analytical_grads[i];
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let original = input.value();
        let losses = perturbed_losses(&func, inputs, input, original, epsilon);
        input.set_value(original)?;
        let (loss_plus, loss_minus) = losses?;

        let numerical_grad = (loss_plus - loss_minus) / (2.0 * epsilon);
        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                loss_plus,
                loss_minus,
            });
        }

        let agrees = approx::relative_eq!(
            analytical_grad,
            numerical_grad,
            epsilon = abs_tol,
            max_relative = rel_tol
        );
        log::debug!(
            "check_grad: input {} analytical {:e} numerical {:e} ({})",
            i,
            analytical_grad,
            numerical_grad,
            if agrees { "ok" } else { "MISMATCH" }
        );
        if !agrees {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference: (analytical_grad - numerical_grad).abs(),
            });
        }
    }

    Ok(())
}

/// Evaluates `func` at `original + epsilon` and `original - epsilon` for one input.
/// The caller restores the input afterwards.
fn perturbed_losses<F>(
    func: &F,
    inputs: &[Value],
    input: &Value,
    original: f64,
    epsilon: f64,
) -> Result<(f64, f64), GradCheckError>
where
    F: Fn(&[Value]) -> Result<Value, ScalarGradError>,
{
    input.set_value(original + epsilon)?;
    let loss_plus = func(inputs).map_err(GradCheckError::ForwardPassError)?.value();
    input.set_value(original - epsilon)?;
    let loss_minus = func(inputs).map_err(GradCheckError::ForwardPassError)?.value();
    Ok((loss_plus, loss_minus))
}

#[cfg(test)]
#[path = "grad_check_test.rs"]
mod tests;
