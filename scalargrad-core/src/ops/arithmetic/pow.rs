// src/ops/arithmetic/pow.rs

use crate::autograd::backward_op::Op;
use crate::error::ScalarGradError;
use crate::ops::new_node;
use crate::value::Value;

/// Builds `base ^ exponent`.
///
/// The exponent is a node so that it shows up in the graph, but it is
/// treated as a constant: the backward pass sends
/// `grad * exponent * base^(exponent - 1)` to `base` and nothing to `exponent`.
///
/// # Errors
/// `NumericDomain` when the power or its derivative is undefined for the operands:
/// * `base` or `exponent` is NaN or infinite;
/// * `base` is negative and `exponent` is not an integer;
/// * `base` is zero and `exponent` is negative;
/// * `base` is zero and `exponent` lies strictly between 0 and 1, where the
///   power is defined but its derivative is infinite.
///
/// Overflow of a well-defined power (e.g. `10^400`) is not rejected and
/// yields `inf`, like every other operation.
///
/// The checks apply to the operand values at construction. The derivative is
/// evaluated from the base's value at backward time, so a base reassigned
/// with [`Value::set_value`] after this call is not re-checked: rebuild the
/// graph after updating leaves, as for any other operation.
pub fn pow_op(base: &Value, exponent: &Value) -> Result<Value, ScalarGradError> {
    let (b, e) = (base.value(), exponent.value());
    check_pow_domain(b, e)?;
    Ok(new_node(b.powf(e), Op::Pow, vec![base.clone(), exponent.clone()]))
}

fn check_pow_domain(base: f64, exponent: f64) -> Result<(), ScalarGradError> {
    let reason = if !base.is_finite() {
        Some(format!("base {} is not finite", base))
    } else if !exponent.is_finite() {
        Some(format!("exponent {} is not finite", exponent))
    } else if base < 0.0 && exponent.fract() != 0.0 {
        Some(format!(
            "negative base {} with non-integer exponent {}",
            base, exponent
        ))
    } else if base == 0.0 && exponent < 0.0 {
        Some(format!("zero base with negative exponent {}", exponent))
    } else if base == 0.0 && exponent > 0.0 && exponent < 1.0 {
        Some(format!(
            "zero base with exponent {} in (0, 1) has an infinite derivative",
            exponent
        ))
    } else {
        None
    };

    match reason {
        Some(reason) => Err(ScalarGradError::NumericDomain {
            operation: "pow".to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

// --- Value methods ---

impl Value {
    /// Raises this node to the power of `exponent`. See [`pow_op`].
    pub fn pow(&self, exponent: &Value) -> Result<Value, ScalarGradError> {
        pow_op(self, exponent)
    }

    /// Raises this node to a constant power, wrapping `exponent` in a fresh leaf.
    pub fn powf(&self, exponent: f64) -> Result<Value, ScalarGradError> {
        pow_op(self, &Value::constant(exponent))
    }
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
