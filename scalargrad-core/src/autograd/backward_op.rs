// Defines the closed set of operations and their local derivative rules.

use crate::error::ScalarGradError;
use std::fmt;

/// Tag naming the operation that produced a node.
///
/// Each variant fixes its operand count and its local derivative rule. No
/// per-node closure is stored: the rule is looked up from the tag, and the
/// operand values it needs are read through the node's parent handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Op {
    /// User-created constant or parameter. No parents, nothing to propagate.
    Leaf,
    Add,
    /// `parents[0] - parents[1]`.
    Sub,
    Mul,
    /// `parents[0] ^ parents[1]`. The exponent is treated as a constant and
    /// never receives a gradient.
    Pow,
    Tanh,
    Softplus,
}

impl Op {
    /// Number of parents a node with this tag must have.
    pub fn arity(self) -> usize {
        match self {
            Op::Leaf => 0,
            Op::Tanh | Op::Softplus => 1,
            Op::Add | Op::Sub | Op::Mul | Op::Pow => 2,
        }
    }

    /// Short symbol, as used in graph labels.
    pub fn symbol(self) -> &'static str {
        match self {
            Op::Leaf => "",
            Op::Add => "+",
            Op::Sub => "-",
            Op::Mul => "*",
            Op::Pow => "**",
            Op::Tanh => "tanh",
            Op::Softplus => "softplus",
        }
    }

    /// Computes the contribution of this operation to each parent's gradient.
    ///
    /// Mathematically, for `out = f(in_0, ..., in_n)` this returns
    /// `grad_output * d out / d in_i` for every input `i`.
    ///
    /// # Arguments
    /// * `grad_output`: the complete gradient of the node being processed.
    /// * `inputs`: the current values of the node's parents, in operand order.
    ///
    /// # Returns
    /// One entry per parent, in the same order as `inputs`. `None` means no
    /// gradient flows to that parent (the exponent of `Pow`).
    ///
    /// # Errors
    /// `Internal` if `inputs` does not match the tag's arity; this can only
    /// happen if a node was wired by hand, bypassing the graph builder.
    pub fn backward(self, grad_output: f64, inputs: &[f64]) -> Result<Vec<Option<f64>>, ScalarGradError> {
        if inputs.len() != self.arity() {
            return Err(ScalarGradError::Internal(format!(
                "{:?} node has {} parent(s), expected {}",
                self,
                inputs.len(),
                self.arity()
            )));
        }

        let contributions = match self {
            Op::Leaf => Vec::new(),
            Op::Add => vec![Some(grad_output), Some(grad_output)],
            Op::Sub => vec![Some(grad_output), Some(-grad_output)],
            Op::Mul => vec![Some(grad_output * inputs[1]), Some(grad_output * inputs[0])],
            Op::Pow => {
                let (base, exponent) = (inputs[0], inputs[1]);
                // d/da a^0 is 0 everywhere, including a = 0 where 0 * 0^-1 would be NaN.
                let local = if exponent == 0.0 {
                    0.0
                } else {
                    exponent * base.powf(exponent - 1.0)
                };
                vec![Some(grad_output * local), None]
            }
            Op::Tanh => {
                let t = inputs[0].tanh();
                vec![Some(grad_output * (1.0 - t * t))]
            }
            Op::Softplus => vec![Some(grad_output * sigmoid(inputs[0]))],
        };
        Ok(contributions)
    }
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Leaf => write!(f, "leaf"),
            other => write!(f, "{}", other.symbol()),
        }
    }
}

/// Logistic function, the derivative of softplus.
pub(crate) fn sigmoid(x: f64) -> f64 {
    1.0 / (1.0 + (-x).exp())
}

#[cfg(test)]
#[path = "backward_op_test.rs"]
mod tests;
