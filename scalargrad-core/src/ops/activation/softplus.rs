use crate::autograd::backward_op::Op;
use crate::ops::new_node;
use crate::value::Value;

/// Builds `softplus(a) = ln(1 + e^a)`.
///
/// Computed directly from the definition: for `a` above roughly 709 the
/// exponential overflows and the result is `inf`.
///
/// Backward: `a` receives `grad * sigmoid(a)`.
pub fn softplus_op(a: &Value) -> Value {
    new_node(a.value().exp().ln_1p(), Op::Softplus, vec![a.clone()])
}

impl Value {
    pub fn softplus(&self) -> Value {
        softplus_op(self)
    }
}

#[cfg(test)]
#[path = "softplus_test.rs"]
mod tests;
