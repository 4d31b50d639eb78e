use crate::autograd::backward_op::Op;
use crate::ops::new_node;
use crate::value::Value;

/// Builds `tanh(a)`.
///
/// Backward: `a` receives `grad * (1 - tanh(a)^2)`.
pub fn tanh_op(a: &Value) -> Value {
    new_node(a.value().tanh(), Op::Tanh, vec![a.clone()])
}

impl Value {
    pub fn tanh(&self) -> Value {
        tanh_op(self)
    }
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
