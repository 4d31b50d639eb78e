// src/ops/arithmetic/add.rs

use crate::autograd::backward_op::Op;
use crate::ops::new_node;
use crate::value::Value;

/// Builds `a + b`.
///
/// Backward: both operands receive the output gradient unchanged.
pub fn add_op(a: &Value, b: &Value) -> Value {
    new_node(a.value() + b.value(), Op::Add, vec![a.clone(), b.clone()])
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
