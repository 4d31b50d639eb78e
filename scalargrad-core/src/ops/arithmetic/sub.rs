// src/ops/arithmetic/sub.rs

use crate::autograd::backward_op::Op;
use crate::ops::new_node;
use crate::value::Value;

/// Builds `a - b`. `a` is the minuend (`parents[0]`), `b` the subtrahend.
///
/// Backward: `a` receives the output gradient, `b` its negation.
pub fn sub_op(a: &Value, b: &Value) -> Value {
    new_node(a.value() - b.value(), Op::Sub, vec![a.clone(), b.clone()])
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
