// src/ops/arithmetic/mul.rs

use crate::autograd::backward_op::Op;
use crate::ops::new_node;
use crate::value::Value;

/// Builds `a * b`.
///
/// Backward: each operand receives the output gradient scaled by the other
/// operand's value. `mul_op(&a, &a)` lists `a` twice, so `a` collects both
/// contributions (`2a`).
pub fn mul_op(a: &Value, b: &Value) -> Value {
    new_node(a.value() * b.value(), Op::Mul, vec![a.clone(), b.clone()])
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
