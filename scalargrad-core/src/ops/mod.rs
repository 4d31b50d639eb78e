// src/ops/mod.rs
//
// Graph builder: the only way to create non-leaf nodes. Every entry point
// computes the forward value from its operands, records the operands as
// parents in operand order, and tags the node with its operation.

pub mod activation;
pub mod arithmetic;

use crate::autograd::backward_op::Op;
use crate::value::Value;
use crate::value_data::ValueData;

/// Wires a new operation node on top of `parents`.
pub(crate) fn new_node(value: f64, op: Op, parents: Vec<Value>) -> Value {
    debug_assert_eq!(parents.len(), op.arity(), "{:?} built with wrong parent count", op);
    let node = Value::from_data(ValueData::new(value, op, parents));
    log::trace!("built {}", node);
    node
}

pub use activation::{softplus_op, tanh_op};
pub use arithmetic::{add_op, mul_op, pow_op, sub_op};
