use crate::autograd::backward_op::Op;
use crate::value::Value;
use std::fmt::{self, Debug};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError};

static NEXT_NODE_ID: AtomicU64 = AtomicU64::new(0);

/// Hands out process-unique node identifiers.
pub(crate) fn next_node_id() -> u64 {
    NEXT_NODE_ID.fetch_add(1, Ordering::Relaxed)
}

/// The record behind every [`Value`] handle.
///
/// `value` is fixed at construction for operation nodes; leaves may have it
/// reassigned between passes. `grad` is only ever accumulated into by the
/// backward pass, apart from the explicit resets.
pub struct ValueData {
    /// Process-unique identity, used by the scheduler's visited-set.
    pub(crate) id: u64,
    pub(crate) value: f64,
    pub(crate) grad: f64,
    pub(crate) op: Op,
    /// Operands in the order fixed by `op` (base/minuend first).
    pub(crate) parents: Vec<Value>,
}

impl ValueData {
    pub(crate) fn new(value: f64, op: Op, parents: Vec<Value>) -> Self {
        ValueData {
            id: next_node_id(),
            value,
            grad: 0.0,
            op,
            parents,
        }
    }

    pub(crate) fn new_leaf(value: f64) -> Self {
        Self::new(value, Op::Leaf, Vec::new())
    }

    /// Adds a contribution into the gradient accumulator.
    pub(crate) fn accumulate_grad(&mut self, contribution: f64) {
        self.grad += contribution;
    }
}

// Unlinks parents iteratively. The default recursive drop would use one stack
// frame per node along a chain, and long sums can be hundreds of thousands deep.
impl Drop for ValueData {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.parents);
        while let Some(parent) = pending.pop() {
            // Only nodes this handle owns exclusively are unlinked; shared ones
            // are left to their remaining owners.
            if let Ok(lock) = Arc::try_unwrap(parent.data) {
                let mut data = lock.into_inner().unwrap_or_else(PoisonError::into_inner);
                pending.append(&mut data.parents);
            }
        }
    }
}

// Parents are printed by id only, printing them in full would walk the whole graph.
impl Debug for ValueData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parent_ids: Vec<u64> = self.parents.iter().map(|p| p.id()).collect();
        f.debug_struct("ValueData")
            .field("id", &self.id)
            .field("value", &self.value)
            .field("grad", &self.grad)
            .field("op", &self.op)
            .field("parents", &parent_ids)
            .finish()
    }
}
