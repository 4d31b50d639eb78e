// src/value/mod.rs

use crate::value_data::ValueData;
use std::sync::{Arc, RwLock};

mod accessors;
mod autograd_methods;
pub mod create;
mod debug;
mod traits;

pub use autograd_methods::BackwardMode;
pub use create::{leaf, leaves};

/// A node of the scalar computation graph.
///
/// `Value` uses `Arc<RwLock<ValueData>>` internally to allow for:
/// 1.  **Shared Ownership:** a node is referenced by every child that lists it
///     as a parent, and by whatever the caller keeps. Cloning a `Value` clones
///     the handle, never the node.
/// 2.  **Interior Mutability:** the gradient accumulator (and a leaf's value)
///     can be updated through a shared handle during the backward pass.
///
/// Parents are held strongly, so a node always outlives the children that
/// reference it. The graph is acyclic by construction: an operation can only
/// name nodes that already exist.
pub struct Value {
    /// Arc for shared ownership, RwLock for interior mutability of ValueData.
    pub(crate) data: Arc<RwLock<ValueData>>,
}

impl Value {
    pub(crate) fn from_data(data: ValueData) -> Self {
        Value {
            data: Arc::new(RwLock::new(data)),
        }
    }

    /// Acquires a read lock on the node's data.
    ///
    /// Panics if the RwLock is poisoned.
    pub fn read_data(&self) -> std::sync::RwLockReadGuard<'_, ValueData> {
        self.data.read().expect("RwLock poisoned")
    }

    /// Acquires a write lock on the node's data.
    ///
    /// Panics if the RwLock is poisoned.
    pub fn write_data(&self) -> std::sync::RwLockWriteGuard<'_, ValueData> {
        self.data.write().expect("RwLock poisoned")
    }
}

impl Clone for Value {
    /// Cloning a Value clones the handle (shallow clone via Arc).
    fn clone(&self) -> Self {
        Value {
            data: Arc::clone(&self.data),
        }
    }
}
