//! Reverse-mode differentiation: the operation table and the scheduler's ordering.
//!
//! The pass itself lives on [`crate::Value`] (`backward`, `backward_accumulate`);
//! this module provides what it is built from.

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use backward_op::Op;
pub use graph::{topological_sort, NodeId};
