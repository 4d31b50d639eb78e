use thiserror::Error;

/// Custom error type for the ScalarGrad engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum ScalarGradError {
    #[error("Arity mismatch: expected {expected} operand(s), got {actual} during operation {operation}")]
    ArityMismatch {
        expected: usize,
        actual: usize,
        operation: String,
    },

    #[error("Numeric domain error in {operation}: {reason}")]
    NumericDomain { operation: String, reason: String },

    #[error("Cannot assign a value to node {id}: only leaf nodes may be mutated")]
    NotALeaf { id: u64 },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Parameter initializer exhausted after {provided} value(s)")]
    InitExhausted { provided: usize },

    #[error("Cycle detected in the computation graph during backward pass (node {id}).")]
    CycleDetected { id: u64 },

    #[error("Internal error: {0}")]
    Internal(String),
}
