use crate::error::ScalarGradError;
use crate::value::Value;
use std::fmt;
use std::ops::Deref;

/// A leaf node marked as a learnable parameter of a Module, with an optional name.
///
/// Dereferences to the underlying [`Value`], so `param.value()`,
/// `param.grad()` and `param.set_value(..)` work directly.
#[derive(Clone)]
pub struct Parameter {
    value: Value,
    name: Option<String>,
}

impl Parameter {
    /// Wraps an existing leaf.
    ///
    /// # Errors
    /// `NotALeaf` if `value` was produced by an operation: only leaves can be
    /// stepped by an optimizer.
    pub fn new(value: Value, name: Option<String>) -> Result<Self, ScalarGradError> {
        if !value.is_leaf() {
            return Err(ScalarGradError::NotALeaf { id: value.id() });
        }
        Ok(Parameter { value, name })
    }

    /// Creates a parameter backed by a fresh leaf.
    pub fn from_scalar(value: f64, name: Option<String>) -> Self {
        Parameter {
            value: Value::new(value),
            name,
        }
    }

    pub fn new_unnamed(value: f64) -> Self {
        Self::from_scalar(value, None)
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Consumes the Parameter and returns the underlying leaf.
    pub fn into_inner(self) -> Value {
        self.value
    }
}

// Allow accessing the underlying Value immutably via Deref.
impl Deref for Parameter {
    type Target = Value;

    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

impl fmt::Debug for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            Some(name) => write!(f, "Parameter({}: {})", name, self.value),
            None => write!(f, "Parameter({})", self.value),
        }
    }
}

#[cfg(test)]
#[path = "parameter_test.rs"]
mod tests;
