use crate::value::Value;
use crate::value_data::ValueData;

impl Value {
    /// Creates a leaf node (no parents, zero gradient).
    ///
    /// Leaves are the constants and trainable parameters of a graph; they are
    /// the only nodes whose value may be reassigned later (see [`Value::set_value`]).
    pub fn new(value: f64) -> Self {
        Value::from_data(ValueData::new_leaf(value))
    }

    /// Creates a leaf meant as a fixed input rather than a parameter.
    ///
    /// Same representation as [`Value::new`]; the name only documents intent.
    pub fn constant(value: f64) -> Self {
        Self::new(value)
    }
}

/// Creates a leaf node. Free-function form of [`Value::new`].
pub fn leaf(value: f64) -> Value {
    Value::new(value)
}

/// Wraps each scalar of `values` in its own leaf.
pub fn leaves(values: &[f64]) -> Vec<Value> {
    values.iter().copied().map(Value::new).collect()
}
