//! Reverse-mode automatic differentiation over scalar values.
//!
//! Every arithmetic or activation call builds a new [`Value`] node whose
//! parents are its operands. [`Value::backward`] then walks the reachable
//! graph in reverse topological order and leaves `d root / d node` in every
//! node's `grad`. The [`nn`] module composes the same primitives into
//! neurons, layers and multi-layer perceptrons.
//!
//! ```
//! use scalargrad_core::Value;
//!
//! let a = Value::new(2.0);
//! let b = Value::new(-3.0);
//! let c = Value::new(10.0);
//! let d = &(&a * &b) + &c;
//! d.backward().unwrap();
//! assert_eq!(d.value(), 4.0);
//! assert_eq!(a.grad(), -3.0);
//! assert_eq!(b.grad(), 2.0);
//! assert_eq!(c.grad(), 1.0);
//! ```

pub mod autograd;
pub mod error;
pub mod nn;
pub mod ops;
pub mod value;
pub mod value_data;

pub use autograd::Op;
pub use error::ScalarGradError;
pub use value::{leaf, leaves, BackwardMode, Value};
