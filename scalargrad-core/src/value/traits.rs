use crate::ops::arithmetic::{add_op, mul_op, sub_op};
use crate::value::Value;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Sub};
use std::sync::Arc;

// Identity, not value: two distinct nodes holding 3.0 are different nodes.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.data, &other.data)
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id().hash(state);
    }
}

// Operator sugar over the graph builder, for every owned/borrowed combination.
macro_rules! impl_binary_op {
    ($trait:ident, $method:ident, $op_fn:ident) => {
        impl<'a, 'b> $trait<&'b Value> for &'a Value {
            type Output = Value;
            fn $method(self, rhs: &'b Value) -> Value {
                $op_fn(self, rhs)
            }
        }

        impl<'b> $trait<&'b Value> for Value {
            type Output = Value;
            fn $method(self, rhs: &'b Value) -> Value {
                $op_fn(&self, rhs)
            }
        }

        impl<'a> $trait<Value> for &'a Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(self, &rhs)
            }
        }

        impl $trait<Value> for Value {
            type Output = Value;
            fn $method(self, rhs: Value) -> Value {
                $op_fn(&self, &rhs)
            }
        }
    };
}

impl_binary_op!(Add, add, add_op);
impl_binary_op!(Sub, sub, sub_op);
impl_binary_op!(Mul, mul, mul_op);
