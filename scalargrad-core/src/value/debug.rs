use crate::value::Value;
use std::fmt;

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        write!(f, "Value({:?})", &*guard)
    }
}

/// One-line label: id, value, grad and operation, the way graph dumps show a node.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let guard = self.read_data();
        write!(
            f,
            "#{} value={:.4} grad={:.4} op={}",
            guard.id, guard.value, guard.grad, guard.op
        )
    }
}
