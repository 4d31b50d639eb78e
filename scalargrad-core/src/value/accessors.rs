use crate::autograd::backward_op::Op;
use crate::error::ScalarGradError;
use crate::value::Value;

impl Value {
    /// Returns the forward value of this node.
    pub fn value(&self) -> f64 {
        self.read_data().value
    }

    /// Returns the gradient accumulated by the last backward pass.
    pub fn grad(&self) -> f64 {
        self.read_data().grad
    }

    /// Returns the process-unique identifier of this node.
    pub fn id(&self) -> u64 {
        self.read_data().id
    }

    /// Returns the operation tag that produced this node.
    pub fn op(&self) -> Op {
        self.read_data().op
    }

    /// Returns the operand nodes, in operand order.
    pub fn parents(&self) -> Vec<Value> {
        self.read_data().parents.clone()
    }

    pub fn is_leaf(&self) -> bool {
        self.read_data().op == Op::Leaf
    }

    /// Reassigns the value of a leaf node.
    ///
    /// This is the only sanctioned mutation of a forward value, intended for
    /// optimizers stepping parameters between backward passes. Nodes already
    /// built on top of this leaf keep their old forward value; rebuild them.
    ///
    /// # Errors
    /// Returns `NotALeaf` if the node was produced by an operation.
    pub fn set_value(&self, value: f64) -> Result<(), ScalarGradError> {
        let mut guard = self.write_data();
        if guard.op != Op::Leaf {
            return Err(ScalarGradError::NotALeaf { id: guard.id });
        }
        guard.value = value;
        Ok(())
    }
}
