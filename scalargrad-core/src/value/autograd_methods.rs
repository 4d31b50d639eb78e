use crate::autograd::graph::topological_sort;
use crate::error::ScalarGradError;
use crate::value::Value;
use log::{debug, trace, warn};

/// How a backward pass treats gradients left over from earlier passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackwardMode {
    /// Every reachable node starts from zero.
    Reset,
    /// Interior nodes start from zero, leaves keep what they hold and add
    /// this pass's contributions on top.
    Accumulate,
}

impl Value {
    /// Performs the backward pass starting from this node.
    ///
    /// Computes the derivative of this node with respect to every node
    /// reachable through parent edges, leaving it in each node's `grad`:
    /// 1. topologically sort the reachable sub-graph (each node once);
    /// 2. reset every visited node's gradient to 0;
    /// 3. seed this node's gradient with 1;
    /// 4. walk the order back to front, applying each node's derivative rule,
    ///    which adds into its parents' gradients.
    ///
    /// Step 4 runs a node only after every node consuming it has already run,
    /// so its gradient holds the full sum of downstream contributions.
    ///
    /// # Errors
    /// Returns `ScalarGradError` if the graph violates its structural
    /// invariants (`CycleDetected`, `Internal`). No partial result is meant
    /// to be used in that case.
    pub fn backward(&self) -> Result<(), ScalarGradError> {
        self.backward_with_mode(BackwardMode::Reset)
    }

    /// Like [`Value::backward`], but leaf gradients are summed with the
    /// gradients they already hold.
    ///
    /// Call [`Value::zero_grad`] (or `Module::zero_grad`) on the leaves first,
    /// then run this once per sample loss to obtain the summed gradient.
    pub fn backward_accumulate(&self) -> Result<(), ScalarGradError> {
        self.backward_with_mode(BackwardMode::Accumulate)
    }

    pub fn backward_with_mode(&self, mode: BackwardMode) -> Result<(), ScalarGradError> {
        let root_value = self.value();
        if !root_value.is_finite() {
            warn!("backward: root node {} has non-finite value {}", self.id(), root_value);
        }

        let sorted_nodes = topological_sort(self)?;
        debug!(
            "backward: root {} ({:?}), {} reachable node(s)",
            self.id(),
            mode,
            sorted_nodes.len()
        );

        for node in &sorted_nodes {
            let mut guard = node.write_data();
            if mode == BackwardMode::Reset || !guard.parents.is_empty() {
                guard.grad = 0.0;
            }
        }

        self.write_data().accumulate_grad(1.0);

        // Reverse topological order: consumers before the nodes they consume.
        for node in sorted_nodes.iter().rev() {
            let (op, grad_output, parents) = {
                let guard = node.read_data();
                (guard.op, guard.grad, guard.parents.clone())
            };
            if parents.is_empty() && op.arity() == 0 {
                continue;
            }

            let inputs: Vec<f64> = parents.iter().map(|p| p.value()).collect();
            let contributions = op.backward(grad_output, &inputs)?;

            debug_assert_eq!(contributions.len(), parents.len(), "{:?} rule must give one gradient per parent", op);

            for (parent, contribution) in parents.iter().zip(contributions) {
                if let Some(contribution) = contribution {
                    trace!(
                        "backward: node {} ({}) -> parent {}: {:+e}",
                        node.id(),
                        op,
                        parent.id(),
                        contribution
                    );
                    parent.write_data().accumulate_grad(contribution);
                }
            }
        }

        Ok(())
    }

    /// Sets this node's gradient to 0 (e.g. after an optimizer step).
    pub fn zero_grad(&self) {
        self.write_data().grad = 0.0;
    }

    /// Sets the gradient of every node reachable from this one to 0.
    pub fn zero_grad_graph(&self) -> Result<(), ScalarGradError> {
        for node in topological_sort(self)? {
            node.zero_grad();
        }
        Ok(())
    }
}
