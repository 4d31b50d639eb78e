use crate::error::ScalarGradError;
use crate::value::Value;
use std::collections::HashSet;

/// Identity of a node inside a graph traversal.
///
/// Keyed on the node's id, never on its value: distinct nodes may share a value.
pub type NodeId = u64;

/// Builds a topological sort of the sub-graph reachable from `root`.
///
/// The returned list is in post-order: every node appears after all of its
/// parents, and `root` is last. Each reachable node appears exactly once, no
/// matter how many paths lead to it. Processing the list back to front
/// therefore visits a node only once every node that consumes it is done.
///
/// The traversal uses an explicit stack, so long chains (a neuron summing
/// many inputs, a loss summed over many samples) do not grow the call stack.
///
/// # Errors
/// `CycleDetected` if a node is reached again while it is still being
/// expanded. The builder cannot create such a graph.
pub fn topological_sort(root: &Value) -> Result<Vec<Value>, ScalarGradError> {
    let mut sorted: Vec<Value> = Vec::new();
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut on_stack: HashSet<NodeId> = HashSet::new();

    // Each frame holds a node and the index of the next parent to expand.
    let mut stack: Vec<(Value, usize)> = vec![(root.clone(), 0)];
    on_stack.insert(root.id());

    loop {
        let next_parent = match stack.last_mut() {
            None => break,
            Some((node, next)) => {
                let guard = node.read_data();
                let parent = if *next < guard.parents.len() {
                    let parent = guard.parents[*next].clone();
                    *next += 1;
                    Some(parent)
                } else {
                    None
                };
                parent
            }
        };

        match next_parent {
            Some(parent) => {
                let parent_id = parent.id();
                if visited.contains(&parent_id) {
                    continue;
                }
                if !on_stack.insert(parent_id) {
                    return Err(ScalarGradError::CycleDetected { id: parent_id });
                }
                stack.push((parent, 0));
            }
            None => {
                if let Some((node, _)) = stack.pop() {
                    let id = node.id();
                    on_stack.remove(&id);
                    visited.insert(id);
                    sorted.push(node);
                }
            }
        }
    }

    log::trace!("topological_sort: {} node(s) reachable from node {}", sorted.len(), root.id());
    Ok(sorted)
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
