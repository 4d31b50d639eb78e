use super::*;
use crate::value::Value;
use std::collections::HashMap;

/// Position of every node in `order`, checking each node occurs once.
fn positions(order: &[Value]) -> HashMap<NodeId, usize> {
    let mut pos = HashMap::new();
    for (i, node) in order.iter().enumerate() {
        assert!(pos.insert(node.id(), i).is_none(), "node {} listed twice", node.id());
    }
    pos
}

fn assert_parents_first(order: &[Value]) {
    let pos = positions(order);
    for node in order {
        for parent in node.parents() {
            assert!(
                pos[&parent.id()] < pos[&node.id()],
                "parent {} must come before child {}",
                parent.id(),
                node.id()
            );
        }
    }
}

#[test]
fn test_single_leaf() -> Result<(), ScalarGradError> {
    let a = Value::new(1.0);
    let order = topological_sort(&a)?;
    assert_eq!(order, vec![a]);
    Ok(())
}

#[test]
fn test_diamond_visits_shared_node_once() -> Result<(), ScalarGradError> {
    let a = Value::new(2.0);
    let b = a.tanh();
    let c = a.softplus();
    let d = &b * &c;
    let e = &d + &a;

    let order = topological_sort(&e)?;
    assert_eq!(order.len(), 5);
    assert_eq!(order.last(), Some(&e), "root must be last");
    assert_eq!(order.first(), Some(&a), "the only leaf must come first");
    assert_parents_first(&order);
    Ok(())
}

#[test]
fn test_self_operand_listed_once() -> Result<(), ScalarGradError> {
    let a = Value::new(3.0);
    let c = &a * &a;
    let order = topological_sort(&c)?;
    assert_eq!(order, vec![a, c]);
    Ok(())
}

#[test]
fn test_unreachable_nodes_are_excluded() -> Result<(), ScalarGradError> {
    let a = Value::new(1.0);
    let b = Value::new(2.0);
    let used = &a + &b;
    let unused = &used * &b;
    let order = topological_sort(&used)?;
    assert!(!order.contains(&unused));
    assert_eq!(order.len(), 3);
    Ok(())
}

#[test]
fn test_long_chain_does_not_overflow() -> Result<(), ScalarGradError> {
    let one = Value::constant(1.0);
    let mut acc = Value::new(0.0);
    for _ in 0..100_000 {
        acc = &acc + &one;
    }
    let order = topological_sort(&acc)?;
    assert_eq!(order.len(), 100_002);
    assert_parents_first(&order);
    Ok(())
}

#[test]
fn test_hand_wired_cycle_is_reported() {
    let a = Value::new(1.0);
    let c = &a + &a;
    // The builder cannot express this: make `a` consume its own consumer.
    a.write_data().parents.push(c.clone());

    assert_eq!(
        topological_sort(&c).err(),
        Some(ScalarGradError::CycleDetected { id: c.id() })
    );
    assert_eq!(
        c.backward().err(),
        Some(ScalarGradError::CycleDetected { id: c.id() })
    );

    // Unlink so both nodes can be freed.
    a.write_data().parents.clear();
}
