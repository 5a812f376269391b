use crate::value::Value;
use crate::value_data::ValueData;
use std::cell::RefCell;
use std::collections::HashSet;

/// Identity of a graph node: the address of its shared `RefCell<ValueData>`.
///
/// Only ever compared and hashed, never dereferenced.
pub type NodeId = *const RefCell<ValueData>;

/// Builds a topological sort of the graph reachable from `root` through operand links.
///
/// Every node appears after all of its operands, and `root` is last; iterating the result
/// in reverse therefore visits each node before any of the nodes it was built from.
/// Each node is emitted once, even when it is shared by several consumers (the visited set
/// is keyed on identity, not value).
///
/// The depth-first traversal uses an explicit stack so that long chains (e.g. a loss summed
/// one term at a time over thousands of steps) cannot overflow the call stack. The graph is
/// assumed acyclic, which holds for anything built through the public operations.
pub fn topological_sort(root: &Value) -> Vec<Value> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    let mut sorted_list: Vec<Value> = Vec::new();
    // (node, operands already scheduled)
    let mut stack: Vec<(Value, bool)> = vec![(root.clone(), false)];

    while let Some((node, expanded)) = stack.pop() {
        if expanded {
            sorted_list.push(node);
            continue;
        }
        if !visited.insert(node.id()) {
            continue;
        }
        let operands = node.operands();
        stack.push((node, true));
        // Reversed so operands are emitted in construction order.
        for input in operands.into_iter().rev() {
            if !visited.contains(&input.id()) {
                stack.push((input, false));
            }
        }
    }

    sorted_list
}

#[cfg(test)]
#[path = "graph_test.rs"]
mod tests;
