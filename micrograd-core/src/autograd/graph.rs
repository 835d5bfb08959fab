use crate::value::Value;
use crate::value_data::ValueData;
use log::trace;
use std::collections::HashSet;
use std::sync::RwLock;

/// Identity of a node in the computation graph.
///
/// The address of the node's shared `RwLock<ValueData>`. It stays stable for as long
/// as any `Value` handle keeps the node alive, and two handles compare equal only if
/// they point at the same node (value equality is never used). It is only used as a
/// key and never dereferenced.
pub type NodeId = *const RwLock<ValueData>;

/// Builds a topological ordering of every node reachable from `root`.
///
/// Depth-first, post-order: a node is appended only after all of its operands, which
/// are visited in the order they were passed to the operator. A node shared by several
/// parents is appended exactly once. Leaves come first and `root` is last.
///
/// The traversal uses an explicit stack, so deep chains do not exhaust the call stack;
/// the order is identical to the recursive formulation.
pub fn topological_sort(root: &Value) -> Vec<Value> {
    let mut visited = HashSet::new();
    let mut order = Vec::new();
    visit_postorder(root, &mut visited, &mut order);
    order
}

/// Like [`topological_sort`], but over the union of the graphs below `roots`.
///
/// Nodes shared between roots appear once, at the position of their first visit.
pub fn topological_sort_many(roots: &[Value]) -> Vec<Value> {
    let mut visited = HashSet::new();
    let mut order = Vec::new();
    for root in roots {
        visit_postorder(root, &mut visited, &mut order);
    }
    order
}

// Visited set is owned by the caller and scoped to a single sort.
fn visit_postorder(root: &Value, visited: &mut HashSet<NodeId>, order: &mut Vec<Value>) {
    if !visited.insert(root.node_id()) {
        return;
    }
    trace!("[topological_sort] Visiting root {:?}", root.node_id());

    // (node, index of the next operand to visit)
    let mut stack: Vec<(Value, usize)> = vec![(root.clone(), 0)];
    while let Some(frame) = stack.last_mut() {
        let next_operand = frame.0.read_data().operands.get(frame.1).cloned();
        match next_operand {
            Some(operand) => {
                frame.1 += 1;
                if visited.insert(operand.node_id()) {
                    trace!("[topological_sort]  Descending into {:?}", operand.node_id());
                    stack.push((operand, 0));
                }
            }
            None => {
                if let Some((node, _)) = stack.pop() {
                    trace!("[topological_sort]  Adding node {:?} to order", node.node_id());
                    order.push(node);
                }
            }
        }
    }
}
