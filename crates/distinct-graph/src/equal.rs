use serde_json::Value;

use crate::node::Node;

/// Scalar equality. Numbers compare by numeric value, so `1` equals `1.0`.
pub fn scalar_eq(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            x == y || matches!((x.as_f64(), y.as_f64()), (Some(x), Some(y)) if x == y)
        }
        _ => a == b,
    }
}

/// Structural equality between two graphs.
///
/// Composites are equal when they have the same member names (in any order)
/// and pairwise structurally equal members. A pair of composites that is
/// already being compared further up the current path is treated as equal,
/// so cyclic graphs terminate.
///
/// # Examples
///
/// ```
/// use distinct_graph::{deep_equal, Node};
/// use serde_json::json;
///
/// let a = Node::from(json!({"foo": [1, 2, 3]}));
/// let b = Node::from(json!({"foo": [1, 2, 3]}));
/// let c = Node::from(json!({"foo": [1, 2, 4]}));
///
/// assert!(deep_equal(&a, &b));
/// assert!(!deep_equal(&a, &c));
/// ```
pub fn deep_equal(a: &Node, b: &Node) -> bool {
    let mut in_progress = Vec::new();
    equal_inner(a, b, &mut in_progress)
}

fn equal_inner(a: &Node, b: &Node, in_progress: &mut Vec<(usize, usize)>) -> bool {
    match (a, b) {
        (Node::Scalar(x), Node::Scalar(y)) => scalar_eq(x, y),
        (Node::Composite(x), Node::Composite(y)) => {
            if x.ptr_eq(y) {
                return true;
            }
            let pair = (x.id(), y.id());
            if in_progress.contains(&pair) {
                return true;
            }
            if x.kind() != y.kind() || x.len() != y.len() {
                return false;
            }
            in_progress.push(pair);
            let equal = x.entries().iter().all(|(key, val_x)| match y.get(key) {
                Some(val_y) => equal_inner(val_x, &val_y, in_progress),
                None => false,
            });
            in_progress.pop();
            equal
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Composite;
    use serde_json::json;

    #[test]
    fn test_scalars() {
        assert!(deep_equal(&Node::null(), &Node::null()));
        assert!(deep_equal(&Node::from(json!(2)), &Node::from(json!(2.0))));
        assert!(!deep_equal(&Node::from(json!("2")), &Node::from(json!(2))));
    }

    #[test]
    fn test_member_order_is_ignored() {
        let a = Node::from(json!({"x": 1, "y": 2}));
        let b = Node::from(json!({"y": 2, "x": 1}));
        assert!(deep_equal(&a, &b));
    }

    #[test]
    fn test_object_vs_array() {
        let a = Node::from(json!({"0": 1}));
        let b = Node::from(json!([1]));
        assert!(!deep_equal(&a, &b));
    }

    #[test]
    fn test_composite_vs_scalar() {
        assert!(!deep_equal(&Node::from(json!({})), &Node::null()));
    }

    #[test]
    fn test_cyclic_graphs_terminate() {
        let a = Composite::object();
        a.insert("self", Node::from(a.clone()));
        let b = Composite::object();
        b.insert("self", Node::from(b.clone()));
        assert!(deep_equal(&Node::from(a), &Node::from(b)));
    }
}
