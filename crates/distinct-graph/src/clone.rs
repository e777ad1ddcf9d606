use std::collections::HashMap;

use crate::node::{Composite, Node};

/// Creates a deep copy of a graph.
///
/// No composite of the copy is shared with the source. Sharing inside the
/// source (two members pointing at one instance, or a cycle) is reproduced
/// in the copy.
///
/// # Examples
///
/// ```
/// use distinct_graph::{deep_clone, Node};
/// use serde_json::json;
///
/// let original = Node::from(json!({"foo": [1, 2, 3]}));
/// let cloned = deep_clone(&original);
///
/// original.as_composite().unwrap().remove("foo");
/// assert!(cloned.get("foo").is_some());
/// ```
pub fn deep_clone(node: &Node) -> Node {
    let mut copies = HashMap::new();
    clone_inner(node, &mut copies)
}

fn clone_inner(node: &Node, copies: &mut HashMap<usize, Composite>) -> Node {
    match node {
        Node::Scalar(v) => Node::Scalar(v.clone()),
        Node::Composite(src) => {
            if let Some(existing) = copies.get(&src.id()) {
                return Node::Composite(existing.clone());
            }
            let dst = Composite::new(src.kind());
            copies.insert(src.id(), dst.clone());
            for (key, member) in src.entries() {
                dst.insert(key, clone_inner(&member, copies));
            }
            Node::Composite(dst)
        }
    }
}
