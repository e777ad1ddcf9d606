//! Bridge between `serde_json::Value` trees and object graphs.

use serde_json::{Map, Value};

use crate::error::GraphError;
use crate::node::{Composite, CompositeKind, Node};

impl From<Value> for Node {
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => {
                let composite = Composite::object();
                for (key, val) in map {
                    composite.insert(key, Node::from(val));
                }
                Node::Composite(composite)
            }
            Value::Array(arr) => {
                let composite = Composite::array();
                for val in arr {
                    composite.push(Node::from(val));
                }
                Node::Composite(composite)
            }
            scalar => Node::Scalar(scalar),
        }
    }
}

impl Node {
    /// Converts the graph back into a JSON tree.
    ///
    /// Shared (but acyclic) composites are written out once per reference.
    /// Array composites emit their members in enumeration order.
    ///
    /// # Errors
    ///
    /// `GraphError::Cycle` if a composite is reachable from itself.
    pub fn to_json(&self) -> Result<Value, GraphError> {
        let mut ancestors = Vec::new();
        let mut path = String::new();
        to_json_inner(self, &mut ancestors, &mut path)
    }
}

fn to_json_inner(
    node: &Node,
    ancestors: &mut Vec<usize>,
    path: &mut String,
) -> Result<Value, GraphError> {
    let composite = match node {
        Node::Scalar(v) => return Ok(v.clone()),
        Node::Composite(c) => c,
    };
    if ancestors.contains(&composite.id()) {
        return Err(GraphError::Cycle { path: path.clone() });
    }
    ancestors.push(composite.id());
    let result = match composite.kind() {
        CompositeKind::Object => {
            let mut map = Map::new();
            for (key, member) in composite.entries() {
                let len = path.len();
                path.push('/');
                path.push_str(&key);
                let val = to_json_inner(&member, ancestors, path)?;
                path.truncate(len);
                map.insert(key, val);
            }
            Value::Object(map)
        }
        CompositeKind::Array => {
            let mut arr = Vec::with_capacity(composite.len());
            for (key, member) in composite.entries() {
                let len = path.len();
                path.push('/');
                path.push_str(&key);
                arr.push(to_json_inner(&member, ancestors, path)?);
                path.truncate(len);
            }
            Value::Array(arr)
        }
    };
    ancestors.pop();
    Ok(result)
}
