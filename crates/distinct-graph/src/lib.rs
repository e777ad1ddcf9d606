//! distinct-graph - untyped object graphs.
//!
//! A graph node is either a [`Composite`] (named members in insertion order,
//! shared by reference) or a scalar [`serde_json::Value`]. Composites are
//! interior-mutable handles, so the same instance may be reachable from
//! several places, including itself.
//!
//! # Example
//!
//! ```
//! use distinct_graph::{deep_clone, deep_equal, Node};
//! use serde_json::json;
//!
//! let doc = Node::from(json!({"name": "x", "tags": {"a": 1}}));
//! let copy = deep_clone(&doc);
//!
//! assert!(deep_equal(&doc, &copy));
//! assert!(!doc.same_instance(&copy));
//! assert_eq!(copy.to_json().unwrap(), json!({"name": "x", "tags": {"a": 1}}));
//! ```

mod clone;
mod equal;
mod error;
mod json;
mod node;

pub use clone::deep_clone;
pub use equal::{deep_equal, scalar_eq};
pub use error::GraphError;
pub use node::{Composite, CompositeKind, Node};
