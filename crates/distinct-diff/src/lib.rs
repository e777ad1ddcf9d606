//! Structural diff and replay for object graphs.
//!
//! [`diff`] compares two graphs member by member and returns a change list
//! sorted by `(depth, path)`. [`apply_diff`] replays such a list onto a
//! target graph on a best-effort basis, optionally notifying an
//! [`EventSink`] for each record it applies.
//!
//! # Example
//!
//! ```
//! use distinct_diff::{apply_diff, diff, ChangeRecord};
//! use distinct_graph::{deep_clone, Node};
//! use serde_json::json;
//!
//! let a = Node::from(json!({"name": "x", "tags": {"a": 1}}));
//! let b = Node::from(json!({"name": "y", "tags": {"a": 1, "b": 2}}));
//!
//! let changes = diff(&a, &b).unwrap();
//! assert_eq!(changes[0].path, "/name");
//! assert_eq!(changes[1].path, "/tags/b");
//!
//! let target = deep_clone(&a);
//! let mut events: Vec<(String, ChangeRecord)> = Vec::new();
//! apply_diff(&target, &changes, Some(&mut events));
//! assert_eq!(target.to_json().unwrap(), b.to_json().unwrap());
//! assert_eq!(events[0].0, "change:/name");
//! ```

pub mod types;
pub mod diff;
pub mod apply;
pub mod codec;

pub use types::{ChangeRecord, DiffError, DiffOptions, DiffType};
pub use diff::{diff, diff_with};
pub use apply::{apply_diff, EventSink};
pub use codec::CodecError;
pub use codec::json::{from_json, from_json_list, to_json, to_json_list};
