//! Simple `/`-separated paths over object graphs.
//!
//! A simple path names one member per segment and has no descendant steps.
//! These are the mutation primitives a change list is replayed with.
//!
//! # Example
//!
//! ```
//! use distinct_graph::Node;
//! use distinct_path::{get, parse_path, remove_path, set_path};
//! use serde_json::json;
//!
//! let doc = Node::from(json!({"foo": {"bar": 42}}));
//!
//! assert!(set_path(&doc, "/foo/baz", Node::from(json!(1))));
//! assert_eq!(get(&doc, &parse_path("/foo/baz")), Some(Node::from(json!(1))));
//!
//! assert!(remove_path(&doc, "/foo/bar"));
//! assert!(!remove_path(&doc, "/foo/bar"));
//! assert!(!set_path(&doc, "/missing/x", Node::null()));
//! ```

mod slot;
pub use slot::{resolve_slot, Slot};

use distinct_graph::Node;

/// Split a simple path into member names.
///
/// The leading `/` is optional. Only `""` is the root path; `"/"` names the
/// empty-named member of the root, the inverse of `format_path(&[""])`.
///
/// ```
/// use distinct_path::parse_path;
///
/// assert_eq!(parse_path(""), Vec::<String>::new());
/// assert_eq!(parse_path("/"), vec![""]);
/// assert_eq!(parse_path("/foo/bar"), vec!["foo", "bar"]);
/// assert_eq!(parse_path("foo/bar"), vec!["foo", "bar"]);
/// ```
pub fn parse_path(path: &str) -> Vec<String> {
    if path.is_empty() {
        return Vec::new();
    }
    let rest = path.strip_prefix('/').unwrap_or(path);
    rest.split('/').map(str::to_string).collect()
}

/// Join member names into a `/`-prefixed path. The root path is `""`.
///
/// ```
/// use distinct_path::format_path;
///
/// assert_eq!(format_path(&[]), "");
/// assert_eq!(format_path(&["foo".to_string(), "bar".to_string()]), "/foo/bar");
/// ```
pub fn format_path(path: &[String]) -> String {
    let mut out = String::new();
    for segment in path {
        out.push('/');
        out.push_str(segment);
    }
    out
}

/// Get the value at `path`, or `None` if any segment is missing or crosses
/// a scalar.
pub fn get(root: &Node, path: &[String]) -> Option<Node> {
    let mut current = root.clone();
    for segment in path {
        current = current.get(segment)?;
    }
    Some(current)
}

/// Assign `value` at `path`, creating or overwriting the final member.
///
/// Returns `false` without mutating anything when an intermediate member is
/// absent, null or scalar, or when `path` is the root.
pub fn set_path(root: &Node, path: &str, value: Node) -> bool {
    match resolve_slot(root, &parse_path(path)) {
        Some(slot) => {
            slot.container.insert(slot.key, value);
            true
        }
        None => false,
    }
}

/// Delete the member at `path`.
///
/// Returns `false` when the container cannot be reached or does not own the
/// member.
pub fn remove_path(root: &Node, path: &str) -> bool {
    match resolve_slot(root, &parse_path(path)) {
        Some(slot) => slot.container.remove(&slot.key).is_some(),
        None => false,
    }
}
