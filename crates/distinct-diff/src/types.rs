//! Change records, options and errors for the diff engine.

use std::fmt;

use distinct_graph::Node;
use thiserror::Error;

// ── Error ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DiffError {
    #[error("old and new graphs cannot be null")]
    NullOperand,
}

// ── Diff type ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiffType {
    Add,
    Delete,
    Change,
}

impl DiffType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiffType::Add => "add",
            DiffType::Delete => "delete",
            DiffType::Change => "change",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "add" => Some(DiffType::Add),
            "delete" => Some(DiffType::Delete),
            "change" => Some(DiffType::Change),
            _ => None,
        }
    }
}

impl fmt::Display for DiffType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Change record ─────────────────────────────────────────────────────────

/// One difference between two graphs.
///
/// `path` is relative to the compared roots and `depth` counts from 0 for
/// the roots' direct members. Values are shared with the compared graphs.
///
/// | kind | `old_value` | `new_value` |
/// |---|---|---|
/// | add | - | new member |
/// | delete | - | - |
/// | change (leaf) | old member | new member |
/// | change (up-the-tree marker) | - | - |
#[derive(Debug, Clone, PartialEq)]
pub struct ChangeRecord {
    pub path: String,
    pub diff_type: DiffType,
    pub depth: usize,
    pub old_value: Option<Node>,
    pub new_value: Option<Node>,
}

impl ChangeRecord {
    pub fn add(path: impl Into<String>, depth: usize, new_value: Node) -> Self {
        Self {
            path: path.into(),
            diff_type: DiffType::Add,
            depth,
            old_value: None,
            new_value: Some(new_value),
        }
    }

    pub fn delete(path: impl Into<String>, depth: usize) -> Self {
        Self {
            path: path.into(),
            diff_type: DiffType::Delete,
            depth,
            old_value: None,
            new_value: None,
        }
    }

    pub fn change(path: impl Into<String>, depth: usize, old_value: Node, new_value: Node) -> Self {
        Self {
            path: path.into(),
            diff_type: DiffType::Change,
            depth,
            old_value: Some(old_value),
            new_value: Some(new_value),
        }
    }

    /// A `change` on an ancestor of an actual difference.
    pub fn marker(path: impl Into<String>, depth: usize) -> Self {
        Self {
            path: path.into(),
            diff_type: DiffType::Change,
            depth,
            old_value: None,
            new_value: None,
        }
    }

    pub fn is_marker(&self) -> bool {
        self.diff_type == DiffType::Change && self.old_value.is_none() && self.new_value.is_none()
    }

    /// Event name used when the record is replayed: `"<diffType>:<path>"`.
    pub fn event_name(&self) -> String {
        format!("{}:{}", self.diff_type, self.path)
    }
}

// ── Options ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffOptions {
    /// Emit a `change` marker for every ancestor of a difference.
    pub changes_up_the_tree: bool,
}

impl DiffOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn changes_up_the_tree(mut self, enabled: bool) -> Self {
        self.changes_up_the_tree = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_name() {
        let rec = ChangeRecord::add("/tags/b", 1, Node::from(json!(2)));
        assert_eq!(rec.event_name(), "add:/tags/b");
        assert_eq!(ChangeRecord::delete("/x", 0).event_name(), "delete:/x");
    }

    #[test]
    fn test_marker_detection() {
        assert!(ChangeRecord::marker("/a", 0).is_marker());
        assert!(!ChangeRecord::delete("/a", 0).is_marker());
        assert!(!ChangeRecord::change("/a", 0, Node::null(), Node::from(json!(1))).is_marker());
    }

    #[test]
    fn test_diff_type_names() {
        for t in [DiffType::Add, DiffType::Delete, DiffType::Change] {
            assert_eq!(DiffType::from_str(t.as_str()), Some(t));
        }
        assert_eq!(DiffType::from_str("replace"), None);
    }
}
