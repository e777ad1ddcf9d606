//! Structural diff between two object graphs.

use distinct_graph::{scalar_eq, Composite, Node};
use tracing::debug;

use crate::types::{ChangeRecord, DiffError, DiffOptions};

// ── Public API ────────────────────────────────────────────────────────────

/// Diff two graphs with default options.
pub fn diff(old: &Node, new: &Node) -> Result<Vec<ChangeRecord>, DiffError> {
    diff_with(old, new, &DiffOptions::default())
}

/// Compare `old` against `new` and list what changed.
///
/// The result is sorted by `(depth, path)`. A scalar root has no members, so
/// diffing it against a composite yields one `add` or `delete` per member.
///
/// Composites are compared by member name only; their [`CompositeKind`]
/// is ignored. An empty object and an empty array under the same key
/// produce no record, and `{"0": 1}` against `[1]` is equal.
///
/// [`CompositeKind`]: distinct_graph::CompositeKind
///
/// # Errors
///
/// `DiffError::NullOperand` if either root is null.
pub fn diff_with(
    old: &Node,
    new: &Node,
    options: &DiffOptions,
) -> Result<Vec<ChangeRecord>, DiffError> {
    if old.is_null() || new.is_null() {
        return Err(DiffError::NullOperand);
    }

    let mut differ = Differ {
        up_the_tree: options.changes_up_the_tree,
        records: Vec::new(),
        in_progress: Vec::new(),
    };
    if let (Some(o), Some(n)) = (old.as_composite(), new.as_composite()) {
        if o.ptr_eq(n) {
            return Ok(Vec::new());
        }
        differ.in_progress.push((o.id(), n.id()));
    }
    differ.diff_members(old, new, "", 0);

    let mut records = differ.records;
    records.sort_by(|a, b| a.depth.cmp(&b.depth).then_with(|| a.path.cmp(&b.path)));
    debug!(records = records.len(), up_the_tree = options.changes_up_the_tree, "diff complete");
    Ok(records)
}

// ── Core recursive differ ─────────────────────────────────────────────────

struct Differ {
    up_the_tree: bool,
    records: Vec<ChangeRecord>,
    /// Composite pairs being compared on the current path.
    in_progress: Vec<(usize, usize)>,
}

impl Differ {
    /// Returns true if anything below `old`/`new` differs.
    fn diff_members(&mut self, old: &Node, new: &Node, prefix: &str, depth: usize) -> bool {
        let mut changed = false;

        for (key, old_val) in members(old) {
            let path = format!("{prefix}/{key}");
            let Some(new_val) = new.get(&key) else {
                self.records.push(ChangeRecord::delete(path, depth));
                changed = true;
                continue;
            };
            match (&old_val, &new_val) {
                (Node::Composite(o), Node::Composite(n)) => {
                    if self.diff_composites(o, n, &path, depth + 1) {
                        changed = true;
                        if self.up_the_tree {
                            self.records.push(ChangeRecord::marker(path, depth));
                        }
                    }
                }
                (Node::Scalar(o), Node::Scalar(n)) if scalar_eq(o, n) => {}
                _ => {
                    self.records.push(ChangeRecord::change(path, depth, old_val.clone(), new_val.clone()));
                    changed = true;
                }
            }
        }

        for (key, new_val) in members(new) {
            if !has_member(old, &key) {
                self.records.push(ChangeRecord::add(format!("{prefix}/{key}"), depth, new_val));
                changed = true;
            }
        }

        changed
    }

    fn diff_composites(&mut self, old: &Composite, new: &Composite, path: &str, depth: usize) -> bool {
        if old.ptr_eq(new) {
            return false;
        }
        // Cycles: a pair already under comparison contributes nothing new.
        let pair = (old.id(), new.id());
        if self.in_progress.contains(&pair) {
            return false;
        }
        self.in_progress.push(pair);
        let changed = self.diff_members(
            &Node::Composite(old.clone()),
            &Node::Composite(new.clone()),
            path,
            depth,
        );
        self.in_progress.pop();
        changed
    }
}

fn members(node: &Node) -> Vec<(String, Node)> {
    node.as_composite().map(Composite::entries).unwrap_or_default()
}

fn has_member(node: &Node, key: &str) -> bool {
    node.as_composite().is_some_and(|c| c.contains_key(key))
}

// ── Tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DiffType;
    use serde_json::json;

    fn n(v: serde_json::Value) -> Node {
        Node::from(v)
    }

    #[test]
    fn diff_equal_docs() {
        let a = n(json!({"a": 1, "b": {"c": [1, 2]}}));
        let b = n(json!({"a": 1, "b": {"c": [1, 2]}}));
        assert!(diff(&a, &b).unwrap().is_empty());
        assert!(diff(&a, &a).unwrap().is_empty());
    }

    #[test]
    fn diff_rejects_null_operands() {
        let a = n(json!({}));
        assert_eq!(diff(&Node::null(), &a), Err(DiffError::NullOperand));
        assert_eq!(diff(&a, &Node::null()), Err(DiffError::NullOperand));
    }

    #[test]
    fn diff_reference_example() {
        let a = n(json!({"name": "x", "tags": {"a": 1}}));
        let b = n(json!({"name": "y", "tags": {"a": 1, "b": 2}}));
        let records = diff(&a, &b).unwrap();
        assert_eq!(
            records,
            vec![
                ChangeRecord::change("/name", 0, n(json!("x")), n(json!("y"))),
                ChangeRecord::add("/tags/b", 1, n(json!(2))),
            ]
        );
    }

    #[test]
    fn diff_delete_carries_no_values() {
        let records = diff(&n(json!({"gone": 1})), &n(json!({}))).unwrap();
        assert_eq!(records, vec![ChangeRecord::delete("/gone", 0)]);
    }

    #[test]
    fn diff_composite_vs_scalar_is_leaf_change() {
        let a = n(json!({"v": {"x": 1}}));
        let b = n(json!({"v": 5}));
        let records = diff(&a, &b).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].diff_type, DiffType::Change);
        assert!(records[0].old_value.as_ref().unwrap().same_instance(&a.get("v").unwrap()));
        assert_eq!(records[0].new_value, Some(n(json!(5))));

        let back = diff(&b, &a).unwrap();
        assert_eq!(back.len(), 1);
        assert!(!back[0].is_marker());
    }

    #[test]
    fn diff_null_member_to_value() {
        let records = diff(&n(json!({"v": null})), &n(json!({"v": 0}))).unwrap();
        assert_eq!(records, vec![ChangeRecord::change("/v", 0, Node::null(), n(json!(0)))]);
    }

    #[test]
    fn diff_ignores_object_vs_array_shape() {
        assert!(diff(&n(json!({"v": {}})), &n(json!({"v": []}))).unwrap().is_empty());
        assert!(diff(&n(json!({"v": {"0": 1}})), &n(json!({"v": [1]}))).unwrap().is_empty());
        let records = diff(&n(json!({"v": {"0": 1}})), &n(json!({"v": [2]}))).unwrap();
        assert_eq!(records, vec![ChangeRecord::change("/v/0", 1, n(json!(1)), n(json!(2)))]);
    }

    #[test]
    fn diff_numbers_compare_numerically() {
        assert!(diff(&n(json!({"v": 1})), &n(json!({"v": 1.0}))).unwrap().is_empty());
    }

    #[test]
    fn diff_up_the_tree_markers() {
        let a = n(json!({"p": {"q": {"r": 1}}, "s": {"t": 1}}));
        let b = n(json!({"p": {"q": {"r": 2}}, "s": {"t": 1}}));
        let options = DiffOptions::new().changes_up_the_tree(true);
        let records = diff_with(&a, &b, &options).unwrap();
        let summary: Vec<(&str, usize, bool)> = records
            .iter()
            .map(|r| (r.path.as_str(), r.depth, r.is_marker()))
            .collect();
        assert_eq!(
            summary,
            vec![("/p", 0, true), ("/p/q", 1, true), ("/p/q/r", 2, false)]
        );

        let plain = diff(&a, &b).unwrap();
        assert_eq!(plain.len(), 1);
        assert_eq!(plain[0].path, "/p/q/r");
    }

    #[test]
    fn diff_sorted_by_depth_then_path() {
        let a = n(json!({"z": {"y": 1}, "b": 1, "a": {"c": {"d": 1}}}));
        let b = n(json!({"z": {"y": 2}, "b": 2, "a": {"c": {"d": 2}}}));
        let paths: Vec<String> = diff(&a, &b).unwrap().into_iter().map(|r| r.path).collect();
        assert_eq!(paths, vec!["/b", "/z/y", "/a/c/d"]);
    }

    #[test]
    fn diff_scalar_root_against_composite() {
        let records = diff(&n(json!(1)), &n(json!({"a": 1}))).unwrap();
        assert_eq!(records, vec![ChangeRecord::add("/a", 0, n(json!(1)))]);
    }

    #[test]
    fn diff_cyclic_graphs_terminate() {
        let a = Composite::object();
        a.insert("self", Node::from(a.clone()));
        a.insert("v", n(json!(1)));
        let b = Composite::object();
        b.insert("self", Node::from(b.clone()));
        b.insert("v", n(json!(2)));

        let records = diff(&Node::from(a), &Node::from(b)).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].path, "/v");
    }
}
