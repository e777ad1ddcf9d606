//! Logic behind the `distinct` binary.
//!
//! Every command takes JSON text and returns JSON text, so it can be
//! exercised without spawning a process:
//! - `select` - run a selector against a document
//! - `diff`   - compute the change list between two documents
//! - `apply`  - replay a change list onto a document
//!
//! `diff` compares members by name, so an object replaced by an array with
//! the same members (for example `{}` by `[]`) yields no change and `apply`
//! keeps the old shape.

use distinct_diff::{
    apply_diff, diff_with, from_json_list, to_json_list, CodecError, DiffError, DiffOptions,
    EventSink,
};
use distinct_graph::{GraphError, Node};
use distinct_select::{select_with, SelectError, SelectOptions};
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

// ── Errors ────────────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum CliError {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Select(#[from] SelectError),
    #[error(transparent)]
    Diff(#[from] DiffError),
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error(transparent)]
    Graph(#[from] GraphError),
}

fn parse_document(json: &str) -> Result<Node, CliError> {
    let value: Value = serde_json::from_str(json)?;
    Ok(Node::from(value))
}

// ── select ────────────────────────────────────────────────────────────────

/// Run `selector` against a document and return the matches as a JSON array.
pub fn select_document(
    json: &str,
    selector: &str,
    options: &SelectOptions,
) -> Result<String, CliError> {
    let root = parse_document(json)?;
    debug!(selector, check_circular = options.check_circular, "select");
    let matches = select_with(&root, Some(selector), options)?
        .iter()
        .map(Node::to_json)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(serde_json::to_string(&Value::Array(matches))?)
}

// ── diff ──────────────────────────────────────────────────────────────────

/// Diff two documents and return the change list as a JSON array.
pub fn diff_documents(old: &str, new: &str, options: &DiffOptions) -> Result<String, CliError> {
    let old = parse_document(old)?;
    let new = parse_document(new)?;
    let changes = diff_with(&old, &new, options)?;
    debug!(changes = changes.len(), "diff");
    Ok(serde_json::to_string(&to_json_list(&changes)?)?)
}

// ── apply ─────────────────────────────────────────────────────────────────

/// Replay a JSON change list onto a document and return the result.
pub fn apply_changes(
    json: &str,
    changes: &str,
    sink: Option<&mut dyn EventSink>,
) -> Result<String, CliError> {
    let root = parse_document(json)?;
    let changes = from_json_list(&serde_json::from_str(changes)?)?;
    debug!(changes = changes.len(), notify = sink.is_some(), "apply");
    apply_diff(&root, &changes, sink);
    Ok(serde_json::to_string(&root.to_json()?)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_returns_json_array() {
        let out = select_document(r#"{"a":{"x":1},"b":{"x":2}}"#, "//x", &SelectOptions::new()).unwrap();
        assert_eq!(out, "[1,2]");
    }

    #[test]
    fn select_reports_invalid_selector() {
        let err = select_document("{}", "///", &SelectOptions::new()).unwrap_err();
        assert!(matches!(err, CliError::Select(SelectError::InvalidSelector { .. })));
    }

    #[test]
    fn diff_rejects_null_document() {
        let err = diff_documents("null", "{}", &DiffOptions::new()).unwrap_err();
        assert!(matches!(err, CliError::Diff(DiffError::NullOperand)));
    }

    #[test]
    fn object_to_array_keeps_old_shape() {
        let changes = diff_documents(r#"{"v":{}}"#, r#"{"v":[]}"#, &DiffOptions::new()).unwrap();
        assert_eq!(changes, "[]");
        assert_eq!(apply_changes(r#"{"v":{}}"#, &changes, None).unwrap(), r#"{"v":{}}"#);
    }

    #[test]
    fn bad_json_is_reported() {
        assert!(matches!(
            select_document("{", "/a", &SelectOptions::new()),
            Err(CliError::Json(_))
        ));
    }
}
