//! JSON codec for change records.
//!
//! A record is an object with `path`, `diffType` and `depth`, plus
//! `oldValue`/`newValue` when the record carries them.

use distinct_graph::Node;
use serde_json::{Map, Value};

use super::CodecError;
use crate::types::{ChangeRecord, DiffType};

// ── Serialization ─────────────────────────────────────────────────────────

/// Serialize a record. Fails if a carried value is a cyclic graph.
pub fn to_json(record: &ChangeRecord) -> Result<Value, CodecError> {
    let mut m = Map::new();
    m.insert("path".into(), Value::String(record.path.clone()));
    m.insert("diffType".into(), Value::String(record.diff_type.as_str().into()));
    m.insert("depth".into(), Value::from(record.depth));
    if let Some(old) = &record.old_value {
        m.insert("oldValue".into(), old.to_json()?);
    }
    if let Some(new) = &record.new_value {
        m.insert("newValue".into(), new.to_json()?);
    }
    Ok(Value::Object(m))
}

pub fn to_json_list(records: &[ChangeRecord]) -> Result<Value, CodecError> {
    records
        .iter()
        .map(to_json)
        .collect::<Result<Vec<_>, _>>()
        .map(Value::Array)
}

// ── Deserialization ───────────────────────────────────────────────────────

pub fn from_json(v: &Value) -> Result<ChangeRecord, CodecError> {
    let obj = v
        .as_object()
        .ok_or_else(|| CodecError::InvalidRecord("record must be an object".into()))?;
    let path = obj
        .get("path")
        .and_then(Value::as_str)
        .ok_or_else(|| CodecError::InvalidRecord("path must be a string".into()))?;
    let diff_type = obj
        .get("diffType")
        .and_then(Value::as_str)
        .ok_or_else(|| CodecError::InvalidRecord("diffType must be a string".into()))?;
    let diff_type = DiffType::from_str(diff_type)
        .ok_or_else(|| CodecError::InvalidRecord(format!("unknown diffType: {diff_type}")))?;
    let depth = obj
        .get("depth")
        .and_then(Value::as_u64)
        .ok_or_else(|| CodecError::InvalidRecord("depth must be a non-negative integer".into()))?;

    Ok(ChangeRecord {
        path: path.to_string(),
        diff_type,
        depth: depth as usize,
        old_value: obj.get("oldValue").cloned().map(Node::from),
        new_value: obj.get("newValue").cloned().map(Node::from),
    })
}

pub fn from_json_list(v: &Value) -> Result<Vec<ChangeRecord>, CodecError> {
    let arr = v
        .as_array()
        .ok_or_else(|| CodecError::InvalidRecord("change list must be an array".into()))?;
    arr.iter().map(from_json).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use distinct_graph::Composite;
    use serde_json::json;

    #[test]
    fn encode_omits_absent_values() {
        let rec = ChangeRecord::add("/tags/b", 1, Node::from(json!(2)));
        assert_eq!(
            to_json(&rec).unwrap(),
            json!({"path": "/tags/b", "diffType": "add", "depth": 1, "newValue": 2})
        );
        assert_eq!(
            to_json(&ChangeRecord::marker("/p", 0)).unwrap(),
            json!({"path": "/p", "diffType": "change", "depth": 0})
        );
    }

    #[test]
    fn decode_leaf_change() {
        let rec = from_json(&json!({
            "path": "/name", "diffType": "change", "depth": 0,
            "oldValue": "x", "newValue": {"k": [1]}
        }))
        .unwrap();
        assert_eq!(rec.diff_type, DiffType::Change);
        assert_eq!(rec.old_value, Some(Node::from(json!("x"))));
        assert_eq!(rec.new_value.unwrap().to_json().unwrap(), json!({"k": [1]}));
    }

    #[test]
    fn decode_keeps_explicit_null_value() {
        let rec = from_json(&json!({"path": "/v", "diffType": "add", "depth": 0, "newValue": null})).unwrap();
        assert_eq!(rec.new_value, Some(Node::null()));
    }

    #[test]
    fn decode_rejects_bad_records() {
        for bad in [
            json!([]),
            json!({"diffType": "add", "depth": 0}),
            json!({"path": "/a", "diffType": "replace", "depth": 0}),
            json!({"path": "/a", "diffType": "add", "depth": -1}),
        ] {
            assert!(matches!(from_json(&bad), Err(CodecError::InvalidRecord(_))), "{bad}");
        }
        assert!(from_json_list(&json!({})).is_err());
    }

    #[test]
    fn encode_cyclic_value_fails() {
        let c = Composite::object();
        c.insert("self", Node::from(c.clone()));
        let rec = ChangeRecord::add("/c", 0, Node::from(c));
        assert!(matches!(to_json(&rec), Err(CodecError::Graph(_))));
    }
}
