//! Change-list replay.

use distinct_graph::Node;
use distinct_path::{remove_path, set_path};
use tracing::debug;

use crate::types::{ChangeRecord, DiffType};

/// Receives a notification for every record that was applied.
pub trait EventSink {
    fn emit(&mut self, event: &str, payload: &ChangeRecord);
}

/// Records `(event, payload)` pairs in order.
impl EventSink for Vec<(String, ChangeRecord)> {
    fn emit(&mut self, event: &str, payload: &ChangeRecord) {
        self.push((event.to_string(), payload.clone()));
    }
}

/// Replay `changes` onto `root`, in list order.
///
/// `add` and `change` records assign their `new_value`; `delete` records
/// remove the member. Records without a value to assign (up-the-tree
/// markers) are skipped. A record whose container cannot be reached in
/// `root` is skipped as well, and the rest of the list is still applied, so
/// a target that drifted from the diffed graph receives a partial update.
///
/// Assigned composites are shared with the graph the diff was computed
/// from, not copied.
pub fn apply_diff(root: &Node, changes: &[ChangeRecord], mut sink: Option<&mut dyn EventSink>) {
    let mut applied = 0usize;
    for record in changes {
        let ok = match record.diff_type {
            DiffType::Add | DiffType::Change => match &record.new_value {
                Some(value) => set_path(root, &record.path, value.clone()),
                None => {
                    debug!(path = %record.path, diff_type = %record.diff_type, "no value to assign, skipping");
                    continue;
                }
            },
            DiffType::Delete => remove_path(root, &record.path),
        };
        if !ok {
            debug!(path = %record.path, diff_type = %record.diff_type, "target path not reachable, skipping");
            continue;
        }
        applied += 1;
        if let Some(sink) = sink.as_deref_mut() {
            sink.emit(&record.event_name(), record);
        }
    }
    debug!(applied, total = changes.len(), "change list replayed");
}
