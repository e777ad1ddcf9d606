//! distinct - path selection, structural diff and diff replay for untyped
//! object graphs.
//!
//! Re-exports the workspace crates under one roof:
//!
//! - [`graph`]   - `Node`/`Composite` graph model
//! - [`select`]  - `/a//b` selectors
//! - [`path`]    - simple path get/set/remove
//! - [`diff`]    - change lists and replay
//! - [`cli`]     - string-in/string-out logic behind the `distinct` binary

pub use distinct_diff as diff;
pub use distinct_graph as graph;
pub use distinct_path as path;
pub use distinct_select as select;

pub mod cli;

pub use distinct_diff::{apply_diff, diff_with, ChangeRecord, DiffOptions, DiffType, EventSink};
pub use distinct_graph::{deep_clone, deep_equal, Composite, Node};
pub use distinct_path::{remove_path, set_path};
pub use distinct_select::{select_with, SelectOptions};
