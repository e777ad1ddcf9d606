//! Path selectors over untyped object graphs.
//!
//! A selector is a `/`-separated list of member names. `/name` selects a
//! direct member of every value in the running context; `//name` selects
//! every member called `name` anywhere below it. There are no parent
//! selectors and no predicates.
//!
//! # Example
//!
//! ```
//! use distinct_graph::Node;
//! use distinct_select::select;
//! use serde_json::json;
//!
//! let doc = Node::from(json!({"a": {"x": 1}, "b": {"x": 2}}));
//!
//! let xs = select(&doc, "//x").unwrap();
//! assert_eq!(xs, vec![Node::from(json!(1)), Node::from(json!(2))]);
//! ```

mod types;
pub use types::*;

mod parser;
pub use parser::{SelectError, SelectorParser};

mod eval;
pub use eval::SelectorEval;

use distinct_graph::Node;

/// Select from `root` with default options.
pub fn select(root: &Node, selector: &str) -> Result<Vec<Node>, SelectError> {
    select_with(root, Some(selector), &SelectOptions::default())
}

/// Select from `root`, failing with `NullSelector` when no selector is given.
///
/// The returned values share composites with `root`; mutating the graph
/// afterwards is visible through them.
pub fn select_with(
    root: &Node,
    selector: Option<&str>,
    options: &SelectOptions,
) -> Result<Vec<Node>, SelectError> {
    let selector = selector.ok_or(SelectError::NullSelector)?;
    let parsed = SelectorParser::parse(selector)?;
    SelectorEval::eval(&parsed, root, options)
}
