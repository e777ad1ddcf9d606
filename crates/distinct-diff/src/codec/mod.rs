//! Change-list codecs.

pub mod json;

use distinct_graph::GraphError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CodecError {
    #[error("invalid change record: {0}")]
    InvalidRecord(String),
    #[error(transparent)]
    Graph(#[from] GraphError),
}
