use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// The graph references one of its own ancestors and has no tree form.
    #[error("cyclic graph at {path:?}")]
    Cycle { path: String },
}
