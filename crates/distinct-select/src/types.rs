//! Selector AST and evaluation options.

use std::fmt;

/// One selector component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    /// Exact member of each value in context: `/name`
    Child(String),
    /// Member found anywhere below each value in context: `//name`
    Descendant(String),
}

impl Step {
    pub fn name(&self) -> &str {
        match self {
            Step::Child(name) | Step::Descendant(name) => name,
        }
    }

    pub fn is_descendant(&self) -> bool {
        matches!(self, Step::Descendant(_))
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Child(name) => write!(f, "/{name}"),
            Step::Descendant(name) => write!(f, "//{name}"),
        }
    }
}

/// Parsed selector. No steps selects the root itself.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selector {
    pub steps: Vec<Step>,
}

impl Selector {
    pub fn new(steps: Vec<Step>) -> Self {
        Self { steps }
    }

    pub fn root() -> Self {
        Self::default()
    }

    pub fn is_root(&self) -> bool {
        self.steps.is_empty()
    }
}

/// Canonical form: always `/`-prefixed, `""` for the root.
impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for step in &self.steps {
            write!(f, "{step}")?;
        }
        Ok(())
    }
}

/// Options for [`crate::select_with`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectOptions {
    /// Fail with `CircularReference` when a composite is selected twice.
    pub check_circular: bool,
}

impl SelectOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn check_circular(mut self, enabled: bool) -> Self {
        self.check_circular = enabled;
        self
    }
}
