//! Selector parser.
//!
//! Grammar: an optional leading `/` is consumed; the rest is split on `/`.
//! An empty component marks the next component as a descendant step, so
//! `//x` and `/a//x` both search for `x` below the current context.

use std::str::FromStr;

use thiserror::Error;

use crate::types::{Selector, Step};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SelectError {
    #[error("selector cannot be null")]
    NullSelector,
    /// Two descendant markers in a row (`///`) or a trailing marker.
    #[error("invalid selector {selector:?}: '///' is not allowed and a selector cannot end with '/'")]
    InvalidSelector { selector: String },
    #[error("circular reference found at member {name:?}")]
    CircularReference { name: String },
}

/// Selector parser.
pub struct SelectorParser;

impl SelectorParser {
    /// Parse a selector string.
    pub fn parse(input: &str) -> Result<Selector, SelectError> {
        let rest = input.strip_prefix('/').unwrap_or(input);
        if rest.is_empty() {
            return Ok(Selector::root());
        }

        let mut steps = Vec::new();
        let mut descendant = false;
        for component in rest.split('/') {
            if component.is_empty() {
                if descendant {
                    return Err(Self::invalid(input));
                }
                descendant = true;
            } else if descendant {
                steps.push(Step::Descendant(component.to_string()));
                descendant = false;
            } else {
                steps.push(Step::Child(component.to_string()));
            }
        }
        if descendant {
            return Err(Self::invalid(input));
        }
        Ok(Selector::new(steps))
    }

    fn invalid(input: &str) -> SelectError {
        SelectError::InvalidSelector {
            selector: input.to_string(),
        }
    }
}

impl FromStr for Selector {
    type Err = SelectError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SelectorParser::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn child(name: &str) -> Step {
        Step::Child(name.to_string())
    }

    fn desc(name: &str) -> Step {
        Step::Descendant(name.to_string())
    }

    #[test]
    fn test_parse_root_forms() {
        assert!(SelectorParser::parse("").unwrap().is_root());
        assert!(SelectorParser::parse("/").unwrap().is_root());
    }

    #[test]
    fn test_parse_child_steps() {
        let s = SelectorParser::parse("/a/b").unwrap();
        assert_eq!(s.steps, vec![child("a"), child("b")]);
        assert_eq!(SelectorParser::parse("a/b").unwrap(), s);
    }

    #[test]
    fn test_parse_descendant_steps() {
        assert_eq!(SelectorParser::parse("//x").unwrap().steps, vec![desc("x")]);
        assert_eq!(
            SelectorParser::parse("/a//x/y").unwrap().steps,
            vec![child("a"), desc("x"), child("y")]
        );
    }

    #[test]
    fn test_parse_rejects_double_marker() {
        for bad in ["///", "//", "/a///b", "///x"] {
            assert!(
                matches!(SelectorParser::parse(bad), Err(SelectError::InvalidSelector { .. })),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_parse_rejects_trailing_marker() {
        assert!(SelectorParser::parse("/a/").is_err());
        assert!(SelectorParser::parse("//a/").is_err());
    }

    #[test]
    fn test_display_is_canonical() {
        let s: Selector = "a//b/c".parse().unwrap();
        assert_eq!(s.to_string(), "/a//b/c");
        assert_eq!(Selector::root().to_string(), "");
    }
}
