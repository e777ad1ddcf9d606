//! Selector evaluator.

use distinct_graph::Node;
use tracing::trace;

use crate::parser::SelectError;
use crate::types::{SelectOptions, Selector, Step};

/// Composites admitted into the selection so far, seeded with the root.
struct CircularGuard {
    seen: Vec<usize>,
}

impl CircularGuard {
    fn seeded(root: &Node) -> Self {
        let mut guard = Self { seen: Vec::new() };
        if let Some(c) = root.as_composite() {
            guard.seen.push(c.id());
        }
        guard
    }

    fn admit(&mut self, name: &str, value: &Node) -> Result<(), SelectError> {
        let Some(c) = value.as_composite() else {
            return Ok(());
        };
        if self.seen.contains(&c.id()) {
            return Err(SelectError::CircularReference {
                name: name.to_string(),
            });
        }
        self.seen.push(c.id());
        Ok(())
    }
}

/// Selector evaluator.
pub struct SelectorEval;

impl SelectorEval {
    /// Evaluate a parsed selector against a graph.
    ///
    /// Starts from `[root]` and applies each step to the whole context.
    pub fn eval(
        selector: &Selector,
        root: &Node,
        options: &SelectOptions,
    ) -> Result<Vec<Node>, SelectError> {
        let mut context = vec![root.clone()];
        let mut guard = options.check_circular.then(|| CircularGuard::seeded(root));

        for (index, step) in selector.steps.iter().enumerate() {
            trace!(index, step = %step, context = context.len(), "applying selector step");
            let mut next = Vec::new();
            match step {
                Step::Child(name) => {
                    for value in &context {
                        // Scalars and absent members contribute nothing.
                        if let Some(member) = value.get(name) {
                            if let Some(guard) = guard.as_mut() {
                                guard.admit(name, &member)?;
                            }
                            next.push(member);
                        }
                    }
                }
                Step::Descendant(name) => {
                    let mut on_path = Vec::new();
                    for value in &context {
                        Self::eval_descendant(value, name, &mut on_path, guard.as_mut(), &mut next)?;
                    }
                }
            }
            context = next;
        }

        Ok(context)
    }

    /// Pre-order search for members named `name`. A matched member is not
    /// searched further, and null members are not descended into.
    fn eval_descendant(
        value: &Node,
        name: &str,
        on_path: &mut Vec<usize>,
        mut guard: Option<&mut CircularGuard>,
        results: &mut Vec<Node>,
    ) -> Result<(), SelectError> {
        let Some(composite) = value.as_composite() else {
            return Ok(());
        };
        if on_path.contains(&composite.id()) {
            return match guard {
                Some(_) => Err(SelectError::CircularReference {
                    name: name.to_string(),
                }),
                None => Ok(()),
            };
        }

        on_path.push(composite.id());
        for (key, member) in composite.entries() {
            if key == name {
                if let Some(guard) = guard.as_deref_mut() {
                    guard.admit(name, &member)?;
                }
                results.push(member);
            } else if !member.is_null() {
                Self::eval_descendant(&member, name, on_path, guard.as_deref_mut(), results)?;
            }
        }
        on_path.pop();
        Ok(())
    }
}
