//! Graph node and composite handle.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use indexmap::IndexMap;
use serde_json::Value;

use crate::equal::scalar_eq;

/// Shape a composite came from. Only matters when converting back to JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositeKind {
    Object,
    Array,
}

struct Inner {
    kind: CompositeKind,
    members: RefCell<IndexMap<String, Node>>,
}

/// A shared node with named members, enumerated in insertion order.
///
/// Cloning a `Composite` clones the handle, not the members: both handles
/// refer to the same instance. Use [`crate::deep_clone`] for a fresh copy.
///
/// Self-referencing composites are reference cycles and are never freed.
#[derive(Clone)]
pub struct Composite {
    inner: Rc<Inner>,
}

impl Composite {
    pub fn new(kind: CompositeKind) -> Self {
        Self {
            inner: Rc::new(Inner {
                kind,
                members: RefCell::new(IndexMap::new()),
            }),
        }
    }

    pub fn object() -> Self {
        Self::new(CompositeKind::Object)
    }

    pub fn array() -> Self {
        Self::new(CompositeKind::Array)
    }

    pub fn kind(&self) -> CompositeKind {
        self.inner.kind
    }

    pub fn len(&self) -> usize {
        self.inner.members.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the member stored under `key`, if this instance owns one.
    pub fn get(&self, key: &str) -> Option<Node> {
        self.inner.members.borrow().get(key).cloned()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.inner.members.borrow().contains_key(key)
    }

    /// Creates or overwrites a member. An overwritten member keeps its
    /// enumeration position.
    pub fn insert(&self, key: impl Into<String>, value: Node) -> Option<Node> {
        self.inner.members.borrow_mut().insert(key.into(), value)
    }

    /// Removes a member, keeping the relative order of the others.
    pub fn remove(&self, key: &str) -> Option<Node> {
        self.inner.members.borrow_mut().shift_remove(key)
    }

    /// Appends a member named after the current length (`"0"`, `"1"`, ...).
    pub fn push(&self, value: Node) {
        let mut members = self.inner.members.borrow_mut();
        let key = members.len().to_string();
        members.insert(key, value);
    }

    pub fn keys(&self) -> Vec<String> {
        self.inner.members.borrow().keys().cloned().collect()
    }

    /// Snapshot of the members. Mutating the composite afterwards does not
    /// affect the returned vector.
    pub fn entries(&self) -> Vec<(String, Node)> {
        self.inner
            .members
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// True when both handles refer to the same instance.
    pub fn ptr_eq(&self, other: &Composite) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }

    /// Address of the instance, stable for its lifetime. Used as an identity
    /// key in memo tables.
    pub fn id(&self) -> usize {
        Rc::as_ptr(&self.inner) as *const () as usize
    }
}

impl fmt::Debug for Composite {
    // Members may point back at this composite, so only keys are printed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Composite")
            .field("kind", &self.kind())
            .field("keys", &self.keys())
            .finish()
    }
}

/// A value in an object graph.
///
/// `Scalar` never holds a JSON object or array; those become composites when
/// converted with `Node::from`.
#[derive(Debug, Clone)]
pub enum Node {
    Scalar(Value),
    Composite(Composite),
}

impl Node {
    pub fn null() -> Self {
        Node::Scalar(Value::Null)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Node::Scalar(Value::Null))
    }

    pub fn is_composite(&self) -> bool {
        matches!(self, Node::Composite(_))
    }

    pub fn as_composite(&self) -> Option<&Composite> {
        match self {
            Node::Composite(c) => Some(c),
            Node::Scalar(_) => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            Node::Scalar(v) => Some(v),
            Node::Composite(_) => None,
        }
    }

    /// Identity predicate: true only for two handles to one composite.
    /// Scalars have no identity and never match.
    pub fn same_instance(&self, other: &Node) -> bool {
        match (self, other) {
            (Node::Composite(a), Node::Composite(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// Member lookup; `None` for scalars and absent members.
    pub fn get(&self, key: &str) -> Option<Node> {
        self.as_composite().and_then(|c| c.get(key))
    }
}

/// Composites compare by identity, scalars by value.
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Node::Composite(a), Node::Composite(b)) => a.ptr_eq(b),
            (Node::Scalar(a), Node::Scalar(b)) => scalar_eq(a, b),
            _ => false,
        }
    }
}

impl From<Composite> for Node {
    fn from(composite: Composite) -> Self {
        Node::Composite(composite)
    }
}

impl Default for Node {
    fn default() -> Self {
        Node::null()
    }
}
