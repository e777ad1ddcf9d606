use distinct_graph::{Composite, Node};

/// A member position: the composite that owns (or would own) the member,
/// and the member name. The member itself may be absent.
#[derive(Debug, Clone)]
pub struct Slot {
    pub container: Composite,
    pub key: String,
}

impl Slot {
    /// Current value of the member, if present.
    pub fn value(&self) -> Option<Node> {
        self.container.get(&self.key)
    }
}

/// Walk every segment but the last and return the slot it names.
///
/// `None` for the root path, or when an intermediate member is absent, null
/// or not a composite.
pub fn resolve_slot(root: &Node, path: &[String]) -> Option<Slot> {
    let (key, parents) = path.split_last()?;
    let mut current = root.clone();
    for segment in parents {
        current = current.get(segment)?;
    }
    let container = current.as_composite()?.clone();
    Some(Slot {
        container,
        key: key.clone(),
    })
}
