//! Namespace Node
//!
//! Arena-backed directory tree nodes. A `Node` is a pure data holder;
//! all structural mutation goes through the operations in `ops.rs` so
//! invariant enforcement stays in one place.
//!
//! Nodes refer to each other by arena index. Ownership flows strictly
//! downward through `dirs`; the `parent` index exists only for upward
//! navigation and never implies ownership, so there are no reference
//! cycles to manage.

use indexmap::IndexMap;
use std::ops::{Index, IndexMut};

use super::types::BlobRef;

/// Index of a node within its session's arena.
///
/// Only valid while the node is alive; deleting a subtree invalidates the
/// ids of every node in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

/// One directory in a user's namespace.
#[derive(Debug, Clone)]
pub struct Node {
    /// Name, unique among siblings. The root is named "/".
    pub name: String,
    /// Back-reference for upward navigation; `None` only for the root.
    pub parent: Option<NodeId>,
    /// Child directories, insertion-ordered for deterministic listings.
    pub dirs: IndexMap<String, NodeId>,
    /// Files, mapping name to the opaque blob reference.
    pub files: IndexMap<String, BlobRef>,
}

impl Node {
    pub(crate) fn new(name: impl Into<String>, parent: Option<NodeId>) -> Self {
        Self {
            name: name.into(),
            parent,
            dirs: IndexMap::new(),
            files: IndexMap::new(),
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }
}

/// Slot arena holding every node of one session's tree.
///
/// Freed slots are recycled through a free list. Indexing with a stale
/// `NodeId` is a logic error and panics, like out-of-bounds indexing on a
/// `Vec`; the operations layer never lets a stale id escape.
#[derive(Debug, Clone, Default)]
pub struct NodeArena {
    slots: Vec<Option<Node>>,
    free: Vec<usize>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a node, reusing a freed slot when one is available.
    pub fn insert(&mut self, name: impl Into<String>, parent: Option<NodeId>) -> NodeId {
        let node = Node::new(name, parent);
        match self.free.pop() {
            Some(slot) => {
                self.slots[slot] = Some(node);
                NodeId(slot)
            }
            None => {
                self.slots.push(Some(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Free a node, returning it if it was alive.
    pub fn remove(&mut self, id: NodeId) -> Option<Node> {
        let node = self.slots.get_mut(id.0)?.take();
        if node.is_some() {
            self.free.push(id.0);
        }
        node
    }

    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.slots.get(id.0)?.as_ref()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.get(id).is_some()
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.slots.len() - self.free.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Index<NodeId> for NodeArena {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        match self.slots[id.0] {
            Some(ref node) => node,
            None => panic!("stale node id {:?}", id),
        }
    }
}

impl IndexMut<NodeId> for NodeArena {
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        match self.slots[id.0] {
            Some(ref mut node) => node,
            None => panic!("stale node id {:?}", id),
        }
    }
}
