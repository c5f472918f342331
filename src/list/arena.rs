//! Node storage for the cursor list
//!
//! Nodes live in a `Vec` of slots and are addressed by `NodeId` handles.
//! Prev/next links are handles, never references, so removing a node
//! cannot leave a dangling pointer behind. Vacated slots are threaded
//! onto a free chain and reused by later inserts.

/// Stable handle to a node held in a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Slot index backing this handle.
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single list node: one element plus its neighbour links.
#[derive(Debug, Clone)]
pub(crate) struct Node<E> {
    pub(crate) value: E,
    pub(crate) prev: Option<NodeId>,
    pub(crate) next: Option<NodeId>,
}

#[derive(Debug, Clone)]
enum Slot<E> {
    Occupied(Node<E>),
    Vacant { next_free: Option<usize> },
}

/// Slot arena owning every node of one list.
#[derive(Debug, Clone)]
pub(crate) struct NodeArena<E> {
    slots: Vec<Slot<E>>,
    free_head: Option<usize>,
    live: usize,
}

impl<E> NodeArena<E> {
    pub(crate) fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            live: 0,
        }
    }

    /// Number of occupied slots.
    pub(crate) fn live(&self) -> usize {
        self.live
    }

    /// Store a detached node and return its handle.
    pub(crate) fn alloc(&mut self, value: E) -> NodeId {
        let node = Node {
            value,
            prev: None,
            next: None,
        };
        self.live += 1;

        match self.free_head {
            Some(idx) => {
                if let Slot::Vacant { next_free } = self.slots[idx] {
                    self.free_head = next_free;
                }
                self.slots[idx] = Slot::Occupied(node);
                NodeId(idx)
            }
            None => {
                self.slots.push(Slot::Occupied(node));
                NodeId(self.slots.len() - 1)
            }
        }
    }

    /// Release a node, handing back its element.
    ///
    /// # Panics
    /// Panics if `id` does not refer to an occupied slot.
    pub(crate) fn free(&mut self, id: NodeId) -> E {
        let vacant = Slot::Vacant {
            next_free: self.free_head,
        };
        match std::mem::replace(&mut self.slots[id.0], vacant) {
            Slot::Occupied(node) => {
                self.free_head = Some(id.0);
                self.live -= 1;
                node.value
            }
            Slot::Vacant { next_free } => {
                // Put the chain back the way it was before reporting.
                self.slots[id.0] = Slot::Vacant { next_free };
                panic!("node {} freed twice", id.0);
            }
        }
    }

    pub(crate) fn get(&self, id: NodeId) -> &Node<E> {
        match &self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("stale node handle {}", id.0),
        }
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> &mut Node<E> {
        match &mut self.slots[id.0] {
            Slot::Occupied(node) => node,
            Slot::Vacant { .. } => panic!("stale node handle {}", id.0),
        }
    }

    /// Whether `id` currently refers to a live node.
    pub(crate) fn contains(&self, id: NodeId) -> bool {
        matches!(self.slots.get(id.0), Some(Slot::Occupied(_)))
    }

    /// Drop every node and forget all slots.
    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.live = 0;
    }
}
