use std::fmt;

use super::arena::{NodeArena, NodeId};
use super::{ListError, Side};

/// Where the cursor of a [`CursorList`] currently rests.
///
/// `OffLeft` and `OffRight` act as virtual sentinels one step before the
/// head and one step past the tail. `None` means the cursor references no
/// node and no sentinel: the state of a fresh or cleared list, and the state
/// left behind after removing the tail through the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cursor {
    /// Not on any node and not past either edge.
    #[default]
    None,
    /// One step before the head.
    OffLeft,
    /// One step past the tail.
    OffRight,
    /// On a live node.
    On(NodeId),
}

/// Ordered doubly linked list with a movable cursor.
///
/// All positional operations act relative to the cursor, and every
/// mutating operation leaves the cursor in a defined state: an `On` cursor
/// never references a removed node.
///
/// Insertion methods accept `impl Into<Option<E>>`. A plain `E` is stored
/// as is; `None` is rejected with [`ListError::NullValue`] so the list never
/// holds an absent element.
#[derive(Debug, Clone)]
pub struct CursorList<E> {
    arena: NodeArena<E>,
    head: Option<NodeId>,
    tail: Option<NodeId>,
    cursor: Cursor,
}

impl<E> Default for CursorList<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> CursorList<E> {
    /// Create an empty list with the cursor in the `None` state.
    pub fn new() -> Self {
        Self {
            arena: NodeArena::new(),
            head: None,
            tail: None,
            cursor: Cursor::None,
        }
    }

    /// Number of nodes in the list.
    pub fn len(&self) -> usize {
        self.arena.live()
    }

    /// Returns `true` when the list holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current cursor state.
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// Whether the cursor sits before the head.
    pub fn is_off_left(&self) -> bool {
        self.cursor == Cursor::OffLeft
    }

    /// Whether the cursor sits past the tail.
    pub fn is_off_right(&self) -> bool {
        self.cursor == Cursor::OffRight
    }

    /// Whether the cursor is off the list.
    ///
    /// True past either edge, and also in the `None` state while the list
    /// still has nodes (after the tail was removed through the cursor). A
    /// fresh or cleared list is not considered off.
    pub fn is_off(&self) -> bool {
        match self.cursor {
            Cursor::On(_) => false,
            Cursor::OffLeft | Cursor::OffRight => true,
            Cursor::None => !self.is_empty(),
        }
    }

    /// Move the cursor to the head.
    pub fn first(&mut self) -> Result<(), ListError> {
        let head = self.head.ok_or(ListError::EmptyList {
            action: "cannot move current to head",
        })?;
        self.cursor = Cursor::On(head);
        Ok(())
    }

    /// Move the cursor to the tail.
    pub fn last(&mut self) -> Result<(), ListError> {
        let tail = self.tail.ok_or(ListError::EmptyList {
            action: "cannot move current to tail",
        })?;
        self.cursor = Cursor::On(tail);
        Ok(())
    }

    /// Advance the cursor one step towards the tail.
    ///
    /// From `OffLeft` the cursor lands on the head; from the tail it goes
    /// `OffRight`.
    pub fn next(&mut self) -> Result<(), ListError> {
        let head = self.head.ok_or(ListError::EmptyList {
            action: "cannot move current to the right",
        })?;
        self.cursor = match self.cursor {
            Cursor::OffRight => return Err(ListError::OffEnd(Side::Right)),
            Cursor::None => return Err(ListError::OffList),
            Cursor::OffLeft => Cursor::On(head),
            Cursor::On(id) => match self.arena.get(id).next {
                Some(next) => Cursor::On(next),
                None => Cursor::OffRight,
            },
        };
        Ok(())
    }

    /// Retreat the cursor one step towards the head.
    ///
    /// From `OffRight` the cursor lands on the tail; from the head it goes
    /// `OffLeft`.
    pub fn back(&mut self) -> Result<(), ListError> {
        let tail = self.tail.ok_or(ListError::EmptyList {
            action: "cannot move current to the left",
        })?;
        self.cursor = match self.cursor {
            Cursor::OffLeft => return Err(ListError::OffEnd(Side::Left)),
            Cursor::None => return Err(ListError::OffList),
            Cursor::OffRight => Cursor::On(tail),
            Cursor::On(id) => match self.arena.get(id).prev {
                Some(prev) => Cursor::On(prev),
                None => Cursor::OffLeft,
            },
        };
        Ok(())
    }

    /// Element under the cursor.
    pub fn current_value(&self) -> Result<&E, ListError> {
        let id = self.current_node()?;
        Ok(&self.arena.get(id).value)
    }

    /// Mutable access to the element under the cursor.
    pub fn current_value_mut(&mut self) -> Result<&mut E, ListError> {
        let id = self.current_node()?;
        Ok(&mut self.arena.get_mut(id).value)
    }

    /// Move the cursor to the head and return its element.
    pub fn get_first(&mut self) -> Result<&E, ListError> {
        self.first().map_err(|_| ListError::EmptyList {
            action: "current points to null",
        })?;
        self.current_value()
    }

    /// Move the cursor to the tail and return its element.
    pub fn get_last(&mut self) -> Result<&E, ListError> {
        self.last().map_err(|_| ListError::EmptyList {
            action: "current points to null",
        })?;
        self.current_value()
    }

    /// Insert a new head and put the cursor on it.
    pub fn add_first(&mut self, value: impl Into<Option<E>>) -> Result<(), ListError> {
        let value = value.into().ok_or(ListError::NullValue)?;
        let id = self.arena.alloc(value);
        match self.head {
            Some(old_head) => {
                self.arena.get_mut(id).next = Some(old_head);
                self.arena.get_mut(old_head).prev = Some(id);
            }
            None => self.tail = Some(id),
        }
        self.head = Some(id);
        self.cursor = Cursor::On(id);
        Ok(())
    }

    /// Append a new tail and put the cursor on it.
    pub fn add_last(&mut self, value: impl Into<Option<E>>) -> Result<(), ListError> {
        let value = value.into().ok_or(ListError::NullValue)?;
        let id = self.arena.alloc(value);
        match self.tail {
            Some(old_tail) => {
                self.arena.get_mut(id).prev = Some(old_tail);
                self.arena.get_mut(old_tail).next = Some(id);
            }
            None => self.head = Some(id),
        }
        self.tail = Some(id);
        self.cursor = Cursor::On(id);
        Ok(())
    }

    /// Insert a node right after the cursor and move the cursor onto it.
    pub fn add_after_current(&mut self, value: impl Into<Option<E>>) -> Result<(), ListError> {
        let value = value.into().ok_or(ListError::NullValue)?;
        let anchor = self.current_node()?;

        let successor = self.arena.get(anchor).next;
        let id = self.arena.alloc(value);
        {
            let node = self.arena.get_mut(id);
            node.prev = Some(anchor);
            node.next = successor;
        }
        self.arena.get_mut(anchor).next = Some(id);
        match successor {
            Some(succ) => self.arena.get_mut(succ).prev = Some(id),
            None => self.tail = Some(id),
        }
        self.cursor = Cursor::On(id);
        Ok(())
    }

    /// Remove the head and return its element.
    ///
    /// The cursor moves to the new head, or `OffLeft` if the list is now
    /// empty.
    pub fn remove_first(&mut self) -> Result<E, ListError> {
        let head = self.head.ok_or(ListError::EmptyList {
            action: "current points to null",
        })?;
        let value = self.unlink(head);
        self.cursor = match self.head {
            Some(new_head) => Cursor::On(new_head),
            None => Cursor::OffLeft,
        };
        Ok(value)
    }

    /// Remove the tail and return its element. The cursor goes `OffRight`.
    pub fn remove_last(&mut self) -> Result<E, ListError> {
        let tail = self.tail.ok_or(ListError::EmptyList {
            action: "current points to null",
        })?;
        let value = self.unlink(tail);
        self.cursor = Cursor::OffRight;
        Ok(value)
    }

    /// Remove the node under the cursor and return its element.
    ///
    /// The cursor moves to the successor. Removing the tail leaves the
    /// cursor in the `None` state, which [`is_off`](Self::is_off) reports as
    /// off while nodes remain.
    pub fn remove_current(&mut self) -> Result<E, ListError> {
        let id = self.current_node()?;
        let successor = self.arena.get(id).next;
        let value = self.unlink(id);
        self.cursor = match successor {
            Some(succ) => Cursor::On(succ),
            None => Cursor::None,
        };
        Ok(value)
    }

    /// Drop every node and reset the cursor to `None`.
    pub fn clear(&mut self) {
        self.arena.clear();
        self.head = None;
        self.tail = None;
        self.cursor = Cursor::None;
    }

    fn current_node(&self) -> Result<NodeId, ListError> {
        if self.is_empty() {
            return Err(ListError::EmptyList {
                action: "current points to null",
            });
        }
        match self.cursor {
            Cursor::On(id) => {
                debug_assert!(self.arena.contains(id), "cursor references a freed node");
                Ok(id)
            }
            _ => Err(ListError::OffList),
        }
    }

    /// Splice `id` out of the chain and free it. Leaves the cursor alone.
    fn unlink(&mut self, id: NodeId) -> E {
        let (prev, next) = {
            let node = self.arena.get(id);
            (node.prev, node.next)
        };
        match prev {
            Some(p) => self.arena.get_mut(p).next = next,
            None => self.head = next,
        }
        match next {
            Some(n) => self.arena.get_mut(n).prev = prev,
            None => self.tail = prev,
        }
        self.arena.free(id)
    }
}

impl<E: fmt::Display> fmt::Display for CursorList<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "CursorList:")?;
        let mut finger = self.head;
        while let Some(id) = finger {
            let node = self.arena.get(id);
            writeln!(f, "{}", node.value)?;
            finger = node.next;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list_of(values: &[i32]) -> CursorList<i32> {
        let mut list = CursorList::new();
        for &v in values {
            list.add_last(v).unwrap();
        }
        list
    }

    #[test]
    fn fresh_list_has_no_cursor() {
        let list: CursorList<i32> = CursorList::new();
        assert_eq!(list.cursor(), Cursor::None);
        assert!(list.is_empty());
        assert!(!list.is_off());
    }

    #[test]
    fn links_stay_consistent_after_middle_insert() {
        let mut list = list_of(&[1, 3]);
        list.first().unwrap();
        list.add_after_current(2).unwrap();
        assert_eq!(list.to_string(), "CursorList:\n1\n2\n3\n");

        list.last().unwrap();
        list.back().unwrap();
        assert_eq!(*list.current_value().unwrap(), 2);
        list.back().unwrap();
        assert_eq!(*list.current_value().unwrap(), 1);
    }

    #[test]
    fn add_after_tail_moves_tail() {
        let mut list = list_of(&[1]);
        list.add_after_current(2).unwrap();
        assert_eq!(*list.get_last().unwrap(), 2);
        list.next().unwrap();
        assert!(list.is_off_right());
    }

    #[test]
    fn remove_current_only_node_empties_list() {
        let mut list = list_of(&[7]);
        assert_eq!(list.remove_current().unwrap(), 7);
        assert!(list.is_empty());
        assert_eq!(list.cursor(), Cursor::None);
        assert!(!list.is_off());
        assert!(list.first().is_err());
    }

    #[test]
    fn motion_from_none_state_is_rejected() {
        let mut list = list_of(&[1, 2]);
        list.remove_current().unwrap();
        assert_eq!(list.cursor(), Cursor::None);
        assert_eq!(list.next(), Err(ListError::OffList));
        assert_eq!(list.back(), Err(ListError::OffList));
        assert_eq!(list.cursor(), Cursor::None);
    }

    #[test]
    fn current_value_mut_edits_in_place() {
        let mut list = list_of(&[1, 2, 3]);
        list.first().unwrap();
        list.next().unwrap();
        *list.current_value_mut().unwrap() = 20;
        assert_eq!(list.to_string(), "CursorList:\n1\n20\n3\n");
    }

    #[test]
    fn display_does_not_move_cursor() {
        let mut list = list_of(&[4, 5]);
        list.first().unwrap();
        let _ = list.to_string();
        assert_eq!(*list.current_value().unwrap(), 4);
    }
}
