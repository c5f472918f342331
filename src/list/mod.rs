//! Cursor-based doubly linked list
//!
//! Storage substrate for the compressed table: an ordered list of nodes
//! held in a slot arena, with a cursor that is either on a node, one step
//! off either end, or nowhere.

mod arena;
mod cursor_list;

use std::fmt;

use thiserror::Error;

pub use arena::NodeId;
pub use cursor_list::{Cursor, CursorList};

/// Edge of the list the cursor tried to move past.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Before the head.
    Left,
    /// After the tail.
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Precondition violations reported by [`CursorList`].
///
/// These are programmer errors. A call that fails leaves the list and its
/// cursor exactly as they were.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ListError {
    /// The operation needs at least one node.
    #[error("empty list, {action}")]
    EmptyList {
        /// What the caller was trying to do.
        action: &'static str,
    },

    /// The cursor is already past the edge in the direction of motion.
    #[error("current is already off {0}, cannot move it further")]
    OffEnd(Side),

    /// The operation needs the cursor on a node.
    #[error("current is off list")]
    OffList,

    /// An absent value was offered for insertion.
    #[error("cannot create a node that contains the null value")]
    NullValue,
}
