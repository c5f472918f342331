use std::fmt;

#[cfg(feature = "visualize")]
use serde::{Deserialize, Serialize};

use super::Position;

/// First cell of a run together with the value the run holds.
///
/// The value covers every cell from `position` up to, but not including,
/// the next change-point's position (or the end of the grid).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(Serialize, Deserialize))]
pub struct ChangePoint<V> {
    /// Where the run starts
    pub position: Position,
    /// Value held by the run
    pub value: V,
}

impl<V> ChangePoint<V> {
    /// Pair a position with a value.
    pub fn new(position: Position, value: V) -> Self {
        Self { position, value }
    }
}

impl<V: fmt::Display> fmt::Display for ChangePoint<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.position, self.value)
    }
}
