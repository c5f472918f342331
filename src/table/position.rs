//! Row-major grid positions

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "visualize")]
use serde::{Deserialize, Serialize};

/// A cell `(row, col)` inside an `rows x cols` grid.
///
/// Equality, hashing and ordering consider only `(row, col)`; the grid
/// bounds ride along so that [`next`](Self::next) knows where rows wrap.
/// Ordering is row-major.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "visualize", derive(Serialize, Deserialize))]
pub struct Position {
    row: usize,
    col: usize,
    rows: usize,
    cols: usize,
}

impl Position {
    /// Create a position. Bounds are not checked here.
    pub fn new(row: usize, col: usize, rows: usize, cols: usize) -> Self {
        Self {
            row,
            col,
            rows,
            cols,
        }
    }

    /// The top-left cell of an `rows x cols` grid.
    pub fn origin(rows: usize, cols: usize) -> Self {
        Self::new(0, 0, rows, cols)
    }

    /// Row index.
    #[inline]
    pub fn row(&self) -> usize {
        self.row
    }

    /// Column index.
    #[inline]
    pub fn col(&self) -> usize {
        self.col
    }

    /// Whether the position lies inside its grid.
    pub fn in_bounds(&self) -> bool {
        self.row < self.rows && self.col < self.cols
    }

    /// Whether this is the bottom-right cell `(R-1, C-1)`.
    pub fn is_last(&self) -> bool {
        self.row + 1 == self.rows && self.col + 1 == self.cols
    }

    /// The position immediately after this one in row-major order.
    ///
    /// Returns `None` at the bottom-right cell.
    pub fn next(&self) -> Option<Self> {
        if self.is_last() {
            return None;
        }
        let (row, col) = if self.col + 1 < self.cols {
            (self.row, self.col + 1)
        } else {
            (self.row + 1, 0)
        };
        Some(Self { row, col, ..*self })
    }

    /// Strict row-major comparison: `self` comes before `other`.
    #[inline]
    pub fn less(&self, other: &Self) -> bool {
        self < other
    }
}

impl PartialEq for Position {
    fn eq(&self, other: &Self) -> bool {
        self.row == other.row && self.col == other.col
    }
}

impl Eq for Position {}

impl Hash for Position {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.row.hash(state);
        self.col.hash(state);
    }
}

impl Ord for Position {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}

impl PartialOrd for Position {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
