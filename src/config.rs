//! Table configuration
//!
//! Grid dimensions, validated once at construction time.

#[cfg(feature = "visualize")]
use serde::{Deserialize, Serialize};

use crate::table::TableError;

/// Dimensions of a compressed table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "visualize", derive(Serialize, Deserialize))]
pub struct TableConfig {
    /// Number of rows R
    pub rows: usize,

    /// Number of columns C
    pub cols: usize,
}

impl TableConfig {
    /// Create a configuration for an `rows x cols` grid.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Reject grids with no cells.
    pub fn validate(&self) -> Result<(), TableError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(TableError::EmptyDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    /// Whether `(row, col)` addresses a cell of the grid.
    #[inline]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Total number of cells R·C, which also bounds the change-point count.
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Coordinates of the bottom-right cell `(R-1, C-1)`.
    pub fn last_cell(&self) -> (usize, usize) {
        (self.rows.saturating_sub(1), self.cols.saturating_sub(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(TableConfig::new(0, 4).validate().is_err());
        assert!(TableConfig::new(4, 0).validate().is_err());
        assert!(TableConfig::new(1, 1).validate().is_ok());
    }

    #[test]
    fn test_contains_and_last_cell() {
        let config = TableConfig::new(5, 6);
        assert!(config.contains(4, 5));
        assert!(!config.contains(5, 0));
        assert!(!config.contains(0, 6));
        assert_eq!(config.last_cell(), (4, 5));
        assert_eq!(config.cell_count(), 30);
    }
}
