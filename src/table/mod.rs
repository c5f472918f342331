//! Run-length compressed two-dimensional table
//!
//! A fixed `R x C` grid that records only the cells where the value
//! changes in row-major order.

mod change_point;
mod compressed;
mod position;

use std::fmt;

use thiserror::Error;

use crate::list::ListError;

pub use change_point::ChangePoint;
pub use compressed::CompressedTable;
pub use position::Position;

/// Errors reported by table construction and reads.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TableError {
    /// A table needs at least one row and one column.
    #[error("table dimensions must be positive, got {rows}x{cols}")]
    EmptyDimensions {
        /// Requested rows
        rows: usize,
        /// Requested columns
        cols: usize,
    },

    /// Read of a cell outside the grid.
    #[error("cell ({row}, {col}) is outside the {rows}x{cols} table")]
    OutOfBounds {
        /// Requested row
        row: usize,
        /// Requested column
        col: usize,
        /// Table rows
        rows: usize,
        /// Table columns
        cols: usize,
    },

    /// Failure bubbling up from the change-point list.
    #[error("change-point list error: {0}")]
    List(#[from] ListError),
}

/// Point-addressable two-dimensional table.
pub trait TwoDTable<V> {
    /// Value stored at `(row, col)`.
    fn get_info(&mut self, row: usize, col: usize) -> Result<&V, TableError>;

    /// Store `value` at `(row, col)`; out-of-bounds writes are ignored.
    fn update_info(&mut self, row: usize, col: usize, value: V) -> Result<(), TableError>;

    /// Every row on its own line, cells concatenated.
    fn entire_table(&mut self) -> Result<String, TableError>
    where
        V: fmt::Display;
}
