//! # Run-Length Compressed Tables
//!
//! A fixed-size grid whose cells hold values of one type, stored by
//! recording only the positions where the value changes when the grid is
//! scanned row by row.
//!
//! ## Layers
//!
//! 1. **Cursor list**: ordered doubly linked list over an arena of nodes,
//!    with a cursor that is on a node, off either end, or nowhere
//! 2. **Compressed table**: a cursor list of `(position, value)`
//!    change-points, kept free of redundant entries after every write
//!
//! ## Usage Example
//!
//! ```
//! use rle_table::CompressedTable;
//!
//! let mut table = CompressedTable::new(5, 6, 'x')?;
//! table.update_info(0, 1, 'a')?;
//! assert_eq!(*table.get_info(0, 1)?, 'a');
//! assert_eq!(table.len(), 3); // (0,0) x, (0,1) a, (0,2) x
//!
//! table.update_info(0, 1, 'x')?;
//! assert_eq!(table.len(), 1);
//! # Ok::<(), rle_table::TableError>(())
//! ```

#![warn(missing_docs, missing_debug_implementations)]

pub mod config; // Grid dimensions
pub mod list;   // Cursor-based doubly linked list
pub mod table;  // Change-point table on top of the list

// Re-exports for convenience
pub use config::TableConfig;
pub use list::{Cursor, CursorList, ListError, Side};
pub use table::{ChangePoint, CompressedTable, Position, TableError, TwoDTable};
