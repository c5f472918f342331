#![allow(dead_code)]

use std::fmt;

use rle_table::{CompressedTable, Cursor, Position, TableError, TwoDTable};

/// Uncompressed reference table: one slot per cell.
#[derive(Debug, Clone)]
pub struct DenseTable<V> {
    rows: usize,
    cols: usize,
    cells: Vec<V>,
}

impl<V: Clone> DenseTable<V> {
    pub fn new(rows: usize, cols: usize, default: V) -> Self {
        Self {
            rows,
            cols,
            cells: vec![default; rows * cols],
        }
    }
}

impl<V: Clone + PartialEq> TwoDTable<V> for DenseTable<V> {
    fn get_info(&mut self, row: usize, col: usize) -> Result<&V, TableError> {
        if row >= self.rows || col >= self.cols {
            return Err(TableError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(&self.cells[row * self.cols + col])
    }

    fn update_info(&mut self, row: usize, col: usize, value: V) -> Result<(), TableError> {
        if row < self.rows && col < self.cols {
            self.cells[row * self.cols + col] = value;
        }
        Ok(())
    }

    fn entire_table(&mut self) -> Result<String, TableError>
    where
        V: fmt::Display,
    {
        let mut out = String::new();
        for row in self.cells.chunks(self.cols) {
            for cell in row {
                out.push_str(&cell.to_string());
            }
            out.push('\n');
        }
        Ok(out)
    }
}

/// Change-points as `(row, col, value)` triples.
pub fn triples<V: Clone + PartialEq>(table: &mut CompressedTable<V>) -> Vec<(usize, usize, V)> {
    table
        .change_points()
        .expect("change-point snapshot")
        .into_iter()
        .map(|cp| (cp.position.row(), cp.position.col(), cp.value))
        .collect()
}

/// Check every structural invariant of a compressed table.
pub fn assert_table_invariants<V>(table: &mut CompressedTable<V>)
where
    V: Clone + PartialEq + fmt::Debug,
{
    let (rows, cols) = (table.rows(), table.cols());
    let points = table.change_points().expect("change-point snapshot");

    assert!(!points.is_empty(), "change-point list must never be empty");
    assert_eq!(
        points[0].position,
        Position::origin(rows, cols),
        "first change-point must sit at (0, 0)"
    );
    assert!(
        points.len() <= rows * cols,
        "{} change-points exceed {} cells",
        points.len(),
        rows * cols
    );

    for cp in &points {
        assert!(cp.position.in_bounds(), "{} lies outside the grid", cp.position);
    }
    for pair in points.windows(2) {
        assert!(
            pair[0].position < pair[1].position,
            "positions out of order: {} then {}",
            pair[0].position,
            pair[1].position
        );
        assert_ne!(
            pair[0].value, pair[1].value,
            "redundant change-points at {} and {}",
            pair[0].position, pair[1].position
        );
    }

    assert_cursor_defined(table.list().cursor(), table.list().is_empty());
}

/// An empty list never has its cursor on a node.
pub fn assert_cursor_defined(cursor: Cursor, empty: bool) {
    if empty {
        assert!(
            !matches!(cursor, Cursor::On(_)),
            "an empty list cannot have its cursor on a node"
        );
    }
}
