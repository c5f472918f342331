//! Run-length compressed table
//!
//! Only the cells where the value changes (scanning row-major) are stored,
//! as a cursor list of [`ChangePoint`]s. Between writes the list satisfies:
//!
//! - it is never empty and starts at `(0, 0)`
//! - positions strictly increase
//! - adjacent change-points hold different values
//! - every position lies inside the grid

use std::fmt;

use tracing::{debug, trace};

use super::{ChangePoint, Position, TableError, TwoDTable};
use crate::config::TableConfig;
use crate::list::CursorList;

/// Fixed-size `rows x cols` grid stored as runs of equal values.
#[derive(Debug, Clone)]
pub struct CompressedTable<V> {
    config: TableConfig,
    list: CursorList<ChangePoint<V>>,
}

impl<V: Clone + PartialEq> CompressedTable<V> {
    /// Create a `rows x cols` table with every cell set to `default`.
    pub fn new(rows: usize, cols: usize, default: V) -> Result<Self, TableError> {
        Self::with_config(TableConfig::new(rows, cols), default)
    }

    /// Create a table from a validated configuration.
    pub fn with_config(config: TableConfig, default: V) -> Result<Self, TableError> {
        config.validate()?;
        let mut list = CursorList::new();
        list.add_first(ChangePoint::new(
            Position::origin(config.rows, config.cols),
            default,
        ))?;
        Ok(Self { config, list })
    }

    /// Value stored at `(row, col)`.
    ///
    /// Reads outside the grid are rejected with [`TableError::OutOfBounds`].
    pub fn get_info(&mut self, row: usize, col: usize) -> Result<&V, TableError> {
        if !self.config.contains(row, col) {
            return Err(TableError::OutOfBounds {
                row,
                col,
                rows: self.config.rows,
                cols: self.config.cols,
            });
        }
        let target = self.position(row, col);
        self.find(&target)?;
        Ok(&self.list.current_value()?.value)
    }

    /// Write `value` at `(row, col)`.
    ///
    /// Writes outside the grid are ignored. Afterwards the change-point list
    /// has no two adjacent entries with equal values.
    pub fn update_info(&mut self, row: usize, col: usize, value: V) -> Result<(), TableError> {
        if !self.config.contains(row, col) {
            debug!(
                row,
                col,
                rows = self.config.rows,
                cols = self.config.cols,
                "ignoring out-of-bounds write"
            );
            return Ok(());
        }

        let target = self.position(row, col);
        self.find(&target)?;

        let current = self.list.current_value()?;
        if current.value == value {
            return Ok(());
        }
        let old_value = current.value.clone();

        if current.position == target {
            self.list.current_value_mut()?.value = value.clone();
        } else {
            self.list
                .add_after_current(ChangePoint::new(target, value.clone()))?;
        }

        // Keep the old value running from the following cell onward.
        if let Some(after) = target.next() {
            self.list.next()?;
            let needs_stopper =
                self.list.is_off() || self.list.current_value()?.position != after;
            if needs_stopper {
                self.list.back()?;
                self.list
                    .add_after_current(ChangePoint::new(after, old_value))?;
                trace!(row = after.row(), col = after.col(), "inserted stopper");
            }
        }

        self.merge_neighbours(&target, &value)
    }

    /// Expanded grid: one line per row, each the concatenation of its cells.
    pub fn entire_table(&mut self) -> Result<String, TableError>
    where
        V: fmt::Display,
    {
        let points = self.change_points()?;
        let mut out = String::with_capacity(self.config.cell_count() + self.config.rows);
        let mut run = 0;

        for row in 0..self.config.rows {
            for col in 0..self.config.cols {
                let here = self.position(row, col);
                while run + 1 < points.len() && points[run + 1].position <= here {
                    run += 1;
                }
                out.push_str(&points[run].value.to_string());
            }
            out.push('\n');
        }
        Ok(out)
    }

    /// Snapshot of the change-point list in row-major order.
    pub fn change_points(&mut self) -> Result<Vec<ChangePoint<V>>, TableError> {
        let mut points = Vec::with_capacity(self.list.len());
        self.list.first()?;
        while !self.list.is_off() {
            points.push(self.list.current_value()?.clone());
            self.list.next()?;
        }
        Ok(points)
    }

    /// Put the cursor on the change-point governing `target`: the greatest
    /// position that is not after it.
    fn find(&mut self, target: &Position) -> Result<(), TableError> {
        self.list.first()?;
        loop {
            let position = self.list.current_value()?.position;
            if target.less(&position) {
                break;
            }
            self.list.next()?;
            if self.list.is_off() {
                break;
            }
        }
        // Stepped one past the governing change-point (or off the tail).
        self.list.back()?;
        let landed = self.list.current_value()?.position;
        trace!(row = target.row(), col = target.col(), %landed, "find");
        Ok(())
    }

    /// Drop change-points around `target` that now repeat `value`.
    fn merge_neighbours(&mut self, target: &Position, value: &V) -> Result<(), TableError> {
        self.find(target)?;

        self.list.back()?;
        let predecessor_matches = if self.list.is_off() {
            None
        } else {
            Some(self.list.current_value()?.value == *value)
        };
        self.list.next()?;

        self.list.next()?;
        let successor_matches = if self.list.is_off() {
            None
        } else {
            Some(self.list.current_value()?.value == *value)
        };
        self.list.back()?;

        match (predecessor_matches, successor_matches) {
            (Some(true), Some(true)) => {
                // Target and successor both collapse into the predecessor.
                self.list.remove_current()?;
                self.list.remove_current()?;
                trace!(row = target.row(), col = target.col(), "merged both neighbours");
            }
            (Some(true), _) => {
                self.list.remove_current()?;
                trace!(row = target.row(), col = target.col(), "merged into predecessor");
            }
            (_, Some(true)) => {
                self.list.next()?;
                self.list.remove_current()?;
                trace!(row = target.row(), col = target.col(), "absorbed successor");
            }
            _ => {}
        }
        Ok(())
    }
}

impl<V> CompressedTable<V> {
    /// Number of rows R.
    pub fn rows(&self) -> usize {
        self.config.rows
    }

    /// Number of columns C.
    pub fn cols(&self) -> usize {
        self.config.cols
    }

    /// Dimensions the table was built with.
    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Number of change-points currently stored.
    pub fn len(&self) -> usize {
        self.list.len()
    }

    /// Always `false`: a table holds at least one change-point.
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Underlying change-point list, for inspection.
    pub fn list(&self) -> &CursorList<ChangePoint<V>> {
        &self.list
    }

    fn position(&self, row: usize, col: usize) -> Position {
        Position::new(row, col, self.config.rows, self.config.cols)
    }
}

impl<V: Clone + PartialEq> TwoDTable<V> for CompressedTable<V> {
    fn get_info(&mut self, row: usize, col: usize) -> Result<&V, TableError> {
        CompressedTable::get_info(self, row, col)
    }

    fn update_info(&mut self, row: usize, col: usize, value: V) -> Result<(), TableError> {
        CompressedTable::update_info(self, row, col, value)
    }

    fn entire_table(&mut self) -> Result<String, TableError>
    where
        V: fmt::Display,
    {
        CompressedTable::entire_table(self)
    }
}

impl<V: fmt::Display> fmt::Display for CompressedTable<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(table: &mut CompressedTable<char>) -> Vec<(usize, usize, char)> {
        table
            .change_points()
            .unwrap()
            .into_iter()
            .map(|cp| (cp.position.row(), cp.position.col(), cp.value))
            .collect()
    }

    #[test]
    fn test_new_table_has_single_change_point() {
        let mut table = CompressedTable::new(5, 6, 'x').unwrap();
        assert_eq!(points(&mut table), vec![(0, 0, 'x')]);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_zero_sized_table_rejected() {
        assert!(matches!(
            CompressedTable::new(0, 3, 'x'),
            Err(TableError::EmptyDimensions { rows: 0, cols: 3 })
        ));
    }

    #[test]
    fn test_find_lands_on_governing_change_point() {
        let mut table = CompressedTable::new(3, 3, 'x').unwrap();
        table.update_info(1, 1, 'a').unwrap();
        // [(0,0) x, (1,1) a, (1,2) x]
        let target = table.position(1, 0);
        table.find(&target).unwrap();
        assert_eq!(table.list.current_value().unwrap().position, table.position(0, 0));

        let target = table.position(1, 1);
        table.find(&target).unwrap();
        assert_eq!(table.list.current_value().unwrap().value, 'a');

        let target = table.position(2, 2);
        table.find(&target).unwrap();
        assert_eq!(table.list.current_value().unwrap().position, table.position(1, 2));
    }

    #[test]
    fn test_overwrite_in_place_keeps_stopper() {
        let mut table = CompressedTable::new(2, 3, 'x').unwrap();
        table.update_info(0, 1, 'a').unwrap();
        table.update_info(0, 1, 'b').unwrap();
        assert_eq!(points(&mut table), vec![(0, 0, 'x'), (0, 1, 'b'), (0, 2, 'x')]);
    }

    #[test]
    fn test_write_at_origin_absorbs_successor() {
        let mut table = CompressedTable::new(2, 2, 'x').unwrap();
        table.update_info(0, 1, 'a').unwrap();
        table.update_info(0, 0, 'a').unwrap();
        assert_eq!(points(&mut table), vec![(0, 0, 'a'), (1, 0, 'x')]);
    }

    #[test]
    fn test_display_dumps_change_points() {
        let mut table = CompressedTable::new(5, 6, 'x').unwrap();
        table.update_info(0, 1, 'a').unwrap();
        assert_eq!(
            table.to_string(),
            "CursorList:\n((0, 0), x)\n((0, 1), a)\n((0, 2), x)\n"
        );
    }
}
