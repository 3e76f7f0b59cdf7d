//! Grid value storage
//!
//! Sparse row-based storage for the grid's text values. Only non-empty values
//! are stored; every address inside the grid's bounds reads as the empty string
//! until written.

use std::collections::BTreeMap;

use super::GridAddress;
use crate::error::{Error, Result};
use crate::MAX_COLS;

/// Values and dimensions of a grid
///
/// Structure: `BTreeMap<row_index, BTreeMap<col_index, String>>`
///
/// The store applies no policy of its own: it bounds-checks writes and grows by
/// appending. Relocating values on insertion is the job of
/// [`PendingGrowth`](crate::PendingGrowth).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridStore {
    /// Row index → column map
    rows: BTreeMap<u32, BTreeMap<u16, String>>,
    /// Number of columns, gutter included
    num_cols: u16,
    /// Number of rows
    num_rows: u32,
}

impl GridStore {
    /// Create an empty grid
    ///
    /// Both dimensions must be at least 1 and `num_cols` may not exceed
    /// [`MAX_COLS`].
    pub fn new(num_cols: u16, num_rows: u32) -> Result<Self> {
        if num_cols == 0 || num_rows == 0 {
            return Err(Error::InvalidDimensions {
                cols: num_cols,
                rows: num_rows,
            });
        }
        if num_cols > MAX_COLS {
            return Err(Error::ColumnLimit(MAX_COLS));
        }

        Ok(Self {
            rows: BTreeMap::new(),
            num_cols,
            num_rows,
        })
    }

    /// Number of columns, gutter included
    pub fn num_cols(&self) -> u16 {
        self.num_cols
    }

    /// Number of rows
    pub fn num_rows(&self) -> u32 {
        self.num_rows
    }

    /// Check whether an address lies inside the current bounds
    pub fn contains(&self, addr: GridAddress) -> bool {
        addr.col < self.num_cols && addr.row < self.num_rows
    }

    /// Bounds-check an address
    pub fn check_bounds(&self, addr: GridAddress) -> Result<()> {
        if addr.col >= self.num_cols {
            return Err(Error::ColumnOutOfBounds(addr.col, self.num_cols - 1));
        }
        if addr.row >= self.num_rows {
            return Err(Error::RowOutOfBounds(addr.row, self.num_rows - 1));
        }
        Ok(())
    }

    /// Get the value at an address
    ///
    /// Never-written addresses (and addresses outside the grid) read as `""`.
    pub fn value(&self, addr: GridAddress) -> &str {
        self.rows
            .get(&addr.row)
            .and_then(|r| r.get(&addr.col))
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Set the value at an address
    ///
    /// Writing the empty string removes the stored value.
    pub fn set_value(&mut self, addr: GridAddress, value: impl Into<String>) -> Result<()> {
        self.check_bounds(addr)?;
        self.put(addr, value.into());
        Ok(())
    }

    /// Remove the value at an address and return it (empty if none)
    pub fn take_value(&mut self, addr: GridAddress) -> String {
        let Some(row_map) = self.rows.get_mut(&addr.row) else {
            return String::new();
        };
        let value = row_map.remove(&addr.col).unwrap_or_default();
        if row_map.is_empty() {
            self.rows.remove(&addr.row);
        }
        value
    }

    /// Move the value at `from` into `to`, leaving `from` empty
    ///
    /// Returns `true` if a non-empty value was moved. Both addresses must
    /// already be in bounds.
    pub(crate) fn move_value(&mut self, from: GridAddress, to: GridAddress) -> bool {
        let value = self.take_value(from);
        let moved = !value.is_empty();
        self.put(to, value);
        moved
    }

    /// Append an empty row, returning its index
    pub fn add_row(&mut self) -> Result<u32> {
        let index = self.num_rows;
        self.num_rows = self.num_rows.checked_add(1).ok_or(Error::RowLimit)?;
        Ok(index)
    }

    /// Append an empty column, returning its index
    pub fn add_column(&mut self) -> Result<u16> {
        if self.num_cols >= MAX_COLS {
            return Err(Error::ColumnLimit(MAX_COLS));
        }
        let index = self.num_cols;
        self.num_cols += 1;
        Ok(index)
    }

    /// Number of stored (non-empty) values
    pub fn non_empty_count(&self) -> usize {
        self.rows.values().map(|r| r.len()).sum()
    }

    /// Iterate over non-empty values in row order
    pub fn iter(&self) -> impl Iterator<Item = (GridAddress, &str)> {
        self.rows.iter().flat_map(|(&row, cols)| {
            cols.iter()
                .map(move |(&col, value)| (GridAddress::new(col, row), value.as_str()))
        })
    }

    fn put(&mut self, addr: GridAddress, value: String) {
        if value.is_empty() {
            self.take_value(addr);
        } else {
            self.rows.entry(addr.row).or_default().insert(addr.col, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_operations() {
        let mut store = GridStore::new(3, 3).unwrap();

        store.set_value(GridAddress::new(2, 1), "123").unwrap();
        assert_eq!(store.value(GridAddress::new(2, 1)), "123");

        // Never written
        assert_eq!(store.value(GridAddress::new(1, 1)), "");
    }

    #[test]
    fn test_empty_values_not_stored() {
        let mut store = GridStore::new(3, 3).unwrap();

        store.set_value(GridAddress::new(1, 0), "x").unwrap();
        assert_eq!(store.non_empty_count(), 1);

        store.set_value(GridAddress::new(1, 0), "").unwrap();
        assert_eq!(store.non_empty_count(), 0);
        assert_eq!(store.value(GridAddress::new(1, 0)), "");
    }

    #[test]
    fn test_bounds() {
        let mut store = GridStore::new(3, 2).unwrap();

        assert_eq!(
            store.set_value(GridAddress::new(3, 0), "x"),
            Err(Error::ColumnOutOfBounds(3, 2))
        );
        assert_eq!(
            store.set_value(GridAddress::new(0, 2), "x"),
            Err(Error::RowOutOfBounds(2, 1))
        );
        assert!(store.contains(GridAddress::new(2, 1)));
        assert!(!store.contains(GridAddress::new(2, 2)));
    }

    #[test]
    fn test_invalid_dimensions() {
        assert_eq!(
            GridStore::new(0, 3),
            Err(Error::InvalidDimensions { cols: 0, rows: 3 })
        );
        assert!(GridStore::new(3, 0).is_err());
        assert_eq!(GridStore::new(MAX_COLS + 1, 3), Err(Error::ColumnLimit(MAX_COLS)));
        assert!(GridStore::new(1, 1).is_ok());
    }

    #[test]
    fn test_growth_appends_empty() {
        let mut store = GridStore::new(2, 2).unwrap();
        store.set_value(GridAddress::new(1, 1), "keep").unwrap();

        assert_eq!(store.add_row().unwrap(), 2);
        assert_eq!(store.add_column().unwrap(), 2);

        assert_eq!(store.num_rows(), 3);
        assert_eq!(store.num_cols(), 3);
        assert_eq!(store.value(GridAddress::new(1, 1)), "keep");
        assert_eq!(store.value(GridAddress::new(2, 2)), "");
    }

    #[test]
    fn test_column_limit() {
        let mut store = GridStore::new(MAX_COLS - 1, 1).unwrap();
        assert!(store.add_column().is_ok());
        assert_eq!(store.add_column(), Err(Error::ColumnLimit(MAX_COLS)));
        assert_eq!(store.num_cols(), MAX_COLS);
    }

    #[test]
    fn test_take_and_move() {
        let mut store = GridStore::new(3, 3).unwrap();
        store.set_value(GridAddress::new(1, 1), "a").unwrap();

        assert!(store.move_value(GridAddress::new(1, 1), GridAddress::new(2, 1)));
        assert_eq!(store.value(GridAddress::new(1, 1)), "");
        assert_eq!(store.value(GridAddress::new(2, 1)), "a");

        // Moving an empty cell clears the destination
        assert!(!store.move_value(GridAddress::new(1, 1), GridAddress::new(2, 1)));
        assert_eq!(store.value(GridAddress::new(2, 1)), "");

        assert_eq!(store.take_value(GridAddress::new(0, 0)), "");
    }

    #[test]
    fn test_iteration() {
        let mut store = GridStore::new(3, 3).unwrap();
        store.set_value(GridAddress::new(2, 1), "c").unwrap();
        store.set_value(GridAddress::new(1, 0), "a").unwrap();
        store.set_value(GridAddress::new(1, 1), "b").unwrap();

        let cells: Vec<_> = store.iter().collect();
        assert_eq!(
            cells,
            vec![
                (GridAddress::new(1, 0), "a"),
                (GridAddress::new(1, 1), "b"),
                (GridAddress::new(2, 1), "c"),
            ]
        );
    }
}
