//! Insertion shift
//!
//! Growing the grid while a whole row or column is selected opens the new
//! row/column next to the selection instead of appending it at the end. This
//! happens in two phases:
//!
//! 1. [`PendingGrowth::request`] records the anchor from the current selection,
//!    before the store's dimension is incremented.
//! 2. [`PendingGrowth::apply`] relocates values in a single pass over the grown
//!    store and clears every pending request.
//!
//! Calling `apply` again without a new request is a no-op.

use crate::cell::{DisplayRow, GridAddress, GridStore};
use crate::selection::Selection;

/// Growth direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Add a row
    Row,
    /// Add a column
    Column,
}

/// Outcome of a shift pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShiftReport {
    /// Number of non-empty values relocated
    pub moved_cells: usize,
    /// Whether a row shift ran
    pub rows_shifted: bool,
    /// Whether a column shift ran
    pub columns_shifted: bool,
}

/// Growth requests awaiting their shift pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PendingGrowth {
    /// Anchor of a pending row shift
    row_after: Option<DisplayRow>,
    /// Anchor of a pending column shift
    column_after: Option<u16>,
}

impl PendingGrowth {
    /// Create with nothing pending
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a growth request against the current selection
    ///
    /// Only a row selection arms a row shift and only a column selection arms
    /// a column shift. Returns whether a shift was armed; if not, the growth is
    /// a plain append.
    pub fn request(&mut self, axis: Axis, selection: &Selection) -> bool {
        match (axis, selection) {
            (Axis::Row, Selection::Row(row)) => {
                self.row_after = Some(*row);
                true
            }
            (Axis::Column, Selection::Column(col)) => {
                self.column_after = Some(*col);
                true
            }
            _ => false,
        }
    }

    /// Whether a row shift is pending
    pub fn row_pending(&self) -> bool {
        self.row_after.is_some()
    }

    /// Whether a column shift is pending
    pub fn column_pending(&self) -> bool {
        self.column_after.is_some()
    }

    /// Whether nothing is pending
    pub fn is_idle(&self) -> bool {
        self.row_after.is_none() && self.column_after.is_none()
    }

    /// Run the shift pass for everything pending, then clear it
    ///
    /// Rows are visited bottom to top and columns right to left, so a value is
    /// always read before its slot is overwritten. Column 0 is never touched.
    ///
    /// For a pending row anchored at display row `R`, every row index greater
    /// than `R - 1` receives the value from the row above it. For a pending
    /// column anchored at `C`, every column greater than `C` hands its value to
    /// the column on its right. When both are pending the two moves apply per
    /// cell in that order.
    pub fn apply(&mut self, store: &mut GridStore) -> ShiftReport {
        let row_after = self.row_after.take();
        let column_after = self.column_after.take();

        let mut report = ShiftReport {
            moved_cells: 0,
            rows_shifted: row_after.is_some(),
            columns_shifted: column_after.is_some(),
        };
        if row_after.is_none() && column_after.is_none() {
            return report;
        }

        let num_cols = store.num_cols();
        for row in (0..store.num_rows()).rev() {
            for col in (1..num_cols).rev() {
                if let Some(anchor) = row_after {
                    if row > anchor.zero_based()
                        && store.move_value(GridAddress::new(col, row - 1), GridAddress::new(col, row))
                    {
                        report.moved_cells += 1;
                    }
                }
                if let Some(anchor) = column_after {
                    // The last column is the freshly appended one and holds nothing
                    if col > anchor
                        && col + 1 < num_cols
                        && store.move_value(GridAddress::new(col, row), GridAddress::new(col + 1, row))
                    {
                        report.moved_cells += 1;
                    }
                }
            }
        }

        tracing::debug!(
            "shift pass: rows_after={:?} column_after={:?} moved={}",
            row_after.map(DisplayRow::get),
            column_after,
            report.moved_cells
        );
        report
    }
}
