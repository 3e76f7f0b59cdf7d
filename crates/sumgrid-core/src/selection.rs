//! Selection state
//!
//! The grid is always in exactly one addressing mode: nothing, a single cell, a
//! whole row, or a whole column. Holding the mode in one enum makes a combined
//! "row and column selected" state unrepresentable.

use crate::cell::{DisplayRow, GridAddress};

/// The active selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "mode", content = "at"))]
pub enum Selection {
    /// Nothing selected
    #[default]
    None,
    /// A single editable cell
    Cell(GridAddress),
    /// An entire row, held in its 1-based display encoding
    Row(DisplayRow),
    /// An entire data column (never the gutter)
    Column(u16),
}

impl Selection {
    /// The selected cell, if in cell mode
    pub fn cell(&self) -> Option<GridAddress> {
        match self {
            Selection::Cell(addr) => Some(*addr),
            _ => None,
        }
    }

    /// The selected row, if in row mode
    pub fn row(&self) -> Option<DisplayRow> {
        match self {
            Selection::Row(row) => Some(*row),
            _ => None,
        }
    }

    /// The selected column, if in column mode
    pub fn column(&self) -> Option<u16> {
        match self {
            Selection::Column(col) => Some(*col),
            _ => None,
        }
    }

    /// Whether a whole row or column is selected
    pub fn is_multiple(&self) -> bool {
        matches!(self, Selection::Row(_) | Selection::Column(_))
    }
}

/// Owner of the current [`Selection`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    current: Selection,
}

impl SelectionState {
    /// Start with the given selection
    pub fn new(initial: Selection) -> Self {
        Self { current: initial }
    }

    /// The active selection
    pub fn current(&self) -> Selection {
        self.current
    }

    /// Select a single cell, dropping any row or column selection
    pub fn select_cell(&mut self, addr: GridAddress) {
        self.set(Selection::Cell(addr));
    }

    /// Select a whole row, dropping any cell or column selection
    pub fn select_row(&mut self, row: DisplayRow) {
        self.set(Selection::Row(row));
    }

    /// Select a whole column, dropping any cell or row selection
    pub fn select_column(&mut self, col: u16) {
        debug_assert!(col != 0, "the gutter column is not selectable");
        self.set(Selection::Column(col));
    }

    /// Drop the selection entirely
    pub fn clear(&mut self) {
        self.set(Selection::None);
    }

    fn set(&mut self, next: Selection) {
        tracing::trace!("selection {:?} -> {:?}", self.current, next);
        self.current = next;
    }
}
