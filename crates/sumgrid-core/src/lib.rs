//! # sumgrid-core
//!
//! Core logic for the sumgrid spreadsheet widget: a grid of editable text
//! cells with lettered column headers, a per-column sum footer and a
//! single-line editor bound to the selection.
//!
//! This crate provides:
//! - [`GridStore`] - Cell values and grid dimensions
//! - [`SelectionState`] - Cell, row or column selection, one at a time
//! - [`PendingGrowth`] - Opens a gap next to a selected row/column on growth
//! - [`aggregate`] - The footer row of column sums
//! - [`project`] - Highlight and editor projections for a renderer
//! - [`SheetWidget`] - Interaction handlers tying the above together
//!
//! Rendering and event wiring live outside this crate; adapters implement
//! [`GridRenderer`] and call the widget's handlers.
//!
//! ## Example
//!
//! ```rust
//! use sumgrid_core::{GridAddress, GridSettings, NoopRenderer, SheetWidget};
//!
//! let mut widget = SheetWidget::new(GridSettings::new(4, 3), NoopRenderer).unwrap();
//!
//! widget.click_cell(2, 0).unwrap();
//! widget.commit_editor("10").unwrap();
//!
//! // Insert a column right after B
//! widget.click_column_header(2).unwrap();
//! widget.add_column().unwrap();
//!
//! assert_eq!(widget.store().num_cols(), 5);
//! assert_eq!(widget.store().value(GridAddress::new(2, 0)), "10");
//! assert_eq!(widget.view().editor.text, " < column B is selected > ");
//! ```

pub mod cell;
pub mod error;
pub mod footer;
pub mod prelude;
pub mod selection;
pub mod settings;
pub mod shift;
pub mod view;
pub mod widget;

// Re-exports for convenience
pub use cell::{column_letter, header_labels, DisplayRow, GridAddress, GridStore};
pub use error::{Error, Result};
pub use footer::{aggregate, column_total, parse_leading_int, FooterCell, SUM_LABEL};
pub use selection::{Selection, SelectionState};
pub use settings::GridSettings;
pub use shift::{Axis, PendingGrowth, ShiftReport};
pub use view::{
    editor_projection, highlight_at, project, EditorProjection, GridView, Highlight, ViewCell,
    CURRENT_CELL_CLASS, CURRENT_MULTIPLE_CLASS,
};
pub use widget::{GridRenderer, NoopRenderer, SheetWidget};

/// Maximum number of columns: the gutter plus one per letter A-Z
pub const MAX_COLS: u16 = 27;
