//! View projections
//!
//! Everything a renderer needs is derived from scratch out of the store and
//! the selection: header labels, body text with highlight classes, the footer
//! row, and the editor line.

use crate::cell::{column_letter, header_labels, GridAddress, GridStore};
use crate::footer::{aggregate, FooterCell};
use crate::selection::Selection;

/// CSS class marking the selected cell
pub const CURRENT_CELL_CLASS: &str = "current-cell";

/// CSS class marking cells of a selected row or column
pub const CURRENT_MULTIPLE_CLASS: &str = "current-multiple";

/// Highlight applied to a body cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Highlight {
    #[default]
    None,
    CurrentCell,
    CurrentMultiple,
}

impl Highlight {
    /// CSS class for this highlight, if any
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            Highlight::None => None,
            Highlight::CurrentCell => Some(CURRENT_CELL_CLASS),
            Highlight::CurrentMultiple => Some(CURRENT_MULTIPLE_CLASS),
        }
    }

    pub fn is_highlighted(&self) -> bool {
        !matches!(self, Highlight::None)
    }
}

/// Highlight for the cell at `addr` under `selection`
///
/// Row and column matches take precedence over an exact cell match.
pub fn highlight_at(selection: &Selection, addr: GridAddress) -> Highlight {
    match selection {
        Selection::Column(col) if *col == addr.col => Highlight::CurrentMultiple,
        Selection::Row(row) if row.zero_based() == addr.row => Highlight::CurrentMultiple,
        Selection::Cell(cell) if *cell == addr => Highlight::CurrentCell,
        _ => Highlight::None,
    }
}

/// What the single-line editor shows
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EditorProjection {
    /// Text in the editor
    pub text: String,
    /// Whether the editor accepts input
    pub enabled: bool,
}

/// Editor contents for the current selection
pub fn editor_projection(selection: &Selection, store: &GridStore) -> EditorProjection {
    match selection {
        Selection::Cell(addr) => EditorProjection {
            text: store.value(*addr).to_string(),
            enabled: true,
        },
        Selection::Row(row) => EditorProjection {
            text: format!(" < row {} is selected > ", row),
            enabled: false,
        },
        Selection::Column(col) => EditorProjection {
            text: format!(
                " < column {} is selected > ",
                column_letter(*col).map(String::from).unwrap_or_default()
            ),
            enabled: false,
        },
        Selection::None => EditorProjection {
            text: String::new(),
            enabled: false,
        },
    }
}

/// A rendered body cell
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewCell {
    pub text: String,
    pub highlight: Highlight,
}

/// Full projection of the widget
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridView {
    /// One label per column, the gutter's blank
    pub header: Vec<String>,
    /// `num_rows` rows of `num_cols` cells; column 0 holds the 1-based row number
    pub body: Vec<Vec<ViewCell>>,
    /// One footer cell per column
    pub footer: Vec<FooterCell>,
    pub editor: EditorProjection,
}

impl GridView {
    /// Number of highlighted body cells
    pub fn highlighted_count(&self) -> usize {
        self.body
            .iter()
            .flatten()
            .filter(|cell| cell.highlight.is_highlighted())
            .count()
    }

    /// Body cell at an address
    pub fn cell(&self, addr: GridAddress) -> Option<&ViewCell> {
        self.body
            .get(addr.row as usize)
            .and_then(|row| row.get(addr.col as usize))
    }

    /// Footer cells as display text
    pub fn footer_text(&self) -> Vec<String> {
        self.footer.iter().map(ToString::to_string).collect()
    }
}

/// Derive the full view from the store and selection
pub fn project(store: &GridStore, selection: &Selection) -> GridView {
    let body = (0..store.num_rows())
        .map(|row| {
            (0..store.num_cols())
                .map(|col| {
                    let addr = GridAddress::new(col, row);
                    let text = if addr.is_gutter() {
                        (row + 1).to_string()
                    } else {
                        store.value(addr).to_string()
                    };
                    ViewCell {
                        text,
                        highlight: highlight_at(selection, addr),
                    }
                })
                .collect()
        })
        .collect();

    GridView {
        header: header_labels(store.num_cols()),
        body,
        footer: aggregate(store),
        editor: editor_projection(selection, store),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::DisplayRow;

    #[test]
    fn test_highlight_at() {
        let cell = Selection::Cell(GridAddress::new(2, 1));
        assert_eq!(highlight_at(&cell, GridAddress::new(2, 1)), Highlight::CurrentCell);
        assert_eq!(highlight_at(&cell, GridAddress::new(1, 2)), Highlight::None);

        let row = Selection::Row(DisplayRow::from_zero_based(1));
        assert_eq!(highlight_at(&row, GridAddress::new(0, 1)), Highlight::CurrentMultiple);
        assert_eq!(highlight_at(&row, GridAddress::new(3, 1)), Highlight::CurrentMultiple);
        assert_eq!(highlight_at(&row, GridAddress::new(3, 2)), Highlight::None);

        let col = Selection::Column(2);
        assert_eq!(highlight_at(&col, GridAddress::new(2, 5)), Highlight::CurrentMultiple);
        assert_eq!(highlight_at(&col, GridAddress::new(1, 5)), Highlight::None);

        assert_eq!(highlight_at(&Selection::None, GridAddress::new(1, 0)), Highlight::None);
    }

    #[test]
    fn test_css_classes() {
        assert_eq!(Highlight::CurrentCell.css_class(), Some("current-cell"));
        assert_eq!(Highlight::CurrentMultiple.css_class(), Some("current-multiple"));
        assert_eq!(Highlight::None.css_class(), None);
    }

    #[test]
    fn test_editor_projection() {
        let mut store = GridStore::new(3, 3).unwrap();
        store.set_value(GridAddress::new(2, 1), "123").unwrap();

        let editor = editor_projection(&Selection::Cell(GridAddress::new(2, 1)), &store);
        assert_eq!(editor.text, "123");
        assert!(editor.enabled);

        let editor = editor_projection(&Selection::Cell(GridAddress::new(1, 1)), &store);
        assert_eq!(editor.text, "");
        assert!(editor.enabled);

        let editor = editor_projection(&Selection::Row(DisplayRow::from_zero_based(0)), &store);
        assert_eq!(editor.text, " < row 1 is selected > ");
        assert!(!editor.enabled);

        let editor = editor_projection(&Selection::Column(2), &store);
        assert_eq!(editor.text, " < column B is selected > ");
        assert!(!editor.enabled);
    }

    #[test]
    fn test_project_shape() {
        let mut store = GridStore::new(3, 2).unwrap();
        store.set_value(GridAddress::new(1, 1), "4").unwrap();

        let view = project(&store, &Selection::Cell(GridAddress::new(1, 1)));

        assert_eq!(view.header, vec!["", "A", "B"]);
        assert_eq!(view.body.len(), 2);
        assert!(view.body.iter().all(|row| row.len() == 3));
        assert_eq!(view.body[0][0].text, "1");
        assert_eq!(view.body[1][0].text, "2");
        assert_eq!(view.body[1][1].text, "4");
        assert_eq!(view.footer_text(), vec!["Sum", "4", "0"]);
        assert_eq!(view.highlighted_count(), 1);
        assert_eq!(
            view.cell(GridAddress::new(1, 1)).map(|c| c.highlight),
            Some(Highlight::CurrentCell)
        );
    }
}
