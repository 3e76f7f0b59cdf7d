//! The grid widget controller
//!
//! [`SheetWidget`] owns the store, the selection and any pending growth. Each
//! interaction handler runs to completion: mutate, apply the pending shift,
//! re-derive the full [`GridView`], and hand it to the [`GridRenderer`].

use crate::cell::{DisplayRow, GridAddress, GridStore};
use crate::error::{Error, Result};
use crate::selection::{Selection, SelectionState};
use crate::settings::GridSettings;
use crate::shift::{Axis, PendingGrowth};
use crate::view::{project, GridView};

/// Receives a fresh projection after every mutation
pub trait GridRenderer {
    fn render(&mut self, view: &GridView);
}

impl<F> GridRenderer for F
where
    F: FnMut(&GridView),
{
    fn render(&mut self, view: &GridView) {
        self(view)
    }
}

/// Renderer that discards every projection
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRenderer;

impl GridRenderer for NoopRenderer {
    fn render(&mut self, _view: &GridView) {}
}

/// An interactive grid
///
/// # Example
///
/// ```rust
/// use sumgrid_core::{GridAddress, GridSettings, NoopRenderer, SheetWidget};
///
/// let mut widget = SheetWidget::new(GridSettings::new(3, 3), NoopRenderer).unwrap();
///
/// widget.click_cell(2, 1).unwrap();
/// widget.commit_editor("5").unwrap();
///
/// assert_eq!(widget.store().value(GridAddress::new(2, 1)), "5");
/// assert_eq!(widget.view().footer_text(), vec!["Sum", "0", "5"]);
/// ```
#[derive(Debug)]
pub struct SheetWidget<R: GridRenderer = NoopRenderer> {
    store: GridStore,
    selection: SelectionState,
    pending: PendingGrowth,
    settings: GridSettings,
    view: GridView,
    renderer: R,
}

impl<R: GridRenderer> SheetWidget<R> {
    /// Build the widget and render it once
    ///
    /// The first data cell of row 0 starts selected; a grid with only the
    /// gutter column starts with nothing selected.
    pub fn new(settings: GridSettings, renderer: R) -> Result<Self> {
        let store = GridStore::new(settings.num_cols, settings.num_rows)?;
        let initial = if store.num_cols() > 1 {
            Selection::Cell(GridAddress::new(1, 0))
        } else {
            Selection::None
        };
        let selection = SelectionState::new(initial);
        let view = project(&store, &selection.current());

        let mut widget = Self {
            store,
            selection,
            pending: PendingGrowth::new(),
            settings,
            view,
            renderer,
        };
        widget.renderer.render(&widget.view);
        Ok(widget)
    }

    /// The grid's values and dimensions
    pub fn store(&self) -> &GridStore {
        &self.store
    }

    /// The active selection
    pub fn selection(&self) -> Selection {
        self.selection.current()
    }

    /// The settings the widget was built with
    pub fn settings(&self) -> &GridSettings {
        &self.settings
    }

    /// The latest projection
    pub fn view(&self) -> &GridView {
        &self.view
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// A body cell was clicked
    ///
    /// A click in the gutter column selects that row instead.
    pub fn click_cell(&mut self, col: u16, row: u32) -> Result<()> {
        let addr = GridAddress::new(col, row);
        if let Err(e) = self.store.check_bounds(addr) {
            tracing::warn!("rejected cell click at {}: {}", addr, e);
            return Err(e);
        }

        if addr.is_gutter() {
            self.selection.select_row(DisplayRow::from_zero_based(row));
        } else {
            self.selection.select_cell(addr);
        }
        tracing::debug!("click_cell {} -> {:?}", addr, self.selection.current());
        self.refresh();
        Ok(())
    }

    /// A row label in the gutter was clicked
    pub fn click_row_label(&mut self, row: u32) -> Result<()> {
        self.store.check_bounds(GridAddress::new(0, row))?;

        self.selection.select_row(DisplayRow::from_zero_based(row));
        tracing::debug!("click_row_label {}", row);
        self.refresh();
        Ok(())
    }

    /// A column header was clicked
    ///
    /// The blank gutter header is not a column and is ignored.
    pub fn click_column_header(&mut self, col: u16) -> Result<()> {
        self.store.check_bounds(GridAddress::new(col, 0))?;

        if col == 0 {
            tracing::debug!("ignoring click on gutter header");
            return Ok(());
        }
        self.selection.select_column(col);
        tracing::debug!("click_column_header {}", col);
        self.refresh();
        Ok(())
    }

    /// The editor submitted new text for the selected cell
    pub fn commit_editor(&mut self, text: &str) -> Result<()> {
        let Some(addr) = self.selection.current().cell() else {
            tracing::warn!("editor commit while {:?} is selected", self.selection.current());
            return Err(Error::EditorDisabled);
        };

        self.store.set_value(addr, text)?;
        tracing::debug!("commit_editor {} = {:?}", addr, text);
        self.refresh();
        Ok(())
    }

    /// Add a row: after the selected row if one is selected, else at the end
    pub fn add_row(&mut self) -> Result<()> {
        self.grow(Axis::Row)
    }

    /// Add a column: after the selected column if one is selected, else at the end
    pub fn add_column(&mut self) -> Result<()> {
        self.grow(Axis::Column)
    }

    fn grow(&mut self, axis: Axis) -> Result<()> {
        let armed = self.pending.request(axis, &self.selection.current());

        let grown = match axis {
            Axis::Row => self.store.add_row().map(|_| ()),
            Axis::Column => self.store.add_column().map(|_| ()),
        };
        if let Err(e) = grown {
            self.pending = PendingGrowth::new();
            tracing::warn!("cannot add {:?}: {}", axis, e);
            return Err(e);
        }

        tracing::debug!(
            "add {:?} (shift armed: {}) -> {} cols x {} rows",
            axis,
            armed,
            self.store.num_cols(),
            self.store.num_rows()
        );
        self.refresh();
        Ok(())
    }

    fn refresh(&mut self) {
        if !self.pending.is_idle() {
            self.pending.apply(&mut self.store);
        }
        self.view = project(&self.store, &self.selection.current());
        self.renderer.render(&self.view);
    }
}
