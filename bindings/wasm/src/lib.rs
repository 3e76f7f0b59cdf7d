//! WebAssembly bindings for sumgrid
//!
//! This module provides wasm-bindgen-based bindings for the sumgrid widget core,
//! so a page can own the DOM while Rust owns the grid's state. The page forwards
//! clicks, editor input and add-row/add-column buttons to a [`GridWidget`] and
//! redraws from the view object passed to its `onRender` callback.

use wasm_bindgen::prelude::*;

use sumgrid_core::{GridAddress, GridRenderer, GridSettings, GridView, SheetWidget};

// =============================================================================
// Error Conversion
// =============================================================================

fn to_js_error(e: impl std::fmt::Display) -> JsError {
    JsError::new(&e.to_string())
}

// =============================================================================
// JsRenderer - forwards projections to a JavaScript callback
// =============================================================================

#[derive(Default)]
struct JsRenderer {
    callback: Option<js_sys::Function>,
    failure: Option<String>,
}

impl JsRenderer {
    fn take_failure(&mut self) -> Option<String> {
        self.failure.take()
    }
}

impl GridRenderer for JsRenderer {
    fn render(&mut self, view: &GridView) {
        let Some(callback) = &self.callback else {
            return;
        };
        let outcome = serde_wasm_bindgen::to_value(view)
            .map_err(|e| e.to_string())
            .and_then(|value| {
                callback
                    .call1(&JsValue::NULL, &value)
                    .map(|_| ())
                    .map_err(|e| format!("{:?}", e))
            });
        if let Err(message) = outcome {
            self.failure = Some(message);
        }
    }
}

// =============================================================================
// GridWidget - JavaScript wrapper
// =============================================================================

/// A spreadsheet grid with a sum footer and a single-line editor.
#[wasm_bindgen]
pub struct GridWidget {
    inner: SheetWidget<JsRenderer>,
}

#[wasm_bindgen]
impl GridWidget {
    #[wasm_bindgen(constructor)]
    pub fn new(num_cols: u16, num_rows: u32) -> Result<GridWidget, JsError> {
        let inner = SheetWidget::new(GridSettings::new(num_cols, num_rows), JsRenderer::default())
            .map_err(to_js_error)?;
        Ok(Self { inner })
    }

    /// Register the render callback and invoke it with the current view
    #[wasm_bindgen(js_name = onRender)]
    pub fn on_render(&mut self, callback: js_sys::Function) -> Result<(), JsError> {
        self.inner.renderer_mut().callback = Some(callback);
        let view = self.inner.view().clone();
        self.inner.renderer_mut().render(&view);
        self.check_render()
    }

    #[wasm_bindgen(getter, js_name = numCols)]
    pub fn num_cols(&self) -> u16 {
        self.inner.store().num_cols()
    }

    #[wasm_bindgen(getter, js_name = numRows)]
    pub fn num_rows(&self) -> u32 {
        self.inner.store().num_rows()
    }

    #[wasm_bindgen(getter, js_name = editorText)]
    pub fn editor_text(&self) -> String {
        self.inner.view().editor.text.clone()
    }

    #[wasm_bindgen(getter, js_name = editorEnabled)]
    pub fn editor_enabled(&self) -> bool {
        self.inner.view().editor.enabled
    }

    #[wasm_bindgen(getter, js_name = headerLabels)]
    pub fn header_labels(&self) -> Vec<String> {
        self.inner.view().header.clone()
    }

    #[wasm_bindgen(getter, js_name = footerLabels)]
    pub fn footer_labels(&self) -> Vec<String> {
        self.inner.view().footer_text()
    }

    #[wasm_bindgen(js_name = getValue)]
    pub fn get_value(&self, col: u16, row: u32) -> String {
        self.inner.store().value(GridAddress::new(col, row)).to_string()
    }

    /// CSS class of a body cell, or `undefined` when not highlighted
    #[wasm_bindgen(js_name = cellClass)]
    pub fn cell_class(&self, col: u16, row: u32) -> Option<String> {
        self.inner
            .view()
            .cell(GridAddress::new(col, row))
            .and_then(|cell| cell.highlight.css_class())
            .map(String::from)
    }

    /// The full view as a plain object
    pub fn view(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(self.inner.view()).map_err(to_js_error)
    }

    /// The selection as `{ mode, at }`
    pub fn selection(&self) -> Result<JsValue, JsError> {
        serde_wasm_bindgen::to_value(&self.inner.selection()).map_err(to_js_error)
    }

    #[wasm_bindgen(js_name = clickCell)]
    pub fn click_cell(&mut self, col: u16, row: u32) -> Result<(), JsError> {
        self.inner.click_cell(col, row).map_err(to_js_error)?;
        self.check_render()
    }

    #[wasm_bindgen(js_name = clickRowLabel)]
    pub fn click_row_label(&mut self, row: u32) -> Result<(), JsError> {
        self.inner.click_row_label(row).map_err(to_js_error)?;
        self.check_render()
    }

    #[wasm_bindgen(js_name = clickColumnHeader)]
    pub fn click_column_header(&mut self, col: u16) -> Result<(), JsError> {
        self.inner.click_column_header(col).map_err(to_js_error)?;
        self.check_render()
    }

    #[wasm_bindgen(js_name = commitEditor)]
    pub fn commit_editor(&mut self, text: &str) -> Result<(), JsError> {
        self.inner.commit_editor(text).map_err(to_js_error)?;
        self.check_render()
    }

    #[wasm_bindgen(js_name = addRow)]
    pub fn add_row(&mut self) -> Result<(), JsError> {
        self.inner.add_row().map_err(to_js_error)?;
        self.check_render()
    }

    #[wasm_bindgen(js_name = addColumn)]
    pub fn add_column(&mut self) -> Result<(), JsError> {
        self.inner.add_column().map_err(to_js_error)?;
        self.check_render()
    }
}

impl GridWidget {
    fn check_render(&mut self) -> Result<(), JsError> {
        match self.inner.renderer_mut().take_failure() {
            Some(message) => Err(JsError::new(&format!("render callback failed: {}", message))),
            None => Ok(()),
        }
    }
}

#[wasm_bindgen(start)]
pub fn init() {}
