//! Plain-text rendering of a grid projection

use sumgrid_core::{GridRenderer, GridView, Highlight};

/// Keeps the most recent projection formatted as a text table
#[derive(Debug, Default)]
pub struct TextRenderer {
    frame: String,
}

impl TextRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// The latest rendered frame
    pub fn frame(&self) -> &str {
        &self.frame
    }
}

impl GridRenderer for TextRenderer {
    fn render(&mut self, view: &GridView) {
        self.frame = format_view(view);
    }
}

fn decorate(text: &str, highlight: Highlight) -> String {
    match highlight {
        Highlight::None => text.to_string(),
        Highlight::CurrentCell => format!("[{}]", text),
        Highlight::CurrentMultiple => format!("*{}*", text),
    }
}

/// Format a projection as an aligned table followed by the editor line
///
/// The selected cell is wrapped in `[..]`; cells of a selected row or column
/// are wrapped in `*..*`.
pub fn format_view(view: &GridView) -> String {
    let body: Vec<Vec<String>> = view
        .body
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| decorate(&cell.text, cell.highlight))
                .collect()
        })
        .collect();
    let footer = view.footer_text();

    let widths: Vec<usize> = (0..view.header.len())
        .map(|col| {
            body.iter()
                .filter_map(|row| row.get(col))
                .chain(view.header.get(col))
                .chain(footer.get(col))
                .map(|s| s.chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let format_row = |cells: &[String]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(text, width)| format!("{:<width$}", text, width = *width))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let rule = widths
        .iter()
        .map(|w| "-".repeat(*w))
        .collect::<Vec<_>>()
        .join("-+-");

    let mut out = String::new();
    out.push_str(&format_row(&view.header));
    out.push('\n');
    out.push_str(&rule);
    out.push('\n');
    for row in &body {
        out.push_str(&format_row(row));
        out.push('\n');
    }
    out.push_str(&rule);
    out.push('\n');
    out.push_str(&format_row(&footer));
    out.push('\n');

    out.push_str("editor: ");
    out.push_str(&view.editor.text);
    if !view.editor.enabled {
        out.push_str(" (disabled)");
    }
    out.push('\n');
    out
}
