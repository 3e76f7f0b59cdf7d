//! Widget settings

/// Default column count (gutter plus A-E)
pub const DEFAULT_COLS: u16 = 6;

/// Default row count
pub const DEFAULT_ROWS: u32 = 10;

/// Initial configuration of a [`SheetWidget`](crate::SheetWidget)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GridSettings {
    /// Number of columns, gutter included
    pub num_cols: u16,
    /// Number of rows
    pub num_rows: u32,
}

impl GridSettings {
    /// Settings for a grid of the given size
    pub fn new(num_cols: u16, num_rows: u32) -> Self {
        Self { num_cols, num_rows }
    }
}

impl Default for GridSettings {
    fn default() -> Self {
        Self {
            num_cols: DEFAULT_COLS,
            num_rows: DEFAULT_ROWS,
        }
    }
}
