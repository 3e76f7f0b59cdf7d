//! Grid address and column label types

use std::fmt;

use crate::MAX_COLS;

/// A cell location in the grid
///
/// Both indices are 0-based. Column 0 is the row-label gutter and never holds
/// data of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridAddress {
    /// Column index (0 = gutter, 1 = A, ..., 26 = Z)
    pub col: u16,
    /// Row index (0-based)
    pub row: u32,
}

impl GridAddress {
    /// Create a new address
    pub fn new(col: u16, row: u32) -> Self {
        Self { col, row }
    }

    /// Whether this address lies in the row-label gutter
    pub fn is_gutter(&self) -> bool {
        self.col == 0
    }

    /// Format as a letter/number reference (e.g. "B3"), if the column has a letter
    pub fn to_reference(&self) -> Option<String> {
        column_letter(self.col).map(|letter| format!("{}{}", letter, self.row + 1))
    }
}

impl fmt::Display for GridAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

impl From<(u16, u32)> for GridAddress {
    fn from((col, row): (u16, u32)) -> Self {
        Self::new(col, row)
    }
}

/// A row as the user counts it: 1-based.
///
/// Row selection stores this encoding, so a selected zero-based row `r` is held
/// as `DisplayRow(r + 1)`. Conversions happen only through
/// [`DisplayRow::from_zero_based`] and [`DisplayRow::zero_based`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayRow(u32);

impl DisplayRow {
    /// Encode a zero-based row index
    pub fn from_zero_based(row: u32) -> Self {
        Self(row + 1)
    }

    /// The 1-based value
    pub fn get(self) -> u32 {
        self.0
    }

    /// Recover the zero-based row index
    pub fn zero_based(self) -> u32 {
        self.0 - 1
    }
}

impl fmt::Display for DisplayRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Letter label for a data column (1 = A, ..., 26 = Z)
///
/// Returns `None` for the gutter column and for anything past Z. Multi-letter
/// labels (AA, AB, ...) are not produced; [`GridStore`](crate::GridStore) refuses
/// to grow past [`MAX_COLS`] so every stored data column has a letter.
pub fn column_letter(col: u16) -> Option<char> {
    if col == 0 || col >= MAX_COLS {
        return None;
    }
    Some((b'A' + (col - 1) as u8) as char)
}

/// Header row labels: a blank gutter label followed by one letter per data column
///
/// # Examples
/// ```
/// use sumgrid_core::header_labels;
///
/// assert_eq!(header_labels(4), vec!["", "A", "B", "C"]);
/// ```
pub fn header_labels(num_cols: u16) -> Vec<String> {
    (0..num_cols)
        .map(|col| column_letter(col).map(String::from).unwrap_or_default())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_letter() {
        assert_eq!(column_letter(0), None);
        assert_eq!(column_letter(1), Some('A'));
        assert_eq!(column_letter(2), Some('B'));
        assert_eq!(column_letter(26), Some('Z'));
        assert_eq!(column_letter(27), None);
    }

    #[test]
    fn test_header_labels() {
        assert_eq!(header_labels(6), vec!["", "A", "B", "C", "D", "E"]);
        assert_eq!(header_labels(1), vec![""]);
        assert_eq!(header_labels(MAX_COLS).last().map(String::as_str), Some("Z"));
    }

    #[test]
    fn test_display_row_conversion() {
        let row = DisplayRow::from_zero_based(1);
        assert_eq!(row.get(), 2);
        assert_eq!(row.zero_based(), 1);
        assert_eq!(row.to_string(), "2");

        assert_eq!(DisplayRow::from_zero_based(0).get(), 1);
    }

    #[test]
    fn test_address_reference() {
        assert_eq!(GridAddress::new(2, 2).to_reference().as_deref(), Some("B3"));
        assert_eq!(GridAddress::new(0, 4).to_reference(), None);
        assert!(GridAddress::new(0, 4).is_gutter());
        assert_eq!(GridAddress::from((3, 7)).to_string(), "(3, 7)");
    }
}
