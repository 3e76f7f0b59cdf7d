//! Footer aggregation
//!
//! The footer holds one cell per column: the literal label `"Sum"` under the
//! gutter and, under every data column, the sum of the integers its cells start
//! with. Cells with no leading integer are skipped.

use std::fmt;

use crate::cell::{GridAddress, GridStore};

/// Label shown in the gutter column of the footer
pub const SUM_LABEL: &str = "Sum";

/// One footer cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FooterCell {
    /// The gutter label
    Label,
    /// The column total
    Sum(i64),
    /// A zero total reached through at least one parsed value
    ///
    /// Renders the same as `Sum(0)`. The two are kept apart so a consumer can
    /// tell "values cancelled out" from "nothing parsed".
    ValidZero,
}

impl FooterCell {
    /// Numeric value of the cell, if it is a total
    pub fn total(&self) -> Option<i64> {
        match self {
            FooterCell::Label => None,
            FooterCell::Sum(n) => Some(*n),
            FooterCell::ValidZero => Some(0),
        }
    }
}

impl fmt::Display for FooterCell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FooterCell::Label => f.write_str(SUM_LABEL),
            FooterCell::Sum(n) => write!(f, "{}", n),
            FooterCell::ValidZero => f.write_str("0"),
        }
    }
}

/// Parse the integer a string starts with
///
/// Leading whitespace is skipped, an optional `+` or `-` sign is accepted, and
/// decimal digits are read up to the first non-digit. Returns `None` if no digit
/// is found. Values too large for `i64` saturate.
///
/// # Examples
/// ```
/// use sumgrid_core::parse_leading_int;
///
/// assert_eq!(parse_leading_int("42"), Some(42));
/// assert_eq!(parse_leading_int(" -7px"), Some(-7));
/// assert_eq!(parse_leading_int("3.9"), Some(3));
/// assert_eq!(parse_leading_int("invalid"), None);
/// ```
pub fn parse_leading_int(text: &str) -> Option<i64> {
    let s = text.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let mut value: i64 = 0;
    let mut seen_digit = false;
    for b in digits.bytes() {
        if !b.is_ascii_digit() {
            break;
        }
        seen_digit = true;
        let digit = (b - b'0') as i64;
        value = if negative {
            value.saturating_mul(10).saturating_sub(digit)
        } else {
            value.saturating_mul(10).saturating_add(digit)
        };
    }

    seen_digit.then_some(value)
}

/// Total one data column
pub fn column_total(store: &GridStore, col: u16) -> FooterCell {
    let mut sum: i64 = 0;
    let mut has_valid_value = false;

    for row in 0..store.num_rows() {
        if let Some(n) = parse_leading_int(store.value(GridAddress::new(col, row))) {
            sum = sum.saturating_add(n);
            has_valid_value = true;
        }
    }

    if sum == 0 && has_valid_value {
        FooterCell::ValidZero
    } else {
        FooterCell::Sum(sum)
    }
}

/// Compute the footer row: exactly one cell per column
pub fn aggregate(store: &GridStore) -> Vec<FooterCell> {
    (0..store.num_cols())
        .map(|col| {
            if col == 0 {
                FooterCell::Label
            } else {
                column_total(store, col)
            }
        })
        .collect()
}
