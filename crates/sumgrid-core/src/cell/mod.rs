//! Cell addressing and storage
//!
//! This module contains:
//! - [`GridAddress`] - A cell's location as (column, row)
//! - [`DisplayRow`] - The 1-based row encoding used by row selection
//! - [`GridStore`] - The grid's values and dimensions

mod address;
mod storage;

pub use address::{column_letter, header_labels, DisplayRow, GridAddress};
pub use storage::GridStore;
