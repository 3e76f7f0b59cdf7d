//! Prelude module - common imports for sumgrid users
//!
//! ```rust
//! use sumgrid_core::prelude::*;
//! ```

pub use crate::{
    // Addressing
    DisplayRow,
    // Error types
    Error,
    FooterCell,
    GridAddress,
    // Rendering
    GridRenderer,
    GridSettings,
    GridStore,
    GridView,
    Highlight,
    NoopRenderer,
    Result,

    // Selection
    Selection,
    // Main types
    SheetWidget,
};
