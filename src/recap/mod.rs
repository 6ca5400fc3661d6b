//! Cycle-wide hours recap.
//!
//! This module provides:
//! - The flat recap matrix built from an aggregated cycle
//! - The rowspan / colspan layout of its label columns
//! - The recap tab pane rendered from both

pub mod grid;
pub mod merge;
pub mod table;

pub use grid::{build_grid, format_number, Cell, GridRow, RecapGrid, LABEL_COLUMNS, RECAP_COLUMNS};
pub use merge::{CellSpan, SpanLayout};
pub use table::{render_recap, render_recap_link, RowStyle};
