//! Aggregation of scheduled hours.
//!
//! This module provides:
//! - The six-category `Stats` accumulator owned by every tree node
//! - Hour formatting for display
//! - A plain-text workload summary of a cycle

pub mod stats;
pub mod summary;

// Re-export main types and functions
pub use stats::{ActivityKind, Measure, Stats};
pub use summary::generate_text_summary;
