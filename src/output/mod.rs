//! Output writers for generated pages.
//!
//! One `index.html` per cycle, laid out by language, year and cycle.

pub mod html;

// Re-export main functions
pub use html::{page_path, write_html};
