//! Source document loading.
//!
//! This module handles:
//! - Walking the source tree for TOML, JSON and YAML documents
//! - Deserializing and validating ECUE, UE and preamble documents
//! - Assembling the aggregated syllabus in code order

pub mod loader;
pub mod schema;

// Re-export main types
pub use loader::{load_syllabus, read_document, semester_of, DocumentFormat};
pub use schema::{EcueDocument, PreambleDocument, UeDocument};
