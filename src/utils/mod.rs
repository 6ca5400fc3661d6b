//! Utility modules for configuration, error handling, and translations.

pub mod config;
pub mod error;
pub mod translations;

// Re-export commonly used error types for convenience
pub use error::{DuplicateEntityError, LoadError, OutputError, RenderError, ValidationError};
pub use translations::Translations;
