//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// A child was attached twice under the same code
///
/// Attaching never overwrites: the parent and its statistics are left untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("duplicate {kind} '{code}' in '{parent}'")]
pub struct DuplicateEntityError {
    /// Kind of the rejected child ("ECUE", "ECUE slot", "UE", "semester")
    pub kind: &'static str,

    /// Code of the rejected child
    pub code: String,

    /// Code of the parent that already holds it
    pub parent: String,
}

/// A document parsed but breaks a field constraint
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{}: {message}", path.display())]
pub struct ValidationError {
    pub path: PathBuf,
    pub message: String,
}

/// Errors that can occur while discovering and loading source documents
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to walk source tree: {0}")]
    Walk(#[from] ignore::Error),

    #[error("Invalid TOML in {}: {source}", path.display())]
    Toml {
        path: PathBuf,
        source: toml::de::Error,
    },

    #[error("Invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Invalid YAML in {}: {source}", path.display())]
    Yaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("Unexpected source layout: {0}")]
    Layout(String),

    #[error("UE directory {0} has no .ue document")]
    MissingUe(String),

    #[error(transparent)]
    Invalid(#[from] ValidationError),

    #[error(transparent)]
    Duplicate(#[from] DuplicateEntityError),
}

/// Errors that can occur while assembling a page
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to read asset {}: {source}", path.display())]
    Asset {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
