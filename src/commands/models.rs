use crate::utils::config::{
    DEFAULT_ASSETS_DIR, DEFAULT_LANG, DEFAULT_MAPPING_FILE, DEFAULT_OUTPUT_DIR, DEFAULT_SOURCE_DIR,
};
use std::path::PathBuf;

/// Arguments for the build command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct BuildArgs {
    /// Root of the source documents
    pub source: PathBuf,

    /// Translation table
    pub mapping: PathBuf,

    /// Directory holding css/, js/ and img/
    pub assets: PathBuf,

    /// Root of the generated site
    pub output: PathBuf,

    /// Language segment of the output paths
    pub lang: String,

    /// Print a text hours summary per cycle
    pub print_summary: bool,
}

impl Default for BuildArgs {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE_DIR),
            mapping: PathBuf::from(DEFAULT_MAPPING_FILE),
            assets: PathBuf::from(DEFAULT_ASSETS_DIR),
            output: PathBuf::from(DEFAULT_OUTPUT_DIR),
            lang: DEFAULT_LANG.to_string(),
            print_summary: false,
        }
    }
}

/// Arguments for the check command
#[derive(Debug, Clone)]
pub struct CheckArgs {
    pub source: PathBuf,
    pub mapping: PathBuf,
}

impl Default for CheckArgs {
    fn default() -> Self {
        Self {
            source: PathBuf::from(DEFAULT_SOURCE_DIR),
            mapping: PathBuf::from(DEFAULT_MAPPING_FILE),
        }
    }
}

/// Per-cycle result of a build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuiltPage {
    pub year: String,
    pub cycle: String,
    pub path: PathBuf,
}
