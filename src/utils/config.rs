//! Configuration and constants for the CLI.

/// Default root of the source documents
pub const DEFAULT_SOURCE_DIR: &str = "src";

/// Default translation table
pub const DEFAULT_MAPPING_FILE: &str = "templates/mapping.toml";

/// Default directory holding css/, js/ and img/
pub const DEFAULT_ASSETS_DIR: &str = "www";

/// Default root of the generated site
pub const DEFAULT_OUTPUT_DIR: &str = "public";

/// Default output language segment
pub const DEFAULT_LANG: &str = "fr";

// Stylesheets and scripts inlined into every page, relative to the assets dir
pub const CSS_ASSETS: &[&str] = &[
    "css/bootstrap.min.css",
    "css/syllabus.css",
    "css/katex-fontless.css",
];
pub const JS_ASSETS: &[&str] = &[
    "js/bootstrap.bundle.min.js",
    "js/katex.min.js",
    "js/auto-render.min.js",
];

/// Optional header logo, relative to the assets dir
pub const LOGO_ASSET: &str = "img/logo/logo.svg";

/// Optional download icon, relative to the assets dir
pub const DOWNLOAD_ASSET: &str = "img/symbol/download.svg";

// Source file names that are not ECUE documents
pub const UE_DOCUMENT_STEM: &str = ".ue";
pub const PREAMBLE_DOCUMENT_STEM: &str = ".preamble";

/// Labels of the synthetic recap rows; highlighting keys off this prefix
pub const TOTAL_PREFIX: &str = "Total";
pub const TOTAL_UE_LABEL: &str = "Total UE";
pub const TOTAL_SEMESTER_LABEL: &str = "Total Semestre";
