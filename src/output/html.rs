//! HTML page writer.

use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Location of a cycle page: `{output}/{lang}/{year}/{cycle lowercased}/index.html`
pub fn page_path(output_dir: &Path, lang: &str, year: &str, cycle: &str) -> PathBuf {
    output_dir
        .join(lang)
        .join(year)
        .join(cycle.to_lowercase())
        .join("index.html")
}

/// Write a rendered page to a file
///
/// **Public** - main entry point for page output
///
/// # Arguments
/// * `html` - Complete document from the renderer
/// * `output_path` - Path to the output file
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path is empty, a directory, or its parent cannot be created
pub fn write_html(html: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing page to: {}", output_path.display());

    validate_html_path(output_path)?;

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(html.as_bytes())?;
    writer.flush()?;

    info!(
        "Page written successfully ({} bytes, {:.2} KB)",
        html.len(),
        html.len() as f64 / 1024.0
    );
    Ok(())
}

/// **Private** - internal validation
fn validate_html_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    if path.extension().is_some_and(|ext| ext != "html") {
        debug!("File does not have .html extension: {}", path.display());
    }

    Ok(())
}
