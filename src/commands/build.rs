//! Build command implementation.
//!
//! The build command:
//! 1. Loads the translation table
//! 2. Loads and aggregates the source documents
//! 3. Loads the inlined assets
//! 4. Renders and writes one page per cycle

use super::models::{BuildArgs, BuiltPage};
use crate::aggregator::generate_text_summary;
use crate::output::{page_path, write_html};
use crate::parser::load_syllabus;
use crate::render::{render_cycle, Assets};
use crate::utils::Translations;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::time::Instant;

/// Execute the build command
///
/// **Public** - main entry point called from main.rs
///
/// # Arguments
/// * `args` - Build command arguments
///
/// # Returns
/// The pages written, in year then cycle order
///
/// # Errors
/// * Unreadable or invalid translation table
/// * Source document errors (parse, validation, duplicates)
/// * Missing stylesheet or script assets
/// * File write errors
pub fn execute_build(args: BuildArgs) -> Result<Vec<BuiltPage>> {
    let start_time = Instant::now();

    info!("Starting build from: {}", args.source.display());

    info!("Step 1/4: Loading translations...");
    let tr = Translations::load(&args.mapping)
        .with_context(|| format!("Failed to load translations from {}", args.mapping.display()))?;
    debug!("{} translation entries", tr.len());

    info!("Step 2/4: Loading source documents...");
    let syllabus = load_syllabus(&args.source).context("Failed to load source documents")?;
    if syllabus.is_empty() {
        warn!("No cycle found under {}", args.source.display());
    }

    info!("Step 3/4: Loading assets...");
    let assets = Assets::load(&args.assets).context("Failed to load page assets")?;

    info!("Step 4/4: Rendering pages...");
    let mut pages = Vec::new();
    for (year, cycle) in syllabus.cycles() {
        debug!(
            "Rendering {}/{}: {} UEs, {} ECUEs",
            year,
            cycle.code,
            cycle.ue_count(),
            cycle.ecue_count()
        );
        let html = render_cycle(cycle, &tr, &assets);
        let path = page_path(&args.output, &args.lang, year, &cycle.code);
        write_html(&html, &path)
            .with_context(|| format!("Failed to write page for cycle {}", cycle.code))?;
        info!("✓ Cycle {} written to: {}", cycle.code, path.display());

        if args.print_summary {
            println!("\n{}\n", generate_text_summary(cycle, &tr));
        }

        pages.push(BuiltPage {
            year: year.to_string(),
            cycle: cycle.code.clone(),
            path,
        });
    }

    let elapsed = start_time.elapsed();
    info!("Build completed in {:.2}s ({} pages)", elapsed.as_secs_f64(), pages.len());

    Ok(pages)
}

/// Validate build arguments
///
/// **Public** - can be called before execute_build for early validation
///
/// # Arguments
/// * `args` - Arguments to validate
///
/// # Returns
/// Ok if arguments are valid, Err with message if not
pub fn validate_args(args: &BuildArgs) -> Result<()> {
    if args.source.as_os_str().is_empty() {
        anyhow::bail!("Source directory cannot be empty");
    }

    if !args.source.is_dir() {
        anyhow::bail!("Source directory does not exist: {}", args.source.display());
    }

    if args.mapping.as_os_str().is_empty() {
        anyhow::bail!("Mapping file cannot be empty");
    }

    if args.assets.as_os_str().is_empty() {
        anyhow::bail!("Assets directory cannot be empty");
    }

    if args.output.as_os_str().is_empty() {
        anyhow::bail!("Output directory cannot be empty");
    }

    if args.lang.trim().is_empty() {
        anyhow::bail!("Language cannot be empty");
    }

    Ok(())
}
