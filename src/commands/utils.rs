use super::models::CheckArgs;
use crate::parser::load_syllabus;
use crate::utils::Translations;
use anyhow::{Context, Result};

/// Load and validate the sources without rendering
pub fn check_sources(args: &CheckArgs) -> Result<()> {
    println!("Checking sources: {}", args.source.display());

    let tr = Translations::load(&args.mapping)
        .with_context(|| format!("Failed to load translations from {}", args.mapping.display()))?;
    let syllabus = load_syllabus(&args.source).context("Failed to load source documents")?;

    println!("✓ Valid sources");
    println!("  Translations: {}", tr.len());
    for (year, cycle) in syllabus.cycles() {
        println!(
            "  {}/{}: {} semesters, {} UEs, {} ECUEs",
            year,
            cycle.code,
            cycle.semesters().len(),
            cycle.ue_count(),
            cycle.ecue_count()
        );
    }

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("Syllabus v{}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("A static HTML syllabus generator with workload recaps.");
}
