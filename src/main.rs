//! Syllabus CLI
//!
//! Generates one static HTML page per cycle from the course documents,
//! with aggregated workload tables.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use syllabus_recap::commands::{
    check_sources, display_version, execute_build, validate_args, BuildArgs, CheckArgs,
};
use syllabus_recap::utils::config::{
    DEFAULT_ASSETS_DIR, DEFAULT_LANG, DEFAULT_MAPPING_FILE, DEFAULT_OUTPUT_DIR, DEFAULT_SOURCE_DIR,
};

/// Syllabus - static HTML syllabus generator
#[derive(Parser, Debug)]
#[command(name = "syllabus")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Load the sources and write one page per cycle
    Build {
        /// Root of the source documents
        #[arg(short, long, env = "SYLLABUS_SOURCE", default_value = DEFAULT_SOURCE_DIR)]
        source: PathBuf,

        /// Translation table (TOML)
        #[arg(short, long, env = "SYLLABUS_MAPPING", default_value = DEFAULT_MAPPING_FILE)]
        mapping: PathBuf,

        /// Directory holding css/, js/ and img/
        #[arg(short, long, env = "SYLLABUS_ASSETS", default_value = DEFAULT_ASSETS_DIR)]
        assets: PathBuf,

        /// Root of the generated site
        #[arg(short, long, env = "SYLLABUS_OUTPUT", default_value = DEFAULT_OUTPUT_DIR)]
        output: PathBuf,

        /// Language segment of the output paths
        #[arg(short, long, env = "SYLLABUS_LANG", default_value = DEFAULT_LANG)]
        lang: String,

        /// Print a text hours summary per cycle
        #[arg(long)]
        summary: bool,
    },

    /// Load and validate the sources without writing anything
    Check {
        /// Root of the source documents
        #[arg(short, long, env = "SYLLABUS_SOURCE", default_value = DEFAULT_SOURCE_DIR)]
        source: PathBuf,

        /// Translation table (TOML)
        #[arg(short, long, env = "SYLLABUS_MAPPING", default_value = DEFAULT_MAPPING_FILE)]
        mapping: PathBuf,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    // Execute command
    match cli.command {
        Commands::Build {
            source,
            mapping,
            assets,
            output,
            lang,
            summary,
        } => {
            let args = BuildArgs {
                source,
                mapping,
                assets,
                output,
                lang,
                print_summary: summary,
            };

            // Validate args first
            validate_args(&args)?;

            execute_build(args)?;
        }

        Commands::Check { source, mapping } => {
            check_sources(&CheckArgs { source, mapping })?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
