//! # secreq CLI entry point
//!
//! Parses command-line arguments, initializes logging, loads the pipeline
//! configuration and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use secreq_cli::classify::{run_classify, ClassifyArgs};
use secreq_cli::load_config;
use secreq_cli::parse::{run_parse, ParseArgs};
use secreq_cli::taxonomy::{run_taxonomy, TaxonomyArgs};

/// Security requirement extraction for technical specifications.
///
/// Extracts requirement and gap statements from a specification document,
/// attributes them to security characteristics, classifies them by
/// information state and measure type, and writes coordinate-indexed
/// results for the 5x4x3 analysis lattice.
#[derive(Parser, Debug)]
#[command(name = "secreq", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML pipeline configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Output directory for generated artifacts.
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a document and write the JSON, coordinate JSON and CSV artifacts.
    Parse(ParseArgs),

    /// Classify a single statement.
    Classify(ClassifyArgs),

    /// Print the effective keyword taxonomy as YAML.
    Taxonomy(TaxonomyArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "secreq starting");

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(1);
        }
    };

    let output_dir = cli.output_dir.unwrap_or_else(|| PathBuf::from("."));

    let result = match cli.command {
        Commands::Parse(args) => run_parse(&args, &config, &output_dir),
        Commands::Classify(args) => run_classify(&args, &config),
        Commands::Taxonomy(args) => run_taxonomy(&args, &config),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
