//! # Parse Subcommand
//!
//! Runs the full pipeline over one document, writes the three artifacts
//! and prints a summary.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use secreq_report::{write_artifacts, Pipeline, PipelineConfig, Report};

/// Arguments for the `secreq parse` subcommand.
#[derive(Args, Debug)]
pub struct ParseArgs {
    /// Specification document: a PDF, or plain text with form-feed page breaks.
    #[arg(value_name = "DOCUMENT")]
    pub document: PathBuf,

    /// Source tag written into coordinate entries (default: document name).
    #[arg(long)]
    pub source_tag: Option<String>,
}

/// Execute the parse subcommand.
///
/// Returns exit code 0 on success. Unreadable documents are errors.
pub fn run_parse(args: &ParseArgs, config: &PipelineConfig, output_dir: &Path) -> Result<u8> {
    let mut config = config.clone();
    if args.source_tag.is_some() {
        config.source_tag = args.source_tag.clone();
    }
    let pipeline = Pipeline::new(&config).context("invalid taxonomy in configuration")?;

    let report = pipeline
        .parse_path(&args.document)
        .with_context(|| format!("failed to parse {}", args.document.display()))?;
    let paths = write_artifacts(&report, output_dir).context("failed to write artifacts")?;

    print_summary(&report);
    println!();
    println!("Wrote:");
    println!("  {}", paths.result.display());
    println!("  {}", paths.coordinates.display());
    println!("  {}", paths.table.display());

    Ok(0)
}

fn print_summary(report: &Report) {
    let summary = &report.result.summary;
    println!("Parsing complete: {}", report.result.metadata.document);
    println!("Total requirements found: {}", summary.total_requirements);
    println!("Total gaps identified: {}", summary.total_gaps);

    println!("\nCoverage by characteristic:");
    for (characteristic, verdict) in &summary.coverage {
        let count = report
            .result
            .characteristic(*characteristic)
            .map(|r| r.count)
            .unwrap_or(0);
        println!("  {characteristic}: {verdict} ({count})");
    }

    let occupancy = report.coordinates.occupancy();
    println!(
        "\nLattice cells populated: {}/{}",
        occupancy.populated, occupancy.total
    );
    let collisions = report.coordinates.collisions().len();
    if collisions > 0 {
        println!("  {collisions} requirement(s) displaced by a later one at the same cell");
    }

    if !report.skipped_units.is_empty() {
        println!(
            "\nSkipped {} of {} page(s):",
            report.skipped_units.len(),
            report.units_total
        );
        for failure in &report.skipped_units {
            println!("  page {}: {}", failure.unit + 1, failure.reason);
        }
    }
}
