//! # Classify Subcommand
//!
//! Shows how a single statement is attributed and classified, without
//! running pattern extraction.

use anyhow::{Context, Result};
use clap::Args;

use secreq_core::Coordinate;
use secreq_extract::AxisClassifier;
use secreq_report::PipelineConfig;

/// Arguments for the `secreq classify` subcommand.
#[derive(Args, Debug)]
pub struct ClassifyArgs {
    /// Statement to classify. Multiple words are joined with spaces.
    #[arg(value_name = "TEXT", required = true, num_args = 1..)]
    pub text: Vec<String>,
}

/// One line per attributed characteristic: `(characteristic, coordinate)`.
pub fn classify_lines(text: &str, config: &PipelineConfig) -> Result<Vec<String>> {
    let taxonomy = config
        .taxonomy()
        .context("invalid taxonomy in configuration")?;
    let axes = AxisClassifier::new(&taxonomy).classify(text);
    Ok(taxonomy
        .characteristics_for(text)
        .into_iter()
        .map(|c| {
            let coordinate = Coordinate::new(c, axes.info_state, axes.measure_type);
            format!("{}  [{}]", coordinate.description(), coordinate)
        })
        .collect())
}

/// Execute the classify subcommand.
pub fn run_classify(args: &ClassifyArgs, config: &PipelineConfig) -> Result<u8> {
    let text = args.text.join(" ");
    let lines = classify_lines(&text, config)?;
    if lines.is_empty() {
        println!("No characteristic keywords matched; the statement would be dropped.");
        return Ok(0);
    }
    for line in lines {
        println!("{line}");
    }
    Ok(0)
}
