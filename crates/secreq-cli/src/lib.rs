//! # secreq-cli: Command-Line Interface
//!
//! Provides the `secreq` binary.
//!
//! ## Subcommands
//!
//! - `secreq parse <DOCUMENT>`: run the pipeline and write the JSON, coordinate
//!   JSON and CSV artifacts.
//! - `secreq classify <TEXT>...`: show how one statement would be classified.
//! - `secreq taxonomy`: print the effective keyword taxonomy as YAML.
//!
//! ```bash
//! secreq -v parse Synthetic_Ventilator_Model_1X_Spec.pdf --output-dir out/
//! secreq --config secreq.yaml classify "Store audit logs per retention policy"
//! ```

pub mod classify;
pub mod parse;
pub mod taxonomy;

use std::path::Path;

use anyhow::Result;

use secreq_report::PipelineConfig;

/// Load the pipeline configuration, or the defaults when no file is given.
pub fn load_config(path: Option<&Path>) -> Result<PipelineConfig> {
    match path {
        Some(path) => Ok(PipelineConfig::load(path)?),
        None => Ok(PipelineConfig::default()),
    }
}
