//! # secreq-report: Pipeline & Artifacts
//!
//! Top of the library stack: runs the extraction pipeline over a document
//! and renders the results.
//!
//! - [`PipelineConfig`]: optional YAML configuration (thresholds, source
//!   tag, replacement taxonomy).
//! - [`Pipeline`]: source → text → findings → [`ParseResult`] plus
//!   coordinate mapping, bundled as a [`Report`].
//! - [`export`]: the structured JSON, coordinate JSON and CSV artifacts.
//!
//! ## Failure Policy
//!
//! Only a document with no readable text fails a run
//! ([`ReportError::Source`]); no partial result is produced. Unreadable
//! pages are skipped and listed in [`Report::skipped_units`].

pub mod config;
pub mod error;
pub mod export;
pub mod pipeline;
pub mod result;

// Re-export primary types.
pub use config::PipelineConfig;
pub use error::{ReportError, ReportResult};
pub use export::{
    coordinates_json, result_json, spreadsheet_rows, write_artifacts, write_csv, ArtifactPaths,
    SpreadsheetRow, TABLE_HEADER,
};
pub use pipeline::{Pipeline, Report};
pub use result::{CharacteristicReport, ParseMetadata, ParseResult, PARSER_VERSION};
