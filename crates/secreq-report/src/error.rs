//! Report error types.
//!
//! Wraps the failures of the layers below (source, taxonomy) and adds the
//! I/O and serialization failures of loading configuration and writing
//! artifacts. Every variant carries the path involved where there is one.

use std::path::PathBuf;

use thiserror::Error;

use secreq_core::TaxonomyError;
use secreq_source::SourceError;

/// Errors raised while running the pipeline or writing its outputs.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The document could not be read.
    #[error(transparent)]
    Source(#[from] SourceError),

    /// The configured taxonomy is invalid.
    #[error("invalid taxonomy: {0}")]
    Taxonomy(#[from] TaxonomyError),

    /// The configuration file could not be read.
    #[error("failed to read config at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The configuration file is not valid YAML for [`PipelineConfig`](crate::PipelineConfig).
    #[error("failed to parse config at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// Inline configuration text is not valid.
    #[error("invalid config: {0}")]
    Config(#[from] serde_yaml::Error),

    /// JSON serialization failed.
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV serialization failed.
    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),

    /// An artifact could not be written.
    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type alias for report operations.
pub type ReportResult<T> = Result<T, ReportError>;
