//! # Pipeline Configuration
//!
//! Optional YAML configuration for a run. Every field has a default, so an
//! empty document is a valid configuration:
//!
//! ```yaml
//! implicit_gap_below: 2
//! good_coverage_at: 3
//! source_tag: "Synthetic_Ventilator_Model_1X_Spec.pdf"
//! taxonomy:
//!   characteristics:
//!     Confidentiality: [encryption, privacy]
//! ```
//!
//! A `taxonomy` section replaces the built-in vocabulary entirely.

use std::path::Path;

use serde::{Deserialize, Serialize};

use secreq_core::{Taxonomy, TaxonomyDef, TaxonomyError};
use secreq_extract::ExtractionPolicy;
use secreq_lattice::CoveragePolicy;

use crate::error::{ReportError, ReportResult};

/// Settings for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PipelineConfig {
    /// Requirement count below which a characteristic gets an implicit gap.
    pub implicit_gap_below: usize,
    /// Requirement count at which coverage is `Good`.
    pub good_coverage_at: usize,
    /// `source` written into coordinate entries. Defaults to the document
    /// name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_tag: Option<String>,
    /// Replacement taxonomy.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taxonomy: Option<TaxonomyDef>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            implicit_gap_below: ExtractionPolicy::default().implicit_gap_below,
            good_coverage_at: CoveragePolicy::default().good_at,
            source_tag: None,
            taxonomy: None,
        }
    }
}

impl PipelineConfig {
    /// Parse configuration from YAML text.
    pub fn from_yaml_str(yaml: &str) -> ReportResult<Self> {
        // serde_yaml rejects an empty document; treat it as all defaults.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Load configuration from a YAML file.
    pub fn load(path: &Path) -> ReportResult<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ReportError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        let config = serde_yaml::from_str(&text).map_err(|source| ReportError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded pipeline config");
        Ok(config)
    }

    /// The effective taxonomy: the configured one, or the built-in table.
    pub fn taxonomy(&self) -> Result<Taxonomy, TaxonomyError> {
        match &self.taxonomy {
            Some(def) => Taxonomy::from_def(def),
            None => Ok(Taxonomy::builtin()),
        }
    }

    /// Extraction policy derived from this configuration.
    pub fn extraction_policy(&self) -> ExtractionPolicy {
        ExtractionPolicy {
            implicit_gap_below: self.implicit_gap_below,
        }
    }

    /// Coverage policy derived from this configuration.
    pub fn coverage_policy(&self) -> CoveragePolicy {
        CoveragePolicy {
            good_at: self.good_coverage_at,
        }
    }
}
