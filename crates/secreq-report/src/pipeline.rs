//! # Pipeline
//!
//! Wires the stages together for one document:
//!
//! ```text
//! TextSource ─► extract_text ─► Extractor ─► Findings ─┬─► aggregate ─► ParseResult
//!                                                      └─► project   ─► CoordinateMap
//! ```
//!
//! A [`Pipeline`] owns its taxonomy and compiled patterns and can run any
//! number of documents. Each run owns its outputs exclusively.

use std::path::Path;

use chrono::{DateTime, Utc};

use secreq_core::{Taxonomy, TaxonomyError};
use secreq_extract::{ExtractionPolicy, Extractor, PatternMatcher};
use secreq_lattice::{project, CoordinateMap, CoveragePolicy};
use secreq_source::{extract_text, open_source, TextSource, UnitFailure};

use crate::config::PipelineConfig;
use crate::error::ReportResult;
use crate::result::{ParseMetadata, ParseResult};

/// Outputs of one run.
#[derive(Debug, Clone)]
pub struct Report {
    /// The structured result.
    pub result: ParseResult,
    /// The coordinate-keyed mapping.
    pub coordinates: CoordinateMap,
    /// Units the document reported.
    pub units_total: usize,
    /// Units skipped because they could not be read, in unit order.
    pub skipped_units: Vec<UnitFailure>,
}

/// A configured extraction pipeline.
#[derive(Debug, Clone)]
pub struct Pipeline {
    taxonomy: Taxonomy,
    matcher: PatternMatcher,
    extraction: ExtractionPolicy,
    coverage: CoveragePolicy,
    source_tag: Option<String>,
}

impl Pipeline {
    /// Build a pipeline from configuration.
    pub fn new(config: &PipelineConfig) -> Result<Self, TaxonomyError> {
        Ok(Self {
            taxonomy: config.taxonomy()?,
            matcher: PatternMatcher::new(),
            extraction: config.extraction_policy(),
            coverage: config.coverage_policy(),
            source_tag: config.source_tag.clone(),
        })
    }

    /// The taxonomy in use.
    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// Open and parse the document at `path`.
    pub fn parse_path(&self, path: &Path) -> ReportResult<Report> {
        let source = open_source(path)?;
        self.parse_source(source.as_ref())
    }

    /// Parse a document from any text source.
    ///
    /// Fails only when no text at all could be read. Unreadable units are
    /// listed in [`Report::skipped_units`].
    pub fn parse_source(&self, source: &dyn TextSource) -> ReportResult<Report> {
        let extracted = extract_text(source)?;
        let mut report = self.parse_text_at(&extracted.document, &extracted.text, Utc::now());
        report.units_total = extracted.units_total;
        report.skipped_units = extracted.failures;
        Ok(report)
    }

    /// Parse text that has already been extracted, stamped with the current
    /// time.
    pub fn parse_text(&self, document: &str, text: &str) -> Report {
        self.parse_text_at(document, text, Utc::now())
    }

    /// Parse text that has already been extracted, stamped with `parsed_at`.
    pub fn parse_text_at(&self, document: &str, text: &str, parsed_at: DateTime<Utc>) -> Report {
        let findings = Extractor::with_matcher(&self.taxonomy, self.matcher.clone())
            .with_policy(self.extraction)
            .extract(text);

        let metadata = ParseMetadata::new(document, text, parsed_at);
        let result = ParseResult::from_findings(metadata, &findings, &self.coverage);

        let source_tag = self.source_tag.as_deref().unwrap_or(document);
        let coordinates = project(&findings, source_tag);

        tracing::info!(
            document,
            requirements = result.summary.total_requirements,
            gaps = result.summary.total_gaps,
            coordinates = coordinates.len(),
            collisions = coordinates.collisions().len(),
            "parsed document"
        );

        Report {
            result,
            coordinates,
            units_total: 1,
            skipped_units: Vec::new(),
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self {
            taxonomy: Taxonomy::builtin(),
            matcher: PatternMatcher::new(),
            extraction: ExtractionPolicy::default(),
            coverage: CoveragePolicy::default(),
            source_tag: None,
        }
    }
}
