//! # Parse Result
//!
//! The root aggregate of a run, shaped exactly like the structured JSON
//! artifact:
//!
//! ```text
//! { metadata: { document, parsed_date, parser_version, text_digest },
//!   characteristics: { <C>: { requirements, gaps, count } },
//!   summary: { total_requirements, total_gaps, coverage: { <C>: Good|Limited } } }
//! ```
//!
//! Built once from [`Findings`] and never modified afterwards.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use secreq_core::{Characteristic, Findings, Gap, Requirement};
use secreq_lattice::{aggregate, CoveragePolicy, CoverageSummary};

/// Version tag written into every result.
pub const PARSER_VERSION: &str = "1.0";

/// Provenance of a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseMetadata {
    /// Document file name.
    pub document: String,
    /// When the document was parsed, RFC 3339 UTC.
    pub parsed_date: String,
    /// Always [`PARSER_VERSION`].
    pub parser_version: String,
    /// SHA-256 hex digest of the extracted text.
    pub text_digest: String,
}

impl ParseMetadata {
    /// Metadata for `document` parsed at `parsed_at`.
    pub fn new(document: impl Into<String>, text: &str, parsed_at: DateTime<Utc>) -> Self {
        Self {
            document: document.into(),
            parsed_date: parsed_at.format("%Y-%m-%dT%H:%M:%SZ").to_string(),
            parser_version: PARSER_VERSION.to_string(),
            text_digest: secreq_core::text_digest(text),
        }
    }
}

/// Requirements, gaps and requirement count for one characteristic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacteristicReport {
    /// Attributed requirements, in extraction order.
    pub requirements: Vec<Requirement>,
    /// Textual gaps, then the implicit gap if one was added.
    pub gaps: Vec<Gap>,
    /// Number of requirements.
    pub count: usize,
}

/// Everything a run produced, except the coordinate mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseResult {
    /// Document, timestamp, parser version and text digest.
    pub metadata: ParseMetadata,
    /// One entry per characteristic, in canonical order.
    pub characteristics: BTreeMap<Characteristic, CharacteristicReport>,
    /// Totals and per-characteristic coverage verdicts.
    pub summary: CoverageSummary,
}

impl ParseResult {
    /// Assemble a result from extraction findings.
    pub fn from_findings(
        metadata: ParseMetadata,
        findings: &Findings,
        coverage: &CoveragePolicy,
    ) -> Self {
        let characteristics = findings
            .iter()
            .map(|(c, bucket)| {
                (
                    c,
                    CharacteristicReport {
                        requirements: bucket.requirements.clone(),
                        gaps: bucket.gaps.clone(),
                        count: bucket.count(),
                    },
                )
            })
            .collect();
        Self {
            metadata,
            characteristics,
            summary: aggregate(findings, coverage),
        }
    }

    /// Report for one characteristic.
    pub fn characteristic(&self, characteristic: Characteristic) -> Option<&CharacteristicReport> {
        self.characteristics.get(&characteristic)
    }

    /// File stem of the document, used to name artifacts.
    pub fn document_stem(&self) -> String {
        std::path::Path::new(&self.metadata.document)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| "document".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use secreq_core::{InformationState, MeasureType};

    fn fixed_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 14, 9, 26, 53).unwrap()
    }

    #[test]
    fn metadata_fields() {
        let metadata = ParseMetadata::new("spec.pdf", "abc", fixed_time());
        assert_eq!(metadata.parsed_date, "2026-03-14T09:26:53Z");
        assert_eq!(metadata.parser_version, "1.0");
        assert_eq!(
            metadata.text_digest,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn result_mirrors_findings() {
        let mut findings = Findings::new();
        findings
            .get_mut(Characteristic::Integrity)
            .requirements
            .push(Requirement::new(
                "Verify firmware signature",
                Characteristic::Integrity,
                InformationState::Processing,
                MeasureType::Technology,
            ));
        findings
            .get_mut(Characteristic::Integrity)
            .gaps
            .push(Gap::implicit(Characteristic::Integrity));

        let metadata = ParseMetadata::new("spec.pdf", "text", fixed_time());
        let result = ParseResult::from_findings(metadata, &findings, &CoveragePolicy::default());

        assert_eq!(result.characteristics.len(), 5);
        let integrity = result.characteristic(Characteristic::Integrity).unwrap();
        assert_eq!(integrity.count, 1);
        assert_eq!(integrity.gaps.len(), 1);
        assert_eq!(result.summary.total_requirements, 1);
        assert_eq!(result.summary.total_gaps, 1);
    }

    #[test]
    fn json_shape() {
        let metadata = ParseMetadata::new("spec.pdf", "text", fixed_time());
        let result = ParseResult::from_findings(metadata, &Findings::new(), &CoveragePolicy::default());
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["metadata"]["document"], "spec.pdf");
        assert_eq!(json["characteristics"]["Human/Trust"]["count"], 0);
        assert_eq!(json["summary"]["coverage"]["Authentication"], "Limited");
    }

    #[test]
    fn document_stem_strips_extension() {
        let metadata = ParseMetadata::new("Ventilator_Spec.pdf", "", fixed_time());
        let result = ParseResult::from_findings(metadata, &Findings::new(), &CoveragePolicy::default());
        assert_eq!(result.document_stem(), "Ventilator_Spec");
    }
}
