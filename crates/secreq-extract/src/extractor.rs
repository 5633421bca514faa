//! # Requirement Extractor
//!
//! Turns a text stream into [`Findings`]: candidates from the matcher are
//! attributed to every characteristic whose keywords they contain,
//! classified on the secondary axes, and collected together with the
//! characteristic's gap statements. A characteristic left with too few
//! requirements also receives an implicit gap.

use secreq_core::{Characteristic, Findings, Gap, Requirement, Taxonomy};

use crate::classifier::AxisClassifier;
use crate::matcher::{CandidateMatcher, PatternMatcher};

/// Tunables for extraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionPolicy {
    /// A characteristic with fewer requirements than this receives an
    /// implicit gap.
    pub implicit_gap_below: usize,
}

impl Default for ExtractionPolicy {
    fn default() -> Self {
        Self {
            implicit_gap_below: 2,
        }
    }
}

/// Extracts findings from text using a taxonomy and a matching strategy.
#[derive(Debug, Clone)]
pub struct Extractor<'t, M: CandidateMatcher = PatternMatcher> {
    taxonomy: &'t Taxonomy,
    matcher: M,
    policy: ExtractionPolicy,
}

impl<'t> Extractor<'t, PatternMatcher> {
    /// An extractor using the regex matcher and the default policy.
    pub fn new(taxonomy: &'t Taxonomy) -> Self {
        Self::with_matcher(taxonomy, PatternMatcher::new())
    }
}

impl<'t, M: CandidateMatcher> Extractor<'t, M> {
    /// An extractor using a custom matching strategy.
    pub fn with_matcher(taxonomy: &'t Taxonomy, matcher: M) -> Self {
        Self {
            taxonomy,
            matcher,
            policy: ExtractionPolicy::default(),
        }
    }

    /// Replace the extraction policy.
    pub fn with_policy(mut self, policy: ExtractionPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The taxonomy in use.
    pub fn taxonomy(&self) -> &'t Taxonomy {
        self.taxonomy
    }

    /// Extract requirements and gaps for every characteristic.
    pub fn extract(&self, text: &str) -> Findings {
        let candidates = self.matcher.extract_candidates(text);
        let classifier = AxisClassifier::new(self.taxonomy);
        let lowered: Vec<String> = candidates.iter().map(|c| c.text.to_lowercase()).collect();

        let mut findings = Findings::new();
        for &characteristic in Characteristic::all() {
            let bucket = findings.get_mut(characteristic);

            for (candidate, lowered) in candidates.iter().zip(&lowered) {
                if !self.taxonomy.matches_lowered(characteristic, lowered) {
                    continue;
                }
                let axes = classifier.classify(&candidate.text);
                bucket.requirements.push(Requirement::new(
                    candidate.text.trim(),
                    characteristic,
                    axes.info_state,
                    axes.measure_type,
                ));
            }

            bucket.gaps.extend(
                self.matcher
                    .extract_gaps(text, characteristic)
                    .into_iter()
                    .map(|description| Gap::identified(description, characteristic)),
            );

            if bucket.count() < self.policy.implicit_gap_below {
                bucket.gaps.push(Gap::implicit(characteristic));
            }

            tracing::debug!(
                characteristic = %characteristic,
                requirements = bucket.count(),
                gaps = bucket.gaps.len(),
                "extracted characteristic"
            );
        }
        findings
    }
}
