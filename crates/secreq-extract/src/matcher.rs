//! # Candidate Matching
//!
//! Finds requirement-like statements and gap statements in raw text. The
//! [`CandidateMatcher`] trait is the seam for alternative strategies;
//! [`PatternMatcher`] is the regex implementation used in production.
//!
//! ## Patterns
//!
//! ```text
//! tagged:   REQ-<LETTERS>-<3 digits>: <rest of line>
//! bulleted: (• | ▪) <body containing requirement|must|shall|should>
//! gap:      [ws/bullet] GAP-<3 digits> ... <characteristic name> <rest of line>
//! ```
//!
//! Tagged matches come first, then bulleted matches, each in text order.
//! A bulleted `REQ-...` line therefore yields two candidates.

use std::collections::BTreeMap;

use regex::Regex;

use secreq_core::Characteristic;

/// How a candidate was found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CandidateOrigin {
    /// Matched `REQ-<id>: ...`. The identifier is diagnostic only.
    Tagged {
        /// Identifier without the `REQ-` prefix, e.g. `CONF-001`.
        id: String,
    },
    /// Matched a bullet containing a modal word.
    Bulleted,
}

/// A requirement-like statement, before characteristic attribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    /// Statement text, untrimmed.
    pub text: String,
    /// Which pattern produced it.
    pub origin: CandidateOrigin,
}

/// Strategy for locating candidates and gap statements.
pub trait CandidateMatcher {
    /// Every requirement candidate in `text`, in extraction order.
    fn extract_candidates(&self, text: &str) -> Vec<Candidate>;

    /// Descriptions of gap statements in `text` that mention
    /// `characteristic`, in text order.
    fn extract_gaps(&self, text: &str, characteristic: Characteristic) -> Vec<String>;
}

const TAGGED_PATTERN: &str = r"REQ-([A-Z]+-\d{3}):\s*([^\n]+)";
const BULLETED_PATTERN: &str = r"(?i)[•▪]\s*([^•\n]+(?:requirement|must|shall|should)[^•\n]+)";

/// Characters stripped from the front of a gap description.
const GAP_SEPARATORS: &[char] = &[',', ':', ';', '|', '-'];

/// Regex-based [`CandidateMatcher`]. Patterns are compiled once.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    tagged: Regex,
    bulleted: Regex,
    gaps: BTreeMap<Characteristic, Regex>,
}

impl PatternMatcher {
    /// Compile the requirement and per-characteristic gap patterns.
    pub fn new() -> Self {
        let gaps = Characteristic::all()
            .iter()
            .map(|&c| (c, gap_pattern(c)))
            .collect();
        Self {
            tagged: Regex::new(TAGGED_PATTERN).expect("BUG: tagged requirement pattern is invalid"),
            bulleted: Regex::new(BULLETED_PATTERN)
                .expect("BUG: bulleted requirement pattern is invalid"),
            gaps,
        }
    }
}

impl Default for PatternMatcher {
    fn default() -> Self {
        Self::new()
    }
}

fn gap_pattern(characteristic: Characteristic) -> Regex {
    let pattern = format!(
        r"(?mi)^[ \t•▪]*GAP-\d{{3}}\b[^\n]*?{}([^\n]*)",
        regex::escape(characteristic.as_str())
    );
    Regex::new(&pattern).expect("BUG: gap pattern built from a characteristic name is invalid")
}

impl CandidateMatcher for PatternMatcher {
    fn extract_candidates(&self, text: &str) -> Vec<Candidate> {
        let tagged = self.tagged.captures_iter(text).map(|caps| Candidate {
            text: caps[2].to_string(),
            origin: CandidateOrigin::Tagged {
                id: caps[1].to_string(),
            },
        });
        let bulleted = self.bulleted.captures_iter(text).map(|caps| Candidate {
            text: caps[1].to_string(),
            origin: CandidateOrigin::Bulleted,
        });
        tagged.chain(bulleted).collect()
    }

    fn extract_gaps(&self, text: &str, characteristic: Characteristic) -> Vec<String> {
        let Some(pattern) = self.gaps.get(&characteristic) else {
            return Vec::new();
        };
        pattern
            .captures_iter(text)
            .map(|caps| {
                let rest = caps[1]
                    .trim_start_matches(|ch: char| ch.is_whitespace() || GAP_SEPARATORS.contains(&ch))
                    .trim_end();
                if rest.is_empty() {
                    // Nothing after the name: keep the whole statement.
                    caps[0].trim().to_string()
                } else {
                    rest.to_string()
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(candidates: &[Candidate]) -> Vec<&str> {
        candidates.iter().map(|c| c.text.as_str()).collect()
    }

    #[test]
    fn tagged_requirement_drops_identifier() {
        let matcher = PatternMatcher::new();
        let found = matcher.extract_candidates("REQ-CONF-001: Implement AES-256 encryption\n");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].text, "Implement AES-256 encryption");
        assert_eq!(
            found[0].origin,
            CandidateOrigin::Tagged {
                id: "CONF-001".into()
            }
        );
    }

    #[test]
    fn tagged_requirement_matches_mid_line() {
        let matcher = PatternMatcher::new();
        let found = matcher.extract_candidates("see REQ-AUTH-002:   Lock after 3 attempts");
        assert_eq!(texts(&found), ["Lock after 3 attempts"]);
    }

    #[test]
    fn tagged_pattern_is_case_sensitive() {
        let matcher = PatternMatcher::new();
        assert!(matcher.extract_candidates("req-conf-001: lowercase id").is_empty());
        assert!(matcher.extract_candidates("REQ-CONF-01: two digits").is_empty());
    }

    #[test]
    fn bulleted_requirement_needs_modal_word() {
        let matcher = PatternMatcher::new();
        let text = "• The device MUST encrypt stored data\n• Nice colours\n▪ Operators should be trained\n";
        let found = matcher.extract_candidates(text);
        assert_eq!(
            texts(&found),
            ["The device MUST encrypt stored data", "Operators should be trained"]
        );
        assert!(found.iter().all(|c| c.origin == CandidateOrigin::Bulleted));
    }

    #[test]
    fn bulleted_tagged_line_yields_both_candidates() {
        let matcher = PatternMatcher::new();
        let text = "• REQ-CONF-004: Maintain audit logs for 7 years per HIPAA requirements\n";
        let found = matcher.extract_candidates(text);
        assert_eq!(
            texts(&found),
            [
                "Maintain audit logs for 7 years per HIPAA requirements",
                "REQ-CONF-004: Maintain audit logs for 7 years per HIPAA requirements",
            ]
        );
    }

    #[test]
    fn tagged_candidates_precede_bulleted() {
        let matcher = PatternMatcher::new();
        let text = "• Backups shall run nightly\nREQ-AVAIL-001: Achieve 99.999% uptime\n";
        let found = matcher.extract_candidates(text);
        assert!(matches!(found[0].origin, CandidateOrigin::Tagged { .. }));
        assert_eq!(found[1].origin, CandidateOrigin::Bulleted);
    }

    #[test]
    fn gap_captures_rest_of_line() {
        let matcher = PatternMatcher::new();
        let text = "GAP-001, Confidentiality, No quantum-resistant encryption, Plan migration\n";
        let gaps = matcher.extract_gaps(text, Characteristic::Confidentiality);
        assert_eq!(gaps, ["No quantum-resistant encryption, Plan migration"]);
        assert!(matcher.extract_gaps(text, Characteristic::Integrity).is_empty());
    }

    #[test]
    fn gap_name_is_case_insensitive_and_bullets_allowed() {
        let matcher = PatternMatcher::new();
        let text = "  • GAP-007 | human/trust | Alarm fatigue unaddressed\n";
        let gaps = matcher.extract_gaps(text, Characteristic::HumanTrust);
        assert_eq!(gaps, ["Alarm fatigue unaddressed"]);
    }

    #[test]
    fn gap_must_start_line() {
        let matcher = PatternMatcher::new();
        let text = "see GAP-001 Availability backup power\n";
        assert!(matcher.extract_gaps(text, Characteristic::Availability).is_empty());
    }

    #[test]
    fn gap_without_description_keeps_statement() {
        let matcher = PatternMatcher::new();
        let gaps = matcher.extract_gaps("GAP-003 Integrity\n", Characteristic::Integrity);
        assert_eq!(gaps, ["GAP-003 Integrity"]);
    }

    #[test]
    fn gaps_are_listed_in_text_order() {
        let matcher = PatternMatcher::new();
        let text = "GAP-001 Availability: no UPS\nfiller\nGAP-002 Availability: no failover\n";
        let gaps = matcher.extract_gaps(text, Characteristic::Availability);
        assert_eq!(gaps, ["no UPS", "no failover"]);
    }
}
