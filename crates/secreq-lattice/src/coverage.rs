//! # Coverage Aggregation
//!
//! Per-characteristic requirement counts and the run-level summary. A
//! verdict is a pure function of the count: `Good` at or above the policy
//! threshold, `Limited` below it.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use secreq_core::{Characteristic, Findings};

// ---------------------------------------------------------------------------
// CoverageVerdict
// ---------------------------------------------------------------------------

/// Coverage verdict for one characteristic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CoverageVerdict {
    /// Enough requirements were found.
    Good,
    /// Too few requirements were found.
    Limited,
}

impl CoverageVerdict {
    /// Serialized label.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Limited => "Limited",
        }
    }
}

impl fmt::Display for CoverageVerdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// CoveragePolicy
// ---------------------------------------------------------------------------

/// Threshold for a `Good` verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoveragePolicy {
    /// Minimum requirement count for `Good`.
    pub good_at: usize,
}

impl CoveragePolicy {
    /// Verdict for a requirement count.
    pub fn verdict(&self, count: usize) -> CoverageVerdict {
        if count >= self.good_at {
            CoverageVerdict::Good
        } else {
            CoverageVerdict::Limited
        }
    }
}

impl Default for CoveragePolicy {
    fn default() -> Self {
        Self { good_at: 3 }
    }
}

// ---------------------------------------------------------------------------
// CoverageSummary
// ---------------------------------------------------------------------------

/// Run-level totals and per-characteristic verdicts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverageSummary {
    /// Requirements across all characteristics.
    pub total_requirements: usize,
    /// Gaps (identified and implicit) across all characteristics.
    pub total_gaps: usize,
    /// Verdict per characteristic, in canonical order.
    pub coverage: BTreeMap<Characteristic, CoverageVerdict>,
}

impl CoverageSummary {
    /// Characteristics whose verdict is `Limited`, in canonical order.
    pub fn limited(&self) -> Vec<Characteristic> {
        self.coverage
            .iter()
            .filter(|(_, &v)| v == CoverageVerdict::Limited)
            .map(|(&c, _)| c)
            .collect()
    }
}

/// Tally `findings` into a [`CoverageSummary`].
pub fn aggregate(findings: &Findings, policy: &CoveragePolicy) -> CoverageSummary {
    let mut total_requirements = 0;
    let mut total_gaps = 0;
    let mut coverage = BTreeMap::new();
    for (characteristic, bucket) in findings.iter() {
        total_requirements += bucket.count();
        total_gaps += bucket.gaps.len();
        coverage.insert(characteristic, policy.verdict(bucket.count()));
    }
    CoverageSummary {
        total_requirements,
        total_gaps,
        coverage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use secreq_core::{Gap, InformationState, MeasureType, Requirement};

    fn findings_with(counts: &[(Characteristic, usize)]) -> Findings {
        let mut findings = Findings::new();
        for &(c, n) in counts {
            let bucket = findings.get_mut(c);
            for i in 0..n {
                bucket.requirements.push(Requirement::new(
                    format!("requirement {i}"),
                    c,
                    InformationState::DEFAULT,
                    MeasureType::DEFAULT,
                ));
            }
        }
        findings
    }

    #[test]
    fn totals_sum_requirements_and_gaps() {
        let mut findings = findings_with(&[
            (Characteristic::Confidentiality, 4),
            (Characteristic::Integrity, 1),
        ]);
        findings
            .get_mut(Characteristic::Integrity)
            .gaps
            .push(Gap::implicit(Characteristic::Integrity));
        findings
            .get_mut(Characteristic::Availability)
            .gaps
            .push(Gap::identified("no UPS", Characteristic::Availability));

        let summary = aggregate(&findings, &CoveragePolicy::default());
        assert_eq!(summary.total_requirements, 5);
        assert_eq!(summary.total_gaps, 2);
        assert_eq!(summary.coverage.len(), 5);
        assert_eq!(summary.coverage[&Characteristic::Confidentiality], CoverageVerdict::Good);
        assert_eq!(summary.coverage[&Characteristic::Integrity], CoverageVerdict::Limited);
    }

    #[test]
    fn limited_lists_characteristics_in_order() {
        let findings = findings_with(&[
            (Characteristic::Confidentiality, 3),
            (Characteristic::Availability, 5),
        ]);
        let summary = aggregate(&findings, &CoveragePolicy::default());
        assert_eq!(
            summary.limited(),
            vec![
                Characteristic::Integrity,
                Characteristic::HumanTrust,
                Characteristic::Authentication
            ]
        );
    }

    #[test]
    fn custom_threshold() {
        let findings = findings_with(&[(Characteristic::Integrity, 1)]);
        let summary = aggregate(&findings, &CoveragePolicy { good_at: 1 });
        assert_eq!(summary.coverage[&Characteristic::Integrity], CoverageVerdict::Good);
        assert_eq!(summary.coverage[&Characteristic::Availability], CoverageVerdict::Limited);
    }

    #[test]
    fn verdict_serializes_as_label() {
        let summary = aggregate(&Findings::new(), &CoveragePolicy::default());
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["coverage"]["Human/Trust"], "Limited");
        assert_eq!(json["total_requirements"], 0);
    }

    proptest! {
        #[test]
        fn good_iff_count_reaches_threshold(count in 0usize..10, good_at in 0usize..10) {
            let policy = CoveragePolicy { good_at };
            let findings = findings_with(&[(Characteristic::Authentication, count)]);
            let summary = aggregate(&findings, &policy);
            let good = summary.coverage[&Characteristic::Authentication] == CoverageVerdict::Good;
            prop_assert_eq!(good, count >= good_at);
        }
    }
}
