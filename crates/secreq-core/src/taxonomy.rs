//! # Taxonomy Registry
//!
//! Keyword vocabularies for the three classification axes. A [`Taxonomy`]
//! is constructed once, either from the built-in table or from a
//! [`TaxonomyDef`] loaded from configuration, and then only read.
//!
//! ## Matching
//!
//! Every lookup is a case-insensitive substring test: the text is
//! lowercased once and compared against keywords lowercased at
//! construction. Characteristic lookup reports every characteristic with
//! at least one hit. Axis lookup returns the first label, in the axis'
//! fixed priority order, with a hit; `None` means no keyword matched and
//! the caller applies the axis default.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::axis::{InformationState, MeasureType};
use crate::characteristic::Characteristic;
use crate::error::TaxonomyError;

/// An ordered set of keywords for one label.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    /// Keywords as written, for display and round-tripping.
    keywords: Vec<String>,
    /// Lowercased keywords used for matching.
    lowered: Vec<String>,
}

impl KeywordSet {
    /// Build a keyword set, preserving order and dropping exact duplicates.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::default();
        for keyword in keywords {
            let keyword = keyword.into();
            if !set.keywords.contains(&keyword) {
                set.lowered.push(keyword.to_lowercase());
                set.keywords.push(keyword);
            }
        }
        set
    }

    /// Keywords as originally written.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Number of keywords.
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Whether the set has no keywords (matches nothing).
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    /// First keyword (in set order) that occurs in already-lowercased text.
    pub fn first_match_lowered(&self, lowered_text: &str) -> Option<&str> {
        self.lowered
            .iter()
            .position(|k| lowered_text.contains(k.as_str()))
            .map(|i| self.keywords[i].as_str())
    }

    /// Whether any keyword occurs in `text`, ignoring case.
    pub fn matches(&self, text: &str) -> bool {
        self.first_match_lowered(&text.to_lowercase()).is_some()
    }
}

/// Serializable description of a taxonomy, keyed by label.
///
/// Labels use the serialized names: `"Human/Trust"`, `"storage"`,
/// `"policy"`. Labels that are absent get an empty keyword set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TaxonomyDef {
    /// Characteristic label → keywords.
    #[serde(default)]
    pub characteristics: BTreeMap<String, Vec<String>>,
    /// Information-state label → keywords. `all` is not permitted.
    #[serde(default)]
    pub info_states: BTreeMap<String, Vec<String>>,
    /// Measure-type label → keywords.
    #[serde(default)]
    pub measure_types: BTreeMap<String, Vec<String>>,
}

/// The keyword registry consulted by extraction and axis classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Taxonomy {
    characteristics: BTreeMap<Characteristic, KeywordSet>,
    info_states: BTreeMap<InformationState, KeywordSet>,
    measure_types: BTreeMap<MeasureType, KeywordSet>,
}

impl Taxonomy {
    /// The production vocabulary for medical-device specifications.
    ///
    /// Under substring matching the Human/Trust keyword `UI` also hits
    /// words such as "requirements", "built-in", "equipment" and
    /// "guideline", so Human/Trust counts run high on most documents.
    /// Configure a taxonomy without `UI` where that matters.
    pub fn builtin() -> Self {
        let characteristics = [
            (
                Characteristic::Confidentiality,
                &[
                    "encryption",
                    "confidential",
                    "privacy",
                    "data protection",
                    "access control",
                    "HIPAA",
                    "GDPR",
                    "secure",
                    "classified",
                ][..],
            ),
            (
                Characteristic::Integrity,
                &[
                    "validation",
                    "integrity",
                    "checksum",
                    "signature",
                    "verification",
                    "calibration",
                    "accuracy",
                    "tamper",
                    "corruption",
                ][..],
            ),
            (
                Characteristic::Availability,
                &[
                    "uptime",
                    "availability",
                    "redundancy",
                    "failover",
                    "backup",
                    "fault tolerance",
                    "reliability",
                    "emergency",
                    "continuous",
                ][..],
            ),
            (
                Characteristic::HumanTrust,
                &[
                    "user interface",
                    "UI",
                    "training",
                    "alarm",
                    "trust",
                    "usability",
                    "intuitive",
                    "workflow",
                    "human factors",
                    "ergonomic",
                ][..],
            ),
            (
                Characteristic::Authentication,
                &[
                    "authentication",
                    "login",
                    "password",
                    "biometric",
                    "multi-factor",
                    "authorization",
                    "identity",
                    "access",
                    "credential",
                ][..],
            ),
        ];
        let info_states = [
            (
                InformationState::Processing,
                &["process", "compute", "calculate", "analyze", "real-time"][..],
            ),
            (
                InformationState::Storage,
                &["store", "save", "record", "log", "database", "memory"][..],
            ),
            (
                InformationState::Transmission,
                &["transmit", "send", "transfer", "communicate", "network"][..],
            ),
        ];
        let measure_types = [
            (
                MeasureType::Technology,
                &["implement", "deploy", "use", "install", "configure"][..],
            ),
            (
                MeasureType::Policy,
                &["policy", "procedure", "guideline", "standard", "compliance"][..],
            ),
            (
                MeasureType::Training,
                &["train", "educate", "learn", "competency", "certification"][..],
            ),
        ];

        Self {
            characteristics: characteristics
                .into_iter()
                .map(|(c, kws)| (c, KeywordSet::new(kws.iter().copied())))
                .collect(),
            info_states: info_states
                .into_iter()
                .map(|(s, kws)| (s, KeywordSet::new(kws.iter().copied())))
                .collect(),
            measure_types: measure_types
                .into_iter()
                .map(|(m, kws)| (m, KeywordSet::new(kws.iter().copied())))
                .collect(),
        }
    }

    /// Build a taxonomy from a definition, validating every label and
    /// keyword.
    pub fn from_def(def: &TaxonomyDef) -> Result<Self, TaxonomyError> {
        let mut characteristics = BTreeMap::new();
        for (label, keywords) in &def.characteristics {
            let c: Characteristic = label.parse()?;
            check_keywords("characteristics", label, keywords)?;
            characteristics.insert(c, KeywordSet::new(keywords.iter().cloned()));
        }

        let mut info_states = BTreeMap::new();
        for (label, keywords) in &def.info_states {
            let state: InformationState = label.parse()?;
            if state == InformationState::All {
                return Err(TaxonomyError::UnknownInformationState {
                    label: label.clone(),
                });
            }
            check_keywords("info_states", label, keywords)?;
            info_states.insert(state, KeywordSet::new(keywords.iter().cloned()));
        }

        let mut measure_types = BTreeMap::new();
        for (label, keywords) in &def.measure_types {
            let measure: MeasureType = label.parse()?;
            check_keywords("measure_types", label, keywords)?;
            measure_types.insert(measure, KeywordSet::new(keywords.iter().cloned()));
        }

        Ok(Self {
            characteristics,
            info_states,
            measure_types,
        })
    }

    /// Describe this taxonomy as a definition.
    pub fn to_def(&self) -> TaxonomyDef {
        fn labelled<K: Copy>(
            map: &BTreeMap<K, KeywordSet>,
            label: impl Fn(K) -> &'static str,
        ) -> BTreeMap<String, Vec<String>> {
            map.iter()
                .map(|(&k, set)| (label(k).to_string(), set.keywords().to_vec()))
                .collect()
        }
        TaxonomyDef {
            characteristics: labelled(&self.characteristics, |c: Characteristic| c.as_str()),
            info_states: labelled(&self.info_states, |s: InformationState| s.as_str()),
            measure_types: labelled(&self.measure_types, |m: MeasureType| m.as_str()),
        }
    }

    /// Keywords for a characteristic; empty if the taxonomy defines none.
    pub fn keywords(&self, characteristic: Characteristic) -> Option<&KeywordSet> {
        self.characteristics.get(&characteristic)
    }

    /// Whether any keyword of `characteristic` occurs in already-lowercased
    /// text.
    pub fn matches_lowered(&self, characteristic: Characteristic, lowered_text: &str) -> bool {
        self.characteristics
            .get(&characteristic)
            .is_some_and(|set| set.first_match_lowered(lowered_text).is_some())
    }

    /// Every characteristic with at least one keyword hit in `text`, in
    /// canonical order.
    pub fn characteristics_for(&self, text: &str) -> Vec<Characteristic> {
        let lowered = text.to_lowercase();
        Characteristic::all()
            .iter()
            .copied()
            .filter(|&c| self.matches_lowered(c, &lowered))
            .collect()
    }

    /// First information state in priority order with a keyword hit.
    pub fn lookup_info_state(&self, text: &str) -> Option<InformationState> {
        let lowered = text.to_lowercase();
        InformationState::priority().iter().copied().find(|state| {
            self.info_states
                .get(state)
                .is_some_and(|set| set.first_match_lowered(&lowered).is_some())
        })
    }

    /// First measure type in priority order with a keyword hit.
    pub fn lookup_measure_type(&self, text: &str) -> Option<MeasureType> {
        let lowered = text.to_lowercase();
        MeasureType::all().iter().copied().find(|measure| {
            self.measure_types
                .get(measure)
                .is_some_and(|set| set.first_match_lowered(&lowered).is_some())
        })
    }
}

impl Default for Taxonomy {
    fn default() -> Self {
        Self::builtin()
    }
}

fn check_keywords(
    axis: &'static str,
    label: &str,
    keywords: &[String],
) -> Result<(), TaxonomyError> {
    if keywords.iter().any(|k| k.trim().is_empty()) {
        return Err(TaxonomyError::BlankKeyword {
            axis,
            label: label.to_string(),
        });
    }
    Ok(())
}
