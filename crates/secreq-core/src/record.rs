//! # Requirement and Gap Records
//!
//! The immutable records produced by extraction, and [`Findings`], the
//! per-characteristic collection that the coverage aggregator and the
//! coordinate projector both consume.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::axis::{InformationState, MeasureType};
use crate::characteristic::Characteristic;
use crate::coordinate::Coordinate;

/// Provenance tag carried by every extracted requirement.
pub const REQUIREMENT_PROVENANCE: &str = "technical_specification";

/// A requirement statement attributed to one characteristic and classified
/// on both secondary axes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requirement {
    /// Requirement text as extracted, trimmed.
    pub requirement: String,
    /// The characteristic whose keywords matched.
    pub characteristic: Characteristic,
    /// Resolved information state.
    pub info_state: InformationState,
    /// Resolved measure type.
    pub measure_type: MeasureType,
    /// Provenance tag, always [`REQUIREMENT_PROVENANCE`].
    pub source: String,
}

impl Requirement {
    /// Build a requirement with the standard provenance tag.
    pub fn new(
        requirement: impl Into<String>,
        characteristic: Characteristic,
        info_state: InformationState,
        measure_type: MeasureType,
    ) -> Self {
        Self {
            requirement: requirement.into(),
            characteristic,
            info_state,
            measure_type,
            source: REQUIREMENT_PROVENANCE.to_string(),
        }
    }

    /// The lattice cell this requirement projects to.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.characteristic, self.info_state, self.measure_type)
    }
}

/// A shortfall flagged for a characteristic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Gap {
    /// Gap description.
    pub gap: String,
    /// The characteristic the gap belongs to.
    pub characteristic: Characteristic,
    /// `true` when stated in the document, `false` when synthesized because
    /// too few requirements were found.
    pub identified: bool,
}

impl Gap {
    /// A gap stated in the source document.
    pub fn identified(description: impl Into<String>, characteristic: Characteristic) -> Self {
        Self {
            gap: description.into(),
            characteristic,
            identified: true,
        }
    }

    /// A gap synthesized for an under-represented characteristic.
    pub fn implicit(characteristic: Characteristic) -> Self {
        Self {
            gap: format!("Limited requirements found for {characteristic}"),
            characteristic,
            identified: false,
        }
    }
}

/// Requirements and gaps attributed to one characteristic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacteristicFindings {
    /// Attributed requirements in extraction order.
    pub requirements: Vec<Requirement>,
    /// Textual gaps followed by the implicit gap, if any.
    pub gaps: Vec<Gap>,
}

impl CharacteristicFindings {
    /// Number of attributed requirements.
    pub fn count(&self) -> usize {
        self.requirements.len()
    }
}

/// Extraction output for every characteristic.
///
/// Always holds an entry for each of the five characteristics, iterated in
/// canonical order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Findings {
    by_characteristic: BTreeMap<Characteristic, CharacteristicFindings>,
}

impl Findings {
    /// Findings with an empty bucket for every characteristic.
    pub fn new() -> Self {
        Self {
            by_characteristic: Characteristic::all()
                .iter()
                .map(|&c| (c, CharacteristicFindings::default()))
                .collect(),
        }
    }

    /// Findings for one characteristic.
    pub fn get(&self, characteristic: Characteristic) -> &CharacteristicFindings {
        // Every characteristic is inserted by `new()` and never removed.
        static EMPTY: CharacteristicFindings = CharacteristicFindings {
            requirements: Vec::new(),
            gaps: Vec::new(),
        };
        self.by_characteristic.get(&characteristic).unwrap_or(&EMPTY)
    }

    /// Mutable findings for one characteristic.
    pub fn get_mut(&mut self, characteristic: Characteristic) -> &mut CharacteristicFindings {
        self.by_characteristic.entry(characteristic).or_default()
    }

    /// Iterate characteristics and their findings in canonical order.
    pub fn iter(&self) -> impl Iterator<Item = (Characteristic, &CharacteristicFindings)> {
        self.by_characteristic.iter().map(|(&c, f)| (c, f))
    }

    /// Every requirement, characteristic by characteristic.
    pub fn requirements(&self) -> impl Iterator<Item = &Requirement> {
        self.by_characteristic.values().flat_map(|f| f.requirements.iter())
    }

    /// Every gap, characteristic by characteristic.
    pub fn gaps(&self) -> impl Iterator<Item = &Gap> {
        self.by_characteristic.values().flat_map(|f| f.gaps.iter())
    }
}

impl Default for Findings {
    fn default() -> Self {
        Self::new()
    }
}
