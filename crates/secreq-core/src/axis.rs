//! # Secondary Axes: Information State and Measure Type
//!
//! The two axes every requirement is classified along in addition to its
//! characteristic. Both are resolved by keyword lookup in a fixed priority
//! order and fall back to a documented default, so assignment is total.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::TaxonomyError;

/// Lifecycle stage of the data a requirement pertains to.
///
/// `All` is a fallback label for general requirements. It has a lattice
/// position but is never produced by keyword resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InformationState {
    /// Data being processed.
    Processing,
    /// Data at rest.
    Storage,
    /// Data in transit.
    Transmission,
    /// Applies to every state.
    All,
}

/// Number of information states. Size of the second lattice axis.
pub const INFORMATION_STATE_COUNT: usize = 4;

impl InformationState {
    /// Resolution result when no keyword matches.
    pub const DEFAULT: Self = Self::Processing;

    /// All states in lattice order.
    pub fn all() -> &'static [InformationState] {
        &[Self::Processing, Self::Storage, Self::Transmission, Self::All]
    }

    /// States that keyword resolution considers, in priority order.
    pub fn priority() -> &'static [InformationState] {
        &[Self::Processing, Self::Storage, Self::Transmission]
    }

    /// Lowercase label, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Processing => "processing",
            Self::Storage => "storage",
            Self::Transmission => "transmission",
            Self::All => "all",
        }
    }

    /// Position on the information-state axis of the lattice.
    pub fn index(&self) -> usize {
        match self {
            Self::Processing => 0,
            Self::Storage => 1,
            Self::Transmission => 2,
            Self::All => 3,
        }
    }

    /// Inverse of [`index()`](Self::index).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }
}

impl Default for InformationState {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for InformationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InformationState {
    type Err = TaxonomyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| TaxonomyError::UnknownInformationState {
                label: s.to_string(),
            })
    }
}

/// Nature of the control a requirement describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeasureType {
    /// A technical control.
    Technology,
    /// An organizational policy or procedure.
    Policy,
    /// Operator education or certification.
    Training,
}

/// Number of measure types. Size of the third lattice axis.
pub const MEASURE_TYPE_COUNT: usize = 3;

impl MeasureType {
    /// Resolution result when no keyword matches.
    pub const DEFAULT: Self = Self::Technology;

    /// All measure types in lattice order, which is also the priority order.
    pub fn all() -> &'static [MeasureType] {
        &[Self::Technology, Self::Policy, Self::Training]
    }

    /// Lowercase label, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Technology => "technology",
            Self::Policy => "policy",
            Self::Training => "training",
        }
    }

    /// Position on the measure-type axis of the lattice.
    pub fn index(&self) -> usize {
        match self {
            Self::Technology => 0,
            Self::Policy => 1,
            Self::Training => 2,
        }
    }

    /// Inverse of [`index()`](Self::index).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }
}

impl Default for MeasureType {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl std::fmt::Display for MeasureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MeasureType {
    type Err = TaxonomyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|m| m.as_str() == s)
            .ok_or_else(|| TaxonomyError::UnknownMeasureType {
                label: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        assert_eq!(InformationState::default(), InformationState::Processing);
        assert_eq!(MeasureType::default(), MeasureType::Technology);
    }

    #[test]
    fn priority_excludes_all() {
        assert!(!InformationState::priority().contains(&InformationState::All));
        assert_eq!(InformationState::priority().len(), INFORMATION_STATE_COUNT - 1);
    }

    #[test]
    fn indices_roundtrip() {
        for (i, s) in InformationState::all().iter().enumerate() {
            assert_eq!(s.index(), i);
            assert_eq!(InformationState::from_index(i), Some(*s));
        }
        for (i, m) in MeasureType::all().iter().enumerate() {
            assert_eq!(m.index(), i);
            assert_eq!(MeasureType::from_index(i), Some(*m));
        }
        assert_eq!(InformationState::from_index(INFORMATION_STATE_COUNT), None);
        assert_eq!(MeasureType::from_index(MEASURE_TYPE_COUNT), None);
    }

    #[test]
    fn serde_is_lowercase() {
        assert_eq!(
            serde_json::to_string(&InformationState::Transmission).unwrap(),
            "\"transmission\""
        );
        assert_eq!(serde_json::to_string(&InformationState::All).unwrap(), "\"all\"");
        assert_eq!(serde_json::to_string(&MeasureType::Policy).unwrap(), "\"policy\"");
    }

    #[test]
    fn from_str_accepts_labels_only() {
        assert_eq!("storage".parse::<InformationState>().unwrap(), InformationState::Storage);
        assert_eq!("all".parse::<InformationState>().unwrap(), InformationState::All);
        assert!("Storage".parse::<InformationState>().is_err());
        assert_eq!("training".parse::<MeasureType>().unwrap(), MeasureType::Training);
        assert!("procedure".parse::<MeasureType>().is_err());
    }
}
