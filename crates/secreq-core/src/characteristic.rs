//! # Characteristic: Security Property Taxonomy
//!
//! Defines the `Characteristic` enum: the five security properties a
//! requirement can be attributed to. This is the ONE definition used by
//! extraction, aggregation and projection. Its declaration order is the
//! canonical order of every report and the first axis of the lattice.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::TaxonomyError;

/// Security characteristics a requirement can be attributed to.
///
/// | # | Characteristic | Concern |
/// |---|----------------|---------|
/// | 0 | Confidentiality | Encryption, privacy, data protection |
/// | 1 | Integrity | Validation, signatures, calibration |
/// | 2 | Availability | Uptime, redundancy, failover |
/// | 3 | Human/Trust | User interface, alarms, training |
/// | 4 | Authentication | Login, credentials, authorization |
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Characteristic {
    /// Protection of data against disclosure.
    Confidentiality,
    /// Protection of data and device behavior against modification.
    Integrity,
    /// Continuity of service.
    Availability,
    /// Human factors and operator trust in the device.
    #[serde(rename = "Human/Trust")]
    HumanTrust,
    /// Verification of user and system identity.
    Authentication,
}

/// Total number of characteristics. Size of the first lattice axis.
pub const CHARACTERISTIC_COUNT: usize = 5;

impl Characteristic {
    /// All characteristics in canonical order.
    pub fn all() -> &'static [Characteristic] {
        &[
            Self::Confidentiality,
            Self::Integrity,
            Self::Availability,
            Self::HumanTrust,
            Self::Authentication,
        ]
    }

    /// Display label, identical to the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confidentiality => "Confidentiality",
            Self::Integrity => "Integrity",
            Self::Availability => "Availability",
            Self::HumanTrust => "Human/Trust",
            Self::Authentication => "Authentication",
        }
    }

    /// Position on the characteristic axis of the lattice.
    pub fn index(&self) -> usize {
        match self {
            Self::Confidentiality => 0,
            Self::Integrity => 1,
            Self::Availability => 2,
            Self::HumanTrust => 3,
            Self::Authentication => 4,
        }
    }

    /// Inverse of [`index()`](Self::index).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::all().get(index).copied()
    }
}

impl std::fmt::Display for Characteristic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Characteristic {
    type Err = TaxonomyError;

    /// Parse a characteristic from its display label (case-sensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| TaxonomyError::UnknownCharacteristic {
                label: s.to_string(),
            })
    }
}
