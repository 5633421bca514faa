//! # Lattice Coordinates
//!
//! A [`Coordinate`] addresses one cell of the discrete
//! characteristic × information-state × measure-type lattice
//! (5 × 4 × 3 = 60 cells). Downstream consumers key cells by the
//! comma-joined index string `"c,s,m"`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::axis::{InformationState, MeasureType, INFORMATION_STATE_COUNT, MEASURE_TYPE_COUNT};
use crate::characteristic::{Characteristic, CHARACTERISTIC_COUNT};
use crate::error::CoordinateError;

/// Number of cells in the full lattice.
pub const LATTICE_SIZE: usize = CHARACTERISTIC_COUNT * INFORMATION_STATE_COUNT * MEASURE_TYPE_COUNT;

/// One cell of the requirement lattice.
///
/// Ordering follows the index tuple, so sorting coordinates gives the same
/// order as sorting their keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    /// First axis.
    pub characteristic: Characteristic,
    /// Second axis.
    pub info_state: InformationState,
    /// Third axis.
    pub measure_type: MeasureType,
}

impl Coordinate {
    /// Build a coordinate from its three labels.
    pub fn new(
        characteristic: Characteristic,
        info_state: InformationState,
        measure_type: MeasureType,
    ) -> Self {
        Self {
            characteristic,
            info_state,
            measure_type,
        }
    }

    /// The `(c, s, m)` index tuple.
    pub fn indices(&self) -> (usize, usize, usize) {
        (
            self.characteristic.index(),
            self.info_state.index(),
            self.measure_type.index(),
        )
    }

    /// The `"c,s,m"` key used by the coordinate mapping.
    pub fn key(&self) -> String {
        self.to_string()
    }

    /// Human-readable `"{characteristic} - {state} - {type}"` description.
    pub fn description(&self) -> String {
        format!(
            "{} - {} - {}",
            self.characteristic, self.info_state, self.measure_type
        )
    }

    /// Every lattice cell in index order.
    pub fn all() -> impl Iterator<Item = Coordinate> {
        Characteristic::all().iter().flat_map(|&c| {
            InformationState::all().iter().flat_map(move |&s| {
                MeasureType::all()
                    .iter()
                    .map(move |&m| Coordinate::new(c, s, m))
            })
        })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (c, s, m) = self.indices();
        write!(f, "{c},{s},{m}")
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    fn from_str(key: &str) -> Result<Self, Self::Err> {
        let malformed = || CoordinateError::Malformed {
            key: key.to_string(),
        };
        let parts: Vec<&str> = key.split(',').collect();
        let [c, s, m] = parts.as_slice() else {
            return Err(malformed());
        };
        let parse = |part: &str| part.trim().parse::<usize>().map_err(|_| malformed());
        let (c, s, m) = (parse(*c)?, parse(*s)?, parse(*m)?);

        let out_of_range = |axis: &'static str, index: usize, count: usize| {
            CoordinateError::OutOfRange {
                key: key.to_string(),
                axis,
                index,
                max: count - 1,
            }
        };
        let characteristic = Characteristic::from_index(c)
            .ok_or_else(|| out_of_range("characteristic", c, CHARACTERISTIC_COUNT))?;
        let info_state = InformationState::from_index(s)
            .ok_or_else(|| out_of_range("info_state", s, INFORMATION_STATE_COUNT))?;
        let measure_type = MeasureType::from_index(m)
            .ok_or_else(|| out_of_range("measure_type", m, MEASURE_TYPE_COUNT))?;

        Ok(Self::new(characteristic, info_state, measure_type))
    }
}

impl Serialize for Coordinate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let key = String::deserialize(deserializer)?;
        key.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn lattice_has_60_cells() {
        assert_eq!(LATTICE_SIZE, 60);
        assert_eq!(Coordinate::all().count(), LATTICE_SIZE);
    }

    #[test]
    fn all_is_sorted_and_unique() {
        let cells: Vec<Coordinate> = Coordinate::all().collect();
        for pair in cells.windows(2) {
            assert!(pair[0] < pair[1], "{} !< {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn key_format() {
        let coord = Coordinate::new(
            Characteristic::HumanTrust,
            InformationState::Storage,
            MeasureType::Training,
        );
        assert_eq!(coord.key(), "3,1,2");
        assert_eq!(coord.description(), "Human/Trust - storage - training");
    }

    #[test]
    fn parse_rejects_malformed() {
        for bad in ["", "1,2", "1,2,3,4", "a,0,0", "0,,0", "-1,0,0"] {
            assert!(
                matches!(bad.parse::<Coordinate>(), Err(CoordinateError::Malformed { .. })),
                "{bad:?} should be malformed"
            );
        }
    }

    #[test]
    fn parse_rejects_out_of_range() {
        let err = "0,4,0".parse::<Coordinate>().unwrap_err();
        assert!(matches!(
            err,
            CoordinateError::OutOfRange {
                axis: "info_state",
                index: 4,
                max: 3,
                ..
            }
        ));
        assert!("5,0,0".parse::<Coordinate>().is_err());
        assert!("0,0,3".parse::<Coordinate>().is_err());
    }

    #[test]
    fn serializes_as_key_string() {
        let coord = Coordinate::new(
            Characteristic::Integrity,
            InformationState::All,
            MeasureType::Policy,
        );
        assert_eq!(serde_json::to_string(&coord).unwrap(), "\"1,3,1\"");
        let back: Coordinate = serde_json::from_str("\"1,3,1\"").unwrap();
        assert_eq!(back, coord);
    }

    proptest! {
        #[test]
        fn key_decodes_to_same_labels(c in 0usize..5, s in 0usize..4, m in 0usize..3) {
            let key = format!("{c},{s},{m}");
            let coord: Coordinate = key.parse().unwrap();
            prop_assert_eq!(coord.indices(), (c, s, m));
            prop_assert_eq!(coord.key(), key);
        }
    }
}
