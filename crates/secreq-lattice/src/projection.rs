//! # Coordinate Projection
//!
//! Places every requirement at its lattice cell. The mapping holds at most
//! one entry per cell: requirements are visited in characteristic order,
//! then extraction order, and a later requirement replaces an earlier one
//! at the same cell.
//!
//! ## Lossiness
//!
//! Replacement discards the earlier requirement from the mapping (it is
//! still present in the findings). Every replacement is recorded as a
//! [`ProjectionCollision`] so callers can report how much was lost.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize, Serializer};

use secreq_core::{
    Characteristic, Coordinate, Findings, InformationState, MeasureType, LATTICE_SIZE,
};

/// One populated lattice cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordinateEntry {
    /// `"c,s,m"` key of the cell.
    pub coordinate_id: String,
    /// First axis label.
    pub characteristic: Characteristic,
    /// Second axis label.
    pub info_state: InformationState,
    /// Third axis label.
    pub measure_type: MeasureType,
    /// `"{characteristic} - {state} - {type}"`.
    pub description: String,
    /// Text of the requirement occupying the cell.
    pub requirement: String,
    /// Source tag, usually the document name.
    pub source: String,
    /// Cell weight; always 1.
    pub value: u8,
}

impl CoordinateEntry {
    /// The cell this entry occupies.
    pub fn coordinate(&self) -> Coordinate {
        Coordinate::new(self.characteristic, self.info_state, self.measure_type)
    }
}

/// A requirement displaced from its cell by a later one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionCollision {
    /// The contested cell.
    pub coordinate: Coordinate,
    /// Text of the requirement that was displaced.
    pub replaced: String,
    /// Text of the requirement that now occupies the cell.
    pub kept: String,
}

/// Populated versus total lattice cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Occupancy {
    /// Cells holding an entry.
    pub populated: usize,
    /// Cells in the lattice.
    pub total: usize,
}

/// Coordinate-keyed requirement mapping.
///
/// Serializes as a JSON object from `"c,s,m"` to [`CoordinateEntry`], in
/// lattice order. Collisions are not serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CoordinateMap {
    entries: BTreeMap<Coordinate, CoordinateEntry>,
    collisions: Vec<ProjectionCollision>,
}

impl CoordinateMap {
    /// Entry at `coordinate`, if populated.
    pub fn get(&self, coordinate: &Coordinate) -> Option<&CoordinateEntry> {
        self.entries.get(coordinate)
    }

    /// Entries in lattice order.
    pub fn entries(&self) -> impl Iterator<Item = &CoordinateEntry> {
        self.entries.values()
    }

    /// Number of populated cells.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no cell is populated.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Replacements that happened during projection, in projection order.
    pub fn collisions(&self) -> &[ProjectionCollision] {
        &self.collisions
    }

    /// Populated versus total cells.
    pub fn occupancy(&self) -> Occupancy {
        Occupancy {
            populated: self.entries.len(),
            total: LATTICE_SIZE,
        }
    }

    /// Unpopulated cells in lattice order.
    pub fn empty_coordinates(&self) -> Vec<Coordinate> {
        Coordinate::all()
            .filter(|c| !self.entries.contains_key(c))
            .collect()
    }

    fn insert(&mut self, entry: CoordinateEntry) {
        let coordinate = entry.coordinate();
        let kept = entry.requirement.clone();
        if let Some(previous) = self.entries.insert(coordinate, entry) {
            tracing::debug!(
                coordinate = %coordinate,
                replaced = %previous.requirement,
                kept = %kept,
                "coordinate collision, later requirement kept"
            );
            self.collisions.push(ProjectionCollision {
                coordinate,
                replaced: previous.requirement,
                kept,
            });
        }
    }
}

impl Serialize for CoordinateMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

/// Project every requirement in `findings` onto the lattice, tagging each
/// entry with `source_tag`.
pub fn project(findings: &Findings, source_tag: &str) -> CoordinateMap {
    let mut map = CoordinateMap::default();
    for requirement in findings.requirements() {
        let coordinate = requirement.coordinate();
        map.insert(CoordinateEntry {
            coordinate_id: coordinate.key(),
            characteristic: requirement.characteristic,
            info_state: requirement.info_state,
            measure_type: requirement.measure_type,
            description: coordinate.description(),
            requirement: requirement.requirement.clone(),
            source: source_tag.to_string(),
            value: 1,
        });
    }
    map
}
