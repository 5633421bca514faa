//! # secreq-core: Foundational Types for Requirement Extraction
//!
//! This crate is the leaf of the `secreq` workspace. It defines the closed
//! vocabularies every other crate classifies against, the records produced
//! by extraction, and the keyword taxonomy that drives matching.
//!
//! ## Key Design Principles
//!
//! 1. **Closed enums for every axis.** `Characteristic` (5 variants),
//!    `InformationState` (4) and `MeasureType` (3). Every `match` is
//!    exhaustive, so adding a label forces every consumer to handle it.
//!
//! 2. **Total axis assignment.** `InformationState::DEFAULT` and
//!    `MeasureType::DEFAULT` are the documented fallbacks when no keyword
//!    matches. Absence of a match is never an error.
//!
//! 3. **Taxonomy as a value.** [`Taxonomy`] is built once (built-in table or
//!    a [`TaxonomyDef`] loaded from configuration) and passed by reference.
//!    There is no mutation API.
//!
//! 4. **Lattice coordinates are typed.** [`Coordinate`] carries the three
//!    labels; the `"c,s,m"` string is a rendering, and parsing it back is
//!    checked against the lattice bounds.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `secreq-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod axis;
pub mod characteristic;
pub mod coordinate;
pub mod digest;
pub mod error;
pub mod record;
pub mod taxonomy;

// Re-export primary types for ergonomic imports.
pub use axis::{InformationState, MeasureType, INFORMATION_STATE_COUNT, MEASURE_TYPE_COUNT};
pub use characteristic::{Characteristic, CHARACTERISTIC_COUNT};
pub use coordinate::{Coordinate, LATTICE_SIZE};
pub use digest::text_digest;
pub use error::{CoordinateError, TaxonomyError};
pub use record::{CharacteristicFindings, Findings, Gap, Requirement, REQUIREMENT_PROVENANCE};
pub use taxonomy::{KeywordSet, Taxonomy, TaxonomyDef};
