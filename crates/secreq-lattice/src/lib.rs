//! # secreq-lattice: Coverage & Coordinate Lattice
//!
//! Two independent consumers of extraction [`Findings`](secreq_core::Findings):
//!
//! - **Coverage** ([`aggregate`]): per-characteristic counts, run totals
//!   and a `Good`/`Limited` verdict per characteristic.
//! - **Projection** ([`project`]): the coordinate-keyed mapping over the
//!   lattice
//!
//! ```text
//! Characteristic (5) × InformationState (4) × MeasureType (3) = 60 cells
//! ```
//!
//! Both are pure functions of the findings.

pub mod coverage;
pub mod projection;

// Re-export primary types.
pub use coverage::{aggregate, CoveragePolicy, CoverageSummary, CoverageVerdict};
pub use projection::{
    project, CoordinateEntry, CoordinateMap, Occupancy, ProjectionCollision,
};
