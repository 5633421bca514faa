//! # Error Types
//!
//! Errors raised while building core values. Extraction itself never
//! fails: unmatched text resolves through defaults, so the only fallible
//! operations here are taxonomy construction from configuration and
//! decoding of coordinate keys.

use thiserror::Error;

/// Error while building a [`Taxonomy`](crate::Taxonomy) from a definition.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TaxonomyError {
    /// A characteristic label did not name one of the five characteristics.
    #[error("unknown characteristic {label:?}")]
    UnknownCharacteristic {
        /// The label as written in the definition.
        label: String,
    },

    /// An information-state label was unknown or not keyword-resolvable.
    #[error("unknown or non-classifiable information state {label:?}")]
    UnknownInformationState {
        /// The label as written in the definition.
        label: String,
    },

    /// A measure-type label was unknown.
    #[error("unknown measure type {label:?}")]
    UnknownMeasureType {
        /// The label as written in the definition.
        label: String,
    },

    /// A keyword was empty or whitespace-only. An empty keyword would match
    /// every text.
    #[error("blank keyword in {axis} vocabulary for {label:?}")]
    BlankKeyword {
        /// Axis name (`characteristics`, `info_states`, `measure_types`).
        axis: &'static str,
        /// The label owning the blank keyword.
        label: String,
    },
}

/// Error while decoding a `"c,s,m"` coordinate key.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoordinateError {
    /// The key did not consist of exactly three comma-separated integers.
    #[error("malformed coordinate key {key:?}: expected \"c,s,m\"")]
    Malformed {
        /// The offending key.
        key: String,
    },

    /// An index was outside the bounds of its axis.
    #[error("coordinate {key:?}: {axis} index {index} is out of range (max {max})")]
    OutOfRange {
        /// The offending key.
        key: String,
        /// Axis name.
        axis: &'static str,
        /// The decoded index.
        index: usize,
        /// Largest valid index on that axis.
        max: usize,
    },
}
