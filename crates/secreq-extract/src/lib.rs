//! # secreq-extract: Requirement Extraction & Axis Classification
//!
//! Scans specification text for requirement and gap statements and turns
//! them into classified [`Findings`](secreq_core::Findings).
//!
//! ## Pipeline
//!
//! ```text
//! text ──► CandidateMatcher ──► keyword attribution ──► AxisClassifier ──► Findings
//!              (regex)           (per characteristic)    (state, measure)
//! ```
//!
//! Matching is keyword- and pattern-based on purpose. Text that matches
//! nothing yields fewer findings, never an error, so this crate defines no
//! error type.

pub mod classifier;
pub mod extractor;
pub mod matcher;

// Re-export primary types.
pub use classifier::{AxisAssignment, AxisClassifier};
pub use extractor::{ExtractionPolicy, Extractor};
pub use matcher::{Candidate, CandidateMatcher, CandidateOrigin, PatternMatcher};
