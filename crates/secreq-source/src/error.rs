//! Source adapter error types.
//!
//! Two failure classes with different propagation: a single unit (page)
//! failing is reported and skipped, while a document yielding no text at
//! all aborts the run.

use thiserror::Error;

/// Errors raised while reading a document.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// No text could be obtained from the document. Fatal for the run.
    #[error("no text could be extracted from {document}: {reason}")]
    SourceUnreadable { document: String, reason: String },

    /// One unit could not be read. Recovered by skipping the unit.
    #[error("unit {unit} of {document} could not be read: {reason}")]
    UnitExtractionFailed {
        document: String,
        unit: usize,
        reason: String,
    },
}

impl SourceError {
    /// Shorthand for [`SourceError::SourceUnreadable`].
    pub fn unreadable(document: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::SourceUnreadable {
            document: document.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for [`SourceError::UnitExtractionFailed`].
    pub fn unit_failed(document: impl Into<String>, unit: usize, reason: impl Into<String>) -> Self {
        Self::UnitExtractionFailed {
            document: document.into(),
            unit,
            reason: reason.into(),
        }
    }

    /// Whether the error aborts the run.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::SourceUnreadable { .. })
    }
}

/// Result type alias for source operations.
pub type SourceResult<T> = Result<T, SourceError>;
