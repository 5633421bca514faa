//! # secreq-source: Text Source Adapter
//!
//! Turns an opaque document into the single page-ordered text stream the
//! extraction pipeline consumes.
//!
//! - **Sources** (`source.rs`): the [`TextSource`] trait plus PDF,
//!   form-feed-paged plain text and in-memory implementations.
//! - **Concatenation** ([`extract_text`]): reads every unit in order. A unit
//!   that fails is logged, recorded in [`ExtractedText::failures`] and
//!   skipped. A document that yields no text at all is
//!   [`SourceError::SourceUnreadable`].
//!
//! Nothing downstream depends on document internals beyond the text.

pub mod error;
pub mod source;

pub use error::{SourceError, SourceResult};
pub use source::{open_source, InMemorySource, PdfSource, PlainTextSource, TextSource};

/// Result of reading a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedText {
    /// Document identifier (see [`TextSource::name`]).
    pub document: String,
    /// Text of all readable units, concatenated in unit order.
    pub text: String,
    /// Number of units the document reported.
    pub units_total: usize,
    /// Number of units read successfully.
    pub units_read: usize,
    /// Units that were skipped, in unit order.
    pub failures: Vec<UnitFailure>,
}

impl ExtractedText {
    /// Whether every unit was read.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// A unit that could not be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitFailure {
    /// Zero-based unit index.
    pub unit: usize,
    /// Why it failed.
    pub reason: String,
}

/// Read every unit of `source` into one string.
///
/// Unit failures are reported and skipped. Fails with
/// [`SourceError::SourceUnreadable`] when the concatenated text is empty
/// or whitespace-only, so "no text" is never confused with "no
/// requirements".
pub fn extract_text(source: &dyn TextSource) -> SourceResult<ExtractedText> {
    let document = source.name().to_string();
    let units_total = source.unit_count();
    let mut text = String::new();
    let mut units_read = 0usize;
    let mut failures = Vec::new();

    for unit in 0..units_total {
        match source.read_unit(unit) {
            Ok(unit_text) => {
                text.push_str(&unit_text);
                units_read += 1;
            }
            Err(e) => {
                tracing::warn!(document = %document, unit, error = %e, "skipping unreadable unit");
                let reason = match e {
                    SourceError::UnitExtractionFailed { reason, .. } => reason,
                    other => other.to_string(),
                };
                failures.push(UnitFailure { unit, reason });
            }
        }
    }

    if text.trim().is_empty() {
        let reason = if units_total == 0 {
            "document has no pages".to_string()
        } else if units_read == 0 {
            format!("all {units_total} units failed")
        } else {
            "document contains no text".to_string()
        };
        return Err(SourceError::unreadable(document, reason));
    }

    tracing::info!(
        document = %document,
        units_total,
        units_read,
        chars = text.len(),
        "extracted document text"
    );

    Ok(ExtractedText {
        document,
        text,
        units_total,
        units_read,
        failures,
    })
}
