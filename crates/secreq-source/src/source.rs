//! # Text Sources
//!
//! The [`TextSource`] trait abstracts "a procedure that yields page-ordered
//! text". Implementations only know how to read one unit at a time; the
//! fail-soft concatenation lives in [`crate::extract_text`].

use std::path::Path;

use crate::error::{SourceError, SourceResult};

/// Form feed: the page separator emitted by PDF-to-text converters.
pub const PAGE_SEPARATOR: u8 = 0x0c;

/// A document that can be read unit by unit (usually page by page).
pub trait TextSource {
    /// Identifier of the document, used in diagnostics and metadata.
    fn name(&self) -> &str;

    /// Number of units in the document.
    fn unit_count(&self) -> usize;

    /// Text of one unit. `index` is in `0..unit_count()`.
    fn read_unit(&self, index: usize) -> SourceResult<String>;
}

/// Final path component, or the whole path when it has none.
pub(crate) fn document_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn read_file(path: &Path) -> SourceResult<Vec<u8>> {
    std::fs::read(path).map_err(|e| SourceError::unreadable(document_name(path), e.to_string()))
}

// ---------------------------------------------------------------------------
// PdfSource
// ---------------------------------------------------------------------------

/// A PDF document, one unit per page.
///
/// Only loading the document is fatal. Each page is rendered on its own in
/// [`TextSource::read_unit`], so a page the backend cannot handle fails
/// alone.
#[derive(Debug, Clone)]
pub struct PdfSource {
    name: String,
    doc: pdf_extract::Document,
    /// 1-based page numbers, in document order.
    pages: Vec<u32>,
}

impl PdfSource {
    /// Load a PDF file.
    pub fn open(path: &Path) -> SourceResult<Self> {
        let bytes = read_file(path)?;
        Self::from_bytes(document_name(path), &bytes)
    }

    /// Load an in-memory PDF. Encrypted documents are opened with the
    /// empty user password.
    pub fn from_bytes(name: impl Into<String>, bytes: &[u8]) -> SourceResult<Self> {
        let name = name.into();
        let loaded = std::panic::catch_unwind(|| pdf_extract::Document::load_mem(bytes));
        let mut doc = match loaded {
            Ok(Ok(doc)) => doc,
            Ok(Err(e)) => return Err(SourceError::unreadable(name, e.to_string())),
            Err(_) => {
                return Err(SourceError::unreadable(
                    name,
                    "PDF backend aborted while loading the document",
                ))
            }
        };
        if doc.is_encrypted() {
            doc.decrypt("")
                .map_err(|e| SourceError::unreadable(&name, format!("cannot decrypt: {e}")))?;
        }
        let pages: Vec<u32> = doc.get_pages().into_keys().collect();
        tracing::debug!(document = %name, pages = pages.len(), "loaded PDF");
        Ok(Self { name, doc, pages })
    }
}

impl TextSource for PdfSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn unit_count(&self) -> usize {
        self.pages.len()
    }

    /// The backend panics on some malformed pages; a panic is treated like
    /// any other page failure.
    fn read_unit(&self, index: usize) -> SourceResult<String> {
        let page_num = *self
            .pages
            .get(index)
            .ok_or_else(|| SourceError::unit_failed(&self.name, index, "no such page"))?;
        let rendered = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let mut text = String::new();
            let result = {
                let mut output = pdf_extract::PlainTextOutput::new(&mut text);
                pdf_extract::output_doc_page(&self.doc, &mut output, page_num)
            };
            result.map(|()| text)
        }));
        match rendered {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(SourceError::unit_failed(&self.name, index, e.to_string())),
            Err(_) => Err(SourceError::unit_failed(
                &self.name,
                index,
                format!("PDF backend aborted while rendering page {page_num}"),
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// PlainTextSource
// ---------------------------------------------------------------------------

/// A text file whose pages are separated by form feeds.
///
/// Each page is decoded as UTF-8 on its own, so one corrupt page does not
/// take the rest of the document down with it.
#[derive(Debug, Clone)]
pub struct PlainTextSource {
    name: String,
    pages: Vec<Vec<u8>>,
}

impl PlainTextSource {
    /// Read a text file.
    pub fn open(path: &Path) -> SourceResult<Self> {
        let bytes = read_file(path)?;
        Ok(Self::from_bytes(document_name(path), &bytes))
    }

    /// Split raw bytes into pages. A form feed never occurs inside a
    /// multi-byte UTF-8 sequence, so splitting before decoding is safe.
    pub fn from_bytes(name: impl Into<String>, bytes: &[u8]) -> Self {
        let pages = bytes
            .split(|&b| b == PAGE_SEPARATOR)
            .map(<[u8]>::to_vec)
            .collect();
        Self {
            name: name.into(),
            pages,
        }
    }
}

impl TextSource for PlainTextSource {
    fn name(&self) -> &str {
        &self.name
    }

    fn unit_count(&self) -> usize {
        self.pages.len()
    }

    fn read_unit(&self, index: usize) -> SourceResult<String> {
        let page = self
            .pages
            .get(index)
            .ok_or_else(|| SourceError::unit_failed(&self.name, index, "no such page"))?;
        String::from_utf8(page.clone())
            .map_err(|e| SourceError::unit_failed(&self.name, index, e.to_string()))
    }
}

// ---------------------------------------------------------------------------
// InMemorySource
// ---------------------------------------------------------------------------

/// Pages supplied directly by the caller. An `Err` page reads as a unit
/// failure with that reason.
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    name: String,
    pages: Vec<Result<String, String>>,
}

impl InMemorySource {
    /// A source whose pages may individually fail.
    pub fn new(name: impl Into<String>, pages: Vec<Result<String, String>>) -> Self {
        Self {
            name: name.into(),
            pages,
        }
    }

    /// A single-page source holding `text`.
    pub fn from_text(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(name, vec![Ok(text.into())])
    }
}

impl TextSource for InMemorySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn unit_count(&self) -> usize {
        self.pages.len()
    }

    fn read_unit(&self, index: usize) -> SourceResult<String> {
        match self.pages.get(index) {
            Some(Ok(text)) => Ok(text.clone()),
            Some(Err(reason)) => Err(SourceError::unit_failed(&self.name, index, reason.clone())),
            None => Err(SourceError::unit_failed(&self.name, index, "no such page")),
        }
    }
}

/// Open a document, choosing the source by file extension: `.pdf`
/// (any case) is read as PDF, everything else as plain text.
pub fn open_source(path: &Path) -> SourceResult<Box<dyn TextSource>> {
    let is_pdf = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
    if is_pdf {
        Ok(Box::new(PdfSource::open(path)?))
    } else {
        Ok(Box::new(PlainTextSource::open(path)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn plain_text_splits_on_form_feed() {
        let source = PlainTextSource::from_bytes("spec.txt", b"page one\n\x0cpage two\n");
        assert_eq!(source.unit_count(), 2);
        assert_eq!(source.read_unit(0).unwrap(), "page one\n");
        assert_eq!(source.read_unit(1).unwrap(), "page two\n");
    }

    #[test]
    fn plain_text_invalid_page_fails_alone() {
        let mut bytes = b"good\x0c".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe]);
        bytes.extend_from_slice(b"\x0calso good");
        let source = PlainTextSource::from_bytes("spec.txt", &bytes);
        assert_eq!(source.unit_count(), 3);
        assert!(source.read_unit(0).is_ok());
        assert!(matches!(
            source.read_unit(1),
            Err(SourceError::UnitExtractionFailed { unit: 1, .. })
        ));
        assert_eq!(source.read_unit(2).unwrap(), "also good");
    }

    #[test]
    fn out_of_range_unit_is_unit_failure() {
        let source = InMemorySource::from_text("mem", "x");
        assert!(matches!(
            source.read_unit(5),
            Err(SourceError::UnitExtractionFailed { unit: 5, .. })
        ));
    }

    /// Two Courier pages; the second optionally lacks a MediaBox, which the
    /// backend cannot render.
    fn two_page_pdf(second_has_media_box: bool) -> Vec<u8> {
        use pdf_extract::{Dictionary, Document, Object, Stream};

        let mut doc = Document::with_version("1.5");
        let pages_id = doc.new_object_id();

        let mut font = Dictionary::new();
        font.set("Type", "Font");
        font.set("Subtype", "Type1");
        font.set("BaseFont", "Courier");
        let font_id = doc.add_object(font);
        let mut fonts = Dictionary::new();
        fonts.set("F1", font_id);
        let mut resources = Dictionary::new();
        resources.set("Font", fonts);
        let resources_id = doc.add_object(resources);

        let mut kids = Vec::new();
        for (text, has_media_box) in [
            ("REQ-CONF-001: Implement encryption", true),
            ("page two", second_has_media_box),
        ] {
            let content = format!("BT /F1 12 Tf 72 712 Td ({text}) Tj ET");
            let content_id = doc.add_object(Stream::new(Dictionary::new(), content.into_bytes()));
            let mut page = Dictionary::new();
            page.set("Type", "Page");
            page.set("Parent", pages_id);
            page.set("Contents", content_id);
            page.set("Resources", resources_id);
            if has_media_box {
                page.set(
                    "MediaBox",
                    vec![
                        Object::Integer(0),
                        Object::Integer(0),
                        Object::Integer(612),
                        Object::Integer(792),
                    ],
                );
            }
            kids.push(Object::from(doc.add_object(page)));
        }

        let mut pages = Dictionary::new();
        pages.set("Type", "Pages");
        pages.set("Count", kids.len() as i64);
        pages.set("Kids", kids);
        doc.objects.insert(pages_id, Object::Dictionary(pages));

        let mut catalog = Dictionary::new();
        catalog.set("Type", "Catalog");
        catalog.set("Pages", pages_id);
        let catalog_id = doc.add_object(catalog);
        doc.trailer.set("Root", catalog_id);

        let mut bytes = Vec::new();
        doc.save_to(&mut bytes).unwrap();
        bytes
    }

    #[test]
    fn pdf_reads_each_page() {
        let source = PdfSource::from_bytes("good.pdf", &two_page_pdf(true)).unwrap();
        assert_eq!(source.unit_count(), 2);
        assert!(source
            .read_unit(0)
            .unwrap()
            .contains("REQ-CONF-001: Implement encryption"));
        assert!(source.read_unit(1).unwrap().contains("page two"));
    }

    #[test]
    fn pdf_unrenderable_page_fails_alone() {
        let source = PdfSource::from_bytes("bad.pdf", &two_page_pdf(false)).unwrap();
        assert_eq!(source.unit_count(), 2);
        assert!(matches!(
            source.read_unit(1),
            Err(SourceError::UnitExtractionFailed { unit: 1, .. })
        ));

        let extracted = crate::extract_text(&source).unwrap();
        assert!(extracted.text.contains("REQ-CONF-001: Implement encryption"));
        assert!(!extracted.text.contains("page two"));
        assert_eq!(extracted.units_total, 2);
        assert_eq!(extracted.units_read, 1);
        let failed: Vec<usize> = extracted.failures.iter().map(|f| f.unit).collect();
        assert_eq!(failed, [1]);
    }

    #[test]
    fn pdf_garbage_is_unreadable() {
        let err = PdfSource::from_bytes("broken.pdf", b"definitely not a pdf").unwrap_err();
        assert!(err.is_fatal());
    }

    #[test]
    fn open_source_missing_file_is_unreadable() {
        let err = open_source(Path::new("/nonexistent/dir/spec.txt")).err().unwrap();
        assert!(matches!(err, SourceError::SourceUnreadable { ref document, .. } if document == "spec.txt"));
    }

    #[test]
    fn open_source_reads_text_file() {
        let mut file = tempfile::Builder::new().suffix(".txt").tempfile().unwrap();
        file.write_all(b"REQ-CONF-001: Encrypt").unwrap();
        let source = open_source(file.path()).unwrap();
        assert_eq!(source.unit_count(), 1);
        assert_eq!(source.read_unit(0).unwrap(), "REQ-CONF-001: Encrypt");
    }

    #[test]
    fn open_source_dispatches_pdf_by_extension() {
        let mut file = tempfile::Builder::new().suffix(".PDF").tempfile().unwrap();
        file.write_all(b"REQ-CONF-001: Encrypt").unwrap();
        // Parsed as PDF, so plain text content is rejected.
        assert!(open_source(file.path()).is_err());
    }
}
