//! Document to text conversion.

mod extractor;

pub use extractor::PdfExtractor;

use std::fs;
use std::path::Path;

use crate::error::PdfError;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Something that can turn a document on disk into its full plain text.
pub trait TextSource {
    /// Extract the text of every page of the document at `path`.
    fn extract_text(&self, path: &Path) -> crate::Result<String>;
}

/// [`TextSource`] backed by [`PdfExtractor`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfTextSource;

impl PdfTextSource {
    pub fn new() -> Self {
        Self
    }
}

impl TextSource for PdfTextSource {
    fn extract_text(&self, path: &Path) -> crate::Result<String> {
        let data = fs::read(path)?;
        let mut extractor = PdfExtractor::new();
        extractor.load(&data)?;
        Ok(extractor.extract_text()?)
    }
}
