//! PDF text extraction using lopdf and pdf-extract.

use lopdf::Document;
use tracing::debug;

use super::Result;
use crate::error::PdfError;

/// PDF text extractor.
///
/// `lopdf` validates the document and strips empty-password encryption;
/// `pdf-extract` then produces the text of every page in page order.
pub struct PdfExtractor {
    document: Option<Document>,
    raw_data: Vec<u8>,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            document: None,
            raw_data: Vec::new(),
        }
    }

    /// Load a PDF from bytes.
    ///
    /// Fails on unparsable data, on password-protected documents, and on
    /// documents without pages.
    pub fn load(&mut self, data: &[u8]) -> Result<()> {
        let mut doc = Document::load_mem(data).map_err(|e| PdfError::Parse(e.to_string()))?;

        let raw_data = if doc.is_encrypted() {
            unlock(&mut doc)?
        } else {
            data.to_vec()
        };

        let pages = doc.get_pages().len();
        if pages == 0 {
            return Err(PdfError::NoPages);
        }

        debug!(pages, bytes = raw_data.len(), "Loaded PDF");
        self.raw_data = raw_data;
        self.document = Some(doc);
        Ok(())
    }

    /// Get the number of pages in the loaded PDF.
    pub fn page_count(&self) -> u32 {
        self.document
            .as_ref()
            .map(|doc| doc.get_pages().len() as u32)
            .unwrap_or(0)
    }

    /// Extract the text of all pages as a single string.
    pub fn extract_text(&self) -> Result<String> {
        if self.document.is_none() {
            return Err(PdfError::Parse("No document loaded".to_string()));
        }

        let text = pdf_extract::extract_text_from_mem(&self.raw_data)
            .map_err(|e| PdfError::TextExtraction(e.to_string()))?;
        debug!("Extracted {} chars from {} pages", text.len(), self.page_count());
        Ok(text)
    }
}

/// Strip empty-password encryption and return bytes pdf-extract can read.
fn unlock(doc: &mut Document) -> Result<Vec<u8>> {
    doc.decrypt("").map_err(|_| PdfError::Encrypted)?;

    let mut plain = Vec::new();
    doc.save_to(&mut plain)
        .map_err(|e| PdfError::Parse(format!("re-serializing decrypted PDF: {e}")))?;
    debug!("Removed empty-password encryption");
    Ok(plain)
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}
