//! Invoice field extraction.

pub mod rules;

use tracing::debug;

use crate::models::record::ExtractedRecord;
use rules::{
    classify, extract_supplier, AmountRule, DateRule, FieldRule, InvoiceNumberRule,
    DEFAULT_SUPPLIER_WIDTH,
};

/// Flatten text onto one line: every `\n` becomes a space.
pub fn normalize_text(text: &str) -> String {
    text.replace('\n', " ")
}

/// Derives an [`ExtractedRecord`] from document text.
#[derive(Debug, Clone)]
pub struct FieldExtractor {
    supplier_width: usize,
}

impl FieldExtractor {
    /// Create an extractor with the default supplier width.
    pub fn new() -> Self {
        Self {
            supplier_width: DEFAULT_SUPPLIER_WIDTH,
        }
    }

    /// Set how many characters the supplier column keeps.
    pub fn with_supplier_width(mut self, width: usize) -> Self {
        self.supplier_width = width;
        self
    }

    /// Run every field rule over the flattened text.
    pub fn extract(&self, text: &str) -> ExtractedRecord {
        let normalized = normalize_text(text);

        let amount = AmountRule::new().extract(&normalized);
        let date = DateRule::new().extract(&normalized);
        let invoice_number = InvoiceNumberRule::new().extract(&normalized);

        debug!(
            amount = ?amount.as_ref().map(|m| &m.source),
            date = ?date.as_ref().map(|m| &m.source),
            invoice_number = ?invoice_number.as_ref().map(|m| &m.source),
            "Matched fields"
        );

        ExtractedRecord {
            date: date.map(|m| m.value),
            amount: amount.map(|m| m.value),
            supplier: extract_supplier(&normalized, self.supplier_width),
            invoice_number: invoice_number.map(|m| m.value),
            kind: classify(&normalized),
        }
    }
}

impl Default for FieldExtractor {
    fn default() -> Self {
        Self::new()
    }
}
