//! Rule-based field extractors.
//!
//! Every rule is an independent pure function over the normalized text.
//! Rules never see each other's matches, so a product code shaped like a
//! date can still become the document date.

pub mod amounts;
pub mod dates;
pub mod invoice_number;
pub mod kind;
pub mod patterns;
pub mod supplier;

pub use amounts::{extract_amount, normalize_amount, AmountRule};
pub use dates::{extract_date, DateRule};
pub use invoice_number::{extract_invoice_number, InvoiceNumberRule};
pub use kind::classify;
pub use supplier::{extract_supplier, DEFAULT_SUPPLIER_WIDTH};

/// Trait for pattern-based field rules.
pub trait FieldRule {
    /// The type of value this rule produces.
    type Output;

    /// Pick the match this rule reports for the whole document.
    fn extract(&self, text: &str) -> Option<ExtractionMatch<Self::Output>>;

    /// Extract all occurrences of the field, in document order.
    fn extract_all(&self, text: &str) -> Vec<ExtractionMatch<Self::Output>>;
}

/// A value found in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Byte span of the full pattern match in the source text.
    pub position: Option<(usize, usize)>,
    /// Source text that was matched.
    pub source: String,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, source: impl Into<String>) -> Self {
        Self {
            value,
            position: None,
            source: source.into(),
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}
