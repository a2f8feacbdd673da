//! Invoice number extraction.

use super::patterns::INVOICE_NUMBER;
use super::{ExtractionMatch, FieldRule};

/// Invoice number rule. Reports the token after the first label.
pub struct InvoiceNumberRule;

impl InvoiceNumberRule {
    pub fn new() -> Self {
        Self
    }
}

impl Default for InvoiceNumberRule {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldRule for InvoiceNumberRule {
    type Output = String;

    fn extract(&self, text: &str) -> Option<ExtractionMatch<String>> {
        let caps = INVOICE_NUMBER.captures(text)?;
        let full_match = caps.get(0)?;
        Some(
            ExtractionMatch::new(caps.get(1)?.as_str().to_string(), full_match.as_str())
                .with_position(full_match.start(), full_match.end()),
        )
    }

    fn extract_all(&self, text: &str) -> Vec<ExtractionMatch<String>> {
        INVOICE_NUMBER
            .captures_iter(text)
            .filter_map(|caps| {
                let full_match = caps.get(0)?;
                Some(
                    ExtractionMatch::new(caps.get(1)?.as_str().to_string(), full_match.as_str())
                        .with_position(full_match.start(), full_match.end()),
                )
            })
            .collect()
    }
}

/// Extract the invoice number following the first label in the text.
pub fn extract_invoice_number(text: &str) -> Option<String> {
    InvoiceNumberRule::new().extract(text).map(|m| m.value)
}
