//! Regex patterns for invoice field extraction.
//!
//! Patterns run against newline-flattened text, so none of them anchor on
//! line boundaries.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // "total"/"importe", up to 10 non-digits, then 1.234,56 / 1,234.56 / 999,00
    pub static ref LABELED_AMOUNT: Regex = Regex::new(
        r"(?i)(total|importe)\D{0,10}(\d{1,3}(?:[.,]\d{3})*[.,]\d{2})"
    ).unwrap();

    // dd/mm/yyyy, d-m-yy and mixed separators; not validated
    pub static ref LOOSE_DATE: Regex = Regex::new(
        r"\b(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})\b"
    ).unwrap();

    // A run of labels ("Factura Nº", "factura número") counts as one label
    pub static ref INVOICE_NUMBER: Regex = Regex::new(
        r"(?i)(?:factura|número|nº|n°)(?:\W{0,10}(?:factura|número|nº|n°))*\W{0,10}([a-zA-Z0-9\-]+)"
    ).unwrap();
}

/// Lowercase substrings that mark a document as income.
pub const INCOME_KEYWORDS: [&str; 3] = ["venta", "emitida", "ingreso"];
