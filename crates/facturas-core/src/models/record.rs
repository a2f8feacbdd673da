//! The per-document extraction record.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Column headers of the output table, in column order.
pub const HEADERS: [&str; 5] = ["Fecha", "Monto", "Proveedor", "Número de Factura", "Tipo"];

/// A document and its full text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Where the document was found.
    pub path: PathBuf,
    /// Text of every page, concatenated.
    pub text: String,
}

/// Fields extracted from one document.
///
/// Missing fields are `None` and end up as empty cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedRecord {
    /// Loose date, as matched.
    #[serde(rename = "Fecha")]
    pub date: Option<String>,

    /// Last labeled amount, decimal-normalized.
    #[serde(rename = "Monto")]
    pub amount: Option<String>,

    /// Opening characters of the document.
    #[serde(rename = "Proveedor")]
    pub supplier: String,

    #[serde(rename = "Número de Factura")]
    pub invoice_number: Option<String>,

    #[serde(rename = "Tipo")]
    pub kind: TransactionType,
}

impl ExtractedRecord {
    /// Cells of this record in [`HEADERS`] order.
    pub fn to_row(&self) -> [&str; 5] {
        [
            self.date.as_deref().unwrap_or(""),
            self.amount.as_deref().unwrap_or(""),
            self.supplier.as_str(),
            self.invoice_number.as_deref().unwrap_or(""),
            self.kind.as_label(),
        ]
    }
}

/// Whether a document records money coming in or going out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TransactionType {
    /// Sales and issued invoices.
    #[serde(rename = "Ingreso")]
    Income,
    /// Everything else.
    #[default]
    #[serde(rename = "Gasto")]
    Expense,
}

impl TransactionType {
    /// Label written to the output table.
    pub fn as_label(&self) -> &'static str {
        match self {
            Self::Income => "Ingreso",
            Self::Expense => "Gasto",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}
