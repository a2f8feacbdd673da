//! Core library for invoice field extraction.
//!
//! This crate provides:
//! - PDF text extraction behind the [`TextSource`] trait
//! - Recursive document collection
//! - Rule-based field extraction (date, amount, supplier, invoice number, type)
//! - CSV/JSON table output

pub mod collector;
pub mod error;
pub mod invoice;
pub mod models;
pub mod pdf;
pub mod table;

pub use collector::{Collection, CollectionFailure, DocumentCollector};
pub use error::{FacturasError, PdfError, Result};
pub use invoice::FieldExtractor;
pub use models::config::{FacturasConfig, OnError, OutputFormat};
pub use models::record::{Document, ExtractedRecord, TransactionType, HEADERS};
pub use pdf::{PdfExtractor, PdfTextSource, TextSource};
pub use table::TableWriter;
