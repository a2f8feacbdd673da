//! Configuration structures for the extraction pipeline.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FacturasError, Result};
use crate::invoice::rules::DEFAULT_SUPPLIER_WIDTH;

/// Main configuration for a facturas run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacturasConfig {
    /// Where documents are read from.
    pub input: InputConfig,

    /// Where the table is written.
    pub output: OutputConfig,

    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// Failure handling.
    pub errors: ErrorConfig,
}

/// Document discovery configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    /// Root of the directory tree to scan.
    pub base_dir: PathBuf,

    /// Document extension, matched case-insensitively and without the dot.
    pub extension: String,

    /// Follow symbolic links while walking.
    pub follow_links: bool,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("facturas"),
            extension: "pdf".to_string(),
            follow_links: false,
        }
    }
}

/// Table output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Destination file.
    pub path: PathBuf,

    /// Table format.
    pub format: OutputFormat,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("facturas_extraidas.csv"),
            format: OutputFormat::Csv,
        }
    }
}

/// Tabular output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Comma-separated values with a header row.
    #[default]
    Csv,
    /// Pretty-printed JSON array.
    Json,
}

/// Field extraction configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Characters kept for the supplier column.
    pub supplier_width: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            supplier_width: DEFAULT_SUPPLIER_WIDTH,
        }
    }
}

/// What to do when a document cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OnError {
    /// Stop the run at the first unreadable document.
    #[default]
    Abort,
    /// Log the failure, leave the document out, and keep going.
    Skip,
}

/// Failure handling configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ErrorConfig {
    pub on_unreadable: OnError,
}

impl FacturasConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| FacturasError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Check values that deserialize fine but cannot drive a run.
    pub fn validate(&self) -> Result<()> {
        if self.input.extension.trim_start_matches('.').is_empty() {
            return Err(FacturasError::Config(
                "input.extension must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
