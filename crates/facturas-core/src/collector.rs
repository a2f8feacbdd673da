//! Recursive document discovery and text collection.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};
use walkdir::WalkDir;

use crate::error::{FacturasError, Result};
use crate::models::config::{InputConfig, OnError};
use crate::models::record::Document;
use crate::pdf::TextSource;

/// A document that could not be turned into text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionFailure {
    pub path: PathBuf,
    pub reason: String,
}

/// Outcome of a collection run.
#[derive(Debug, Default)]
pub struct Collection {
    /// Readable documents, in traversal order.
    pub documents: Vec<Document>,
    /// Documents and directories skipped under [`OnError::Skip`].
    pub failures: Vec<CollectionFailure>,
}

/// Walks a directory tree and reads every matching document.
///
/// Within each directory, files are visited before subdirectories and both
/// are sorted by name, so two runs over the same tree see documents in the
/// same order.
#[derive(Debug, Clone)]
pub struct DocumentCollector {
    extension: String,
    follow_links: bool,
    on_error: OnError,
}

impl DocumentCollector {
    /// Create a collector for `.pdf` files that aborts on the first failure.
    pub fn new() -> Self {
        Self {
            extension: "pdf".to_string(),
            follow_links: false,
            on_error: OnError::Abort,
        }
    }

    /// Build a collector from the `input` configuration section.
    pub fn from_config(config: &InputConfig) -> Self {
        Self::new()
            .with_extension(&config.extension)
            .with_follow_links(config.follow_links)
    }

    /// Set the document extension (with or without the leading dot).
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_lowercase();
        self
    }

    /// Follow symbolic links to directories while walking.
    pub fn with_follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Set the policy for unreadable documents and directories.
    pub fn with_on_error(mut self, on_error: OnError) -> Self {
        self.on_error = on_error;
        self
    }

    /// Whether `path` names a document, judged by its file name suffix.
    pub fn is_document(&self, path: &Path) -> bool {
        let suffix = format!(".{}", self.extension);
        path.file_name()
            .map(|name| name.to_string_lossy().to_lowercase().ends_with(&suffix))
            .unwrap_or(false)
    }

    /// List every document under `base`, in traversal order.
    ///
    /// Under [`OnError::Skip`] unreadable directories are logged and left out.
    pub fn discover(&self, base: &Path) -> Result<Vec<PathBuf>> {
        let mut failures = Vec::new();
        self.walk(base, &mut failures)
    }

    fn walk(&self, base: &Path, failures: &mut Vec<CollectionFailure>) -> Result<Vec<PathBuf>> {
        let mut paths = Vec::new();

        let walker = WalkDir::new(base)
            .follow_links(self.follow_links)
            .sort_by(|a, b| {
                a.file_type()
                    .is_dir()
                    .cmp(&b.file_type().is_dir())
                    .then_with(|| a.file_name().cmp(b.file_name()))
            });

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => match self.on_error {
                    OnError::Abort => return Err(e.into()),
                    OnError::Skip => {
                        let path = e.path().unwrap_or(base).to_path_buf();
                        warn!("Skipping {}: {}", path.display(), e);
                        failures.push(CollectionFailure {
                            path,
                            reason: e.to_string(),
                        });
                        continue;
                    }
                },
            };

            // Symlinks count when they point at a file
            if self.is_document(entry.path()) && entry.path().is_file() {
                paths.push(entry.into_path());
            }
        }

        debug!("Found {} documents under {}", paths.len(), base.display());
        Ok(paths)
    }

    /// Read every document under `base`.
    pub fn collect(&self, base: &Path, source: &dyn TextSource) -> Result<Collection> {
        self.collect_with(base, source, |_| {})
    }

    /// Read every document under `base`, calling `observer` before each one.
    pub fn collect_with<F>(
        &self,
        base: &Path,
        source: &dyn TextSource,
        mut observer: F,
    ) -> Result<Collection>
    where
        F: FnMut(&Path),
    {
        let mut failures = Vec::new();
        let paths = self.walk(base, &mut failures)?;
        let mut collection = Collection {
            documents: Vec::with_capacity(paths.len()),
            failures,
        };

        for path in paths {
            observer(&path);

            match source.extract_text(&path) {
                Ok(text) => {
                    debug!("Read {} chars from {}", text.len(), path.display());
                    collection.documents.push(Document { path, text });
                }
                Err(e) => match self.on_error {
                    OnError::Abort => {
                        return Err(FacturasError::Document {
                            path,
                            source: Box::new(e),
                        });
                    }
                    OnError::Skip => {
                        warn!("Skipping {}: {}", path.display(), e);
                        collection.failures.push(CollectionFailure {
                            path,
                            reason: e.to_string(),
                        });
                    }
                },
            }
        }

        Ok(collection)
    }
}

impl Default for DocumentCollector {
    fn default() -> Self {
        Self::new()
    }
}
