//! Synchronizer type definitions.

use std::path::PathBuf;

use thiserror::Error;

use crate::export::ExportError;
use crate::tree::TranslationTree;

/// One locale's translation document, loaded into memory.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleDocument {
    /// Locale identifier, taken from the directory holding the file.
    pub locale: String,
    /// Path the document was loaded from and is written back to.
    pub path: PathBuf,
    /// Parsed translation tree.
    pub tree: TranslationTree,
}

/// Summary of one synchronization pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SyncReport {
    /// Whether the configured master locale was found among the documents.
    ///
    /// When `false`, no subordinate file was touched.
    pub master_found: bool,
    /// Locales whose files were rewritten, in processing order.
    pub updated: Vec<String>,
    /// Path of the CSV export, when one was produced.
    pub exported: Option<PathBuf>,
}

#[derive(Error, Debug)]
pub enum SyncError {
    /// The configured locales directory does not exist
    #[error("Unable to find a valid directory at {}", .0.display())]
    LocalesDirNotFound(PathBuf),
    /// The translation file name does not form a valid glob
    #[error("Invalid translation file pattern '{pattern}': {source}")]
    InvalidFilePattern {
        pattern: String,
        source: globset::Error,
    },
    /// Error when writing a synchronized translation file
    #[error("Failed to write translation file: {0}")]
    Io(#[from] std::io::Error),
    /// Error when serializing a synchronized tree
    #[error("Failed to serialize translation tree: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    Export(#[from] ExportError),
}
