//! Ingestion error types.
//!
//! Defined separately so callers can distinguish "this file type is not
//! supported" from plain I/O failures without string matching.

use thiserror::Error;

/// Errors that can occur while ingesting a document file.
#[derive(Debug, Error)]
pub enum IngestError {
    /// The file extension does not map to a supported document kind.
    #[error("unsupported file type: {extension:?} (supported: txt, md, html)")]
    UnsupportedKind { extension: String },

    /// The file could not be read.
    #[error("failed to read {path}: {source}")]
    Unreadable {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The file content could not be converted to text.
    #[error("failed to extract text from {path}: {message}")]
    Extraction { path: String, message: String },
}

impl IngestError {
    /// Returns `true` when retrying with the same file cannot succeed.
    pub fn is_unsupported(&self) -> bool {
        matches!(self, IngestError::UnsupportedKind { .. })
    }
}
