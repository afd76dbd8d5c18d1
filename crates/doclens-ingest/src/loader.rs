//! Loading documents from disk.

use std::path::Path;

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use doclens_core::model::{Document, DocumentKind};

use crate::error::IngestError;

/// Width used when flattening HTML to text.
const HTML_RENDER_WIDTH: usize = 80;

/// Map a file path to its document kind via the extension.
pub fn detect_kind(path: &Path) -> Result<DocumentKind, IngestError> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("")
        .to_lowercase();

    extension
        .parse()
        .map_err(|_| IngestError::UnsupportedKind { extension })
}

/// Read a file and build a [`Document`] from its extracted text.
///
/// Plain text and markdown are read verbatim; HTML is flattened to text.
pub fn load_document(path: &Path) -> Result<Document, IngestError> {
    let kind = detect_kind(path)?;

    let raw = std::fs::read_to_string(path).map_err(|source| IngestError::Unreadable {
        path: path.display().to_string(),
        source,
    })?;

    let content = match kind {
        DocumentKind::Text | DocumentKind::Markdown => raw,
        DocumentKind::Html => html2text::from_read(raw.as_bytes(), HTML_RENDER_WIDTH)
            .map_err(|e| IngestError::Extraction {
                path: path.display().to_string(),
                message: e.to_string(),
            })?,
    };

    let name = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or("document")
        .to_string();

    let document = Document {
        id: Uuid::new_v4(),
        name,
        kind,
        content,
        created_at: Utc::now(),
    };

    info!(
        id = %document.id,
        kind = %document.kind,
        size = document.content.len(),
        "document ingested"
    );

    Ok(document)
}
