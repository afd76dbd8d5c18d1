//! doclens-ingest — File ingestion for doclens.
//!
//! Turns files on disk into [`doclens_core::model::Document`] values. This
//! is the only component with an error surface: the engine itself is total,
//! but unsupported file kinds and unreadable files must be reported here,
//! at the boundary.

mod error;
mod loader;

pub use error::IngestError;
pub use loader::{detect_kind, load_document};
