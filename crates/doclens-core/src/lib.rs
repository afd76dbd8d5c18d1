//! doclens-core — Core document-understanding engine.
//!
//! This crate defines the data model and the deterministic heuristic
//! pipeline that the entire doclens system builds on: text normalization,
//! lexical frequency analysis, extractive summarization, question
//! generation, answer evaluation, and retrieval-based Q&A.

pub mod evaluate;
pub mod frequency;
pub mod model;
pub mod questions;
pub mod quiz;
pub mod report;
pub mod retrieval;
pub mod session;
pub mod summary;
pub mod text;
