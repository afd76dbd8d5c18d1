//! The `doclens ask` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use doclens_core::session::DocumentSession;
use doclens_ingest::load_document;

pub fn execute(file: PathBuf, question: String, format: String) -> Result<()> {
    let document = load_document(&file)
        .with_context(|| format!("cannot load document {}", file.display()))?;

    let mut session = DocumentSession::new();
    session.set_document(document);
    let conversation = session.answer_question(&question);

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&conversation)?),
        _ => {
            println!("{}", conversation.answer);
            println!("\nReference: {}", conversation.document_reference);
        }
    }

    Ok(())
}
