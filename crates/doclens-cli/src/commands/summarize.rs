//! The `doclens summarize` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use doclens_core::summary::generate_summary;
use doclens_ingest::load_document;

pub fn execute(file: PathBuf, format: String) -> Result<()> {
    let document = load_document(&file)
        .with_context(|| format!("cannot load document {}", file.display()))?;

    let summary = generate_summary(&document.content);

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&summary)?),
        _ => {
            println!("{}", summary.text);
            println!("\n({} words)", summary.word_count);
        }
    }

    Ok(())
}
