//! The `doclens terms` command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use comfy_table::Table;

use doclens_core::frequency::{term_frequencies, FrequencyOptions, STOP_WORDS};
use doclens_ingest::load_document;

pub fn execute(file: PathBuf, top: usize) -> Result<()> {
    let document = load_document(&file)
        .with_context(|| format!("cannot load document {}", file.display()))?;

    let options = FrequencyOptions::SUMMARY;
    let mut ranked: Vec<(String, usize)> =
        term_frequencies(&document.content, options.min_term_chars)
            .into_iter()
            .filter(|(term, count)| {
                *count > options.min_count && !STOP_WORDS.contains(&term.as_str())
            })
            .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(top);

    if ranked.is_empty() {
        println!("No term occurs often enough to rank.");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_header(vec!["Term", "Count"]);
    for (term, count) in &ranked {
        table.add_row(vec![term.clone(), count.to_string()]);
    }

    println!("{} ({})", document.name, document.kind);
    println!("{table}");

    Ok(())
}
