//! The `doclens quiz` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use doclens_core::quiz::{quiz_from_batch, quiz_to_toml, save_quiz};
use doclens_core::session::DocumentSession;
use doclens_ingest::load_document;

pub fn execute(file: PathBuf, output: Option<PathBuf>) -> Result<()> {
    let document = load_document(&file)
        .with_context(|| format!("cannot load document {}", file.display()))?;
    let document_name = document.name.clone();

    let mut session = DocumentSession::new();
    session.set_document(document);
    let batch = session.generate_questions();

    if batch.is_empty() {
        println!("No questions could be generated from {document_name}.");
        return Ok(());
    }

    let quiz_name = format!("Quiz for {document_name}");
    let quiz = quiz_from_batch(&quiz_name, &document_name, batch);

    match output {
        Some(path) => {
            save_quiz(&quiz, &path)?;
            println!("Created {} ({} questions)", path.display(), quiz.questions.len());
            println!("\nNext steps:");
            println!("  1. Fill in an `answer = \"...\"` line for each question");
            println!("  2. Run: doclens grade --quiz {}", path.display());
        }
        None => print!("{}", quiz_to_toml(&quiz)?),
    }

    Ok(())
}
