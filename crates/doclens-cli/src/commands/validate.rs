//! The `doclens validate` command.

use std::path::PathBuf;

use anyhow::Result;

use doclens_core::quiz::{parse_quiz, validate_quiz};

pub fn execute(quiz_path: PathBuf) -> Result<()> {
    let quiz = parse_quiz(&quiz_path)?;

    println!("Quiz: {} ({} questions)", quiz.name, quiz.questions.len());

    let warnings = validate_quiz(&quiz);
    for warning in &warnings {
        let prefix = warning
            .question_id
            .as_ref()
            .map(|id| format!("  [{id}]"))
            .unwrap_or_else(|| "  ".to_string());
        println!("{prefix} WARNING: {}", warning.message);
    }

    if warnings.is_empty() {
        println!("Quiz file is valid.");
    } else {
        println!("\n{} warning(s) found.", warnings.len());
    }

    Ok(())
}
