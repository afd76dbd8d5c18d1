//! The `doclens grade` command.

use std::path::PathBuf;

use anyhow::Result;
use comfy_table::Table;

use doclens_core::quiz::parse_quiz;
use doclens_core::report::grade_quiz;

pub fn execute(quiz_path: PathBuf, output: Option<PathBuf>, format: String) -> Result<()> {
    let quiz = parse_quiz(&quiz_path)?;
    tracing::info!(quiz = %quiz.name, questions = quiz.questions.len(), "grading quiz");
    let report = grade_quiz(&quiz);

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&report)?),
        "markdown" => print!("{}", report.to_markdown()),
        _ => {
            if report.total == 0 {
                println!("No answered questions in {}.", quiz_path.display());
            } else {
                let mut table = Table::new();
                table.set_header(vec!["Question", "Verdict", "Feedback"]);
                for result in &report.results {
                    table.add_row(vec![
                        result.question_id.clone(),
                        if result.is_correct {
                            "correct".to_string()
                        } else {
                            "incorrect".to_string()
                        },
                        result.feedback.clone(),
                    ]);
                }
                println!("{table}");
                println!(
                    "\nYou scored {} out of {} correct answers.",
                    report.correct, report.total
                );
            }
        }
    }

    if let Some(path) = output {
        report.save_json(&path)?;
        println!("Report written to {}", path.display());
    }

    Ok(())
}
