//! Quiz grading reports with JSON persistence.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::evaluate::evaluate_answer;
use crate::model::Answer;
use crate::quiz::Quiz;

/// The result of grading one filled-in quiz.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the report was created.
    pub created_at: DateTime<Utc>,
    /// Name of the graded quiz.
    pub quiz_name: String,
    /// Display name of the source document.
    pub document: String,
    /// Per-question evaluation results, in quiz order.
    pub results: Vec<Answer>,
    /// How many answers cleared the correctness threshold.
    pub correct: usize,
    /// How many questions were answered. Unanswered questions are skipped,
    /// not counted as wrong.
    pub total: usize,
}

/// Grade every answered question of a quiz.
pub fn grade_quiz(quiz: &Quiz) -> QuizReport {
    let results: Vec<Answer> = quiz
        .questions
        .iter()
        .filter_map(|entry| {
            entry
                .answer
                .as_deref()
                .map(|answer| evaluate_answer(&entry.question, answer))
        })
        .collect();

    let correct = results.iter().filter(|answer| answer.is_correct).count();
    let total = results.len();

    tracing::debug!(quiz = %quiz.name, correct, total, "quiz graded");

    QuizReport {
        id: Uuid::new_v4(),
        created_at: Utc::now(),
        quiz_name: quiz.name.clone(),
        document: quiz.document.clone(),
        results,
        correct,
        total,
    }
}

impl QuizReport {
    /// Fraction of answered questions that were correct, in `0.0..=1.0`.
    pub fn score(&self) -> f64 {
        self.correct as f64 / self.total.max(1) as f64
    }

    /// Save the report as JSON to a file.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: QuizReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }

    /// Format the report as markdown.
    pub fn to_markdown(&self) -> String {
        let mut md = String::new();

        md.push_str(&format!(
            "**{}** ({}): {} out of {} correct\n\n",
            self.quiz_name, self.document, self.correct, self.total
        ));

        if !self.results.is_empty() {
            md.push_str("| Question | Verdict | Feedback |\n");
            md.push_str("|----------|---------|----------|\n");
            for result in &self.results {
                md.push_str(&format!(
                    "| {} | {} | {} |\n",
                    result.question_id,
                    if result.is_correct { "correct" } else { "incorrect" },
                    result.feedback.replace('|', "\\|"),
                ));
            }
        }

        md
    }
}
