//! TOML quiz file serialization, parsing, and validation.
//!
//! A quiz file carries one generated question batch plus the user's
//! free-text answers, so a quiz can be generated, filled in by hand, and
//! graded in separate invocations.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{Question, QuestionCategory};

/// A quiz: one question batch bound to a source document.
#[derive(Debug, Clone)]
pub struct Quiz {
    /// Unique identifier for this quiz.
    pub id: Uuid,
    /// Human-readable name.
    pub name: String,
    /// Display name of the source document.
    pub document: String,
    /// When the quiz was generated.
    pub created_at: DateTime<Utc>,
    /// The questions, with any answers the user has filled in.
    pub questions: Vec<QuizQuestion>,
}

/// One quiz entry: a generated question plus the user's answer, if any.
#[derive(Debug, Clone)]
pub struct QuizQuestion {
    pub question: Question,
    pub answer: Option<String>,
}

/// Build a quiz from a freshly generated batch.
pub fn quiz_from_batch(name: &str, document: &str, batch: Vec<Question>) -> Quiz {
    Quiz {
        id: Uuid::new_v4(),
        name: name.to_string(),
        document: document.to_string(),
        created_at: Utc::now(),
        questions: batch
            .into_iter()
            .map(|question| QuizQuestion {
                question,
                answer: None,
            })
            .collect(),
    }
}

/// Intermediate TOML structure for quiz files.
#[derive(Debug, Serialize, Deserialize)]
struct TomlQuizFile {
    quiz: TomlQuizHeader,
    #[serde(default)]
    questions: Vec<TomlQuizQuestion>,
}

#[derive(Debug, Serialize, Deserialize)]
struct TomlQuizHeader {
    id: String,
    name: String,
    #[serde(default)]
    document: String,
    created_at: String,
}

#[derive(Debug, Serialize, Deserialize)]
struct TomlQuizQuestion {
    id: String,
    prompt: String,
    category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reference_answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    explanation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    answer: Option<String>,
}

/// Render a quiz as TOML.
pub fn quiz_to_toml(quiz: &Quiz) -> Result<String> {
    let file = TomlQuizFile {
        quiz: TomlQuizHeader {
            id: quiz.id.to_string(),
            name: quiz.name.clone(),
            document: quiz.document.clone(),
            created_at: quiz.created_at.to_rfc3339(),
        },
        questions: quiz
            .questions
            .iter()
            .map(|entry| TomlQuizQuestion {
                id: entry.question.id.clone(),
                prompt: entry.question.prompt.clone(),
                category: entry.question.category.to_string(),
                reference_answer: entry.question.reference_answer.clone(),
                explanation: entry.question.explanation.clone(),
                answer: entry.answer.clone(),
            })
            .collect(),
    };

    toml::to_string_pretty(&file).context("failed to serialize quiz")
}

/// Write a quiz TOML file.
pub fn save_quiz(quiz: &Quiz, path: &Path) -> Result<()> {
    let content = quiz_to_toml(quiz)?;
    std::fs::write(path, content)
        .with_context(|| format!("failed to write quiz to {}", path.display()))?;
    Ok(())
}

/// Parse a quiz TOML file.
pub fn parse_quiz(path: &Path) -> Result<Quiz> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read quiz file: {}", path.display()))?;

    parse_quiz_str(&content, path)
}

/// Parse a TOML string into a `Quiz` (useful for testing).
pub fn parse_quiz_str(content: &str, source_path: &Path) -> Result<Quiz> {
    let parsed: TomlQuizFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let id = Uuid::parse_str(&parsed.quiz.id)
        .with_context(|| format!("invalid quiz id: {}", parsed.quiz.id))?;
    let created_at = DateTime::parse_from_rfc3339(&parsed.quiz.created_at)
        .with_context(|| format!("invalid created_at timestamp: {}", parsed.quiz.created_at))?
        .with_timezone(&Utc);

    let questions = parsed
        .questions
        .into_iter()
        .map(|q| {
            let category: QuestionCategory = q
                .category
                .parse()
                .map_err(|e: String| anyhow::anyhow!("{}", e))?;

            Ok(QuizQuestion {
                question: Question {
                    id: q.id,
                    prompt: q.prompt,
                    category,
                    reference_answer: q.reference_answer,
                    explanation: q.explanation,
                },
                answer: q.answer,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Quiz {
        id,
        name: parsed.quiz.name,
        document: parsed.quiz.document,
        created_at,
        questions,
    })
}

/// A warning from quiz validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question ID (if applicable).
    pub question_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a quiz for common issues.
pub fn validate_quiz(quiz: &Quiz) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Question IDs must be unique within one batch
    let mut seen_ids = std::collections::HashSet::new();
    for entry in &quiz.questions {
        if !seen_ids.insert(&entry.question.id) {
            warnings.push(ValidationWarning {
                question_id: Some(entry.question.id.clone()),
                message: format!("duplicate question ID: {}", entry.question.id),
            });
        }
    }

    for entry in &quiz.questions {
        if entry.question.prompt.trim().is_empty() {
            warnings.push(ValidationWarning {
                question_id: Some(entry.question.id.clone()),
                message: "prompt is empty".into(),
            });
        }
    }

    for entry in &quiz.questions {
        if entry.question.reference_answer.is_none() {
            warnings.push(ValidationWarning {
                question_id: Some(entry.question.id.clone()),
                message: "no reference answer; grading will rely on answer length only".into(),
            });
        }
    }

    for entry in &quiz.questions {
        if entry
            .answer
            .as_ref()
            .is_some_and(|answer| answer.trim().is_empty())
        {
            warnings.push(ValidationWarning {
                question_id: Some(entry.question.id.clone()),
                message: "answer is present but blank".into(),
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questions::generate_questions;
    use std::path::PathBuf;

    const VALID_TOML: &str = r#"
[quiz]
id = "6f2b0c1e-8a3d-4e5f-9b7a-1c2d3e4f5a6b"
name = "Reactor quiz"
document = "reactor.txt"
created_at = "2025-06-01T12:00:00Z"

[[questions]]
id = "1"
prompt = "What is the main topic or focus of this document?"
category = "comprehension"
reference_answer = "The document appears to focus on reactors."
explanation = "Determined from the opening section."

[[questions]]
id = "2"
prompt = "What role do the following concepts play in the document: reactor, steam, loop?"
category = "inference"
reference_answer = "The concepts reactor, steam, loop appear to be central themes."
answer = "They describe the cooling cycle."
"#;

    #[test]
    fn parse_valid_toml() {
        let quiz = parse_quiz_str(VALID_TOML, &PathBuf::from("quiz.toml")).unwrap();
        assert_eq!(quiz.name, "Reactor quiz");
        assert_eq!(quiz.document, "reactor.txt");
        assert_eq!(quiz.questions.len(), 2);
        assert_eq!(quiz.questions[0].question.id, "1");
        assert_eq!(
            quiz.questions[1].question.category,
            QuestionCategory::Inference
        );
        assert_eq!(
            quiz.questions[1].answer.as_deref(),
            Some("They describe the cooling cycle.")
        );
        assert!(quiz.questions[0].answer.is_none());
    }

    #[test]
    fn generated_batch_roundtrips_through_toml() {
        let content = "Solar panels convert sunlight into electricity for the station. \
            Solar panels degrade slowly over their operational lifetime in orbit. \
            Engineers monitor solar panels daily to catch early degradation signs.";
        let quiz = quiz_from_batch("Solar quiz", "solar.txt", generate_questions(content));
        assert!(!quiz.questions.is_empty());

        let toml_text = quiz_to_toml(&quiz).unwrap();
        let parsed = parse_quiz_str(&toml_text, &PathBuf::from("quiz.toml")).unwrap();

        assert_eq!(parsed.id, quiz.id);
        assert_eq!(parsed.questions.len(), quiz.questions.len());
        for (a, b) in parsed.questions.iter().zip(&quiz.questions) {
            assert_eq!(a.question.id, b.question.id);
            assert_eq!(a.question.prompt, b.question.prompt);
            assert_eq!(a.question.category, b.question.category);
            assert_eq!(a.question.reference_answer, b.question.reference_answer);
        }
    }

    #[test]
    fn parse_unknown_category_fails() {
        let toml_text = VALID_TOML.replace("inference", "trivia");
        let result = parse_quiz_str(&toml_text, &PathBuf::from("quiz.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn parse_malformed_toml() {
        let bad = "this is not [valid toml }{";
        let result = parse_quiz_str(bad, &PathBuf::from("bad.toml"));
        assert!(result.is_err());
    }

    #[test]
    fn validate_duplicate_ids() {
        let mut quiz = parse_quiz_str(VALID_TOML, &PathBuf::from("quiz.toml")).unwrap();
        quiz.questions[1].question.id = "1".into();
        let warnings = validate_quiz(&quiz);
        assert!(warnings.iter().any(|w| w.message.contains("duplicate")));
    }

    #[test]
    fn validate_empty_prompt() {
        let mut quiz = parse_quiz_str(VALID_TOML, &PathBuf::from("quiz.toml")).unwrap();
        quiz.questions[0].question.prompt = "  ".into();
        let warnings = validate_quiz(&quiz);
        assert!(warnings.iter().any(|w| w.message.contains("prompt is empty")));
    }

    #[test]
    fn validate_missing_reference_answer() {
        let mut quiz = parse_quiz_str(VALID_TOML, &PathBuf::from("quiz.toml")).unwrap();
        quiz.questions[0].question.reference_answer = None;
        let warnings = validate_quiz(&quiz);
        assert!(warnings
            .iter()
            .any(|w| w.message.contains("no reference answer")));
    }

    #[test]
    fn validate_blank_answer() {
        let mut quiz = parse_quiz_str(VALID_TOML, &PathBuf::from("quiz.toml")).unwrap();
        quiz.questions[1].answer = Some("   ".into());
        let warnings = validate_quiz(&quiz);
        assert!(warnings.iter().any(|w| w.message.contains("blank")));
    }

    #[test]
    fn valid_quiz_has_no_warnings() {
        let quiz = parse_quiz_str(VALID_TOML, &PathBuf::from("quiz.toml")).unwrap();
        assert!(validate_quiz(&quiz).is_empty());
    }

    #[test]
    fn save_and_parse_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quiz.toml");
        let quiz = parse_quiz_str(VALID_TOML, &PathBuf::from("quiz.toml")).unwrap();

        save_quiz(&quiz, &path).unwrap();
        let loaded = parse_quiz(&path).unwrap();
        assert_eq!(loaded.id, quiz.id);
        assert_eq!(loaded.questions.len(), 2);
    }
}
