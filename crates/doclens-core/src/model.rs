//! Core data model types for doclens.
//!
//! These are the fundamental types that the entire doclens system uses
//! to represent documents, summaries, questions, and answers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A loaded document, immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Unique identifier for this document.
    pub id: Uuid,
    /// Display name (usually the file name).
    pub name: String,
    /// Declared content kind.
    pub kind: DocumentKind,
    /// Full extracted text.
    pub content: String,
    /// When the document was created.
    pub created_at: DateTime<Utc>,
}

/// Supported document content kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Text,
    Markdown,
    Html,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Text => write!(f, "text"),
            DocumentKind::Markdown => write!(f, "markdown"),
            DocumentKind::Html => write!(f, "html"),
        }
    }
}

impl FromStr for DocumentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(DocumentKind::Text),
            "markdown" | "md" => Ok(DocumentKind::Markdown),
            "html" | "htm" => Ok(DocumentKind::Html),
            other => Err(format!("unknown document kind: {other}")),
        }
    }
}

/// An extractive summary derived from a document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    /// The assembled summary text.
    pub text: String,
    /// Word count of `text`, recomputed from the assembled result.
    pub word_count: usize,
}

/// A sentence with its document-order index and importance score.
///
/// Indices always refer to the sentence array of a single normalizer pass;
/// scores from different passes must never be mixed.
#[derive(Debug, Clone)]
pub struct ScoredSentence {
    /// 0-based index in document order.
    pub index: usize,
    /// The raw sentence text.
    pub text: String,
    /// Additive importance score.
    pub score: i32,
}

/// A generated question with its reference answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Identifier, unique within one generated batch.
    pub id: String,
    /// The question prompt shown to the user.
    pub prompt: String,
    /// Question category.
    pub category: QuestionCategory,
    /// Heuristically derived reference answer.
    #[serde(default)]
    pub reference_answer: Option<String>,
    /// Explanation of what the question probes.
    #[serde(default)]
    pub explanation: Option<String>,
}

/// Categories of generated questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionCategory {
    Comprehension,
    Logical,
    Inference,
}

impl fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionCategory::Comprehension => write!(f, "comprehension"),
            QuestionCategory::Logical => write!(f, "logical"),
            QuestionCategory::Inference => write!(f, "inference"),
        }
    }
}

impl FromStr for QuestionCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "comprehension" => Ok(QuestionCategory::Comprehension),
            "logical" => Ok(QuestionCategory::Logical),
            "inference" => Ok(QuestionCategory::Inference),
            other => Err(format!("unknown question category: {other}")),
        }
    }
}

/// The result of evaluating a user's answer against a question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    /// The question this answer was evaluated against.
    pub question_id: String,
    /// The verbatim user answer.
    pub user_answer: String,
    /// Feedback text for the user.
    pub feedback: String,
    /// Whether the answer cleared the correctness threshold.
    pub is_correct: bool,
    /// What in the document the evaluation was based on.
    pub document_reference: String,
}

/// One retrieval Q&A exchange. Append-only; never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    /// Unique identifier for this exchange.
    pub id: Uuid,
    /// The user's question.
    pub question: String,
    /// The synthesized answer.
    pub answer: String,
    /// What in the document the answer was drawn from.
    pub document_reference: String,
    /// When the exchange happened.
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_kind_display_and_parse() {
        assert_eq!(DocumentKind::Text.to_string(), "text");
        assert_eq!(DocumentKind::Html.to_string(), "html");
        assert_eq!("txt".parse::<DocumentKind>().unwrap(), DocumentKind::Text);
        assert_eq!(
            "Markdown".parse::<DocumentKind>().unwrap(),
            DocumentKind::Markdown
        );
        assert_eq!("htm".parse::<DocumentKind>().unwrap(), DocumentKind::Html);
        assert!("pdf".parse::<DocumentKind>().is_err());
    }

    #[test]
    fn question_category_display_and_parse() {
        assert_eq!(QuestionCategory::Comprehension.to_string(), "comprehension");
        assert_eq!(
            "inference".parse::<QuestionCategory>().unwrap(),
            QuestionCategory::Inference
        );
        assert_eq!(
            "Logical".parse::<QuestionCategory>().unwrap(),
            QuestionCategory::Logical
        );
        assert!("trivia".parse::<QuestionCategory>().is_err());
    }

    #[test]
    fn question_serde_roundtrip() {
        let question = Question {
            id: "1".into(),
            prompt: "What is the main topic?".into(),
            category: QuestionCategory::Comprehension,
            reference_answer: Some("The document discusses testing.".into()),
            explanation: None,
        };
        let json = serde_json::to_string(&question).unwrap();
        let deserialized: Question = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.id, "1");
        assert_eq!(deserialized.category, QuestionCategory::Comprehension);
        assert!(deserialized.explanation.is_none());
    }

    #[test]
    fn conversation_serde_roundtrip() {
        let conversation = Conversation {
            id: Uuid::nil(),
            question: "What is this about?".into(),
            answer: "Based on the document content: testing.".into(),
            document_reference: "general analysis".into(),
            timestamp: Utc::now(),
        };
        let json = serde_json::to_string(&conversation).unwrap();
        let deserialized: Conversation = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized.id, Uuid::nil());
        assert_eq!(deserialized.question, "What is this about?");
    }
}
