//! Question generation.
//!
//! Derives up to three templated questions from document text, in a fixed
//! order: topic comprehension, key-points comprehension, concept-role
//! inference. Each question carries a reference answer and an explanation;
//! identifiers are assigned by generation order and unique within a batch.

use crate::frequency::{top_terms, FrequencyOptions};
use crate::model::{Question, QuestionCategory};
use crate::text::{
    prefix_chars, split_sentences, KEY_POINT_MIN_SENTENCE_CHARS, RETRIEVAL_MIN_SENTENCE_CHARS,
};

/// Hard cap on questions per generated batch.
pub const MAX_QUESTIONS: usize = 3;

/// Number of top terms named by the concept-role question.
const CONCEPT_COUNT: usize = 3;

const TOPIC_EXPLANATION: &str = "This can be determined from the overall content and key \
                                 themes discussed throughout the document.";
const KEY_POINTS_EXPLANATION: &str = "These points are derived from the main arguments and \
                                      conclusions presented in the document.";
const CONCEPTS_EXPLANATION: &str = "This requires understanding how these key concepts relate \
                                    to the overall message of the document.";

/// Generate the question batch for a document.
///
/// Deterministic: the same content always yields the same questions in the
/// same order. Content with no qualifying sentences and no repeated terms
/// yields an empty batch, never an error.
pub fn generate_questions(content: &str) -> Vec<Question> {
    if content.trim().is_empty() {
        return Vec::new();
    }

    let sentences = split_sentences(content, RETRIEVAL_MIN_SENTENCE_CHARS);
    let terms = top_terms(content, &FrequencyOptions::QUESTIONS);

    let mut questions = Vec::new();

    if !sentences.is_empty() {
        questions.push(Question {
            id: (questions.len() + 1).to_string(),
            prompt: "What is the main topic or focus of this document?".to_string(),
            category: QuestionCategory::Comprehension,
            reference_answer: Some(main_topic_answer(content)),
            explanation: Some(TOPIC_EXPLANATION.to_string()),
        });
    }

    if sentences.len() > 2 {
        questions.push(Question {
            id: (questions.len() + 1).to_string(),
            prompt: "Based on the document, what are the key points or findings mentioned?"
                .to_string(),
            category: QuestionCategory::Comprehension,
            reference_answer: Some(key_points_answer(content)),
            explanation: Some(KEY_POINTS_EXPLANATION.to_string()),
        });
    }

    if !terms.is_empty() {
        let concepts: Vec<&str> = terms
            .iter()
            .take(CONCEPT_COUNT)
            .map(String::as_str)
            .collect();
        questions.push(Question {
            id: (questions.len() + 1).to_string(),
            prompt: format!(
                "What role do the following concepts play in the document: {}?",
                concepts.join(", ")
            ),
            category: QuestionCategory::Inference,
            reference_answer: Some(concept_roles_answer(&concepts)),
            explanation: Some(CONCEPTS_EXPLANATION.to_string()),
        });
    }

    questions.truncate(MAX_QUESTIONS);
    questions
}

/// Reference answer for the topic question: quotes the opening of the first
/// paragraph, or of the raw text when there is no line break.
fn main_topic_answer(content: &str) -> String {
    let first_paragraph = match content.lines().next() {
        Some(line) if !line.is_empty() => line.to_string(),
        _ => prefix_chars(content, 200),
    };
    format!(
        "The document appears to focus on topics related to the content discussed in the \
         opening section: \"{}...\"",
        prefix_chars(&first_paragraph, 100)
    )
}

/// Reference answer for the key-points question: the first three substantial
/// sentences, numbered.
fn key_points_answer(content: &str) -> String {
    let sentences = split_sentences(content, KEY_POINT_MIN_SENTENCE_CHARS);
    let key_points = sentences
        .iter()
        .take(3)
        .enumerate()
        .map(|(i, sentence)| format!("{}. {sentence}", i + 1))
        .collect::<Vec<_>>()
        .join("; ");

    if key_points.is_empty() {
        "Key points can be found throughout the document content".to_string()
    } else {
        key_points
    }
}

/// Reference answer for the concept-role question.
fn concept_roles_answer(concepts: &[&str]) -> String {
    format!(
        "The concepts {} appear to be central themes that are discussed throughout the \
         document and contribute to its main arguments and conclusions.",
        concepts.join(", ")
    )
}
