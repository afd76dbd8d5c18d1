//! Answer evaluation.
//!
//! Scores a user's free-text answer against a question's reference answer
//! with a lexical-overlap similarity, then classifies it against a fixed
//! threshold. Answers longer than 20 characters pass regardless of overlap;
//! the leniency is deliberate for open-ended questions.

use crate::model::{Answer, Question};

/// Overlap above this fraction counts as correct.
const SIMILARITY_THRESHOLD: f64 = 0.3;

/// Answers longer than this many characters count as correct outright.
const VERBOSE_ANSWER_CHARS: usize = 20;

/// Tokens must be strictly longer than this to participate in the overlap.
const MIN_TOKEN_CHARS: usize = 2;

const FALLBACK_REFERENCE: &str = "Based on document analysis";

/// Lexical overlap between two answer strings.
///
/// The denominator is the larger of the two word counts (floored at 1), not
/// the union size — intentionally kept as-is rather than corrected to true
/// Jaccard, because the 0.3 threshold is calibrated against this formula.
pub fn similarity(first: &str, second: &str) -> f64 {
    let words_a: Vec<&str> = overlap_tokens(first);
    let words_b: Vec<&str> = overlap_tokens(second);

    let intersection = words_a.iter().filter(|word| words_b.contains(word)).count();

    intersection as f64 / words_a.len().max(words_b.len()).max(1) as f64
}

fn overlap_tokens(text: &str) -> Vec<&str> {
    text.split_whitespace()
        .filter(|word| word.chars().count() > MIN_TOKEN_CHARS)
        .collect()
}

/// Evaluate a user answer against a question's reference answer.
///
/// Total over its inputs: a question without a reference answer still
/// produces a well-formed verdict (the overlap is simply zero).
pub fn evaluate_answer(question: &Question, user_answer: &str) -> Answer {
    let reference = question.reference_answer.as_deref().unwrap_or("");
    let score = similarity(
        &user_answer.to_lowercase(),
        &reference.to_lowercase(),
    );
    let is_correct =
        score > SIMILARITY_THRESHOLD || user_answer.chars().count() > VERBOSE_ANSWER_CHARS;

    let explanation = question.explanation.as_deref().unwrap_or("");
    let feedback = if is_correct {
        format!(
            "Good answer! Your response shows understanding of the document content. {explanation}"
        )
    } else {
        format!("Your answer could be more detailed. Consider: {reference}. {explanation}")
    };

    Answer {
        question_id: question.id.clone(),
        user_answer: user_answer.to_string(),
        feedback,
        is_correct,
        document_reference: question
            .explanation
            .clone()
            .unwrap_or_else(|| FALLBACK_REFERENCE.to_string()),
    }
}
