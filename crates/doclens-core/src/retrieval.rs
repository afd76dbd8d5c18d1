//! Retrieval-based question answering.
//!
//! Filters document sentences by keyword overlap with the question and
//! stitches the most relevant ones into an answer. Total: every input,
//! including an unrelated question or an unreadable document, maps to a
//! well-formed response.

use crate::text::{split_sentences, RETRIEVAL_MIN_SENTENCE_CHARS};

/// Response when no document content has been set.
pub const NO_CONTENT_ANSWER: &str = "No document content available to answer questions.";

/// Reference string when no document content has been set.
pub const NO_CONTENT_REFERENCE: &str = "Document not loaded";

const RELEVANT_REFERENCE: &str =
    "This information is found in the document content where it discusses these topics.";

const FALLBACK_REFERENCE: &str = "Based on general document content analysis.";

/// Question words must be strictly longer than this to count as keywords.
const MIN_KEYWORD_CHARS: usize = 3;

/// At most this many sentences are stitched into an answer.
const ANSWER_SENTENCE_LIMIT: usize = 2;

/// A synthesized answer with the reference string explaining its basis.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetrievedAnswer {
    /// The synthesized answer text.
    pub answer: String,
    /// Where the answer came from.
    pub reference: String,
}

/// Answer a free-text question from document content.
///
/// A sentence is relevant when any question word longer than three
/// characters appears as a literal substring of the lowercased sentence.
/// With no relevant sentence the first document sentences are quoted
/// instead, behind a "couldn't find" preamble.
pub fn retrieve_answer(content: &str, question: &str) -> RetrievedAnswer {
    let sentences = split_sentences(content, RETRIEVAL_MIN_SENTENCE_CHARS);

    let lowered_question = question.to_lowercase();
    let keywords: Vec<&str> = lowered_question
        .split_whitespace()
        .filter(|word| word.chars().count() > MIN_KEYWORD_CHARS)
        .collect();

    let relevant: Vec<&str> = sentences
        .iter()
        .filter(|sentence| {
            let lowered = sentence.to_lowercase();
            keywords.iter().any(|keyword| lowered.contains(keyword))
        })
        .map(String::as_str)
        .collect();

    if !relevant.is_empty() {
        let stitched = relevant
            .iter()
            .take(ANSWER_SENTENCE_LIMIT)
            .copied()
            .collect::<Vec<_>>()
            .join(". ");
        return RetrievedAnswer {
            answer: format!("Based on the document content: {stitched}."),
            reference: RELEVANT_REFERENCE.to_string(),
        };
    }

    let opening = sentences
        .iter()
        .take(ANSWER_SENTENCE_LIMIT)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(". ");
    RetrievedAnswer {
        answer: format!(
            "While I couldn't find specific information about \"{question}\" in the document, \
             the document discusses: {opening}."
        ),
        reference: FALLBACK_REFERENCE.to_string(),
    }
}
