//! Extractive summarization.
//!
//! Sentences are scored with an additive point system (top-term occurrences
//! plus positional and length bonuses), split into a primary and a secondary
//! group, and greedily selected under a word budget. The final summary is
//! assembled in document order. The weights and thresholds are part of the
//! engine's contract and must not be retuned.

use crate::frequency::{top_terms, FrequencyOptions};
use crate::model::{ScoredSentence, Summary};
use crate::text::{collapse_whitespace, count_words, split_sentences, SUMMARY_MIN_SENTENCE_CHARS};

/// Word budget for an assembled summary.
pub const SUMMARY_TARGET_WORDS: usize = 145;

/// Secondary sentences are only considered below this fraction of the budget.
const REFILL_FRACTION: f64 = 0.8;

/// Primary group size: the highest-scored sentences.
const PRIMARY_GROUP_SIZE: usize = 8;

/// Primary plus secondary group size.
const TOTAL_GROUP_SIZE: usize = 15;

/// Canonical summary for documents with no qualifying sentences.
pub const EMPTY_DOCUMENT_SUMMARY: &str =
    "The document appears to be empty or contains no readable content.";

/// Nominal word count reported with [`EMPTY_DOCUMENT_SUMMARY`].
pub const EMPTY_DOCUMENT_WORD_COUNT: usize = 12;

/// Produce a word-budgeted extractive summary of `content`.
///
/// Pure function of its input: identical text yields an identical summary.
/// The returned word count is recomputed from the assembled text and never
/// exceeds [`SUMMARY_TARGET_WORDS`].
pub fn generate_summary(content: &str) -> Summary {
    let cleaned = collapse_whitespace(content);
    let sentences = split_sentences(&cleaned, SUMMARY_MIN_SENTENCE_CHARS);

    if sentences.is_empty() {
        return Summary {
            text: EMPTY_DOCUMENT_SUMMARY.to_string(),
            word_count: EMPTY_DOCUMENT_WORD_COUNT,
        };
    }

    let scored = score_sentences(&cleaned, &sentences);
    let (primary, secondary) = select_groups(scored);

    let mut selected: Vec<usize> = Vec::new();
    let mut running = 0usize;

    // A sentence that would overflow the budget is skipped entirely, never
    // truncated; later, shorter sentences may still fit.
    for &index in &primary {
        let words = count_words(&sentences[index]);
        if running + words <= SUMMARY_TARGET_WORDS {
            selected.push(index);
            running += words;
        }
    }

    // Refill from the secondary group only when the summary came up short.
    if (running as f64) < SUMMARY_TARGET_WORDS as f64 * REFILL_FRACTION {
        for &index in &secondary {
            if running >= SUMMARY_TARGET_WORDS {
                break;
            }
            let words = count_words(&sentences[index]);
            if running + words <= SUMMARY_TARGET_WORDS {
                selected.push(index);
                running += words;
            }
        }
    }

    // Degenerate documents where no sentence fits: fall back to a raw
    // word-budget prefix of the cleaned text.
    if selected.is_empty() {
        let words: Vec<&str> = cleaned
            .split_whitespace()
            .take(SUMMARY_TARGET_WORDS)
            .collect();
        let mut text = words.join(" ");
        if words.len() == SUMMARY_TARGET_WORDS {
            text.push_str("...");
        }
        let word_count = count_words(&text);
        return Summary { text, word_count };
    }

    selected.sort_unstable();
    let text = selected
        .iter()
        .map(|&index| format!("{}.", sentences[index]))
        .collect::<Vec<_>>()
        .join(" ");

    let word_count = count_words(&text);
    Summary { text, word_count }
}

/// Score every sentence of one normalizer pass.
pub fn score_sentences(cleaned: &str, sentences: &[String]) -> Vec<ScoredSentence> {
    let terms = top_terms(cleaned, &FrequencyOptions::SUMMARY);
    let total = sentences.len();

    sentences
        .iter()
        .enumerate()
        .map(|(index, sentence)| {
            let lowered = sentence.to_lowercase();
            let mut score: i32 = 0;

            for term in &terms {
                score += 2 * lowered.matches(term.as_str()).count() as i32;
            }

            if index == 0 {
                score += 3;
            }
            if index + 1 == total {
                score += 2;
            }
            if (index as f64) < total as f64 * 0.2 {
                score += 1;
            }
            if (index as f64) > total as f64 * 0.8 {
                score += 1;
            }

            let words = count_words(sentence);
            if words > 15 {
                score += 1;
            }
            if words > 25 {
                score += 1;
            }
            if words < 8 {
                score -= 1;
            }

            ScoredSentence {
                index,
                text: sentence.clone(),
                score,
            }
        })
        .collect()
}

/// Split scored sentences into the primary (top 8) and secondary (next 7)
/// groups of selection candidates, each in document order.
fn select_groups(mut scored: Vec<ScoredSentence>) -> (Vec<usize>, Vec<usize>) {
    // Stable sort: equal scores keep document order.
    scored.sort_by(|a, b| b.score.cmp(&a.score));

    let mut primary: Vec<usize> = scored
        .iter()
        .take(PRIMARY_GROUP_SIZE)
        .map(|s| s.index)
        .collect();
    primary.sort_unstable();

    let mut secondary: Vec<usize> = scored
        .iter()
        .skip(PRIMARY_GROUP_SIZE)
        .take(TOTAL_GROUP_SIZE - PRIMARY_GROUP_SIZE)
        .map(|s| s.index)
        .collect();
    secondary.sort_unstable();

    (primary, secondary)
}
