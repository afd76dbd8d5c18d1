//! Lexical frequency scoring.
//!
//! Counts normalized terms over a text, drops stop words and rare terms,
//! and produces a ranked top-N list. Counting keeps insertion order so that
//! ties in the final ranking break by first encounter, which makes the
//! output deterministic for identical input.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::text::clean_word;

/// Common function words excluded from frequency analysis.
pub const STOP_WORDS: &[&str] = &[
    "this", "that", "with", "have", "will", "from", "they", "been", "were",
    "said", "each", "which", "their", "time", "would", "there", "could",
    "other", "more", "very", "what", "know", "just", "first", "into", "over",
    "think", "also", "your", "work", "life", "only", "can", "still",
    "should", "after", "being", "now", "made", "before", "here", "through",
    "when", "where", "much", "some", "these", "many", "then", "them", "well",
];

/// Tuning knobs for the frequency scorer. Both floors are strict: a term
/// survives only when strictly longer / strictly more frequent.
#[derive(Debug, Clone, Copy)]
pub struct FrequencyOptions {
    /// Terms must be longer than this many characters.
    pub min_term_chars: usize,
    /// Terms must occur more often than this.
    pub min_count: usize,
    /// Ranked output is truncated to this many terms.
    pub top_n: usize,
}

impl FrequencyOptions {
    /// Preset used by the extractive summarizer.
    pub const SUMMARY: Self = Self {
        min_term_chars: 3,
        min_count: 1,
        top_n: 15,
    };

    /// Preset used by the question generator.
    pub const QUESTIONS: Self = Self {
        min_term_chars: 3,
        min_count: 2,
        top_n: 10,
    };
}

/// Count occurrences of each clean term longer than `min_term_chars`.
///
/// The returned pairs are in first-encounter order, not ranked.
pub fn term_frequencies(text: &str, min_term_chars: usize) -> Vec<(String, usize)> {
    let lowered = text.to_lowercase();
    let mut order: Vec<String> = Vec::new();
    let mut counts: HashMap<String, usize> = HashMap::new();

    for word in lowered.split_whitespace() {
        let term = clean_word(word);
        if term.chars().count() <= min_term_chars {
            continue;
        }
        match counts.entry(term) {
            Entry::Occupied(mut occupied) => *occupied.get_mut() += 1,
            Entry::Vacant(vacant) => {
                order.push(vacant.key().clone());
                vacant.insert(1);
            }
        }
    }

    order
        .into_iter()
        .map(|term| {
            let count = counts[&term];
            (term, count)
        })
        .collect()
}

/// The most frequent terms of a text, most frequent first.
///
/// Stop words and terms at or below the frequency floor are dropped; the
/// descending sort is stable, so equally frequent terms keep their
/// first-encounter order. Empty input yields an empty list.
pub fn top_terms(text: &str, options: &FrequencyOptions) -> Vec<String> {
    let mut ranked: Vec<(String, usize)> = term_frequencies(text, options.min_term_chars)
        .into_iter()
        .filter(|(term, count)| {
            *count > options.min_count && !STOP_WORDS.contains(&term.as_str())
        })
        .collect();

    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(options.top_n);
    ranked.into_iter().map(|(term, _)| term).collect()
}
