//! Text normalization: whitespace collapse, sentence and word splitting.
//!
//! Every downstream component works on the output of these functions, so
//! they are pure and deterministic. Each consumer applies its own minimum
//! sentence length; the thresholds are intentionally distinct and must not
//! be unified.

/// Minimum sentence length for the summarizer.
pub const SUMMARY_MIN_SENTENCE_CHARS: usize = 15;

/// Minimum sentence length for retrieval Q&A and question generation.
pub const RETRIEVAL_MIN_SENTENCE_CHARS: usize = 20;

/// Minimum sentence length for key-point reference answers.
pub const KEY_POINT_MIN_SENTENCE_CHARS: usize = 30;

/// Collapse any run of whitespace into a single space and trim the ends.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Split text into sentences on `.`, `!`, `?` runs.
///
/// A candidate sentence is kept only if its trimmed length is strictly
/// greater than `min_chars`. Output order matches document order and is
/// index-stable for one pass.
pub fn split_sentences(text: &str, min_chars: usize) -> Vec<String> {
    text.split(['.', '!', '?'])
        .map(str::trim)
        .filter(|s| s.chars().count() > min_chars)
        .map(str::to_string)
        .collect()
}

/// Count whitespace-delimited non-empty tokens.
pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Strip every non-word character from a token.
pub fn clean_word(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_alphanumeric() || *c == '_')
        .collect()
}

/// The first `n` characters of a string, char-boundary safe.
pub fn prefix_chars(text: &str, n: usize) -> String {
    text.chars().take(n).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapse_whitespace_flattens_runs() {
        assert_eq!(
            collapse_whitespace("  hello \t world \n\n again  "),
            "hello world again"
        );
        assert_eq!(collapse_whitespace(""), "");
        assert_eq!(collapse_whitespace("   \n\t  "), "");
    }

    #[test]
    fn split_sentences_on_terminators() {
        let text = "This is the first sentence. This one follows it! Does this question count? yes";
        let sentences = split_sentences(text, 15);
        assert_eq!(
            sentences,
            vec![
                "This is the first sentence",
                "This one follows it",
                "Does this question count",
            ]
        );
    }

    #[test]
    fn split_sentences_filters_short_candidates() {
        let text = "Too short. This sentence is comfortably long enough to keep.";
        let sentences = split_sentences(text, 15);
        assert_eq!(sentences.len(), 1);
        assert!(sentences[0].starts_with("This sentence"));
    }

    #[test]
    fn split_sentences_collapses_terminator_runs() {
        let sentences = split_sentences("What is happening here?!? Something dramatic happened...", 15);
        assert_eq!(
            sentences,
            vec!["What is happening here", "Something dramatic happened"]
        );
    }

    #[test]
    fn split_sentences_empty_input_yields_no_sentences() {
        assert!(split_sentences("", 15).is_empty());
        assert!(split_sentences("   \n\t ", 15).is_empty());
    }

    #[test]
    fn count_words_ignores_extra_whitespace() {
        assert_eq!(count_words("one two  three\n four"), 4);
        assert_eq!(count_words(""), 0);
        assert_eq!(count_words("   "), 0);
    }

    #[test]
    fn clean_word_strips_punctuation() {
        assert_eq!(clean_word("hello,"), "hello");
        assert_eq!(clean_word("(world)"), "world");
        assert_eq!(clean_word("snake_case"), "snake_case");
        assert_eq!(clean_word("..."), "");
    }

    #[test]
    fn prefix_chars_is_char_safe() {
        assert_eq!(prefix_chars("héllo wörld", 5), "héllo");
        assert_eq!(prefix_chars("short", 100), "short");
    }
}
