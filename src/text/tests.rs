//! Text Module Tests
//!
//! Validates tokenization and normalization, the leaf stages of the
//! indexing pipeline.
//!
//! ## Test Scopes
//! - **Normalizer**: lower-casing, possessive stemming, alphabetic filtering.
//! - **Tokenizer**: whitespace splitting and byte-offset reporting.
//! - **Words**: the combined non-noise normalized word stream.

#[cfg(test)]
mod tests {
    use crate::text::normalizer::{is_noise, normalize, normalize_noise_words};
    use crate::text::tokenizer::{tokenize, words};
    use std::collections::HashSet;

    // ============================================================
    // NORMALIZER TESTS
    // ============================================================

    #[test]
    fn test_normalize_lowercases() {
        assert_eq!(normalize("Rust"), "rust");
        assert_eq!(normalize("HELLO"), "hello");
    }

    #[test]
    fn test_normalize_strips_possessive() {
        assert_eq!(normalize("cat's"), "cat");
        assert_eq!(normalize("James's"), "james");
        assert_eq!(normalize("Dog'S"), "dog", "stemming runs after lower-casing");
    }

    #[test]
    fn test_normalize_keeps_inner_apostrophe_letters() {
        // Only a trailing 's is stemmed; other apostrophes are just stripped.
        assert_eq!(normalize("don't"), "dont");
        assert_eq!(normalize("o'clock"), "oclock");
    }

    #[test]
    fn test_normalize_strips_non_alphabetic() {
        assert_eq!(normalize("hello,"), "hello");
        assert_eq!(normalize("[world]!"), "world");
        assert_eq!(normalize("abc123def"), "abcdef");
    }

    #[test]
    fn test_normalize_can_yield_empty() {
        assert_eq!(normalize("1234"), "");
        assert_eq!(normalize("!!!"), "");
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_normalize_is_pure() {
        // Same input, same output, no hidden state between calls.
        let a = normalize("The's");
        let b = normalize("The's");
        assert_eq!(a, b);
        assert_eq!(a, "the");
    }

    #[test]
    fn test_is_noise_exact_match_only() {
        let noise: HashSet<String> = ["the".to_string(), "of".to_string()].into();

        assert!(is_noise("the", &noise));
        assert!(!is_noise("them", &noise), "noise matching is exact, not prefix");
        assert!(!is_noise("thesis", &noise));
    }

    #[test]
    fn test_normalize_noise_words_normalizes_lines() {
        let listed = normalize_noise_words("The\nOF'S\n\n123\nand");

        assert_eq!(listed, vec!["the", "of", "and"]);
    }

    // ============================================================
    // TOKENIZER TESTS
    // ============================================================

    #[test]
    fn test_tokenize_splits_on_whitespace() {
        let tokens = tokenize("the cat sat");

        assert_eq!(tokens, vec![("the", 0), ("cat", 4), ("sat", 8)]);
    }

    #[test]
    fn test_tokenize_maximal_runs() {
        // Punctuation stays attached to the token; normalization strips it later.
        let tokens = tokenize("hello, world!");

        assert_eq!(tokens, vec![("hello,", 0), ("world!", 7)]);
    }

    #[test]
    fn test_tokenize_offsets_across_newlines() {
        let tokens = tokenize("one\ntwo\n  three");

        assert_eq!(tokens, vec![("one", 0), ("two", 4), ("three", 10)]);
    }

    #[test]
    fn test_tokenize_empty_and_blank() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("  \n\t ").is_empty());
    }

    #[test]
    fn test_tokenize_is_restartable() {
        let text = "alpha beta";
        let first = tokenize(text);
        let second = tokenize(text);

        assert_eq!(first, second, "repeat calls must see the same stream");
    }

    // ============================================================
    // WORDS TESTS
    // ============================================================

    #[test]
    fn test_words_filters_noise_and_empties() {
        let noise: HashSet<String> = ["the".to_string()].into();
        let listed = words("The cat's 123 hat, the end", &noise);

        assert_eq!(listed, vec!["cat", "hat", "end"]);
    }

    #[test]
    fn test_words_preserves_occurrence_order_and_duplicates() {
        let noise = HashSet::new();
        let listed = words("b a b", &noise);

        assert_eq!(listed, vec!["b", "a", "b"]);
    }
}
