//! Query Module Tests
//!
//! Validates scoring, ranking, and line-excerpt extraction.
//!
//! ## Test Scopes
//! - **Engine**: surviving-term filtering, score summation, result ordering.
//! - **LineIndex**: line-start table construction and binary-searched lookup.
//! - **Excerpts**: deduplication and ascending emission of context lines.

#[cfg(test)]
mod tests {
    use crate::index::types::{InvertedIndex, WordEntry};
    use crate::query::engine::score_documents;
    use crate::query::excerpt::{LineIndex, extract_lines};
    use crate::query::types::SearchResult;
    use std::collections::HashSet;

    /// Build an inverted index from (word, doc, count, first_offset) rows.
    fn index(rows: &[(&str, &str, usize, usize)]) -> InvertedIndex {
        let mut index = InvertedIndex::new();
        for &(word, doc, count, first_offset) in rows {
            index.entry(word.to_string()).or_default().insert(
                doc.to_string(),
                WordEntry {
                    count,
                    first_offset,
                },
            );
        }
        index
    }

    fn terms(list: &[&str]) -> Vec<String> {
        list.iter().map(|t| t.to_string()).collect()
    }

    // ============================================================
    // ENGINE TESTS - surviving terms
    // ============================================================

    #[test]
    fn test_empty_terms_yield_no_matches() {
        let idx = index(&[("cat", "a", 1, 0)]);

        assert!(score_documents(&idx, &HashSet::new(), &[]).is_empty());
    }

    #[test]
    fn test_unknown_and_noise_terms_are_dropped() {
        let idx = index(&[("cat", "a", 1, 0)]);
        let noise: HashSet<String> = ["the".to_string()].into();

        let matches = score_documents(&idx, &noise, &terms(&["the", "unicorn", "!!!"]));
        assert!(matches.is_empty(), "no surviving terms means no results");

        let matches = score_documents(&idx, &noise, &terms(&["the", "cat"]));
        assert_eq!(matches.len(), 1, "surviving terms still match");
    }

    #[test]
    fn test_terms_are_normalized() {
        let idx = index(&[("cat", "a", 2, 5)]);

        let matches = score_documents(&idx, &HashSet::new(), &terms(&["Cat's!"]));

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].score, 2);
    }

    #[test]
    fn test_duplicate_terms_count_once() {
        let idx = index(&[("cat", "a", 3, 0)]);

        let matches = score_documents(&idx, &HashSet::new(), &terms(&["cat", "cat", "CAT"]));

        assert_eq!(matches[0].score, 3, "each occurrence is counted once");
        assert_eq!(matches[0].offsets, vec![0]);
    }

    // ============================================================
    // ENGINE TESTS - scoring and ordering
    // ============================================================

    #[test]
    fn test_score_is_sum_of_counts() {
        let idx = index(&[
            ("cat", "a", 2, 0),
            ("dog", "a", 3, 10),
            ("cat", "b", 1, 4),
        ]);

        let matches = score_documents(&idx, &HashSet::new(), &terms(&["cat", "dog"]));

        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0].name, "a");
        assert_eq!(matches[0].score, 5, "2 cats + 3 dogs");
        assert_eq!(matches[0].offsets, vec![0, 10], "offsets sorted ascending");
        assert_eq!(matches[1].name, "b");
        assert_eq!(matches[1].score, 1, "terms absent from a doc contribute 0");
    }

    #[test]
    fn test_ordering_desc_score_then_asc_name() {
        let idx = index(&[
            ("cat", "b", 1, 0),
            ("cat", "a", 1, 0),
            ("cat", "c", 7, 0),
        ]);

        let matches = score_documents(&idx, &HashSet::new(), &terms(&["cat"]));
        let names: Vec<&str> = matches.iter().map(|m| m.name.as_str()).collect();

        assert_eq!(names, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_ordering_stable_under_term_permutation() {
        let idx = index(&[
            ("cat", "a", 1, 0),
            ("dog", "b", 1, 0),
            ("cat", "b", 1, 8),
        ]);

        let forward = score_documents(&idx, &HashSet::new(), &terms(&["cat", "dog"]));
        let backward = score_documents(&idx, &HashSet::new(), &terms(&["dog", "cat"]));

        assert_eq!(forward, backward);
    }

    // ============================================================
    // LINE INDEX TESTS
    // ============================================================

    #[test]
    fn test_line_start_lookup() {
        let content = "the cat sat\non the mat\n";
        let index = LineIndex::new(content);

        assert_eq!(index.line_start(0), 0);
        assert_eq!(index.line_start(4), 0, "mid-line offset maps to line start");
        assert_eq!(index.line_start(11), 0, "the newline belongs to its line");
        assert_eq!(index.line_start(12), 12, "first char after a newline");
        assert_eq!(index.line_start(15), 12);
    }

    #[test]
    fn test_line_start_without_trailing_newline() {
        let index = LineIndex::new("only line");

        assert_eq!(index.line_start(0), 0);
        assert_eq!(index.line_start(8), 0);
    }

    // ============================================================
    // EXCERPT TESTS
    // ============================================================

    #[test]
    fn test_extract_lines_basic() {
        let content = "the cat sat\non the mat\n";

        assert_eq!(extract_lines(content, &[4]), vec!["the cat sat"]);
        assert_eq!(extract_lines(content, &[15]), vec!["on the mat"]);
    }

    #[test]
    fn test_extract_lines_dedupes_shared_line() {
        let content = "cat and dog here\nnothing else\n";

        // Both offsets sit on the first line; it appears once.
        let lines = extract_lines(content, &[0, 8]);
        assert_eq!(lines, vec!["cat and dog here"]);
    }

    #[test]
    fn test_extract_lines_ascending_document_order() {
        let content = "alpha\nbeta\ngamma\n";

        let lines = extract_lines(content, &[0, 6, 11]);
        assert_eq!(lines, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn test_extract_lines_last_line_without_newline() {
        let content = "first\nlast words";

        let lines = extract_lines(content, &[6]);
        assert_eq!(lines, vec!["last words"]);
    }

    #[test]
    fn test_extract_lines_no_offsets() {
        assert!(extract_lines("anything\n", &[]).is_empty());
    }

    // ============================================================
    // RESULT DISPLAY TESTS
    // ============================================================

    #[test]
    fn test_result_display_matches_report_form() {
        let result = SearchResult {
            name: "a".to_string(),
            score: 2,
            lines: vec!["the cat sat".to_string(), "on the mat".to_string()],
        };

        assert_eq!(result.to_string(), "a: 2\nthe cat sat\non the mat\n");
    }

    #[test]
    fn test_result_serializes_to_json() {
        let result = SearchResult {
            name: "a".to_string(),
            score: 1,
            lines: vec!["line".to_string()],
        };

        let json = serde_json::to_string(&result).unwrap();
        let restored: SearchResult = serde_json::from_str(&json).unwrap();

        assert_eq!(restored, result);
    }
}
