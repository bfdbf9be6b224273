use super::types::WordEntry;
use crate::text::normalizer::normalize;
use crate::text::tokenizer::tokenize;
use std::collections::{HashMap, HashSet};

/// Build the word statistics for one document's content in a single
/// pass: tokenize, normalize, skip empty and noise words, count
/// occurrences. The offset of the first occurrence wins; later
/// occurrences only increment the count. Empty content yields an empty
/// tally.
pub fn tally_document(content: &str, noise: &HashSet<String>) -> HashMap<String, WordEntry> {
    let mut tally: HashMap<String, WordEntry> = HashMap::new();

    for (token, offset) in tokenize(content) {
        let word = normalize(token);
        if word.is_empty() || noise.contains(&word) {
            continue;
        }
        tally
            .entry(word)
            .and_modify(|entry| entry.count += 1)
            .or_insert(WordEntry {
                count: 1,
                first_offset: offset,
            });
    }

    tally
}
