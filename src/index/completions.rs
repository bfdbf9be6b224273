use crate::text::normalizer::normalize;
use std::collections::HashMap;

/// Distinct indexed words grouped by their leading character, each
/// bucket sorted lexicographically. Derived entirely from the inverted
/// index key set; rebuilding from the same keys is idempotent.
#[derive(Debug)]
pub struct CompletionIndex {
    by_initial: HashMap<char, Vec<String>>,
}

impl CompletionIndex {
    /// Build the completion buckets from an iterator over index keys.
    pub fn build<'a, I>(words: I) -> Self
    where
        I: IntoIterator<Item = &'a String>,
    {
        let mut by_initial: HashMap<char, Vec<String>> = HashMap::new();
        for word in words {
            if let Some(initial) = word.chars().next() {
                by_initial.entry(initial).or_default().push(word.clone());
            }
        }
        for bucket in by_initial.values_mut() {
            bucket.sort();
            bucket.dedup();
        }
        Self { by_initial }
    }

    /// All indexed words starting with `prefix`, sorted ascending.
    /// Starts-with matching only; words merely containing the prefix do
    /// not qualify.
    pub fn matches(&self, prefix: &str) -> Vec<String> {
        let Some(initial) = prefix.chars().next() else {
            return Vec::new();
        };
        match self.by_initial.get(&initial) {
            Some(bucket) => bucket
                .iter()
                .filter(|word| word.starts_with(prefix))
                .cloned()
                .collect(),
            None => Vec::new(),
        }
    }
}

/// Extract the completion prefix from free text: the last
/// whitespace-delimited token, normalized. Returns `None` when the final
/// character of `text` is not an ASCII letter; no normalization is
/// attempted in that case.
pub fn completion_prefix(text: &str) -> Option<String> {
    if !text.chars().last()?.is_ascii_alphabetic() {
        return None;
    }
    let token = text.split_whitespace().next_back()?;
    let prefix = normalize(token);
    if prefix.is_empty() { None } else { Some(prefix) }
}
