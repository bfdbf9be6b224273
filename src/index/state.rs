use super::completions::CompletionIndex;
use super::types::{InvertedIndex, WordEntry};
use std::collections::{BTreeSet, HashMap, HashSet};

/// The single owned index object every operation works against.
///
/// Holds the inverted index, the noise-word set, a reverse map from
/// document name to the words it contributed (so replacing a document
/// does not require a full-vocabulary scan), and the completion cache.
/// The cache is dropped whenever the index key set may have changed and
/// rebuilt lazily on the next completion query.
#[derive(Debug, Default)]
pub struct IndexState {
    inverted: InvertedIndex,
    noise: HashSet<String>,
    doc_words: HashMap<String, HashSet<String>>,
    completions: Option<CompletionIndex>,
}

impl IndexState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adopt persisted state, typically at startup. The reverse map is
    /// derived from the postings; the completion cache starts cold.
    pub fn load(&mut self, inverted: InvertedIndex, noise: HashSet<String>) {
        let mut doc_words: HashMap<String, HashSet<String>> = HashMap::new();
        for (word, postings) in &inverted {
            for name in postings.keys() {
                doc_words
                    .entry(name.clone())
                    .or_default()
                    .insert(word.clone());
            }
        }
        self.inverted = inverted;
        self.noise = noise;
        self.doc_words = doc_words;
        self.completions = None;
    }

    pub fn inverted(&self) -> &InvertedIndex {
        &self.inverted
    }

    pub fn noise(&self) -> &HashSet<String> {
        &self.noise
    }

    /// Add normalized words to the noise set. Noise filtering applies at
    /// index-build time only: occurrences indexed before a word became
    /// noise stay in the index.
    pub fn add_noise_words<I>(&mut self, words: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.noise.extend(words);
    }

    /// Replace the statistics of `name` with a freshly built tally,
    /// discarding whatever the document contributed before. Words whose
    /// last posting disappears are removed from the index entirely.
    /// Returns every word whose postings changed, so the caller can
    /// persist them.
    pub fn replace_document(
        &mut self,
        name: &str,
        tally: HashMap<String, WordEntry>,
    ) -> BTreeSet<String> {
        let mut affected: BTreeSet<String> = tally.keys().cloned().collect();

        if let Some(old_words) = self.doc_words.remove(name) {
            for word in old_words {
                if let Some(postings) = self.inverted.get_mut(&word) {
                    postings.remove(name);
                    if postings.is_empty() {
                        self.inverted.remove(&word);
                    }
                }
                affected.insert(word);
            }
        }

        let mut new_words = HashSet::with_capacity(tally.len());
        for (word, entry) in tally {
            new_words.insert(word.clone());
            self.inverted
                .entry(word)
                .or_default()
                .insert(name.to_string(), entry);
        }
        if !new_words.is_empty() {
            self.doc_words.insert(name.to_string(), new_words);
        }

        self.completions = None;
        affected
    }

    /// The completion cache, if it is current. `None` means an index
    /// change invalidated it.
    pub fn completions(&self) -> Option<&CompletionIndex> {
        self.completions.as_ref()
    }

    /// Rebuild the completion cache from the current key set if needed
    /// and return it.
    pub fn rebuild_completions(&mut self) -> &CompletionIndex {
        let inverted = &self.inverted;
        self.completions
            .get_or_insert_with(|| CompletionIndex::build(inverted.keys()))
    }

    /// Drop every document, word and noise entry.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
