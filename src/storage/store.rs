use super::types::StoreError;
use crate::index::types::{InvertedIndex, Postings};
use std::collections::HashSet;

/// The storage collaborator of the document finder.
///
/// Implementations persist three things: raw document content keyed by
/// name, the noise-word list, and the inverted-index postings. Mutating
/// calls carry an operation id; replaying an id must be a no-op
/// (at-most-once per logical write). A store that has never been written
/// must serve empty state.
#[allow(async_fn_in_trait)]
pub trait DocStore: Send + Sync {
    /// Persist the raw content of a document. Whether a second write to
    /// the same name upserts or reports `DuplicateKey` is the store's
    /// choice; the finder tolerates both.
    async fn put_content(&self, op_id: &str, name: &str, content: &str)
    -> Result<(), StoreError>;

    /// Fetch the raw content of a document, `None` when absent.
    async fn get_content(&self, name: &str) -> Result<Option<String>, StoreError>;

    /// Merge normalized words into the persisted noise-word list.
    async fn put_noise_words(&self, op_id: &str, words: &[String]) -> Result<(), StoreError>;

    /// The persisted noise-word list; empty on first use.
    async fn load_noise_words(&self) -> Result<HashSet<String>, StoreError>;

    /// Persist the full posting map for one word. An empty posting map
    /// removes the word from the stored index.
    async fn put_postings(
        &self,
        op_id: &str,
        word: &str,
        postings: &Postings,
    ) -> Result<(), StoreError>;

    /// The persisted inverted index; empty on first use.
    async fn load_index(&self) -> Result<InvertedIndex, StoreError>;

    /// Drop all persisted content, noise words and postings.
    async fn clear(&self, op_id: &str) -> Result<(), StoreError>;
}
