use super::types::FinderError;
use crate::index::builder::tally_document;
use crate::index::completions::completion_prefix;
use crate::index::state::IndexState;
use crate::query::engine::score_documents;
use crate::query::excerpt::extract_lines;
use crate::query::types::SearchResult;
use crate::storage::store::DocStore;
use crate::storage::types::StoreError;
use crate::text::normalizer::normalize_noise_words;
use crate::text::tokenizer;
use tokio::sync::RwLock;
use uuid::Uuid;

/// The document finder service.
///
/// Owns the index state and a content store. All mutation goes through
/// the write lock, so readers never observe a partially merged
/// document.
pub struct DocFinder<S: DocStore> {
    store: S,
    state: RwLock<IndexState>,
}

impl<S: DocStore> DocFinder<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            state: RwLock::new(IndexState::new()),
        }
    }

    /// Load persisted noise words and index postings from the store.
    /// Call once after construction; a store that was never written
    /// yields empty state.
    pub async fn init(&self) -> Result<(), FinderError> {
        let noise = self.store.load_noise_words().await?;
        let inverted = self.store.load_index().await?;
        tracing::info!(
            "Loaded {} noise words and {} indexed words",
            noise.len(),
            inverted.len()
        );

        let mut state = self.state.write().await;
        state.load(inverted, noise);
        Ok(())
    }

    /// Add every line of `noise_text` as a normalized noise word.
    /// Idempotent: re-adding the same words has no further effect.
    /// Already indexed occurrences are not purged.
    pub async fn add_noise_words(&self, noise_text: &str) -> Result<(), FinderError> {
        let listed = normalize_noise_words(noise_text);
        let op_id = Uuid::new_v4().to_string();
        self.store.put_noise_words(&op_id, &listed).await?;

        let mut state = self.state.write().await;
        state.add_noise_words(listed);
        Ok(())
    }

    /// Add (or replace) the document `name` with `content` and index
    /// its non-noise normalized words. Re-adding a name replaces its
    /// statistics wholesale; nothing is duplicated. Storage failures
    /// while merging propagate. The one exception is a duplicate-key
    /// conflict on the content write, which is logged and swallowed.
    pub async fn add_document(&self, name: &str, content: &str) -> Result<(), FinderError> {
        let op_id = Uuid::new_v4().to_string();
        match self.store.put_content(&op_id, name, content).await {
            Ok(()) => {}
            Err(StoreError::DuplicateKey(key)) => {
                tracing::debug!("Ignoring duplicate content write for {}", key);
            }
            Err(err) => return Err(err.into()),
        }

        let mut state = self.state.write().await;
        let tally = tally_document(content, state.noise());
        tracing::debug!("Indexing {}: {} distinct words", name, tally.len());

        let affected = state.replace_document(name, tally);
        for word in &affected {
            let postings = state.inverted().get(word).cloned().unwrap_or_default();
            let op_id = Uuid::new_v4().to_string();
            self.store.put_postings(&op_id, word, &postings).await?;
        }
        Ok(())
    }

    /// Search the corpus for `terms` and return the matching documents,
    /// ranked by descending score then ascending name, each with the
    /// distinct lines containing the earliest term occurrences. Terms
    /// that normalize to nothing, are noise, or are unindexed are
    /// silently dropped; an empty or fully dropped term list yields an
    /// empty result.
    pub async fn find(&self, terms: &[String]) -> Result<Vec<SearchResult>, FinderError> {
        let state = self.state.read().await;
        let matches = score_documents(state.inverted(), state.noise(), terms);

        let mut results = Vec::with_capacity(matches.len());
        for matched in matches {
            let content = self
                .store
                .get_content(&matched.name)
                .await?
                .ok_or_else(|| FinderError::NotFound {
                    name: matched.name.clone(),
                })?;
            let lines = extract_lines(&content, &matched.offsets);
            results.push(SearchResult {
                name: matched.name,
                score: matched.score,
                lines,
            });
        }
        Ok(results)
    }

    /// Complete the last word of `text` against all indexed words.
    /// Returns the sorted distinct words starting with the normalized
    /// prefix, or nothing when the final character of `text` is not an
    /// ASCII letter. Never fails.
    pub async fn complete(&self, text: &str) -> Vec<String> {
        let Some(prefix) = completion_prefix(text) else {
            return Vec::new();
        };

        {
            let state = self.state.read().await;
            if let Some(completions) = state.completions() {
                return completions.matches(&prefix);
            }
        }

        // Cold cache: rebuild under the write lock. rebuild_completions
        // re-checks, concurrent callers rebuild at most once.
        let mut state = self.state.write().await;
        tracing::debug!("Rebuilding completion index");
        state.rebuild_completions().matches(&prefix)
    }

    /// The raw content of document `name`.
    pub async fn doc_content(&self, name: &str) -> Result<String, FinderError> {
        self.store
            .get_content(name)
            .await?
            .ok_or_else(|| FinderError::NotFound {
                name: name.to_string(),
            })
    }

    /// The non-noise normalized words of `content`, in occurrence order.
    pub async fn words(&self, content: &str) -> Vec<String> {
        let state = self.state.read().await;
        tokenizer::words(content, state.noise())
    }

    /// Drop the whole corpus: every document, posting and noise word,
    /// both persisted and in memory.
    pub async fn clear(&self) -> Result<(), FinderError> {
        let op_id = Uuid::new_v4().to_string();
        self.store.clear(&op_id).await?;

        let mut state = self.state.write().await;
        state.clear();
        tracing::info!("Corpus cleared");
        Ok(())
    }
}
