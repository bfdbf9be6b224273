use super::store::DocStore;
use super::types::StoreError;
use crate::index::types::{InvertedIndex, Postings};
use dashmap::DashMap;
use std::collections::HashSet;
use std::time::{SystemTime, UNIX_EPOCH};

/// In-memory `DocStore` over concurrent maps.
///
/// Content writes are last-writer-wins upserts, so this implementation
/// never reports `DuplicateKey`. Operation ids are tracked so replayed
/// writes are dropped.
#[derive(Debug, Default)]
pub struct MemoryStore {
    contents: DashMap<String, String>,
    noise: DashMap<String, ()>,
    postings: DashMap<String, Postings>,
    processed_ops: DashMap<String, u64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn should_process(&self, op_id: &str) -> bool {
        if self.processed_ops.contains_key(op_id) {
            tracing::debug!("Dropping replayed op {}", op_id);
            return false;
        }
        if self.processed_ops.len() > 10_000 {
            self.processed_ops.clear();
        }
        self.processed_ops.insert(op_id.to_string(), now_ms());
        true
    }
}

impl DocStore for MemoryStore {
    async fn put_content(
        &self,
        op_id: &str,
        name: &str,
        content: &str,
    ) -> Result<(), StoreError> {
        if !self.should_process(op_id) {
            return Ok(());
        }
        self.contents.insert(name.to_string(), content.to_string());
        Ok(())
    }

    async fn get_content(&self, name: &str) -> Result<Option<String>, StoreError> {
        Ok(self.contents.get(name).map(|entry| entry.value().clone()))
    }

    async fn put_noise_words(&self, op_id: &str, words: &[String]) -> Result<(), StoreError> {
        if !self.should_process(op_id) {
            return Ok(());
        }
        for word in words {
            self.noise.insert(word.clone(), ());
        }
        Ok(())
    }

    async fn load_noise_words(&self) -> Result<HashSet<String>, StoreError> {
        Ok(self.noise.iter().map(|entry| entry.key().clone()).collect())
    }

    async fn put_postings(
        &self,
        op_id: &str,
        word: &str,
        postings: &Postings,
    ) -> Result<(), StoreError> {
        if !self.should_process(op_id) {
            return Ok(());
        }
        if postings.is_empty() {
            self.postings.remove(word);
        } else {
            self.postings.insert(word.to_string(), postings.clone());
        }
        Ok(())
    }

    async fn load_index(&self) -> Result<InvertedIndex, StoreError> {
        Ok(self
            .postings
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect())
    }

    async fn clear(&self, op_id: &str) -> Result<(), StoreError> {
        if !self.should_process(op_id) {
            return Ok(());
        }
        self.contents.clear();
        self.noise.clear();
        self.postings.clear();
        Ok(())
    }
}

fn now_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis() as u64
}
