//! Finder Service Module
//!
//! The facade callers drive: owns the index state and the content
//! store, and exposes the engine's public operations.
//!
//! ## Operations
//! - **`add_noise_words`**: grow the noise-word set (idempotent).
//! - **`add_document`**: index a document; re-adding a name replaces
//!   its content and statistics wholesale.
//! - **`find`**: ranked multi-term search with excerpted context lines.
//! - **`complete`**: prefix completion over all indexed words.
//! - **`doc_content`**: fetch a document's raw content.
//! - **`clear`**: drop the whole corpus.
//!
//! ## Consistency
//! The index state lives behind one `RwLock`: writers hold the write
//! lock for the whole merge, so an add becomes visible atomically and
//! same-name adds serialize (last writer wins); readers work against a
//! consistent snapshot.

pub mod service;
pub mod types;
