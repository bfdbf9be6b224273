//! Document Search Index Library
//!
//! This library crate defines the core modules of the search engine.
//! It serves as the foundation for the command-line binary (`main.rs`).
//!
//! ## Architecture Modules
//! The engine is composed of five loosely coupled subsystems:
//!
//! - **`text`**: Tokenization and normalization. Splits raw content into
//!   offset-tagged tokens and reduces them to canonical index keys
//!   (lower-cased, stemmed, alphabetic-only).
//! - **`index`**: The inverted index. Accumulates per-document word
//!   statistics (occurrence count, first offset) and derives the
//!   completion index used for prefix lookup.
//! - **`query`**: The retrieval logic. Scores and ranks matching
//!   documents and extracts the context lines covering the earliest
//!   term occurrences.
//! - **`storage`**: The content store abstraction. Persists raw document
//!   content, the noise-word list, and index postings behind the
//!   `DocStore` trait; ships an in-memory implementation.
//! - **`finder`**: The service facade. Owns the index state and the
//!   store, and exposes the public operations (add documents and noise
//!   words, search, complete, fetch content).

pub mod finder;
pub mod index;
pub mod query;
pub mod storage;
pub mod text;
