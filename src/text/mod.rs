//! Text Processing Module
//!
//! Turns raw document content into the normalized word stream the index
//! is built from.
//!
//! ## Pipeline
//! 1. **Tokenization**: content is split into maximal runs of
//!    non-whitespace characters, each tagged with its byte offset.
//! 2. **Normalization**: each token is lower-cased, stemmed (trailing
//!    possessive `'s` removed) and stripped of every character outside
//!    `a-z`. Tokens that normalize to the empty string are not indexable.
//! 3. **Noise filtering**: normalized words found in the noise-word set
//!    are excluded from indexing and from search-term matching.

pub mod normalizer;
pub mod tokenizer;

#[cfg(test)]
mod tests;
