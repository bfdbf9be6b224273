//! Query Module
//!
//! The retrieval half of the engine: turns search terms into ranked,
//! excerpted results against a consistent index snapshot.
//!
//! ## Pipeline
//! 1. **Survival**: each raw term is normalized; terms that normalize to
//!    nothing, are noise, or are absent from the index are silently
//!    dropped.
//! 2. **Scoring**: per candidate document, the score is the sum of the
//!    surviving terms' occurrence counts; the first offsets of the
//!    present terms become the excerpt anchors.
//! 3. **Ranking**: descending score, ties broken by ascending document
//!    name; a strict total order.
//! 4. **Excerpts**: the distinct lines containing the anchor offsets,
//!    located through a precomputed, binary-searched line-start table.

pub mod engine;
pub mod excerpt;
pub mod types;

#[cfg(test)]
mod tests;
