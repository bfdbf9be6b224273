//! Inverted Index Module
//!
//! Maintains the corpus-wide word statistics that search and completion
//! queries read.
//!
//! ## Core Concepts
//! - **WordEntry**: per (document, word) occurrence count and first offset.
//! - **Tally**: one `add_document` call's statistics, built in a single
//!   pass over the tokenized content.
//! - **IndexState**: the single owned index object (inverted index,
//!   noise-word set, and the lazily rebuilt completion cache). Writers
//!   replace a document's statistics wholesale; re-adding a name never
//!   duplicates entries.
//! - **CompletionIndex**: distinct indexed words grouped by leading
//!   character, sorted for prefix lookup.

pub mod builder;
pub mod completions;
pub mod state;
pub mod types;
