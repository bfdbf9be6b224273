//! Index Data Types
//!
//! The persistent shapes of the inverted index. These structures are
//! what the storage collaborator serializes, so they all derive serde
//! traits, mirroring the rest of the stored value types.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Statistics for one normalized word within one document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    /// Total occurrences of the word in the document. Always >= 1; a
    /// document with zero occurrences has no entry at all.
    pub count: usize,
    /// Byte offset of the first occurrence within the document content.
    /// Later occurrences only increment `count`.
    pub first_offset: usize,
}

/// Document name -> statistics, for a single word.
pub type Postings = HashMap<String, WordEntry>;

/// Normalized word -> postings. A word is present iff at least one
/// document contains a non-noise occurrence of it.
pub type InvertedIndex = HashMap<String, Postings>;
