use thiserror::Error;

/// Failures reported by a `DocStore` implementation.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// A uniqueness conflict on a keyed write. For content re-adds the
    /// finder treats this as non-fatal: the conflict is logged and
    /// swallowed, never surfaced as an index error.
    #[error("duplicate key: {0}")]
    DuplicateKey(String),

    /// The backing store could not serve the request. Always propagated:
    /// a silently lost index write would corrupt search results.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}
