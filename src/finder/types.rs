use crate::storage::types::StoreError;
use thiserror::Error;

/// Errors surfaced by the finder's public operations.
#[derive(Debug, Error)]
pub enum FinderError {
    /// The named document is absent from the content store. Propagated
    /// to the caller, never retried.
    #[error("doc {name} not found")]
    NotFound { name: String },

    /// A storage failure during an index merge or content lookup.
    #[error(transparent)]
    Store(#[from] StoreError),
}
