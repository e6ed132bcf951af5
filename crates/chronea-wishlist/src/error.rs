use chronea_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WishlistError {
    /// Missing medium, malformed encoding or schema mismatch. `load` recovers
    /// from this locally; it never reaches callers of the public operations.
    #[error("persisted wishlist under '{key}' is unreadable: {reason}")]
    PersistedStateUnreadable { key: String, reason: String },

    #[error("failed to persist wishlist under '{key}'")]
    PersistenceWriteFailed {
        key: String,
        #[source]
        source: StorageError,
    },

    #[error("failed to encode wishlist: {0}")]
    Encode(#[from] serde_json::Error),
}
