//! Persistence Errors

use thiserror::Error;

/// Failures writing to the key-value store
///
/// Reads never fail: a missing or unparsable value loads as the default.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage is not available")]
    Unavailable,
    #[error("failed to serialize {key}: {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to write {key}: {reason}")]
    Write { key: String, reason: String },
}
