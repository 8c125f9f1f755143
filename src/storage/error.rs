//! Error handling for the storage module

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    /// Nothing is stored under the requested key.
    #[error("No value stored under key '{0}'")]
    Missing(String),

    /// The stored text is not valid JSON for the requested type.
    #[error("Value under key '{key}' could not be parsed: {source}")]
    Parse {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// A value could not be serialized before being stored.
    #[error("Serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The backing file exists but is not a JSON object of strings.
    #[error("Storage file is corrupt: {0}")]
    CorruptStore(#[source] serde_json::Error),

    /// Reading or writing the backing file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StorageError {
    /// True when the error means "no value", as opposed to a broken value or backend.
    pub fn is_missing(&self) -> bool {
        matches!(self, StorageError::Missing(_))
    }
}
