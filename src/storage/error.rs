/// Error types for document store operations

use thiserror::Error;

/// Document store errors
#[derive(Error, Debug)]
pub enum StorageError {
    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// RocksDB error
    #[error("RocksDB error: {0}")]
    RocksDbError(#[from] rocksdb::Error),

    /// Generic error
    #[error("Storage error: {0}")]
    Other(String),
}

/// Result type for document store operations
pub type StorageResult<T> = Result<T, StorageError>;

impl From<String> for StorageError {
    fn from(s: String) -> Self {
        StorageError::Other(s)
    }
}

impl From<&str> for StorageError {
    fn from(s: &str) -> Self {
        StorageError::Other(s.to_string())
    }
}
