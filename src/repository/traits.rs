//! Repository Layer - Core Traits
//!
//! Defines the abstract interface for durable storage.
//! Implementations can use SQLite, in-memory maps, browser storage, etc.

/// Common result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("sqlite error: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("storage lock poisoned")]
    Poisoned,
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Synchronous string storage under fixed keys.
///
/// No transactional guarantees across keys: every `set` replaces one value.
pub trait KeyValueStorage: Send + Sync {
    /// Read the value stored under `key`
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Replace the value stored under `key`
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Remove `key` if present
    fn remove(&self, key: &str) -> StorageResult<()>;
}
