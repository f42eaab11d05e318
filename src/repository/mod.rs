//! Repository Layer
//!
//! Durable key-value storage and the codecs that map collections to it.

pub mod codec;
mod db;
mod keys;
mod memory;
mod traits;

#[cfg(test)]
mod tests;

pub use db::SqliteStorage;
pub use keys::StorageKey;
pub use memory::MemoryStorage;
pub use traits::{KeyValueStorage, StorageError, StorageResult};
