//! Backed client state store
//!
//! Layered architecture:
//! - domain: Core entities, drafts and business rules
//! - repository: Durable key-value storage and collection codecs
//! - ai: Content provider client, prompts and response parsing
//! - store: The application store shared as `Arc<AppStore>`
//! - config: Runtime configuration

use std::path::Path;
use std::sync::Arc;

pub mod ai;
pub mod config;
pub mod domain;
pub mod repository;
pub mod store;

use ai::GeminiProvider;
use repository::{KeyValueStorage, MemoryStorage, SqliteStorage};

pub use config::BackedConfig;
pub use store::{AppStore, Collections, GenerationTask, StoreOptions, StoreSummary};

/// Install the rolling file logger under `config.log_dir`
pub fn init_logging(config: &BackedConfig) -> Result<(), rolling_logger::LoggerError> {
    rolling_logger::init_logger(&config.log_dir, "Backed")
}

/// Open storage, the content provider and the store.
///
/// When the database cannot be opened the store runs on in-memory storage
/// for the session.
pub fn open(config: &BackedConfig) -> Arc<AppStore> {
    let storage = open_storage(Path::new(&config.db_path));
    let provider = Arc::new(GeminiProvider::new(config.ai_endpoint.clone(), config.ai_api_key.clone()));
    log::info!("Opening store with {config:?}");
    AppStore::new(storage, provider, StoreOptions::from(config))
}

fn open_storage(path: &Path) -> Arc<dyn KeyValueStorage> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if let Err(e) = std::fs::create_dir_all(parent) {
            log::error!("Failed to create {}: {e}", parent.display());
        }
    }
    match SqliteStorage::open(path) {
        Ok(storage) => Arc::new(storage),
        Err(e) => {
            log::error!("Failed to open database at {}: {e}. Using in-memory storage", path.display());
            Arc::new(MemoryStorage::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_open_creates_database() {
        let dir = tempfile::tempdir().unwrap();
        let config = BackedConfig {
            db_path: dir.path().join("nested").join("backed.db").to_string_lossy().into_owned(),
            ..BackedConfig::default()
        };

        let store = open(&config);
        assert!(dir.path().join("nested").join("backed.db").exists());
        assert!(store.support_pages().await.is_empty());
    }

    #[tokio::test]
    async fn test_open_falls_back_to_memory() {
        let dir = tempfile::tempdir().unwrap();
        // A directory is not a database file
        let config = BackedConfig {
            db_path: dir.path().to_string_lossy().into_owned(),
            ..BackedConfig::default()
        };

        let store = open(&config);
        store
            .create_support_page(domain::NewSupportPage::new("Title", "Description", 10.0, domain::Category::Art))
            .await;
        assert_eq!(store.support_pages().await.len(), 1);
    }
}
