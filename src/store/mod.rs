//! Application State Store
//!
//! Holds every collection in memory for the session and mirrors each one into
//! durable storage through a keyed debouncer. Constructed once and shared as
//! `Arc<AppStore>`.
//!
//! Operations are grouped by collection:
//! - pages: support pages, supported-by-me set, creator flag
//! - budget: budget items, grants, AI-budget flags
//! - social: comments and likes
//! - verification: the local proof-of-personhood record
//! - generation: content provider pass-throughs

mod budget;
mod debounce;
mod generation;
mod pages;
mod social;
mod toast;
mod verification;


use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::{broadcast, Mutex};

use crate::ai::ContentProvider;
use crate::config::BackedConfig;
use crate::domain::{BudgetItem, Comment, Entity, Grant, SupportPage, Toast, ToastKind, VerificationRecord};
use crate::repository::codec::{self, decode_entries, decode_value, encode_entries, encode_value};
use crate::repository::{KeyValueStorage, StorageKey};

pub use debounce::Debouncer;
pub use generation::GenerationTask;
pub use toast::ToastCenter;

/// Tunables for a store instance
#[derive(Debug, Clone)]
pub struct StoreOptions {
    /// Minimum spacing between two writes of the same collection
    pub persist_interval: Duration,
    pub toast_ttl: Duration,
    pub avatar_base_url: String,
    pub image_base_url: String,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self::from(&BackedConfig::default())
    }
}

impl From<&BackedConfig> for StoreOptions {
    fn from(config: &BackedConfig) -> Self {
        Self {
            persist_interval: config.persist_interval(),
            toast_ttl: config.toast_ttl(),
            avatar_base_url: config.avatar_base_url.clone(),
            image_base_url: config.image_base_url.clone(),
        }
    }
}

/// Every collection held by the store
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Collections {
    pub support_pages: BTreeMap<String, SupportPage>,
    pub supported_by_me: BTreeSet<String>,
    pub creator_verified: bool,
    pub budget_items: BTreeMap<String, BudgetItem>,
    pub ai_budget_generated: BTreeMap<String, bool>,
    pub grants: BTreeMap<String, Grant>,
    pub verification: Option<VerificationRecord>,
    /// Per page, in the order the comments were added
    pub comments: BTreeMap<String, Vec<Comment>>,
    /// Per page, the verifier hashes that liked it
    pub likes: BTreeMap<String, BTreeSet<String>>,
}

impl Collections {
    /// Load every collection; missing or unreadable keys start empty.
    pub fn load(storage: &dyn KeyValueStorage) -> Self {
        let collections = Self {
            support_pages: codec::read(storage, StorageKey::SupportPages, decode_entries).unwrap_or_default(),
            supported_by_me: codec::read(storage, StorageKey::SupportedPages, decode_value).unwrap_or_default(),
            creator_verified: codec::read(storage, StorageKey::CreatorVerified, decode_value).unwrap_or_default(),
            budget_items: codec::read(storage, StorageKey::BudgetItems, decode_entries).unwrap_or_default(),
            ai_budget_generated: codec::read(storage, StorageKey::AiBudgetGenerated, decode_entries)
                .unwrap_or_default(),
            grants: codec::read(storage, StorageKey::Grants, decode_entries).unwrap_or_default(),
            verification: codec::read(storage, StorageKey::WorldId, decode_value).unwrap_or_default(),
            comments: codec::read(storage, StorageKey::Comments, decode_entries).unwrap_or_default(),
            likes: codec::read(storage, StorageKey::Likes, decode_entries).unwrap_or_default(),
        };
        log::info!(
            "Loaded store: {} pages, {} budget items, {} grants, verified={}",
            collections.support_pages.len(),
            collections.budget_items.len(),
            collections.grants.len(),
            collections.verification.is_some()
        );
        collections
    }

    /// The full collection stored under `key`, serialized
    pub fn snapshot(&self, key: StorageKey) -> serde_json::Result<String> {
        match key {
            StorageKey::SupportPages => encode_entries(&self.support_pages),
            StorageKey::SupportedPages => encode_value(&self.supported_by_me),
            StorageKey::CreatorVerified => encode_value(&self.creator_verified),
            StorageKey::BudgetItems => encode_entries(&self.budget_items),
            StorageKey::AiBudgetGenerated => encode_entries(&self.ai_budget_generated),
            StorageKey::Grants => encode_entries(&self.grants),
            StorageKey::WorldId => encode_value(&self.verification),
            StorageKey::Comments => encode_entries(&self.comments),
            StorageKey::Likes => encode_entries(&self.likes),
        }
    }
}

pub(crate) fn insert_entity<T: Entity>(map: &mut BTreeMap<String, T>, entity: T) {
    map.insert(entity.id().to_string(), entity);
}

/// Dashboard figures
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSummary {
    pub support_pages: usize,
    pub total_support: f64,
    pub budget_items: usize,
    pub grants: usize,
}

pub struct AppStore {
    state: Mutex<Collections>,
    storage: Arc<dyn KeyValueStorage>,
    provider: Arc<dyn ContentProvider>,
    debouncer: Debouncer<StorageKey>,
    toasts: ToastCenter,
    options: StoreOptions,
}

impl AppStore {
    pub fn new(
        storage: Arc<dyn KeyValueStorage>,
        provider: Arc<dyn ContentProvider>,
        options: StoreOptions,
    ) -> Arc<Self> {
        let collections = Collections::load(storage.as_ref());
        Arc::new(Self {
            state: Mutex::new(collections),
            storage,
            provider,
            debouncer: Debouncer::new(options.persist_interval),
            toasts: ToastCenter::new(options.toast_ttl),
            options,
        })
    }

    pub fn options(&self) -> &StoreOptions {
        &self.options
    }

    /// Serialize the given collections now and schedule their writes
    fn persist(&self, state: &Collections, keys: &[StorageKey]) {
        for &key in keys {
            match state.snapshot(key) {
                Ok(json) => {
                    let storage = Arc::clone(&self.storage);
                    self.debouncer
                        .schedule(key, move || codec::write_snapshot(storage.as_ref(), key, &json));
                }
                Err(e) => log::error!("Failed to serialize {key}: {e}"),
            }
        }
    }

    /// Write all pending snapshots immediately
    pub fn flush(&self) {
        self.debouncer.flush_all();
    }

    /// A copy of every collection
    pub async fn snapshot(&self) -> Collections {
        self.state.lock().await.clone()
    }

    pub async fn summary(&self) -> StoreSummary {
        let state = self.state.lock().await;
        StoreSummary {
            support_pages: state.support_pages.len(),
            total_support: state.support_pages.values().map(|p| p.amount).sum(),
            budget_items: state.budget_items.len(),
            grants: state.grants.len(),
        }
    }

    // ========================
    // Notifications
    // ========================

    pub fn show_toast(&self, message: impl Into<String>, kind: ToastKind) -> Toast {
        self.toasts.show(message, kind)
    }

    pub fn current_toast(&self) -> Option<Toast> {
        self.toasts.current()
    }

    pub fn dismiss_toast(&self) {
        self.toasts.dismiss();
    }

    pub fn subscribe_toasts(&self) -> broadcast::Receiver<Toast> {
        self.toasts.subscribe()
    }
}
