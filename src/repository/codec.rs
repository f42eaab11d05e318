//! Collection codecs
//!
//! Mapping collections are stored as a JSON array of `[key, value]` pairs,
//! sets as a plain JSON array, single values as their JSON form.

use std::collections::BTreeMap;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use super::keys::StorageKey;
use super::traits::KeyValueStorage;

pub fn encode_entries<V: Serialize>(map: &BTreeMap<String, V>) -> serde_json::Result<String> {
    let entries: Vec<(&String, &V)> = map.iter().collect();
    serde_json::to_string(&entries)
}

/// Decode `[[key, value], ...]`. A record that does not decode is logged and
/// skipped; only a malformed outer array is an error.
pub fn decode_entries<V: DeserializeOwned>(raw: &str) -> serde_json::Result<BTreeMap<String, V>> {
    let entries: Vec<(String, Value)> = serde_json::from_str(raw)?;
    let mut map = BTreeMap::new();
    for (key, value) in entries {
        match serde_json::from_value(value) {
            Ok(value) => {
                map.insert(key, value);
            }
            Err(e) => log::warn!("Skipping unreadable record {key}: {e}"),
        }
    }
    Ok(map)
}

pub fn encode_value<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string(value)
}

pub fn decode_value<T: DeserializeOwned>(raw: &str) -> serde_json::Result<T> {
    serde_json::from_str(raw)
}

/// Read and decode the value under `key`.
///
/// Returns `None` when the key is absent. Read and decode failures are
/// logged and also give `None`, so the caller starts from an empty collection.
pub fn read<T>(
    storage: &dyn KeyValueStorage,
    key: StorageKey,
    decode: impl FnOnce(&str) -> serde_json::Result<T>,
) -> Option<T> {
    match storage.get(key.as_str()) {
        Ok(Some(raw)) => match decode(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                log::error!("Error loading {key}: {e}; starting empty");
                None
            }
        },
        Ok(None) => None,
        Err(e) => {
            log::error!("Error reading {key} from storage: {e}; starting empty");
            None
        }
    }
}

/// Write a serialized snapshot. Failures are logged, never returned.
pub fn write_snapshot(storage: &dyn KeyValueStorage, key: StorageKey, json: &str) {
    match storage.set(key.as_str(), json) {
        Ok(()) => log::debug!("Persisted {key} ({} bytes)", json.len()),
        Err(e) => log::error!("Failed to persist {key}: {e}; keeping in-memory state only"),
    }
}
