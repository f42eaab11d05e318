//! Repository Integration Tests
//!
//! Tests for SqliteStorage (in-memory and on-disk) and the collection codecs.

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, BTreeSet};

    use crate::repository::codec::{self, decode_entries, decode_value, encode_entries, encode_value};
    use crate::repository::{KeyValueStorage, MemoryStorage, SqliteStorage, StorageKey};

    fn setup_test_db() -> SqliteStorage {
        SqliteStorage::open_in_memory().expect("Failed to init test DB")
    }

    #[test]
    fn test_get_missing_key() {
        let storage = setup_test_db();
        assert_eq!(storage.get("backedGrants").unwrap(), None);
    }

    #[test]
    fn test_set_and_replace() {
        let storage = setup_test_db();
        storage.set("backedCreatorVerified", "false").unwrap();
        storage.set("backedCreatorVerified", "true").unwrap();

        assert_eq!(storage.get("backedCreatorVerified").unwrap().as_deref(), Some("true"));
        assert_eq!(storage.get("backedGrants").unwrap(), None);
    }

    #[test]
    fn test_remove() {
        let storage = setup_test_db();
        storage.set("backedLikes", "[]").unwrap();
        storage.remove("backedLikes").unwrap();
        assert_eq!(storage.get("backedLikes").unwrap(), None);
    }

    #[test]
    fn test_on_disk_persistence_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("backed.db");
        {
            let storage = SqliteStorage::open(&path).unwrap();
            storage.set("backedSupportedPages", r#"["p1","p2"]"#).unwrap();
        }
        let storage = SqliteStorage::open(&path).unwrap();
        let raw = storage.get("backedSupportedPages").unwrap().unwrap();
        let set: BTreeSet<String> = decode_value(&raw).unwrap();
        assert!(set.contains("p1") && set.contains("p2"));
    }

    #[test]
    fn test_read_logs_and_skips_corrupt_value() {
        let storage = MemoryStorage::new();
        storage.set(StorageKey::Grants.as_str(), "{not json").unwrap();
        let grants: Option<BTreeMap<String, String>> =
            codec::read(&storage, StorageKey::Grants, decode_entries);
        assert!(grants.is_none());
    }

    #[test]
    fn test_write_snapshot_then_read_back() {
        let storage = setup_test_db();
        let mut flags = BTreeMap::new();
        flags.insert("token-1".to_string(), true);

        let json = encode_entries(&flags).unwrap();
        codec::write_snapshot(&storage, StorageKey::AiBudgetGenerated, &json);

        let loaded: BTreeMap<String, bool> =
            codec::read(&storage, StorageKey::AiBudgetGenerated, decode_entries).unwrap();
        assert_eq!(loaded, flags);
    }

    #[test]
    fn test_set_value_round_trip() {
        let storage = setup_test_db();
        let set: BTreeSet<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        codec::write_snapshot(&storage, StorageKey::SupportedPages, &encode_value(&set).unwrap());
        let loaded: BTreeSet<String> =
            codec::read(&storage, StorageKey::SupportedPages, decode_value).unwrap();
        assert_eq!(loaded, set);
    }

    #[test]
    fn test_storage_keys_are_stable() {
        let names: Vec<&str> = StorageKey::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "backedSupportPages",
                "backedSupportedPages",
                "backedCreatorVerified",
                "backedBudgetItems",
                "backedAIBudgetGenerated",
                "backedGrants",
                "backedWorldId",
                "backedComments",
                "backedLikes",
            ]
        );
    }
}
