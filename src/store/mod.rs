//! Record store module
//!
//! This module handles the namespaced JSON document store and the
//! per-collection repositories built on top of it.

pub mod repositories;

use std::fs;
use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::StorageConfig;
use crate::constants::{STORAGE_NAMESPACE, collections};
use crate::error::AppResult;

/// Collections seeded with a default document on first open
const SEEDED_COLLECTIONS: &[&str] = &[
    collections::USERS,
    collections::REPORTS,
    collections::STATISTICS,
];

/// Namespaced key-value store holding one JSON document per collection
///
/// Every mutation is a whole-document read-modify-write. There is no
/// indexing, no schema versioning and no concurrency control; the store is
/// only ever accessed from a single execution context.
#[derive(Debug, Clone)]
pub struct RecordStore {
    root: PathBuf,
    pretty: bool,
}

impl RecordStore {
    /// Open the store, migrating legacy keys and seeding missing defaults
    pub fn open(config: &StorageConfig) -> AppResult<Self> {
        fs::create_dir_all(&config.data_dir)?;

        let store = Self {
            root: config.data_dir.clone(),
            pretty: config.pretty,
        };

        store.migrate_legacy_keys();
        store.seed_defaults()?;

        tracing::info!(data_dir = %store.root.display(), "Record store opened");

        Ok(store)
    }

    /// Read a collection document, falling back to the default value
    ///
    /// A missing or unreadable document is never an error: the original
    /// portal recovers from corrupt storage by starting the collection over,
    /// and callers here get the same behavior with a logged warning.
    pub fn read<T: DeserializeOwned + Default>(&self, collection: &str) -> T {
        let path = self.document_path(collection);

        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return T::default(),
            Err(err) => {
                tracing::warn!(collection, error = %err, "Failed to read collection, using default");
                return T::default();
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                tracing::warn!(collection, error = %err, "Failed to decode collection, using default");
                T::default()
            }
        }
    }

    /// Write a whole collection document
    ///
    /// The document is written to a sibling temp file and renamed into
    /// place, so a failed write leaves the previous contents intact.
    pub fn write<T: Serialize>(&self, collection: &str, document: &T) -> AppResult<()> {
        let payload = if self.pretty {
            serde_json::to_string_pretty(document)?
        } else {
            serde_json::to_string(document)?
        };

        let path = self.document_path(collection);
        let tmp = path.with_extension("json.tmp");

        fs::write(&tmp, payload)?;
        fs::rename(&tmp, &path)?;

        Ok(())
    }

    /// Remove a collection document entirely
    pub fn erase(&self, collection: &str) -> AppResult<()> {
        match fs::remove_file(self.document_path(collection)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    /// Check whether a collection document exists on disk
    pub fn exists(&self, collection: &str) -> bool {
        self.document_path(collection).exists()
    }

    fn document_path(&self, collection: &str) -> PathBuf {
        let name = if collection.ends_with(".json") {
            collection.to_string()
        } else {
            format!("{collection}.json")
        };
        self.root.join(format!("{STORAGE_NAMESPACE}{name}"))
    }

    /// One-time best-effort rename of pre-namespace-era documents
    /// (`crmp_users` -> `crmp_users.json`)
    fn migrate_legacy_keys(&self) {
        for &collection in SEEDED_COLLECTIONS {
            let stem = collection.trim_end_matches(".json");
            let legacy = self.root.join(format!("{STORAGE_NAMESPACE}{stem}"));
            let current = self.document_path(collection);

            if legacy.is_file() && !current.exists() {
                match fs::rename(&legacy, &current) {
                    Ok(()) => tracing::info!(collection, "Migrated legacy storage key"),
                    Err(err) => {
                        tracing::warn!(collection, error = %err, "Legacy key migration failed")
                    }
                }
            }
        }
    }

    fn seed_defaults(&self) -> AppResult<()> {
        use crate::models::Statistics;

        if !self.exists(collections::USERS) {
            self.write(collections::USERS, &Vec::<serde_json::Value>::new())?;
        }
        if !self.exists(collections::REPORTS) {
            self.write(collections::REPORTS, &Vec::<serde_json::Value>::new())?;
        }
        if !self.exists(collections::STATISTICS) {
            self.write(collections::STATISTICS, &Statistics::default())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Statistics, User};

    fn open_store() -> (tempfile::TempDir, RecordStore) {
        let dir = tempfile::tempdir().unwrap();
        let config = StorageConfig {
            data_dir: dir.path().to_path_buf(),
            pretty: false,
        };
        let store = RecordStore::open(&config).unwrap();
        (dir, store)
    }

    #[test]
    fn test_open_seeds_default_documents() {
        let (_dir, store) = open_store();

        assert!(store.exists(collections::USERS));
        assert!(store.exists(collections::REPORTS));
        assert!(store.exists(collections::STATISTICS));

        let users: Vec<User> = store.read(collections::USERS);
        assert!(users.is_empty());

        let stats: Statistics = store.read(collections::STATISTICS);
        assert_eq!(stats.total_users, 0);
    }

    #[test]
    fn test_read_missing_collection_returns_default() {
        let (_dir, store) = open_store();
        let messages: Vec<crate::models::Message> = store.read(collections::MESSAGES);
        assert!(messages.is_empty());
    }

    #[test]
    fn test_write_then_read_roundtrip() {
        let (_dir, store) = open_store();

        store
            .write(collections::NEWS, &vec!["hello".to_string()])
            .unwrap();
        let news: Vec<String> = store.read(collections::NEWS);
        assert_eq!(news, vec!["hello".to_string()]);
    }

    #[test]
    fn test_corrupt_document_falls_back_to_default() {
        let (dir, store) = open_store();

        fs::write(dir.path().join("crmp_users.json"), "{not json").unwrap();
        let users: Vec<User> = store.read(collections::USERS);
        assert!(users.is_empty());
    }

    #[test]
    fn test_legacy_key_migration() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("crmp_users"), "[]").unwrap();

        let config = StorageConfig {
            data_dir: dir.path().to_path_buf(),
            pretty: false,
        };
        let store = RecordStore::open(&config).unwrap();

        assert!(!dir.path().join("crmp_users").exists());
        assert!(store.exists(collections::USERS));
    }

    #[test]
    fn test_erase_is_idempotent() {
        let (_dir, store) = open_store();

        store.write(collections::CURRENT_USER, &"x".to_string()).unwrap();
        store.erase(collections::CURRENT_USER).unwrap();
        store.erase(collections::CURRENT_USER).unwrap();
        assert!(!store.exists(collections::CURRENT_USER));
    }

    #[test]
    fn test_suffix_normalization() {
        let (_dir, store) = open_store();

        store.write("scratch", &vec![1, 2, 3]).unwrap();
        let back: Vec<i32> = store.read("scratch.json");
        assert_eq!(back, vec![1, 2, 3]);
    }
}
