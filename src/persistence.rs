//! Snapshot Persistence
//!
//! Durable key/value storage for collection snapshots.
//! The browser backend uses `localStorage`; the memory backend serves tests and
//! hosts without a window.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use wasm_bindgen::JsValue;

use crate::collection::Collection;

/// Which collection a snapshot belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CollectionKind {
    Cart,
    Favorites,
}

impl CollectionKind {
    /// Fixed storage key for this collection
    pub fn key(&self) -> &'static str {
        match self {
            CollectionKind::Cart => "cart",
            CollectionKind::Favorites => "favorites",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,

    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("snapshot (de)serialization failed")]
    Serde(#[from] serde_json::Error),
}

impl From<JsValue> for StorageError {
    fn from(value: JsValue) -> Self {
        StorageError::Backend(format!("{:?}", value))
    }
}

/// Raw string key/value storage. Each `write` replaces the whole value.
pub trait SnapshotStorage: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Load a collection snapshot. A missing key yields an empty collection.
pub fn load_snapshot(
    storage: &dyn SnapshotStorage,
    kind: CollectionKind,
) -> Result<Collection, StorageError> {
    match storage.read(kind.key())? {
        Some(raw) => Ok(serde_json::from_str(&raw)?),
        None => Ok(Collection::new()),
    }
}

/// Serialize and write the full snapshot for `kind`
pub fn save_snapshot(
    storage: &dyn SnapshotStorage,
    kind: CollectionKind,
    collection: &Collection,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(collection)?;
    storage.write(kind.key(), &raw)
}

// ========================
// Browser localStorage
// ========================

/// `window.localStorage` backend.
///
/// Holds no handle; the storage object is looked up on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()?
            .ok_or(StorageError::Unavailable)
    }
}

impl SnapshotStorage for BrowserStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(Self::local_storage()?.get_item(key)?)
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Ok(Self::local_storage()?.set_item(key, value)?)
    }
}

// ========================
// In-memory
// ========================

/// HashMap-backed storage. Clone-friendly via Arc; clones share contents.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStorage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self
            .entries
            .read()
            .map_err(|_| StorageError::Backend("lock poisoned".into()))?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|_| StorageError::Backend("lock poisoned".into()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collection::tests::aircraft;
    use crate::models::Category;

    #[test]
    fn test_missing_key_is_empty() {
        let storage = MemoryStorage::new();
        let loaded = load_snapshot(&storage, CollectionKind::Favorites).unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_round_trip_preserves_order() {
        let storage = MemoryStorage::new();
        for n in [0u32, 1, 5] {
            let collection: Collection = (0..n)
                .rev()
                .map(|id| aircraft(id, "jet", id as f64 * 1.25, Category::Interceptor))
                .collect();
            save_snapshot(&storage, CollectionKind::Cart, &collection).unwrap();
            let loaded = load_snapshot(&storage, CollectionKind::Cart).unwrap();
            assert_eq!(loaded, collection);
        }
    }

    #[test]
    fn test_snapshot_is_json_array_under_fixed_key() {
        let storage = MemoryStorage::new();
        let collection: Collection =
            vec![aircraft(4, "MiG-31", 10.5, Category::Interceptor)].into();
        save_snapshot(&storage, CollectionKind::Favorites, &collection).unwrap();

        assert!(storage.read("cart").unwrap().is_none());
        let raw = storage.read("favorites").unwrap().expect("favorites key written");
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["id"], 4);
        assert_eq!(value[0]["price"], 10.5);
        assert_eq!(value[0]["category"], "Interceptor");
    }

    #[test]
    fn test_corrupt_snapshot_is_error() {
        let storage = MemoryStorage::new();
        storage.write("favorites", "{not json").unwrap();
        let err = load_snapshot(&storage, CollectionKind::Favorites).unwrap_err();
        assert!(matches!(err, StorageError::Serde(_)));
    }

    #[test]
    fn test_clone_shares_entries() {
        let storage = MemoryStorage::new();
        let clone = storage.clone();
        storage.write("cart", "[]").unwrap();
        assert_eq!(clone.read("cart").unwrap().as_deref(), Some("[]"));
    }
}
