//! Key-Value Persistence
//!
//! The app keeps each collection as one JSON value under a fixed key.
//! [`KeyValueStore`] abstracts the backing store so browser local
//! storage can be swapped for [`MemoryStore`] in tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StorageError;

/// Raw string key-value store
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Load a JSON value, falling back to `T::default()` when the key is
/// absent or the stored text does not parse
pub fn load_or_default<T, S>(store: &S, key: &str) -> T
where
    T: DeserializeOwned + Default,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get(key) else {
        return T::default();
    };
    match serde_json::from_str(&raw) {
        Ok(value) => value,
        Err(e) => {
            log::warn!("[STORAGE] Ignoring unreadable value under {}: {}", key, e);
            T::default()
        }
    }
}

/// Load a JSON array record by record
///
/// Text that is not an array loads as empty. Elements that do not decode
/// as `T` are skipped, so one bad record does not hide the others.
pub fn load_records<T, S>(store: &S, key: &str) -> Vec<T>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    let Some(raw) = store.get(key) else {
        return Vec::new();
    };
    let records = match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
        Ok(records) => records,
        Err(e) => {
            log::warn!("[STORAGE] Ignoring unreadable list under {}: {}", key, e);
            return Vec::new();
        }
    };
    records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value(record) {
            Ok(item) => Some(item),
            Err(e) => {
                log::warn!("[STORAGE] Skipping record {} under {}: {}", index, key, e);
                None
            }
        })
        .collect()
}

/// Serialize and write a whole value under `key`
pub fn save<T, S>(store: &S, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let json = serde_json::to_string(value).map_err(|source| StorageError::Serialize {
        key: key.to_string(),
        source,
    })?;
    store.set(key, &json)
}

/// In-memory store; clones share the same entries
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove a key, as a user clearing site data would
    pub fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_loads_default() {
        let store = MemoryStore::new();
        let list: Vec<u32> = load_or_default(&store, "numbers");
        assert!(list.is_empty());
    }

    #[test]
    fn test_garbage_loads_default() {
        let store = MemoryStore::new();
        store.set("numbers", "{not json").unwrap();
        let list: Vec<u32> = load_or_default(&store, "numbers");
        assert!(list.is_empty());
    }

    #[test]
    fn test_save_then_load() {
        let store = MemoryStore::new();
        save(&store, "numbers", &vec![3, 1, 2]).unwrap();
        assert_eq!(store.get("numbers").as_deref(), Some("[3,1,2]"));

        let list: Vec<u32> = load_or_default(&store, "numbers");
        assert_eq!(list, vec![3, 1, 2]);
    }

    #[test]
    fn test_records_skip_only_bad_elements() {
        let store = MemoryStore::new();
        store.set("numbers", r#"[1, "two", 3, null, 4]"#).unwrap();
        let list: Vec<u32> = load_records(&store, "numbers");
        assert_eq!(list, vec![1, 3, 4]);

        store.set("numbers", r#"{"not":"a list"}"#).unwrap();
        assert!(load_records::<u32, _>(&store, "numbers").is_empty());
        assert!(load_records::<u32, _>(&store, "missing").is_empty());
    }

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let other = store.clone();
        store.set("k", "v").unwrap();
        assert_eq!(other.get("k").as_deref(), Some("v"));
        other.remove("k");
        assert!(store.get("k").is_none());
    }
}
