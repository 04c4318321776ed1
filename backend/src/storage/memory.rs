use std::cell::RefCell;
use std::collections::BTreeMap;
use std::rc::Rc;

use super::traits::{KeyValueStore, StorageError};

/// In-memory key-value store.
///
/// Clones share the same entries, mirroring how every handle onto browser
/// local storage sees the same data. Used in tests and as the fallback when
/// the browser refuses access to local storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.borrow().contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.entries.borrow_mut().clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_entries() {
        let store = MemoryStore::new();
        let handle = store.clone();

        store.set("a", "1").unwrap();
        assert_eq!(handle.get("a").unwrap().as_deref(), Some("1"));

        handle.remove("a").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_clear_removes_everything() {
        let store = MemoryStore::new();
        store.set("a", "1").unwrap();
        store.set("b", "2").unwrap();
        assert_eq!(store.len(), 2);

        store.clear().unwrap();
        assert!(store.is_empty());
        assert_eq!(store.get("a").unwrap(), None);
    }
}
