//! In-process storage backend.

use super::{LocalStorage, StorageError};
use std::cell::RefCell;
use std::collections::BTreeMap;

/// Storage held in memory for the lifetime of the value.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<BTreeMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl LocalStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.items.borrow_mut().clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_remove() {
        let storage = MemoryStorage::new();
        assert!(storage.is_empty());

        storage.set_item("darkMode", "true").unwrap();
        storage.set_item("darkMode", "false").unwrap();
        assert_eq!(storage.get_item("darkMode").unwrap().as_deref(), Some("false"));
        assert_eq!(storage.len(), 1);

        storage.remove_item("darkMode").unwrap();
        storage.remove_item("darkMode").unwrap();
        assert_eq!(storage.get_item("darkMode").unwrap(), None);
    }

    #[test]
    fn test_clear_removes_everything() {
        let storage = MemoryStorage::new();
        storage.set_item("a", "1").unwrap();
        storage.set_item("b", "2").unwrap();
        storage.clear().unwrap();
        assert!(storage.is_empty());
    }
}
