use std::{cell::RefCell, collections::BTreeMap};

use crate::{KeyValueStore, StorageError};

/// In-memory key-value store for tests and non-browser environments.
///
/// A read-only store rejects every write, like a browser storage whose quota
/// is exceeded.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RefCell<BTreeMap<String, String>>,
    read_only: bool,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn read_only() -> Self {
        Self {
            items: RefCell::default(),
            read_only: true,
        }
    }

    #[must_use]
    pub fn with_item(self, key: &str, value: &str) -> Self {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::Unavailable("quota exceeded".to_string()));
        }
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        if self.read_only {
            return Err(StorageError::Unavailable("quota exceeded".to_string()));
        }
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}
