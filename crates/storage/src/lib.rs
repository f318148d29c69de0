#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

use strum::AsRefStr;

pub mod document;
pub mod local_storage;
pub mod log;
pub mod memory;
pub mod preferences;
pub mod store;

pub use document::DocumentError;
pub use local_storage::LocalStorage;
pub use memory::MemoryStorage;
pub use preferences::{Preferences, read_preferences, write_preferences};
pub use store::{Export, ImportSource, Store};

/// Synchronous string key-value substrate, such as the browser's local storage.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
    #[error("Serialization failed: {0}")]
    Serialization(String),
}

#[derive(AsRefStr, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    #[strum(serialize = "tamrinsaz-user-data")]
    UserData,
    #[strum(serialize = "workout-active-tab")]
    ActiveTab,
    #[strum(serialize = "gymyar-filters")]
    Filters,
    #[strum(serialize = "log")]
    Log,
}
