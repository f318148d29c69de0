use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

use chrono::Utc;
use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use serde::{Deserialize, Serialize};

use crate::{Key, KeyValueStore, StorageError};

const MAX_ENTRIES: usize = 100;

static LOG: Mutex<Option<Arc<Mutex<dyn Repository + Send>>>> = Mutex::new(None);

pub trait Repository {
    /// Newest entry first.
    fn read_entries(&self) -> Result<VecDeque<Entry>, StorageError>;
    fn write_entry(&self, entry: Entry) -> Result<(), StorageError>;
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub time: String,
    #[serde(with = "LevelDef")]
    pub level: Level,
    pub message: String,
}

#[derive(Serialize, Deserialize)]
#[serde(remote = "Level")]
pub enum LevelDef {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Keeps the latest entries in a key-value store.
pub struct PersistentLog<S> {
    storage: S,
}

impl<S: KeyValueStore> PersistentLog<S> {
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self { storage }
    }
}

impl<S: KeyValueStore> Repository for PersistentLog<S> {
    fn read_entries(&self) -> Result<VecDeque<Entry>, StorageError> {
        match self.storage.get_item(Key::Log.as_ref())? {
            Some(text) => serde_json::from_str(&text)
                .map_err(|err| StorageError::Serialization(err.to_string())),
            None => Ok(VecDeque::new()),
        }
    }

    fn write_entry(&self, entry: Entry) -> Result<(), StorageError> {
        let mut entries = self.read_entries()?;
        entries.push_front(entry);
        entries.truncate(MAX_ENTRIES);
        let text = serde_json::to_string(&entries)
            .map_err(|err| StorageError::Serialization(err.to_string()))?;
        self.storage.set_item(Key::Log.as_ref(), &text)
    }
}

static LOGGER: Logger = Logger;

/// Forwards all records to the browser console and to the repository.
///
/// # Errors
///
/// Returns an error if the logger has already been initialized.
pub fn init(repository: Arc<Mutex<dyn Repository + Send>>) -> Result<(), SetLoggerError> {
    if let Ok(mut log) = LOG.lock() {
        *log = Some(repository);
    }
    log::set_logger(&LOGGER).map(|()| log::set_max_level(LevelFilter::Trace))
}

struct Logger;

impl log::Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Trace
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let message = record.args().to_string();
        match record.level() {
            Level::Error => gloo_console::error!(message.clone()),
            Level::Warn => gloo_console::warn!(message.clone()),
            Level::Info => gloo_console::info!(message.clone()),
            Level::Debug | Level::Trace => gloo_console::debug!(message.clone()),
        }

        let Ok(log) = LOG.lock() else {
            return;
        };
        if let Some(repository) = log.as_ref() {
            if let Ok(repository) = repository.lock() {
                let _ = repository.write_entry(Entry {
                    time: Utc::now().format("%b %d %H:%M:%S").to_string(),
                    level: record.level(),
                    message,
                });
            }
        }
    }

    fn flush(&self) {}
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::MemoryStorage;

    use super::*;

    fn entry(message: &str) -> Entry {
        Entry {
            time: "Jul 02 06:49:55".to_string(),
            level: Level::Warn,
            message: message.to_string(),
        }
    }

    #[test]
    fn test_persistent_log() {
        let log = PersistentLog::new(MemoryStorage::new());

        assert_eq!(log.read_entries(), Ok(VecDeque::new()));

        log.write_entry(entry("a")).unwrap();
        log.write_entry(entry("b")).unwrap();

        assert_eq!(
            log.read_entries(),
            Ok(VecDeque::from(vec![entry("b"), entry("a")]))
        );
    }

    #[test]
    fn test_persistent_log_truncation() {
        let log = PersistentLog::new(MemoryStorage::new());

        for i in 0..=MAX_ENTRIES {
            log.write_entry(entry(&i.to_string())).unwrap();
        }

        let entries = log.read_entries().unwrap();
        assert_eq!(entries.len(), MAX_ENTRIES);
        assert_eq!(entries.front(), Some(&entry(&MAX_ENTRIES.to_string())));
        assert_eq!(entries.back(), Some(&entry("1")));
    }

    #[test]
    fn test_persistent_log_format() {
        let storage = MemoryStorage::new();
        PersistentLog::new(&storage)
            .write_entry(entry("failed to parse user data"))
            .unwrap();

        assert_eq!(
            storage.get_item("log"),
            Ok(Some(
                r#"[{"time":"Jul 02 06:49:55","level":"Warn","message":"failed to parse user data"}]"#
                    .to_string()
            ))
        );
    }

    #[test]
    fn test_persistent_log_corrupt() {
        let log = PersistentLog::new(MemoryStorage::new().with_item("log", "not json"));

        assert!(matches!(
            log.read_entries(),
            Err(StorageError::Serialization(_))
        ));
    }
}
