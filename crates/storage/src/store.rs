use chrono::{NaiveDate, Utc};
use log::{debug, info, warn};
use tamrinsaz_domain::UserData;

use crate::{DocumentError, Key, KeyValueStore, StorageError, document};

/// Persists the user data as a single JSON document.
///
/// Every successful write increments the revision, which callers can compare
/// to decide whether a view needs to be refreshed.
pub struct Store<S: KeyValueStore> {
    storage: S,
    revision: u64,
}

/// A backup file ready to be downloaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    pub file_name: String,
    pub contents: String,
}

impl Export {
    pub fn new(user_data: &UserData, date: NaiveDate) -> Result<Self, StorageError> {
        Ok(Self {
            file_name: format!("tamrinsaz-backup-{}.json", date.format("%Y-%m-%d")),
            contents: document::to_pretty_json(user_data)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportSource {
    Text(String),
    File { name: String, bytes: Vec<u8> },
}

impl<S: KeyValueStore> Store<S> {
    #[must_use]
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            revision: 0,
        }
    }

    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns an empty document if the stored data is missing or cannot be read.
    #[must_use]
    pub fn load(&self) -> UserData {
        let text = match self.storage.get_item(Key::UserData.as_ref()) {
            Ok(Some(text)) => text,
            Ok(None) => return UserData::default(),
            Err(err) => {
                warn!("failed to read user data: {err}");
                return UserData::default();
            }
        };

        match document::parse(&text) {
            Ok(user_data) => user_data,
            Err(err) => {
                warn!("failed to parse user data: {err}");
                UserData::default()
            }
        }
    }

    pub fn save(&mut self, user_data: &UserData) -> Result<(), StorageError> {
        let text = document::to_json(user_data)?;
        self.storage.set_item(Key::UserData.as_ref(), &text)?;
        self.revision += 1;
        debug!(
            "saved {} sessions (revision {})",
            user_data.sessions.len(),
            self.revision
        );
        Ok(())
    }

    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.storage.remove_item(Key::UserData.as_ref())?;
        self.revision += 1;
        info!("cleared user data");
        Ok(())
    }

    pub fn export_to_file(&self, user_data: &UserData) -> Result<Export, StorageError> {
        Export::new(user_data, Utc::now().date_naive())
    }

    /// Parses a backup. The stored data is not modified.
    pub fn import_from_source(&self, source: ImportSource) -> Result<UserData, DocumentError> {
        let text = match source {
            ImportSource::Text(text) => text,
            ImportSource::File { name, bytes } => String::from_utf8(bytes)
                .map_err(|err| DocumentError::Malformed(format!("{name}: {err}")))?,
        };

        let user_data = document::parse(&text).inspect_err(|err| {
            warn!("failed to import user data: {err}");
        })?;
        info!("imported {} sessions", user_data.sessions.len());
        Ok(user_data)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tamrinsaz_domain::{FilterField, FilterRule, SessionTarget, catalog, query};

    use crate::{
        MemoryStorage,
        tests::data::{JSON, USER_DATA},
    };

    use super::*;

    #[test]
    fn test_load_missing() {
        let store = Store::new(MemoryStorage::new());

        assert_eq!(store.load(), UserData::default());
    }

    #[rstest]
    #[case("not json")]
    #[case("")]
    #[case(r#"{"session": []}"#)]
    fn test_load_corrupt(#[case] text: &str) {
        let store = Store::new(MemoryStorage::new().with_item("tamrinsaz-user-data", text));

        assert_eq!(store.load(), UserData::default());
    }

    #[test]
    fn test_load_keeps_valid_sessions_across_save() {
        let mut store = Store::new(MemoryStorage::new().with_item(
            "tamrinsaz-user-data",
            r#"{"sessions": [
                {
                    "id": "1",
                    "name": "Push",
                    "exercises": [{"exerciseId": "46", "completed": true}],
                    "createdAt": "2025-07-02T06:49:55.832Z"
                },
                {"id": "2", "name": ""}
            ]}"#,
        ));

        let user_data = store.load();
        assert_eq!(user_data.sessions.len(), 2);

        let (user_data, _) = user_data.create_session("Legs").unwrap();
        store.save(&user_data).unwrap();

        let user_data = store.load();
        assert_eq!(
            user_data
                .sessions
                .iter()
                .map(|s| s.name.to_string())
                .collect::<Vec<_>>(),
            vec![
                "Push".to_string(),
                tamrinsaz_domain::Name::unnamed().to_string(),
                "Legs".to_string()
            ]
        );
        let push = user_data.session(&"1".into()).unwrap();
        assert_eq!(push.progress().completed, 1);
        assert!(push.contains(&"46".into()));
    }

    #[test]
    fn test_import_keeps_sessions_without_id() {
        let store = Store::new(MemoryStorage::new());

        let user_data = store
            .import_from_source(ImportSource::Text(
                r#"{"sessions": [{"name": "Push"}]}"#.to_string(),
            ))
            .unwrap();

        assert_eq!(user_data.sessions.len(), 1);
        assert_eq!(user_data.sessions[0].name.to_string(), "Push");
    }

    #[test]
    fn test_load() {
        let store = Store::new(MemoryStorage::new().with_item("tamrinsaz-user-data", JSON));

        assert_eq!(store.load(), USER_DATA.clone());
    }

    #[test]
    fn test_save_and_load() {
        let mut store = Store::new(MemoryStorage::new());

        store.save(&USER_DATA).unwrap();

        assert_eq!(store.load(), USER_DATA.clone());
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn test_save_failure() {
        let mut store = Store::new(MemoryStorage::read_only());

        assert!(matches!(
            store.save(&USER_DATA),
            Err(StorageError::Unavailable(_))
        ));
        assert_eq!(store.revision(), 0);
        assert_eq!(store.load(), UserData::default());
    }

    #[test]
    fn test_clear() {
        let mut store = Store::new(MemoryStorage::new());
        store.save(&USER_DATA).unwrap();

        store.clear().unwrap();

        assert_eq!(store.load(), UserData::default());
        assert_eq!(store.revision(), 2);
    }

    #[test]
    fn test_export_to_file() {
        let export =
            Export::new(&USER_DATA, NaiveDate::from_ymd_opt(2025, 7, 2).unwrap()).unwrap();

        assert_eq!(export.file_name, "tamrinsaz-backup-2025-07-02.json");
        assert_eq!(export.contents, JSON);
    }

    #[test]
    fn test_export_and_import() {
        let store = Store::new(MemoryStorage::new());
        let export = store.export_to_file(&USER_DATA).unwrap();

        assert!(export.file_name.starts_with("tamrinsaz-backup-"));
        assert_eq!(
            store.import_from_source(ImportSource::Text(export.contents.clone())),
            Ok(USER_DATA.clone())
        );
        assert_eq!(
            store.import_from_source(ImportSource::File {
                name: export.file_name,
                bytes: export.contents.into_bytes(),
            }),
            Ok(USER_DATA.clone())
        );
    }

    #[rstest]
    #[case(ImportSource::Text(String::new()), DocumentError::Empty)]
    #[case(ImportSource::Text(" \n ".to_string()), DocumentError::Empty)]
    #[case(
        ImportSource::File { name: "backup.json".to_string(), bytes: vec![] },
        DocumentError::Empty
    )]
    fn test_import_empty(#[case] source: ImportSource, #[case] expected: DocumentError) {
        let store = Store::new(MemoryStorage::new());

        assert_eq!(store.import_from_source(source), Err(expected));
    }

    #[rstest]
    #[case(ImportSource::Text("not json".to_string()))]
    #[case(ImportSource::Text(r#"{"workouts": []}"#.to_string()))]
    #[case(ImportSource::File { name: "backup.json".to_string(), bytes: vec![0xff, 0xfe] })]
    fn test_import_malformed(#[case] source: ImportSource) {
        let store = Store::new(MemoryStorage::new());

        assert!(matches!(
            store.import_from_source(source),
            Err(DocumentError::Malformed(_))
        ));
    }

    #[test]
    fn test_import_does_not_write() {
        let mut store = Store::new(MemoryStorage::new());
        store.save(&USER_DATA).unwrap();

        let imported = store
            .import_from_source(ImportSource::Text(r#"{"sessions": []}"#.to_string()))
            .unwrap();

        assert_eq!(imported, UserData::default());
        assert_eq!(store.load(), USER_DATA.clone());
        assert_eq!(store.revision(), 1);
    }

    #[test]
    fn test_session_with_barbell_filter() {
        let mut store = Store::new(MemoryStorage::new());

        let (user_data, session_id) = store.load().create_session("جلسه ۱").unwrap();
        let user_data = user_data.add_exercise_to_sessions(
            &"46".into(),
            &[SessionTarget {
                session_id: session_id.clone(),
                notes: String::new(),
            }],
        );
        let user_data = user_data.add_exercise_to_sessions(
            &"84".into(),
            &[SessionTarget {
                session_id: session_id.clone(),
                notes: String::new(),
            }],
        );
        store.save(&user_data).unwrap();

        let user_data = store.load();
        let session = user_data.session(&session_id).unwrap();
        assert_eq!(session.name.to_string(), "جلسه ۱");
        assert_eq!(session.exercises.len(), 2);

        let barbell = [FilterRule::new(
            FilterField::Equipment,
            vec!["هالتر".to_string()],
        )];
        let catalog_ids = query(catalog::exercises(), "", &barbell, &[])
            .iter()
            .map(|e| e.id.to_string())
            .collect::<Vec<_>>();
        assert!(catalog_ids.contains(&"46".to_string()));
        assert!(!catalog_ids.contains(&"84".to_string()));

        let exercises = session
            .resolve(catalog::exercises())
            .into_iter()
            .map(|(_, exercise)| exercise.clone())
            .collect::<Vec<_>>();
        let ids = query(&exercises, "", &barbell, &[])
            .iter()
            .map(|e| e.id.to_string())
            .collect::<Vec<_>>();

        assert_eq!(ids, vec!["46".to_string()]);
    }
}
