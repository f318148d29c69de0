use log::warn;
use tamrinsaz_domain as domain;

use crate::{Key, KeyValueStore, StorageError};

/// UI state kept across page loads.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Preferences {
    pub active_tab: domain::ActiveTab,
    pub filters: Vec<domain::FilterRule>,
}

/// Missing or unreadable values fall back to their defaults.
#[must_use]
pub fn read_preferences(storage: &impl KeyValueStore) -> Preferences {
    Preferences {
        active_tab: read::<String>(storage, Key::ActiveTab)
            .map(|tab| domain::ActiveTab::from(ActiveTab(tab)))
            .unwrap_or_default(),
        filters: read::<Vec<FilterRule>>(storage, Key::Filters)
            .map(|filters| filters.into_iter().map(domain::FilterRule::from).collect())
            .unwrap_or_default(),
    }
}

pub fn write_preferences(
    storage: &impl KeyValueStore,
    preferences: &Preferences,
) -> Result<(), StorageError> {
    write(
        storage,
        Key::ActiveTab,
        &ActiveTab::from(&preferences.active_tab).0,
    )?;
    write(
        storage,
        Key::Filters,
        &preferences
            .filters
            .iter()
            .map(FilterRule::from)
            .collect::<Vec<_>>(),
    )
}

fn read<T: serde::de::DeserializeOwned>(storage: &impl KeyValueStore, key: Key) -> Option<T> {
    match storage.get_item(key.as_ref()) {
        Ok(Some(text)) => serde_json::from_str(&text)
            .inspect_err(|err| warn!("failed to parse {}: {err}", key.as_ref()))
            .ok(),
        Ok(None) => None,
        Err(err) => {
            warn!("failed to read {}: {err}", key.as_ref());
            None
        }
    }
}

fn write<T: serde::Serialize + ?Sized>(
    storage: &impl KeyValueStore,
    key: Key,
    value: &T,
) -> Result<(), StorageError> {
    let text =
        serde_json::to_string(value).map_err(|err| StorageError::Serialization(err.to_string()))?;
    storage.set_item(key.as_ref(), &text)
}

const ALL_SESSIONS: &str = "all";

struct ActiveTab(String);

impl From<&domain::ActiveTab> for ActiveTab {
    fn from(value: &domain::ActiveTab) -> Self {
        match value {
            domain::ActiveTab::All => Self(ALL_SESSIONS.to_string()),
            domain::ActiveTab::Session(id) => Self(id.to_string()),
        }
    }
}

impl From<ActiveTab> for domain::ActiveTab {
    fn from(value: ActiveTab) -> Self {
        if value.0 == ALL_SESSIONS {
            Self::All
        } else {
            Self::Session(value.0.into())
        }
    }
}

#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, PartialEq)]
struct FilterRule {
    id: String,
    field: String,
    values: Vec<String>,
}

impl From<&domain::FilterRule> for FilterRule {
    fn from(value: &domain::FilterRule) -> Self {
        Self {
            id: value.id.clone(),
            field: match &value.field {
                domain::FilterField::Equipment => "equipment".to_string(),
                domain::FilterField::TargetMuscles => "targetMuscles".to_string(),
                domain::FilterField::Unknown(field) => field.clone(),
            },
            values: value.values.clone(),
        }
    }
}

impl From<FilterRule> for domain::FilterRule {
    fn from(value: FilterRule) -> Self {
        Self {
            id: value.id,
            field: match value.field.as_str() {
                "equipment" => domain::FilterField::Equipment,
                "targetMuscles" => domain::FilterField::TargetMuscles,
                _ => domain::FilterField::Unknown(value.field),
            },
            values: value.values,
        }
    }
}
