//! JSON representation of the persisted user data.
//!
//! The same format is used for the local storage value and for backup files.
//! Only text that is not JSON or lacks a `sessions` array is rejected. Every
//! session is read on its own: a missing ID is generated, a blank name is
//! replaced by a placeholder, timestamps may be RFC 3339 strings or
//! milliseconds since the epoch, and entries without an exercise ID are
//! dropped. Sessions that are not objects are skipped. Unknown fields are
//! ignored.

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use log::warn;
use serde_json::Value;
use tamrinsaz_domain as domain;

use crate::StorageError;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DocumentError {
    #[error("No data to import")]
    Empty,
    #[error("{0}")]
    Malformed(String),
}

pub fn parse(text: &str) -> Result<domain::UserData, DocumentError> {
    if text.trim().is_empty() {
        return Err(DocumentError::Empty);
    }

    let user_data = serde_json::from_str::<StoredUserData>(text)
        .map_err(|err| DocumentError::Malformed(err.to_string()))?;

    Ok(domain::UserData::from(user_data))
}

pub fn to_json(user_data: &domain::UserData) -> Result<String, StorageError> {
    serde_json::to_string(&UserData::from(user_data))
        .map_err(|err| StorageError::Serialization(err.to_string()))
}

pub fn to_pretty_json(user_data: &domain::UserData) -> Result<String, StorageError> {
    serde_json::to_string_pretty(&UserData::from(user_data))
        .map_err(|err| StorageError::Serialization(err.to_string()))
}

#[derive(serde::Serialize, Debug, Clone, PartialEq)]
struct UserData {
    sessions: Vec<WorkoutSession>,
}

impl From<&domain::UserData> for UserData {
    fn from(value: &domain::UserData) -> Self {
        Self {
            sessions: value.sessions.iter().map(WorkoutSession::from).collect(),
        }
    }
}

#[derive(serde::Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
struct WorkoutSession {
    id: String,
    name: String,
    exercises: Vec<SessionExercise>,
    created_at: String,
}

impl From<&domain::WorkoutSession> for WorkoutSession {
    fn from(value: &domain::WorkoutSession) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name.to_string(),
            exercises: value.exercises.iter().map(SessionExercise::from).collect(),
            created_at: value
                .created_at
                .to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

#[derive(serde::Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
struct SessionExercise {
    exercise_id: String,
    completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    notes: Option<String>,
}

impl From<&domain::SessionExercise> for SessionExercise {
    fn from(value: &domain::SessionExercise) -> Self {
        Self {
            exercise_id: value.exercise_id.to_string(),
            completed: value.completed,
            notes: value.notes.clone(),
        }
    }
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
struct StoredUserData {
    sessions: Vec<Value>,
}

impl From<StoredUserData> for domain::UserData {
    fn from(value: StoredUserData) -> Self {
        Self {
            sessions: value
                .sessions
                .into_iter()
                .enumerate()
                .filter_map(|(position, session)| {
                    serde_json::from_value::<StoredSession>(session)
                        .inspect_err(|err| warn!("skipped session at position {position}: {err}"))
                        .ok()
                })
                .map(domain::WorkoutSession::from)
                .collect(),
        }
    }
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
struct StoredSession {
    #[serde(default)]
    id: Value,
    #[serde(default)]
    name: Value,
    #[serde(default)]
    exercises: Value,
    #[serde(default)]
    created_at: Value,
}

impl From<StoredSession> for domain::WorkoutSession {
    fn from(value: StoredSession) -> Self {
        let id = session_id(&value.id);

        let name = value
            .name
            .as_str()
            .and_then(|name| domain::Name::new(name).ok())
            .unwrap_or_else(|| {
                warn!("invalid name of session {id}: {}", value.name);
                domain::Name::unnamed()
            });

        Self {
            created_at: created_at(&id, &value.created_at),
            exercises: session_exercises(&id, value.exercises),
            id,
            name,
        }
    }
}

fn session_id(value: &Value) -> domain::SessionID {
    match value {
        Value::String(id) if !id.trim().is_empty() => id.as_str().into(),
        Value::Number(id) => id.to_string().into(),
        _ => {
            let id = domain::SessionID::generate();
            warn!("invalid session id {value}, replaced by {id}");
            id
        }
    }
}

fn session_exercises(session_id: &domain::SessionID, value: Value) -> Vec<domain::SessionExercise> {
    let entries = match value {
        Value::Array(entries) => entries,
        Value::Null => vec![],
        value => {
            warn!("invalid exercises of session {session_id}: {value}");
            vec![]
        }
    };

    let mut exercises: Vec<domain::SessionExercise> = vec![];
    for entry in entries {
        let Some(exercise) = serde_json::from_value::<StoredSessionExercise>(entry)
            .ok()
            .and_then(StoredSessionExercise::into_domain)
        else {
            warn!("skipped invalid exercise entry of session {session_id}");
            continue;
        };
        if exercises
            .iter()
            .all(|e| e.exercise_id != exercise.exercise_id)
        {
            exercises.push(exercise);
        }
    }
    exercises
}

fn created_at(session_id: &domain::SessionID, value: &Value) -> DateTime<Utc> {
    let parsed = match value {
        Value::String(text) => DateTime::parse_from_rfc3339(text)
            .ok()
            .map(|t| t.with_timezone(&Utc)),
        Value::Number(number) => number
            .as_i64()
            .and_then(DateTime::<Utc>::from_timestamp_millis),
        _ => None,
    };

    if let Some(timestamp) = parsed {
        timestamp.trunc_subsecs(3)
    } else {
        warn!("invalid creation time of session {session_id}: {value}");
        Utc::now().trunc_subsecs(3)
    }
}

#[derive(serde::Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
struct StoredSessionExercise {
    #[serde(default)]
    exercise_id: Value,
    #[serde(default)]
    completed: Value,
    #[serde(default)]
    notes: Value,
}

impl StoredSessionExercise {
    fn into_domain(self) -> Option<domain::SessionExercise> {
        let exercise_id: domain::ExerciseID = match self.exercise_id {
            Value::String(id) if !id.trim().is_empty() => id.into(),
            Value::Number(id) => id.to_string().into(),
            _ => return None,
        };

        Some(domain::SessionExercise {
            completed: self.completed.as_bool().unwrap_or_default(),
            ..domain::SessionExercise::new(exercise_id, self.notes.as_str().unwrap_or_default())
        })
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use crate::tests::data::{JSON, USER_DATA};

    use super::*;

    fn persian_user_data() -> domain::UserData {
        domain::UserData {
            sessions: vec![
                domain::WorkoutSession {
                    id: "b3c1f0e2-8d4a-4c57-9a0e-2f1d6c7b8a90".into(),
                    name: domain::Name::new("جلسه ۱: سینه و پشت\u{200C}بازو").unwrap(),
                    exercises: vec![
                        domain::SessionExercise {
                            exercise_id: "46".into(),
                            completed: true,
                            notes: Some("۴ ست × ۱۲ \"سنگین\"\nاستراحت ۹۰ ثانیه\t\\".to_string()),
                        },
                        domain::SessionExercise {
                            exercise_id: "84".into(),
                            completed: false,
                            notes: Some("{\"weight\": 20}".to_string()),
                        },
                        domain::SessionExercise {
                            exercise_id: "17".into(),
                            completed: true,
                            notes: None,
                        },
                    ],
                    created_at: Utc.timestamp_millis_opt(1_751_438_995_001).unwrap(),
                },
                domain::WorkoutSession {
                    id: "1751439812805".into(),
                    name: domain::Name::new("پا 'Legs'").unwrap(),
                    exercises: vec![],
                    created_at: Utc.timestamp_millis_opt(0).unwrap(),
                },
            ],
        }
    }

    #[test]
    fn test_parse() {
        assert_eq!(parse(JSON), Ok(USER_DATA.clone()));
    }

    #[test]
    fn test_to_json() {
        assert_eq!(
            serde_json::from_str::<Value>(&to_json(&USER_DATA).unwrap()).unwrap(),
            serde_json::from_str::<Value>(JSON).unwrap()
        );
    }

    #[rstest]
    #[case(USER_DATA.clone())]
    #[case(persian_user_data())]
    #[case(domain::UserData::default())]
    fn test_round_trip(#[case] user_data: domain::UserData) {
        assert_eq!(parse(&to_json(&user_data).unwrap()), Ok(user_data.clone()));
        assert_eq!(parse(&to_pretty_json(&user_data).unwrap()), Ok(user_data));
    }

    #[rstest]
    #[case("")]
    #[case("  \n\t")]
    fn test_parse_empty(#[case] text: &str) {
        assert_eq!(parse(text), Err(DocumentError::Empty));
    }

    #[rstest]
    #[case("not json")]
    #[case("{}")]
    #[case("[]")]
    #[case(r#"{"sessions": {}}"#)]
    #[case(r#"{"sessions": null}"#)]
    #[case(r#"{"session": []}"#)]
    fn test_parse_malformed(#[case] text: &str) {
        assert!(matches!(parse(text), Err(DocumentError::Malformed(_))));
    }

    #[test]
    fn test_parse_keeps_valid_sessions() {
        let user_data = parse(
            r#"{"sessions": [
                {
                    "id": "1",
                    "name": "Push",
                    "exercises": [{"exerciseId": "46", "completed": true}],
                    "createdAt": "2025-07-02T06:49:55.832Z"
                },
                {"id": "2", "name": "", "createdAt": "2025-07-02T06:49:55.832Z"},
                42,
                {"id": 3, "name": "  ", "exercises": "46"},
                {
                    "id": "4",
                    "name": "Legs",
                    "exercises": [
                        {},
                        {"completed": true},
                        {"exerciseId": 53, "notes": 5, "completed": "yes"},
                        "84"
                    ]
                }
            ]}"#,
        )
        .unwrap();

        assert_eq!(
            user_data
                .sessions
                .iter()
                .map(|s| (s.id.to_string(), s.name.to_string()))
                .collect::<Vec<_>>(),
            vec![
                ("1".to_string(), "Push".to_string()),
                ("2".to_string(), domain::Name::unnamed().to_string()),
                ("3".to_string(), domain::Name::unnamed().to_string()),
                ("4".to_string(), "Legs".to_string()),
            ]
        );
        assert_eq!(
            user_data.sessions[0].exercises,
            vec![domain::SessionExercise {
                exercise_id: "46".into(),
                completed: true,
                notes: None,
            }]
        );
        assert!(user_data.sessions[2].exercises.is_empty());
        assert_eq!(
            user_data.sessions[3].exercises,
            vec![domain::SessionExercise {
                exercise_id: "53".into(),
                completed: false,
                notes: None,
            }]
        );
    }

    #[test]
    fn test_parse_generates_missing_ids() {
        let user_data =
            parse(r#"{"sessions": [{"name": "Push"}, {"id": "", "name": "Pull"}]}"#).unwrap();

        assert_eq!(user_data.sessions.len(), 2);
        assert_eq!(user_data.sessions[0].name.to_string(), "Push");
        assert!(!user_data.sessions[0].id.is_empty());
        assert!(!user_data.sessions[1].id.is_empty());
        assert_ne!(user_data.sessions[0].id, user_data.sessions[1].id);
    }

    #[test]
    fn test_parse_defaults() {
        let user_data = parse(
            r#"{
                "sessions": [
                    {
                        "id": "1",
                        "name": " Legs ",
                        "exercises": [{"exerciseId": "53", "notes": "  "}],
                        "createdAt": 1751438995832,
                        "color": "red"
                    }
                ],
                "version": 2
            }"#,
        )
        .unwrap();

        assert_eq!(
            user_data,
            domain::UserData {
                sessions: vec![domain::WorkoutSession {
                    id: "1".into(),
                    name: domain::Name::new("Legs").unwrap(),
                    exercises: vec![domain::SessionExercise {
                        exercise_id: "53".into(),
                        completed: false,
                        notes: None,
                    }],
                    created_at: Utc.timestamp_millis_opt(1_751_438_995_832).unwrap(),
                }],
            }
        );
    }

    #[rstest]
    #[case(Value::Null)]
    #[case(Value::String("yesterday".to_string()))]
    #[case(Value::Bool(true))]
    fn test_parse_invalid_created_at(#[case] created_at: Value) {
        let before = Utc::now().trunc_subsecs(3);
        let text = serde_json::json!({
            "sessions": [{"id": "1", "name": "Push", "createdAt": created_at}]
        })
        .to_string();

        let user_data = parse(&text).unwrap();

        assert!(user_data.sessions[0].created_at >= before);
        assert!(user_data.sessions[0].created_at <= Utc::now());
    }

    #[test]
    fn test_parse_collapses_duplicate_exercises() {
        let user_data = parse(
            r#"{"sessions": [{
                "id": "1",
                "name": "Push",
                "exercises": [
                    {"exerciseId": "46", "notes": "12*4"},
                    {"exerciseId": "84", "completed": true},
                    {"exerciseId": "46", "completed": true}
                ],
                "createdAt": "2025-07-02T06:49:55.832Z"
            }]}"#,
        )
        .unwrap();

        assert_eq!(
            user_data.sessions[0].exercises,
            vec![
                domain::SessionExercise {
                    exercise_id: "46".into(),
                    completed: false,
                    notes: Some("12*4".to_string()),
                },
                domain::SessionExercise {
                    exercise_id: "84".into(),
                    completed: true,
                    notes: None,
                },
            ]
        );
    }

    #[test]
    fn test_to_json_omits_unset_notes() {
        let json = to_json(&USER_DATA).unwrap();

        assert_eq!(json.matches("\"notes\"").count(), 1);
        assert!(json.contains(r#""createdAt":"2025-07-02T06:49:55.832Z""#));
    }
}
