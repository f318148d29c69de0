use chrono::{DateTime, SubsecRound, Utc};
use derive_more::{Deref, Display};
use log::debug;
use uuid::Uuid;

use crate::{Exercise, ExerciseID, Name, NameError};

/// The whole persisted state of a user.
///
/// Every mutation helper is a pure function returning a new document. Unknown
/// session or exercise IDs are not errors: the helpers return an unchanged
/// copy, as the UI may act on stale references.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct UserData {
    pub sessions: Vec<WorkoutSession>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutSession {
    pub id: SessionID,
    pub name: Name,
    pub exercises: Vec<SessionExercise>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionExercise {
    pub exercise_id: ExerciseID,
    pub completed: bool,
    pub notes: Option<String>,
}

impl SessionExercise {
    #[must_use]
    pub fn new(exercise_id: ExerciseID, notes: &str) -> Self {
        Self {
            exercise_id,
            completed: false,
            notes: normalize_notes(notes),
        }
    }
}

#[derive(Deref, Display, Debug, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct SessionID(String);

impl SessionID {
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

impl AsRef<str> for SessionID {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SessionID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for SessionID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// A session an exercise should be added to, with the notes for the new entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionTarget {
    pub session_id: SessionID,
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
}

impl Progress {
    #[must_use]
    pub fn percentage(&self) -> f32 {
        if self.total == 0 {
            return 0.0;
        }
        #[allow(clippy::cast_precision_loss)]
        let percentage = self.completed as f32 / self.total as f32 * 100.0;
        percentage
    }
}

/// Selected tab on the workouts page.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum ActiveTab {
    #[default]
    All,
    Session(SessionID),
}

impl ActiveTab {
    /// Falls back to all sessions when the selected session was deleted.
    #[must_use]
    pub fn after_delete(self, deleted: &SessionID) -> Self {
        match self {
            ActiveTab::Session(id) if id == *deleted => ActiveTab::All,
            tab => tab,
        }
    }
}

impl WorkoutSession {
    #[must_use]
    pub fn contains(&self, exercise_id: &ExerciseID) -> bool {
        self.exercises.iter().any(|e| e.exercise_id == *exercise_id)
    }

    #[must_use]
    pub fn entry(&self, exercise_id: &ExerciseID) -> Option<&SessionExercise> {
        self.exercises.iter().find(|e| e.exercise_id == *exercise_id)
    }

    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress {
            completed: self.exercises.iter().filter(|e| e.completed).count(),
            total: self.exercises.len(),
        }
    }

    /// Pairs each entry with its catalog exercise. Entries referring to
    /// exercises missing from the catalog are skipped.
    #[must_use]
    pub fn resolve<'a>(
        &'a self,
        catalog: &'a [Exercise],
    ) -> Vec<(&'a SessionExercise, &'a Exercise)> {
        self.exercises
            .iter()
            .filter_map(|entry| {
                catalog
                    .iter()
                    .find(|e| e.id == entry.exercise_id)
                    .map(|exercise| (entry, exercise))
            })
            .collect()
    }

    fn map_entry(
        &self,
        exercise_id: &ExerciseID,
        f: impl Fn(&SessionExercise) -> SessionExercise,
    ) -> Self {
        Self {
            exercises: self
                .exercises
                .iter()
                .map(|e| {
                    if e.exercise_id == *exercise_id {
                        f(e)
                    } else {
                        e.clone()
                    }
                })
                .collect(),
            ..self.clone()
        }
    }
}

impl UserData {
    #[must_use]
    pub fn session(&self, id: &SessionID) -> Option<&WorkoutSession> {
        self.sessions.iter().find(|s| s.id == *id)
    }

    /// Sessions containing the exercise, together with the matching entry.
    #[must_use]
    pub fn sessions_with_exercise(
        &self,
        exercise_id: &ExerciseID,
    ) -> Vec<(&WorkoutSession, &SessionExercise)> {
        self.sessions
            .iter()
            .filter_map(|s| s.entry(exercise_id).map(|e| (s, e)))
            .collect()
    }

    /// Name of the first session containing the exercise.
    #[must_use]
    pub fn session_name_for(&self, exercise_id: &ExerciseID) -> Option<&Name> {
        self.sessions
            .iter()
            .find(|s| s.contains(exercise_id))
            .map(|s| &s.name)
    }

    /// Sessions the exercise can still be added to.
    #[must_use]
    pub fn available_sessions(&self, exercise_id: &ExerciseID) -> Vec<&WorkoutSession> {
        self.sessions
            .iter()
            .filter(|s| !s.contains(exercise_id))
            .collect()
    }

    #[must_use]
    pub fn visible_sessions(&self, tab: &ActiveTab) -> Vec<&WorkoutSession> {
        self.sessions
            .iter()
            .filter(|s| match tab {
                ActiveTab::All => true,
                ActiveTab::Session(id) => s.id == *id,
            })
            .collect()
    }

    /// Appends a new empty session and returns the new document together
    /// with the ID of the created session.
    pub fn create_session(&self, name: &str) -> Result<(Self, SessionID), NameError> {
        let name = Name::new(name)?;
        let session = WorkoutSession {
            id: SessionID::generate(),
            name,
            exercises: vec![],
            created_at: Utc::now().trunc_subsecs(3),
        };
        let id = session.id.clone();
        debug!("create session {id}");
        let mut sessions = self.sessions.clone();
        sessions.push(session);
        Ok((Self { sessions }, id))
    }

    pub fn rename_session(&self, id: &SessionID, name: &str) -> Result<Self, NameError> {
        let name = Name::new(name)?;
        Ok(self.map_session(id, |s| WorkoutSession {
            name: name.clone(),
            ..s.clone()
        }))
    }

    #[must_use]
    pub fn delete_session(&self, id: &SessionID) -> Self {
        Self {
            sessions: self
                .sessions
                .iter()
                .filter(|s| s.id != *id)
                .cloned()
                .collect(),
        }
    }

    /// Adds the exercise to each target session that does not contain it yet.
    #[must_use]
    pub fn add_exercise_to_sessions(
        &self,
        exercise_id: &ExerciseID,
        targets: &[SessionTarget],
    ) -> Self {
        Self {
            sessions: self
                .sessions
                .iter()
                .map(|session| {
                    match targets.iter().find(|t| t.session_id == session.id) {
                        Some(target) if !session.contains(exercise_id) => {
                            let mut session = session.clone();
                            session
                                .exercises
                                .push(SessionExercise::new(exercise_id.clone(), &target.notes));
                            session
                        }
                        _ => session.clone(),
                    }
                })
                .collect(),
        }
    }

    #[must_use]
    pub fn remove_exercise_from_session(
        &self,
        session_id: &SessionID,
        exercise_id: &ExerciseID,
    ) -> Self {
        self.map_session(session_id, |s| WorkoutSession {
            exercises: s
                .exercises
                .iter()
                .filter(|e| e.exercise_id != *exercise_id)
                .cloned()
                .collect(),
            ..s.clone()
        })
    }

    #[must_use]
    pub fn toggle_exercise_completion(
        &self,
        session_id: &SessionID,
        exercise_id: &ExerciseID,
    ) -> Self {
        self.map_session(session_id, |s| {
            s.map_entry(exercise_id, |e| SessionExercise {
                completed: !e.completed,
                ..e.clone()
            })
        })
    }

    #[must_use]
    pub fn set_exercise_notes(
        &self,
        session_id: &SessionID,
        exercise_id: &ExerciseID,
        notes: &str,
    ) -> Self {
        self.map_session(session_id, |s| {
            s.map_entry(exercise_id, |e| SessionExercise {
                notes: normalize_notes(notes),
                ..e.clone()
            })
        })
    }

    fn map_session(&self, id: &SessionID, f: impl Fn(&WorkoutSession) -> WorkoutSession) -> Self {
        Self {
            sessions: self
                .sessions
                .iter()
                .map(|s| if s.id == *id { f(s) } else { s.clone() })
                .collect(),
        }
    }
}

fn normalize_notes(notes: &str) -> Option<String> {
    let notes = notes.trim();
    if notes.is_empty() {
        None
    } else {
        Some(notes.to_string())
    }
}
