#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

pub mod catalog;
pub mod collation;
pub mod vocabulary;

mod exercise;
mod feedback;
mod name;
mod query;
mod session;

pub use exercise::{Exercise, ExerciseID, PLACEHOLDER_IMAGE};
pub use feedback::{Feedback, FeedbackKind};
pub use name::{Name, NameError};
pub use query::{
    ExerciseQuery, FilterField, FilterRule, Move, SortDirection, SortField, SortRule, query,
};
pub use session::{
    ActiveTab, Progress, SessionExercise, SessionID, SessionTarget, UserData, WorkoutSession,
};
