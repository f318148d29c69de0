use derive_more::{AsRef, Display};

/// Display label of a workout session.
///
/// Names are stored trimmed. Duplicate names are allowed.
#[derive(AsRef, Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn new(name: &str) -> Result<Self, NameError> {
        let trimmed_name = name.trim();

        if trimmed_name.is_empty() {
            return Err(NameError::Empty);
        }

        Ok(Name(trimmed_name.to_string()))
    }

    /// Stands in for a stored name that is blank or missing.
    #[must_use]
    pub fn unnamed() -> Self {
        Name(UNNAMED.to_string())
    }
}

const UNNAMED: &str = "جلسه بدون نام";

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("Name must not be empty")]
    Empty,
}
