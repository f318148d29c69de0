use derive_more::{Deref, Display};

pub const PLACEHOLDER_IMAGE: &str =
    "https://images.pexels.com/photos/1552242/pexels-photo-1552242.jpeg?auto=compress&cs=tinysrgb&w=800";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exercise {
    pub id: ExerciseID,
    pub name: String,
    pub other_names: Option<String>,
    pub image: Option<String>,
    /// May contain hyperlink markup.
    pub description: Option<String>,
    pub target_muscles: Vec<String>,
    pub equipment: String,
}

impl Exercise {
    /// The muscle used as sort key. Only the first target muscle is considered.
    #[must_use]
    pub fn primary_muscle(&self) -> Option<&str> {
        self.target_muscles.first().map(String::as_str)
    }

    #[must_use]
    pub fn image_or_placeholder(&self) -> &str {
        self.image.as_deref().unwrap_or(PLACEHOLDER_IMAGE)
    }

    /// `term` must already be lower-cased.
    pub(crate) fn matches_search(&self, term: &str) -> bool {
        self.name.to_lowercase().contains(term)
            || self
                .target_muscles
                .iter()
                .any(|m| m.to_lowercase().contains(term))
            || self.equipment.to_lowercase().contains(term)
            || self
                .other_names
                .as_ref()
                .is_some_and(|n| n.to_lowercase().contains(term))
    }
}

#[derive(Deref, Display, Debug, Default, Clone, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExerciseID(String);

impl AsRef<str> for ExerciseID {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ExerciseID {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for ExerciseID {
    fn from(value: String) -> Self {
        Self(value)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn exercise(target_muscles: &[&str], other_names: Option<&str>) -> Exercise {
        Exercise {
            id: "1".into(),
            name: "Dumbbell Wrist Curl".to_string(),
            other_names: other_names.map(ToString::to_string),
            image: None,
            description: None,
            target_muscles: target_muscles.iter().map(ToString::to_string).collect(),
            equipment: "دمبل".to_string(),
        }
    }

    #[test]
    fn test_exercise_primary_muscle() {
        assert_eq!(
            exercise(&["سینه", "پشت بازو"], None).primary_muscle(),
            Some("سینه")
        );
        assert_eq!(exercise(&[], None).primary_muscle(), None);
    }

    #[test]
    fn test_exercise_image_or_placeholder() {
        let mut e = exercise(&["ساعد"], None);
        assert_eq!(e.image_or_placeholder(), PLACEHOLDER_IMAGE);
        e.image = Some("https://example.org/curl.jpg".to_string());
        assert_eq!(e.image_or_placeholder(), "https://example.org/curl.jpg");
    }

    #[rstest]
    #[case("wrist", true)]
    #[case("ساعد", true)]
    #[case("دمب", true)]
    #[case("forearm", true)]
    #[case("هالتر", false)]
    fn test_exercise_matches_search(#[case] term: &str, #[case] expected: bool) {
        assert_eq!(
            exercise(&["ساعد"], Some("Forearm Curl")).matches_search(term),
            expected
        );
    }

    #[test]
    fn test_exercise_matches_search_without_other_names() {
        assert!(!exercise(&["ساعد"], None).matches_search("forearm"));
    }
}
