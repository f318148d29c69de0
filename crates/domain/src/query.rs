use std::cmp::Ordering;

use uuid::Uuid;

use crate::{Exercise, collation, vocabulary};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterField {
    Equipment,
    TargetMuscles,
    /// A field this version does not know. Rules on it match everything.
    Unknown(String),
}

/// Narrows the catalog to exercises matching any of the values.
///
/// A rule without values has no effect.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterRule {
    pub id: String,
    pub field: FilterField,
    pub values: Vec<String>,
}

impl FilterRule {
    #[must_use]
    pub fn new(field: FilterField, values: Vec<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            field,
            values,
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn matches(&self, exercise: &Exercise) -> bool {
        if self.is_empty() {
            return true;
        }
        match &self.field {
            FilterField::Equipment => self.values.contains(&exercise.equipment),
            FilterField::TargetMuscles => exercise
                .target_muscles
                .iter()
                .any(|m| self.values.contains(m)),
            FilterField::Unknown(_) => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Name,
    Equipment,
    /// Compares the first target muscle only.
    TargetMuscles,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortRule {
    pub id: String,
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortRule {
    #[must_use]
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            field,
            direction,
        }
    }

    fn compare(&self, a: &Exercise, b: &Exercise) -> Ordering {
        let (a, b) = match self.field {
            SortField::Name => (Some(a.name.as_str()), Some(b.name.as_str())),
            SortField::Equipment => (Some(a.equipment.as_str()), Some(b.equipment.as_str())),
            SortField::TargetMuscles => (a.primary_muscle(), b.primary_muscle()),
        };
        match (a, b) {
            (Some(a), Some(b)) => match self.direction {
                SortDirection::Asc => collation::compare(a, b),
                SortDirection::Desc => collation::compare(a, b).reverse(),
            },
            // Missing keys go last in both directions.
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    Up,
    Down,
}

/// Computes the visible exercises.
///
/// The search term is matched case-insensitively against name, target
/// muscles, equipment and other names. Filter rules are combined with AND.
/// Sorting is stable, the first sort rule being the primary key. Without sort
/// rules, catalog order is kept.
#[must_use]
pub fn query<'a>(
    catalog: &'a [Exercise],
    search_term: &str,
    filters: &[FilterRule],
    sort_rules: &[SortRule],
) -> Vec<&'a Exercise> {
    let term = search_term.to_lowercase();
    let mut result = catalog
        .iter()
        .filter(|e| term.is_empty() || e.matches_search(&term))
        .collect::<Vec<_>>();

    for rule in filters.iter().filter(|r| !r.is_empty()) {
        result.retain(|e| rule.matches(e));
    }

    if !sort_rules.is_empty() {
        result.sort_by(|a, b| {
            sort_rules
                .iter()
                .map(|rule| rule.compare(a, b))
                .find(|ordering| *ordering != Ordering::Equal)
                .unwrap_or(Ordering::Equal)
        });
    }

    result
}

/// Search, filter and sort state of the exercise catalog page.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ExerciseQuery {
    pub search_term: String,
    pub filters: Vec<FilterRule>,
    pub sort_rules: Vec<SortRule>,
}

impl ExerciseQuery {
    #[must_use]
    pub fn results<'a>(&self, catalog: &'a [Exercise]) -> Vec<&'a Exercise> {
        query(catalog, &self.search_term, &self.filters, &self.sort_rules)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.search_term.is_empty()
            && self.filters.iter().all(FilterRule::is_empty)
            && self.sort_rules.is_empty()
    }

    #[must_use]
    pub fn filter_values(&self, field: &FilterField) -> &[String] {
        self.filters
            .iter()
            .find(|f| f.field == *field)
            .map(|f| f.values.as_slice())
            .unwrap_or_default()
    }

    /// Rules that actually narrow the result.
    #[must_use]
    pub fn applied_filters(&self) -> Vec<FilterRule> {
        self.filters
            .iter()
            .filter(|f| !f.is_empty())
            .cloned()
            .collect()
    }

    pub fn toggle_filter_section(&mut self, field: FilterField, enabled: bool) {
        if !enabled {
            self.filters.retain(|f| f.field != field);
        } else if !self.filters.iter().any(|f| f.field == field) {
            self.filters.push(FilterRule::new(field, vec![]));
        }
    }

    pub fn add_filter_value(&mut self, field: FilterField, value: &str) {
        if let Some(filter) = self.filters.iter_mut().find(|f| f.field == field) {
            if !filter.values.iter().any(|v| v == value) {
                filter.values.push(value.to_string());
            }
        } else {
            self.filters
                .push(FilterRule::new(field, vec![value.to_string()]));
        }
    }

    /// Removes the value and drops the rule once it has no values left.
    pub fn remove_filter_value(&mut self, field: &FilterField, value: &str) {
        for filter in self.filters.iter_mut().filter(|f| f.field == *field) {
            filter.values.retain(|v| v != value);
        }
        self.filters
            .retain(|f| f.field != *field || !f.values.is_empty());
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    /// Replaces the equipment rule by the filter labels of the selected picker
    /// options.
    pub fn apply_equipment_selection(&mut self, option_ids: &[&str]) {
        let values = option_ids
            .iter()
            .filter_map(|id| vocabulary::equipment_option(id))
            .map(|o| o.filter_name);
        self.replace_rule(
            vocabulary::EQUIPMENT_FILTER_ID,
            FilterField::Equipment,
            values,
        );
    }

    /// Replaces the target muscle rule by the filter labels of the selected
    /// picker options.
    pub fn apply_muscle_selection(&mut self, option_ids: &[&str]) {
        let values = option_ids
            .iter()
            .filter_map(|id| vocabulary::muscle_option(id))
            .flat_map(|o| o.filter_names.iter().copied());
        self.replace_rule(
            vocabulary::MUSCLE_FILTER_ID,
            FilterField::TargetMuscles,
            values,
        );
    }

    fn replace_rule<'a>(
        &mut self,
        id: &str,
        field: FilterField,
        values: impl Iterator<Item = &'a str>,
    ) {
        let mut unique: Vec<String> = vec![];
        for value in values {
            if !unique.iter().any(|v| v == value) {
                unique.push(value.to_string());
            }
        }
        self.filters.retain(|f| f.field != field);
        if !unique.is_empty() {
            self.filters.push(FilterRule {
                id: id.to_string(),
                field,
                values: unique,
            });
        }
    }

    pub fn add_sort_rule(&mut self) {
        self.sort_rules
            .push(SortRule::new(SortField::Name, SortDirection::Asc));
    }

    pub fn update_sort_rule(&mut self, id: &str, field: SortField, direction: SortDirection) {
        if let Some(rule) = self.sort_rules.iter_mut().find(|r| r.id == id) {
            rule.field = field;
            rule.direction = direction;
        }
    }

    pub fn remove_sort_rule(&mut self, id: &str) {
        self.sort_rules.retain(|r| r.id != id);
    }

    pub fn clear_sort_rules(&mut self) {
        self.sort_rules.clear();
    }

    /// Changes the priority of a sort rule. Moves beyond either end are ignored.
    pub fn move_sort_rule(&mut self, id: &str, direction: Move) {
        let Some(index) = self.sort_rules.iter().position(|r| r.id == id) else {
            return;
        };
        let target = match direction {
            Move::Up => index.checked_sub(1),
            Move::Down => Some(index + 1).filter(|i| *i < self.sort_rules.len()),
        };
        if let Some(target) = target {
            self.sort_rules.swap(index, target);
        }
    }
}
