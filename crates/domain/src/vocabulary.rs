//! Options offered by the equipment and muscle pickers.

use crate::{FilterField, FilterRule};

pub const EQUIPMENT_FILTER_ID: &str = "equipment-filter";
pub const MUSCLE_FILTER_ID: &str = "muscle-filter";

#[derive(Debug, PartialEq, Eq)]
pub struct EquipmentOption {
    pub id: &'static str,
    pub display_name: &'static str,
    /// Equipment label as used in the catalog.
    pub filter_name: &'static str,
    pub image_name: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MuscleKind {
    Normal,
    Advanced,
}

#[derive(Debug, PartialEq, Eq)]
pub struct MuscleOption {
    pub id: &'static str,
    pub display_name: &'static str,
    /// Target muscle labels as used in the catalog.
    pub filter_names: &'static [&'static str],
    pub image_name: &'static str,
    pub kind: MuscleKind,
}

pub static EQUIPMENT_OPTIONS: [EquipmentOption; 7] = [
    equipment("dumbbell", "دمبل", "dumbbell.webp"),
    equipment("barbell", "هالتر", "barbell.webp"),
    equipment("plate_weight", "صفحه وزنه", "plate_weight.webp"),
    equipment("machine", "دستگاه", "machine.webp"),
    equipment("cable", "سیمکش", "cable.webp"),
    equipment("bench", "نیمکت", "bench.webp"),
    equipment("bodyweight", "وزن بدن", "bodyweight.webp"),
];

pub static MUSCLE_OPTIONS: [MuscleOption; 26] = [
    normal("shoulder", "سرشانه", &["سرشانه"], "shoulder.webp"),
    normal("biceps", "جلو بازو", &["جلو بازو"], "biceps.webp"),
    normal("triceps", "پشت بازو", &["پشت بازو"], "triceps.webp"),
    normal("forearm", "ساعد", &["ساعد"], "forearm.webp"),
    normal("chest", "سینه", &["سینه"], "chest.webp"),
    normal("abs", "شکم", &["شکم"], "abs.webp"),
    normal("back", "پشت", &["پشت"], "back.webp"),
    normal("legs", "پا", &["پا"], "legs.webp"),
    advanced("anterior_deltoid", "دلتوئید قدامی", &["دلتوئید قدامی"], "anterior_deltoid.webp"),
    advanced("lateral_deltoid", "دلتوئید میانی", &["دلتوئید میانی"], "lateral_deltoid.webp"),
    advanced("posterior_deltoid", "دلتوئید خلفی", &["دلتوئید خلفی"], "posterior_deltoid.webp"),
    advanced("lower_chest", "زیر سینه", &["زیرسینه"], "lower_chest.webp"),
    advanced("upper_chest", "بالا سینه", &["بالا سینه"], "upper_chest.webp"),
    advanced("upper_abs", "بالا شکم", &["بالا شکم"], "upper_abs.webp"),
    advanced("lower_abs", "زیر شکم", &["زیر شکم"], "lower_abs.webp"),
    advanced("obliques", "مورب شکمی", &["مورب شکمی"], "obliques.webp"),
    advanced("lats", "لت", &["لت"], "lats.webp"),
    advanced("traps", "ذوزنقه‌ای", &["ذوزنقه‌ای"], "traps.webp"),
    advanced("upper_traps", "کول", &["کول"], "upper_traps.webp"),
    advanced("lower_back", "فیله", &["فیله"], "lower_back.webp"),
    advanced("quadriceps", "چهارسر ران", &["چهارسر ران"], "thigh.webp"),
    advanced("inner_thigh", "داخل ران", &["داخل ران"], "inner_thigh.webp"),
    advanced("outer_thigh", "خارج ران", &["خارج ران"], "outer_thigh.webp"),
    advanced("hamstrings", "همسترینگ", &["همسترینگ"], "hamstrings.webp"),
    advanced("glutes", "باسن", &["باسن"], "glutes.webp"),
    advanced("calves", "ساق پا", &["ساق پا"], "calves.webp"),
];

/// Advanced options listed below their normal parent option.
const MUSCLE_CHILDREN: [(&str, &[&str]); 5] = [
    (
        "shoulder",
        &["anterior_deltoid", "lateral_deltoid", "posterior_deltoid"],
    ),
    ("chest", &["lower_chest", "upper_chest"]),
    ("abs", &["upper_abs", "lower_abs", "obliques"]),
    ("back", &["lats", "traps", "upper_traps", "lower_back"]),
    (
        "legs",
        &[
            "quadriceps",
            "inner_thigh",
            "outer_thigh",
            "hamstrings",
            "glutes",
            "calves",
        ],
    ),
];

const fn equipment(
    id: &'static str,
    name: &'static str,
    image_name: &'static str,
) -> EquipmentOption {
    EquipmentOption {
        id,
        display_name: name,
        filter_name: name,
        image_name,
    }
}

const fn normal(
    id: &'static str,
    display_name: &'static str,
    filter_names: &'static [&'static str],
    image_name: &'static str,
) -> MuscleOption {
    MuscleOption {
        id,
        display_name,
        filter_names,
        image_name,
        kind: MuscleKind::Normal,
    }
}

const fn advanced(
    id: &'static str,
    display_name: &'static str,
    filter_names: &'static [&'static str],
    image_name: &'static str,
) -> MuscleOption {
    MuscleOption {
        id,
        display_name,
        filter_names,
        image_name,
        kind: MuscleKind::Advanced,
    }
}

#[must_use]
pub fn equipment_option(id: &str) -> Option<&'static EquipmentOption> {
    EQUIPMENT_OPTIONS.iter().find(|o| o.id == id)
}

#[must_use]
pub fn muscle_option(id: &str) -> Option<&'static MuscleOption> {
    MUSCLE_OPTIONS.iter().find(|o| o.id == id)
}

/// Normal options, each followed by its advanced children in advanced mode.
#[must_use]
pub fn displayed_muscles(advanced: bool) -> Vec<&'static MuscleOption> {
    let mut result = vec![];
    for option in MUSCLE_OPTIONS
        .iter()
        .filter(|o| o.kind == MuscleKind::Normal)
    {
        result.push(option);
        if advanced {
            if let Some((_, children)) = MUSCLE_CHILDREN.iter().find(|(p, _)| *p == option.id) {
                result.extend(children.iter().filter_map(|id| muscle_option(id)));
            }
        }
    }
    result
}

/// IDs of the equipment options whose label occurs in the equipment rule.
#[must_use]
pub fn selected_equipment_options(filters: &[FilterRule]) -> Vec<&'static str> {
    let Some(rule) = filters.iter().find(|f| f.field == FilterField::Equipment) else {
        return vec![];
    };
    EQUIPMENT_OPTIONS
        .iter()
        .filter(|o| rule.values.iter().any(|v| v == o.filter_name))
        .map(|o| o.id)
        .collect()
}

/// IDs of the muscle options with any label occurring in the target muscle rule.
#[must_use]
pub fn selected_muscle_options(filters: &[FilterRule]) -> Vec<&'static str> {
    let Some(rule) = filters
        .iter()
        .find(|f| f.field == FilterField::TargetMuscles)
    else {
        return vec![];
    };
    MUSCLE_OPTIONS
        .iter()
        .filter(|o| {
            o.filter_names
                .iter()
                .any(|name| rule.values.iter().any(|v| v == name))
        })
        .map(|o| o.id)
        .collect()
}
