use std::sync::LazyLock;

use crate::{Exercise, ExerciseID};

/// Compile-time form of a catalog exercise.
struct Entry {
    id: &'static str,
    name: &'static str,
    other_names: Option<&'static str>,
    image: Option<&'static str>,
    description: Option<&'static str>,
    target_muscles: &'static [&'static str],
    equipment: &'static str,
}

impl From<&Entry> for Exercise {
    fn from(value: &Entry) -> Self {
        Exercise {
            id: value.id.into(),
            name: value.name.to_string(),
            other_names: value.other_names.map(ToString::to_string),
            image: value.image.map(ToString::to_string),
            description: value.description.map(ToString::to_string),
            target_muscles: value
                .target_muscles
                .iter()
                .map(ToString::to_string)
                .collect(),
            equipment: value.equipment.to_string(),
        }
    }
}

static EXERCISES: LazyLock<Vec<Exercise>> =
    LazyLock::new(|| ENTRIES.iter().map(Exercise::from).collect());

/// All bundled exercises in catalog order.
#[must_use]
pub fn exercises() -> &'static [Exercise] {
    &EXERCISES
}

#[must_use]
pub fn find(id: &ExerciseID) -> Option<&'static Exercise> {
    EXERCISES.iter().find(|e| e.id == *id)
}

/// Distinct equipment labels in order of first appearance.
#[must_use]
pub fn equipment_labels() -> Vec<&'static str> {
    distinct(EXERCISES.iter().map(|e| e.equipment.as_str()))
}

/// Distinct target muscle labels in order of first appearance.
#[must_use]
pub fn muscle_labels() -> Vec<&'static str> {
    distinct(
        EXERCISES
            .iter()
            .flat_map(|e| e.target_muscles.iter().map(String::as_str)),
    )
}

fn distinct<'a>(labels: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut result: Vec<&str> = vec![];
    for label in labels {
        if !label.is_empty() && !result.contains(&label) {
            result.push(label);
        }
    }
    result
}

const ENTRIES: [Entry; 87] = [
    Entry {
        id: "1",
        name: "بارفیکس خوابیده",
        other_names: Some("Inverted Row"),
        image: Some("https://liftmanual.com/wp-content/uploads/2023/04/inverted-row.jpg"),
        description: Some(
            "این تمرین برای تقویت عضلات ذوزنقه‌ای بسیار موثر است. <a href=\"https://musclewiki.com/fa-ir/smith-machineexplore/...\" target=\"_blank\" rel=\"noopener noreferrer\">اینجا کلیک کنید</a>.",
        ),
        target_muscles: &["ذوزنقه‌ای"],
        equipment: "دستگاه",
    },
    Entry {
        id: "2",
        name: "زیربغل سیمکش دسته وی",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["ذوزنقه‌ای"],
        equipment: "دستگاه",
    },
    Entry {
        id: "3",
        name: "پشت بازو دمبل تک خوابیده",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["پشت بازو"],
        equipment: "دمبل",
    },
    Entry {
        id: "4",
        name: "زیربغل سیمکش دست باز",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["زیربغل / لت"],
        equipment: "دستگاه",
    },
    Entry {
        id: "5",
        name: "پرس پا دستگاه",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["همسترینگ"],
        equipment: "دستگاه",
    },
    Entry {
        id: "6",
        name: "نشر جلو دمبل",
        other_names: Some("Dumbbell Front Raise"),
        image: Some("https://liftmanual.com/wp-content/uploads/2023/04/dumbbell-seated-front-raise.jpg"),
        description: None,
        target_muscles: &["سرشانه"],
        equipment: "دمبل",
    },
    Entry {
        id: "7",
        name: "نشر جلو صفحه",
        other_names: Some("Plate Front Raise"),
        image: None,
        description: None,
        target_muscles: &["سرشانه"],
        equipment: "صفحه",
    },
    Entry {
        id: "8",
        name: "Dumbbell Wrist Curl",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["ساعد"],
        equipment: "دمبل",
    },
    Entry {
        id: "9",
        name: "قایقی",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["ذوزنقه‌ای"],
        equipment: "دستگاه",
    },
    Entry {
        id: "10",
        name: "جلوبازو سیمکش طنابی",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["جلو بازو"],
        equipment: "دستگاه",
    },
    Entry {
        id: "11",
        name: "دستگاه اچ",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["ذوزنقه‌ای", "زیربغل / لت"],
        equipment: "دستگاه",
    },
    Entry {
        id: "12",
        name: "ساق پا دستگاه",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["ساق"],
        equipment: "دستگاه",
    },
    Entry {
        id: "13",
        name: "زیربغل خم دمبل جفت",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["ذوزنقه‌ای", "زیربغل / لت"],
        equipment: "دمبل",
    },
    Entry {
        id: "14",
        name: "پول اور طنابی",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["زیربغل / لت"],
        equipment: "دستگاه",
    },
    Entry {
        id: "15",
        name: "جلوبازو دمبل داخل",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["جلو بازو"],
        equipment: "دمبل",
    },
    Entry {
        id: "16",
        name: "فلای بک",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["سرشانه"],
        equipment: "دستگاه",
    },
    Entry {
        id: "17",
        name: "جلوبازو هالتر",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["جلو بازو"],
        equipment: "هالتر",
    },
    Entry {
        id: "18",
        name: "جلوبازو سیمکش دسته صاف",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["جلو بازو"],
        equipment: "دستگاه",
    },
    Entry {
        id: "19",
        name: "زیربغل سیمکش دسته موازی",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["زیربغل / لت"],
        equipment: "دستگاه",
    },
    Entry {
        id: "20",
        name: "پرس بالا سینه دمبل",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["بالا سینه"],
        equipment: "دمبل",
    },
    Entry {
        id: "21",
        name: "فیس پول طنابی",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["ذوزنقه‌ای", "سرشانه"],
        equipment: "دستگاه",
    },
    Entry {
        id: "22",
        name: "جلوبازو تمرکزی",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["جلو بازو"],
        equipment: "دمبل",
    },
    Entry {
        id: "23",
        name: "بارفیکس کمکی",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["زیربغل / لت"],
        equipment: "دستگاه",
    },
    Entry {
        id: "24",
        name: "پرس سر شانه دمبل نشسته",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["سرشانه"],
        equipment: "دمبل",
    },
    Entry {
        id: "25",
        name: "طناب",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["ساق"],
        equipment: "وزن بدن",
    },
    Entry {
        id: "26",
        name: "اسکات پرشی",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["باسن"],
        equipment: "وزن بدن",
    },
    Entry {
        id: "27",
        name: "اسکات با دیوار",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["جلو ران"],
        equipment: "وزن بدن",
    },
    Entry {
        id: "28",
        name: "پشت بازو دمبل خوابیده (روبه داخل)",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["پشت بازو"],
        equipment: "دمبل",
    },
    Entry {
        id: "29",
        name: "نشر جانب دمبل نشسته",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["سرشانه"],
        equipment: "دمبل",
    },
    Entry {
        id: "30",
        name: "کول هالتر",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["سرشانه", "کول"],
        equipment: "هالتر",
    },
    Entry {
        id: "31",
        name: "فلای سیمکش خوابیده",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["سینه"],
        equipment: "دستگاه",
    },
    Entry {
        id: "32",
        name: "پشت پا دستگاه خوابیده",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["همسترینگ"],
        equipment: "دستگاه",
    },
    Entry {
        id: "33",
        name: "نشر جلو هالتر میز شیب‌دار",
        other_names: Some("Barbell Incline Lying Rear Delt Raise"),
        image: Some("https://www.lyfta.app/_next/image?url=%2Fthumbnails%2F37221201.jpg&w=3840&q=75"),
        description: None,
        target_muscles: &["سرشانه"],
        equipment: "هالتر",
    },
    Entry {
        id: "34",
        name: "دوچرخه ثابت",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["باسن", "ساق"],
        equipment: "دستگاه",
    },
    Entry {
        id: "35",
        name: "سر شونه دستگاه",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["سرشانه"],
        equipment: "دستگاه",
    },
    Entry {
        id: "36",
        name: "پشت پا دستگاه نشسته",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["جلو ران"],
        equipment: "دستگاه",
    },
    Entry {
        id: "37",
        name: "سرشونه سیمکش چرخش داخلی",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["سرشانه"],
        equipment: "دستگاه",
    },
    Entry {
        id: "38",
        name: "لانگ بلغاری",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["باسن", "جلو ران"],
        equipment: "وزن بدن",
    },
    Entry {
        id: "39",
        name: "نشر جلو هالتر",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["سرشانه"],
        equipment: "دمبل",
    },
    Entry {
        id: "40",
        name: "پشت بازو بالاسر طنابی",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["پشت بازو"],
        equipment: "دستگاه",
    },
    Entry {
        id: "41",
        name: "خیاطه داخل ران",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["داخل ران"],
        equipment: "دستگاه",
    },
    Entry {
        id: "42",
        name: "زیربغل سیمکش تک دست",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["زیربغل / لت"],
        equipment: "دستگاه",
    },
    Entry {
        id: "43",
        name: "هاگ پا دستگاه",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["جلو ران"],
        equipment: "دستگاه",
    },
    Entry {
        id: "44",
        name: "نشر جانب سیمکش",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["سرشانه"],
        equipment: "دستگاه",
    },
    Entry {
        id: "45",
        name: "دد باگ",
        other_names: Some("Dead Bug"),
        image: None,
        description: None,
        target_muscles: &["شکم"],
        equipment: "وزن بدن",
    },
    Entry {
        id: "46",
        name: "پرس سینه هالتر",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["سینه"],
        equipment: "هالتر",
    },
    Entry {
        id: "47",
        name: "ساعد هالتر",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["ساعد"],
        equipment: "هالتر",
    },
    Entry {
        id: "48",
        name: "پول‌اور دستگاه",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["زیربغل / لت"],
        equipment: "دستگاه",
    },
    Entry {
        id: "49",
        name: "نشر خم دمبل خوابیده",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["سرشانه"],
        equipment: "دمبل",
    },
    Entry {
        id: "50",
        name: "فلای سیمکش میز شیبدار",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["بالا سینه"],
        equipment: "دستگاه",
    },
    Entry {
        id: "51",
        name: "فلای بک سیمکش",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["سرشانه"],
        equipment: "دستگاه",
    },
    Entry {
        id: "52",
        name: "زیربغل دستگاه قیچی",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["زیربغل / لت"],
        equipment: "دستگاه",
    },
    Entry {
        id: "53",
        name: "دیپ پارالل",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["سینه", "پشت بازو"],
        equipment: "دستگاه",
    },
    Entry {
        id: "54",
        name: "بارفیکس دست باز",
        other_names: Some("پول آپ"),
        image: None,
        description: None,
        target_muscles: &["زیربغل / لت"],
        equipment: "دستگاه",
    },
    Entry {
        id: "55",
        name: "جلوبازی فیگوری سیمکش",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["جلو بازو"],
        equipment: "دستگاه",
    },
    Entry {
        id: "56",
        name: "جلو پا دستگاه",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["جلو ران"],
        equipment: "دستگاه",
    },
    Entry {
        id: "57",
        name: "پرس سینه اسمیت",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["سینه"],
        equipment: "دستگاه",
    },
    Entry {
        id: "58",
        name: "سرشونه دمبل سه گانه",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["سرشانه"],
        equipment: "دمبل",
    },
    Entry {
        id: "59",
        name: "کرانچ لمس پاشنه",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["پهلو"],
        equipment: "وزن بدن",
    },
    Entry {
        id: "60",
        name: "شنا دست جمع",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["سینه"],
        equipment: "وزن بدن",
    },
    Entry {
        id: "61",
        name: "بالا سینه هالتر",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["بالا سینه"],
        equipment: "هالتر",
    },
    Entry {
        id: "62",
        name: "بالا سینه دمبل",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["بالا سینه"],
        equipment: "دمبل",
    },
    Entry {
        id: "63",
        name: "زیر شکم پارالل",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["شکم"],
        equipment: "دستگاه",
    },
    Entry {
        id: "64",
        name: "اسکات با اسمیت",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["باسن", "جلو ران"],
        equipment: "دمبل",
    },
    Entry {
        id: "65",
        name: "پرس سینه دمبل",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["سینه"],
        equipment: "دمبل",
    },
    Entry {
        id: "66",
        name: "پلانک بالا پایین",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["شکم"],
        equipment: "وزن بدن",
    },
    Entry {
        id: "67",
        name: "کرانچ",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["شکم"],
        equipment: "وزن بدن",
    },
    Entry {
        id: "68",
        name: "کراس اور از پایین",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["بالا سینه"],
        equipment: "دستگاه",
    },
    Entry {
        id: "69",
        name: "کراس اور از بالا",
        other_names: None,
        image: Some("/src/assets/images/High-Cable-Crossover.gif"),
        description: None,
        target_muscles: &["زیرسینه"],
        equipment: "دستگاه",
    },
    Entry {
        id: "70",
        name: "لانگ بلغاری با اسمیت",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["باسن", "جلو ران"],
        equipment: "دستگاه",
    },
    Entry {
        id: "71",
        name: "فلای سینه دستگاه",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["سینه"],
        equipment: "دستگاه",
    },
    Entry {
        id: "72",
        name: "زیرشکم روی نیمکت",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["شکم"],
        equipment: "وزن بدن",
    },
    Entry {
        id: "73",
        name: "کراس اور متقاطع",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["سینه"],
        equipment: "دستگاه",
    },
    Entry {
        id: "74",
        name: "پشت بازو سیمکش طنابی",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["پشت بازو"],
        equipment: "دستگاه",
    },
    Entry {
        id: "75",
        name: "لانگ جلو دمبل",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["جلو ران"],
        equipment: "دمبل",
    },
    Entry {
        id: "76",
        name: "کرانچ دوچرخه",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["پهلو"],
        equipment: "وزن بدن",
    },
    Entry {
        id: "77",
        name: "پرس سینه دمبل چسبیده",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["سینه"],
        equipment: "دمبل",
    },
    Entry {
        id: "78",
        name: "شنا سوئدی",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["سینه"],
        equipment: "وزن بدن",
    },
    Entry {
        id: "79",
        name: "دیپ نیمکت",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["پشت بازو"],
        equipment: "وزن بدن",
    },
    Entry {
        id: "80",
        name: "پلانک چرخشی",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["شکم"],
        equipment: "وزن بدن",
    },
    Entry {
        id: "81",
        name: "کوهنوردی",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["شکم"],
        equipment: "وزن بدن",
    },
    Entry {
        id: "82",
        name: "جلو بازو دمبل",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["جلو بازو"],
        equipment: "دمبل",
    },
    Entry {
        id: "83",
        name: "کرانچ معکوس (قیچی)",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["شکم"],
        equipment: "وزن بدن",
    },
    Entry {
        id: "84",
        name: "قفسه سینه دمبل",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["سینه"],
        equipment: "دمبل",
    },
    Entry {
        id: "85",
        name: "پلانک لمس شانه",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["شکم"],
        equipment: "وزن بدن",
    },
    Entry {
        id: "86",
        name: "پلانک",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["شکم"],
        equipment: "وزن بدن",
    },
    Entry {
        id: "87",
        name: "سگ پرنده",
        other_names: None,
        image: None,
        description: None,
        target_muscles: &["باسن", "شکم", "همسترینگ"],
        equipment: "وزن بدن",
    },
];
