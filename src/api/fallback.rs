// Built-in data served when the wger API is unreachable. Small on purpose:
// enough to keep every workflow usable offline.

use crate::api::{ExerciseCategory, ExerciseRecord, NutritionRecord};

/// Default exercise categories mirroring the API's taxonomy
pub fn categories() -> Vec<ExerciseCategory> {
    [
        (1, "Abs"),
        (2, "Arms"),
        (3, "Back"),
        (4, "Calves"),
        (5, "Chest"),
        (6, "Legs"),
        (7, "Shoulders"),
        (8, "Cardio"),
    ]
    .into_iter()
    .map(|(id, name)| ExerciseCategory {
        id,
        name: name.to_string(),
    })
    .collect()
}

/// A couple of equipment-free exercises per category
pub fn exercises(category: &str) -> Vec<ExerciseRecord> {
    let entries: &[(&str, &str)] = match category {
        "Abs" => &[
            ("Crunches", "Lie on your back, knees bent, and curl your shoulders towards your hips."),
            ("Plank", "Hold a straight line from head to heels on your forearms."),
        ],
        "Arms" => &[
            ("Push Ups", "Lower your chest to the floor and press back up, elbows close to the body."),
            ("Tricep Dips", "Lower and raise yourself on the edge of a sturdy chair."),
        ],
        "Back" => &[
            ("Superman", "Lie face down and lift arms and legs off the floor together."),
            ("Reverse Snow Angels", "Face down, sweep straight arms from hips to overhead."),
        ],
        "Calves" => &[
            ("Calf Raises", "Rise onto the balls of your feet and lower slowly."),
        ],
        "Chest" => &[
            ("Push Ups", "Lower your chest to the floor and press back up."),
            ("Wide Push Ups", "Push ups with hands set wider than the shoulders."),
        ],
        "Legs" => &[
            ("Squats", "Sit back and down as if onto a chair, then drive up through the heels."),
            ("Lunges", "Step forward and lower the back knee towards the floor."),
        ],
        "Shoulders" => &[
            ("Pike Push Ups", "Push ups with hips high, lowering the crown of the head to the floor."),
        ],
        "Cardio" => &[
            ("Jumping Jacks", "Jump feet out while raising arms overhead, then back together."),
            ("High Knees", "Run in place driving the knees to hip height."),
        ],
        _ => &[],
    };

    entries
        .iter()
        .map(|(name, description)| ExerciseRecord {
            name: name.to_string(),
            category: category.to_string(),
            equipment: Vec::new(),
            description: description.to_string(),
        })
        .collect()
}

/// Built-in food table, matched by substring against the query
pub fn foods(query: &str) -> Vec<NutritionRecord> {
    const TABLE: &[(&str, &str, f64, f64, f64, f64)] = &[
        ("apple", "Apple", 52.0, 0.3, 14.0, 0.2),
        ("chicken", "Chicken Breast", 165.0, 31.0, 0.0, 3.6),
        ("rice", "White Rice", 130.0, 2.7, 28.0, 0.3),
        ("banana", "Banana", 89.0, 1.1, 23.0, 0.3),
        ("potato", "Potatoes", 77.0, 2.0, 17.0, 0.1),
        ("salmon", "Salmon", 208.0, 22.0, 0.0, 12.0),
    ];

    let needle = query.trim().to_lowercase();

    let matches: Vec<NutritionRecord> = TABLE
        .iter()
        .filter(|(key, ..)| needle.contains(key))
        .map(|(_, name, kcal, protein, carbs, fat)| NutritionRecord {
            name: name.to_string(),
            kcal_per_100g: *kcal,
            protein_g: *protein,
            carbs_g: *carbs,
            fat_g: *fat,
        })
        .collect();

    if !matches.is_empty() {
        return matches;
    }

    // Generic entry so the search still shows something useful
    vec![NutritionRecord {
        name: title_case(query),
        kcal_per_100g: 100.0,
        protein_g: 5.0,
        carbs_g: 15.0,
        fat_g: 2.0,
    }]
}

fn title_case(s: &str) -> String {
    s.trim()
        .split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
