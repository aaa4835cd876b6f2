use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Meal slots across the day
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Breakfast,
        MealSlot::Lunch,
        MealSlot::Dinner,
        MealSlot::Snack,
    ];
}

impl std::fmt::Display for MealSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MealSlot::Breakfast => write!(f, "Breakfast"),
            MealSlot::Lunch => write!(f, "Lunch"),
            MealSlot::Dinner => write!(f, "Dinner"),
            MealSlot::Snack => write!(f, "Snack"),
        }
    }
}

/// Nutrition goal driving calorie targets and suggestions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NutritionGoal {
    WeightLoss,
    MuscleGain,
    Maintenance,
    Endurance,
}

impl NutritionGoal {
    /// Default daily calorie target for the goal
    pub fn default_calories(self) -> u32 {
        match self {
            NutritionGoal::WeightLoss => 1800,
            NutritionGoal::MuscleGain => 2500,
            NutritionGoal::Maintenance => 2200,
            NutritionGoal::Endurance => 2800,
        }
    }
}

impl std::fmt::Display for NutritionGoal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NutritionGoal::WeightLoss => write!(f, "Weight loss"),
            NutritionGoal::MuscleGain => write!(f, "Muscle gain"),
            NutritionGoal::Maintenance => write!(f, "Maintenance"),
            NutritionGoal::Endurance => write!(f, "Endurance"),
        }
    }
}

impl std::str::FromStr for NutritionGoal {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(' ', "_").as_str() {
            "weight_loss" => Ok(NutritionGoal::WeightLoss),
            "muscle_gain" => Ok(NutritionGoal::MuscleGain),
            "maintenance" => Ok(NutritionGoal::Maintenance),
            "endurance" => Ok(NutritionGoal::Endurance),
            _ => Err(anyhow::anyhow!("Invalid nutrition goal: {}", s)),
        }
    }
}

/// How a plan's estimated calories compare to its target
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalorieStatus {
    OnTrack,
    OverTarget(u32),
    UnderTarget(u32),
}

impl CalorieStatus {
    pub fn message(&self) -> String {
        match self {
            CalorieStatus::OnTrack => "On track with your calorie goal".to_string(),
            CalorieStatus::OverTarget(by) => {
                format!("Over target by {} calories, consider lighter meals", by)
            }
            CalorieStatus::UnderTarget(by) => {
                format!("Under target by {} calories, add a healthy snack", by)
            }
        }
    }
}

/// A saved daily meal plan
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MealPlan {
    pub day: u32,
    pub goal: NutritionGoal,
    pub target_calories: u32,
    pub meals: BTreeMap<MealSlot, String>,
    pub created_at: DateTime<Utc>,
}

impl MealPlan {
    pub fn new(day: u32, goal: NutritionGoal) -> Self {
        Self {
            day,
            goal,
            target_calories: goal.default_calories(),
            meals: BTreeMap::new(),
            created_at: Utc::now(),
        }
    }

    pub fn set_meal(&mut self, slot: MealSlot, food: String) {
        self.meals.insert(slot, food.trim().to_string());
    }

    /// Whether all three main meals are planned
    pub fn is_complete(&self) -> bool {
        [MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner]
            .iter()
            .all(|slot| self.meals.contains_key(slot))
    }

    /// Rough daily calorie estimate from per-serving values for common foods.
    /// Unknown items count a flat 250.
    pub fn estimate_calories(&self) -> u32 {
        self.meals
            .values()
            .map(|food| calorie_estimate(food))
            .sum()
    }

    pub fn calorie_status(&self) -> CalorieStatus {
        let estimated = self.estimate_calories() as i64;
        let target = self.target_calories as i64;
        let difference = estimated - target;

        if difference.abs() <= 100 {
            CalorieStatus::OnTrack
        } else if difference > 0 {
            CalorieStatus::OverTarget(difference as u32)
        } else {
            CalorieStatus::UnderTarget((-difference) as u32)
        }
    }
}

/// Suggested foods per slot for a nutrition goal
pub fn suggestions_for(slot: MealSlot, goal: NutritionGoal) -> &'static [&'static str] {
    match (goal, slot) {
        (NutritionGoal::WeightLoss, MealSlot::Breakfast) => {
            &["Oatmeal with fruit", "Greek yogurt", "Smoothie bowl"]
        }
        (NutritionGoal::WeightLoss, MealSlot::Lunch) => {
            &["Garden salad with protein", "Soup and bread", "Chicken salad"]
        }
        (NutritionGoal::WeightLoss, MealSlot::Dinner) => {
            &["Grilled chicken with vegetables", "Grilled salmon", "Stir fry"]
        }
        (NutritionGoal::WeightLoss, MealSlot::Snack) => &["Apple with nuts", "Greek yogurt"],

        (NutritionGoal::MuscleGain, MealSlot::Breakfast) => {
            &["Protein smoothie with banana", "Eggs with toast", "Pancakes"]
        }
        (NutritionGoal::MuscleGain, MealSlot::Lunch) => {
            &["Chicken rice bowl", "Burger", "Pasta"]
        }
        (NutritionGoal::MuscleGain, MealSlot::Dinner) => {
            &["Salmon with sweet potato", "Lean beef", "Chicken stir-fry"]
        }
        (NutritionGoal::MuscleGain, MealSlot::Snack) => {
            &["Greek yogurt with nuts", "Protein bar"]
        }

        (_, MealSlot::Breakfast) => &["Eggs with toast", "Oatmeal with fruit", "Cereal"],
        (_, MealSlot::Lunch) => &["Sandwich with side salad", "Rice bowl", "Wrap"],
        (_, MealSlot::Dinner) => {
            &["Balanced dinner plate", "Pasta with vegetables", "Grilled salmon"]
        }
        (_, MealSlot::Snack) => &["Banana", "Crackers", "Nuts"],
    }
}

/// Per-serving calorie estimates for common foods
fn calorie_estimate(food: &str) -> u32 {
    let key = food.trim().to_lowercase();

    // Match on the most specific keyword present in the item name
    const TABLE: &[(&str, u32)] = &[
        ("oatmeal", 150),
        ("eggs", 140),
        ("toast", 80),
        ("pancakes", 200),
        ("cereal", 120),
        ("yogurt", 100),
        ("smoothie", 180),
        ("salad", 200),
        ("sandwich", 300),
        ("soup", 150),
        ("pasta", 350),
        ("rice", 400),
        ("wrap", 280),
        ("pizza", 450),
        ("burger", 500),
        ("chicken", 300),
        ("fish", 250),
        ("beef", 400),
        ("pork", 350),
        ("stir fry", 280),
        ("stir-fry", 280),
        ("salmon", 300),
        ("apple", 80),
        ("nuts", 180),
        ("protein bar", 200),
        ("chips", 150),
        ("crackers", 120),
        ("cheese", 100),
        ("banana", 90),
    ];

    TABLE
        .iter()
        .find(|(name, _)| key.contains(name))
        .map(|(_, calories)| *calories)
        .unwrap_or(250)
}
