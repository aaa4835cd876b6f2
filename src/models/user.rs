use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::models::meal::MealPlan;
use crate::models::workout::WorkoutEntry;

/// Direction towards the target weight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WeightDirection {
    Lose,
    Gain,
    AtGoal,
}

/// Snapshot of weight progress for display
#[derive(Debug, Clone)]
pub struct WeightProgress {
    pub current_kg: f64,
    pub target_kg: f64,
    pub difference_kg: f64,
    pub direction: WeightDirection,
}

impl WeightProgress {
    pub fn message(&self) -> String {
        match self.direction {
            WeightDirection::AtGoal => {
                "Congratulations, you're at your target weight!".to_string()
            }
            WeightDirection::Lose => format!(
                "Keep going, {:.1}kg to lose to reach your goal",
                self.difference_kg
            ),
            WeightDirection::Gain => format!(
                "Keep going, {:.1}kg to gain to reach your goal",
                self.difference_kg
            ),
        }
    }
}

/// The persisted per-user profile document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub username: String,
    pub name: String,
    pub age: u32,
    pub weight_kg: f64,
    pub target_weight_kg: f64,
    pub weekly_workout_goal: u32,
    #[serde(default)]
    pub workouts: Vec<WorkoutEntry>,
    #[serde(default)]
    pub meals: Vec<MealPlan>,
    pub created_at: DateTime<Utc>,
    pub last_login: DateTime<Utc>,
}

impl UserProfile {
    /// Create a fresh profile. The target weight defaults to the current
    /// weight when not given.
    pub fn new(
        username: String,
        name: String,
        age: u32,
        weight_kg: f64,
        target_weight_kg: Option<f64>,
    ) -> Self {
        let now = Utc::now();
        Self {
            username,
            name,
            age,
            target_weight_kg: target_weight_kg.unwrap_or(weight_kg),
            weight_kg,
            weekly_workout_goal: 3,
            workouts: Vec::new(),
            meals: Vec::new(),
            created_at: now,
            last_login: now,
        }
    }

    /// Append a workout to the log
    pub fn add_workout(&mut self, entry: WorkoutEntry) {
        self.workouts.push(entry);
    }

    /// Append a saved meal plan
    pub fn add_meal_plan(&mut self, plan: MealPlan) {
        self.meals.push(plan);
    }

    pub fn update_weight(&mut self, new_weight_kg: f64) {
        self.weight_kg = new_weight_kg;
    }

    pub fn touch_last_login(&mut self) {
        self.last_login = Utc::now();
    }

    /// Total logged workout time in minutes
    pub fn total_workout_minutes(&self) -> u32 {
        self.workouts
            .iter()
            .filter_map(|w| w.duration_minutes)
            .sum()
    }

    /// Total estimated calories burned across the log
    pub fn total_calories_burned(&self) -> u32 {
        self.workouts
            .iter()
            .filter_map(|w| w.calories_burned)
            .sum()
    }

    /// Workout counts per category, ordered by category name
    pub fn workouts_by_category(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for workout in &self.workouts {
            *counts.entry(workout.category.clone()).or_insert(0) += 1;
        }
        counts
    }

    pub fn last_workout(&self) -> Option<&WorkoutEntry> {
        self.workouts.last()
    }

    pub fn weight_progress(&self) -> WeightProgress {
        let difference = (self.weight_kg - self.target_weight_kg).abs();
        let direction = if difference < f64::EPSILON {
            WeightDirection::AtGoal
        } else if self.weight_kg > self.target_weight_kg {
            WeightDirection::Lose
        } else {
            WeightDirection::Gain
        };

        WeightProgress {
            current_kg: self.weight_kg,
            target_kg: self.target_weight_kg,
            difference_kg: difference,
            direction,
        }
    }
}
