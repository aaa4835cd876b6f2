pub mod meal;
pub mod user;
pub mod workout;

pub use meal::{CalorieStatus, MealPlan, MealSlot, NutritionGoal};
pub use user::{UserProfile, WeightDirection, WeightProgress};
pub use workout::{Intensity, WorkoutEntry, WorkoutSource};
