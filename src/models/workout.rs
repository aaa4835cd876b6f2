use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Where a logged workout came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WorkoutSource {
    /// Entered free-form by the user
    Custom,
    /// Picked from the exercise catalog
    Catalog,
}

/// Workout intensity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    Low,
    Medium,
    High,
}

impl Intensity {
    fn multiplier(self) -> f64 {
        match self {
            Intensity::Low => 0.8,
            Intensity::Medium => 1.0,
            Intensity::High => 1.3,
        }
    }
}

impl std::fmt::Display for Intensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intensity::Low => write!(f, "low"),
            Intensity::Medium => write!(f, "medium"),
            Intensity::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for Intensity {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Intensity::Low),
            "medium" => Ok(Intensity::Medium),
            "high" => Ok(Intensity::High),
            _ => Err(anyhow::anyhow!("Invalid intensity: {}", s)),
        }
    }
}

/// A single logged workout. Append-only once stored in a profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutEntry {
    pub id: String,
    pub source: WorkoutSource,
    pub exercise: String,
    pub category: String,
    pub sets: Option<u32>,
    pub reps: Option<u32>,
    pub duration_minutes: Option<u32>,
    pub intensity: Intensity,
    pub calories_burned: Option<u32>,
    pub logged_at: DateTime<Utc>,
}

impl WorkoutEntry {
    /// Create a new entry with a generated ID and the current timestamp.
    /// Calories are estimated from the exercise type when a duration is known.
    pub fn new(
        source: WorkoutSource,
        exercise: String,
        category: String,
        sets: Option<u32>,
        reps: Option<u32>,
        duration_minutes: Option<u32>,
        intensity: Intensity,
    ) -> Self {
        let calories_burned =
            duration_minutes.map(|minutes| estimate_calories(&exercise, minutes, intensity));

        Self {
            id: Uuid::new_v4().to_string(),
            source,
            exercise,
            category,
            sets,
            reps,
            duration_minutes,
            intensity,
            calories_burned,
            logged_at: Utc::now(),
        }
    }

    /// One-line summary for list output
    pub fn summary(&self) -> String {
        let mut parts = vec![self.exercise.clone()];
        if let (Some(sets), Some(reps)) = (self.sets, self.reps) {
            parts.push(format!("{}x{}", sets, reps));
        } else if let Some(reps) = self.reps {
            parts.push(format!("{} reps", reps));
        }
        if let Some(minutes) = self.duration_minutes {
            parts.push(format!("{}min", minutes));
        }
        parts.push(format!("({})", self.intensity));
        parts.join(" - ")
    }
}

/// Estimate calories burned from per-minute burn rates for known exercises.
/// Unknown exercises fall back to a modest default rate.
fn estimate_calories(exercise: &str, duration_minutes: u32, intensity: Intensity) -> u32 {
    let key = exercise.trim().to_lowercase().replace(' ', "_");

    let base_rate: u32 = match key.as_str() {
        // Cardio
        "running" => 12,
        "cycling" => 10,
        "swimming" => 11,
        "walking" => 5,
        "dancing" => 7,
        "jumping_jacks" => 8,
        // Strength
        "push_ups" | "pushups" => 6,
        "squats" => 7,
        "deadlifts" => 8,
        "bench_press" => 6,
        "pull_ups" | "pullups" => 8,
        "weight_lifting" => 7,
        // Flexibility
        "yoga" => 3,
        "stretching" => 2,
        "pilates" => 4,
        "tai_chi" => 3,
        _ => 5,
    };

    let total = (base_rate as f64 * duration_minutes as f64 * intensity.multiplier()) as u32;
    total.max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = WorkoutEntry::new(
            WorkoutSource::Custom,
            "Running".to_string(),
            "cardio".to_string(),
            None,
            None,
            Some(30),
            Intensity::Medium,
        );

        assert_eq!(entry.exercise, "Running");
        assert_eq!(entry.duration_minutes, Some(30));
        assert!(!entry.id.is_empty());
        // 12 cal/min * 30 min * 1.0
        assert_eq!(entry.calories_burned, Some(360));
    }

    #[test]
    fn test_no_duration_means_no_calorie_estimate() {
        let entry = WorkoutEntry::new(
            WorkoutSource::Custom,
            "Pushups".to_string(),
            "strength".to_string(),
            None,
            Some(20),
            None,
            Intensity::Medium,
        );

        assert_eq!(entry.calories_burned, None);
        assert_eq!(entry.reps, Some(20));
    }

    #[test]
    fn test_intensity_scales_calories() {
        let low = estimate_calories("running", 30, Intensity::Low);
        let high = estimate_calories("running", 30, Intensity::High);
        assert!(low < high);
    }

    #[test]
    fn test_unknown_exercise_uses_default_rate() {
        // 5 cal/min default
        assert_eq!(estimate_calories("underwater basket weaving", 10, Intensity::Medium), 50);
    }

    #[test]
    fn test_intensity_parsing() {
        assert_eq!("HIGH".parse::<Intensity>().unwrap(), Intensity::High);
        assert_eq!(" low ".parse::<Intensity>().unwrap(), Intensity::Low);
        assert!("extreme".parse::<Intensity>().is_err());
    }

    #[test]
    fn test_summary_includes_sets_and_reps() {
        let entry = WorkoutEntry::new(
            WorkoutSource::Custom,
            "Squats".to_string(),
            "strength".to_string(),
            Some(3),
            Some(12),
            None,
            Intensity::High,
        );
        assert!(entry.summary().contains("3x12"));
        assert!(entry.summary().contains("high"));
    }
}
