use anyhow::{Context, Result};
use console::style;
use dialoguer::{Confirm, Input, Select};
use rand::seq::SliceRandom;

use crate::api::{ExerciseApiClient, ExerciseRecord, Fetched, NutritionRecord};
use crate::auth::Session;
use crate::auth::validate::{validate_weekly_goal, validate_weight};
use crate::config::Config;
use crate::menu::{report_failure, report_notice, report_success, spinner};
use crate::models::{
    meal, Intensity, MealPlan, MealSlot, NutritionGoal, UserProfile, WorkoutEntry, WorkoutSource,
};
use crate::storage::ProfileStore;

/// Main menu loop for an authenticated session. The profile document is
/// reloaded from disk on every iteration so each action sees the latest
/// persisted state without requiring a fresh login.
pub async fn run(
    session: &Session,
    profiles: &ProfileStore,
    api: &ExerciseApiClient,
    config: &Config,
) -> Result<()> {
    println!();
    println!(
        "{}",
        style(format!("Welcome, {}!", session.display_name)).bold()
    );

    loop {
        let profile = match profiles.load(&session.username)? {
            Some(profile) => profile,
            None => {
                report_failure("Your profile could not be found; please log in again");
                return Ok(());
            }
        };

        println!();
        let choice = Select::new()
            .with_prompt("Main menu")
            .items(&[
                "Browse exercises",
                "Search nutrition",
                "Log custom workout",
                "Plan meals",
                "View progress",
                "Update profile",
                "Logout",
            ])
            .default(0)
            .interact()?;

        let result = match choice {
            0 => browse_exercises(api, profiles, session, config).await,
            1 => search_nutrition(api, config).await,
            2 => log_custom_workout(profiles, session),
            3 => plan_meals(&profile, profiles, session),
            4 => view_progress(&profile),
            5 => update_profile(profiles, session),
            _ => {
                println!("Goodbye, {}!", session.display_name);
                return Ok(());
            }
        };

        // Component failures are reported and the menu continues
        if let Err(error) = result {
            report_failure(&format!("{:#}", error));
        }
    }
}

/// Browse exercise categories and their exercises, optionally logging one
/// as a workout.
async fn browse_exercises(
    api: &ExerciseApiClient,
    profiles: &ProfileStore,
    session: &Session,
    config: &Config,
) -> Result<()> {
    println!();
    println!("{}", style("Exercise browser").bold());

    let bar = spinner("Loading exercise categories...");
    let categories = api.exercise_categories().await;
    bar.finish_and_clear();

    notice_if_fallback(categories.is_fallback());

    if categories.records.is_empty() {
        report_failure("No exercise categories available right now");
        return Ok(());
    }

    let names: Vec<&str> = categories.records.iter().map(|c| c.name.as_str()).collect();
    let index = Select::new()
        .with_prompt("Choose a category")
        .items(&names)
        .default(0)
        .interact()?;
    let category = &categories.records[index];

    let bar = spinner("Loading exercises...");
    let exercises = api
        .exercises_by_category(category, config.api.search_limit)
        .await;
    bar.finish_and_clear();

    notice_if_fallback(exercises.is_fallback());

    if exercises.records.is_empty() {
        report_failure(&format!("No exercises found for {}", category.name));
        return Ok(());
    }

    println!();
    for (i, exercise) in exercises.records.iter().enumerate() {
        println!("{}. {}", i + 1, style(&exercise.name).bold());
        println!("   Category: {}", exercise.category);
        if !exercise.equipment.is_empty() {
            println!("   Equipment: {}", exercise.equipment.join(", "));
        }
        println!("   {}", exercise.description);
    }

    let log_one = Confirm::new()
        .with_prompt("Log one of these exercises as a workout?")
        .default(false)
        .interact()?;

    if log_one {
        log_catalog_workout(&exercises, profiles, session)?;
    }

    Ok(())
}

/// Log a workout picked from the exercise catalog
fn log_catalog_workout(
    exercises: &Fetched<ExerciseRecord>,
    profiles: &ProfileStore,
    session: &Session,
) -> Result<()> {
    let names: Vec<&str> = exercises.records.iter().map(|e| e.name.as_str()).collect();
    let index = Select::new()
        .with_prompt("Which exercise?")
        .items(&names)
        .default(0)
        .interact()?;
    let exercise = &exercises.records[index];

    let details = prompt_workout_details()?;
    let entry = WorkoutEntry::new(
        WorkoutSource::Catalog,
        exercise.name.clone(),
        exercise.category.clone(),
        details.sets,
        details.reps,
        details.duration_minutes,
        details.intensity,
    );

    save_workout(entry, profiles, session)
}

/// Log a free-form workout not tied to the catalog
fn log_custom_workout(profiles: &ProfileStore, session: &Session) -> Result<()> {
    println!();
    println!("{}", style("Log custom workout").bold());

    let exercise: String = Input::new()
        .with_prompt("Workout name")
        .validate_with(|input: &String| -> Result<(), String> {
            if input.trim().is_empty() {
                Err("Workout name required".to_string())
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    let details = prompt_workout_details()?;
    let entry = WorkoutEntry::new(
        WorkoutSource::Custom,
        exercise.trim().to_string(),
        "custom".to_string(),
        details.sets,
        details.reps,
        details.duration_minutes,
        details.intensity,
    );

    save_workout(entry, profiles, session)
}

struct WorkoutDetails {
    sets: Option<u32>,
    reps: Option<u32>,
    duration_minutes: Option<u32>,
    intensity: Intensity,
}

fn prompt_workout_details() -> Result<WorkoutDetails> {
    let sets = prompt_optional_number("Sets (leave empty to skip)")?;
    let reps = prompt_optional_number("Reps (leave empty to skip)")?;
    let duration_minutes = prompt_optional_number("Duration in minutes (leave empty to skip)")?;

    let intensity = match Select::new()
        .with_prompt("Intensity")
        .items(&["low", "medium", "high"])
        .default(1)
        .interact()?
    {
        0 => Intensity::Low,
        2 => Intensity::High,
        _ => Intensity::Medium,
    };

    Ok(WorkoutDetails {
        sets,
        reps,
        duration_minutes,
        intensity,
    })
}

fn prompt_optional_number(prompt: &str) -> Result<Option<u32>> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .validate_with(|input: &String| -> Result<(), String> {
            let trimmed = input.trim();
            if trimmed.is_empty() || trimmed.parse::<u32>().is_ok() {
                Ok(())
            } else {
                Err("Please enter a whole number".to_string())
            }
        })
        .interact_text()?;

    Ok(input.trim().parse().ok())
}

fn save_workout(entry: WorkoutEntry, profiles: &ProfileStore, session: &Session) -> Result<()> {
    let summary = entry.summary();
    let calories = entry.calories_burned;

    profiles
        .update(&session.username, |profile| profile.add_workout(entry))
        .context("Failed to save workout")?;

    report_success(&format!("Workout logged: {}", summary));
    if let Some(calories) = calories {
        println!("   Estimated calories burned: {}", calories);
    }
    Ok(())
}

/// Search the nutrition database for a food
async fn search_nutrition(api: &ExerciseApiClient, config: &Config) -> Result<()> {
    println!();
    println!("{}", style("Nutrition search").bold());

    let query: String = Input::new()
        .with_prompt("Food to search for")
        .validate_with(|input: &String| -> Result<(), String> {
            if input.trim().is_empty() {
                Err("Please enter a food name".to_string())
            } else {
                Ok(())
            }
        })
        .interact_text()?;

    let bar = spinner("Searching nutrition database...");
    let foods = api.search_food(query.trim(), config.api.search_limit).await;
    bar.finish_and_clear();

    notice_if_fallback(foods.is_fallback());

    if foods.records.is_empty() {
        report_failure(&format!("No nutrition data found for '{}'", query.trim()));
        return Ok(());
    }

    println!();
    for (i, food) in foods.records.iter().enumerate() {
        print_nutrition_record(i + 1, food);
    }

    Ok(())
}

fn print_nutrition_record(index: usize, food: &NutritionRecord) {
    println!("{}. {}", index, style(&food.name).bold());
    println!("   Calories: {:.0} kcal/100g", food.kcal_per_100g);
    println!(
        "   Protein: {:.1}g | Carbs: {:.1}g | Fat: {:.1}g",
        food.protein_g, food.carbs_g, food.fat_g
    );
}

/// Build a daily meal plan from goal-based suggestions and save it
fn plan_meals(profile: &UserProfile, profiles: &ProfileStore, session: &Session) -> Result<()> {
    println!();
    println!("{}", style("Meal planning").bold());

    let goals = [
        NutritionGoal::WeightLoss,
        NutritionGoal::MuscleGain,
        NutritionGoal::Maintenance,
        NutritionGoal::Endurance,
    ];
    let goal_names: Vec<String> = goals.iter().map(|g| g.to_string()).collect();
    let goal = goals[Select::new()
        .with_prompt("Nutrition goal")
        .items(&goal_names)
        .default(2)
        .interact()?];

    let day = profile.meals.len() as u32 + 1;
    let mut plan = MealPlan::new(day, goal);
    let mut rng = rand::thread_rng();

    for slot in MealSlot::ALL {
        let options = meal::suggestions_for(slot, goal);
        let suggestion = options.choose(&mut rng).copied().unwrap_or("Chef's choice");

        let keep = Confirm::new()
            .with_prompt(format!("{}: {} - sound good?", slot, suggestion))
            .default(true)
            .interact()?;

        if keep {
            plan.set_meal(slot, suggestion.to_string());
        } else {
            let custom: String = Input::new()
                .with_prompt(format!("What would you like for {}?", slot))
                .validate_with(|input: &String| -> Result<(), String> {
                    if input.trim().is_empty() {
                        Err("Please enter a food".to_string())
                    } else {
                        Ok(())
                    }
                })
                .interact_text()?;
            plan.set_meal(slot, custom);
        }
    }

    println!();
    println!(
        "Estimated {} kcal against a {} kcal target",
        plan.estimate_calories(),
        plan.target_calories
    );
    report_notice(&plan.calorie_status().message());

    let save = Confirm::new()
        .with_prompt("Save this meal plan?")
        .default(true)
        .interact()?;

    if save {
        profiles
            .update(&session.username, |profile| profile.add_meal_plan(plan))
            .context("Failed to save meal plan")?;
        report_success(&format!("Meal plan for day {} saved", day));
    } else {
        println!("Meal plan not saved.");
    }

    Ok(())
}

/// Display the profile summary and activity statistics
fn view_progress(profile: &UserProfile) -> Result<()> {
    println!();
    println!("{}", style("Your fitness progress").bold());
    println!();

    println!("Profile: {}", profile.name);
    println!(
        "Member since: {}",
        profile.created_at.format("%B %d, %Y")
    );
    println!("Current weight: {:.1}kg", profile.weight_kg);
    println!("Target weight: {:.1}kg", profile.target_weight_kg);
    println!("Weekly goal: {} workouts", profile.weekly_workout_goal);
    println!("{}", profile.weight_progress().message());

    println!();
    println!("Workouts logged: {}", profile.workouts.len());
    println!("Total workout time: {} minutes", profile.total_workout_minutes());
    println!(
        "Total calories burned: {} kcal",
        profile.total_calories_burned()
    );

    let by_category = profile.workouts_by_category();
    if !by_category.is_empty() {
        let breakdown: Vec<String> = by_category
            .iter()
            .map(|(category, count)| format!("{} {}", count, category))
            .collect();
        println!("By category: {}", breakdown.join(", "));
    }

    if let Some(last) = profile.last_workout() {
        println!(
            "Last workout: {} on {}",
            last.summary(),
            last.logged_at.format("%B %d, %Y")
        );
    }

    println!("Meal plans saved: {}", profile.meals.len());

    Ok(())
}

/// Update weight, target weight, or the weekly workout goal
fn update_profile(profiles: &ProfileStore, session: &Session) -> Result<()> {
    println!();
    println!("{}", style("Update profile").bold());

    let choice = Select::new()
        .with_prompt("What would you like to update?")
        .items(&["Weight", "Target weight", "Weekly workout goal", "Cancel"])
        .default(0)
        .interact()?;

    match choice {
        0 => {
            let input: String = Input::new()
                .with_prompt("New weight (kg)")
                .validate_with(|input: &String| {
                    validate_weight(input).map(|_| ()).map_err(|e| e.to_string())
                })
                .interact_text()?;
            let weight = validate_weight(&input).map_err(anyhow::Error::from)?;

            profiles.update(&session.username, |profile| profile.update_weight(weight))?;
            report_success(&format!("Weight updated to {:.1}kg", weight));
        }
        1 => {
            let input: String = Input::new()
                .with_prompt("New target weight (kg)")
                .validate_with(|input: &String| {
                    validate_weight(input).map(|_| ()).map_err(|e| e.to_string())
                })
                .interact_text()?;
            let target = validate_weight(&input).map_err(anyhow::Error::from)?;

            profiles.update(&session.username, |profile| {
                profile.target_weight_kg = target;
            })?;
            report_success(&format!("Target weight updated to {:.1}kg", target));
        }
        2 => {
            let input: String = Input::new()
                .with_prompt("Weekly workout goal (1-7)")
                .validate_with(|input: &String| {
                    validate_weekly_goal(input)
                        .map(|_| ())
                        .map_err(|e| e.to_string())
                })
                .interact_text()?;
            let goal = validate_weekly_goal(&input).map_err(anyhow::Error::from)?;

            profiles.update(&session.username, |profile| {
                profile.weekly_workout_goal = goal;
            })?;
            report_success(&format!("Weekly goal updated to {} workouts", goal));
        }
        _ => println!("Update cancelled"),
    }

    Ok(())
}

fn notice_if_fallback(is_fallback: bool) {
    if is_fallback {
        report_notice("Live data unavailable, showing built-in data");
    }
}
