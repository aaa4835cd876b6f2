use anyhow::{Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::Config;

mod dto;
mod error;
pub mod fallback;

pub use error::ApiError;

use dto::{CategoryDto, ExerciseInfoDto, ExerciseSummaryDto, IngredientDto, Page};

/// wger language id for English translations
const ENGLISH: u32 = 2;

/// Longest exercise description shown in the browser
const DESCRIPTION_LIMIT: usize = 200;

/// An exercise category from the catalog
#[derive(Debug, Clone)]
pub struct ExerciseCategory {
    pub id: u32,
    pub name: String,
}

/// A catalog exercise, read-only; never persisted as user data
#[derive(Debug, Clone)]
pub struct ExerciseRecord {
    pub name: String,
    pub category: String,
    pub equipment: Vec<String>,
    pub description: String,
}

/// Nutrition facts per 100 g for one food
#[derive(Debug, Clone)]
pub struct NutritionRecord {
    pub name: String,
    pub kcal_per_100g: f64,
    pub protein_g: f64,
    pub carbs_g: f64,
    pub fat_g: f64,
}

/// Where a result set came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    Live,
    Fallback,
}

/// A result set tagged with its origin, so the UI can flag degraded data
#[derive(Debug, Clone)]
pub struct Fetched<T> {
    pub records: Vec<T>,
    pub source: DataSource,
}

impl<T> Fetched<T> {
    fn live(records: Vec<T>) -> Self {
        Self {
            records,
            source: DataSource::Live,
        }
    }

    fn fallback(records: Vec<T>) -> Self {
        Self {
            records,
            source: DataSource::Fallback,
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.source == DataSource::Fallback
    }
}

/// Client for the wger exercise/nutrition API.
///
/// Every public lookup degrades to built-in fallback data instead of
/// surfacing an error: one bounded attempt per request, no retries.
pub struct ExerciseApiClient {
    client: Client,
    base_url: String,
}

impl ExerciseApiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let timeout = Duration::from_secs(config.api.timeout_seconds);

        let client = Client::builder()
            .timeout(timeout)
            .user_agent("fitness-world/2.0")
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self {
            client,
            base_url: config.api.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// List exercise categories, falling back to the built-in taxonomy.
    pub async fn exercise_categories(&self) -> Fetched<ExerciseCategory> {
        match self.fetch_categories().await {
            Ok(records) => Fetched::live(records),
            Err(error) => {
                tracing::warn!("Using fallback exercise categories: {}", error);
                Fetched::fallback(fallback::categories())
            }
        }
    }

    /// List exercises for a category, with per-exercise detail lookups.
    /// Falls back to built-in exercises for the category on failure.
    pub async fn exercises_by_category(
        &self,
        category: &ExerciseCategory,
        limit: usize,
    ) -> Fetched<ExerciseRecord> {
        match self.fetch_exercises(category, limit).await {
            Ok(records) => Fetched::live(records),
            Err(error) => {
                tracing::warn!(
                    "Using fallback exercises for {}: {}",
                    category.name,
                    error
                );
                Fetched::fallback(fallback::exercises(&category.name))
            }
        }
    }

    /// Search nutrition data by food name, falling back to the built-in
    /// food table filtered by the query.
    pub async fn search_food(&self, query: &str, limit: usize) -> Fetched<NutritionRecord> {
        match self.fetch_foods(query, limit).await {
            Ok(records) => Fetched::live(records),
            Err(error) => {
                tracing::warn!("Using fallback food data for '{}': {}", query, error);
                Fetched::fallback(fallback::foods(query))
            }
        }
    }

    async fn fetch_categories(&self) -> Result<Vec<ExerciseCategory>, ApiError> {
        let page: Page<CategoryDto> = self.get_json("exercisecategory/", &[]).await?;

        Ok(page
            .results
            .into_iter()
            .map(|dto| ExerciseCategory {
                id: dto.id,
                name: dto.name,
            })
            .collect())
    }

    async fn fetch_exercises(
        &self,
        category: &ExerciseCategory,
        limit: usize,
    ) -> Result<Vec<ExerciseRecord>, ApiError> {
        let query = [
            ("category", category.id.to_string()),
            ("limit", limit.to_string()),
            ("language", ENGLISH.to_string()),
        ];
        let page: Page<ExerciseSummaryDto> = self.get_json("exercise/", &query).await?;

        let total = page.results.len();
        let mut records = Vec::with_capacity(total);

        for summary in page.results {
            let path = format!("exerciseinfo/{}/", summary.id);
            match self.get_json::<ExerciseInfoDto>(&path, &[]).await {
                Ok(info) => records.push(map_exercise(info, &category.name)),
                Err(error) => {
                    // A single bad detail record shouldn't sink the listing
                    tracing::warn!("Skipping exercise {}: {}", summary.id, error);
                }
            }
        }

        if records.is_empty() && total > 0 {
            return Err(ApiError::Unknown(
                "every exercise detail lookup failed".to_string(),
            ));
        }

        Ok(records)
    }

    async fn fetch_foods(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<NutritionRecord>, ApiError> {
        let params = [
            ("name", query.to_string()),
            ("limit", limit.to_string()),
            ("language", ENGLISH.to_string()),
        ];
        let page: Page<IngredientDto> = self.get_json("ingredient/", &params).await?;

        Ok(page
            .results
            .into_iter()
            .map(|dto| NutritionRecord {
                name: dto.name,
                kcal_per_100g: dto.energy,
                protein_g: dto.protein,
                carbs_g: dto.carbohydrates,
                fat_g: dto.fat,
            })
            .collect())
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, ApiError> {
        let url = format!("{}/{}", self.base_url, path);

        tracing::debug!("GET {}", url);

        let response = self.client.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(ApiError::from_status(status, text));
        }

        Ok(response.json::<T>().await?)
    }
}

/// Flatten an exercise detail payload into a display record
fn map_exercise(info: ExerciseInfoDto, fallback_category: &str) -> ExerciseRecord {
    // Prefer the English translation, then whatever comes first
    let translation = info
        .translations
        .iter()
        .find(|t| t.language == Some(ENGLISH))
        .or_else(|| info.translations.first());

    let name = translation
        .and_then(|t| t.name.clone())
        .unwrap_or_else(|| "Unknown exercise".to_string());

    let description = translation
        .and_then(|t| t.description.as_deref())
        .map(clean_description)
        .unwrap_or_else(|| "No description available".to_string());

    let category = info
        .category
        .map(|c| c.name)
        .unwrap_or_else(|| fallback_category.to_string());

    ExerciseRecord {
        name,
        category,
        equipment: info.equipment.into_iter().map(|e| e.name).collect(),
        description,
    }
}

/// Strip HTML tags, collapse whitespace, and cap the length
fn clean_description(html: &str) -> String {
    let mut text = String::with_capacity(html.len());
    let mut in_tag = false;

    for c in html.chars() {
        match c {
            '<' => in_tag = true,
            '>' => {
                in_tag = false;
                text.push(' ');
            }
            c if !in_tag => text.push(c),
            _ => {}
        }
    }

    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().count() > DESCRIPTION_LIMIT {
        let truncated: String = collapsed.chars().take(DESCRIPTION_LIMIT).collect();
        format!("{}...", truncated.trim_end())
    } else {
        collapsed
    }
}
