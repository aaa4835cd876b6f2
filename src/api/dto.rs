// Wire shapes for the wger REST API. Only the fields we consume are
// declared; everything else in the payload is ignored.

use serde::{Deserialize, Deserializer};

/// Paginated list envelope used by every wger list endpoint
#[derive(Debug, Deserialize)]
pub struct Page<T> {
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CategoryDto {
    pub id: u32,
    pub name: String,
}

/// Entry from /exercise/ listings; details come from /exerciseinfo/{id}/
#[derive(Debug, Deserialize)]
pub struct ExerciseSummaryDto {
    pub id: u32,
}

#[derive(Debug, Deserialize)]
pub struct NamedDto {
    pub name: String,
}

/// Exercise names and descriptions live in per-language translations
#[derive(Debug, Deserialize)]
pub struct TranslationDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub language: Option<u32>,
}

#[derive(Debug, Deserialize)]
pub struct ExerciseInfoDto {
    pub id: u32,
    pub category: Option<CategoryDto>,
    #[serde(default)]
    pub equipment: Vec<NamedDto>,
    #[serde(default)]
    pub translations: Vec<TranslationDto>,
}

/// Ingredient record from /ingredient/. Nutrient values are per 100 g and
/// arrive as decimal strings in some API versions, numbers in others.
#[derive(Debug, Deserialize)]
pub struct IngredientDto {
    pub name: String,
    #[serde(default, deserialize_with = "flexible_f64")]
    pub energy: f64,
    #[serde(default, deserialize_with = "flexible_f64")]
    pub protein: f64,
    #[serde(default, deserialize_with = "flexible_f64")]
    pub carbohydrates: f64,
    #[serde(default, deserialize_with = "flexible_f64")]
    pub fat: f64,
}

/// Accept a float whether the wire encodes it as a number, a string, or null
fn flexible_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Number(f64),
        Text(String),
        Null,
    }

    match Raw::deserialize(deserializer)? {
        Raw::Number(n) => Ok(n),
        Raw::Text(s) => s.trim().parse().map_err(serde::de::Error::custom),
        Raw::Null => Ok(0.0),
    }
}
