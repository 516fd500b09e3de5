//! External meal record as returned by the remote recipe API.

use serde::{Deserialize, Serialize};

/// A meal record in the shape TheMealDB returns it.
///
/// The API sends many more fields per meal (twenty ingredient/measure pairs,
/// tags, video links); serde skips everything the book does not persist.
/// All fields except the id and name are nullable in practice.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MealRecord {
    /// Meal identifier, stable across API calls
    #[serde(rename = "idMeal")]
    pub id: String,

    /// Meal name
    #[serde(rename = "strMeal")]
    pub name: String,

    /// Thumbnail image URL
    #[serde(rename = "strMealThumb")]
    pub thumbnail: Option<String>,

    /// Category label
    #[serde(rename = "strCategory")]
    pub category: Option<String>,

    /// Preparation instructions
    #[serde(rename = "strInstructions")]
    pub instructions: Option<String>,

    /// URL of the original recipe page
    #[serde(rename = "strSource")]
    pub source: Option<String>,
}
