//! Recipe model definition.

use serde::{Deserialize, Serialize};

use super::MealRecord;

/// A saved recipe.
///
/// The id is the remote API's meal identifier and is immutable once the
/// recipe is saved; every other field can be overwritten by a later save of
/// the same id, and name/instructions can be changed through the edit
/// operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Recipe {
    /// Unique identifier (the remote meal id, e.g. "52772")
    pub id: String,

    /// Display name of the dish
    pub name: String,

    /// URL of the dish thumbnail image
    pub image_url: Option<String>,

    /// Category label (e.g. "Chicken", "Dessert")
    pub category: Option<String>,

    /// Free-text preparation instructions, user-editable
    pub instructions: Option<String>,

    /// URL of the originating recipe page
    pub source_url: Option<String>,
}

impl From<MealRecord> for Recipe {
    /// Projects an external meal record onto the internal recipe shape.
    ///
    /// Only the fields the book persists are carried over; the record's
    /// ingredient fields are ignored. Missing optional fields stay `None`
    /// and persist as NULL.
    fn from(meal: MealRecord) -> Self {
        Self {
            id: meal.id,
            name: meal.name,
            image_url: meal.thumbnail,
            category: meal.category,
            instructions: meal.instructions,
            source_url: meal.source,
        }
    }
}
