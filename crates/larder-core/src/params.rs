//! Parameter structures for larder operations.
//!
//! Shared parameter structures usable from any interface (CLI today, other
//! front ends tomorrow) without framework-specific derives. Interface layers
//! define their own wrapper structs with clap or serde attributes and convert
//! into these via `From`, keeping the core free of UI concerns.

use serde::{Deserialize, Serialize};

/// Generic parameters for operations requiring just a recipe id.
///
/// Used for show, update, and delete operations on the recipe book.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeId {
    /// The id of the recipe to operate on
    pub id: String,
}

/// Parameters for editing a saved recipe.
///
/// Only the name and instructions are editable; a `None` field keeps its
/// current value. The remaining recipe fields always keep the values from
/// the last save.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateRecipe {
    /// Id of the recipe to edit (required)
    pub id: String,
    /// New display name
    pub name: Option<String>,
    /// New preparation instructions
    pub instructions: Option<String>,
}

/// Parameters for assigning a recipe to a weekly planner slot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssignSlot {
    /// Slot key, canonically `"<Day>-<meal>"` (e.g. "Monday-lunch")
    pub slot_id: String,
    /// Id of the saved recipe to assign
    pub recipe_id: String,
}

/// Parameters for clearing a weekly planner slot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SlotId {
    /// Slot key to clear
    pub slot_id: String,
}
