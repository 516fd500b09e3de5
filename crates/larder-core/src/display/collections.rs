//! Collection wrapper types for displaying groups of domain objects.

use std::collections::HashMap;
use std::fmt;

use crate::models::{MealSlot, Recipe};

/// Newtype wrapper for displaying the saved recipe book as a list.
///
/// Handles the empty book gracefully; consumers print titles separately.
pub struct RecipeList(pub Vec<Recipe>);

impl RecipeList {
    /// Check if the book is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of saved recipes.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Iterator over the recipes.
    pub fn iter(&self) -> std::slice::Iter<'_, Recipe> {
        self.0.iter()
    }
}

impl IntoIterator for RecipeList {
    type Item = Recipe;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for RecipeList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No recipes saved yet.");
        }

        for recipe in &self.0 {
            writeln!(f, "- {}", recipe.summary_line())?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying the weekly plan.
///
/// Renders the fourteen well-known slots in day order, marking empty slots,
/// then any non-canonical slot keys that carry assignments.
pub struct WeeklyPlan(pub HashMap<String, Recipe>);

impl WeeklyPlan {
    /// Check if no slot has an assignment.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Recipe assigned to a slot, if any.
    pub fn get(&self, slot_id: &str) -> Option<&Recipe> {
        self.0.get(slot_id)
    }
}

impl fmt::Display for WeeklyPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut current_day = None;
        for slot in MealSlot::all() {
            if current_day != Some(slot.day) {
                current_day = Some(slot.day);
                writeln!(f, "## {}", slot.day.as_str())?;
            }
            match self.0.get(&slot.to_string()) {
                Some(recipe) => writeln!(f, "- {}: {}", slot.meal.as_str(), recipe.summary_line())?,
                None => writeln!(f, "- {}: _empty_", slot.meal.as_str())?,
            }
        }

        // Assignments under slot keys outside the weekly grid still show up.
        let mut extras: Vec<(&String, &Recipe)> = self
            .0
            .iter()
            .filter(|(slot_id, _)| slot_id.parse::<MealSlot>().is_err())
            .collect();
        if !extras.is_empty() {
            extras.sort_by(|a, b| a.0.cmp(b.0));
            writeln!(f, "## Other slots")?;
            for (slot_id, recipe) in extras {
                writeln!(f, "- {}: {}", slot_id, recipe.summary_line())?;
            }
        }

        Ok(())
    }
}
