//! Result wrapper types for displaying operation outcomes.

use std::fmt;

use crate::models::Recipe;

/// Wrapper type for displaying the result of a save operation.
pub struct SaveResult {
    pub recipe: Recipe,
}

impl SaveResult {
    /// Create a new SaveResult wrapper.
    pub fn new(recipe: Recipe) -> Self {
        Self { recipe }
    }
}

impl fmt::Display for SaveResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Saved recipe '{}' with id: {}", self.recipe.name, self.recipe.id)?;
        writeln!(f)?;
        write!(f, "{}", self.recipe)
    }
}

/// Wrapper type for displaying the result of an edit operation.
pub struct UpdateResult {
    pub recipe: Recipe,
}

impl UpdateResult {
    /// Create a new UpdateResult wrapper.
    pub fn new(recipe: Recipe) -> Self {
        Self { recipe }
    }
}

impl fmt::Display for UpdateResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Updated recipe with id: {}", self.recipe.id)?;
        writeln!(f)?;
        write!(f, "{}", self.recipe)
    }
}

/// Wrapper type for displaying the result of a delete operation.
pub struct DeleteResult {
    pub id: String,
}

impl DeleteResult {
    /// Create a new DeleteResult wrapper.
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }
}

impl fmt::Display for DeleteResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Deleted recipe with id: {}. Any planner slots using it were cleared.",
            self.id
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_recipe() -> Recipe {
        Recipe {
            id: "52772".to_string(),
            name: "Teriyaki Chicken".to_string(),
            image_url: None,
            category: None,
            instructions: None,
            source_url: None,
        }
    }

    #[test]
    fn test_save_result_display() {
        let output = SaveResult::new(sample_recipe()).to_string();
        assert!(output.contains("Saved recipe 'Teriyaki Chicken' with id: 52772"));
    }

    #[test]
    fn test_update_result_display() {
        let output = UpdateResult::new(sample_recipe()).to_string();
        assert!(output.contains("Updated recipe with id: 52772"));
    }

    #[test]
    fn test_delete_result_display() {
        let output = DeleteResult::new("52772").to_string();
        assert!(output.contains("Deleted recipe with id: 52772"));
        assert!(output.contains("planner slots"));
    }
}
