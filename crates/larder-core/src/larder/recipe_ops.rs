//! Recipe book operations for the Larder.

use tokio::task;

use super::Larder;
use crate::{
    db::Database,
    error::{LarderError, Result},
    models::{MealRecord, Recipe},
    params::{RecipeId, UpdateRecipe},
};

impl Larder {
    /// Saves an external meal record to the recipe book.
    ///
    /// Upsert by id: saving an already-saved meal overwrites its fields with
    /// the record's values. Returns the recipe as persisted.
    pub async fn save_recipe(&self, meal: &MealRecord) -> Result<Recipe> {
        let db_path = self.db_path.clone();
        let meal = meal.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.save_recipe(&meal)
        })
        .await
        .map_err(|e| LarderError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Returns every saved recipe, order unspecified.
    pub async fn list_recipes(&self) -> Result<Vec<Recipe>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_recipes()
        })
        .await
        .map_err(|e| LarderError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a recipe by id; `Ok(None)` when not saved.
    pub async fn get_recipe(&self, params: &RecipeId) -> Result<Option<Recipe>> {
        let db_path = self.db_path.clone();
        let id = params.id.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.get_recipe(&id)
        })
        .await
        .map_err(|e| LarderError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Retrieves a recipe by id, failing with
    /// [`LarderError::RecipeNotFound`] when it is not in the book.
    ///
    /// For callers that require the recipe to exist; plain lookups should
    /// use [`Larder::get_recipe`] and treat absence as an expected outcome.
    pub async fn require_recipe(&self, params: &RecipeId) -> Result<Recipe> {
        let db_path = self.db_path.clone();
        let id = params.id.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.require_recipe(&id)
        })
        .await
        .map_err(|e| LarderError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Edits a recipe's name and/or instructions.
    ///
    /// Returns the updated recipe, or `None` (without error) when the id is
    /// not in the book.
    pub async fn update_recipe(&self, params: &UpdateRecipe) -> Result<Option<Recipe>> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.update_recipe(&params.id, params.name.as_deref(), params.instructions.as_deref())
        })
        .await
        .map_err(|e| LarderError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Deletes a recipe, cascading removal of any planner slot that
    /// references it. Returns whether a recipe was actually deleted.
    pub async fn delete_recipe(&self, params: &RecipeId) -> Result<bool> {
        let db_path = self.db_path.clone();
        let id = params.id.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.delete_recipe(&id)
        })
        .await
        .map_err(|e| LarderError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
