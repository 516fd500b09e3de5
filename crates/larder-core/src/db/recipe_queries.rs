//! Recipe CRUD operations and queries.

use log::debug;
use rusqlite::{params, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, LarderError, Result},
    models::{MealRecord, Recipe},
};

const UPSERT_RECIPE_SQL: &str = "INSERT INTO recipes (id, name, image_url, category, instructions, source_url) \
     VALUES (?1, ?2, ?3, ?4, ?5, ?6) \
     ON CONFLICT(id) DO UPDATE SET \
         name = excluded.name, image_url = excluded.image_url, category = excluded.category, \
         instructions = excluded.instructions, source_url = excluded.source_url";
const SELECT_ALL_RECIPES_SQL: &str =
    "SELECT id, name, image_url, category, instructions, source_url FROM recipes";
const SELECT_RECIPE_SQL: &str =
    "SELECT id, name, image_url, category, instructions, source_url FROM recipes WHERE id = ?1";
const UPDATE_RECIPE_SQL: &str = "UPDATE recipes SET name = COALESCE(?1, name), instructions = COALESCE(?2, instructions) WHERE id = ?3";
const DELETE_RECIPE_SQL: &str = "DELETE FROM recipes WHERE id = ?1";

impl super::Database {
    /// Helper function to construct a Recipe from a database row
    fn build_recipe_from_row(row: &rusqlite::Row) -> rusqlite::Result<Recipe> {
        Ok(Recipe {
            id: row.get(0)?,
            name: row.get(1)?,
            image_url: row.get(2)?,
            category: row.get(3)?,
            instructions: row.get(4)?,
            source_url: row.get(5)?,
        })
    }

    /// Saves an external meal record to the recipe book.
    ///
    /// Upsert semantics keyed by id: a first save inserts, saving an
    /// already-saved id overwrites every non-id field with the record's
    /// values. Returns the recipe as persisted.
    pub fn save_recipe(&mut self, meal: &MealRecord) -> Result<Recipe> {
        let recipe = Recipe::from(meal.clone());

        self.connection
            .execute(
                UPSERT_RECIPE_SQL,
                params![
                    recipe.id,
                    recipe.name,
                    recipe.image_url,
                    recipe.category,
                    recipe.instructions,
                    recipe.source_url,
                ],
            )
            .db_context("Failed to save recipe")?;

        debug!("Saved recipe '{}' ({})", recipe.name, recipe.id);
        Ok(recipe)
    }

    /// Returns every saved recipe in the storage's natural scan order.
    pub fn list_recipes(&self) -> Result<Vec<Recipe>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_ALL_RECIPES_SQL)
            .db_context("Failed to prepare recipe listing")?;

        let recipes = stmt
            .query_map([], Self::build_recipe_from_row)
            .db_context("Failed to query recipes")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch recipes")?;

        Ok(recipes)
    }

    /// Retrieves a single recipe by id.
    ///
    /// `Ok(None)` means the id is not in the book; it is not a failure.
    pub fn get_recipe(&self, id: &str) -> Result<Option<Recipe>> {
        self.connection
            .query_row(SELECT_RECIPE_SQL, params![id], Self::build_recipe_from_row)
            .optional()
            .db_context("Failed to query recipe")
    }

    /// Updates a recipe's name and/or instructions.
    ///
    /// Only these two fields are editable; image, category, and source URL
    /// always keep their saved values. A `None` field keeps its current
    /// value. Returns the updated recipe, or `None` (without error) when the
    /// id does not exist.
    pub fn update_recipe(
        &mut self,
        id: &str,
        name: Option<&str>,
        instructions: Option<&str>,
    ) -> Result<Option<Recipe>> {
        let rows_affected = self
            .connection
            .execute(UPDATE_RECIPE_SQL, params![name, instructions, id])
            .db_context("Failed to update recipe")?;

        if rows_affected == 0 {
            debug!("Update of recipe '{id}' matched no rows");
            return Ok(None);
        }

        self.get_recipe(id)
    }

    /// Deletes a recipe by id.
    ///
    /// The foreign key on `plan_slots` cascades, removing every planner slot
    /// that references the recipe. Returns whether a row was deleted; an
    /// absent id is a no-op, not an error.
    pub fn delete_recipe(&mut self, id: &str) -> Result<bool> {
        let rows_affected = self
            .connection
            .execute(DELETE_RECIPE_SQL, params![id])
            .db_context("Failed to delete recipe")?;

        debug!("Deleted recipe '{id}' ({rows_affected} rows)");
        Ok(rows_affected > 0)
    }

    /// Retrieves a recipe by id, failing when it does not exist.
    ///
    /// Used by callers that require the recipe (e.g. the edit flow), where
    /// absence is an error rather than an expected outcome.
    pub fn require_recipe(&self, id: &str) -> Result<Recipe> {
        self.get_recipe(id)?
            .ok_or_else(|| LarderError::RecipeNotFound { id: id.to_string() })
    }
}
