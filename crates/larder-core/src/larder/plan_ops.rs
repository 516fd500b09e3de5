//! Weekly planner operations for the Larder.

use std::collections::HashMap;

use tokio::task;

use super::Larder;
use crate::{
    db::Database,
    error::{LarderError, Result},
    models::Recipe,
    params::{AssignSlot, SlotId},
    view,
};

impl Larder {
    /// Returns the raw slot → recipe-id mapping.
    pub async fn plan_slots(&self) -> Result<HashMap<String, String>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.plan_slots()
        })
        .await
        .map_err(|e| LarderError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Assigns a recipe to a planner slot, overwriting any previous
    /// assignment.
    ///
    /// The recipe must already be saved; an unknown recipe id fails with a
    /// database error from the foreign key check.
    pub async fn assign_slot(&self, params: &AssignSlot) -> Result<()> {
        let db_path = self.db_path.clone();
        let params = params.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.set_plan_slot(&params.slot_id, &params.recipe_id)
        })
        .await
        .map_err(|e| LarderError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Clears a planner slot. Returns whether the slot had an assignment.
    pub async fn clear_slot(&self, params: &SlotId) -> Result<bool> {
        let db_path = self.db_path.clone();
        let slot_id = params.slot_id.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.clear_plan_slot(&slot_id)
        })
        .await
        .map_err(|e| LarderError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Builds the slot → recipe view of the weekly plan.
    ///
    /// Reads both tables and joins them in memory. The two reads are not a
    /// transaction; a concurrent delete can leave a slot unresolved, in
    /// which case that slot is omitted from the view.
    pub async fn weekly_plan(&self) -> Result<HashMap<String, Recipe>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            let recipes = db.list_recipes()?;
            let slots = db.plan_slots()?;
            Ok(view::build_weekly_view(&recipes, &slots))
        })
        .await
        .map_err(|e| LarderError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
