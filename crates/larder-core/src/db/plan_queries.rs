//! Weekly planner slot operations and queries.

use std::collections::HashMap;

use log::debug;
use rusqlite::params;

use crate::error::{DatabaseResultExt, Result};

const SELECT_PLAN_SQL: &str = "SELECT slot_id, recipe_id FROM plan_slots";
const UPSERT_SLOT_SQL: &str = "INSERT INTO plan_slots (slot_id, recipe_id) VALUES (?1, ?2) \
     ON CONFLICT(slot_id) DO UPDATE SET recipe_id = excluded.recipe_id";
const DELETE_SLOT_SQL: &str = "DELETE FROM plan_slots WHERE slot_id = ?1";

impl super::Database {
    /// Returns the full slot → recipe-id mapping.
    ///
    /// Slots with no assignment have no row and therefore no entry; an empty
    /// planner yields an empty map.
    pub fn plan_slots(&self) -> Result<HashMap<String, String>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_PLAN_SQL)
            .db_context("Failed to prepare planner query")?;

        let slots = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))
            .db_context("Failed to query planner slots")?
            .collect::<std::result::Result<HashMap<String, String>, _>>()
            .db_context("Failed to fetch planner slots")?;

        Ok(slots)
    }

    /// Assigns a recipe to a planner slot, overwriting any previous
    /// assignment for that slot.
    ///
    /// The recipe id must reference a saved recipe; the foreign key rejects
    /// anything else, so a mistyped id surfaces as a database error instead
    /// of persisting an assignment the planner could never resolve.
    pub fn set_plan_slot(&mut self, slot_id: &str, recipe_id: &str) -> Result<()> {
        self.connection
            .execute(UPSERT_SLOT_SQL, params![slot_id, recipe_id])
            .db_context("Failed to assign planner slot")?;

        debug!("Assigned slot '{slot_id}' to recipe '{recipe_id}'");
        Ok(())
    }

    /// Clears a planner slot.
    ///
    /// Returns whether a row was deleted; clearing an empty slot is a no-op.
    pub fn clear_plan_slot(&mut self, slot_id: &str) -> Result<bool> {
        let rows_affected = self
            .connection
            .execute(DELETE_SLOT_SQL, params![slot_id])
            .db_context("Failed to clear planner slot")?;

        debug!("Cleared slot '{slot_id}' ({rows_affected} rows)");
        Ok(rows_affected > 0)
    }
}
