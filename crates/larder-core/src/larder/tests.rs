//! Tests for the larder module.

use tempfile::TempDir;

use super::*;
use crate::models::MealRecord;
use crate::params::{AssignSlot, RecipeId, SlotId, UpdateRecipe};

/// Helper function to create a test larder
async fn create_test_larder() -> (TempDir, Larder) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let larder = LarderBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .await
        .expect("Failed to create larder");
    (temp_dir, larder)
}

fn teriyaki() -> MealRecord {
    MealRecord {
        id: "52772".to_string(),
        name: "Teriyaki Chicken Casserole".to_string(),
        thumbnail: Some("https://example.com/teriyaki.jpg".to_string()),
        category: Some("Chicken".to_string()),
        instructions: Some("Preheat oven to 350 degrees.".to_string()),
        source: Some("https://example.com/teriyaki".to_string()),
    }
}

#[tokio::test]
async fn test_save_and_get_recipe() {
    let (_temp_dir, larder) = create_test_larder().await;

    let saved = larder
        .save_recipe(&teriyaki())
        .await
        .expect("Failed to save recipe");
    assert_eq!(saved.id, "52772");
    assert_eq!(saved.name, "Teriyaki Chicken Casserole");

    let fetched = larder
        .get_recipe(&RecipeId { id: "52772".to_string() })
        .await
        .expect("Failed to get recipe")
        .expect("Recipe should exist");
    assert_eq!(fetched, saved);
}

#[tokio::test]
async fn test_get_recipe_not_found_is_none() {
    let (_temp_dir, larder) = create_test_larder().await;

    let missing = larder
        .get_recipe(&RecipeId { id: "404".to_string() })
        .await
        .expect("Lookup of an absent id must not fail");
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_require_recipe_fails_on_absent_id() {
    let (_temp_dir, larder) = create_test_larder().await;

    let err = larder
        .require_recipe(&RecipeId { id: "404".to_string() })
        .await
        .expect_err("Expected RecipeNotFound");
    assert!(matches!(err, crate::LarderError::RecipeNotFound { .. }));
}

#[tokio::test]
async fn test_save_twice_upserts() {
    let (_temp_dir, larder) = create_test_larder().await;

    larder
        .save_recipe(&teriyaki())
        .await
        .expect("Failed to save recipe");

    let renamed = MealRecord {
        name: "Teriyaki Chicken v2".to_string(),
        category: Some("Japanese".to_string()),
        ..teriyaki()
    };
    larder
        .save_recipe(&renamed)
        .await
        .expect("Failed to re-save recipe");

    let recipes = larder.list_recipes().await.expect("Failed to list recipes");
    assert_eq!(recipes.len(), 1, "Upsert must not create a second row");
    assert_eq!(recipes[0].name, "Teriyaki Chicken v2");
    assert_eq!(recipes[0].category, Some("Japanese".to_string()));
}

#[tokio::test]
async fn test_update_changes_only_name_and_instructions() {
    let (_temp_dir, larder) = create_test_larder().await;
    let saved = larder
        .save_recipe(&teriyaki())
        .await
        .expect("Failed to save recipe");

    let updated = larder
        .update_recipe(&UpdateRecipe {
            id: saved.id.clone(),
            name: Some("Weeknight Teriyaki".to_string()),
            instructions: Some("Use the rice cooker.".to_string()),
        })
        .await
        .expect("Failed to update recipe")
        .expect("Recipe should exist");

    assert_eq!(updated.name, "Weeknight Teriyaki");
    assert_eq!(updated.instructions, Some("Use the rice cooker.".to_string()));
    // Untouched fields keep their saved values
    assert_eq!(updated.image_url, saved.image_url);
    assert_eq!(updated.category, saved.category);
    assert_eq!(updated.source_url, saved.source_url);
}

#[tokio::test]
async fn test_update_single_field_keeps_the_other() {
    let (_temp_dir, larder) = create_test_larder().await;
    larder
        .save_recipe(&teriyaki())
        .await
        .expect("Failed to save recipe");

    let updated = larder
        .update_recipe(&UpdateRecipe {
            id: "52772".to_string(),
            name: Some("Weeknight Teriyaki".to_string()),
            instructions: None,
        })
        .await
        .expect("Failed to update recipe")
        .expect("Recipe should exist");

    assert_eq!(updated.name, "Weeknight Teriyaki");
    assert_eq!(updated.instructions, Some("Preheat oven to 350 degrees.".to_string()));
}

#[tokio::test]
async fn test_update_absent_id_is_noop() {
    let (_temp_dir, larder) = create_test_larder().await;

    let result = larder
        .update_recipe(&UpdateRecipe {
            id: "404".to_string(),
            name: Some("Ghost".to_string()),
            instructions: None,
        })
        .await
        .expect("Update of an absent id must not fail");
    assert!(result.is_none());
}

#[tokio::test]
async fn test_delete_absent_id_is_noop() {
    let (_temp_dir, larder) = create_test_larder().await;

    let deleted = larder
        .delete_recipe(&RecipeId { id: "404".to_string() })
        .await
        .expect("Delete of an absent id must not fail");
    assert!(!deleted);
}

#[tokio::test]
async fn test_assign_and_clear_slot() {
    let (_temp_dir, larder) = create_test_larder().await;
    larder
        .save_recipe(&teriyaki())
        .await
        .expect("Failed to save recipe");

    larder
        .assign_slot(&AssignSlot {
            slot_id: "Monday-lunch".to_string(),
            recipe_id: "52772".to_string(),
        })
        .await
        .expect("Failed to assign slot");

    let slots = larder.plan_slots().await.expect("Failed to read plan");
    assert_eq!(slots.get("Monday-lunch"), Some(&"52772".to_string()));

    let cleared = larder
        .clear_slot(&SlotId { slot_id: "Monday-lunch".to_string() })
        .await
        .expect("Failed to clear slot");
    assert!(cleared);

    let slots = larder.plan_slots().await.expect("Failed to read plan");
    assert!(slots.is_empty());

    // Clearing again is a no-op
    let cleared = larder
        .clear_slot(&SlotId { slot_id: "Monday-lunch".to_string() })
        .await
        .expect("Clearing an empty slot must not fail");
    assert!(!cleared);
}

#[tokio::test]
async fn test_assign_slot_overwrites_previous_assignment() {
    let (_temp_dir, larder) = create_test_larder().await;
    larder
        .save_recipe(&teriyaki())
        .await
        .expect("Failed to save recipe");
    larder
        .save_recipe(&MealRecord {
            id: "53000".to_string(),
            name: "Feijoada".to_string(),
            thumbnail: None,
            category: Some("Pork".to_string()),
            instructions: None,
            source: None,
        })
        .await
        .expect("Failed to save second recipe");

    let slot = AssignSlot {
        slot_id: "Friday-dinner".to_string(),
        recipe_id: "52772".to_string(),
    };
    larder.assign_slot(&slot).await.expect("Failed to assign slot");
    larder
        .assign_slot(&AssignSlot {
            recipe_id: "53000".to_string(),
            ..slot
        })
        .await
        .expect("Failed to reassign slot");

    let slots = larder.plan_slots().await.expect("Failed to read plan");
    assert_eq!(slots.len(), 1);
    assert_eq!(slots.get("Friday-dinner"), Some(&"53000".to_string()));
}

#[tokio::test]
async fn test_assign_slot_rejects_unknown_recipe() {
    let (_temp_dir, larder) = create_test_larder().await;

    let result = larder
        .assign_slot(&AssignSlot {
            slot_id: "Monday-lunch".to_string(),
            recipe_id: "404".to_string(),
        })
        .await;

    assert!(matches!(result, Err(crate::LarderError::Database { .. })));
}

#[tokio::test]
async fn test_weekly_plan_end_to_end() {
    let (_temp_dir, larder) = create_test_larder().await;

    // save → assign → view
    larder
        .save_recipe(&teriyaki())
        .await
        .expect("Failed to save recipe");
    larder
        .assign_slot(&AssignSlot {
            slot_id: "Monday-lunch".to_string(),
            recipe_id: "52772".to_string(),
        })
        .await
        .expect("Failed to assign slot");

    let plan = larder.weekly_plan().await.expect("Failed to build plan");
    assert_eq!(plan.len(), 1);
    assert_eq!(plan["Monday-lunch"].name, "Teriyaki Chicken Casserole");

    // delete cascades: the slot disappears with the recipe
    let deleted = larder
        .delete_recipe(&RecipeId { id: "52772".to_string() })
        .await
        .expect("Failed to delete recipe");
    assert!(deleted);

    let slots = larder.plan_slots().await.expect("Failed to read plan");
    assert!(!slots.contains_key("Monday-lunch"));

    let plan = larder.weekly_plan().await.expect("Failed to build plan");
    assert!(plan.is_empty());
}

#[tokio::test]
async fn test_delete_without_references_leaves_plan_unchanged() {
    let (_temp_dir, larder) = create_test_larder().await;

    larder
        .save_recipe(&teriyaki())
        .await
        .expect("Failed to save recipe");
    larder
        .save_recipe(&MealRecord {
            id: "53000".to_string(),
            name: "Feijoada".to_string(),
            thumbnail: None,
            category: None,
            instructions: None,
            source: None,
        })
        .await
        .expect("Failed to save second recipe");
    larder
        .assign_slot(&AssignSlot {
            slot_id: "Sunday-dinner".to_string(),
            recipe_id: "53000".to_string(),
        })
        .await
        .expect("Failed to assign slot");

    // Deleting the unreferenced recipe must not touch the planner
    larder
        .delete_recipe(&RecipeId { id: "52772".to_string() })
        .await
        .expect("Failed to delete recipe");

    let slots = larder.plan_slots().await.expect("Failed to read plan");
    assert_eq!(slots.len(), 1);
    assert_eq!(slots.get("Sunday-dinner"), Some(&"53000".to_string()));
}
