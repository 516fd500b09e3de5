//! Core library for the Larder recipe book and weekly meal planner.
//!
//! This crate provides the business logic for saving recipes fetched from a
//! remote recipe API, editing them, and assigning them to weekly meal slots.
//! It owns the embedded SQLite database, the domain models, error handling,
//! and the markdown display layer.
//!
//! # Quick Start
//!
//! ```rust
//! use larder_core::{models::MealRecord, LarderBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Open (or create) the recipe book
//! let larder = LarderBuilder::new()
//!     .with_database_path(Some("recipes.db"))
//!     .build()
//!     .await?;
//!
//! // Save a meal fetched from the remote API
//! let meal = MealRecord {
//!     id: "52772".to_string(),
//!     name: "Teriyaki Chicken Casserole".to_string(),
//!     thumbnail: None,
//!     category: Some("Chicken".to_string()),
//!     instructions: Some("Preheat oven to 350 degrees...".to_string()),
//!     source: None,
//! };
//! let recipe = larder.save_recipe(&meal).await?;
//! println!("Saved: {}", recipe.name);
//!
//! // Put it on the weekly plan
//! use larder_core::params::AssignSlot;
//! larder
//!     .assign_slot(&AssignSlot {
//!         slot_id: "Monday-lunch".to_string(),
//!         recipe_id: recipe.id.clone(),
//!     })
//!     .await?;
//!
//! let plan = larder.weekly_plan().await?;
//! assert_eq!(plan["Monday-lunch"].id, "52772");
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod larder;
pub mod models;
pub mod params;
pub mod view;

// Re-export commonly used types
pub use db::Database;
pub use display::{DeleteResult, OperationStatus, RecipeList, SaveResult, UpdateResult, WeeklyPlan};
pub use error::{LarderError, Result};
pub use larder::{Larder, LarderBuilder};
pub use models::{MealRecord, MealSlot, MealType, Recipe, Weekday};
pub use params::{AssignSlot, RecipeId, SlotId, UpdateRecipe};
pub use view::build_weekly_view;
