//! High-level async API for the recipe book and weekly planner.
//!
//! This module provides the main [`Larder`] interface. It coordinates between
//! the application layer and the database, running each blocking SQLite
//! operation on the tokio blocking pool.
//!
//! ## Submodules
//!
//! - [`builder`]: Factory for creating [`Larder`] instances with configuration
//! - [`recipe_ops`]: Recipe book operations (save, list, show, edit, delete)
//! - [`plan_ops`]: Weekly planner operations (view, assign, clear)
//!
//! There is no cross-table transaction: saving a recipe and assigning it to
//! a slot are two independent writes. An interruption between them leaves a
//! saved recipe with no assignment, which is a valid planner state, so the
//! pair self-heals on the next read.

use std::path::PathBuf;

pub mod builder;
pub mod plan_ops;
pub mod recipe_ops;

#[cfg(test)]
mod tests;

pub use builder::LarderBuilder;

/// Main interface for managing the recipe book and weekly planner.
pub struct Larder {
    pub(crate) db_path: PathBuf,
}

impl Larder {
    /// Creates a new larder with the specified database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }
}
