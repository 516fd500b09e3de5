//! Database operations and SQLite management for recipes and planner slots.
//!
//! This module provides the low-level persistence layer for the larder. It
//! owns the SQLite connection, creates the schema on open, and exposes the
//! query interfaces for the recipe book and the weekly planner.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod plan_queries;
pub mod recipe_queries;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Initializes the database schema using the embedded SQL file.
    ///
    /// The schema uses `CREATE TABLE IF NOT EXISTS` throughout, so opening an
    /// existing database is a no-op. Foreign keys are off by default in
    /// SQLite and must be enabled per connection for the planner's cascade
    /// delete to work.
    fn initialize_schema(&self) -> Result<()> {
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        Ok(())
    }
}
