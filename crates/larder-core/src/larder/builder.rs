//! Builder for creating and configuring Larder instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Larder;
use crate::{
    db::Database,
    error::{LarderError, Result},
};

/// Builder for creating and configuring [`Larder`] instances.
#[derive(Debug, Clone)]
pub struct LarderBuilder {
    database_path: Option<PathBuf>,
}

impl LarderBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/larder/larder.db` or `~/.local/share/larder/larder.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured larder instance.
    ///
    /// Opens the database once to create the schema, so any storage problem
    /// surfaces here rather than on a later operation.
    ///
    /// # Errors
    ///
    /// Returns `LarderError::FileSystem` if the database directory cannot be
    /// created, `LarderError::Database` if schema initialization fails.
    pub async fn build(self) -> Result<Larder> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| LarderError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), LarderError>(())
        })
        .await
        .map_err(|e| LarderError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        Ok(Larder::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("larder")
            .place_data_file("larder.db")
            .map_err(|e| LarderError::XdgDirectory(e.to_string()))
    }
}

impl Default for LarderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
