//! Builder for creating and configuring Kitchen instances.

use std::path::{Path, PathBuf};

use log::debug;
use tokio::task;

use super::Kitchen;
use crate::{
    db::Database,
    error::{Result, SousError},
};

/// Builder for creating and configuring Kitchen instances.
#[derive(Debug, Clone, Default)]
pub struct KitchenBuilder {
    database_path: Option<PathBuf>,
}

impl KitchenBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/sous/sous.db` or `~/.local/share/sous/sous.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured kitchen, creating the database if needed.
    ///
    /// # Errors
    ///
    /// Returns `SousError::FileSystem` if the database directory cannot be
    /// created, `SousError::Database` if schema initialization fails.
    pub async fn build(self) -> Result<Kitchen> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| SousError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), SousError>(())
        })
        .await
        .map_err(SousError::join_error)??;

        debug!("Recipe store ready at {}", db_path.display());
        Ok(Kitchen::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("sous")
            .place_data_file("sous.db")
            .map_err(|e| SousError::DataDirectory(e.to_string()))
    }
}
