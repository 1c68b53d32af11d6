//! Builder for creating and configuring Catalogue instances.

use std::path::{Path, PathBuf};

use super::Catalogue;
use crate::{
    db::Database,
    error::{CatalogueError, Result},
};

/// Builder for creating and configuring Catalogue instances.
#[derive(Debug, Clone, Default)]
pub struct CatalogueBuilder {
    database_path: Option<PathBuf>,
    in_memory: bool,
}

impl CatalogueBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/shelf/library.db` or `~/.local/share/shelf/library.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Uses a private in-memory database instead of a file.
    pub fn in_memory(mut self) -> Self {
        self.in_memory = true;
        self
    }

    /// Opens the database and returns the catalogue.
    ///
    /// # Errors
    ///
    /// Returns `CatalogueError::FileSystem` if the database directory cannot
    /// be created, `CatalogueError::XdgDirectory` if no default location can
    /// be determined, and `CatalogueError::Database` if opening or schema
    /// initialization fails.
    pub fn build(self) -> Result<Catalogue> {
        if self.in_memory {
            return Ok(Catalogue::new(Database::open_in_memory()?));
        }

        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| CatalogueError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        Ok(Catalogue::new(Database::new(&db_path)?))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("shelf")
            .place_data_file("library.db")
            .map_err(|e| CatalogueError::XdgDirectory(e.to_string()))
    }
}
