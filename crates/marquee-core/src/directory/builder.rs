//! Builder for creating and configuring Directory instances.

use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use tokio::task;

use super::Directory;
use crate::{
    clock::{Clock, SystemClock},
    db::Database,
    error::{DirectoryError, Result},
};

/// Builder for creating and configuring Directory instances.
#[derive(Clone)]
pub struct DirectoryBuilder {
    database_path: Option<PathBuf>,
    clock: Option<Arc<dyn Clock>>,
}

impl DirectoryBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            clock: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/marquee/marquee.db` or `~/.local/share/marquee/marquee.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Pins the reference instant. Defaults to [`SystemClock`].
    pub fn with_clock<C: Clock + 'static>(mut self, clock: C) -> Self {
        self.clock = Some(Arc::new(clock));
        self
    }

    /// Builds the configured directory instance.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryError::FileSystem` if the database path is invalid
    /// Returns `DirectoryError::Database` if database initialization fails
    pub async fn build(self) -> Result<Directory> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| DirectoryError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), DirectoryError>(())
        })
        .await
        .map_err(|e| DirectoryError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        log::debug!("directory ready at {}", db_path.display());
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        Ok(Directory::new(db_path, clock))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("marquee")
            .place_data_file("marquee.db")
            .map_err(|e| DirectoryError::XdgDirectory(e.to_string()))
    }
}

impl Default for DirectoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
