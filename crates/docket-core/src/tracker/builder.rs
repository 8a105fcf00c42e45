//! Builder for creating and configuring Tracker instances.

use std::path::{Path, PathBuf};

use super::Tracker;
use crate::error::{DocketError, Result};

/// Builder for creating and configuring Tracker instances.
#[derive(Debug, Clone, Default)]
pub struct TrackerBuilder {
    database_path: Option<PathBuf>,
}

impl TrackerBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/docket/docket.db` or `~/.local/share/docket/docket.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the tracker, creating the database file and schema if needed.
    ///
    /// # Errors
    ///
    /// Returns `DocketError::FileSystem` if the path names a directory or its
    /// parent cannot be created, and `DocketError::Database` if the schema
    /// cannot be applied.
    pub async fn build(self) -> Result<Tracker> {
        let db_path = match self.database_path {
            Some(path) => path,
            None => Self::default_database_path()?,
        };
        prepare_location(&db_path)?;

        // The first connection applies the schema
        let tracker = Tracker::new(db_path);
        tracker.with_database(|_| Ok(())).await?;
        Ok(tracker)
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("docket")
            .place_data_file("docket.db")
            .map_err(|e| DocketError::XdgDirectory(e.to_string()))
    }
}

fn prepare_location(db_path: &Path) -> Result<()> {
    let fs_error = |path: &Path, source| DocketError::FileSystem {
        path: path.to_path_buf(),
        source,
    };

    if db_path.is_dir() {
        return Err(fs_error(
            db_path,
            std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                "database path is a directory",
            ),
        ));
    }
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| fs_error(parent, e))?;
    }
    Ok(())
}
