//! Async tracker API for lists and items.
//!
//! Every [`Tracker`] operation opens its own [`Database`] on a blocking
//! worker, runs all of its statements on that connection and drops it before
//! returning. Connections are never shared between operations.
//!
//! ```text
//! handler ──▶ Tracker op ──▶ spawn_blocking ──▶ Database::new ──▶ SQL ──▶ drop
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use docket_core::{params::CreateItem, TrackerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("docket.db"))
//!     .build()
//!     .await?;
//!
//! let params = CreateItem::from_form("Buy milk", "New List", "Groceries")?;
//! tracker.create_item(&params).await?;
//!
//! for group in &tracker.index().await? {
//!     println!("{}: {} items", group.title, group.items.len());
//! }
//! # Ok(())
//! # }
//! ```

use std::path::{Path, PathBuf};

use tokio::task;

use crate::{
    db::Database,
    error::{DocketError, Result},
};

pub mod builder;
pub mod item_ops;
pub mod list_ops;


pub use builder::TrackerBuilder;
pub use item_ops::EditContext;

/// Main tracker interface for managing lists and items.
#[derive(Debug, Clone)]
pub struct Tracker {
    pub(crate) db_path: PathBuf,
}

impl Tracker {
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Path of the database file this tracker operates on.
    pub fn database_path(&self) -> &Path {
        &self.db_path
    }

    /// Runs `op` on a fresh connection inside a blocking task.
    async fn with_database<T, F>(&self, op: F) -> Result<T>
    where
        F: FnOnce(&mut Database) -> Result<T> + Send + 'static,
        T: Send + 'static,
    {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            op(&mut db)
        })
        .await
        .map_err(DocketError::join)?
    }
}
