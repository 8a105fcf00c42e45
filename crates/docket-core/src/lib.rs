//! Core library for the docket to-do tracker.
//!
//! This crate provides the storage and domain logic for lists and items:
//! the SQLite accessor ([`db`]), plain data models ([`models`]), operation
//! parameters ([`params`]), the async [`Tracker`] facade and markdown page
//! views ([`display`]) that presentation layers render.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use docket_core::{params::{CreateItem, Id}, TrackerBuilder};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let tracker = TrackerBuilder::new()
//!     .with_database_path(Some("docket.db"))
//!     .build()
//!     .await?;
//!
//! let item = tracker
//!     .create_item(&CreateItem::from_form("Buy milk", "New List", "Groceries")?)
//!     .await?;
//! tracker.mark_done(&Id::from(item.id)).await?;
//!
//! let groups = tracker.index().await?;
//! println!("{}", docket_core::IndexPage::new(&groups, &[]));
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod tracker;

// Re-export commonly used types
pub use db::Database;
pub use display::{CreatePage, EditPage, ErrorPage, FlashMessages, IndexPage};
pub use error::{DocketError, Result};
pub use models::{Item, ItemWithList, ListGroup, ListGroups, TodoList};
pub use params::{CreateItem, EditItem, Id, ListChoice, SetDone, NEW_LIST_SENTINEL};
pub use tracker::{EditContext, Tracker, TrackerBuilder};
