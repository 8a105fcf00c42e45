//! Item model definition and related functionality.

use serde::{Deserialize, Serialize};

/// A single to-do entry belonging to exactly one list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    /// Unique identifier for the item
    pub id: u64,

    /// Task text, never empty
    pub content: String,

    /// Completion state
    #[serde(default)]
    pub done: bool,

    /// ID of the owning list
    pub list_id: u64,
}

/// An item joined with the title of its owning list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemWithList {
    #[serde(flatten)]
    pub item: Item,

    /// Title of the list referenced by `item.list_id`
    pub list_title: String,
}
