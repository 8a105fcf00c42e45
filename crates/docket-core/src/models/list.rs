//! List model definition.

use serde::{Deserialize, Serialize};

/// A named grouping of to-do items.
///
/// Titles are not unique: creating a list with an existing title yields a
/// second, independent list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TodoList {
    /// Unique identifier for the list
    pub id: u64,

    /// Title shown as the group heading
    pub title: String,
}
