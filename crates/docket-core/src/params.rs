//! Parameter structures for docket operations.
//!
//! These types carry no framework derives. The HTTP layer deserializes its
//! own form structs and converts them into these before calling the
//! [`Tracker`](crate::Tracker).

use crate::error::{DocketError, Result};

/// Sentinel value of the list selector meaning "create a new list".
pub const NEW_LIST_SENTINEL: &str = "New List";

/// Identifies a single item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Id {
    pub id: u64,
}

impl From<u64> for Id {
    fn from(id: u64) -> Self {
        Self { id }
    }
}

/// Which list a new item should go to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListChoice {
    /// An existing list, looked up by title
    Existing(String),
    /// A list to be created with this title
    New(String),
}

impl ListChoice {
    /// Resolves the `list` and `new_list` form values.
    ///
    /// The sentinel [`NEW_LIST_SENTINEL`] together with a non-empty
    /// `new_list` selects a new list. Anything else names an existing list,
    /// including the sentinel itself when `new_list` is empty.
    pub fn from_form(list: &str, new_list: &str) -> Self {
        if list == NEW_LIST_SENTINEL && !new_list.is_empty() {
            Self::New(new_list.to_string())
        } else {
            Self::Existing(list.to_string())
        }
    }
}

/// Parameters for creating an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateItem {
    pub content: String,
    pub list: ListChoice,
}

impl CreateItem {
    /// Builds create parameters from raw form values.
    pub fn from_form(content: &str, list: &str, new_list: &str) -> Result<Self> {
        require_content(content)?;
        Ok(Self {
            content: content.to_string(),
            list: ListChoice::from_form(list, new_list),
        })
    }
}

/// Parameters for editing an item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditItem {
    pub id: u64,
    pub content: String,
    /// Title of the list the item should belong to
    pub list_title: String,
}

/// Parameters for toggling the completion state of an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetDone {
    pub id: u64,
    pub done: bool,
}

pub(crate) fn require_content(content: &str) -> Result<()> {
    if content.is_empty() {
        return Err(DocketError::invalid_input("content").with_reason("Content is required!"));
    }
    Ok(())
}
