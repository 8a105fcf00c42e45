//! Page views: everything a renderer needs for one response.

use std::fmt;

use super::FlashMessages;
use crate::{
    models::{ItemWithList, ListGroups},
    params::NEW_LIST_SENTINEL,
};

/// Shown when there is nothing to list.
pub const EMPTY_INDEX_MESSAGE: &str = "No tasks found. Please add new tasks or lists.";

/// The grouped list view.
pub struct IndexPage<'a> {
    pub groups: &'a ListGroups,
    pub flashes: &'a [String],
}

impl<'a> IndexPage<'a> {
    pub fn new(groups: &'a ListGroups, flashes: &'a [String]) -> Self {
        Self { groups, flashes }
    }
}

impl fmt::Display for IndexPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Docket")?;
        writeln!(f)?;
        write!(f, "{}", FlashMessages(self.flashes))?;
        write!(f, "{}", self.groups)
    }
}

/// The form for creating an item.
pub struct CreatePage<'a> {
    pub list_titles: &'a [String],
    pub flashes: &'a [String],
}

impl fmt::Display for CreatePage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# New task")?;
        writeln!(f)?;
        write!(f, "{}", FlashMessages(self.flashes))?;
        writeln!(f, "## Lists")?;
        writeln!(f)?;
        for title in self.list_titles {
            writeln!(f, "- {title}")?;
        }
        writeln!(f, "- {NEW_LIST_SENTINEL}")
    }
}

/// The form for editing an item.
pub struct EditPage<'a> {
    pub item: &'a ItemWithList,
    pub list_titles: &'a [String],
    pub flashes: &'a [String],
}

impl fmt::Display for EditPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Edit task #{}", self.item.item.id)?;
        writeln!(f)?;
        write!(f, "{}", FlashMessages(self.flashes))?;
        write!(f, "{}", self.item)?;
        writeln!(f)?;
        writeln!(f, "## Lists")?;
        writeln!(f)?;
        for title in self.list_titles {
            if *title == self.item.list_title {
                writeln!(f, "- **{title}**")?;
            } else {
                writeln!(f, "- {title}")?;
            }
        }
        Ok(())
    }
}

/// Shown instead of the list view when the store cannot be read.
pub struct ErrorPage<'a> {
    pub flashes: &'a [String],
}

impl fmt::Display for ErrorPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# Something went wrong")?;
        writeln!(f)?;
        write!(f, "{}", FlashMessages(self.flashes))
    }
}
