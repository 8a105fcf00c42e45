//! List operations for the Tracker.

use super::Tracker;
use crate::{error::Result, models::TodoList};

impl Tracker {
    /// Creates a list with the given title.
    pub async fn create_list(&self, title: &str) -> Result<TodoList> {
        let title = title.to_string();
        self.with_database(move |db| db.create_list(&title)).await
    }

    /// Returns every list title for list selectors.
    pub async fn list_titles(&self) -> Result<Vec<String>> {
        self.with_database(|db| db.list_titles()).await
    }

    /// Returns all lists ordered by title.
    pub async fn get_lists(&self) -> Result<Vec<TodoList>> {
        self.with_database(|db| db.get_lists()).await
    }
}
