//! Item operations for the Tracker.

use super::Tracker;
use crate::{
    error::{DocketError, Result},
    models::{Item, ItemWithList, ListGroups},
    params::{CreateItem, EditItem, Id, SetDone},
};

/// Data needed to present the edit form of one item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditContext {
    pub item: ItemWithList,
    pub list_titles: Vec<String>,
}

impl Tracker {
    /// Returns all items grouped by list, ordered by list title.
    pub async fn index(&self) -> Result<ListGroups> {
        self.with_database(|db| db.grouped_items()).await
    }

    /// Creates an item, creating a new list first when requested.
    pub async fn create_item(&self, params: &CreateItem) -> Result<Item> {
        let params = params.clone();
        self.with_database(move |db| db.create_item(&params)).await
    }

    /// Retrieves an item joined with its list title.
    pub async fn get_item(&self, params: &Id) -> Result<Option<ItemWithList>> {
        let id = params.id;
        self.with_database(move |db| db.get_item(id)).await
    }

    /// Sets the completion state of an item. Returns the number of rows
    /// changed, which is zero for an unknown id.
    pub async fn set_done(&self, params: &SetDone) -> Result<usize> {
        let SetDone { id, done } = *params;
        self.with_database(move |db| db.set_item_done(id, done)).await
    }

    /// Marks an item as done.
    pub async fn mark_done(&self, params: &Id) -> Result<usize> {
        self.set_done(&SetDone {
            id: params.id,
            done: true,
        })
        .await
    }

    /// Marks an item as not done.
    pub async fn mark_undone(&self, params: &Id) -> Result<usize> {
        self.set_done(&SetDone {
            id: params.id,
            done: false,
        })
        .await
    }

    /// Loads an item and every list title on one connection.
    pub async fn edit_context(&self, params: &Id) -> Result<EditContext> {
        let id = params.id;
        self.with_database(move |db| {
            let item = db
                .get_item(id)?
                .ok_or(DocketError::ItemNotFound { id })?;
            let list_titles = db.list_titles()?;
            Ok(EditContext { item, list_titles })
        })
        .await
    }

    /// Updates the content and list of an item.
    pub async fn edit_item(&self, params: &EditItem) -> Result<Item> {
        let params = params.clone();
        self.with_database(move |db| db.update_item(&params)).await
    }

    /// Deletes an item.
    pub async fn delete_item(&self, params: &Id) -> Result<()> {
        let id = params.id;
        self.with_database(move |db| db.delete_item(id)).await
    }
}
