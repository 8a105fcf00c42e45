//! Item CRUD operations and queries.

use rusqlite::{params, Connection, OptionalExtension, Row};

use super::list_queries::{find_list_id, insert_list, list_exists};
use crate::{
    error::{DatabaseResultExt, DocketError, Result},
    models::{Item, ItemWithList, ListGroups, TodoList},
    params::{require_content, CreateItem, EditItem, ListChoice},
};

const INSERT_ITEM_SQL: &str = "INSERT INTO items (content, list_id) VALUES (?1, ?2)";
const SELECT_GROUPED_ITEMS_SQL: &str = "SELECT i.id, i.done, i.content, i.list_id, l.title \
     FROM items i JOIN lists l ON i.list_id = l.id \
     ORDER BY l.title, l.id, i.id";
const SELECT_ITEM_SQL: &str = "SELECT i.id, i.list_id, i.done, i.content, l.title \
     FROM items i JOIN lists l ON i.list_id = l.id \
     WHERE i.id = ?1";
const CHECK_ITEM_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM items WHERE id = ?1)";
const UPDATE_ITEM_DONE_SQL: &str = "UPDATE items SET done = ?1 WHERE id = ?2";
const UPDATE_ITEM_SQL: &str = "UPDATE items SET content = ?1, list_id = ?2 WHERE id = ?3";
const DELETE_ITEM_SQL: &str = "DELETE FROM items WHERE id = ?1";

fn item_from_row(row: &Row<'_>) -> rusqlite::Result<Item> {
    Ok(Item {
        id: row.get::<_, i64>("id")? as u64,
        content: row.get("content")?,
        done: row.get("done")?,
        list_id: row.get::<_, i64>("list_id")? as u64,
    })
}

impl super::Database {
    /// Adds an item to the list with the given id.
    pub fn add_item(&mut self, content: &str, list_id: u64) -> Result<Item> {
        require_content(content)?;

        let tx = self.write_transaction()?;

        if !list_exists(&tx, list_id)? {
            return Err(DocketError::invalid_input("list_id")
                .with_reason(format!("List with ID {list_id} not found")));
        }
        let item = insert_item(&tx, content, list_id)?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(item)
    }

    /// Creates an item, creating its list first when requested.
    ///
    /// The list insert and the item insert share one transaction.
    pub fn create_item(&mut self, params: &CreateItem) -> Result<Item> {
        require_content(&params.content)?;

        let tx = self.write_transaction()?;

        let list_id = match &params.list {
            ListChoice::New(title) => insert_list(&tx, title)?.id,
            ListChoice::Existing(title) => {
                find_list_id(&tx, title)?.ok_or_else(|| DocketError::ListNotFound {
                    title: title.clone(),
                })?
            }
        };
        let item = insert_item(&tx, &params.content, list_id)?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(item)
    }

    /// Returns all items joined with their list, grouped by list.
    ///
    /// Items whose list no longer exists are not returned.
    pub fn grouped_items(&self) -> Result<ListGroups> {
        let mut stmt = self
            .connection
            .prepare(SELECT_GROUPED_ITEMS_SQL)
            .db_context("Failed to prepare query")?;

        let rows = stmt
            .query_map([], |row| {
                let list = TodoList {
                    id: row.get::<_, i64>("list_id")? as u64,
                    title: row.get("title")?,
                };
                Ok((list, item_from_row(row)?))
            })
            .db_context("Failed to query items")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch items")?;

        Ok(ListGroups::from_rows(rows))
    }

    /// Retrieves an item together with its list title.
    pub fn get_item(&self, id: u64) -> Result<Option<ItemWithList>> {
        get_item(&self.connection, id)
    }

    /// Checks whether an item with the given id exists.
    pub fn item_exists(&self, id: u64) -> Result<bool> {
        item_exists(&self.connection, id)
    }

    /// Sets the completion state of an item and returns the number of rows
    /// changed. A missing id changes nothing and is not an error.
    pub fn set_item_done(&mut self, id: u64, done: bool) -> Result<usize> {
        let tx = self.write_transaction()?;

        let changed = tx
            .execute(UPDATE_ITEM_DONE_SQL, params![done, id as i64])
            .db_context("Failed to update item status")?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(changed)
    }

    /// Updates the content and list of an item.
    ///
    /// Fails without touching the row when the item is missing, the content
    /// is empty or no list has the requested title.
    pub fn update_item(&mut self, params: &EditItem) -> Result<Item> {
        let tx = self.write_transaction()?;

        if get_item(&tx, params.id)?.is_none() {
            return Err(DocketError::ItemNotFound { id: params.id });
        }
        require_content(&params.content)?;

        let list_id =
            find_list_id(&tx, &params.list_title)?.ok_or_else(|| DocketError::ListNotFound {
                title: params.list_title.clone(),
            })?;

        tx.execute(
            UPDATE_ITEM_SQL,
            params![params.content, list_id as i64, params.id as i64],
        )
        .db_context("Failed to update item")?;

        let updated = get_item(&tx, params.id)?
            .map(|joined| joined.item)
            .ok_or(DocketError::ItemNotFound { id: params.id })?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(updated)
    }

    /// Deletes an item, failing with [`DocketError::ItemNotFound`] when it
    /// does not exist.
    pub fn delete_item(&mut self, id: u64) -> Result<()> {
        let tx = self.write_transaction()?;

        if !item_exists(&tx, id)? {
            return Err(DocketError::ItemNotFound { id });
        }

        tx.execute(DELETE_ITEM_SQL, params![id as i64])
            .db_context("Failed to delete item")?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(())
    }
}

fn insert_item(conn: &Connection, content: &str, list_id: u64) -> Result<Item> {
    conn.execute(INSERT_ITEM_SQL, params![content, list_id as i64])
        .db_context("Failed to insert item")?;

    Ok(Item {
        id: conn.last_insert_rowid() as u64,
        content: content.to_string(),
        done: false,
        list_id,
    })
}

fn get_item(conn: &Connection, id: u64) -> Result<Option<ItemWithList>> {
    conn.query_row(SELECT_ITEM_SQL, params![id as i64], |row| {
        Ok(ItemWithList {
            item: item_from_row(row)?,
            list_title: row.get("title")?,
        })
    })
    .optional()
    .db_context("Failed to query item")
}

fn item_exists(conn: &Connection, id: u64) -> Result<bool> {
    conn.query_row(CHECK_ITEM_EXISTS_SQL, params![id as i64], |row| row.get(0))
        .db_context("Failed to check item existence")
}
