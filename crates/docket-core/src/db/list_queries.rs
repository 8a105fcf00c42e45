//! List CRUD operations and queries.

use rusqlite::{params, Connection, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, Result},
    models::TodoList,
};

const INSERT_LIST_SQL: &str = "INSERT INTO lists (title) VALUES (?1)";
const SELECT_LIST_ID_SQL: &str = "SELECT id FROM lists WHERE title = ?1 ORDER BY id LIMIT 1";
const CHECK_LIST_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM lists WHERE id = ?1)";
const SELECT_LISTS_SQL: &str = "SELECT id, title FROM lists ORDER BY title, id";

impl super::Database {
    /// Creates a new list. Titles are not deduplicated.
    pub fn create_list(&mut self, title: &str) -> Result<TodoList> {
        let tx = self.write_transaction()?;

        let list = insert_list(&tx, title)?;

        tx.commit().db_context("Failed to commit transaction")?;
        Ok(list)
    }

    /// Looks up the id of the oldest list with the given title.
    pub fn find_list_id(&self, title: &str) -> Result<Option<u64>> {
        find_list_id(&self.connection, title)
    }

    /// Returns all lists ordered by title.
    pub fn get_lists(&self) -> Result<Vec<TodoList>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_LISTS_SQL)
            .db_context("Failed to prepare query")?;

        let lists = stmt
            .query_map([], |row| {
                Ok(TodoList {
                    id: row.get::<_, i64>("id")? as u64,
                    title: row.get("title")?,
                })
            })
            .db_context("Failed to query lists")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch lists")?;

        Ok(lists)
    }

    /// Returns every list title, in the order used by list selectors.
    pub fn list_titles(&self) -> Result<Vec<String>> {
        Ok(self.get_lists()?.into_iter().map(|list| list.title).collect())
    }
}

pub(super) fn insert_list(conn: &Connection, title: &str) -> Result<TodoList> {
    conn.execute(INSERT_LIST_SQL, params![title])
        .db_context("Failed to insert list")?;

    Ok(TodoList {
        id: conn.last_insert_rowid() as u64,
        title: title.to_string(),
    })
}

pub(super) fn find_list_id(conn: &Connection, title: &str) -> Result<Option<u64>> {
    conn.query_row(SELECT_LIST_ID_SQL, params![title], |row| {
        row.get::<_, i64>("id")
    })
    .optional()
    .db_context("Failed to query list")
    .map(|id| id.map(|id| id as u64))
}

pub(super) fn list_exists(conn: &Connection, id: u64) -> Result<bool> {
    conn.query_row(CHECK_LIST_EXISTS_SQL, params![id as i64], |row| row.get(0))
        .db_context("Failed to check list existence")
}
