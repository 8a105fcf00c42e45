//! Items grouped under their owning list for the list view.

use std::collections::HashMap;

use serde::Serialize;

use super::{Item, TodoList};

/// One list together with its items, in insertion order.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ListGroup {
    pub list_id: u64,
    pub title: String,
    pub items: Vec<Item>,
}

/// Ordered collection of list groups.
///
/// Groups are keyed by list id, so rows for the same list are collected into
/// one group no matter where they appear in the input. Groups keep the order
/// in which their list was first seen.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct ListGroups(pub Vec<ListGroup>);

impl ListGroups {
    /// Builds groups from `(list, item)` pairs as produced by the list/item
    /// join.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (TodoList, Item)>,
    {
        let mut positions: HashMap<u64, usize> = HashMap::new();
        let mut groups: Vec<ListGroup> = Vec::new();

        for (list, item) in rows {
            let index = *positions.entry(list.id).or_insert_with(|| {
                groups.push(ListGroup {
                    list_id: list.id,
                    title: list.title,
                    items: Vec::new(),
                });
                groups.len() - 1
            });
            groups[index].items.push(item);
        }

        Self(groups)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Total number of items across all groups.
    pub fn item_count(&self) -> usize {
        self.0.iter().map(|group| group.items.len()).sum()
    }

    /// Returns the first group with the given title.
    pub fn by_title(&self, title: &str) -> Option<&ListGroup> {
        self.0.iter().find(|group| group.title == title)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ListGroup> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a ListGroups {
    type Item = &'a ListGroup;
    type IntoIter = std::slice::Iter<'a, ListGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
