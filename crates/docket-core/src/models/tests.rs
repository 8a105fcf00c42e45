//! Tests for the models module.

use super::*;

fn list(id: u64, title: &str) -> TodoList {
    TodoList {
        id,
        title: title.to_string(),
    }
}

fn item(id: u64, content: &str, list_id: u64) -> Item {
    Item {
        id,
        content: content.to_string(),
        done: false,
        list_id,
    }
}

#[test]
fn test_groups_keep_first_seen_order() {
    let groups = ListGroups::from_rows(vec![
        (list(2, "Chores"), item(1, "Sweep", 2)),
        (list(2, "Chores"), item(3, "Mop", 2)),
        (list(1, "Groceries"), item(2, "Milk", 1)),
    ]);

    assert_eq!(groups.0.len(), 2);
    assert_eq!(groups.0[0].title, "Chores");
    assert_eq!(
        groups.0[0].items.iter().map(|i| i.id).collect::<Vec<_>>(),
        vec![1, 3]
    );
    assert_eq!(groups.0[1].title, "Groceries");
    assert_eq!(groups.item_count(), 3);
}

#[test]
fn test_unsorted_rows_do_not_split_groups() {
    let groups = ListGroups::from_rows(vec![
        (list(1, "Groceries"), item(1, "Milk", 1)),
        (list(2, "Chores"), item(2, "Sweep", 2)),
        (list(1, "Groceries"), item(3, "Eggs", 1)),
    ]);

    assert_eq!(groups.0.len(), 2);
    let groceries = groups.by_title("Groceries").expect("Groceries group");
    assert_eq!(groceries.items.len(), 2);
    assert_eq!(groceries.items[1].content, "Eggs");
}

#[test]
fn test_same_title_different_lists_stay_separate() {
    let groups = ListGroups::from_rows(vec![
        (list(1, "Work"), item(1, "Report", 1)),
        (list(4, "Work"), item(2, "Slides", 4)),
    ]);

    assert_eq!(groups.0.len(), 2);
    assert_eq!(groups.0[0].list_id, 1);
    assert_eq!(groups.0[1].list_id, 4);
}

#[test]
fn test_empty_rows() {
    let groups = ListGroups::from_rows(Vec::new());
    assert!(groups.is_empty());
    assert_eq!(groups.item_count(), 0);
    assert!(groups.by_title("Anything").is_none());
}
