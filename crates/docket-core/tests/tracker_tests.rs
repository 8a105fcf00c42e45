mod common;

use common::create_test_tracker;
use docket_core::{CreateItem, EditItem, Id, IndexPage};

#[tokio::test]
async fn test_buy_milk_scenario() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let params = CreateItem::from_form("Buy milk", "New List", "Groceries").unwrap();
    tracker.create_item(&params).await.unwrap();

    let lists = tracker.get_lists().await.unwrap();
    assert_eq!(lists.len(), 1);
    assert_eq!(lists[0].title, "Groceries");

    let groups = tracker.index().await.unwrap();
    let group = groups.by_title("Groceries").unwrap();
    assert_eq!(group.items.len(), 1);
    assert_eq!(group.items[0].content, "Buy milk");
    assert!(!group.items[0].done);
    assert_eq!(group.items[0].list_id, lists[0].id);
}

#[tokio::test]
async fn test_items_follow_their_list() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let groceries = tracker.create_list("Groceries").await.unwrap();
    let chores = tracker.create_list("Chores").await.unwrap();

    let mut expected = Vec::new();
    for (content, list) in [
        ("Buy milk", "Groceries"),
        ("Sweep", "Chores"),
        ("Buy eggs", "Groceries"),
        ("Mop", "Chores"),
        ("Buy bread", "Groceries"),
    ] {
        let item = tracker
            .create_item(&CreateItem::from_form(content, list, "").unwrap())
            .await
            .unwrap();
        if item.list_id == groceries.id {
            expected.push(item);
        }
    }

    let groups = tracker.index().await.unwrap();
    let group = groups.by_title("Groceries").unwrap();
    assert_eq!(group.list_id, groceries.id);
    assert_eq!(group.items, expected);
    assert_eq!(groups.by_title("Chores").unwrap().list_id, chores.id);
}

#[tokio::test]
async fn test_edit_then_render_index() {
    let (_temp_dir, tracker) = create_test_tracker().await;

    let item = tracker
        .create_item(&CreateItem::from_form("Sweep", "New List", "Chores").unwrap())
        .await
        .unwrap();
    tracker.mark_done(&Id::from(item.id)).await.unwrap();
    tracker
        .edit_item(&EditItem {
            id: item.id,
            content: "Sweep the porch".to_string(),
            list_title: "Chores".to_string(),
        })
        .await
        .unwrap();

    let groups = tracker.index().await.unwrap();
    let output = IndexPage::new(&groups, &[]).to_string();
    assert!(output.contains("## Chores"));
    assert!(output.contains(&format!("- [x] Sweep the porch (#{})", item.id)));
}

#[tokio::test]
async fn test_operations_run_concurrently() {
    let (_temp_dir, tracker) = create_test_tracker().await;
    tracker.create_list("Groceries").await.unwrap();

    let mut handles = Vec::new();
    for n in 0..8 {
        let tracker = tracker.clone();
        handles.push(tokio::spawn(async move {
            let params = CreateItem::from_form(&format!("Item {n}"), "Groceries", "").unwrap();
            tracker.create_item(&params).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let groups = tracker.index().await.unwrap();
    assert_eq!(groups.item_count(), 8);
}
