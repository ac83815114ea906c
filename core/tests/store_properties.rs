//! Behavioural properties of `MemoryStore` over longer operation sequences.

use todo_core::{MemoryStore, StoreError, Todo, TodoStore};

#[test]
fn ids_strictly_increase_across_inserts_and_deletes() {
    let mut store = MemoryStore::new();
    let mut last = 0;
    for round in 0..20 {
        let todo = store.insert(&format!("item {round}")).unwrap();
        assert!(todo.id > last, "id {} not greater than {last}", todo.id);
        last = todo.id;
        if round % 3 == 0 {
            assert!(store.delete(todo.id).unwrap());
        }
    }
}

#[test]
fn empty_insert_never_changes_the_list() {
    let mut store = MemoryStore::seeded();
    let before = store.list().unwrap();
    let err = store.insert("").unwrap_err();
    assert!(err.is_validation());
    assert!(matches!(err, StoreError::Validation(_)));
    assert_eq!(store.list().unwrap(), before);
}

#[test]
fn toggle_twice_restores_completed() {
    let mut store = MemoryStore::new();
    let todo = store.insert("Flip").unwrap();
    let original = todo.completed;
    store.toggle(todo.id).unwrap();
    let back = store.toggle(todo.id).unwrap().unwrap();
    assert_eq!(back.completed, original);
    assert_eq!(store.get(todo.id).unwrap().unwrap().completed, original);
}

#[test]
fn delete_is_idempotent() {
    let mut once = MemoryStore::seeded();
    let mut twice = MemoryStore::seeded();

    assert!(once.delete(1).unwrap());
    assert!(twice.delete(1).unwrap());
    assert!(!twice.delete(1).unwrap());

    assert_eq!(once.list().unwrap(), twice.list().unwrap());
}

#[test]
fn insert_hello_on_empty_store() {
    let mut store = MemoryStore::new();
    assert_eq!(
        store.insert("Hello").unwrap(),
        Todo {
            id: 1,
            content: "Hello".to_string(),
            completed: false,
        }
    );
}

#[test]
fn insert_empty_on_empty_store() {
    let mut store = MemoryStore::new();
    assert!(store.insert("").is_err());
    assert!(store.list().unwrap().is_empty());
}

#[test]
fn update_is_visible_through_get() {
    let mut store = MemoryStore::new();
    store.insert("Task").unwrap();

    let updated = store.update(1, true).unwrap().unwrap();
    assert_eq!(updated.id, 1);
    assert!(updated.completed);
    assert!(store.get(1).unwrap().unwrap().completed);
}

#[test]
fn delete_missing_leaves_store_unchanged() {
    let mut store = MemoryStore::seeded();
    let before = store.list().unwrap();
    assert!(!store.delete(99).unwrap());
    assert_eq!(store.list().unwrap(), before);
}

#[test]
fn list_keeps_insertion_order_after_toggle() {
    let mut store = MemoryStore::new();
    store.insert("first").unwrap();
    store.insert("second").unwrap();
    store.toggle(2).unwrap();
    store.toggle(1).unwrap();

    let ids: Vec<_> = store.list().unwrap().iter().map(|t| t.id).collect();
    assert_eq!(ids, [1, 2]);
}

#[test]
fn only_completed_changes_on_update() {
    let mut store = MemoryStore::new();
    let created = store.insert("Stable").unwrap();
    let updated = store.update(created.id, true).unwrap().unwrap();
    assert_eq!(updated.id, created.id);
    assert_eq!(updated.content, created.content);
}
