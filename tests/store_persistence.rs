//! Integration tests for the JSON-backed contact store, run against real
//! files in a temporary directory.

use deskmate::error::Error;
use deskmate::models::Contact;
use deskmate::store::ContactStore;
use tempfile::TempDir;

fn contact(name: &str, phone: &str) -> Contact {
    Contact {
        name: name.to_string(),
        phone: phone.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        address: "1 Main St".to_string(),
    }
}

#[test]
fn missing_file_opens_as_an_empty_store() {
    let dir = TempDir::new().unwrap();
    let store = ContactStore::open_at(dir.path().join("contacts.json")).unwrap();
    assert!(store.is_empty());
}

#[test]
fn add_persists_and_survives_a_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contacts.json");

    let mut store = ContactStore::open_at(&path).unwrap();
    store.add(contact("Alice", "555-0100")).unwrap();
    store.add(contact("Bob", "555-0101")).unwrap();

    let reopened = ContactStore::open_at(&path).unwrap();
    assert_eq!(reopened.len(), 2);
    assert_eq!(reopened.contacts()[0].name, "Alice");
    assert_eq!(reopened.contacts()[1].name, "Bob");
}

#[test]
fn append_keeps_existing_records_and_adds_at_the_end() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contacts.json");

    let mut store = ContactStore::open_at(&path).unwrap();
    for i in 0..5 {
        store.add(contact(&format!("Person{i}"), "555")).unwrap();
    }

    let newcomer = contact("Zara", "555-0199");
    store.add(newcomer.clone()).unwrap();

    let reopened = ContactStore::open_at(&path).unwrap();
    assert_eq!(reopened.len(), 6);
    assert_eq!(*reopened.contacts().last().unwrap(), newcomer);
}

#[test]
fn replace_updates_in_place_without_reordering() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contacts.json");

    let mut store = ContactStore::open_at(&path).unwrap();
    store.add(contact("Alice", "555-0100")).unwrap();
    store.add(contact("Bob", "555-0101")).unwrap();
    store.add(contact("Carol", "555-0102")).unwrap();

    let mut updated = contact("Bob", "555-9999");
    updated.address = "2 Side St".to_string();
    store.replace(1, updated).unwrap();

    let reopened = ContactStore::open_at(&path).unwrap();
    assert_eq!(reopened.contacts()[0].name, "Alice");
    assert_eq!(reopened.contacts()[1].phone, "555-9999");
    assert_eq!(reopened.contacts()[2].name, "Carol");
}

#[test]
fn remove_shifts_later_records_down() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contacts.json");

    let mut store = ContactStore::open_at(&path).unwrap();
    store.add(contact("Alice", "555-0100")).unwrap();
    store.add(contact("Bob", "555-0101")).unwrap();
    store.add(contact("Carol", "555-0102")).unwrap();

    let removed = store.remove(1).unwrap();
    assert_eq!(removed.name, "Bob");

    let reopened = ContactStore::open_at(&path).unwrap();
    assert_eq!(reopened.len(), 2);
    assert_eq!(reopened.contacts()[1].name, "Carol");
}

#[test]
fn out_of_bounds_index_is_reported_not_panicked() {
    let dir = TempDir::new().unwrap();
    let mut store = ContactStore::open_at(dir.path().join("contacts.json")).unwrap();
    store.add(contact("Alice", "555-0100")).unwrap();

    assert!(matches!(
        store.remove(5),
        Err(Error::IndexOutOfBounds { index: 5, len: 1 })
    ));
    assert!(matches!(
        store.replace(1, contact("Bob", "555")),
        Err(Error::IndexOutOfBounds { index: 1, len: 1 })
    ));
    // The failed mutations must not have touched the list.
    assert_eq!(store.len(), 1);
}

#[test]
fn blank_name_is_rejected_before_persisting() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contacts.json");
    let mut store = ContactStore::open_at(&path).unwrap();

    assert!(matches!(
        store.add(contact("   ", "555")),
        Err(Error::Validation(_))
    ));
    assert!(!path.exists());
}

#[test]
fn garbage_file_surfaces_a_parse_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contacts.json");
    std::fs::write(&path, "this is not json{{{").unwrap();

    assert!(matches!(
        ContactStore::open_at(&path),
        Err(Error::Parse(_))
    ));
}

#[test]
fn file_on_disk_is_pretty_printed_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("contacts.json");

    let mut store = ContactStore::open_at(&path).unwrap();
    store.add(contact("Alice", "555-0100")).unwrap();

    let raw = std::fs::read_to_string(&path).unwrap();
    // Pretty printing puts each field on its own line.
    assert!(raw.contains("\n"));
    assert!(raw.contains("\"name\": \"Alice\""));

    // Unknown fields are ignored and missing optional fields default, so the
    // format tolerates hand edits.
    std::fs::write(
        &path,
        r#"[{"name": "Hand Edited", "note": "added manually"}]"#,
    )
    .unwrap();
    let reopened = ContactStore::open_at(&path).unwrap();
    assert_eq!(reopened.contacts()[0].name, "Hand Edited");
    assert_eq!(reopened.contacts()[0].phone, "");
}
