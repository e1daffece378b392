//! End-to-end tests for snapshot persistence.

mod common;
use assistant_bot::storage::{load_or_empty, snapshot};
use assistant_bot::{BookStorage, Config, JsonFileStorage, MemoryStorage, Session, StorageError};
use common::{fixtures::*, *};
use serde_json::{json, Value};
use std::fs;
use tempfile::TempDir;

/// Saving then loading reproduces the same contacts, fields and tags.
#[test]
fn test_round_trip_through_file() {
    let dir = TempDir::new().unwrap();
    let storage = JsonFileStorage::new(dir.path().join("address_book.json"));

    let book = sample_book();
    storage.save(&book).unwrap();
    let loaded = storage.load().unwrap();

    assert_eq!(loaded, book);
    let ivan = loaded.find("Ivan Petrov").unwrap();
    assert_eq!(ivan.phones().len(), 2);
    assert_eq!(ivan.notes()[0].tag_list(), "urgent, work");
    assert_eq!(ivan.birthday().unwrap().to_text(), "15.06.1990");
}

#[test]
fn test_file_layout_is_versioned_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("book.json");
    JsonFileStorage::new(&path).save(&sample_book()).unwrap();

    let value: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["version"], snapshot::CURRENT_VERSION);
    assert_eq!(value["contacts"][0]["name"], "Ivan Petrov");
    assert_eq!(value["contacts"][0]["address"], "vul. Parkova 12, Kyiv");
    assert_eq!(value["contacts"][1]["notes"][0]["text"], "Quarterly report");
}

#[test]
fn test_v1_file_is_migrated() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("book.json");
    let v1 = json!({
        "version": 1,
        "contacts": [
            {"name": "Ivan", "phones": ["0661234567"]},
            {"name": "Olena", "phones": [], "birthday": "01.02.1995"}
        ]
    });
    fs::write(&path, v1.to_string()).unwrap();

    let storage = JsonFileStorage::new(&path);
    let book = storage.load().unwrap();
    assert_eq!(book.len(), 2);
    assert!(book.find("Olena").unwrap().notes().is_empty());

    // Saving upgrades the file in place.
    storage.save(&book).unwrap();
    let value: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["version"], 2);
}

#[test]
fn test_corrupt_file_falls_back_with_warning() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("book.json");
    fs::write(&path, "definitely not json").unwrap();

    let storage = JsonFileStorage::new(&path);
    let (book, warning) = load_or_empty(&storage);
    assert!(book.is_empty());

    let warning = warning.unwrap();
    let expected_prefix = format!("😓 Error loading address book from '{}':", path.display());
    assert!(warning.starts_with(&expected_prefix));
    assert!(warning.ends_with("Creating a new empty address book instead."));
}

#[test]
fn test_newer_version_is_rejected() {
    let storage = MemoryStorage::with_contents(r#"{"version": 99, "contacts": []}"#);
    match storage.load() {
        Err(StorageError::UnsupportedVersion { found, supported }) => {
            assert_eq!(found, 99);
            assert_eq!(supported, 2);
        }
        other => panic!("Expected UnsupportedVersion, got: {:?}", other),
    }
}

fn decode_single(contact: Value) -> Result<assistant_bot::AddressBook, StorageError> {
    snapshot::decode(&json!({"version": 2, "contacts": [contact]}).to_string())
}

/// Records that break a contact's own rules are rejected as invalid.
#[test]
fn test_inconsistent_contact_is_rejected() {
    let repeated_phone = json!({"name": "Ivan", "phones": ["0661234567", "0661234567"]});
    assert!(matches!(
        decode_single(repeated_phone),
        Err(StorageError::Invalid(_))
    ));

    let repeated_note = json!({
        "name": "Ivan",
        "phones": ["0661234567"],
        "notes": [{"text": "a", "tags": []}, {"text": "A", "tags": []}]
    });
    assert!(matches!(
        decode_single(repeated_note),
        Err(StorageError::Invalid(_))
    ));

    let blank_name = json!({"name": "   ", "phones": []});
    assert!(matches!(
        decode_single(blank_name),
        Err(StorageError::Invalid(_))
    ));
}

#[test]
fn test_inconsistent_contact_falls_back_with_warning() {
    let storage = MemoryStorage::with_contents(
        json!({"version": 2, "contacts": [
            {"name": "Ivan", "phones": ["0661234567", "0661234567"]}
        ]})
        .to_string(),
    );
    let (book, warning) = load_or_empty(&storage);
    assert!(book.is_empty());
    assert!(warning.unwrap().contains("repeated"));
}

#[test]
fn test_missing_file_starts_empty_without_warning() {
    let dir = TempDir::new().unwrap();
    let storage = JsonFileStorage::new(dir.path().join("absent.json"));
    let (book, warning) = load_or_empty(&storage);
    assert!(book.is_empty());
    assert!(warning.is_none());
}

/// A session persists every change so a later session sees it.
#[tokio::test]
async fn test_session_persists_between_runs() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("book.json");
    let config = Config {
        book_path: path.clone(),
        ..Config::default()
    };

    let mut first = Session::open(JsonFileStorage::new(&path), &config).with_today(today());
    let mut out = Vec::new();
    first
        .run_until(
            "addcontact Ivan 0661234567\naddnote Ivan Call back #todo\nexit\n".as_bytes(),
            &mut out,
            std::future::pending(),
        )
        .await
        .unwrap();

    let second = Session::open(JsonFileStorage::new(&path), &config);
    let ivan = second.book().find("Ivan").unwrap();
    assert!(ivan.has_phone("0661234567"));
    assert!(ivan.notes()[0].has_tag("todo"));
}
