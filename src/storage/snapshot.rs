//! Versioned JSON snapshot of the address book.
//!
//! ```json
//! {"version": 2, "contacts": [{"name": "Ivan", "phones": ["0661234567"], "notes": []}]}
//! ```
//!
//! Version 1 snapshots predate emails, addresses and notes. A file without a
//! `version` field is treated as version 1.

use crate::book::AddressBook;
use crate::error::{StorageError, StorageResult};
use crate::models::Contact;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Version written by [`encode`].
pub const CURRENT_VERSION: u32 = 2;

#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    version: u32,
    contacts: Vec<Contact>,
}

#[derive(Serialize)]
struct SnapshotRef<'a> {
    version: u32,
    contacts: Vec<&'a Contact>,
}

/// Serialize the book as pretty-printed JSON at [`CURRENT_VERSION`].
pub fn encode(book: &AddressBook) -> StorageResult<String> {
    let snapshot = SnapshotRef {
        version: CURRENT_VERSION,
        contacts: book.iter().collect(),
    };
    Ok(serde_json::to_string_pretty(&snapshot)?)
}

/// Parse a snapshot of any known version, migrating it first if needed.
///
/// # Errors
///
/// - `StorageError::Json` for malformed JSON or a record failing validation
/// - `StorageError::UnsupportedVersion` for a snapshot from a newer version
/// - `StorageError::Invalid` when records break a book-wide invariant
pub fn decode(text: &str) -> StorageResult<AddressBook> {
    let mut value: Value = serde_json::from_str(text)?;
    let version = snapshot_version(&value)?;

    if version > CURRENT_VERSION {
        return Err(StorageError::UnsupportedVersion {
            found: version,
            supported: CURRENT_VERSION,
        });
    }
    if version < CURRENT_VERSION {
        tracing::info!(from = version, to = CURRENT_VERSION, "Migrating snapshot");
        value = migrate(value, version)?;
    }

    let snapshot: Snapshot = serde_json::from_value(value)?;
    AddressBook::from_contacts(snapshot.contacts).map_err(StorageError::Invalid)
}

fn snapshot_version(value: &Value) -> StorageResult<u32> {
    let object = value
        .as_object()
        .ok_or_else(|| StorageError::Invalid("snapshot must be a JSON object".to_string()))?;

    match object.get("version") {
        None => Ok(1),
        Some(raw) => raw
            .as_u64()
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| StorageError::Invalid(format!("bad version field: {}", raw))),
    }
}

/// Bring an older snapshot up to [`CURRENT_VERSION`].
///
/// Each step fills in the fields the older layout did not have, so the
/// result deserializes without relying on serde defaults.
pub fn migrate(mut value: Value, from: u32) -> StorageResult<Value> {
    let mut version = from;
    while version < CURRENT_VERSION {
        value = match version {
            1 => migrate_v1_to_v2(value)?,
            other => {
                return Err(StorageError::Invalid(format!(
                    "no migration from version {}",
                    other
                )))
            }
        };
        version += 1;
    }
    Ok(value)
}

fn migrate_v1_to_v2(value: Value) -> StorageResult<Value> {
    let Value::Object(mut root) = value else {
        return Err(StorageError::Invalid("snapshot must be a JSON object".to_string()));
    };

    let contacts = match root.remove("contacts") {
        Some(Value::Array(items)) => items,
        None => Vec::new(),
        Some(_) => return Err(StorageError::Invalid("contacts must be a list".to_string())),
    };

    let contacts = contacts
        .into_iter()
        .map(|record| match record {
            Value::Object(mut fields) => {
                fields.entry("phones").or_insert_with(|| Value::Array(Vec::new()));
                fields.entry("email").or_insert(Value::Null);
                fields.entry("address").or_insert(Value::Null);
                fields.entry("notes").or_insert_with(|| Value::Array(Vec::new()));
                Ok(Value::Object(fields))
            }
            _ => Err(StorageError::Invalid("contact must be a JSON object".to_string())),
        })
        .collect::<StorageResult<Vec<_>>>()?;

    let mut migrated = Map::new();
    migrated.insert("version".to_string(), Value::from(2u32));
    migrated.insert("contacts".to_string(), Value::Array(contacts));
    Ok(Value::Object(migrated))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Phone;
    use crate::models::Note;
    use serde_json::json;

    fn sample() -> AddressBook {
        let mut ivan = Contact::new("Ivan");
        ivan.add_phone(Phone::new("0661234567").unwrap()).unwrap();
        ivan.add_note(Note::new("Call back", ["work"]).unwrap());
        let mut book = AddressBook::new();
        book.add(ivan).unwrap();
        book.add(Contact::new("Olena")).unwrap();
        book
    }

    #[test]
    fn test_encode_writes_current_version() {
        let text = encode(&sample()).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["version"], 2);
        assert_eq!(value["contacts"][0]["phones"][0], "0661234567");
        assert_eq!(value["contacts"][0]["notes"][0]["tags"][0], "work");
        assert!(value["contacts"][1].get("email").is_none());
    }

    #[test]
    fn test_decode_current() {
        let book = sample();
        assert_eq!(decode(&encode(&book).unwrap()).unwrap(), book);
    }

    #[test]
    fn test_decode_v1_without_version_field() {
        let text = json!({
            "contacts": [{"name": "Ivan", "phones": ["0661234567"], "birthday": "15.06.1990"}]
        })
        .to_string();
        let book = decode(&text).unwrap();
        let ivan = book.find("Ivan").unwrap();
        assert!(ivan.email().is_none());
        assert!(ivan.address().is_none());
        assert!(ivan.notes().is_empty());
        assert_eq!(ivan.birthday().unwrap().to_text(), "15.06.1990");
    }

    #[test]
    fn test_migrate_fills_defaults() {
        let migrated = migrate(json!({"version": 1, "contacts": [{"name": "Ivan"}]}), 1).unwrap();
        assert_eq!(
            migrated,
            json!({
                "version": 2,
                "contacts": [{"name": "Ivan", "phones": [], "email": null, "address": null, "notes": []}]
            })
        );
    }

    #[test]
    fn test_decode_rejects_newer_version() {
        let err = decode(r#"{"version": 3, "contacts": []}"#).unwrap_err();
        assert!(matches!(
            err,
            StorageError::UnsupportedVersion { found: 3, supported: 2 }
        ));
    }

    #[test]
    fn test_decode_rejects_invalid_records() {
        let bad_phone = json!({"version": 2, "contacts": [{"name": "Ivan", "phones": ["123"]}]});
        assert!(matches!(
            decode(&bad_phone.to_string()).unwrap_err(),
            StorageError::Json(_)
        ));

        let shared = json!({"version": 2, "contacts": [
            {"name": "Ivan", "phones": ["0661234567"]},
            {"name": "Olena", "phones": ["0661234567"]}
        ]});
        assert!(matches!(
            decode(&shared.to_string()).unwrap_err(),
            StorageError::Invalid(_)
        ));

        assert!(matches!(decode("[]").unwrap_err(), StorageError::Invalid(_)));
        assert!(matches!(decode("{not json").unwrap_err(), StorageError::Json(_)));
    }
}
