//! Persistence of the address book.
//!
//! [`BookStorage`] abstracts where snapshots live so the REPL can run against
//! a file on disk or an in-memory store in tests.

mod json_file;
mod memory;
pub mod snapshot;

pub use json_file::JsonFileStorage;
pub use memory::MemoryStorage;

use crate::book::AddressBook;
use crate::error::StorageResult;

/// A place an address book snapshot can be loaded from and saved to.
pub trait BookStorage: Send + Sync {
    /// Load the stored book. A store holding nothing yields an empty book.
    fn load(&self) -> StorageResult<AddressBook>;

    /// Replace the stored snapshot with `book`.
    fn save(&self, book: &AddressBook) -> StorageResult<()>;

    /// Human-readable location, used in messages.
    fn location(&self) -> String;
}

/// Load the book, falling back to an empty one when the snapshot cannot be
/// used.
///
/// The second element is the warning to show the user in that case.
pub fn load_or_empty(storage: &dyn BookStorage) -> (AddressBook, Option<String>) {
    match storage.load() {
        Ok(book) => {
            tracing::info!(contacts = book.len(), location = %storage.location(), "Address book loaded");
            (book, None)
        }
        Err(err) => {
            tracing::warn!(error = %err, location = %storage.location(), "Failed to load address book");
            let warning = format!(
                "😓 Error loading address book from '{}': {}\nCreating a new empty address book instead.",
                storage.location(),
                err
            );
            (AddressBook::new(), Some(warning))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Contact;

    #[test]
    fn test_load_or_empty_passes_book_through() {
        let storage = MemoryStorage::new();
        let mut book = AddressBook::new();
        book.add(Contact::new("Ivan")).unwrap();
        storage.save(&book).unwrap();

        let (loaded, warning) = load_or_empty(&storage);
        assert_eq!(loaded, book);
        assert!(warning.is_none());
    }

    #[test]
    fn test_load_or_empty_warns_on_corrupt_snapshot() {
        let storage = MemoryStorage::with_contents("garbage");
        let (loaded, warning) = load_or_empty(&storage);
        assert!(loaded.is_empty());

        let warning = warning.unwrap();
        assert!(warning.starts_with("😓 Error loading address book from 'memory':"));
        assert!(warning.ends_with("Creating a new empty address book instead."));
    }
}
