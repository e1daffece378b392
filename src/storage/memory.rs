use super::{snapshot, BookStorage};
use crate::book::AddressBook;
use crate::error::{StorageError, StorageResult};
use std::sync::Mutex;

/// Snapshot kept in memory, encoded exactly as on disk.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    contents: Mutex<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-filled with raw snapshot text.
    pub fn with_contents(text: impl Into<String>) -> Self {
        Self {
            contents: Mutex::new(Some(text.into())),
        }
    }

    /// The last saved snapshot text, if any.
    pub fn contents(&self) -> Option<String> {
        self.contents.lock().ok().and_then(|guard| guard.clone())
    }
}

fn poisoned() -> StorageError {
    StorageError::Invalid("memory store lock poisoned".to_string())
}

impl BookStorage for MemoryStorage {
    fn load(&self) -> StorageResult<AddressBook> {
        let guard = self.contents.lock().map_err(|_| poisoned())?;
        match guard.as_deref() {
            Some(text) => snapshot::decode(text),
            None => Ok(AddressBook::new()),
        }
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let text = snapshot::encode(book)?;
        *self.contents.lock().map_err(|_| poisoned())? = Some(text);
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
