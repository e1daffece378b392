use super::{snapshot, BookStorage};
use crate::book::AddressBook;
use crate::error::StorageResult;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Snapshot stored as a JSON file.
///
/// Saving writes a sibling temporary file and renames it over the target,
/// so an interrupted save never leaves a truncated snapshot behind.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl BookStorage for JsonFileStorage {
    fn load(&self) -> StorageResult<AddressBook> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No snapshot yet");
                return Ok(AddressBook::new());
            }
            Err(err) => return Err(err.into()),
        };
        snapshot::decode(&text)
    }

    fn save(&self, book: &AddressBook) -> StorageResult<()> {
        let contents = snapshot::encode(book)?;
        let temp = self.temp_path();

        fs::write(&temp, contents)?;
        if let Err(err) = fs::rename(&temp, &self.path) {
            if let Err(cleanup) = fs::remove_file(&temp) {
                tracing::warn!(path = %temp.display(), error = %cleanup, "Failed to remove temporary snapshot");
            }
            return Err(err.into());
        }

        tracing::debug!(path = %self.path.display(), contacts = book.len(), "Snapshot saved");
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
