//! JSON file storage for address books.

use super::traits::BookStore;
use crate::book::AddressBook;
use crate::error::{PersistenceError, PersistenceResult};
use crate::models::Record;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Current on-disk format version.
pub const FORMAT_VERSION: u32 = 1;

/// Borrowed view written to disk.
#[derive(Serialize)]
struct BookDocumentRef<'a> {
    version: u32,
    records: Vec<&'a Record>,
}

/// Owned document read back from disk.
#[derive(Deserialize)]
struct BookDocument {
    version: u32,
    #[serde(default)]
    records: Vec<Record>,
}

/// Stores an address book as a single pretty-printed JSON file.
///
/// Records are written in iteration order and every field is re-validated on
/// load.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> PersistenceError {
        PersistenceError::Io {
            path: self.path.clone(),
            source,
        }
    }

    fn decode(&self, contents: &str) -> PersistenceResult<AddressBook> {
        let document: BookDocument = serde_json::from_str(contents)?;
        if document.version != FORMAT_VERSION {
            return Err(PersistenceError::UnsupportedVersion(document.version));
        }
        Ok(document.records.into_iter().collect())
    }
}

impl BookStore for JsonFileStore {
    fn save(&self, book: &AddressBook) -> PersistenceResult<()> {
        let document = BookDocumentRef {
            version: FORMAT_VERSION,
            records: book.iter().collect(),
        };
        let json = serde_json::to_string_pretty(&document)?;
        fs::write(&self.path, json).map_err(|e| self.io_error(e))?;

        debug!(
            path = %self.path.display(),
            records = book.len(),
            "Saved address book"
        );
        Ok(())
    }

    fn load(&self) -> PersistenceResult<Option<AddressBook>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "Address book file not found");
                return Ok(None);
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read address book");
                return Err(self.io_error(e));
            }
        };

        let book = self.decode(&contents).map_err(|e| {
            warn!(path = %self.path.display(), error = %e, "Failed to decode address book");
            e
        })?;

        debug!(
            path = %self.path.display(),
            records = book.len(),
            "Loaded address book"
        );
        Ok(Some(book))
    }
}
