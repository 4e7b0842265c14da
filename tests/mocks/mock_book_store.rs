use address_book::error::{PersistenceError, PersistenceResult};
use address_book::{AddressBook, BookStore};
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory book store for testing.
///
/// Keeps the last saved book, can be told to fail, and tracks method calls
/// for verification.
#[derive(Default)]
pub struct MockBookStore {
    stored: Mutex<Option<AddressBook>>,
    fail_with_version: Mutex<Option<u32>>,
    call_counts: Mutex<HashMap<String, usize>>,
}

impl MockBookStore {
    /// Create a new empty MockBookStore.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that already holds `book`.
    pub fn with_book(book: AddressBook) -> Self {
        let store = Self::new();
        *store.stored.lock().unwrap() = Some(book);
        store
    }

    /// Make every subsequent load fail as if the data had an unknown version.
    pub fn fail_loads(&self, version: u32) {
        *self.fail_with_version.lock().unwrap() = Some(version);
    }

    /// The book most recently saved, if any.
    pub fn stored(&self) -> Option<AddressBook> {
        self.stored.lock().unwrap().clone()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    fn increment_call_count(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }
}

impl BookStore for MockBookStore {
    fn save(&self, book: &AddressBook) -> PersistenceResult<()> {
        self.increment_call_count("save");
        *self.stored.lock().unwrap() = Some(book.clone());
        Ok(())
    }

    fn load(&self) -> PersistenceResult<Option<AddressBook>> {
        self.increment_call_count("load");
        if let Some(version) = *self.fail_with_version.lock().unwrap() {
            return Err(PersistenceError::UnsupportedVersion(version));
        }
        Ok(self.stored())
    }
}
