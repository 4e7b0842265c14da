//! The address book: a name-keyed collection of records.

use crate::domain::{Field, ValidationError};
use crate::error::PersistenceResult;
use crate::matching::NameMatcher;
use crate::models::Record;
use crate::storage::{BookStore, JsonFileStore};
use chrono::NaiveDate;
use std::collections::HashMap;
use std::fmt;
use std::ops::Deref;
use std::path::Path;
use tracing::debug;

/// A collection of [`Record`]s keyed by their name text.
///
/// Keys are unique. Adding a record whose name is already present replaces
/// the old record but keeps its position, so iteration follows the order in
/// which names were first added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: HashMap<String, Record>,
    order: Vec<String>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Insert `record` under its name, replacing any record with the same name.
    pub fn add_record(&mut self, record: Record) {
        let key = record.name().as_str().to_string();
        if self.records.contains_key(&key) {
            debug!(name = %key, "Replacing existing record");
        } else {
            debug!(name = %key, "Adding record");
            self.order.push(key.clone());
        }
        self.records.insert(key, record);
    }

    /// Remove and return the record named `name`.
    pub fn remove_record(&mut self, name: &str) -> Option<Record> {
        let record = self.records.remove(name)?;
        self.order.retain(|key| key != name);
        debug!(name, "Removed record");
        Some(record)
    }

    pub fn get(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Edit the record named `name` in place.
    ///
    /// The returned handle reaches phones and birthday only; the name stays
    /// equal to its key.
    pub fn get_mut(&mut self, name: &str) -> Option<RecordMut<'_>> {
        self.records.get_mut(name).map(|record| RecordMut { record })
    }

    /// Owned snapshot of the names, in iteration order.
    ///
    /// Useful for walking the book while mutating records through
    /// [`get_mut`](Self::get_mut).
    pub fn names(&self) -> Vec<String> {
        self.order.clone()
    }

    /// Iterate over the records.
    ///
    /// The key list is captured when the iterator is created; every call
    /// starts a fresh snapshot.
    pub fn iter(&self) -> Records<'_> {
        Records {
            book: self,
            keys: self.names().into_iter(),
        }
    }

    /// Records whose name equals `name` exactly. Holds at most one record.
    pub fn search_by_name(&self, name: &str) -> Vec<&Record> {
        self.iter()
            .filter(|record| record.name().value() == name)
            .collect()
    }

    /// Records holding at least one phone equal to `phone`, each listed once.
    pub fn search_by_phone(&self, phone: &str) -> Vec<&Record> {
        self.iter().filter(|record| record.has_phone(phone)).collect()
    }

    /// Records with a birthday at most `within_days` days after `today`.
    ///
    /// Sorted by days remaining, then by name.
    pub fn upcoming_birthdays(&self, today: NaiveDate, within_days: i64) -> Vec<(&Record, i64)> {
        let mut upcoming: Vec<(&Record, i64)> = self
            .iter()
            .filter_map(|record| {
                let days = record.days_to_birthday(today)?;
                (days <= within_days).then_some((record, days))
            })
            .collect();

        upcoming.sort_by(|(a, a_days), (b, b_days)| {
            a_days.cmp(b_days).then_with(|| a.name().cmp(b.name()))
        });
        upcoming
    }

    /// Fuzzy lookup by name, best match first.
    pub fn find_similar(
        &self,
        query: &str,
        max_results: usize,
        min_confidence: u8,
    ) -> Vec<(&Record, u8)> {
        NameMatcher::new()
            .find_matches(
                query,
                self.order.iter().map(String::as_str),
                max_results,
                min_confidence,
            )
            .into_iter()
            .filter_map(|m| self.records.get(m.name).map(|record| (record, m.confidence)))
            .collect()
    }

    /// Persist the whole book through `store`.
    pub fn save_to(&self, store: &impl BookStore) -> PersistenceResult<()> {
        store.save(self)
    }

    /// Replace the book's contents with what `store` holds.
    ///
    /// When the store has nothing saved the book is left untouched. On error
    /// the book is unchanged too.
    pub fn load_from(&mut self, store: &impl BookStore) -> PersistenceResult<()> {
        match store.load()? {
            Some(loaded) => *self = loaded,
            None => debug!("Nothing stored, keeping current state"),
        }
        Ok(())
    }

    /// Write the whole book to `path`, replacing the file.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError` if the file cannot be written.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> PersistenceResult<()> {
        self.save_to(&JsonFileStore::new(path.as_ref()))
    }

    /// Replace the book's contents with those stored at `path`.
    ///
    /// A missing file leaves the book untouched and is not an error.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError` if the file exists but cannot be read or
    /// decoded.
    pub fn load_from_file(&mut self, path: impl AsRef<Path>) -> PersistenceResult<()> {
        self.load_from(&JsonFileStore::new(path.as_ref()))
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = Records<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        for record in iter {
            book.add_record(record);
        }
        book
    }
}

impl fmt::Display for AddressBook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, record) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", record)?;
        }
        Ok(())
    }
}

/// Mutable handle to a record stored in an [`AddressBook`].
///
/// Reads go through `Deref`. The record itself cannot be replaced, so a
/// stored record is always filed under its own name.
///
/// ```compile_fail
/// use address_book::{AddressBook, Record};
///
/// let mut book = AddressBook::new();
/// book.add_record(Record::new("A", None).unwrap());
/// *book.get_mut("A").unwrap() = Record::new("B", None).unwrap();
/// ```
#[derive(Debug)]
pub struct RecordMut<'a> {
    record: &'a mut Record,
}

impl RecordMut<'_> {
    pub fn add_phone(&mut self, phone: impl Into<String>) -> Result<(), ValidationError> {
        self.record.add_phone(phone)
    }

    pub fn remove_phone(&mut self, phone: &str) -> usize {
        self.record.remove_phone(phone)
    }

    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<usize, ValidationError> {
        self.record.edit_phone(old, new)
    }

    pub fn set_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        self.record.set_birthday(birthday)
    }

    pub fn clear_birthday(&mut self) {
        self.record.clear_birthday()
    }
}

impl Deref for RecordMut<'_> {
    type Target = Record;

    fn deref(&self) -> &Record {
        &*self.record
    }
}

/// Iterator over the records of an [`AddressBook`], in snapshot order.
#[derive(Debug)]
pub struct Records<'a> {
    book: &'a AddressBook,
    keys: std::vec::IntoIter<String>,
}

impl<'a> Iterator for Records<'a> {
    type Item = &'a Record;

    fn next(&mut self) -> Option<Self::Item> {
        let book = self.book;
        self.keys.find_map(|key| book.records.get(&key))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.keys.len()))
    }
}
