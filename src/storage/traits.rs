use crate::book::AddressBook;
use crate::error::PersistenceResult;

/// Storage backend for a whole address book.
///
/// Provides abstraction over where a book is kept, enabling different
/// implementations (JSON file, in-memory for tests).
pub trait BookStore {
    /// Persist `book`, replacing whatever was stored before.
    fn save(&self, book: &AddressBook) -> PersistenceResult<()>;

    /// Read the stored book. `Ok(None)` means nothing has been stored yet.
    fn load(&self) -> PersistenceResult<Option<AddressBook>>;
}
