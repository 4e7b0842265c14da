//! The address book container and its record iterator.

pub mod address_book;

pub use address_book::{AddressBook, RecordMut, Records};
