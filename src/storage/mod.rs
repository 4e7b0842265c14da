//! Persistence layer for address books.
//!
//! The [`BookStore`] trait abstracts the backend; [`JsonFileStore`] keeps a
//! book in a single JSON file.

pub mod json_file;
pub mod traits;

pub use json_file::{JsonFileStore, FORMAT_VERSION};
pub use traits::BookStore;
