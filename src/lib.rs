//! Address Book - an in-memory contact directory with validated fields.
//!
//! Each contact is a [`Record`] holding a name, an optional birthday and a
//! list of phone numbers. Records live in an [`AddressBook`] keyed by name,
//! which can be searched, iterated and saved to or loaded from a JSON file.
//!
//! # Architecture
//!
//! - **domain**: Validated fields (`Name`, `Phone`, `Birthday`) and the `Field` trait
//! - **models**: The `Record` type
//! - **book**: The `AddressBook` container
//! - **matching**: Fuzzy name matching
//! - **storage**: Persistence backends
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//!
//! # Example
//!
//! ```
//! use address_book::{AddressBook, Record};
//!
//! let mut record = Record::new("John Doe", Some("1990-05-15")).unwrap();
//! assert!(record.add_phone("123-456-7890").is_err());
//! record.add_phone("1234567890").unwrap();
//!
//! let mut book = AddressBook::new();
//! book.add_record(record);
//! assert_eq!(book.search_by_phone("1234567890").len(), 1);
//! ```

pub mod book;
pub mod config;
pub mod domain;
pub mod error;
pub mod matching;
pub mod models;
pub mod storage;

pub use book::AddressBook;
pub use config::Config;
pub use domain::{Birthday, Field, Name, Phone, ValidationError};
pub use error::{ConfigError, PersistenceError};
pub use matching::{MatchResult, NameMatcher};
pub use models::Record;
pub use storage::{BookStore, JsonFileStore};
