//! Data models for address book entries.
//!
//! A [`Record`] groups the validated fields of one contact.

pub mod record;

pub use record::Record;
