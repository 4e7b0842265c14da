//! Shared sample data for integration tests.

#![allow(dead_code)]

use address_book::{AddressBook, Record};
use chrono::NaiveDate;

/// Create a record with an optional birthday and the given phones.
pub fn sample_record(name: &str, birthday: Option<&str>, phones: &[&str]) -> Record {
    let mut record = Record::new(name, birthday).expect("valid sample birthday");
    for phone in phones {
        record.add_phone(*phone).expect("valid sample phone");
    }
    record
}

/// A small book with a mix of birthdays and shared phones.
pub fn sample_book() -> AddressBook {
    let mut book = AddressBook::new();
    book.add_record(sample_record(
        "John Doe",
        Some("1990-05-15"),
        &["1234567890", "9876543210"],
    ));
    book.add_record(sample_record("Jane Smith", None, &["5551234567"]));
    book.add_record(sample_record(
        "Bob Jones",
        Some("2000-02-29"),
        &["5551234567", "5551234567"],
    ));
    book
}

/// Parse a `YYYY-MM-DD` literal.
pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid test date")
}
