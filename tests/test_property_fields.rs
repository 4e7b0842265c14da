//! Property-based tests for field validation and persistence.

use address_book::{AddressBook, Birthday, Field, Phone, Record, ValidationError};
use chrono::{Datelike, NaiveDate};
use std::collections::HashSet;
use proptest::prelude::*;
use tempfile::TempDir;

/// Strategy for real calendar dates between years 1000 and 9999.
fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (1000i32..=9999, 1u32..=366).prop_filter_map("day exists in year", |(year, ordinal)| {
        NaiveDate::from_yo_opt(year, ordinal)
    })
}

/// Strategy for a record with an optional birthday and digit-only phones.
fn record_strategy() -> impl Strategy<Value = Record> {
    (
        "[A-Za-z ]{0,20}",
        prop::option::of(date_strategy()),
        prop::collection::vec("[0-9]{1,12}", 0..4),
    )
        .prop_map(|(name, birthday, phones)| {
            let birthday = birthday.map(|d| d.format("%Y-%m-%d").to_string());
            let mut record = Record::new(name, birthday.as_deref()).unwrap();
            for phone in phones {
                record.add_phone(phone).unwrap();
            }
            record
        })
}

proptest! {
    /// Property: digit-only non-empty strings are valid phones with identical text.
    #[test]
    fn prop_digit_strings_are_valid_phones(s in "[0-9]{1,20}") {
        let phone = Phone::new(s.clone()).unwrap();
        prop_assert_eq!(phone.value(), s.as_str());
        prop_assert_eq!(phone.to_string(), s);
    }

    /// Property: any string with a non-digit is rejected.
    #[test]
    fn prop_strings_with_non_digit_are_rejected(
        prefix in "[0-9]{0,5}",
        bad in "[^0-9]",
        suffix in "[0-9]{0,5}",
    ) {
        let candidate = format!("{prefix}{bad}{suffix}");
        prop_assert_eq!(
            Phone::new(candidate.clone()),
            Err(ValidationError::InvalidPhone(candidate))
        );
    }

    /// Property: real dates in YYYY-MM-DD form are valid birthdays.
    #[test]
    fn prop_real_dates_are_valid_birthdays(date in date_strategy()) {
        let text = date.format("%Y-%m-%d").to_string();
        let birthday = Birthday::new(text.clone()).unwrap();
        prop_assert_eq!(birthday.value(), text.as_str());
        prop_assert_eq!(birthday.date(), date);
    }

    /// Property: a different separator is always rejected.
    #[test]
    fn prop_wrong_separator_rejected(date in date_strategy(), sep in "[/. _]") {
        let text = date.format(&format!("%Y{sep}%m{sep}%d")).to_string();
        prop_assert!(Birthday::new(text).is_err());
    }

    /// Property: the next birthday is never more than a year away and lands on
    /// the birthday's month/day unless it is a Feb 29 shifted to Mar 1.
    #[test]
    fn prop_days_to_birthday_bounded(birthday in date_strategy(), today in date_strategy()) {
        let text = birthday.format("%Y-%m-%d").to_string();
        let record = Record::new("X", Some(text.as_str())).unwrap();
        let days = record.days_to_birthday(today).unwrap();
        prop_assert!((0..=366).contains(&days));

        let next = today + chrono::Duration::days(days);
        let leap_shift = birthday.month() == 2 && birthday.day() == 29
            && next.month() == 3 && next.day() == 1;
        prop_assert!(
            (next.month() == birthday.month() && next.day() == birthday.day()) || leap_shift
        );
    }

    /// Property: save then load reproduces the same records.
    #[test]
    fn prop_save_load_round_trip(records in prop::collection::vec(record_strategy(), 0..8)) {
        let book: AddressBook = records.into_iter().collect();
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("book.json");

        book.save_to_file(&path).unwrap();
        let mut loaded = AddressBook::new();
        loaded.load_from_file(&path).unwrap();

        prop_assert_eq!(loaded, book);
    }

    /// Property: search_by_phone never returns the same record twice.
    #[test]
    fn prop_search_by_phone_unique(records in prop::collection::vec(record_strategy(), 0..8)) {
        let book: AddressBook = records.into_iter().collect();
        for record in &book {
            for phone in record.phones() {
                let found = book.search_by_phone(phone.as_str());
                let unique: HashSet<&str> = found.iter().map(|r| r.name().as_str()).collect();
                prop_assert_eq!(unique.len(), found.len());
            }
        }
    }
}
