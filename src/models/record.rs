//! Record model representing one contact in the address book.

use crate::domain::{Birthday, Field, Name, Phone, ValidationError};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A contact: a name, an optional birthday and an ordered list of phones.
///
/// The name is fixed at construction and acts as the record's key in an
/// [`AddressBook`](crate::AddressBook). Phones may repeat and keep their
/// insertion order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Record {
    /// Contact name
    name: Name,

    /// Birthday, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    birthday: Option<Birthday>,

    /// Phone numbers in insertion order
    #[serde(default)]
    phones: Vec<Phone>,
}

impl Record {
    /// Create a record with a name and an optional `YYYY-MM-DD` birthday.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` if `birthday` is malformed;
    /// no record is produced in that case.
    pub fn new(name: impl Into<String>, birthday: Option<&str>) -> Result<Self, ValidationError> {
        let birthday = birthday.map(Birthday::new).transpose()?;
        Ok(Self {
            name: Name::new(name),
            birthday,
            phones: Vec::new(),
        })
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn birthday(&self) -> Option<&Birthday> {
        self.birthday.as_ref()
    }

    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    /// Set or replace the birthday. The old birthday is kept on failure.
    pub fn set_birthday(&mut self, birthday: &str) -> Result<(), ValidationError> {
        self.birthday = Some(Birthday::new(birthday)?);
        Ok(())
    }

    pub fn clear_birthday(&mut self) {
        self.birthday = None;
    }

    /// Validate `phone` and append it.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone`; the phone list is unchanged.
    pub fn add_phone(&mut self, phone: impl Into<String>) -> Result<(), ValidationError> {
        self.phones.push(Phone::new(phone)?);
        Ok(())
    }

    /// Remove every phone equal to `phone`. Returns how many were removed.
    pub fn remove_phone(&mut self, phone: &str) -> usize {
        let before = self.phones.len();
        self.phones.retain(|p| p.value() != phone);
        before - self.phones.len()
    }

    /// Replace every phone equal to `old` with `new`. Returns how many changed.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` if `new` is invalid; every
    /// phone keeps its old value.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<usize, ValidationError> {
        let mut edited = 0;
        for phone in self.phones.iter_mut().filter(|p| p.value() == old) {
            phone.set_value(new)?;
            edited += 1;
        }
        Ok(edited)
    }

    /// First phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&Phone> {
        self.phones.iter().find(|p| p.value() == phone)
    }

    pub fn has_phone(&self, phone: &str) -> bool {
        self.find_phone(phone).is_some()
    }

    /// Days from `today` until the next birthday.
    ///
    /// `None` without a birthday, or when the next one falls past the last
    /// representable date.
    pub fn days_to_birthday(&self, today: NaiveDate) -> Option<i64> {
        self.birthday.as_ref().and_then(|b| b.days_until(today))
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Name: {}", self.name)?;
        if let Some(birthday) = &self.birthday {
            write!(f, ", Birthday: {}", birthday)?;
        }
        let phones = self
            .phones
            .iter()
            .map(Phone::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, ", Phones: {}", phones)
    }
}
