//! Birthday value object.

use super::errors::ValidationError;
use super::field::Field;
use chrono::{Datelike, NaiveDate};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Exact `YYYY-MM-DD` shape. chrono alone accepts signs and short fields.
static DATE_SHAPE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("valid date regex"));

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A birthday stored as a real calendar date.
///
/// # Example
///
/// ```
/// use address_book::domain::Birthday;
///
/// let birthday = Birthday::new("1990-05-15").unwrap();
/// assert_eq!(birthday.month(), 5);
/// assert!(Birthday::new("1990/05/15").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Birthday {
    text: String,
    date: NaiveDate,
}

impl Birthday {
    /// Create a new Birthday from `YYYY-MM-DD` text.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidBirthday` when the text has the wrong
    /// shape or names a date that does not exist (e.g. `2021-02-30`).
    pub fn new(date: impl Into<String>) -> Result<Self, ValidationError> {
        Self::validate(date.into())
    }

    /// The parsed date.
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn year(&self) -> i32 {
        self.date.year()
    }

    pub fn month(&self) -> u32 {
        self.date.month()
    }

    pub fn day(&self) -> u32 {
        self.date.day()
    }

    /// The first anniversary of this birthday falling on or after `today`.
    ///
    /// A Feb 29 birthday is observed on Mar 1 in non-leap years. Returns
    /// `None` when that anniversary lies past the last date chrono can hold.
    pub fn next_occurrence(&self, today: NaiveDate) -> Option<NaiveDate> {
        match self.occurrence_in(today.year()) {
            Some(this_year) if this_year >= today => Some(this_year),
            _ => self.occurrence_in(today.year().checked_add(1)?),
        }
    }

    /// Whole days from `today` until the next occurrence; 0 on the day itself.
    pub fn days_until(&self, today: NaiveDate) -> Option<i64> {
        self.next_occurrence(today).map(|next| (next - today).num_days())
    }

    fn occurrence_in(&self, year: i32) -> Option<NaiveDate> {
        self.date
            .with_year(year)
            .or_else(|| NaiveDate::from_ymd_opt(year, 3, 1))
    }
}

impl Field for Birthday {
    fn validate(candidate: String) -> Result<Self, ValidationError> {
        if !DATE_SHAPE.is_match(&candidate) {
            return Err(ValidationError::InvalidBirthday(candidate));
        }
        match NaiveDate::parse_from_str(&candidate, DATE_FORMAT) {
            Ok(date) => Ok(Self {
                text: candidate,
                date,
            }),
            Err(_) => Err(ValidationError::InvalidBirthday(candidate)),
        }
    }

    fn value(&self) -> &str {
        &self.text
    }
}

// Serde support - serialize as the date text
impl Serialize for Birthday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.text.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for Birthday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Birthday::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
