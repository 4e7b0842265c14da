//! Domain validation errors.

use std::fmt;

/// Errors that can occur when a field rejects a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The provided phone number is empty or contains a non-digit.
    InvalidPhone(String),

    /// The provided birthday is not a real `YYYY-MM-DD` date.
    InvalidBirthday(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPhone(phone) => write!(f, "Invalid phone number: {:?}", phone),
            Self::InvalidBirthday(date) => {
                write!(f, "Invalid birthday (expected YYYY-MM-DD): {:?}", date)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
