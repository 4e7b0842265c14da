//! The `Field` trait shared by every validated contact value.

use super::errors::ValidationError;
use std::fmt;

/// A single validated value belonging to a contact.
///
/// Implementors are the closed set [`Name`](super::Name),
/// [`Phone`](super::Phone) and [`Birthday`](super::Birthday). A field is only
/// ever constructed through [`Field::validate`], so a live value always
/// satisfies its type's rule.
pub trait Field: fmt::Display + Sized {
    /// Check `candidate` and build the field from it.
    ///
    /// # Errors
    ///
    /// Returns the type-specific `ValidationError` when the value is rejected.
    fn validate(candidate: String) -> Result<Self, ValidationError>;

    /// The stored value as text.
    fn value(&self) -> &str;

    /// Replace the stored value.
    ///
    /// On failure the current value is kept.
    fn set_value(&mut self, candidate: impl Into<String>) -> Result<(), ValidationError> {
        *self = Self::validate(candidate.into())?;
        Ok(())
    }
}
