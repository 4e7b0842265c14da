//! Domain value objects and types.
//!
//! This module contains the validated fields that make up a contact: its
//! name, its phone numbers and its birthday. Each field is checked at
//! construction time so invalid data cannot be represented.

pub mod birthday;
pub mod errors;
pub mod field;
pub mod name;
pub mod phone;

pub use birthday::Birthday;
pub use errors::ValidationError;
pub use field::Field;
pub use name::Name;
pub use phone::Phone;
