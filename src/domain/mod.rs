//! Domain value objects and types.
//!
//! Type-safe wrappers for the two string fields of a contact: its name and its
//! phone numbers. `PhoneNumber` validates at construction time so an invalid
//! number can never be held by a record.

pub mod errors;
pub mod name;
pub mod phone;

pub use errors::ValidationError;
pub use name::Name;
pub use phone::PhoneNumber;
