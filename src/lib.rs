//! Address Book - an in-memory contact directory.
//!
//! Stores contacts by name, each with an ordered list of phone numbers that
//! must be exactly ten ASCII digits. Invalid phones and lookup misses are
//! silently ignored by the plain operations; `try_*` variants on [`Record`]
//! report them instead.
//!
//! # Architecture
//!
//! - **domain**: `Name` and `PhoneNumber` value objects
//! - **models**: the contact `Record`
//! - **directory**: the name-keyed `AddressBook`
//! - **loader**: builds a book from delimited text lines
//! - **error**: error types for explicit-result operations and config
//! - **config**: configuration from environment variables

pub mod config;
pub mod directory;
pub mod domain;
pub mod error;
pub mod loader;
pub mod models;

pub use config::Config;
pub use directory::AddressBook;
pub use domain::{Name, PhoneNumber, ValidationError};
pub use error::{ConfigError, RecordError};
pub use models::Record;
