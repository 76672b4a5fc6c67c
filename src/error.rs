//! Error types for the address book.
//!
//! The core record and address book operations never fail: invalid phones and
//! lookup misses are absorbed as no-ops. These types back the explicit
//! `try_*` variants and configuration loading.

use crate::domain::ValidationError;
use thiserror::Error;

/// Errors reported by the explicit-result phone operations on a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// The phone number failed validation
    #[error("Invalid phone number: {0}")]
    InvalidPhone(String),

    /// The record holds no phone with this value
    #[error("Phone number not found: {0}")]
    PhoneNotFound(String),
}

impl From<ValidationError> for RecordError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::InvalidPhone(phone) => RecordError::InvalidPhone(phone),
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
