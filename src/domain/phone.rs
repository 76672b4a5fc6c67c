//! PhoneNumber value object.

use super::errors::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// Number of characters in a valid phone number.
pub const PHONE_LENGTH: usize = 10;

/// A type-safe wrapper for phone numbers.
///
/// A phone number is exactly ten ASCII digits. No formatting characters
/// are allowed and no normalization is performed, so `"123-456-7890"` is
/// rejected rather than stripped.
///
/// # Example
///
/// ```
/// use address_book::domain::PhoneNumber;
///
/// let phone = PhoneNumber::new("1234567890").unwrap();
/// assert_eq!(phone.as_str(), "1234567890");
/// assert!(PhoneNumber::new("12345").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Create a new PhoneNumber, validating the format.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidPhone` unless the input is exactly
    /// ten ASCII digits.
    pub fn new(phone: impl Into<String>) -> Result<Self, ValidationError> {
        let phone = phone.into();

        if !Self::is_valid(&phone) {
            return Err(ValidationError::InvalidPhone(phone));
        }

        Ok(Self(phone))
    }

    /// Check whether `phone` would be accepted by [`PhoneNumber::new`].
    ///
    /// Length is counted in characters, so multi-byte input of the right
    /// byte length is still rejected by the digit check.
    pub fn is_valid(phone: &str) -> bool {
        phone.chars().count() == PHONE_LENGTH && phone.chars().all(|c| c.is_ascii_digit())
    }

    /// Get the phone number as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

// Serde support - serialize as string
impl Serialize for PhoneNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

// Serde support - deserialize from string with validation
impl<'de> Deserialize<'de> for PhoneNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        PhoneNumber::new(s).map_err(serde::de::Error::custom)
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
