//! Name value object.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The name a contact is filed under.
///
/// Any string is accepted, including the empty string. Names are compared
/// by exact value; no case folding or trimming is applied.
///
/// # Example
///
/// ```
/// use address_book::domain::Name;
///
/// let name = Name::new("John Doe");
/// assert_eq!(name.as_str(), "John Doe");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Name(String);

impl Name {
    /// Create a new Name.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Get the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert into the underlying String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
