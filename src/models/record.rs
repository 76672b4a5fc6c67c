//! Contact record: a name plus an ordered list of validated phone numbers.

use crate::domain::{Name, PhoneNumber};
use crate::error::{RecordError, RecordResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A single contact in the address book.
///
/// The name is fixed at construction. Phones keep insertion order and may
/// contain duplicates; every stored phone has passed [`PhoneNumber`]
/// validation.
///
/// The plain mutators (`add_phone`, `remove_phone`, `edit_phone`) silently
/// ignore invalid input and misses. Use the `try_*` variants to learn why an
/// operation had no effect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    name: Name,
    #[serde(default)]
    phones: Vec<PhoneNumber>,
}

impl Record {
    /// Create a record with the given name and no phones.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Name::new(name),
            phones: Vec::new(),
        }
    }

    /// The contact's name.
    pub fn name(&self) -> &Name {
        &self.name
    }

    /// Stored phones, in insertion order.
    pub fn phones(&self) -> &[PhoneNumber] {
        &self.phones
    }

    /// Whether `phone` is exactly ten ASCII digits.
    pub fn is_phone_valid(phone: &str) -> bool {
        PhoneNumber::is_valid(phone)
    }

    /// Append `phone` if it is valid; otherwise do nothing.
    pub fn add_phone(&mut self, phone: &str) {
        if let Err(e) = self.try_add_phone(phone) {
            tracing::debug!(contact = %self.name, error = %e, "Ignoring phone");
        }
    }

    /// Append `phone`, reporting why it was rejected.
    pub fn try_add_phone(&mut self, phone: &str) -> RecordResult<()> {
        let phone = PhoneNumber::new(phone)?;
        tracing::trace!(contact = %self.name, %phone, "Phone added");
        self.phones.push(phone);
        Ok(())
    }

    /// Remove the first phone equal to `phone`. Later duplicates stay.
    pub fn remove_phone(&mut self, phone: &str) {
        if let Err(e) = self.try_remove_phone(phone) {
            tracing::debug!(contact = %self.name, error = %e, "Nothing to remove");
        }
    }

    /// Remove the first phone equal to `phone` and return it.
    pub fn try_remove_phone(&mut self, phone: &str) -> RecordResult<PhoneNumber> {
        let index = self
            .position(phone)
            .ok_or_else(|| RecordError::PhoneNotFound(phone.to_string()))?;
        tracing::trace!(contact = %self.name, %phone, "Phone removed");
        Ok(self.phones.remove(index))
    }

    /// Replace the first phone equal to `old` with `new`, keeping its position.
    ///
    /// Does nothing if `new` is invalid or `old` is not stored.
    pub fn edit_phone(&mut self, old: &str, new: &str) {
        if let Err(e) = self.try_edit_phone(old, new) {
            tracing::debug!(contact = %self.name, error = %e, "Phone not edited");
        }
    }

    /// Replace the first phone equal to `old` with `new`.
    ///
    /// `new` is validated before `old` is looked up, so an invalid `new`
    /// reports `InvalidPhone` even when `old` is also missing.
    pub fn try_edit_phone(&mut self, old: &str, new: &str) -> RecordResult<()> {
        let new = PhoneNumber::new(new)?;
        let index = self
            .position(old)
            .ok_or_else(|| RecordError::PhoneNotFound(old.to_string()))?;
        tracing::trace!(contact = %self.name, %old, %new, "Phone edited");
        self.phones[index] = new;
        Ok(())
    }

    /// First stored phone equal to `phone`.
    pub fn find_phone(&self, phone: &str) -> Option<&PhoneNumber> {
        self.phones.iter().find(|p| p.as_str() == phone)
    }

    fn position(&self, phone: &str) -> Option<usize> {
        self.phones.iter().position(|p| p.as_str() == phone)
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Contact name: {}, phones: ", self.name)?;
        for (i, phone) in self.phones.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{}", phone)?;
        }
        Ok(())
    }
}
