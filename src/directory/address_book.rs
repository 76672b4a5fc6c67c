//! In-memory address book keyed by contact name.
//!
//! The book holds at most one record per name. Adding a record under a name
//! that is already present replaces the old record in full; phones are not
//! merged.

use crate::models::Record;
use std::collections::HashMap;

/// Owns contact records and indexes them by exact name.
///
/// Not internally synchronized. Wrap in a single lock to share across threads.
///
/// # Example
///
/// ```
/// use address_book::{AddressBook, Record};
///
/// let mut book = AddressBook::new();
/// let mut record = Record::new("Jane Doe");
/// record.add_phone("1234567890");
/// book.add_record(record);
///
/// assert!(book.find("Jane Doe").is_some());
/// book.delete("Jane Doe");
/// assert!(book.find("Jane Doe").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressBook {
    records: HashMap<String, Record>,
}

impl AddressBook {
    /// Create an empty address book.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` under its name, returning the record it displaced.
    pub fn add_record(&mut self, record: Record) -> Option<Record> {
        let key = record.name().as_str().to_string();
        let previous = self.records.insert(key, record);
        if let Some(ref old) = previous {
            tracing::debug!(
                contact = %old.name(),
                dropped_phones = old.phones().len(),
                "Record overwritten"
            );
        }
        previous
    }

    /// Look up a record by exact name.
    pub fn find(&self, name: &str) -> Option<&Record> {
        self.records.get(name)
    }

    /// Look up a record by exact name for in-place phone edits.
    pub fn find_mut(&mut self, name: &str) -> Option<&mut Record> {
        self.records.get_mut(name)
    }

    /// Remove the record filed under `name`, if any.
    pub fn delete(&mut self, name: &str) {
        if self.records.remove(name).is_none() {
            tracing::debug!(contact = %name, "Nothing to delete");
        }
    }

    /// Whether a record is filed under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.records.contains_key(name)
    }

    /// Number of records in the book.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the book holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over all records in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &Record> + '_ {
        self.records.values()
    }
}

impl<'a> IntoIterator for &'a AddressBook {
    type Item = &'a Record;
    type IntoIter = std::collections::hash_map::Values<'a, String, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.values()
    }
}

impl Extend<Record> for AddressBook {
    fn extend<I: IntoIterator<Item = Record>>(&mut self, iter: I) {
        for record in iter {
            self.add_record(record);
        }
    }
}

impl FromIterator<Record> for AddressBook {
    fn from_iter<I: IntoIterator<Item = Record>>(iter: I) -> Self {
        let mut book = AddressBook::new();
        book.extend(iter);
        book
    }
}
