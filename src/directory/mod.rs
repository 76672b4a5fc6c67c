//! Name-indexed directory of contact records.

pub mod address_book;

pub use address_book::AddressBook;
