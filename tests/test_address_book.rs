//! Integration tests for the name-keyed address book.

use address_book::{loader, AddressBook, Record};
use std::io::Cursor;

#[test]
fn test_address_book_add_find_delete() {
    let mut book = AddressBook::new();
    let record = Record::new("Jane Doe");
    book.add_record(record.clone());

    assert_eq!(book.find("Jane Doe"), Some(&record));

    book.delete("Jane Doe");
    assert!(book.find("Jane Doe").is_none());
    assert!(book.is_empty());
}

#[test]
fn test_second_record_with_same_name_wins() {
    let mut first = Record::new("Jane Doe");
    first.add_phone("1111111111");
    let mut second = Record::new("Jane Doe");
    second.add_phone("2222222222");

    let mut book = AddressBook::new();
    book.add_record(first);
    book.add_record(second.clone());

    assert_eq!(book.find("Jane Doe"), Some(&second));
    assert!(book
        .iter()
        .all(|r| r.find_phone("1111111111").is_none()));
}

#[test]
fn test_edit_through_book() {
    let mut book = AddressBook::new();
    let mut record = Record::new("John Doe");
    record.add_phone("1234567890");
    book.add_record(record);

    if let Some(stored) = book.find_mut("John Doe") {
        stored.edit_phone("1234567890", "0987654321");
    }

    let stored = book.find("John Doe").unwrap();
    assert_eq!(
        stored.to_string(),
        "Contact name: John Doe, phones: 0987654321"
    );
}

#[test]
fn test_load_from_text() {
    let input = "\
# name,phones...
Jane Doe,1234567890,0987654321
John Doe,12345
Empty
";
    let book = loader::load(Cursor::new(input), ',').unwrap();
    assert_eq!(book.len(), 3);
    assert_eq!(book.find("Jane Doe").unwrap().phones().len(), 2);
    assert!(book.find("John Doe").unwrap().phones().is_empty());
    assert!(book.contains("Empty"));
}

#[test]
fn test_address_book_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AddressBook>();
    assert_send_sync::<Record>();
}
