//! Builds an address book from delimited text lines.
//!
//! Each non-empty line is `name<sep>phone<sep>phone...`. A line that is just
//! `#`, or starts with `# `, is a comment; `#Team` is an ordinary name.
//! Whitespace around every field is trimmed. Phones that fail validation are
//! dropped with a warning; the rest of the line still loads. Lines that are
//! not valid UTF-8 are skipped with a warning. A later line with the same
//! name replaces the earlier one.

use crate::directory::AddressBook;
use crate::models::Record;
use std::io::BufRead;

/// Parse a single line into a record.
///
/// Returns `None` for blank lines, comments and lines with an empty name.
pub fn parse_line(line: &str, separator: char) -> Option<Record> {
    let line = line.trim();
    if line.is_empty() || is_comment(line) {
        return None;
    }

    let mut fields = line.split(separator).map(str::trim);
    let name = fields.next().filter(|n| !n.is_empty())?;

    let mut record = Record::new(name);
    for phone in fields.filter(|p| !p.is_empty()) {
        if let Err(e) = record.try_add_phone(phone) {
            tracing::warn!(contact = %name, error = %e, "Skipping phone");
        }
    }
    Some(record)
}

fn is_comment(line: &str) -> bool {
    line == "#" || line.starts_with("# ") || line.starts_with("#\t")
}

/// Read every line from `reader` into a fresh address book.
///
/// Only I/O failures are returned; malformed lines are logged and skipped.
pub fn load<R: BufRead>(mut reader: R, separator: char) -> std::io::Result<AddressBook> {
    let mut book = AddressBook::new();
    let mut buf = Vec::new();
    let mut lineno = 0usize;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        lineno += 1;

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(_) => {
                tracing::warn!(line = lineno, "Line is not valid UTF-8");
                continue;
            }
        };

        match parse_line(line, separator) {
            Some(record) => {
                if book.add_record(record).is_some() {
                    tracing::info!(line = lineno, "Duplicate name replaced earlier entry");
                }
            }
            None => {
                let trimmed = line.trim();
                if !trimmed.is_empty() && !is_comment(trimmed) {
                    tracing::warn!(line = lineno, "Line has no contact name");
                }
            }
        }
    }
    Ok(book)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_line() {
        let record = parse_line("Jane Doe, 1234567890 ,0987654321", ',').unwrap();
        assert_eq!(record.name().as_str(), "Jane Doe");
        assert_eq!(
            record.to_string(),
            "Contact name: Jane Doe, phones: 1234567890; 0987654321"
        );
    }

    #[test]
    fn test_parse_line_drops_invalid_phones() {
        let record = parse_line("John Doe,123,1234567890,abcdefghij", ',').unwrap();
        assert_eq!(record.phones().len(), 1);
        assert!(record.find_phone("1234567890").is_some());
    }

    #[test]
    fn test_parse_line_skips() {
        assert!(parse_line("", ',').is_none());
        assert!(parse_line("   ", ',').is_none());
        assert!(parse_line("# comment", ',').is_none());
        assert!(parse_line("#", ',').is_none());
        assert!(parse_line(",1234567890", ',').is_none());
    }

    #[test]
    fn test_parse_line_name_only() {
        let record = parse_line("Solo", ',').unwrap();
        assert!(record.phones().is_empty());
    }

    #[test]
    fn test_parse_line_custom_separator() {
        let record = parse_line("Doe, Jane;1234567890", ';').unwrap();
        assert_eq!(record.name().as_str(), "Doe, Jane");
        assert!(record.find_phone("1234567890").is_some());
    }

    #[test]
    fn test_load_last_write_wins() {
        let input = "# contacts\nJane Doe,1111111111\n\nJohn Doe\nJane Doe,2222222222\n";
        let book = load(Cursor::new(input), ',').unwrap();

        assert_eq!(book.len(), 2);
        let jane = book.find("Jane Doe").unwrap();
        assert!(jane.find_phone("1111111111").is_none());
        assert!(jane.find_phone("2222222222").is_some());
        assert!(book.find("John Doe").is_some());
    }

    #[test]
    fn test_hash_prefixed_name_is_not_comment() {
        let record = parse_line("#Team,1234567890", ',').unwrap();
        assert_eq!(record.name().as_str(), "#Team");
        assert!(record.find_phone("1234567890").is_some());
    }

    #[test]
    fn test_load_skips_invalid_utf8_line() {
        let input: &[u8] = b"Jane Doe,1234567890\nBad\xff,1111111111\nJohn Doe,2222222222\n";
        let book = load(Cursor::new(input), ',').unwrap();

        assert_eq!(book.len(), 2);
        assert!(book
            .find("Jane Doe")
            .and_then(|r| r.find_phone("1234567890"))
            .is_some());
        assert!(book
            .find("John Doe")
            .and_then(|r| r.find_phone("2222222222"))
            .is_some());
    }

    #[test]
    fn test_load_last_line_without_newline() {
        let book = load(Cursor::new("Jane Doe,1234567890"), ',').unwrap();
        assert!(book.contains("Jane Doe"));
    }
}
