//! Book table for the 66-book Protestant canon.
//!
//! The cross-reference dataset names books with short lower-case
//! abbreviations (`ge`, `1sa`, `joh`, ...). Each abbreviation maps to exactly
//! one [`BookId`], and each `BookId` to exactly one display name.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;
use std::fmt;

/// Canonical book number, 1 (Genesis) through 66 (Revelation).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct BookId(u8);

/// `(abbreviation, display name)` in canonical order; index + 1 is the BookId.
const BOOKS: [(&str, &str); 66] = [
    ("ge", "Genesis"),
    ("ex", "Exodus"),
    ("le", "Leviticus"),
    ("nu", "Numbers"),
    ("de", "Deuteronomy"),
    ("jos", "Joshua"),
    ("jud", "Judges"),
    ("ru", "Ruth"),
    ("1sa", "1 Samuel"),
    ("2sa", "2 Samuel"),
    ("1ki", "1 Kings"),
    ("2ki", "2 Kings"),
    ("1ch", "1 Chronicles"),
    ("2ch", "2 Chronicles"),
    ("ezr", "Ezra"),
    ("ne", "Nehemiah"),
    ("es", "Esther"),
    ("job", "Job"),
    ("ps", "Psalms"),
    ("pr", "Proverbs"),
    ("ec", "Ecclesiastes"),
    ("so", "Song of Solomon"),
    ("isa", "Isaiah"),
    ("jer", "Jeremiah"),
    ("la", "Lamentations"),
    ("eze", "Ezekiel"),
    ("da", "Daniel"),
    ("ho", "Hosea"),
    ("joe", "Joel"),
    ("am", "Amos"),
    ("ob", "Obadiah"),
    ("jon", "Jonah"),
    ("mic", "Micah"),
    ("na", "Nahum"),
    ("hab", "Habakkuk"),
    ("zep", "Zephaniah"),
    ("hag", "Haggai"),
    ("zec", "Zechariah"),
    ("mal", "Malachi"),
    ("mt", "Matthew"),
    ("mr", "Mark"),
    ("lu", "Luke"),
    ("joh", "John"),
    ("ac", "Acts"),
    ("ro", "Romans"),
    ("1co", "1 Corinthians"),
    ("2co", "2 Corinthians"),
    ("ga", "Galatians"),
    ("eph", "Ephesians"),
    ("php", "Philippians"),
    ("col", "Colossians"),
    ("1th", "1 Thessalonians"),
    ("2th", "2 Thessalonians"),
    ("1ti", "1 Timothy"),
    ("2ti", "2 Timothy"),
    ("tit", "Titus"),
    ("phm", "Philemon"),
    ("heb", "Hebrews"),
    ("jas", "James"),
    ("1pe", "1 Peter"),
    ("2pe", "2 Peter"),
    ("1jo", "1 John"),
    ("2jo", "2 John"),
    ("3jo", "3 John"),
    ("jude", "Jude"),
    ("re", "Revelation"),
];

static BY_ABBREVIATION: Lazy<HashMap<&'static str, BookId>> = Lazy::new(|| {
    BOOKS
        .iter()
        .enumerate()
        .map(|(index, (abbrev, _))| (*abbrev, BookId(index as u8 + 1)))
        .collect()
});

impl BookId {
    pub const GENESIS: BookId = BookId(1);
    pub const REVELATION: BookId = BookId(66);

    /// `None` outside 1..=66.
    pub fn new(number: u32) -> Option<Self> {
        (1..=66)
            .contains(&number)
            .then(|| BookId(number as u8))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    pub fn display_name(self) -> &'static str {
        BOOKS[self.index()].1
    }

    pub fn abbreviation(self) -> &'static str {
        BOOKS[self.index()].0
    }

    fn index(self) -> usize {
        usize::from(self.0) - 1
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Look up an abbreviation. Input case is ignored; the table is lower-case.
pub fn book_id(abbrev: &str) -> Option<BookId> {
    if abbrev.bytes().any(|b| b.is_ascii_uppercase()) {
        BY_ABBREVIATION
            .get(abbrev.to_ascii_lowercase().as_str())
            .copied()
    } else {
        BY_ABBREVIATION.get(abbrev).copied()
    }
}

pub fn display_name(book: BookId) -> &'static str {
    book.display_name()
}

/// Every `(abbreviation, BookId)` pair in canonical order.
pub fn abbreviations() -> impl Iterator<Item = (&'static str, BookId)> {
    BOOKS
        .iter()
        .enumerate()
        .map(|(index, (abbrev, _))| (*abbrev, BookId(index as u8 + 1)))
}
