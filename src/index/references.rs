//! Scripture reference parsing.
//!
//! Parses TSK-style reference tokens such as `ro 8:28,29` or `isa 40:26-28`:
//!
//! ```text
//! <abbrev> <chapter>:<segment>[,<segment>...]
//! segment = <verse> | <start>-<end>
//! ```
//!
//! An unknown abbreviation, a missing `:` or a bad chapter number yields no
//! references. A bad segment is dropped on its own and the remaining segments
//! are still returned, in input order.

use crate::index::books::{book_id, BookId};
use serde::Serialize;

/// A single verse, or an inclusive verse range within one chapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScriptureReference {
    pub book: BookId,
    pub chapter: u32,
    pub verse: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verse_end: Option<u32>,
}

impl ScriptureReference {
    pub fn verse(book: BookId, chapter: u32, verse: u32) -> Self {
        Self {
            book,
            chapter,
            verse,
            verse_end: None,
        }
    }

    pub fn range(book: BookId, chapter: u32, verse: u32, verse_end: u32) -> Self {
        Self {
            book,
            chapter,
            verse,
            verse_end: Some(verse_end),
        }
    }

    pub fn is_range(&self) -> bool {
        self.verse_end.is_some()
    }
}

/// Parse one reference token into zero or more references.
pub fn parse_reference(input: &str) -> Vec<ScriptureReference> {
    let Some((abbrev, location)) = input.trim().split_once(char::is_whitespace) else {
        return Vec::new();
    };
    let Some(book) = book_id(abbrev) else {
        return Vec::new();
    };
    let Some((chapter, verses)) = location.split_once(':') else {
        return Vec::new();
    };
    let Some(chapter) = parse_positive(chapter) else {
        return Vec::new();
    };

    verses
        .split(',')
        .filter_map(|segment| parse_segment(book, chapter, segment))
        .collect()
}

/// Parse a `;`-separated reference list, flattening every token's references
/// in order. Empty tokens are ignored.
pub fn parse_reference_list(list: &str) -> Vec<ScriptureReference> {
    list.split(';')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .flat_map(parse_reference)
        .collect()
}

fn parse_segment(book: BookId, chapter: u32, segment: &str) -> Option<ScriptureReference> {
    match segment.split_once('-') {
        Some((start, end)) => {
            let start = parse_positive(start)?;
            let end = parse_positive(end)?;
            (end >= start).then(|| ScriptureReference::range(book, chapter, start, end))
        }
        None => parse_positive(segment).map(|verse| ScriptureReference::verse(book, chapter, verse)),
    }
}

fn parse_positive(token: &str) -> Option<u32> {
    token.trim().parse::<u32>().ok().filter(|n| *n > 0)
}
