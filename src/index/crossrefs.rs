//! Cross-reference index builder.
//!
//! Consumes the TSK tab-separated source, one entry per line:
//!
//! ```text
//! bookId \t chapter \t verse \t sortOrder \t word \t refList
//! ```
//!
//! and groups entries under their `"bookId:chapter:verse"` key. Each verse's
//! entries end up sorted by `sortOrder`; ties keep source order.
//!
//! Malformed lines (too few columns, non-numeric location) are skipped and
//! counted, never fatal. A non-numeric `sortOrder` reads as 0.

use crate::index::keyed::KeyTable;
use crate::index::references::{parse_reference_list, ScriptureReference};
use serde::{Serialize, Serializer};
use std::fmt;
use tracing::debug;

const COLUMNS: usize = 6;

/// `"bookId:chapter:verse"` key of the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct VerseKey {
    pub book: u32,
    pub chapter: u32,
    pub verse: u32,
}

impl VerseKey {
    pub fn new(book: u32, chapter: u32, verse: u32) -> Self {
        Self {
            book,
            chapter,
            verse,
        }
    }
}

impl fmt::Display for VerseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.book, self.chapter, self.verse)
    }
}

impl Serialize for VerseKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CrossRefEntry {
    pub order: i64,
    pub word: String,
    pub refs: Vec<ScriptureReference>,
}

/// Diagnostic counts for one build. Not part of the JSON output.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BuildStats {
    /// Non-blank lines seen
    pub lines: usize,
    pub skipped: usize,
    pub entries: usize,
    pub references: usize,
    pub verses: usize,
}

/// Accumulates lines; [`CrossRefIndexBuilder::build`] applies the per-verse sort.
#[derive(Debug, Default)]
pub struct CrossRefIndexBuilder {
    verses: KeyTable<VerseKey, Vec<CrossRefEntry>>,
    stats: BuildStats,
}

impl CrossRefIndexBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one source line. Returns `false` if the line was skipped.
    pub fn push_line(&mut self, line: &str) -> bool {
        if line.trim().is_empty() {
            return false;
        }
        self.stats.lines += 1;

        let Some((key, entry)) = parse_line(line) else {
            debug!(line = self.stats.lines, "skipping malformed cross-reference line");
            self.stats.skipped += 1;
            return false;
        };

        self.stats.entries += 1;
        self.stats.references += entry.refs.len();
        self.verses.get_or_insert_with(key, Vec::new).push(entry);
        true
    }

    pub fn extend<'a>(&mut self, lines: impl IntoIterator<Item = &'a str>) {
        for line in lines {
            self.push_line(line);
        }
    }

    pub fn build(mut self) -> CrossRefIndex {
        for entries in self.verses.values_mut() {
            // stable: equal orders keep source order
            entries.sort_by_key(|entry| entry.order);
        }
        self.stats.verses = self.verses.len();
        CrossRefIndex {
            verses: self.verses,
            stats: self.stats,
        }
    }
}

fn parse_line(line: &str) -> Option<(VerseKey, CrossRefEntry)> {
    let fields: Vec<&str> = line.split('\t').collect();
    if fields.len() < COLUMNS {
        return None;
    }

    let book = fields[0].trim().parse().ok()?;
    let chapter = fields[1].trim().parse().ok()?;
    let verse = fields[2].trim().parse().ok()?;
    let order = fields[3].trim().parse().unwrap_or_else(|_| {
        debug!(order = fields[3], "non-numeric sort order, using 0");
        0
    });

    let entry = CrossRefEntry {
        order,
        word: fields[4].to_string(),
        refs: parse_reference_list(fields[5]),
    };
    Some((VerseKey::new(book, chapter, verse), entry))
}

/// The finished index: verse key to entries ordered by `order`.
#[derive(Debug)]
pub struct CrossRefIndex {
    verses: KeyTable<VerseKey, Vec<CrossRefEntry>>,
    stats: BuildStats,
}

impl CrossRefIndex {
    /// Build an index from the full text of a source file.
    pub fn from_source(source: &str) -> Self {
        let mut builder = CrossRefIndexBuilder::new();
        builder.extend(source.lines());
        builder.build()
    }

    pub fn get(&self, key: &VerseKey) -> Option<&[CrossRefEntry]> {
        self.verses.get(key).map(Vec::as_slice)
    }

    pub fn stats(&self) -> BuildStats {
        self.stats
    }

    pub fn len(&self) -> usize {
        self.verses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.verses.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&VerseKey, &[CrossRefEntry])> {
        self.verses
            .iter()
            .map(|(key, entries)| (key, entries.as_slice()))
    }
}

impl Serialize for CrossRefIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.verses.serialize(serializer)
    }
}
