//! STEPBible lexicon indexer (TBESH for Hebrew, TBESG for Greek).
//!
//! The source files open with free-form documentation; the column header is
//! the first line whose leading tab-separated column is `eStrong#`/`eStrong`
//! and that mentions both `Transliteration` and `Gloss`. Every following line is a tab-separated
//! row zipped against that header.
//!
//! Each row becomes one [`LexiconEntry`], stored once and reachable through up
//! to four lookup keys:
//!
//! - the extended Strong's number (`H0001`)
//! - the dictionary variant (`dStrong`), unless it is the `=` placeholder
//! - the unified variant (`uStrong`), when it differs from `eStrong`
//! - the zero-stripped short form (`H1`), when it differs from `eStrong`
//!
//! A key produced by a later row replaces the earlier one.

pub mod columns;

use crate::index::error::{Error, Result};
use crate::index::keyed::KeyTable;
use crate::index::loader::strip_bom;
use columns::{is_header_line, Columns};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;
use std::fmt;
use tracing::debug;

static STRONG_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[HGA]\d+").unwrap());

const D_STRONG_PLACEHOLDER: &str = "=";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Hebrew,
    Greek,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::Hebrew, Language::Greek];

    pub fn name(self) -> &'static str {
        match self {
            Language::Hebrew => "hebrew",
            Language::Greek => "greek",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One normalized lexicon row. A field is `None` when the file has no column
/// for it, and is then left out of the JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LexiconEntry {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub e_strong: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub d_strong: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub u_strong: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub word: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transliteration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub morph: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gloss: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,
}

/// Position of an entry in [`LexiconIndex::entries`].
pub type EntryId = usize;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IndexStats {
    pub included: usize,
    pub skipped: usize,
    /// Distinct lookup keys in the finished index
    pub keys: usize,
}

/// Entries stored once, addressed by [`EntryId`] from the key table.
#[derive(Debug, Default)]
pub struct LexiconIndex {
    entries: Vec<LexiconEntry>,
    keys: KeyTable<String, EntryId>,
    stats: IndexStats,
}

impl LexiconIndex {
    pub fn get(&self, key: &str) -> Option<&LexiconEntry> {
        self.entry_id(key).map(|id| &self.entries[id])
    }

    pub fn entry_id(&self, key: &str) -> Option<EntryId> {
        self.keys.get(key).copied()
    }

    pub fn entries(&self) -> &[LexiconEntry] {
        &self.entries
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.keys.keys().map(String::as_str)
    }

    pub fn stats(&self) -> IndexStats {
        self.stats
    }

    fn insert(&mut self, entry: LexiconEntry) {
        let id = self.entries.len();
        for key in lookup_keys(&entry) {
            self.keys.insert(key, id);
        }
        self.entries.push(entry);
        self.stats.included += 1;
        self.stats.keys = self.keys.len();
    }
}

impl Serialize for LexiconIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.keys.len()))?;
        for (key, &id) in self.keys.iter() {
            map.serialize_entry(key, &self.entries[id])?;
        }
        map.end()
    }
}

/// Index the full contents of a lexicon file.
///
/// Fails only when no header line is found.
pub fn index_lexicon(contents: &str, language: Language) -> Result<LexiconIndex> {
    let mut lines = strip_bom(contents).lines();
    let header_line = lines
        .by_ref()
        .find(|line| is_header_line(line))
        .ok_or(Error::HeaderNotFound)?;
    let header: Vec<&str> = header_line.split('\t').map(str::trim).collect();
    let columns = Columns::resolve(&header, language).ok_or(Error::HeaderNotFound)?;

    let mut index = LexiconIndex::default();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let values: Vec<&str> = line.split('\t').map(str::trim).collect();
        match normalize_row(&values, &columns) {
            Some(entry) => index.insert(entry),
            None => {
                debug!(%language, row = values.first().copied().unwrap_or(""), "skipping lexicon row");
                index.stats.skipped += 1;
            }
        }
    }
    Ok(index)
}

/// Map a data row onto a [`LexiconEntry`]. `None` when the row has no
/// valid Strong's number.
fn normalize_row(values: &[&str], columns: &Columns) -> Option<LexiconEntry> {
    // rows shorter than the header read as empty trailing values
    let value = |position: usize| values.get(position).copied().unwrap_or("");
    let field = |position: Option<usize>| position.map(|p| value(p).to_string());

    let e_strong = value(columns.e_strong);
    if !STRONG_NUMBER.is_match(e_strong) {
        return None;
    }

    Some(LexiconEntry {
        e_strong: Some(e_strong.to_string()),
        d_strong: field(columns.d_strong),
        u_strong: field(columns.u_strong),
        word: field(columns.word),
        transliteration: field(columns.transliteration),
        morph: field(columns.morph),
        gloss: field(columns.gloss),
        meaning: field(columns.meaning),
    })
}

/// Every key an entry is reachable under, canonical key first.
pub fn lookup_keys(entry: &LexiconEntry) -> Vec<String> {
    let Some(e_strong) = entry.e_strong.as_deref() else {
        return Vec::new();
    };
    let mut keys = vec![e_strong.to_string()];

    if let Some(d_strong) = entry.d_strong.as_deref() {
        if !d_strong.is_empty() && d_strong != D_STRONG_PLACEHOLDER {
            keys.push(d_strong.to_string());
        }
    }
    if let Some(u_strong) = entry.u_strong.as_deref() {
        if !u_strong.is_empty() && u_strong != e_strong {
            keys.push(u_strong.to_string());
        }
    }
    let short = short_form(e_strong);
    if short != e_strong {
        keys.push(short);
    }
    keys
}

/// Strip leading zeros from the numeric part: `H0001` to `H1`, `G0025a` to
/// `G25a`. An all-zero number keeps one digit.
pub fn short_form(strong: &str) -> String {
    let mut chars = strong.chars();
    let Some(prefix) = chars.next() else {
        return String::new();
    };
    let rest = chars.as_str();
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    let (digits, suffix) = rest.split_at(digits_end);
    let trimmed = digits.trim_start_matches('0');
    let number = if trimmed.is_empty() && !digits.is_empty() {
        "0"
    } else {
        trimmed
    };
    format!("{prefix}{number}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEBREW: &str = "\u{feff}TBESH - Translators Brief lexicon of Extended Strongs for Hebrew\n\
eStrong# = extended Strong's number\n\
\n\
eStrong#\tdStrong\tuStrong\tHebrew\tTransliteration\tMorph\tGloss\tMeaning\n\
H0001\tH0001a\tH0001\tאָב\tav\tH:N-M\tfather\tfather of an individual\n\
X123\tX123\tX123\tבַּד\tbad\tH:N-M\tbad\tnot a real row\n\
H0002\t=\tH0002\tאַב\tav\tA:N-M\tfather\n";

    #[test]
    fn aliases_share_one_entry() {
        let index = index_lexicon(HEBREW, Language::Hebrew).unwrap();
        let canonical = index.entry_id("H0001").unwrap();
        assert_eq!(index.entry_id("H1"), Some(canonical));
        assert_eq!(index.entry_id("H0001a"), Some(canonical));
        assert_eq!(index.get("H1").unwrap().gloss.as_deref(), Some("father"));
    }

    #[test]
    fn invalid_prefix_is_skipped() {
        let index = index_lexicon(HEBREW, Language::Hebrew).unwrap();
        assert!(index.get("X123").is_none());
        assert_eq!(index.stats().skipped, 1);
        assert_eq!(index.stats().included, 2);
    }

    #[test]
    fn placeholder_dstrong_and_short_row() {
        let index = index_lexicon(HEBREW, Language::Hebrew).unwrap();
        assert!(index.get("=").is_none());
        let entry = index.get("H2").unwrap();
        assert_eq!(entry.meaning.as_deref(), Some(""));
        assert_eq!(entry.word.as_deref(), Some("אַב"));
    }

    #[test]
    fn header_not_found_is_fatal() {
        let result = index_lexicon("H0001\tfoo\n", Language::Greek);
        assert!(matches!(result, Err(Error::HeaderNotFound)));
    }

    #[test]
    fn prose_line_mentioning_columns_is_not_the_header() {
        let source = "eStrong# column = Strong's number, see Transliteration and Gloss below\n\
eStrong#\tHebrew\tTransliteration\tGloss\n\
H0001\tאָב\tav\tfather\n";
        let index = index_lexicon(source, Language::Hebrew).unwrap();
        assert_eq!(index.get("H1").unwrap().gloss.as_deref(), Some("father"));
        assert_eq!(index.stats().skipped, 0);
    }

    #[test]
    fn crlf_rows_are_trimmed() {
        let source = "eStrong\tGreek\tTransliteration\tGloss\r\nG0026\tἀγάπη\tagapē\tlove\r\n\r\n";
        let index = index_lexicon(source, Language::Greek).unwrap();
        let entry = index.get("G26").unwrap();
        assert_eq!(entry.gloss.as_deref(), Some("love"));
        assert_eq!(index.stats().included, 1);
        assert_eq!(index.stats().skipped, 0);
    }

    #[test]
    fn later_rows_win_key_collisions() {
        let source = "eStrong\tGreek\tTransliteration\tGloss\n\
G0001\tἈ\ta\tAlpha\n\
G1\tἈ\ta\tfirst\n";
        let index = index_lexicon(source, Language::Greek).unwrap();
        assert_eq!(index.get("G1").unwrap().gloss.as_deref(), Some("first"));
        assert_eq!(index.get("G0001").unwrap().gloss.as_deref(), Some("Alpha"));
        let keys: Vec<_> = index.keys().collect();
        assert_eq!(keys, vec!["G0001", "G1"]);
    }

    #[test]
    fn short_forms() {
        assert_eq!(short_form("H0001"), "H1");
        assert_eq!(short_form("G0025a"), "G25a");
        assert_eq!(short_form("H8674"), "H8674");
        assert_eq!(short_form("A0000"), "A0");
    }

    #[test]
    fn missing_columns_are_omitted_from_json() {
        let source = "eStrong\tGreek\tTransliteration\tGloss\nG0026\tἀγάπη\tagapē\tlove\n";
        let index = index_lexicon(source, Language::Greek).unwrap();
        let json = serde_json::to_string(index.get("G26").unwrap()).unwrap();
        assert_eq!(
            json,
            r#"{"eStrong":"G0026","word":"ἀγάπη","transliteration":"agapē","gloss":"love"}"#
        );
    }
}
