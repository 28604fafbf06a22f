//! AHLB (Ancient Hebrew Lexicon of the Bible) extractor.
//!
//! The source is a two-column CSV export, `PageNumber,Text`, where `Text` is a
//! quoted block of OCR'd page text spanning many physical lines. The text of
//! every row is flattened into one document, which is then cut at each
//! `Strong's Hebrew #: h.<n>[, h.<n>...]` marker. The span between the
//! previous marker (or the start of the document) and the current one
//! describes the entries for that marker's numbers; see [`fields`] for how
//! each labeled field is read out of a span.
//!
//! Known risk: if the flattened text loses whitespace between pages, the
//! last-label heuristic can pick up a label from an unrelated preceding
//! entry. The extractor does not try to detect this.

pub mod fields;

use crate::index::error::Result;
use crate::index::keyed::KeyTable;
use fields::SpanFields;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Serialize, Serializer};
use tracing::debug;

static STRONGS_MARKER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"Strong['’]s Hebrew #:\s*(h\.\d+(?:\s*,\s*h\.\d+)*)").unwrap()
});

static STRONGS_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"h\.(\d+)").unwrap());

/// Value of [`AhlbEntry::source`].
pub const SOURCE: &str = "AHLB";

/// Column holding the free text (0-based).
const TEXT_COLUMN: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AhlbEntry {
    pub strongs_id: String,
    pub translation: String,
    pub transliteration: String,
    pub word_type: String,
    pub definition: String,
    pub relationship: String,
    pub kjv_translations: String,
    pub source: String,
}

impl AhlbEntry {
    fn new(strongs_id: String, fields: &SpanFields) -> Self {
        AhlbEntry {
            strongs_id,
            translation: fields.translation.clone(),
            transliteration: fields.transliteration.clone(),
            word_type: fields.word_type.clone(),
            definition: fields.definition.clone(),
            relationship: fields.relationship.clone(),
            kjv_translations: fields.kjv_translations.clone(),
            source: SOURCE.to_string(),
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AhlbStats {
    /// CSV data rows read
    pub rows: usize,
    /// `Strong's Hebrew #:` markers found
    pub markers: usize,
    /// Spans with neither translation nor definition
    pub skipped: usize,
    pub entries: usize,
}

/// Flattened free text of the CSV export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatText {
    pub text: String,
    pub rows: usize,
}

/// Parse the CSV and join the text column of every data row with newlines.
///
/// Quoting follows the usual CSV rules: `""` inside a quoted field is one
/// literal quote, and commas and newlines inside quotes are field content.
pub fn flatten_text(csv_source: &str) -> Result<FlatText> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_source.as_bytes());

    let mut text = String::new();
    let mut rows = 0;
    for record in reader.records() {
        let record = record?;
        rows += 1;
        let Some(block) = record.get(TEXT_COLUMN) else {
            continue;
        };
        if !text.is_empty() {
            text.push('\n');
        }
        text.push_str(block);
    }
    Ok(FlatText { text, rows })
}

/// Entries keyed by `strongsId`, in first-seen order.
#[derive(Debug, Default)]
pub struct AhlbIndex {
    entries: KeyTable<String, AhlbEntry>,
    stats: AhlbStats,
}

impl AhlbIndex {
    /// Flatten and extract in one step.
    pub fn from_csv(csv_source: &str) -> Result<Self> {
        let flat = flatten_text(csv_source)?;
        let mut index = extract_entries(&flat.text);
        index.stats.rows = flat.rows;
        Ok(index)
    }

    pub fn get(&self, strongs_id: &str) -> Option<&AhlbEntry> {
        self.entries.get(strongs_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AhlbEntry> {
        self.entries.iter().map(|(_, entry)| entry)
    }

    pub fn stats(&self) -> AhlbStats {
        self.stats
    }
}

impl Serialize for AhlbIndex {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

/// Cut `text` at every Strong's marker and extract one entry per listed
/// number. A number seen again later replaces its earlier entry.
pub fn extract_entries(text: &str) -> AhlbIndex {
    let mut index = AhlbIndex::default();
    let mut span_start = 0;

    for marker in STRONGS_MARKER.captures_iter(text) {
        let Some(whole) = marker.get(0) else {
            continue;
        };
        let span = &text[span_start..whole.start()];
        span_start = whole.end();
        index.stats.markers += 1;

        let fields = SpanFields::extract(span);
        if !fields.has_content() {
            debug!(marker = whole.as_str(), "no translation or definition before marker");
            index.stats.skipped += 1;
            continue;
        }

        for number in STRONGS_NUMBER.captures_iter(&marker[1]) {
            let id = strongs_id(&number[1]);
            index.entries.insert(id.clone(), AhlbEntry::new(id, &fields));
        }
    }

    index.stats.entries = index.entries.len();
    index
}

/// `"1"` to `"H0001"`. Leading zeros are normalized before padding.
pub fn strongs_id(digits: &str) -> String {
    format!("H{:0>4}", digits.trim_start_matches('0'))
}
