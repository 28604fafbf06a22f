//! Header column resolution for STEPBible lexicon files.
//!
//! The Hebrew and Greek files name some columns differently, so each logical
//! field has an ordered list of accepted header names. The first candidate
//! present in the header wins.

use super::Language;

/// Accepted names for the extended Strong's column.
pub const STRONG_COLUMNS: &[&str] = &["eStrong#", "eStrong"];

/// Header substrings that mark the meaning/lexicon column. The leftmost
/// column containing any of them is used.
pub const MEANING_MARKERS: &[&str] = &["Meaning", "Abbott-Smith", "lexicon"];

/// Substrings a header line must carry besides the leading Strong's column.
pub const HEADER_MARKERS: &[&str] = &["Transliteration", "Gloss"];

const D_STRONG: &str = "dStrong";
const U_STRONG: &str = "uStrong";
const TRANSLITERATION: &str = "Transliteration";
const MORPH: &str = "Morph";
const GLOSS: &str = "Gloss";
const MEANING: &str = "Meaning";

/// Column positions for one header row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Columns {
    pub e_strong: usize,
    pub d_strong: Option<usize>,
    pub u_strong: Option<usize>,
    pub word: Option<usize>,
    pub transliteration: Option<usize>,
    pub morph: Option<usize>,
    pub gloss: Option<usize>,
    pub meaning: Option<usize>,
}

impl Columns {
    /// Resolve positions from header names. `None` if no Strong's column.
    pub fn resolve(header: &[&str], language: Language) -> Option<Self> {
        let find = |name: &str| header.iter().position(|column| *column == name);
        let first_of = |names: &[&str]| names.iter().find_map(|name| find(*name));

        Some(Columns {
            e_strong: first_of(STRONG_COLUMNS)?,
            d_strong: find(D_STRONG),
            u_strong: find(U_STRONG),
            word: first_of(&word_columns(language)[..]),
            transliteration: find(TRANSLITERATION),
            morph: find(MORPH),
            gloss: find(GLOSS),
            meaning: meaning_column(header).or_else(|| find(MEANING)),
        })
    }
}

/// True for the header row: its first column is a Strong's column and it
/// names the transliteration and gloss columns.
pub fn is_header_line(line: &str) -> bool {
    let leading = line.split('\t').next().unwrap_or("").trim();
    STRONG_COLUMNS.contains(&leading)
        && HEADER_MARKERS.iter().all(|marker| line.contains(marker))
}

fn word_columns(language: Language) -> [&'static str; 2] {
    match language {
        Language::Hebrew => ["Hebrew", "Greek"],
        Language::Greek => ["Greek", "Hebrew"],
    }
}

fn meaning_column(header: &[&str]) -> Option<usize> {
    header.iter().position(|column| {
        MEANING_MARKERS
            .iter()
            .any(|marker| column.contains(marker))
    })
}
