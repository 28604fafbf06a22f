//! Labeled field extraction for one AHLB span.
//!
//! A span is the text between two consecutive `Strong's Hebrew #:` markers.
//! OCR noise can leave stray labels from earlier entries inside a span, so
//! every extractor anchors on the *last* occurrence of its label and reads
//! forward to the first terminating label after it (or the end of the span).
//!
//! | field           | starts after            | ends before                                     |
//! |-----------------|-------------------------|-------------------------------------------------|
//! | translation     | `Translation:`          | `Definition:`                                   |
//! | definition      | `Definition:`           | `Relationship to Root:`, `KJV Translations:`, `Strong's` |
//! | relationship    | `Relationship to Root:` | `KJV Translations:`, `Strong's`                 |
//! | kjvTranslations | `KJV Translations:`     | end of span                                     |
//!
//! Values are whitespace-collapsed. A missing label yields an empty string.

use once_cell::sync::Lazy;
use regex::Regex;

const TRANSLATION: &str = "Translation:";
const DEFINITION: &str = "Definition:";
const RELATIONSHIP: &str = "Relationship to Root:";
const KJV_TRANSLATIONS: &str = "KJV Translations:";
const STRONGS: &str = "Strong's";
const STRONGS_TYPOGRAPHIC: &str = "Strong\u{2019}s";

/// `/ a-v )`: the transliteration closing the Hebrew word group.
static TRANSLITERATION_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/\s*([a-z][a-z.\-]*)\s*\)").unwrap());

/// `(masc.`, `(fem.` or `(common`
static WORD_TYPE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(\s*(masc\.|fem\.|common)").unwrap());

/// Everything extracted from one span.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SpanFields {
    pub translation: String,
    pub transliteration: String,
    pub word_type: String,
    pub definition: String,
    pub relationship: String,
    pub kjv_translations: String,
}

impl SpanFields {
    pub fn extract(span: &str) -> Self {
        SpanFields {
            translation: translation(span),
            transliteration: transliteration(span),
            word_type: word_type(span),
            definition: definition(span),
            relationship: relationship(span),
            kjv_translations: kjv_translations(span),
        }
    }

    /// Spans without a translation or a definition produce no entry.
    pub fn has_content(&self) -> bool {
        !self.translation.is_empty() || !self.definition.is_empty()
    }
}

pub fn translation(span: &str) -> String {
    labeled_value(span, TRANSLATION, &[DEFINITION])
}

pub fn definition(span: &str) -> String {
    labeled_value(
        span,
        DEFINITION,
        &[RELATIONSHIP, KJV_TRANSLATIONS, STRONGS, STRONGS_TYPOGRAPHIC],
    )
}

pub fn relationship(span: &str) -> String {
    labeled_value(
        span,
        RELATIONSHIP,
        &[KJV_TRANSLATIONS, STRONGS, STRONGS_TYPOGRAPHIC],
    )
}

pub fn kjv_translations(span: &str) -> String {
    labeled_value(span, KJV_TRANSLATIONS, &[])
}

pub fn transliteration(span: &str) -> String {
    last_capture(&TRANSLITERATION_TOKEN, span)
}

pub fn word_type(span: &str) -> String {
    last_capture(&WORD_TYPE_TOKEN, span)
}

fn labeled_value(span: &str, label: &str, terminators: &[&str]) -> String {
    let Some(start) = span.rfind(label) else {
        return String::new();
    };
    let rest = &span[start + label.len()..];
    let end = terminators
        .iter()
        .filter_map(|terminator| rest.find(terminator))
        .min()
        .unwrap_or(rest.len());
    collapse_whitespace(&rest[..end])
}

fn last_capture(pattern: &Regex, span: &str) -> String {
    pattern
        .captures_iter(span)
        .last()
        .and_then(|captures| captures.get(1))
        .map(|token| token.as_str().to_string())
        .unwrap_or_default()
}

pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
