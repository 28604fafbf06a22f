//! AHLB extractor tests: CSV flattening, span delimiting and the id format.

use once_cell::sync::Lazy;
use proptest::prelude::*;
use regex::Regex;
use scripture_index::index::ahlb::{extract_entries, flatten_text, AhlbIndex};
use scripture_index::index::loader::{read_source, to_json};
use std::path::PathBuf;

static STRONGS_ID: Lazy<Regex> = Lazy::new(|| Regex::new(r"^H\d{4}$").unwrap());

fn fixture() -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("ahlb.csv");
    read_source(path).expect("fixture to load")
}

#[test]
fn extracts_fixture_entries() {
    let index = AhlbIndex::from_csv(&fixture()).unwrap();

    let father = index.get("H0001").unwrap();
    assert_eq!(father.translation, "father");
    assert_eq!(father.definition, "The one who holds up the tent and the family.");
    assert_eq!(father.relationship, "The strength of the family.");
    assert_eq!(father.kjv_translations, "father, chief, families");
    assert_eq!(father.transliteration, "av");
    assert_eq!(father.word_type, "masc.");

    assert!(index.get("H0002").is_none());

    let bundle = index.get("H0093").unwrap();
    assert_eq!(bundle.definition, r#"A "bundle", tied together."#);
    assert_eq!(bundle.word_type, "fem.");
    assert_eq!(index.get("H0092").unwrap().definition, bundle.definition);
}

#[test]
fn fixture_stats() {
    let stats = AhlbIndex::from_csv(&fixture()).unwrap().stats();
    assert_eq!(stats.rows, 2);
    assert_eq!(stats.markers, 3);
    assert_eq!(stats.skipped, 1);
    assert_eq!(stats.entries, 3);
}

#[test]
fn quoted_newlines_stay_inside_the_text() {
    let flat = flatten_text(&fixture()).unwrap();
    assert_eq!(flat.rows, 2);
    assert!(flat.text.starts_with("1002-J) ab / av ) (masc.)\nTranslation: father"));
    assert!(flat.text.contains(r#"A "bundle", tied together."#));
}

#[test]
fn entry_json_shape() {
    let index = extract_entries("Translation: light Strong's Hebrew #: h.216");
    let json = to_json(&index, false).unwrap();
    insta::assert_snapshot!(json, @r#"{"H0216":{"strongsId":"H0216","translation":"light","transliteration":"","wordType":"","definition":"","relationship":"","kjvTranslations":"","source":"AHLB"}}"#);
}

#[test]
fn extracting_twice_is_byte_identical() {
    let source = fixture();
    let first = to_json(&AhlbIndex::from_csv(&source).unwrap(), false).unwrap();
    let second = to_json(&AhlbIndex::from_csv(&source).unwrap(), false).unwrap();
    assert_eq!(first, second);
}

proptest! {
    #[test]
    fn ids_are_always_four_digit(numbers in proptest::collection::vec(1u32..=9999, 1..5)) {
        let list = numbers.iter().map(|n| format!("h.{}", n)).collect::<Vec<_>>().join(", ");
        let text = format!("Translation: word Definition: meaning Strong's Hebrew #: {}", list);
        let index = extract_entries(&text);
        prop_assert!(!index.is_empty());
        for entry in index.iter() {
            prop_assert!(STRONGS_ID.is_match(&entry.strongs_id), "{}", entry.strongs_id);
        }
    }

    #[test]
    fn no_entry_without_translation_or_definition(filler in "[a-z ]{0,30}", n in 1u32..=9999) {
        let text = format!("{} KJV Translations: x Strong's Hebrew #: h.{}", filler, n);
        prop_assert!(extract_entries(&text).is_empty());
    }
}

#[test]
fn crlf_export_extracts_the_same_entries() {
    let source = fixture();
    let crlf = source.replace('\n', "\r\n");
    let index = AhlbIndex::from_csv(&crlf).unwrap();
    assert_eq!(index.stats(), AhlbIndex::from_csv(&source).unwrap().stats());
    assert_eq!(index.get("H0001").unwrap().translation, "father");
    assert_eq!(index.get("H0001").unwrap().kjv_translations, "father, chief, families");
    assert_eq!(
        to_json(&index, false).unwrap(),
        to_json(&AhlbIndex::from_csv(&source).unwrap(), false).unwrap()
    );
}
