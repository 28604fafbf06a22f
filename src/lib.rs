//! # scripture-index
//!
//! Offline builders that turn third-party biblical reference datasets into the
//! static JSON files the study app loads at runtime:
//!
//! - Treasury of Scripture Knowledge cross-references, see [`index::crossrefs`]
//! - STEPBible Hebrew/Greek lexicons (TBESH/TBESG), see [`index::lexicon`]
//! - The AHLB lexicon CSV export, see [`index::ahlb`]
//!
//! Each builder reads one flat file and writes one JSON artifact; the three
//! binaries under `src/bin/` are thin wrappers around [`index::jobs`].

pub mod index;
