//! End-to-end builder runs.
//!
//! Each run reads its whole input file, builds the index in memory, writes
//! the whole JSON artifact and returns the run's diagnostic counts. The
//! `*_with` variants take explicit paths; the others resolve paths from a
//! [`ScriptureConfig`].

use crate::index::ahlb::{AhlbIndex, AhlbStats};
use crate::index::crossrefs::{BuildStats, CrossRefIndex};
use crate::index::error::Result;
use crate::index::lexicon::{index_lexicon, IndexStats, Language};
use crate::index::loader::{read_source, write_json};
use scripture_config::{JobPaths, ScriptureConfig};
use std::path::{Path, PathBuf};
use tracing::info;

/// Input and output locations for one run, resolved against the config root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl ResolvedPaths {
    pub fn from_config(config: &ScriptureConfig, paths: &JobPaths) -> Self {
        Self {
            input: config.resolve(&paths.input),
            output: config.resolve(&paths.output),
        }
    }
}

pub fn crossrefs_paths(config: &ScriptureConfig) -> ResolvedPaths {
    ResolvedPaths::from_config(config, &config.crossrefs)
}

pub fn lexicon_paths(config: &ScriptureConfig, language: Language) -> ResolvedPaths {
    let paths = match language {
        Language::Hebrew => &config.lexicon.hebrew,
        Language::Greek => &config.lexicon.greek,
    };
    ResolvedPaths::from_config(config, paths)
}

pub fn ahlb_paths(config: &ScriptureConfig) -> ResolvedPaths {
    ResolvedPaths::from_config(config, &config.ahlb)
}

pub fn build_crossrefs(config: &ScriptureConfig) -> Result<BuildStats> {
    let paths = crossrefs_paths(config);
    build_crossrefs_with(&paths.input, &paths.output, config.output.pretty)
}

pub fn build_crossrefs_with(input: &Path, output: &Path, pretty: bool) -> Result<BuildStats> {
    info!(input = %input.display(), "building cross-reference index");
    let source = read_source(input)?;
    let index = CrossRefIndex::from_source(&source);
    write_json(output, &index, pretty)?;

    let stats = index.stats();
    info!(
        lines = stats.lines,
        skipped = stats.skipped,
        entries = stats.entries,
        references = stats.references,
        verses = stats.verses,
        "cross-reference index built"
    );
    Ok(stats)
}

pub fn build_lexicon(config: &ScriptureConfig, language: Language) -> Result<IndexStats> {
    let paths = lexicon_paths(config, language);
    build_lexicon_with(language, &paths.input, &paths.output, config.output.pretty)
}

pub fn build_lexicon_with(
    language: Language,
    input: &Path,
    output: &Path,
    pretty: bool,
) -> Result<IndexStats> {
    info!(%language, input = %input.display(), "building lexicon index");
    let source = read_source(input)?;
    let index = index_lexicon(&source, language)?;
    write_json(output, &index, pretty)?;

    let stats = index.stats();
    info!(
        %language,
        included = stats.included,
        skipped = stats.skipped,
        keys = stats.keys,
        "lexicon index built"
    );
    Ok(stats)
}

pub fn build_ahlb(config: &ScriptureConfig) -> Result<AhlbStats> {
    let paths = ahlb_paths(config);
    build_ahlb_with(&paths.input, &paths.output, config.output.pretty)
}

pub fn build_ahlb_with(input: &Path, output: &Path, pretty: bool) -> Result<AhlbStats> {
    info!(input = %input.display(), "building AHLB lexicon");
    let source = read_source(input)?;
    let index = AhlbIndex::from_csv(&source)?;
    write_json(output, &index, pretty)?;

    let stats = index.stats();
    info!(
        rows = stats.rows,
        markers = stats.markers,
        skipped = stats.skipped,
        entries = stats.entries,
        "AHLB lexicon built"
    );
    Ok(stats)
}
