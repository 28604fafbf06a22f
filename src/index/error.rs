//! Fatal errors for the index builders.
//!
//! Only structural failures surface here. Per-record problems (a short
//! cross-reference line, a lexicon row without a Strong's number, a span
//! with no translation) are skipped and counted by the builders instead.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Reading an input or writing an output failed
    #[error("IO error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No line in the lexicon file looks like the column header
    #[error("Lexicon error: header not found (expected a line starting with eStrong# or eStrong that names Transliteration and Gloss)")]
    HeaderNotFound,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] config::ConfigError),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
