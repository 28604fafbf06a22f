//! Whole-file input and output for the builders.
//!
//! Inputs are read in one go with any leading byte-order mark removed.
//! Outputs are serialized in memory and written in one go, creating the
//! parent directory if needed. Compact JSON is the default.

use crate::index::error::{Error, Result};
use serde::Serialize;
use std::fs;
use std::path::Path;
use tracing::info;

const BOM: char = '\u{feff}';

/// Remove a leading UTF-8 byte-order mark.
pub fn strip_bom(source: &str) -> &str {
    source.strip_prefix(BOM).unwrap_or(source)
}

/// Read an input file. A missing file is fatal.
pub fn read_source(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    let source = fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
    Ok(strip_bom(&source).to_string())
}

/// Serialize `value` to a JSON string.
pub fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// Serialize `value` and write it to `path`, replacing any previous file.
/// Returns the number of bytes written.
pub fn write_json<T: Serialize + ?Sized>(
    path: impl AsRef<Path>,
    value: &T,
    pretty: bool,
) -> Result<usize> {
    let path = path.as_ref();
    let json = to_json(value, pretty)?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }
    fs::write(path, &json).map_err(|e| Error::io(path, e))?;
    info!(path = %path.display(), bytes = json.len(), "wrote index");
    Ok(json.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_only_a_leading_bom() {
        assert_eq!(strip_bom("\u{feff}eStrong#"), "eStrong#");
        assert_eq!(strip_bom("a\u{feff}"), "a\u{feff}");
    }

    #[test]
    fn missing_input_is_an_io_error() {
        let err = read_source("/no/such/dir/tsk.txt").unwrap_err();
        assert!(matches!(err, Error::Io { .. }));
        assert!(err.to_string().contains("/no/such/dir/tsk.txt"));
    }

    #[test]
    fn writes_compact_json_and_creates_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.json");
        let written = write_json(&path, &vec![1, 2, 3], false).unwrap();
        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents, "[1,2,3]");
        assert_eq!(written, contents.len());
    }

    #[test]
    fn reads_and_strips_bom() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("in.txt");
        fs::write(&path, "\u{feff}hello").unwrap();
        assert_eq!(read_source(&path).unwrap(), "hello");
    }
}
