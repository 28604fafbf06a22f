//! Shared configuration loader for the scripture index builders.
//!
//! `defaults/scripture.default.toml` is embedded into every binary so the
//! fixed project layout lives in one place. Binaries layer user files and
//! command-line overrides on top via [`Loader`] before deserializing into
//! [`ScriptureConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};

const DEFAULT_TOML: &str = include_str!("../defaults/scripture.default.toml");

/// Top-level configuration consumed by the builders.
#[derive(Debug, Clone, Deserialize)]
pub struct ScriptureConfig {
    /// Directory that relative input/output paths resolve against.
    pub root: PathBuf,
    pub output: OutputConfig,
    pub crossrefs: JobPaths,
    pub lexicon: LexiconConfig,
    pub ahlb: JobPaths,
}

/// JSON serialization knobs shared by every builder.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub pretty: bool,
}

/// One input file and the JSON artifact built from it.
#[derive(Debug, Clone, Deserialize)]
pub struct JobPaths {
    pub input: PathBuf,
    pub output: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LexiconConfig {
    pub hebrew: JobPaths,
    pub greek: JobPaths,
}

impl ScriptureConfig {
    /// Resolve a configured path against [`ScriptureConfig::root`].
    pub fn resolve(&self, path: impl AsRef<Path>) -> PathBuf {
        let path = path.as_ref();
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.root.join(path)
        }
    }
}

/// Layers `scripture.toml`, `--config` files and flag values over the
/// embedded project layout. Later layers win.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    pub fn new() -> Self {
        Loader {
            builder: Config::builder()
                .add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml)),
        }
    }

    /// A `--config` file. Building fails if it does not exist.
    pub fn with_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), true)
    }

    /// A file such as `scripture.toml` in the working directory, skipped
    /// when absent.
    pub fn with_optional_file(self, path: impl AsRef<Path>) -> Self {
        self.layer(path.as_ref(), false)
    }

    /// Set one dotted key, e.g. `lexicon.greek.input` or `output.pretty`.
    pub fn set_override<V>(mut self, key: &str, value: V) -> Result<Self, ConfigError>
    where
        V: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    pub fn build(self) -> Result<ScriptureConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }

    fn layer(mut self, path: &Path, required: bool) -> Self {
        let file = File::from(path).format(FileFormat::Toml).required(required);
        self.builder = self.builder.add_source(file);
        self
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_layout() {
        let config = Loader::new().build().expect("defaults to deserialize");
        assert!(!config.output.pretty);
        assert_eq!(config.root, PathBuf::from("."));
        assert_eq!(
            config.lexicon.hebrew.output,
            PathBuf::from("public/data/lexicon-hebrew.json")
        );
        assert_eq!(config.ahlb.input, PathBuf::from("data/raw/ahlb.csv"));
    }

    #[test]
    fn supports_overrides() {
        let config = Loader::new()
            .set_override("output.pretty", true)
            .expect("override to apply")
            .set_override("crossrefs.input", "elsewhere/tsk.txt")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert!(config.output.pretty);
        assert_eq!(config.crossrefs.input, PathBuf::from("elsewhere/tsk.txt"));
    }

    #[test]
    fn resolves_relative_paths_against_root() {
        let config = Loader::new()
            .set_override("root", "/srv/app")
            .expect("override to apply")
            .build()
            .expect("config to build");
        assert_eq!(
            config.resolve(&config.crossrefs.output),
            PathBuf::from("/srv/app/public/data/cross-references.json")
        );
        assert_eq!(config.resolve("/tmp/x.json"), PathBuf::from("/tmp/x.json"));
    }

    #[test]
    fn later_files_override_earlier_ones() {
        let tmp = tempfile::tempdir().expect("temp dir");
        let dir = tmp.path();
        let local = dir.join("scripture.toml");
        let extra = dir.join("extra.toml");
        std::fs::write(&local, "root = \"/srv/local\"\n[ahlb]\ninput = \"a.csv\"\noutput = \"a.json\"\n")
            .expect("write local");
        std::fs::write(&extra, "[ahlb]\ninput = \"b.csv\"\noutput = \"b.json\"\n").expect("write extra");

        let config = Loader::new()
            .with_optional_file(&local)
            .with_optional_file(dir.join("absent.toml"))
            .with_file(&extra)
            .build()
            .expect("config to build");
        assert_eq!(config.root, PathBuf::from("/srv/local"));
        assert_eq!(config.ahlb.input, PathBuf::from("b.csv"));
        assert_eq!(config.crossrefs.input, PathBuf::from("data/raw/tsk.txt"));
    }

    #[test]
    fn missing_required_file_is_an_error() {
        let result = Loader::new()
            .with_file("/definitely/not/here/scripture.toml")
            .build();
        assert!(result.is_err());
    }
}
