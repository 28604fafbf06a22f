//! Command-line plumbing shared by the builder binaries.

use crate::index::error::Result;
use clap::{Arg, ArgAction, ArgMatches, Command};
use scripture_config::{Loader, ScriptureConfig};
use tracing_subscriber::EnvFilter;

/// Picked up from the working directory when present.
pub const LOCAL_CONFIG: &str = "scripture.toml";

/// Log to stderr at `info` unless `RUST_LOG` says otherwise.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Add the `--config`, `--input`, `--output` and `--pretty` flags.
pub fn with_common_args(command: Command) -> Command {
    command
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .value_name("FILE")
                .help("Configuration file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("input")
                .long("input")
                .short('i')
                .value_name("PATH")
                .help("Input file (overrides the configured path)"),
        )
        .arg(
            Arg::new("output")
                .long("output")
                .short('o')
                .value_name("PATH")
                .help("Output JSON file (overrides the configured path)"),
        )
        .arg(
            Arg::new("pretty")
                .long("pretty")
                .help("Pretty-print the JSON output")
                .action(ArgAction::SetTrue),
        )
}

/// True when `--input` or `--output` was given.
pub fn has_path_overrides(matches: &ArgMatches) -> bool {
    matches.contains_id("input") || matches.contains_id("output")
}

/// Build the configuration from defaults, `scripture.toml`, `--config` and
/// the flags. `section` is the config table that `--input`/`--output`
/// override (e.g. `crossrefs`, `lexicon.hebrew`).
pub fn load_config(matches: &ArgMatches, section: Option<&str>) -> Result<ScriptureConfig> {
    let mut loader = Loader::new().with_optional_file(LOCAL_CONFIG);
    if let Some(path) = matches.get_one::<String>("config") {
        loader = loader.with_file(path);
    }
    if matches.get_flag("pretty") {
        loader = loader.set_override("output.pretty", true)?;
    }
    if let Some(section) = section {
        for key in ["input", "output"] {
            if let Some(path) = matches.get_one::<String>(key) {
                loader = loader.set_override(&format!("{section}.{key}"), path.as_str())?;
            }
        }
    }
    Ok(loader.build()?)
}

/// Print a fatal error and exit with status 1.
pub fn exit_on_error<T>(result: Result<T>) -> T {
    result.unwrap_or_else(|e| {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    })
}
