//! Build the STEPBible Hebrew and/or Greek lexicon indexes.
//!
//! Usage:
//!   build-lexicon [hebrew|greek|all] [--config `<file>`] [--pretty]
//!   build-lexicon hebrew --input `<path>` --output `<path>`
//!
//! `all` (the default) builds Hebrew then Greek and stops at the first
//! failure. `--input`/`--output` need a single language.

use clap::error::ErrorKind;
use clap::{Arg, Command};
use scripture_index::index::lexicon::Language;
use scripture_index::index::{cli, jobs};

fn main() {
    let mut command = cli::with_common_args(
        Command::new("build-lexicon")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Build the Strong's-keyed lexicon JSON indexes from STEPBible TSV files")
            .arg(
                Arg::new("language")
                    .help("Which lexicon to build")
                    .value_parser(["hebrew", "greek", "all"])
                    .default_value("all")
                    .index(1),
            ),
    );
    let matches = command.get_matches_mut();

    let languages: Vec<Language> = match matches.get_one::<String>("language").map(String::as_str) {
        Some("hebrew") => vec![Language::Hebrew],
        Some("greek") => vec![Language::Greek],
        _ => Language::ALL.to_vec(),
    };

    let section = match languages.as_slice() {
        [language] => Some(format!("lexicon.{}", language.name())),
        _ if cli::has_path_overrides(&matches) => command
            .error(
                ErrorKind::ArgumentConflict,
                "--input/--output need a single language (hebrew or greek)",
            )
            .exit(),
        _ => None,
    };

    cli::init_tracing();
    let config = cli::exit_on_error(cli::load_config(&matches, section.as_deref()));
    for language in languages {
        cli::exit_on_error(jobs::build_lexicon(&config, language));
    }
}
