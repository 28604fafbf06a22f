//! Build the cross-reference index from the TSK tab-separated source.
//!
//! Usage:
//!   build-crossrefs [--config `<file>`] [--input `<path>`] [--output `<path>`] [--pretty]

use clap::Command;
use scripture_index::index::{cli, jobs};

fn main() {
    let matches = cli::with_common_args(
        Command::new("build-crossrefs")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Build the verse cross-reference JSON index from the TSK source"),
    )
    .get_matches();

    cli::init_tracing();
    let config = cli::exit_on_error(cli::load_config(&matches, Some("crossrefs")));
    cli::exit_on_error(jobs::build_crossrefs(&config));
}
