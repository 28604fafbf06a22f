//! Build the AHLB Hebrew lexicon from its CSV export.
//!
//! Usage:
//!   build-ahlb [--config `<file>`] [--input `<path>`] [--output `<path>`] [--pretty]

use clap::Command;
use scripture_index::index::{cli, jobs};

fn main() {
    let matches = cli::with_common_args(
        Command::new("build-ahlb")
            .version(env!("CARGO_PKG_VERSION"))
            .about("Extract AHLB lexicon entries keyed by Strong's Hebrew number"),
    )
    .get_matches();

    cli::init_tracing();
    let config = cli::exit_on_error(cli::load_config(&matches, Some("ahlb")));
    cli::exit_on_error(jobs::build_ahlb(&config));
}
