//! # quizzer binary
//!
//! Thin on purpose: parse arguments, set up logging, hand over to
//! `cli::commands::run()`, and turn an error into a message and exit code 1.
//! Everything terminal-related lives in `cli/`; everything else is the
//! `quizzer` library.

use clap::Parser;
use log::LevelFilter;

mod cli;

use cli::setup::Cli;

fn init_logging(verbose: bool) {
    let mut builder = pretty_env_logger::formatted_builder();
    match std::env::var("RUST_LOG") {
        Ok(filters) => {
            builder.parse_filters(&filters);
        }
        Err(_) => {
            let level = if verbose {
                LevelFilter::Debug
            } else {
                LevelFilter::Warn
            };
            builder.filter_level(level);
        }
    }
    let _ = builder.try_init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = cli::commands::run(cli) {
        eprint!("{}", cli::render_error(&e));
        std::process::exit(1);
    }
}
