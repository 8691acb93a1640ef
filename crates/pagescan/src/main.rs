//! Command-line interface for the `pagescan` site checker.

mod cli;

use std::process::ExitCode;

use cli::{args::parse_cli, commands, logging};

fn main() -> ExitCode {
    let cli = parse_cli();
    logging::init(cli.verbose);
    commands::run(cli.command)
}
