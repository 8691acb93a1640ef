//! Command implementations and dispatch.

pub mod config;
pub mod headings;
pub mod index;
pub mod init;

use std::process::ExitCode;

use super::args::Commands;

/// Dispatches to the selected subcommand.
pub fn run(command: Commands) -> ExitCode {
    match command {
        Commands::Headings(cmd) => headings::run(&cmd),
        Commands::Index(cmd) => index::run(&cmd),
        Commands::Init(cmd) => init::run(&cmd),
        Commands::Config(cmd) => config::run(&cmd),
    }
}
