//! Implementation of `pagescan init`.

use std::{fs, process::ExitCode};

use pagescan_config::{config_path, config_template};

use crate::cli::{args::InitCommand, context::CommandContext};

/// Writes a `.pagescan.toml` with every default commented out.
pub fn run(cmd: &InitCommand) -> ExitCode {
    let ctx = match CommandContext::load_root_only(&cmd.root) {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };
    let path = config_path(&ctx.root);

    if path.exists() && !cmd.force {
        eprintln!("error: configuration file already exists: {}", path.display());
        eprintln!("use --force to overwrite");
        return ExitCode::FAILURE;
    }

    if let Err(e) = fs::write(&path, config_template()) {
        eprintln!("error: failed to write {}: {e}", path.display());
        return ExitCode::FAILURE;
    }

    println!("Created {}", path.display());
    ExitCode::SUCCESS
}
