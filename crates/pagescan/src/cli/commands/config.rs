//! Implementation of `pagescan config`.

use std::process::ExitCode;

use crate::cli::{
    args::ConfigCommand,
    context::CommandContext,
    output::{dim, header},
};

/// Prints the effective configuration for a site root.
pub fn run(cmd: &ConfigCommand) -> ExitCode {
    let ctx = match CommandContext::load(&cmd.root) {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };

    let toml = match ctx.config.settings_to_toml() {
        Ok(toml) => toml,
        Err(e) => {
            eprintln!("error: failed to serialize configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("{}", header("Effective configuration"));
    let source = ctx.config.source.as_ref().map_or_else(
        || "# no .pagescan.toml found, showing defaults".to_string(),
        |path| format!("# from {}", path.display()),
    );
    println!("{}", dim(&source));
    println!();
    print!("{toml}");
    ExitCode::SUCCESS
}
