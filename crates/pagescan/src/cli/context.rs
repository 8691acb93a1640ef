//! Shared context for running CLI commands.

use std::{
    path::{Path, PathBuf},
    process::ExitCode,
};

use pagescan_config::Config;

/// Command execution context built once per CLI invocation.
pub struct CommandContext {
    /// Site root the command operates on.
    pub root: PathBuf,
    /// Loaded configuration (default if the root has no config file).
    pub config: Config,
}

impl CommandContext {
    /// Checks the site root and loads its configuration.
    pub fn load(root: &Path) -> Result<Self, ExitCode> {
        let root = require_directory(root)?;
        let config = match Config::load(&root) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("error: failed to load configuration: {e}");
                return Err(ExitCode::FAILURE);
            }
        };
        Ok(Self { root, config })
    }

    /// Checks the site root, skipping configuration parsing.
    ///
    /// Used by `init` so an invalid existing config can be overwritten.
    pub fn load_root_only(root: &Path) -> Result<Self, ExitCode> {
        let root = require_directory(root)?;
        Ok(Self {
            root,
            config: Config::default(),
        })
    }
}

/// Returns the root unchanged if it is a directory, printing an error otherwise.
fn require_directory(root: &Path) -> Result<PathBuf, ExitCode> {
    if root.is_dir() {
        Ok(root.to_path_buf())
    } else {
        eprintln!("error: not a directory: {}", root.display());
        Err(ExitCode::FAILURE)
    }
}
