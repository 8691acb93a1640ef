//! Clap argument definitions for the `pagescan` CLI.

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "pagescan", version)]
#[command(about = "Heading hierarchy checks and search index builds for static HTML sites")]
pub struct Cli {
    /// Log verbosity (-v for info, -vv for debug)
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Arguments for `pagescan headings`.
#[derive(Args, Debug, Clone)]
pub struct HeadingsCommand {
    /// Site root to scan
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Plain-text report path [default: heading_hierarchy_report.txt]
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// Detailed JSON results path [default: heading_analysis_detailed.json]
    #[arg(long, conflicts_with = "no_json")]
    pub json: Option<PathBuf>,

    /// Skip writing the detailed JSON results
    #[arg(long)]
    pub no_json: bool,

    /// Suppress per-file progress lines
    #[arg(short, long)]
    pub quiet: bool,
}

/// Arguments for `pagescan index`.
#[derive(Args, Debug, Clone)]
pub struct IndexCommand {
    /// Site root to index
    #[arg(long, default_value = ".")]
    pub root: PathBuf,

    /// Output JSON path [default: shared/search-index.json]
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Max characters of page content to store, 0 for unlimited [default: 5000]
    #[arg(long)]
    pub max_page_chars: Option<usize>,

    /// Max characters of section content to store, 0 for unlimited [default: 1500]
    #[arg(long)]
    pub max_section_chars: Option<usize>,

    /// Disable section-level indexing
    #[arg(long)]
    pub no_sections: bool,
}

/// Arguments for `pagescan init`.
#[derive(Args, Debug, Clone)]
pub struct InitCommand {
    /// Site root to create the configuration in
    #[arg(default_value = ".")]
    pub root: PathBuf,

    /// Overwrite an existing configuration file
    #[arg(long)]
    pub force: bool,
}

/// Arguments for `pagescan config`.
#[derive(Args, Debug, Clone)]
pub struct ConfigCommand {
    /// Site root whose configuration to show
    #[arg(default_value = ".")]
    pub root: PathBuf,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Check heading hierarchy across a site and write reports
    Headings(HeadingsCommand),

    /// Build the site search index JSON
    Index(IndexCommand),

    /// Create a .pagescan.toml with commented defaults
    Init(InitCommand),

    /// Show the effective configuration
    Config(ConfigCommand),
}

/// Parses command-line arguments, exiting on error or help.
pub fn parse_cli() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;
    use pagescan_config::{HeadingSettings, IndexSettings};

    use super::*;

    /// Gets help text for a subcommand's argument.
    fn get_arg_help(cmd: &clap::Command, subcmd: &str, arg: &str) -> String {
        cmd.get_subcommands()
            .find(|c| c.get_name() == subcmd)
            .and_then(|c| c.get_arguments().find(|a| a.get_id() == arg))
            .and_then(|a| a.get_help().map(|h| h.to_string()))
            .unwrap_or_default()
    }

    /// Catches drift between the settings defaults and the help text.
    #[test]
    fn cli_help_defaults_match_settings() {
        let cmd = Cli::command();
        let index = IndexSettings::default();
        let headings = HeadingSettings::default();

        let cases = [
            ("index", "output", index.output.display().to_string()),
            ("index", "max_page_chars", index.max_page_chars.to_string()),
            ("index", "max_section_chars", index.max_section_chars.to_string()),
            ("headings", "report", headings.report.display().to_string()),
            ("headings", "json", headings.json.display().to_string()),
        ];
        for (subcmd, arg, default) in cases {
            let help = get_arg_help(&cmd, subcmd, arg);
            assert!(
                help.contains(&format!("[default: {default}]")),
                "{subcmd} --{arg} help should contain default {default}: {help}"
            );
        }
    }

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn verbose_is_global_and_counted() {
        let cli = Cli::try_parse_from(["pagescan", "index", "-vv", "--no-sections"]).unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::Index(cmd) => {
                assert!(cmd.no_sections);
                assert_eq!(cmd.root, PathBuf::from("."));
            }
            _ => panic!("expected index command"),
        }
    }

    #[test]
    fn json_conflicts_with_no_json() {
        let result = Cli::try_parse_from(["pagescan", "headings", "--json", "x.json", "--no-json"]);
        assert!(result.is_err());
    }
}
