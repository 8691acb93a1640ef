//! Implementation of `pagescan index`.

use std::process::ExitCode;

use pagescan_config::IndexSettings;
use pagescan_document::SilentReporter;
use pagescan_index::{IndexBuilder, SearchIndex};

use crate::cli::{
    args::IndexCommand,
    context::CommandContext,
    output::{index_stats_table, success, warning},
};

/// Builds the search index and writes it to disk.
pub fn run(cmd: &IndexCommand) -> ExitCode {
    let ctx = match CommandContext::load(&cmd.root) {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };
    let settings = effective_settings(&ctx.config.index, cmd);

    let builder = match IndexBuilder::new(&settings) {
        Ok(builder) => builder,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let built = match builder.build(&ctx.root, &mut SilentReporter) {
        Ok(built) => built,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if !built.stats.errors.is_empty() {
        eprintln!(
            "{}",
            warning(&format!("skipped {} unreadable files", built.stats.errors.len()))
        );
    }

    let stats_table = index_stats_table(&built.stats);
    let index = SearchIndex::new(built.items);
    if let Err(e) = index.write(&settings.output) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }

    println!("{stats_table}");
    println!(
        "{}",
        success(&format!(
            "Wrote {} search items to {}",
            index.items.len(),
            settings.output.display()
        ))
    );
    ExitCode::SUCCESS
}

/// Applies command-line overrides on top of the configured settings.
fn effective_settings(configured: &IndexSettings, cmd: &IndexCommand) -> IndexSettings {
    let mut settings = configured.clone();
    if let Some(output) = &cmd.output {
        settings.output = output.clone();
    }
    if let Some(max) = cmd.max_page_chars {
        settings.max_page_chars = max;
    }
    if let Some(max) = cmd.max_section_chars {
        settings.max_section_chars = max;
    }
    if cmd.no_sections {
        settings.sections = false;
    }
    settings
}
