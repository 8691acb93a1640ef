//! Terminal output: colors, progress lines and summary tables.

use std::path::Path;

use comfy_table::{Cell, Table, presets::UTF8_FULL_CONDENSED};
use pagescan_document::ProgressReporter;
use pagescan_headings::AnalysisSummary;
use pagescan_index::IndexStats;

/// ANSI color codes for terminal output.
pub mod colors {
    /// Bold text.
    pub const BOLD: &str = "\x1b[1m";
    /// Cyan text (for headers).
    pub const CYAN: &str = "\x1b[36m";
    /// Green text (for success).
    pub const GREEN: &str = "\x1b[32m";
    /// Yellow text (for warnings).
    pub const YELLOW: &str = "\x1b[33m";
    /// Dim/gray text (for less important info).
    pub const DIM: &str = "\x1b[2m";
    /// Reset all formatting.
    pub const RESET: &str = "\x1b[0m";
}

/// Formats a header (bold cyan).
pub fn header(text: &str) -> String {
    format!("{}{}{}{}", colors::BOLD, colors::CYAN, text, colors::RESET)
}

/// Formats dim text.
pub fn dim(text: &str) -> String {
    format!("{}{}{}", colors::DIM, text, colors::RESET)
}

/// Formats a success message (green).
pub fn success(text: &str) -> String {
    format!("{}{}{}", colors::GREEN, text, colors::RESET)
}

/// Formats a warning message (yellow).
pub fn warning(text: &str) -> String {
    format!("{}{}{}", colors::YELLOW, text, colors::RESET)
}

/// Prints per-file progress for the heading pass.
pub struct ConsoleReporter {
    /// Suppresses the per-file lines; errors are still printed.
    quiet: bool,
}

impl ConsoleReporter {
    /// Creates a reporter, optionally without per-file lines.
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }
}

impl ProgressReporter for ConsoleReporter {
    fn on_file_start(&mut self, path: &Path, current: usize, total: usize) {
        if self.quiet {
            return;
        }
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        println!("Analyzing {current}/{total}: {name}");
    }

    fn on_file_done(&mut self, _path: &Path, _produced: usize) {}

    fn on_file_error(&mut self, path: &Path, error: &str) {
        eprintln!("  {} {}: {error}", warning("Error:"), path.display());
    }

    fn on_complete(&mut self, _processed: usize, _failed: usize) {}
}

/// Summary table for a heading report.
pub fn heading_summary_table(summary: &AnalysisSummary) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Bucket", "Files", "Share"]);
    table.add_row(vec![
        Cell::new("Proper hierarchy"),
        Cell::new(summary.proper_hierarchy_count),
        Cell::new(format!("{:.1}%", summary.proper_percentage)),
    ]);
    table.add_row(vec![
        Cell::new("Improper hierarchy"),
        Cell::new(summary.improper_hierarchy_count),
        Cell::new(format!("{:.1}%", summary.improper_percentage)),
    ]);
    table.add_row(vec![
        Cell::new("No headings"),
        Cell::new(summary.no_headings_count),
        Cell::new(""),
    ]);
    let failed = summary.failed_count();
    if failed > 0 {
        table.add_row(vec![Cell::new("Unreadable"), Cell::new(failed), Cell::new("")]);
    }
    table.add_row(vec![
        Cell::new("Total"),
        Cell::new(summary.total_files),
        Cell::new(""),
    ]);
    table
}

/// Summary table for an index build.
pub fn index_stats_table(stats: &IndexStats) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Metric", "Count"]);
    table.add_row(vec![Cell::new("Files indexed"), Cell::new(stats.files_indexed)]);
    table.add_row(vec![Cell::new("Files skipped"), Cell::new(stats.files_skipped)]);
    table.add_row(vec![Cell::new("Page entries"), Cell::new(stats.pages)]);
    table.add_row(vec![Cell::new("Section entries"), Cell::new(stats.sections)]);
    table
}
