//! Implementation of `pagescan headings`.

use std::process::ExitCode;

use pagescan_document::discover_html_files;
use pagescan_headings::{analyze_corpus, write_json_report, write_text_report};
use tracing::info;

use crate::cli::{
    args::HeadingsCommand,
    context::CommandContext,
    output::{ConsoleReporter, header, heading_summary_table, success},
};

/// Checks every page's heading hierarchy and writes the reports.
pub fn run(cmd: &HeadingsCommand) -> ExitCode {
    let ctx = match CommandContext::load(&cmd.root) {
        Ok(ctx) => ctx,
        Err(code) => return code,
    };
    let settings = &ctx.config.headings;

    let excludes = match settings.compile_excludes() {
        Ok(patterns) => patterns,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    let files = match discover_html_files(&ctx.root, |rel| !excludes.is_match(rel)) {
        Ok(files) => files,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if !cmd.quiet {
        println!("Found {} HTML files to analyze...", files.len());
    }
    let mut reporter = ConsoleReporter::new(cmd.quiet);
    let report = analyze_corpus(&files, &mut reporter);
    info!(
        total = report.summary.total_files,
        improper = report.summary.improper_hierarchy_count,
        "heading analysis complete"
    );

    let report_path = cmd.report.as_ref().unwrap_or(&settings.report);
    if let Err(e) = write_text_report(&report, report_path) {
        eprintln!("error: {e}");
        return ExitCode::FAILURE;
    }

    println!();
    println!("{}", header("Heading hierarchy summary"));
    println!("{}", heading_summary_table(&report.summary));
    println!();
    println!("{}", success(&format!("Report saved to: {}", report_path.display())));

    if !cmd.no_json {
        let json_path = cmd.json.as_ref().unwrap_or(&settings.json);
        if let Err(e) = write_json_report(&report, json_path) {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
        println!(
            "{}",
            success(&format!("Detailed results saved to: {}", json_path.display()))
        );
    }

    ExitCode::SUCCESS
}
