//! Corpus-wide aggregation of heading analyses.
//!
//! Results are accumulated in a [`ReportBuilder`] value threaded through the
//! scan and consumed into an immutable [`HeadingReport`] at the end.

use pagescan_document::{CorpusFile, ProgressReporter};
use serde::Serialize;

use crate::{FileAnalysis, FileStatus, analyze_file};

/// Aggregate counts over one corpus scan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisSummary {
    /// Every discovered file, including ones that failed to load.
    pub total_files: usize,
    /// Files with headings and no issues.
    pub proper_hierarchy_count: usize,
    /// Files with at least one issue.
    pub improper_hierarchy_count: usize,
    /// Files without any heading.
    pub no_headings_count: usize,
    /// Proper files as a percentage of `total_files`, one decimal place.
    pub proper_percentage: f64,
    /// Improper files as a percentage of `total_files`, one decimal place.
    pub improper_percentage: f64,
}

impl AnalysisSummary {
    /// Computes the summary from bucket sizes.
    pub fn new(total_files: usize, proper: usize, improper: usize, no_headings: usize) -> Self {
        Self {
            total_files,
            proper_hierarchy_count: proper,
            improper_hierarchy_count: improper,
            no_headings_count: no_headings,
            proper_percentage: percentage(proper, total_files),
            improper_percentage: percentage(improper, total_files),
        }
    }

    /// Number of files that failed to load.
    pub fn failed_count(&self) -> usize {
        self.total_files
            .saturating_sub(self.proper_hierarchy_count)
            .saturating_sub(self.improper_hierarchy_count)
            .saturating_sub(self.no_headings_count)
    }
}

/// `part / total * 100` rounded to one decimal, or 0 for an empty corpus.
fn percentage(part: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let raw = part as f64 / total as f64 * 100.0;
    (raw * 10.0).round() / 10.0
}

/// Bucketed results of a full corpus scan.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingReport {
    /// Files with headings and no issues.
    pub proper_hierarchy: Vec<FileAnalysis>,
    /// Files with at least one issue.
    pub improper_hierarchy: Vec<FileAnalysis>,
    /// Files without headings.
    pub no_headings: Vec<FileAnalysis>,
    /// Files that could not be loaded; not part of any bucket.
    pub errors: Vec<FileAnalysis>,
    /// Aggregate counts.
    pub summary: AnalysisSummary,
}

/// Accumulates per-file results into buckets.
#[derive(Debug, Default)]
pub struct ReportBuilder {
    /// Number of files discovered for the scan.
    total_files: usize,
    /// Proper bucket.
    proper: Vec<FileAnalysis>,
    /// Improper bucket.
    improper: Vec<FileAnalysis>,
    /// No-headings bucket.
    no_headings: Vec<FileAnalysis>,
    /// Failed files.
    errors: Vec<FileAnalysis>,
}

impl ReportBuilder {
    /// Starts an accumulator for a scan over `total_files` discovered files.
    pub fn new(total_files: usize) -> Self {
        Self {
            total_files,
            ..Self::default()
        }
    }

    /// Places one result in exactly one bucket.
    pub fn push(&mut self, analysis: FileAnalysis) {
        match analysis.status {
            FileStatus::Failed(_) => self.errors.push(analysis),
            FileStatus::NoHeadings => self.no_headings.push(analysis),
            FileStatus::Improper(_) => self.improper.push(analysis),
            FileStatus::Proper => self.proper.push(analysis),
        }
    }

    /// Finishes the scan and computes the summary.
    pub fn finish(self) -> HeadingReport {
        let summary = AnalysisSummary::new(
            self.total_files,
            self.proper.len(),
            self.improper.len(),
            self.no_headings.len(),
        );
        HeadingReport {
            proper_hierarchy: self.proper,
            improper_hierarchy: self.improper,
            no_headings: self.no_headings,
            errors: self.errors,
            summary,
        }
    }
}

/// Analyzes every file in order and aggregates the results.
///
/// A file that fails to load is reported through `reporter` and kept in the
/// report's error list; the scan always runs to completion.
pub fn analyze_corpus<R: ProgressReporter>(files: &[CorpusFile], reporter: &mut R) -> HeadingReport {
    let total = files.len();
    let mut builder = ReportBuilder::new(total);

    for (idx, file) in files.iter().enumerate() {
        reporter.on_file_start(&file.rel_path, idx + 1, total);
        let analysis = analyze_file(file);
        match analysis.error() {
            Some(error) => reporter.on_file_error(&file.rel_path, error),
            None => reporter.on_file_done(&file.rel_path, analysis.total_headings()),
        }
        builder.push(analysis);
    }

    let report = builder.finish();
    reporter.on_complete(total - report.errors.len(), report.errors.len());
    report
}
