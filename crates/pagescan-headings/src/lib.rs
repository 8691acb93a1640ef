//! Heading hierarchy analysis for pagescan.
//!
//! Checks each page's `h1`..`h6` sequence for a wrong starting level and for
//! skipped levels, then buckets a whole corpus into proper, improper and
//! heading-less pages with summary statistics. Reports are rendered as plain
//! text for people and as JSON for tooling.

#![warn(missing_docs)]

mod analysis;
mod check;
mod error;
mod json;
mod render;
mod report;

pub use analysis::{FileAnalysis, FileStatus, analyze_file};
pub use check::{HierarchyCheck, HierarchyIssue, check_hierarchy};
pub use error::ReportError;
pub use json::{render_json_report, write_json_report};
pub use render::{render_text_report, write_text_report};
pub use report::{AnalysisSummary, HeadingReport, ReportBuilder, analyze_corpus};
