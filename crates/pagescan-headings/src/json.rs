//! Machine-readable dump of a heading report.

use std::path::Path;

use pagescan_document::Heading;
use serde::Serialize;

use crate::{AnalysisSummary, FileAnalysis, HeadingReport, HierarchyIssue, ReportError, render::write_file};

/// Top-level JSON document.
#[derive(Serialize)]
struct JsonReport<'a> {
    /// Files with headings and no issues.
    proper_hierarchy: Vec<FileRecord<'a>>,
    /// Files with issues.
    improper_hierarchy: Vec<FileRecord<'a>>,
    /// Files without headings.
    no_headings: Vec<FileRecord<'a>>,
    /// Files that failed to load.
    errors: Vec<ErrorRecord<'a>>,
    /// Aggregate counts.
    summary: &'a AnalysisSummary,
}

/// One analyzed file.
#[derive(Serialize)]
struct FileRecord<'a> {
    /// Root-relative path.
    file: &'a str,
    /// Root-joined path.
    absolute_path: String,
    /// Headings in document order.
    headings: &'a [Heading],
    /// Tag names in document order.
    heading_sequence: Vec<&'a str>,
    /// Levels in document order.
    heading_levels: Vec<u8>,
    /// Issues with descriptions.
    issues: Vec<IssueRecord<'a>>,
    /// Tri-state verdict.
    is_proper: Option<bool>,
    /// Heading count.
    total_headings: usize,
}

impl<'a> From<&'a FileAnalysis> for FileRecord<'a> {
    fn from(analysis: &'a FileAnalysis) -> Self {
        Self {
            file: &analysis.file,
            absolute_path: analysis.absolute_path.display().to_string(),
            headings: &analysis.headings,
            heading_sequence: analysis.heading_sequence(),
            heading_levels: analysis.heading_levels(),
            issues: analysis.issues().iter().map(IssueRecord::from).collect(),
            is_proper: analysis.is_proper(),
            total_headings: analysis.total_headings(),
        }
    }
}

/// An issue plus its rendered description.
#[derive(Serialize)]
struct IssueRecord<'a> {
    /// The issue's own fields, including its `type` tag.
    #[serde(flatten)]
    issue: &'a HierarchyIssue,
    /// Human-readable description.
    description: String,
}

impl<'a> From<&'a HierarchyIssue> for IssueRecord<'a> {
    fn from(issue: &'a HierarchyIssue) -> Self {
        Self {
            issue,
            description: issue.description(),
        }
    }
}

/// A file that failed to load.
#[derive(Serialize)]
struct ErrorRecord<'a> {
    /// Root-relative path.
    file: &'a str,
    /// Root-joined path.
    absolute_path: String,
    /// The load error.
    error: &'a str,
    /// Always `null`.
    is_proper: Option<bool>,
}

impl<'a> From<&'a FileAnalysis> for ErrorRecord<'a> {
    fn from(analysis: &'a FileAnalysis) -> Self {
        Self {
            file: &analysis.file,
            absolute_path: analysis.absolute_path.display().to_string(),
            error: analysis.error().unwrap_or_default(),
            is_proper: None,
        }
    }
}

/// Renders the report as indented JSON.
pub fn render_json_report(report: &HeadingReport) -> Result<String, ReportError> {
    let json = JsonReport {
        proper_hierarchy: records(&report.proper_hierarchy),
        improper_hierarchy: records(&report.improper_hierarchy),
        no_headings: records(&report.no_headings),
        errors: report.errors.iter().map(ErrorRecord::from).collect(),
        summary: &report.summary,
    };
    Ok(serde_json::to_string_pretty(&json)?)
}

/// Converts one bucket to records.
fn records(files: &[FileAnalysis]) -> Vec<FileRecord<'_>> {
    files.iter().map(FileRecord::from).collect()
}

/// Renders and writes the JSON dump.
pub fn write_json_report(report: &HeadingReport, path: &Path) -> Result<(), ReportError> {
    write_file(path, &render_json_report(report)?)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use pagescan_document::{CorpusFile, ParsedDocument};
    use serde_json::{Value, json};

    use super::*;
    use crate::ReportBuilder;

    fn file(name: &str) -> CorpusFile {
        CorpusFile {
            abs_path: Path::new("/site").join(name),
            rel_path: PathBuf::from(name),
        }
    }

    fn dump(report: &HeadingReport) -> Value {
        serde_json::from_str(&render_json_report(report).unwrap()).unwrap()
    }

    #[test]
    fn improper_file_record() {
        let mut builder = ReportBuilder::new(1);
        builder.push(FileAnalysis::from_document(
            &file("guide.html"),
            &ParsedDocument::parse("<h1>Guide</h1><h3>Überblick</h3>"),
        ));
        let value = dump(&builder.finish());

        let record = &value["improper_hierarchy"][0];
        assert_eq!(record["file"], "guide.html");
        assert_eq!(record["absolute_path"], "/site/guide.html");
        assert_eq!(record["heading_sequence"], json!(["h1", "h3"]));
        assert_eq!(record["heading_levels"], json!([1, 3]));
        assert_eq!(record["is_proper"], false);
        assert_eq!(record["total_headings"], 2);
        assert_eq!(record["headings"][1]["full_text"], "Überblick");

        let issue = &record["issues"][0];
        assert_eq!(issue["type"], "skipped_levels");
        assert_eq!(issue["position"], 2);
        assert_eq!(issue["previous_level"], 1);
        assert_eq!(issue["current_level"], 3);
        assert_eq!(issue["skipped_levels"], json!([2]));
        assert_eq!(
            issue["description"],
            "Skipped from h1 to h3, missing levels: h2"
        );
    }

    #[test]
    fn buckets_errors_and_summary() {
        let mut builder = ReportBuilder::new(3);
        builder.push(FileAnalysis::from_document(
            &file("a.html"),
            &ParsedDocument::parse("<h1>A</h1>"),
        ));
        builder.push(FileAnalysis::from_document(
            &file("b.html"),
            &ParsedDocument::parse("<div></div>"),
        ));
        builder.push(FileAnalysis::failed(&file("c.html"), "failed to read file"));
        let value = dump(&builder.finish());

        assert_eq!(value["proper_hierarchy"][0]["issues"], json!([]));
        assert_eq!(value["no_headings"][0]["is_proper"], true);
        assert_eq!(value["errors"][0]["file"], "c.html");
        assert_eq!(value["errors"][0]["error"], "failed to read file");
        assert_eq!(value["errors"][0]["is_proper"], Value::Null);
        assert_eq!(value["summary"]["total_files"], 3);
        assert_eq!(value["summary"]["proper_percentage"], 33.3);
        assert_eq!(value["summary"]["no_headings_count"], 1);
    }

    #[test]
    fn output_is_indented_and_keeps_unicode() {
        let mut builder = ReportBuilder::new(1);
        builder.push(FileAnalysis::from_document(
            &file("a.html"),
            &ParsedDocument::parse("<h1>Café</h1>"),
        ));
        let text = render_json_report(&builder.finish()).unwrap();
        assert!(text.contains("\n  \"proper_hierarchy\": ["));
        assert!(text.contains("Café"));
    }
}
