//! Plain-text report rendering.
//!
//! Rendering is pure formatting over an already bucketed [`HeadingReport`].

use std::{fs, path::Path};

use crate::{FileAnalysis, HeadingReport, HierarchyIssue, ReportError};

/// Width of the report's top banner.
const BANNER_WIDTH: usize = 80;

/// Width of the per-section rules.
const SECTION_WIDTH: usize = 60;

/// Separator between tags in a heading sequence.
const SEQUENCE_ARROW: &str = " → ";

/// Renders the full plain-text report.
pub fn render_text_report(report: &HeadingReport) -> String {
    let mut lines: Vec<String> = Vec::new();
    let summary = &report.summary;
    let banner = "=".repeat(BANNER_WIDTH);
    let rule = "=".repeat(SECTION_WIDTH);

    lines.push(banner.clone());
    lines.push("HTML HEADING HIERARCHY ANALYSIS REPORT".to_string());
    lines.push(banner);
    lines.push(format!("Total HTML files analyzed: {}", summary.total_files));
    lines.push(format!(
        "Files with proper hierarchy: {} ({:.1}%)",
        summary.proper_hierarchy_count, summary.proper_percentage
    ));
    lines.push(format!(
        "Files with improper hierarchy: {} ({:.1}%)",
        summary.improper_hierarchy_count, summary.improper_percentage
    ));
    lines.push(format!("Files with no headings: {}", summary.no_headings_count));
    lines.push(String::new());

    if !report.improper_hierarchy.is_empty() {
        lines.push("🚫 FILES WITH IMPROPER HEADING HIERARCHY".to_string());
        lines.push(rule.clone());
        for file in &report.improper_hierarchy {
            render_improper(&mut lines, file);
        }
    }

    if !report.proper_hierarchy.is_empty() {
        lines.push("\n\n✅ FILES WITH PROPER HEADING HIERARCHY".to_string());
        lines.push(rule.clone());
        for file in &report.proper_hierarchy {
            lines.push(format!("\nFile: {}", file.file));
            lines.push(format!("Heading sequence: {}", sequence(file)));
        }
    }

    if !report.no_headings.is_empty() {
        lines.push(format!(
            "\n\n📄 FILES WITH NO HEADINGS ({} files)",
            report.no_headings.len()
        ));
        lines.push(rule.clone());
        for file in &report.no_headings {
            lines.push(format!("• {}", file.file));
        }
    }

    if !report.errors.is_empty() {
        lines.push(format!(
            "\n\n⚠️ FILES WITH ERRORS ({} files)",
            report.errors.len()
        ));
        lines.push(rule);
        for file in &report.errors {
            lines.push(format!("• {}: {}", file.file, file.error().unwrap_or_default()));
        }
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

/// Appends the detail block for one improper file.
fn render_improper(lines: &mut Vec<String>, file: &FileAnalysis) {
    lines.push(format!("\nFile: {}", file.file));
    lines.push(format!("Heading sequence: {}", sequence(file)));
    lines.push("Issues found:".to_string());

    for issue in file.issues() {
        lines.push(format!("  • {}", issue.description()));
        if let HierarchyIssue::SkippedLevels {
            heading,
            previous_level,
            ..
        } = issue
        {
            lines.push(format!(
                "    Previous level: h{previous_level}, Current: {}",
                heading.tag
            ));
            lines.push(format!("    Heading text: \"{}\"", heading.text));
        }
    }

    lines.push("Headings in order:".to_string());
    for (i, heading) in file.headings.iter().enumerate() {
        lines.push(format!("  {}. {}: \"{}\"", i + 1, heading.tag, heading.text));
    }
}

/// Formats a file's heading sequence, e.g. `h1 → h2 → h3`.
fn sequence(file: &FileAnalysis) -> String {
    if file.headings.is_empty() {
        return "No headings".to_string();
    }
    file.heading_sequence().join(SEQUENCE_ARROW)
}

/// Renders and writes the plain-text report.
pub fn write_text_report(report: &HeadingReport, path: &Path) -> Result<(), ReportError> {
    write_file(path, &render_text_report(report))
}

/// Writes a report artifact, creating parent directories as needed.
pub(crate) fn write_file(path: &Path, contents: &str) -> Result<(), ReportError> {
    let to_error = |source| ReportError::WriteFile {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(to_error)?;
    }
    fs::write(path, contents).map_err(to_error)
}

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};

    use pagescan_document::{CorpusFile, ParsedDocument};

    use super::*;
    use crate::ReportBuilder;

    fn analysis(name: &str, html: &str) -> FileAnalysis {
        let file = CorpusFile {
            abs_path: Path::new("/site").join(name),
            rel_path: PathBuf::from(name),
        };
        FileAnalysis::from_document(&file, &ParsedDocument::parse(html))
    }

    fn sample_report() -> HeadingReport {
        let mut builder = ReportBuilder::new(4);
        builder.push(analysis(
            "guide.html",
            "<h1>Guide</h1><h3>Setup</h3><h2>Usage</h2>",
        ));
        builder.push(analysis("index.html", "<h1>Home</h1><h2>News</h2>"));
        builder.push(analysis("blank.html", "<p>empty</p>"));
        let file = CorpusFile {
            abs_path: PathBuf::from("/site/broken.html"),
            rel_path: PathBuf::from("broken.html"),
        };
        builder.push(FileAnalysis::failed(&file, "failed to read file"));
        builder.finish()
    }

    #[test]
    fn header_and_summary() {
        let text = render_text_report(&sample_report());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "=".repeat(80));
        assert_eq!(lines[1], "HTML HEADING HIERARCHY ANALYSIS REPORT");
        assert_eq!(lines[3], "Total HTML files analyzed: 4");
        assert_eq!(lines[4], "Files with proper hierarchy: 1 (25.0%)");
        assert_eq!(lines[5], "Files with improper hierarchy: 1 (25.0%)");
        assert_eq!(lines[6], "Files with no headings: 1");
    }

    #[test]
    fn improper_file_details() {
        let text = render_text_report(&sample_report());
        assert!(text.contains("File: guide.html\nHeading sequence: h1 → h3 → h2\nIssues found:\n"));
        assert!(text.contains("  • Skipped from h1 to h3, missing levels: h2\n"));
        assert!(text.contains("    Previous level: h1, Current: h3\n"));
        assert!(text.contains("    Heading text: \"Setup\"\n"));
        assert!(text.contains("Headings in order:\n  1. h1: \"Guide\"\n  2. h3: \"Setup\"\n  3. h2: \"Usage\""));
    }

    #[test]
    fn other_sections() {
        let text = render_text_report(&sample_report());
        assert!(text.contains("✅ FILES WITH PROPER HEADING HIERARCHY"));
        assert!(text.contains("File: index.html\nHeading sequence: h1 → h2"));
        assert!(text.contains("📄 FILES WITH NO HEADINGS (1 files)"));
        assert!(text.contains("• blank.html"));
        assert!(text.contains("• broken.html: failed to read file"));
    }

    #[test]
    fn empty_report_has_only_summary() {
        let text = render_text_report(&ReportBuilder::new(0).finish());
        assert!(text.contains("Files with proper hierarchy: 0 (0.0%)"));
        assert!(!text.contains("FILES WITH"));
    }
}
