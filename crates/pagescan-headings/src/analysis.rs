//! Per-file heading analysis.

use std::path::PathBuf;

use pagescan_document::{CorpusFile, Heading, ParsedDocument, extract_headings, load};
use tracing::{debug, warn};

use crate::{HierarchyIssue, check_hierarchy};

/// Hierarchy verdict for one file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// At least one heading, and no issues.
    Proper,
    /// At least one heading, with the issues found in document order.
    Improper(Vec<HierarchyIssue>),
    /// The file has no headings at all.
    NoHeadings,
    /// The file could not be read; carries the error message.
    Failed(String),
}

impl FileStatus {
    /// Classifies an extracted heading list.
    fn classify(headings: &[Heading]) -> Self {
        if headings.is_empty() {
            return Self::NoHeadings;
        }
        let check = check_hierarchy(headings);
        if check.is_proper() {
            Self::Proper
        } else {
            Self::Improper(check.issues)
        }
    }
}

/// Analysis result for one HTML file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileAnalysis {
    /// Root-relative path with `/` separators.
    pub file: String,
    /// Root-joined path.
    pub absolute_path: PathBuf,
    /// Headings in document order; empty for failed files.
    pub headings: Vec<Heading>,
    /// The verdict.
    pub status: FileStatus,
}

impl FileAnalysis {
    /// Analyzes a document that has already been parsed.
    pub fn from_document(file: &CorpusFile, doc: &ParsedDocument) -> Self {
        let headings = extract_headings(doc);
        let status = FileStatus::classify(&headings);
        Self {
            file: file.rel_posix(),
            absolute_path: file.abs_path.clone(),
            headings,
            status,
        }
    }

    /// Builds the degraded result for a file that could not be loaded.
    pub fn failed(file: &CorpusFile, error: impl Into<String>) -> Self {
        Self {
            file: file.rel_posix(),
            absolute_path: file.abs_path.clone(),
            headings: Vec::new(),
            status: FileStatus::Failed(error.into()),
        }
    }

    /// Tri-state hierarchy verdict: `None` when the file failed to load.
    ///
    /// A file with no headings is vacuously proper.
    pub fn is_proper(&self) -> Option<bool> {
        match self.status {
            FileStatus::Proper | FileStatus::NoHeadings => Some(true),
            FileStatus::Improper(_) => Some(false),
            FileStatus::Failed(_) => None,
        }
    }

    /// Issues found, empty unless the file is improper.
    pub fn issues(&self) -> &[HierarchyIssue] {
        match &self.status {
            FileStatus::Improper(issues) => issues.as_slice(),
            _ => &[],
        }
    }

    /// The load error, if the file failed.
    pub fn error(&self) -> Option<&str> {
        match &self.status {
            FileStatus::Failed(error) => Some(error),
            _ => None,
        }
    }

    /// Tag names in document order, e.g. `["h1", "h2"]`.
    pub fn heading_sequence(&self) -> Vec<&str> {
        self.headings.iter().map(|h| h.tag.as_str()).collect()
    }

    /// Heading levels in document order.
    pub fn heading_levels(&self) -> Vec<u8> {
        self.headings.iter().map(|h| h.level).collect()
    }

    /// Number of headings.
    pub fn total_headings(&self) -> usize {
        self.headings.len()
    }
}

/// Loads and analyzes one corpus file.
///
/// Read failures never propagate: they produce a [`FileStatus::Failed`] result.
pub fn analyze_file(file: &CorpusFile) -> FileAnalysis {
    match load(&file.abs_path) {
        Ok(doc) => {
            let analysis = FileAnalysis::from_document(file, &doc);
            debug!(
                path = %file.rel_path.display(),
                headings = analysis.total_headings(),
                issues = analysis.issues().len(),
                "analyzed headings"
            );
            analysis
        }
        Err(e) => {
            warn!(path = %file.rel_path.display(), error = %e, "failed to load document");
            FileAnalysis::failed(file, e.to_string())
        }
    }
}
