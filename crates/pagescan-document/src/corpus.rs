//! Corpus discovery and progress reporting.
//!
//! Walks a directory tree collecting `*.html` files. Callers supply a filter
//! over the root-relative path; the result is always sorted by that path so
//! every batch pass over the same tree visits files in the same order.

use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use tracing::warn;
use walkdir::WalkDir;

use crate::DocumentError;

/// An HTML file discovered under a corpus root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusFile {
    /// Absolute (root-joined) path to the file.
    pub abs_path: PathBuf,
    /// Path relative to the corpus root.
    pub rel_path: PathBuf,
}

impl CorpusFile {
    /// The root-relative path with `/` separators on every platform.
    pub fn rel_posix(&self) -> String {
        to_posix(&self.rel_path)
    }
}

/// Discovers every `*.html` file under `root` whose relative path passes `keep`.
///
/// Directory symlinks are not followed. Entries that cannot be read are skipped
/// with a warning. The returned list is sorted by relative path.
pub fn discover_html_files<F>(root: &Path, keep: F) -> Result<Vec<CorpusFile>, DocumentError>
where
    F: Fn(&Path) -> bool,
{
    if !root.is_dir() {
        return Err(DocumentError::RootNotDirectory {
            path: root.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                warn!(error = %err, "skipping unreadable directory entry");
                continue;
            }
        };

        if !entry.file_type().is_file() || !is_html(entry.file_name()) {
            continue;
        }

        let abs_path = entry.path().to_path_buf();
        let Ok(rel_path) = abs_path.strip_prefix(root).map(Path::to_path_buf) else {
            continue;
        };

        if keep(&rel_path) {
            files.push(CorpusFile { abs_path, rel_path });
        }
    }

    files.sort_by(|a, b| a.rel_path.cmp(&b.rel_path));
    Ok(files)
}

/// Converts a relative path to a `/`-separated string.
pub fn to_posix(path: &Path) -> String {
    path.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

/// Checks for a `.html` extension.
fn is_html(name: &OsStr) -> bool {
    Path::new(name).extension().is_some_and(|ext| ext == "html")
}

/// Callback for reporting per-file progress during a corpus pass.
pub trait ProgressReporter {
    /// Called when starting to process a file.
    fn on_file_start(&mut self, path: &Path, current: usize, total: usize);

    /// Called when a file was processed; `produced` counts its output records.
    fn on_file_done(&mut self, path: &Path, produced: usize);

    /// Called when a file could not be processed.
    fn on_file_error(&mut self, path: &Path, error: &str);

    /// Called when the pass is complete.
    fn on_complete(&mut self, processed: usize, failed: usize);
}

/// A no-op progress reporter.
pub struct SilentReporter;

impl ProgressReporter for SilentReporter {
    fn on_file_start(&mut self, _path: &Path, _current: usize, _total: usize) {}
    fn on_file_done(&mut self, _path: &Path, _produced: usize) {}
    fn on_file_error(&mut self, _path: &Path, _error: &str) {}
    fn on_complete(&mut self, _processed: usize, _failed: usize) {}
}
