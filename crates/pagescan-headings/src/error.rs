//! Error types for heading report output.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur while writing heading analysis artifacts.
#[derive(Debug, Error)]
pub enum ReportError {
    /// Failed to write a report file.
    #[error("failed to write {path}: {source}")]
    WriteFile {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// Failed to serialize the JSON dump.
    #[error("failed to serialize heading analysis: {0}")]
    Serialize(#[from] serde_json::Error),
}
