//! Error types for the pagescan-index crate.

use std::{io, path::PathBuf};

use pagescan_config::ConfigError;
use pagescan_document::DocumentError;
use thiserror::Error;

/// Errors that can abort an index build.
///
/// Per-file read failures are not errors at this level: the builder logs them
/// and moves on to the next file.
#[derive(Debug, Error)]
pub enum IndexError {
    /// Corpus discovery failed.
    #[error(transparent)]
    Document(#[from] DocumentError),

    /// Exclusion patterns could not be compiled.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Failed to serialize the index payload.
    #[error("failed to serialize search index: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Failed to write the index file.
    #[error("failed to write search index to {path}: {source}")]
    WriteFile {
        /// Destination path.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}
