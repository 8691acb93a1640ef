//! Error types for document loading and corpus discovery.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when loading documents or walking a corpus.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Failed to read a file.
    #[error("failed to read file {path}: {source}")]
    ReadFile {
        /// Path to the file that could not be read.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// The corpus root does not exist or is not a directory.
    #[error("corpus root is not a directory: {path}")]
    RootNotDirectory {
        /// The offending root path.
        path: PathBuf,
    },
}
