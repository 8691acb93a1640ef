//! Exclude pattern compilation and matching.

use std::path::Path;

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::ConfigError;

/// A compiled set of glob patterns matched against root-relative paths.
#[derive(Debug, Clone)]
pub struct CompiledPatterns {
    /// The combined glob set.
    set: GlobSet,
    /// Number of patterns compiled into `set`.
    len: usize,
}

impl CompiledPatterns {
    /// Compiles glob patterns into an efficient matcher.
    pub fn compile(patterns: &[String]) -> Result<Self, ConfigError> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            builder.add(compile_glob(pattern)?);
        }
        let set = builder.build().map_err(|e| ConfigError::InvalidPattern {
            pattern: "<combined exclude patterns>".to_string(),
            source: e,
        })?;

        Ok(Self {
            set,
            len: patterns.len(),
        })
    }

    /// Checks whether a root-relative path matches any pattern.
    pub fn is_match(&self, path: &Path) -> bool {
        self.set.is_match(path)
    }

    /// Returns true when no patterns were compiled.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Compiles a single glob pattern.
fn compile_glob(pattern: &str) -> Result<Glob, ConfigError> {
    Glob::new(pattern).map_err(|e| ConfigError::InvalidPattern {
        pattern: pattern.to_string(),
        source: e,
    })
}
