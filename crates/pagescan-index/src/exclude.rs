//! Exclusion rules applied before any page is read.

use std::path::{Component, Path};

use pagescan_config::{CompiledPatterns, ConfigError, IndexSettings};
use pagescan_document::to_posix;

/// Decides which root-relative paths stay out of the search index.
#[derive(Debug, Clone)]
pub struct ExclusionRules {
    /// Directory names excluded anywhere in a path.
    dirs: Vec<String>,
    /// Exact root-relative paths.
    files: Vec<String>,
    /// Root-relative path prefixes.
    prefixes: Vec<String>,
    /// Extra glob patterns.
    patterns: CompiledPatterns,
}

impl ExclusionRules {
    /// Builds the rules from index settings, compiling any glob patterns.
    pub fn from_settings(settings: &IndexSettings) -> Result<Self, ConfigError> {
        Ok(Self {
            dirs: settings.exclude_dirs.clone(),
            files: settings.exclude_files.clone(),
            prefixes: settings.exclude_prefixes.clone(),
            patterns: settings.compile_excludes()?,
        })
    }

    /// Checks whether a root-relative path is excluded.
    ///
    /// Prefixes are plain string prefixes of the `/`-separated path, so
    /// `shared/partials` also covers `shared/partials-old/x.html`.
    pub fn is_excluded(&self, rel_path: &Path) -> bool {
        let in_excluded_dir = rel_path.components().any(|c| match c {
            Component::Normal(name) => self.dirs.iter().any(|d| name == d.as_str()),
            _ => false,
        });
        if in_excluded_dir {
            return true;
        }

        let rel = to_posix(rel_path);
        if self.prefixes.iter().any(|p| rel.starts_with(p.as_str())) {
            return true;
        }
        if self.files.iter().any(|f| *f == rel) {
            return true;
        }
        !self.patterns.is_empty() && self.patterns.is_match(rel_path)
    }
}
