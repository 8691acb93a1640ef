//! Configuration file parsing.
//!
//! Parses a `.pagescan.toml` file into an intermediate [`RawConfig`] whose
//! fields are all optional, so a partial file only overrides what it names.

use std::{fs, path::Path};

use serde::Deserialize;
use serde_with::{OneOrMany, serde_as};
#[cfg(test)]
use toml::de::Error as TomlError;

use crate::ConfigError;

/// Raw configuration as parsed directly from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawConfig {
    /// Search index settings section.
    pub index: Option<RawIndexSettings>,
    /// Heading analysis settings section.
    pub headings: Option<RawHeadingSettings>,
}

/// Raw `[index]` settings.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawIndexSettings {
    /// Output path for the index JSON.
    pub output: Option<String>,
    /// Page body character cap.
    pub max_page_chars: Option<usize>,
    /// Section body character cap.
    pub max_section_chars: Option<usize>,
    /// Whether section entries are emitted.
    pub sections: Option<bool>,
    /// Directory names excluded anywhere in a path.
    pub exclude_dirs: Option<Vec<String>>,
    /// Root-relative paths excluded exactly.
    pub exclude_files: Option<Vec<String>>,
    /// Root-relative path prefixes excluded.
    pub exclude_prefixes: Option<Vec<String>>,
    /// Extra glob patterns to exclude. Accepts a string or an array.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub exclude: Option<Vec<String>>,
}

/// Raw `[headings]` settings.
#[serde_as]
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RawHeadingSettings {
    /// Plain-text report path.
    pub report: Option<String>,
    /// JSON dump path.
    pub json: Option<String>,
    /// Glob patterns to exclude. Accepts a string or an array.
    #[serde_as(as = "Option<OneOrMany<_>>")]
    pub exclude: Option<Vec<String>>,
}

/// Parses a configuration file from disk.
pub fn parse_config_file(path: &Path) -> Result<RawConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;

    parse_config_str(&contents, path)
}

/// Parses configuration from a TOML string.
///
/// The `path` parameter is used for error reporting.
pub fn parse_config_str(contents: &str, path: &Path) -> Result<RawConfig, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::ParseToml {
        path: path.to_path_buf(),
        source,
    })
}

/// Parses configuration without a path, for tests.
#[cfg(test)]
pub fn parse_config(contents: &str) -> Result<RawConfig, TomlError> {
    toml::from_str(contents)
}
