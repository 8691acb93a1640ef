//! Configuration system for pagescan.
//!
//! pagescan reads an optional `.pagescan.toml` file from the root of the site being
//! scanned. Every field is optional; anything the file leaves out falls back to the
//! built-in default, and command-line flags override both.

#![warn(missing_docs)]

mod error;
mod parse;
mod patterns;
mod templates;

use std::path::{Path, PathBuf};

pub use error::ConfigError;
pub use parse::{RawConfig, RawHeadingSettings, RawIndexSettings, parse_config_file, parse_config_str};
pub use patterns::CompiledPatterns;
use serde::{Deserialize, Serialize};
pub use templates::config_template;

/// The name of configuration files.
pub const CONFIG_FILENAME: &str = ".pagescan.toml";

/// Returns the config file location for a corpus root.
pub fn config_path(root: &Path) -> PathBuf {
    root.join(CONFIG_FILENAME)
}

/// Effective configuration for one corpus root.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Search index settings.
    pub index: IndexSettings,
    /// Heading analysis settings.
    pub headings: HeadingSettings,
    /// The config file these settings were read from, if any.
    pub source: Option<PathBuf>,
}

impl Config {
    /// Loads configuration for a corpus root.
    ///
    /// Returns `Ok(Config::default())` if the root has no `.pagescan.toml`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = config_path(root);
        if !path.is_file() {
            return Ok(Self::default());
        }
        Self::load_file(&path)
    }

    /// Loads configuration from an explicit file path.
    pub fn load_file(path: &Path) -> Result<Self, ConfigError> {
        let raw = parse_config_file(path)?;
        Ok(Self::from_raw(raw, Some(path.to_path_buf())))
    }

    /// Resolves a parsed file over the built-in defaults.
    pub fn from_raw(raw: RawConfig, source: Option<PathBuf>) -> Self {
        let mut config = Self {
            source,
            ..Self::default()
        };
        if let Some(index) = raw.index {
            config.index.apply(index);
        }
        if let Some(headings) = raw.headings {
            config.headings.apply(headings);
        }
        config
    }

    /// Serializes the effective settings to TOML format.
    ///
    /// The output has the same shape as a `.pagescan.toml` file.
    pub fn settings_to_toml(&self) -> Result<String, ConfigError> {
        let serializable = SerializableSettings {
            index: &self.index,
            headings: &self.headings,
        };
        Ok(toml::to_string_pretty(&serializable)?)
    }
}

/// Settings for the search index builder.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct IndexSettings {
    /// Where the index JSON is written.
    pub output: PathBuf,
    /// Page body character cap; 0 disables truncation.
    pub max_page_chars: usize,
    /// Section body character cap; 0 disables truncation.
    pub max_section_chars: usize,
    /// Whether section entries are emitted.
    pub sections: bool,
    /// Directory names skipped anywhere in a path.
    pub exclude_dirs: Vec<String>,
    /// Root-relative paths skipped exactly.
    pub exclude_files: Vec<String>,
    /// Root-relative path prefixes skipped.
    pub exclude_prefixes: Vec<String>,
    /// Additional glob patterns to skip.
    pub exclude: Vec<String>,
}

impl Default for IndexSettings {
    fn default() -> Self {
        Self {
            output: PathBuf::from("shared/search-index.json"),
            max_page_chars: 5000,
            max_section_chars: 1500,
            sections: true,
            exclude_dirs: strings(&[".git", ".vscode", ".claude"]),
            exclude_files: strings(&[
                "index_copy.html",
                "secure-template.html",
                "test-progress.html",
                "shared/footer.html",
                "shared/footer-noscript.html",
            ]),
            exclude_prefixes: strings(&["shared/partials"]),
            exclude: Vec::new(),
        }
    }
}

impl IndexSettings {
    /// Overrides every field the raw section sets.
    fn apply(&mut self, raw: RawIndexSettings) {
        if let Some(output) = raw.output {
            self.output = PathBuf::from(output);
        }
        if let Some(max) = raw.max_page_chars {
            self.max_page_chars = max;
        }
        if let Some(max) = raw.max_section_chars {
            self.max_section_chars = max;
        }
        if let Some(sections) = raw.sections {
            self.sections = sections;
        }
        if let Some(dirs) = raw.exclude_dirs {
            self.exclude_dirs = dirs;
        }
        if let Some(files) = raw.exclude_files {
            self.exclude_files = files;
        }
        if let Some(prefixes) = raw.exclude_prefixes {
            self.exclude_prefixes = prefixes;
        }
        if let Some(exclude) = raw.exclude {
            self.exclude = exclude;
        }
    }

    /// Compiles the extra exclude globs.
    pub fn compile_excludes(&self) -> Result<CompiledPatterns, ConfigError> {
        CompiledPatterns::compile(&self.exclude)
    }
}

/// Settings for heading analysis.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct HeadingSettings {
    /// Plain-text report path.
    pub report: PathBuf,
    /// Detailed JSON results path.
    pub json: PathBuf,
    /// Glob patterns to skip.
    pub exclude: Vec<String>,
}

impl Default for HeadingSettings {
    fn default() -> Self {
        Self {
            report: PathBuf::from("heading_hierarchy_report.txt"),
            json: PathBuf::from("heading_analysis_detailed.json"),
            exclude: Vec::new(),
        }
    }
}

impl HeadingSettings {
    /// Overrides every field the raw section sets.
    fn apply(&mut self, raw: RawHeadingSettings) {
        if let Some(report) = raw.report {
            self.report = PathBuf::from(report);
        }
        if let Some(json) = raw.json {
            self.json = PathBuf::from(json);
        }
        if let Some(exclude) = raw.exclude {
            self.exclude = exclude;
        }
    }

    /// Compiles the exclude globs.
    pub fn compile_excludes(&self) -> Result<CompiledPatterns, ConfigError> {
        CompiledPatterns::compile(&self.exclude)
    }
}

/// Serializable view of the effective settings.
#[derive(Serialize)]
struct SerializableSettings<'a> {
    /// Index settings.
    index: &'a IndexSettings,
    /// Heading settings.
    headings: &'a HeadingSettings,
}

/// Converts a list of literals to owned strings.
fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| (*s).to_string()).collect()
}
