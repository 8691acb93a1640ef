//! Index writer: serializes entries into the site's search payload.

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use crate::{IndexError, SearchItem};

/// The JSON payload consumed by the site's search script.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchIndex {
    /// All entries in output order.
    #[serde(rename = "searchIndex")]
    pub items: Vec<SearchItem>,
}

impl SearchIndex {
    /// Wraps a list of entries.
    pub fn new(items: Vec<SearchItem>) -> Self {
        Self { items }
    }

    /// Renders the payload as indented UTF-8 JSON.
    pub fn to_json(&self) -> Result<String, IndexError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Writes the payload to `path`, creating missing parent directories.
    pub fn write(&self, path: &Path) -> Result<(), IndexError> {
        let json = self.to_json()?;
        let to_error = |source| IndexError::WriteFile {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(to_error)?;
        }
        fs::write(path, json).map_err(to_error)
    }
}
