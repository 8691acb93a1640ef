//! URL and category inference from a page's location in the site.

use std::path::{Component, Path};

use pagescan_document::{slug::title_case, to_posix};

/// Directory index file name.
const INDEX_FILE: &str = "index.html";

/// Category for pages sitting directly in the site root.
const HOME_CATEGORY: &str = "Home";

/// Maps a root-relative file path to its site URL.
///
/// - `index.html` becomes `/`
/// - `dir/index.html` becomes `/dir/`
/// - anything else becomes `/` followed by the relative path
pub fn page_url(rel_path: &Path) -> String {
    let rel = to_posix(rel_path);
    if rel == INDEX_FILE {
        return "/".to_string();
    }
    match rel.strip_suffix(INDEX_FILE) {
        Some(dir) if dir.ends_with('/') => format!("/{dir}"),
        _ => format!("/{rel}"),
    }
}

/// Infers a display category from the first path segment.
///
/// Pages at the site root belong to `Home`; others take the title-cased name
/// of their top-level directory (`use-cases/x.html` is `Use Cases`).
pub fn page_category(rel_path: &Path) -> String {
    let mut segments = rel_path.components().filter_map(|c| match c {
        Component::Normal(s) => Some(s),
        _ => None,
    });
    match (segments.next(), segments.next()) {
        (Some(first), Some(_)) => title_case(&first.to_string_lossy()),
        _ => HOME_CATEGORY.to_string(),
    }
}
