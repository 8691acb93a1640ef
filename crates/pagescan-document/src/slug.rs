//! Slug generation for search item identifiers and category labels.
//!
//! Slugs are lowercase, hyphen-separated identifiers:
//! - Lowercase the text
//! - Replace every run of characters outside `[a-z0-9]` with a single hyphen
//! - Trim leading/trailing hyphens
//! - Fall back to `item` when nothing remains

use std::collections::{HashMap, HashSet};

/// Slug used when the input contains no ASCII alphanumerics.
pub const EMPTY_SLUG: &str = "item";

/// Converts arbitrary text into a slug.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut pending_hyphen = false;

    for c in text.chars().flat_map(char::to_lowercase) {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !slug.is_empty() {
                slug.push('-');
            }
            pending_hyphen = false;
            slug.push(c);
        } else {
            pending_hyphen = true;
        }
    }

    if slug.is_empty() {
        EMPTY_SLUG.to_string()
    } else {
        slug
    }
}

/// Converts a path segment such as `use-cases` or `ai_tools` into a display label (`Use Cases`).
///
/// Each hyphen/underscore separated part has its first character uppercased and the rest lowercased.
pub fn title_case(segment: &str) -> String {
    segment
        .split(['-', '_'])
        .filter(|part| !part.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Uppercases the first character and lowercases the remainder.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}

/// Hands out identifiers that are unique within one run.
///
/// The first use of an identifier is returned unchanged; repeats get the
/// lowest `-N` suffix (N starts at 1) that has not been handed out yet, so a
/// suffixed repeat never shadows a later natural identifier or vice versa.
#[derive(Debug, Default)]
pub struct Slugifier {
    /// Every identifier returned so far.
    issued: HashSet<String>,
    /// Next suffix to try for each repeated base identifier.
    next_suffix: HashMap<String, usize>,
}

impl Slugifier {
    /// Creates a new slugifier with no prior identifiers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensures `base` is unique, appending `-N` if it was handed out before.
    pub fn unique(&mut self, base: String) -> String {
        if self.issued.insert(base.clone()) {
            return base;
        }

        let suffix = self.next_suffix.entry(base.clone()).or_insert(1);
        loop {
            let candidate = format!("{base}-{suffix}");
            *suffix += 1;
            if self.issued.insert(candidate.clone()) {
                return candidate;
            }
        }
    }
}
