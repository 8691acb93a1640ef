//! Heading outline extraction.

use serde::Serialize;

use crate::{ParsedDocument, element::Element, text::ellipsize};

/// Maximum characters of heading text kept for display before an ellipsis is added.
pub const DISPLAY_TEXT_LIMIT: usize = 100;

/// A heading element (`h1`..`h6`) found in a document.
///
/// `level` is always the numeral embedded in `tag`, so it lies in 1..=6.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Heading {
    /// Heading level, 1-6.
    pub level: u8,
    /// Canonical tag name, `h1`..`h6`.
    pub tag: String,
    /// Normalized text, shortened to [`DISPLAY_TEXT_LIMIT`] characters plus an ellipsis.
    pub text: String,
    /// Normalized, untruncated text.
    pub full_text: String,
}

impl Heading {
    /// Builds a heading from a level and its normalized text.
    ///
    /// Returns `None` when `level` is outside 1..=6.
    pub fn new(level: u8, full_text: impl Into<String>) -> Option<Self> {
        if !(1..=6).contains(&level) {
            return None;
        }
        let full_text = full_text.into();
        Some(Self {
            level,
            tag: format!("h{level}"),
            text: ellipsize(&full_text, DISPLAY_TEXT_LIMIT),
            full_text,
        })
    }

    /// Builds a heading from an element, or `None` if it is not `h1`..`h6`.
    pub fn from_element(element: &Element<'_>) -> Option<Self> {
        Self::new(element.heading_level()?, element.concat_text())
    }
}

/// Collects every `h1`..`h6` element in document order, regardless of nesting depth.
pub fn extract_headings(doc: &ParsedDocument) -> Vec<Heading> {
    doc.elements()
        .filter_map(|el| Heading::from_element(&el))
        .collect()
}
