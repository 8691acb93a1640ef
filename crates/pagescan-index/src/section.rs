//! Anchored section extraction.
//!
//! A section starts at an `h2`, `h3` or `h4` that carries an `id` and runs over
//! the heading's following siblings until the next `h2`/`h3`/`h4` sibling.

use pagescan_document::{
    Element,
    text::{collapse_whitespace, truncate_at_space},
};

/// Tags that start (and therefore end) a section.
const SECTION_TAGS: &[&str] = &["h2", "h3", "h4"];

/// One addressable subsection of a page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    /// The heading's trimmed `id` attribute.
    pub anchor: String,
    /// Normalized heading text.
    pub title: String,
    /// Normalized, capped text between this heading and the next section heading.
    pub content: String,
}

/// Extracts every anchored section under `region`, in document order.
///
/// Headings without a non-blank `id`, or without any text, are skipped.
/// Section content is capped at `max_chars` on a word boundary (0 = unlimited).
pub fn extract_sections(region: Element<'_>, max_chars: usize) -> Vec<Section> {
    region
        .descendants()
        .filter(|el| is_section_heading(el))
        .filter_map(|heading| {
            let anchor = heading.attr("id").map(str::trim).filter(|id| !id.is_empty())?;
            let title = heading.text();
            if title.is_empty() {
                return None;
            }
            Some(Section {
                anchor: anchor.to_string(),
                title,
                content: truncate_at_space(&section_text(heading), max_chars),
            })
        })
        .collect()
}

/// Checks whether an element is a section heading.
fn is_section_heading(el: &Element<'_>) -> bool {
    SECTION_TAGS.contains(&el.tag())
}

/// Collects the text of the siblings following `heading` up to the next section heading.
fn section_text(heading: Element<'_>) -> String {
    let parts: Vec<String> = heading
        .following_siblings()
        .take_while(|sibling| !sibling.as_element().is_some_and(|el| is_section_heading(&el)))
        .map(|sibling| sibling.text())
        .filter(|text| !text.is_empty())
        .collect();
    collapse_whitespace(&parts.join(" "))
}
