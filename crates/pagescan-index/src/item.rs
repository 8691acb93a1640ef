//! Search index records.

use serde::{Deserialize, Serialize};

/// Kind of page an entry belongs to, inferred from its URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageType {
    /// A use-case walkthrough.
    UseCase,
    /// A prompt library category.
    PromptCategory,
    /// Contact, privacy and terms pages.
    Utility,
    /// Everything else.
    Module,
}

impl PageType {
    /// URL markers checked in priority order; the first match wins.
    const RULES: &[(&[&str], Self)] = &[
        (&["use-cases"], Self::UseCase),
        (&["gbs-prompts"], Self::PromptCategory),
        (
            &["contact-us", "privacy-policy", "terms-of-service"],
            Self::Utility,
        ),
    ];

    /// Infers the page type from a site-relative URL.
    pub fn from_url(url: &str) -> Self {
        Self::RULES
            .iter()
            .find(|(markers, _)| markers.iter().any(|m| url.contains(m)))
            .map_or(Self::Module, |(_, kind)| *kind)
    }

    /// The serialized name, e.g. `use-case`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UseCase => "use-case",
            Self::PromptCategory => "prompt-category",
            Self::Utility => "utility",
            Self::Module => "module",
        }
    }
}

/// One entry in the search index: a whole page or one anchored section of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchItem {
    /// Identifier unique within one index run.
    pub id: String,
    /// Page title, or the heading text for a section.
    pub title: String,
    /// Short summary, at most 220 characters.
    pub description: String,
    /// Site-relative URL of the page.
    pub url: String,
    /// Display category derived from the top-level directory.
    pub category: String,
    /// Page kind.
    #[serde(rename = "type")]
    pub item_type: PageType,
    /// Raw meta keywords, possibly empty.
    pub keywords: String,
    /// Normalized, length-capped body text.
    pub content: String,
    /// Heading `id` for section entries, empty for pages.
    pub anchor: String,
    /// Parent page title for section entries, empty for pages.
    #[serde(rename = "sectionTitle")]
    pub section_title: String,
}

impl SearchItem {
    /// True for section entries.
    pub fn is_section(&self) -> bool {
        !self.anchor.is_empty()
    }
}
