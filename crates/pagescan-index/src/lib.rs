//! Search index builder for static HTML sites.
//!
//! Turns every included page of a site into one page-level [`SearchItem`] plus
//! one item per anchored `h2`/`h3`/`h4` section, then writes the list as a
//! single `{"searchIndex": [...]}` JSON payload for a client-side search script.
//!
//! URLs, categories and page types are inferred from each file's location, so
//! the site needs no front matter or build metadata.

#![warn(missing_docs)]

mod builder;
mod error;
mod exclude;
mod extract;
mod item;
mod section;
mod url;
mod writer;

pub use builder::{BuildOptions, BuiltIndex, IndexBuilder, IndexStats, index_document};
pub use error::IndexError;
pub use exclude::ExclusionRules;
pub use extract::{
    DESCRIPTION_LIMIT, UNTITLED, extract_description, extract_keywords, extract_main_text,
    extract_title,
};
pub use item::{PageType, SearchItem};
pub use section::{Section, extract_sections};
pub use url::{page_category, page_url};
pub use writer::SearchIndex;
