//! HTML document loading and outline extraction for pagescan.
//!
//! This crate turns static HTML files into a typed, navigable element tree and
//! provides the primitives both pagescan pipelines build on:
//! - Lenient parsing with lossy UTF-8 decoding
//! - A read-only [`Element`] view (tag, attributes, children, normalized text)
//! - Ordered heading extraction
//! - Whitespace normalization, truncation policies and slugs
//! - Sorted corpus discovery

#![warn(missing_docs)]

mod corpus;
mod document;
mod element;
mod error;
mod heading;
pub mod slug;
pub mod text;

pub use corpus::{
    CorpusFile, ProgressReporter, SilentReporter, discover_html_files, to_posix,
};
pub use document::{NON_CONTENT_TAGS, ParsedDocument, decode_lossy, load};
pub use element::{Child, Element, heading_level};
pub use error::DocumentError;
pub use heading::{DISPLAY_TEXT_LIMIT, Heading, extract_headings};
