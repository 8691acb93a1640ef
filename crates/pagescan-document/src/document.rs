//! Loading and parsing HTML files into a navigable tree.

use std::{fs, iter, path::Path};

use scraper::{ElementRef, Html};

use crate::{DocumentError, element::Element, text::collapse_whitespace};

/// Elements removed before reading the main content of a page.
///
/// Navigation chrome, scripts, styles and inline vector graphics carry no
/// searchable prose.
pub const NON_CONTENT_TAGS: &[&str] = &[
    "nav", "header", "footer", "script", "style", "noscript", "svg",
];

/// An HTML document parsed into an ordered element tree.
///
/// Parsing is lenient: unclosed tags, stray end tags and missing attributes
/// produce a best-effort partial tree, never an error.
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    /// The parsed scraper tree.
    html: Html,
}

impl ParsedDocument {
    /// Parses HTML source text.
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }

    /// The document's root (`html`) element.
    pub fn root(&self) -> Element<'_> {
        Element::new(self.html.root_element())
    }

    /// All elements in document order, starting with the root.
    pub fn elements(&self) -> impl Iterator<Item = Element<'_>> {
        let root = self.root();
        iter::once(root).chain(root.descendants())
    }

    /// Returns the first element with the given tag name anywhere in the document.
    pub fn find(&self, tag: &str) -> Option<Element<'_>> {
        self.elements().find(|el| el.tag() == tag)
    }

    /// The main content region: the `<main>` element if present, else `<body>`, else the root.
    pub fn main_region(&self) -> Element<'_> {
        self.find("main")
            .or_else(|| self.find("body"))
            .unwrap_or_else(|| self.root())
    }

    /// Text of the `<title>` element, if present and non-empty after normalization.
    pub fn title(&self) -> Option<String> {
        self.find("title")
            .map(|el| el.text())
            .filter(|text| !text.is_empty())
    }

    /// Normalized `content` of the first `<meta name="...">` tag with the given name.
    ///
    /// A tag whose `content` is missing or empty counts as absent. Whitespace-only
    /// content is present and normalizes to an empty string.
    pub fn meta_content(&self, name: &str) -> Option<String> {
        self.elements()
            .find(|el| el.tag() == "meta" && el.attr("name") == Some(name))
            .and_then(|el| el.attr("content"))
            .filter(|content| !content.is_empty())
            .map(collapse_whitespace)
    }

    /// Detaches every element whose tag is in `tags`, along with its subtree.
    ///
    /// Returns the number of elements removed.
    pub fn strip(&mut self, tags: &[&str]) -> usize {
        let ids: Vec<_> = self
            .html
            .root_element()
            .descendants()
            .filter_map(ElementRef::wrap)
            .filter(|el| tags.contains(&el.value().name()))
            .map(|el| el.id())
            .collect();

        for id in &ids {
            if let Some(mut node) = self.html.tree.get_mut(*id) {
                node.detach();
            }
        }
        ids.len()
    }
}

/// Reads and parses an HTML file.
///
/// Invalid UTF-8 sequences are dropped rather than failing the file, so a
/// corpus with mixed encodings still yields usable text.
pub fn load(path: &Path) -> Result<ParsedDocument, DocumentError> {
    let bytes = fs::read(path).map_err(|source| DocumentError::ReadFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(ParsedDocument::parse(&decode_lossy(&bytes)))
}

/// Decodes UTF-8, silently dropping invalid byte sequences.
pub fn decode_lossy(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        out.push_str(chunk.valid());
    }
    out
}
