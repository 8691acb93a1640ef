//! Typed, read-only view over parsed markup.
//!
//! [`Element`] exposes exactly what the extractors need: tag name, attribute
//! lookup, ordered children and normalized text. The `scraper` tree stays an
//! implementation detail of this module and [`crate::ParsedDocument`].

use std::ops::Deref;

use scraper::{ElementRef, Node};

use crate::text::collapse_whitespace;

/// The tree node handle an [`ElementRef`] points at.
type TreeNode<'a> = <ElementRef<'a> as Deref>::Target;

/// A single element node in a parsed document.
#[derive(Debug, Clone, Copy)]
pub struct Element<'a> {
    /// The underlying scraper element.
    inner: ElementRef<'a>,
}

/// A child node of an [`Element`], in document order.
#[derive(Debug, Clone, Copy)]
pub enum Child<'a> {
    /// A nested element.
    Element(Element<'a>),
    /// A text run.
    Text(&'a str),
}

impl<'a> Child<'a> {
    /// Returns the normalized text carried by this node.
    pub fn text(&self) -> String {
        match self {
            Self::Element(element) => element.text(),
            Self::Text(text) => collapse_whitespace(text),
        }
    }

    /// Wraps a tree node, skipping comments, doctypes and other non-content nodes.
    fn from_node(node: TreeNode<'a>) -> Option<Self> {
        match node.value() {
            Node::Text(text) => Some(Self::Text(&**text)),
            Node::Element(_) => ElementRef::wrap(node).map(|el| Self::Element(Element::new(el))),
            _ => None,
        }
    }

    /// Returns the element if this child is one.
    pub fn as_element(&self) -> Option<Element<'a>> {
        match self {
            Self::Element(element) => Some(*element),
            Self::Text(_) => None,
        }
    }
}

impl<'a> Element<'a> {
    /// Wraps a scraper element reference.
    pub(crate) fn new(inner: ElementRef<'a>) -> Self {
        Self { inner }
    }

    /// Lowercase local tag name, e.g. `h2` or `main`.
    pub fn tag(&self) -> &'a str {
        self.inner.value().name()
    }

    /// Looks up an attribute value by name.
    pub fn attr(&self, key: &str) -> Option<&'a str> {
        self.inner.value().attr(key)
    }

    /// Returns the heading level (1-6) if this is an `h1`..`h6` element.
    pub fn heading_level(&self) -> Option<u8> {
        heading_level(self.tag())
    }

    /// Iterates over the direct children that are elements or text runs.
    pub fn children(&self) -> impl Iterator<Item = Child<'a>> + use<'a> {
        self.inner.children().filter_map(Child::from_node)
    }

    /// Iterates over the siblings following this element, in document order.
    pub fn following_siblings(&self) -> impl Iterator<Item = Child<'a>> + use<'a> {
        self.inner.next_siblings().filter_map(Child::from_node)
    }

    /// Iterates over all descendant elements (not including `self`) in document order.
    pub fn descendants(&self) -> impl Iterator<Item = Element<'a>> + use<'a> {
        self.inner
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .map(Self::new)
    }

    /// Returns the first descendant element with the given tag name.
    pub fn find(&self, tag: &str) -> Option<Self> {
        self.descendants().find(|el| el.tag() == tag)
    }

    /// Concatenated text content with whitespace runs collapsed and ends trimmed.
    ///
    /// Text runs are joined with a space, so `<p>a<b>b</b></p>` yields `a b`.
    pub fn text(&self) -> String {
        let runs: Vec<&str> = self.inner.text().collect();
        collapse_whitespace(&runs.join(" "))
    }

    /// Concatenated text content with no separator between runs, then collapsed.
    ///
    /// Inline markup inside a word stays joined, so `<h1>Hel<b>lo</b></h1>`
    /// yields `Hello`.
    pub fn concat_text(&self) -> String {
        collapse_whitespace(&self.inner.text().collect::<String>())
    }
}

/// Parses the level out of a heading tag name.
pub fn heading_level(tag: &str) -> Option<u8> {
    match tag {
        "h1" => Some(1),
        "h2" => Some(2),
        "h3" => Some(3),
        "h4" => Some(4),
        "h5" => Some(5),
        "h6" => Some(6),
        _ => None,
    }
}
