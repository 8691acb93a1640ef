//! Page-level field extraction.

use pagescan_document::{NON_CONTENT_TAGS, ParsedDocument, text::truncate_at_space};

/// Title used when a page has neither a `<title>` nor an `h1`.
pub const UNTITLED: &str = "Untitled";

/// Maximum description length in characters (hard cut).
pub const DESCRIPTION_LIMIT: usize = 220;

/// Page title: `<title>`, else the first `h1`, else [`UNTITLED`].
pub fn extract_title(doc: &ParsedDocument) -> String {
    doc.title()
        .or_else(|| doc.find("h1").map(|h1| h1.text()))
        .unwrap_or_else(|| UNTITLED.to_string())
}

/// Page description: the meta description, else the first paragraph of the
/// main region, else empty. Not yet truncated.
pub fn extract_description(doc: &ParsedDocument) -> String {
    doc.meta_content("description")
        .or_else(|| doc.main_region().find("p").map(|p| p.text()))
        .unwrap_or_default()
}

/// Page keywords from the meta keywords tag, else empty.
pub fn extract_keywords(doc: &ParsedDocument) -> String {
    doc.meta_content("keywords").unwrap_or_default()
}

/// Strips non-content elements and returns the main region's text, capped at
/// `max_chars` on a word boundary (0 = unlimited).
///
/// The document is modified in place, so extract anything that reads page
/// chrome before calling this.
pub fn extract_main_text(doc: &mut ParsedDocument, max_chars: usize) -> String {
    doc.strip(NON_CONTENT_TAGS);
    truncate_at_space(&doc.main_region().text(), max_chars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_prefers_title_element() {
        let doc = ParsedDocument::parse("<title> Prompt  Guide </title><h1>Heading</h1>");
        assert_eq!(extract_title(&doc), "Prompt Guide");
    }

    #[test]
    fn title_falls_back_to_h1_then_untitled() {
        let doc = ParsedDocument::parse("<title>  </title><main><h1>Main <b>Heading</b></h1></main>");
        assert_eq!(extract_title(&doc), "Main Heading");

        let doc = ParsedDocument::parse("<p>Nothing here</p>");
        assert_eq!(extract_title(&doc), "Untitled");
    }

    #[test]
    fn description_prefers_meta() {
        let doc = ParsedDocument::parse(
            r#"<head><meta name="description" content=" Short
                summary "></head><body><p>First para</p></body>"#,
        );
        assert_eq!(extract_description(&doc), "Short summary");
    }

    #[test]
    fn description_falls_back_to_first_main_paragraph() {
        let doc = ParsedDocument::parse(
            "<body><p>Outside</p><main><div><p>Inside  main</p></div><p>Later</p></main></body>",
        );
        assert_eq!(extract_description(&doc), "Inside main");

        let doc = ParsedDocument::parse("<body><div>No paragraphs</div></body>");
        assert_eq!(extract_description(&doc), "");
    }

    #[test]
    fn whitespace_only_meta_description_is_kept_empty() {
        let doc = ParsedDocument::parse(
            r#"<head><meta name="description" content="   "></head><body><p>Body text</p></body>"#,
        );
        assert_eq!(extract_description(&doc), "");
    }

    #[test]
    fn empty_meta_is_absent() {
        let doc = ParsedDocument::parse(
            r#"<head><meta name="description" content=""><meta name="keywords" content="  "></head>
               <body><p>Body text</p></body>"#,
        );
        assert_eq!(extract_description(&doc), "Body text");
        assert_eq!(extract_keywords(&doc), "");
    }

    #[test]
    fn keywords_are_normalized() {
        let doc = ParsedDocument::parse(r#"<meta name="keywords" content="ai,  prompts , training">"#);
        assert_eq!(extract_keywords(&doc), "ai, prompts , training");
    }

    #[test]
    fn main_text_drops_chrome() {
        let mut doc = ParsedDocument::parse(
            r#"<body><header>Site</header><nav>Menu</nav>
               <main><h1>Guide</h1><script>var x;</script><p>Read this.</p>
               <svg><text>icon</text></svg></main>
               <footer>Copyright</footer></body>"#,
        );
        assert_eq!(extract_main_text(&mut doc, 0), "Guide Read this.");
    }

    #[test]
    fn main_text_without_main_uses_body() {
        let mut doc = ParsedDocument::parse(
            "<body><nav>Menu</nav><h1>Title</h1><p>Alpha beta gamma delta</p></body>",
        );
        assert_eq!(extract_main_text(&mut doc, 20), "Title Alpha beta");
    }
}
