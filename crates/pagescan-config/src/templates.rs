//! Configuration template for `pagescan init`.
//!
//! The template is stored as a valid TOML file listing every default, and
//! written out commented so a fresh file changes nothing until edited.

/// Configuration template (valid TOML).
const TEMPLATE: &str = include_str!("../templates/config.toml");

/// Returns the configuration template as a commented-out example.
pub fn config_template() -> String {
    comment_template(TEMPLATE)
}

/// Converts a valid TOML template into a commented-out example config.
///
/// Lines that are already comments are preserved as-is. Non-comment, non-empty
/// lines get a "# " prefix. Empty lines are preserved.
fn comment_template(template: &str) -> String {
    let mut result = String::with_capacity(template.len() + template.lines().count() * 2);
    for line in template.lines() {
        if !line.is_empty() && !line.starts_with('#') {
            result.push_str("# ");
        }
        result.push_str(line);
        result.push('\n');
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Config, parse::parse_config};

    #[test]
    fn template_parses_as_valid_toml() {
        let result = parse_config(TEMPLATE);
        assert!(result.is_ok(), "template failed to parse: {result:?}");
    }

    #[test]
    fn template_matches_defaults() {
        let raw = parse_config(TEMPLATE).unwrap();
        let from_template = Config::from_raw(raw, None);
        let defaults = Config::default();
        assert_eq!(from_template.index, defaults.index);
        assert_eq!(from_template.headings, defaults.headings);
    }

    #[test]
    fn commented_template_is_inert() {
        let raw = parse_config(&config_template()).unwrap();
        assert!(raw.index.is_none());
        assert!(raw.headings.is_none());
    }

    #[test]
    fn comment_template_preserves_existing_comments() {
        let input = "# This is a comment\nkey = \"value\"\n";
        let result = comment_template(input);
        assert_eq!(result, "# This is a comment\n# key = \"value\"\n");
    }

    #[test]
    fn comment_template_handles_section_headers() {
        let input = "[section]\nkey = \"value\"\n\nother = 1\n";
        let result = comment_template(input);
        assert_eq!(result, "# [section]\n# key = \"value\"\n\n# other = 1\n");
    }
}
