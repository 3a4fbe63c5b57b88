//! Structural extraction of the fetched page
//!
//! This module pulls the descriptive parts of a page out of the parsed HTML:
//! - Title and meta description, with fixed fallbacks
//! - The `viewport`, `og:title` and `og:description` meta tags
//! - The keyword list from `meta[name=keywords]`
//! - The readable text of paragraphs, top-level headings and articles

use crate::inspector::document::{element_text, Document};
use std::collections::BTreeMap;

/// Title used when the page has none
pub const TITLE_FALLBACK: &str = "title not found";

/// Description used when the page has no meta description
pub const DESCRIPTION_FALLBACK: &str = "description not found";

/// Meta tags copied into the report, with the attribute that names each
const NAMED_META_TAGS: [(&str, &str); 3] = [
    ("viewport", "name"),
    ("og:title", "property"),
    ("og:description", "property"),
];

/// Elements whose text makes up the main content
const CONTENT_SELECTOR: &str = "p, h1, h2, h3, article";

/// Descriptive data extracted from a page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageStructure {
    pub title: String,
    pub description: String,
    /// Always holds every tag in the fixed set; `None` when absent
    pub meta_tags: BTreeMap<String, Option<String>>,
    pub keywords: Vec<String>,
    /// Untruncated text of content elements, in document order
    pub main_content: String,
}

/// Extracts title, description, meta tags, keywords and main content
///
/// Missing parts degrade silently to the documented fallbacks.
///
/// # Example
///
/// ```
/// use parslink::inspector::{extract_structure, Document};
///
/// let doc = Document::parse(r#"<html><head><title>Test</title></head><body><p>Hi</p></body></html>"#);
/// let structure = extract_structure(&doc);
/// assert_eq!(structure.title, "Test");
/// assert_eq!(structure.description, "description not found");
/// assert_eq!(structure.main_content, "Hi");
/// ```
pub fn extract_structure(document: &Document) -> PageStructure {
    PageStructure {
        title: extract_title(document),
        description: extract_description(document),
        meta_tags: extract_meta_tags(document),
        keywords: extract_keywords(document),
        main_content: extract_main_content(document),
    }
}

fn extract_title(document: &Document) -> String {
    document
        .find_first("title")
        .map(|element| element_text(&element).trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| TITLE_FALLBACK.to_string())
}

fn extract_description(document: &Document) -> String {
    document
        .first_attr(r#"meta[name="description"]"#, "content")
        .unwrap_or_else(|| DESCRIPTION_FALLBACK.to_string())
}

fn extract_meta_tags(document: &Document) -> BTreeMap<String, Option<String>> {
    NAMED_META_TAGS
        .iter()
        .map(|(name, attr)| {
            let selector = format!(r#"meta[{}="{}"]"#, attr, name);
            (name.to_string(), document.first_attr(&selector, "content"))
        })
        .collect()
}

/// Comma-split keywords, trimmed, with empty entries dropped
fn extract_keywords(document: &Document) -> Vec<String> {
    document
        .first_attr(r#"meta[name="keywords"]"#, "content")
        .map(|content| {
            content
                .split(',')
                .map(str::trim)
                .filter(|k| !k.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn extract_main_content(document: &Document) -> String {
    document
        .find_all(CONTENT_SELECTOR)
        .iter()
        .map(element_text)
        .collect::<Vec<_>>()
        .join(" ")
}

/// First `max_chars` characters of `text`
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn structure(html: &str) -> PageStructure {
        extract_structure(&Document::parse(html))
    }

    #[test]
    fn test_extract_title() {
        let s = structure(r#"<html><head><title>  Test Page  </title></head></html>"#);
        assert_eq!(s.title, "Test Page");
    }

    #[test]
    fn test_title_fallback() {
        let s = structure(r#"<html><head></head><body></body></html>"#);
        assert_eq!(s.title, TITLE_FALLBACK);

        let s = structure(r#"<html><head><title>   </title></head></html>"#);
        assert_eq!(s.title, TITLE_FALLBACK);
    }

    #[test]
    fn test_description() {
        let s = structure(
            r#"<html><head><meta name="description" content="About us"></head></html>"#,
        );
        assert_eq!(s.description, "About us");
    }

    #[test]
    fn test_description_fallback() {
        let s = structure(r#"<html><head></head></html>"#);
        assert_eq!(s.description, DESCRIPTION_FALLBACK);

        // Tag without content also falls back
        let s = structure(r#"<html><head><meta name="description"></head></html>"#);
        assert_eq!(s.description, DESCRIPTION_FALLBACK);
    }

    #[test]
    fn test_meta_tags_always_present() {
        let s = structure(r#"<html><head></head></html>"#);
        assert_eq!(s.meta_tags.len(), 3);
        assert!(s.meta_tags.values().all(Option::is_none));
    }

    #[test]
    fn test_meta_tags_by_name_and_property() {
        let s = structure(
            r#"<html><head>
            <meta name="viewport" content="width=device-width">
            <meta property="og:title" content="OG Title">
            <meta name="og:description" content="wrong attribute">
            </head></html>"#,
        );
        assert_eq!(
            s.meta_tags["viewport"],
            Some("width=device-width".to_string())
        );
        assert_eq!(s.meta_tags["og:title"], Some("OG Title".to_string()));
        assert_eq!(s.meta_tags["og:description"], None);
    }

    #[test]
    fn test_keywords_split_and_trimmed() {
        let s = structure(
            r#"<html><head><meta name="keywords" content="rust, web , ,parsing"></head></html>"#,
        );
        assert_eq!(s.keywords, vec!["rust", "web", "parsing"]);
    }

    #[test]
    fn test_keywords_absent_is_empty() {
        let s = structure(r#"<html><head></head></html>"#);
        assert!(s.keywords.is_empty());
    }

    #[test]
    fn test_main_content_document_order() {
        let s = structure(
            r#"<html><body>
            <h2>Second level</h2>
            <p>First paragraph</p>
            <div>ignored</div>
            <h1>Top</h1>
            <h4>ignored too</h4>
            <article>Story</article>
            </body></html>"#,
        );
        assert_eq!(s.main_content, "Second level First paragraph Top Story");
    }

    #[test]
    fn test_truncate_chars() {
        assert_eq!(truncate_chars("hello", 3), "hel");
        assert_eq!(truncate_chars("hi", 10), "hi");
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("", 5), "");
    }
}
