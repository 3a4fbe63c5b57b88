//! Page weight, asset counts and image alt-text audit

use crate::inspector::document::Document;
use crate::report::{ImageInfo, PerformanceMetrics};

/// `rel` is a token list and its values are case-insensitive
const STYLESHEET_SELECTOR: &str = r#"link[rel~="stylesheet" i]"#;

/// Derives performance metrics from the parsed page and its raw size
///
/// # Arguments
///
/// * `document` - The parsed page
/// * `raw_len` - Byte length of the response body as received
pub fn analyze_performance(document: &Document, raw_len: usize) -> PerformanceMetrics {
    let images = document
        .find_all("img")
        .iter()
        .map(|element| {
            let src = element.value().attr("src").unwrap_or_default().to_string();
            let alt = element.value().attr("alt").unwrap_or_default().to_string();
            let has_alt = !alt.is_empty();
            ImageInfo { src, alt, has_alt }
        })
        .collect();

    PerformanceMetrics {
        page_size_kb: raw_len as f64 / 1024.0,
        script_count: document.count("script"),
        style_count: document.count(STYLESHEET_SELECTOR),
        images,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_size_kb() {
        let doc = Document::parse("<html></html>");
        let metrics = analyze_performance(&doc, 2048);
        assert!((metrics.page_size_kb - 2.0).abs() < f64::EPSILON);

        let metrics = analyze_performance(&doc, 512);
        assert!((metrics.page_size_kb - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_counts_scripts_and_stylesheets() {
        let doc = Document::parse(
            r#"<html><head>
            <script src="a.js"></script>
            <script>inline()</script>
            <link rel="stylesheet" href="a.css">
            <link rel="icon" href="favicon.ico">
            </head><body><script src="b.js"></script></body></html>"#,
        );
        let metrics = analyze_performance(&doc, 0);
        assert_eq!(metrics.script_count, 3);
        assert_eq!(metrics.style_count, 1);
    }

    #[test]
    fn test_stylesheet_rel_token_list() {
        let doc = Document::parse(
            r#"<html><head>
            <link rel="preload stylesheet" href="a.css">
            <link rel="Stylesheet" href="b.css">
            <link rel="alternate stylesheet" href="c.css">
            <link rel="stylesheets" href="d.css">
            <link rel="preload" href="e.css">
            </head></html>"#,
        );
        let metrics = analyze_performance(&doc, 0);
        assert_eq!(metrics.style_count, 3);
    }

    #[test]
    fn test_images_in_document_order() {
        let doc = Document::parse(
            r#"<html><body>
            <img src="first.png" alt="First">
            <img src="second.png" alt="">
            <img alt="no source">
            <img src="fourth.png">
            </body></html>"#,
        );
        let metrics = analyze_performance(&doc, 0);

        assert_eq!(
            metrics.images,
            vec![
                ImageInfo {
                    src: "first.png".to_string(),
                    alt: "First".to_string(),
                    has_alt: true,
                },
                ImageInfo {
                    src: "second.png".to_string(),
                    alt: String::new(),
                    has_alt: false,
                },
                ImageInfo {
                    src: String::new(),
                    alt: "no source".to_string(),
                    has_alt: true,
                },
                ImageInfo {
                    src: "fourth.png".to_string(),
                    alt: String::new(),
                    has_alt: false,
                },
            ]
        );
        assert_eq!(metrics.images_missing_alt(), 2);
    }
}
