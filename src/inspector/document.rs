//! Parsed HTML document with absence-safe queries
//!
//! Lookups return `Option` or an empty `Vec`; a missing element or an
//! unparsable selector is never an error.

use scraper::{ElementRef, Html, Selector};

/// A parsed HTML page
pub struct Document {
    html: Html,
}

impl Document {
    /// Parses a page body; malformed HTML is repaired, never rejected
    pub fn parse(body: &str) -> Self {
        Self {
            html: Html::parse_document(body),
        }
    }

    /// First element matching `selector`, in document order
    pub fn find_first(&self, selector: &str) -> Option<ElementRef<'_>> {
        let selector = compile(selector)?;
        self.html.select(&selector).next()
    }

    /// Every element matching `selector`, in document order
    pub fn find_all(&self, selector: &str) -> Vec<ElementRef<'_>> {
        match compile(selector) {
            Some(selector) => self.html.select(&selector).collect(),
            None => Vec::new(),
        }
    }

    /// Number of elements matching `selector`
    pub fn count(&self, selector: &str) -> usize {
        match compile(selector) {
            Some(selector) => self.html.select(&selector).count(),
            None => 0,
        }
    }

    /// Attribute of the first element matching `selector`
    pub fn first_attr(&self, selector: &str, attr: &str) -> Option<String> {
        self.find_first(selector)
            .and_then(|element| element.value().attr(attr))
            .map(str::to_string)
    }
}

/// Concatenated text of an element and its descendants
pub fn element_text(element: &ElementRef<'_>) -> String {
    element.text().collect::<String>()
}

fn compile(selector: &str) -> Option<Selector> {
    match Selector::parse(selector) {
        Ok(selector) => Some(selector),
        Err(e) => {
            tracing::debug!("Ignoring invalid selector {:?}: {:?}", selector, e);
            None
        }
    }
}
