//! URL handling module for Parslink
//!
//! This module provides scheme normalization, host extraction, and the
//! internal/external classification of links found on the inspected page.

mod domain;
mod normalize;

// Re-export main functions
pub use domain::{base_url, extract_host};
pub use normalize::{ensure_scheme, normalize_url};

/// Where a link points, relative to the inspected host
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkScope {
    /// Link targets the inspected site
    Internal,
    /// Link targets another site
    External,
}

impl LinkScope {
    /// Returns true for links that stay on the inspected site
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Classifies an anchor `href` against the inspected host
///
/// A link is internal when the href contains the host as a substring or is a
/// root-relative path (starts with `/`). Everything else, including relative
/// paths such as `page.html` and fragments, is external. This mirrors a plain
/// substring test, so `https://other.com/?ref=example.com` counts as internal
/// for host `example.com`.
///
/// # Examples
///
/// ```
/// use parslink::url::{classify_link, LinkScope};
///
/// assert_eq!(classify_link("/about", "example.com"), LinkScope::Internal);
/// assert_eq!(classify_link("https://example.com/x", "example.com"), LinkScope::Internal);
/// assert_eq!(classify_link("https://other.org/", "example.com"), LinkScope::External);
/// ```
pub fn classify_link(href: &str, host: &str) -> LinkScope {
    if href.starts_with('/') || (!host.is_empty() && href.contains(host)) {
        LinkScope::Internal
    } else {
        LinkScope::External
    }
}
