//! Report data model
//!
//! One [`InspectionReport`] is built per inspection. The types serialize with
//! camelCase field names; that JSON is the export format.

mod tls;

pub use tls::{TlsDetails, TlsInfo};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Heading tags counted by the SEO analyzer, in order
pub const HEADING_LEVELS: [&str; 6] = ["h1", "h2", "h3", "h4", "h5", "h6"];

/// Report keys of the security headers, paired with the HTTP header read for each
pub const SECURITY_HEADERS: [(&str, &str); 4] = [
    ("HSTS", "strict-transport-security"),
    ("CSP", "content-security-policy"),
    ("X-Frame-Options", "x-frame-options"),
    ("X-XSS-Protection", "x-xss-protection"),
];

/// One `<img>` element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageInfo {
    /// `src` attribute, empty when missing
    pub src: String,
    /// `alt` attribute, empty when missing
    pub alt: String,
    /// True when `alt` is present and non-empty
    pub has_alt: bool,
}

/// Page weight and asset counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceMetrics {
    pub page_size_kb: f64,
    pub script_count: usize,
    pub style_count: usize,
    /// Images in document order
    pub images: Vec<ImageInfo>,
}

impl PerformanceMetrics {
    /// Number of images with a missing or empty `alt`
    pub fn images_missing_alt(&self) -> usize {
        self.images.iter().filter(|img| !img.has_alt).count()
    }
}

/// Anchors split by target
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkSets {
    pub internal: Vec<String>,
    pub external: Vec<String>,
}

impl LinkSets {
    /// Total number of classified anchors
    pub fn total(&self) -> usize {
        self.internal.len() + self.external.len()
    }
}

/// Heading histogram, link classification and crawler-file checks
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeoData {
    /// Always holds all of `h1`..`h6`
    pub heading_counts: BTreeMap<String, usize>,
    pub links: LinkSets,
    /// Body of `/robots.txt` when it answered 2xx
    pub robots_text: Option<String>,
    /// Whether robots.txt lets our user agent fetch the inspected URL
    pub robots_allows_page: Option<bool>,
    pub sitemap_present: bool,
}

impl SeoData {
    /// Count for one heading level; zero for unknown tags
    pub fn heading_count(&self, tag: &str) -> usize {
        self.heading_counts.get(tag).copied().unwrap_or(0)
    }
}

/// Security headers and cookies from the primary response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityData {
    /// Keyed by the names in [`SECURITY_HEADERS`]; `None` when not sent
    pub headers: BTreeMap<String, Option<String>>,
    pub cookies: BTreeMap<String, String>,
}

impl SecurityData {
    /// Report keys of security headers the server did not send
    pub fn missing_headers(&self) -> Vec<&str> {
        self.headers
            .iter()
            .filter(|(_, value)| value.is_none())
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

/// The complete result of one inspection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionReport {
    pub url: String,
    pub title: String,
    pub description: String,
    pub keywords: Vec<String>,
    pub meta_tags: BTreeMap<String, Option<String>>,
    pub performance: PerformanceMetrics,
    pub seo: SeoData,
    pub security: SecurityData,
    pub tls: TlsInfo,
    pub load_time_seconds: f64,
    /// ISO-8601 local time of report assembly
    pub timestamp: String,
    pub summary_model_id: String,
    pub summary_text: String,
}
