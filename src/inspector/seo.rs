//! SEO analysis
//!
//! Heading histogram and link classification come from the parsed page.
//! The robots.txt and sitemap.xml checks are separate best-effort requests:
//! they run concurrently, and a failure only leaves its field empty.

use crate::inspector::document::Document;
use crate::inspector::fetcher::probe_url;
use crate::inspector::robots::is_allowed;
use crate::report::{LinkSets, HEADING_LEVELS};
use crate::url::classify_link;
use reqwest::Client;
use std::collections::BTreeMap;

/// Outcome of the robots.txt and sitemap.xml checks
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CrawlerFiles {
    pub robots_text: Option<String>,
    pub robots_allows_page: Option<bool>,
    pub sitemap_present: bool,
}

/// Counts `h1`..`h6`; every level is present, zero when unused
pub fn count_headings(document: &Document) -> BTreeMap<String, usize> {
    HEADING_LEVELS
        .iter()
        .map(|tag| (tag.to_string(), document.count(tag)))
        .collect()
}

/// Splits every anchor with a non-empty `href` into internal and external
///
/// Discovery order is kept and duplicates stay. A whitespace-only `href` is
/// not empty and is classified like any other value.
pub fn classify_links(document: &Document, host: &str) -> LinkSets {
    let mut links = LinkSets::default();

    for element in document.find_all("a[href]") {
        let Some(href) = element.value().attr("href") else {
            continue;
        };
        if href.is_empty() {
            continue;
        }

        if classify_link(href, host).is_internal() {
            links.internal.push(href.to_string());
        } else {
            links.external.push(href.to_string());
        }
    }

    links
}

/// Checks `{base}/robots.txt` and `{base}/sitemap.xml`
///
/// # Arguments
///
/// * `client` - Client configured with the short probe timeout
/// * `base` - `scheme://host[:port]` of the inspected page
/// * `page_url` - The inspected URL, evaluated against robots.txt
/// * `user_agent` - The user agent evaluated against robots.txt
pub async fn probe_crawler_files(
    client: &Client,
    base: &str,
    page_url: &str,
    user_agent: &str,
) -> CrawlerFiles {
    let robots_url = format!("{}/robots.txt", base);
    let sitemap_url = format!("{}/sitemap.xml", base);

    let (robots, sitemap) = tokio::join!(
        probe_url(client, &robots_url),
        probe_url(client, &sitemap_url)
    );

    let robots_text = match robots {
        Ok(response) => {
            tracing::debug!("robots.txt answered HTTP {}", response.status_code);
            Some(response.body)
        }
        Err(failure) => {
            tracing::debug!("robots.txt unavailable: {}", failure);
            None
        }
    };

    let sitemap_present = match sitemap {
        Ok(response) => {
            tracing::debug!("sitemap.xml answered HTTP {}", response.status_code);
            true
        }
        Err(failure) => {
            tracing::debug!("sitemap.xml unavailable: {}", failure);
            false
        }
    };

    let robots_allows_page = robots_text
        .as_deref()
        .map(|text| is_allowed(text, user_agent, page_url));

    CrawlerFiles {
        robots_text,
        robots_allows_page,
        sitemap_present,
    }
}
