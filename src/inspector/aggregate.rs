//! Report assembly and summarization prompt
//!
//! Everything here is deterministic: the same fetched page, TLS outcome and
//! crawler-file checks always produce the same prompt and the same report,
//! apart from the timestamp and load time.

use crate::inspector::document::Document;
use crate::inspector::extract::{extract_structure, truncate_chars, PageStructure};
use crate::inspector::fetcher::FetchedPage;
use crate::inspector::performance::analyze_performance;
use crate::inspector::security::analyze_security;
use crate::inspector::seo::{classify_links, count_headings, CrawlerFiles};
use crate::report::{
    InspectionReport, LinkSets, PerformanceMetrics, SecurityData, SeoData, TlsInfo,
    HEADING_LEVELS,
};
use std::collections::BTreeMap;
use std::fmt::Write;
use std::time::Duration;

/// Characters of main content embedded in the prompt
pub const MAX_PROMPT_CONTENT_CHARS: usize = 1000;

/// Everything derived from the fetched page itself
#[derive(Debug, Clone, PartialEq)]
pub struct PageAnalysis {
    /// The URL as requested, after scheme normalization
    pub url: String,
    pub structure: PageStructure,
    pub performance: PerformanceMetrics,
    pub heading_counts: BTreeMap<String, usize>,
    pub links: LinkSets,
    pub security: SecurityData,
}

impl PageAnalysis {
    /// Parses the page once and runs every document-level analyzer
    ///
    /// # Arguments
    ///
    /// * `url` - The requested URL
    /// * `page` - The fetched response
    /// * `host` - Host used to classify links
    pub fn from_page(url: &str, page: &FetchedPage, host: &str) -> Self {
        let document = Document::parse(&page.text());

        Self {
            url: url.to_string(),
            structure: extract_structure(&document),
            performance: analyze_performance(&document, page.body.len()),
            heading_counts: count_headings(&document),
            links: classify_links(&document, host),
            security: analyze_security(&page.headers, &page.cookies),
        }
    }
}

/// Renders the summarization request for an analyzed page
///
/// # Example
///
/// ```no_run
/// use parslink::inspector::{build_prompt, CrawlerFiles, PageAnalysis};
/// use parslink::report::TlsInfo;
///
/// # fn example(analysis: &PageAnalysis) {
/// let prompt = build_prompt(analysis, &CrawlerFiles::default(), &TlsInfo::failure("n/a"));
/// assert!(prompt.contains("6. "));
/// # }
/// ```
pub fn build_prompt(analysis: &PageAnalysis, files: &CrawlerFiles, tls: &TlsInfo) -> String {
    let structure = &analysis.structure;
    let performance = &analysis.performance;

    let mut prompt = String::new();

    // Writing into a String cannot fail
    let _ = writeln!(
        prompt,
        "Analyze the following website and provide a detailed assessment:"
    );
    let _ = writeln!(prompt, "URL: {}", analysis.url);
    let _ = writeln!(prompt, "Title: {}", structure.title);
    let _ = writeln!(prompt, "Description: {}", structure.description);
    let _ = writeln!(
        prompt,
        "Main content: {}...",
        truncate_chars(&structure.main_content, MAX_PROMPT_CONTENT_CHARS)
    );
    let _ = writeln!(prompt);

    let _ = writeln!(prompt, "Performance:");
    let _ = writeln!(prompt, "- Page size: {:.2} KB", performance.page_size_kb);
    let _ = writeln!(prompt, "- Scripts: {}", performance.script_count);
    let _ = writeln!(prompt, "- Stylesheets: {}", performance.style_count);
    let _ = writeln!(
        prompt,
        "- Images: {} ({} without alt text)",
        performance.images.len(),
        performance.images_missing_alt()
    );
    let _ = writeln!(prompt);

    let headings = HEADING_LEVELS
        .iter()
        .map(|tag| {
            format!(
                "{}={}",
                tag,
                analysis.heading_counts.get(*tag).copied().unwrap_or(0)
            )
        })
        .collect::<Vec<_>>()
        .join(", ");
    let _ = writeln!(prompt, "SEO:");
    let _ = writeln!(prompt, "- Headings: {}", headings);
    let _ = writeln!(prompt, "- Internal links: {}", analysis.links.internal.len());
    let _ = writeln!(prompt, "- External links: {}", analysis.links.external.len());
    let _ = writeln!(prompt, "- robots.txt: {}", present(files.robots_text.is_some()));
    let _ = writeln!(prompt, "- sitemap.xml: {}", present(files.sitemap_present));
    let _ = writeln!(prompt);

    let missing = analysis.security.missing_headers();
    let _ = writeln!(prompt, "Security:");
    let _ = writeln!(
        prompt,
        "- TLS certificate: {}",
        if tls.is_valid() { "valid" } else { "invalid" }
    );
    let _ = writeln!(
        prompt,
        "- Missing security headers: {}",
        if missing.is_empty() {
            "none".to_string()
        } else {
            missing.join(", ")
        }
    );
    let _ = writeln!(prompt);

    let _ = writeln!(prompt, "Please provide a structured analysis covering:");
    let _ = writeln!(prompt, "1. The main topic and purpose of the site");
    let _ = writeln!(prompt, "2. Key themes and sections");
    let _ = writeln!(prompt, "3. Target audience");
    let _ = writeln!(prompt, "4. Content quality and relevance");
    let _ = writeln!(prompt, "5. Performance and SEO recommendations");
    let _ = writeln!(prompt, "6. Security assessment");

    prompt
}

fn present(flag: bool) -> &'static str {
    if flag {
        "present"
    } else {
        "missing"
    }
}

/// Freezes all stage outputs into the final report
pub fn assemble_report(
    analysis: PageAnalysis,
    files: CrawlerFiles,
    tls: TlsInfo,
    load_time: Duration,
    model_id: String,
    summary_text: String,
) -> InspectionReport {
    let PageAnalysis {
        url,
        structure,
        performance,
        heading_counts,
        links,
        security,
    } = analysis;

    InspectionReport {
        url,
        title: structure.title,
        description: structure.description,
        keywords: structure.keywords,
        meta_tags: structure.meta_tags,
        performance,
        seo: SeoData {
            heading_counts,
            links,
            robots_text: files.robots_text,
            robots_allows_page: files.robots_allows_page,
            sitemap_present: files.sitemap_present,
        },
        security,
        tls,
        load_time_seconds: load_time.as_secs_f64(),
        timestamp: chrono::Local::now().to_rfc3339(),
        summary_model_id: model_id,
        summary_text,
    }
}
