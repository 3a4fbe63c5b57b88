//! Console rendering of a report

use crate::output::{keyword_line, tls_status};
use crate::report::{InspectionReport, HEADING_LEVELS};

/// Prints a report to stdout
pub fn print_report(report: &InspectionReport) {
    print!("{}", format_report(report));
}

/// Formats a report for the console
///
/// # Arguments
///
/// * `report` - The finished report
///
/// # Returns
///
/// The rendered text, ending with a newline
pub fn format_report(report: &InspectionReport) -> String {
    let mut out = String::new();

    out.push_str("=== Parslink Inspection Report ===\n\n");

    out.push_str(&format!("  {:<14} {}\n", "URL:", report.url));
    out.push_str(&format!("  {:<14} {}\n", "Title:", report.title));
    out.push_str(&format!("  {:<14} {}\n", "Description:", report.description));
    out.push_str(&format!("  {:<14} {}\n", "Model:", report.summary_model_id));
    out.push_str(&format!(
        "  {:<14} {:.2} sec\n",
        "Load time:",
        report.load_time_seconds
    ));
    out.push_str(&format!("  {:<14} {}\n", "TLS:", tls_status(report)));
    if let Some(details) = report.tls.details() {
        out.push_str(&format!("  {:<14} {}\n", "Expires:", details.expires));
        out.push_str(&format!(
            "  {:<14} {} / {}\n",
            "Protocol:",
            details.protocol_version,
            details.cipher_suite
        ));
    }
    out.push('\n');

    out.push_str("Performance:\n");
    let performance = &report.performance;
    out.push_str(&format!("  Page size: {:.2} KB\n", performance.page_size_kb));
    out.push_str(&format!("  Scripts: {}\n", performance.script_count));
    out.push_str(&format!("  Stylesheets: {}\n", performance.style_count));
    out.push_str(&format!(
        "  Images: {} ({} without alt text)\n\n",
        performance.images.len(),
        performance.images_missing_alt()
    ));

    out.push_str("SEO:\n");
    let headings = HEADING_LEVELS
        .iter()
        .map(|tag| format!("{}={}", tag, report.seo.heading_count(tag)))
        .collect::<Vec<_>>()
        .join(", ");
    out.push_str(&format!("  Headings: {}\n", headings));
    out.push_str(&format!(
        "  Links: {} internal, {} external\n",
        report.seo.links.internal.len(),
        report.seo.links.external.len()
    ));
    out.push_str(&format!(
        "  robots.txt: {}\n",
        match (&report.seo.robots_text, report.seo.robots_allows_page) {
            (None, _) => "not found",
            (Some(_), Some(false)) => "found (page disallowed)",
            (Some(_), _) => "found",
        }
    ));
    out.push_str(&format!(
        "  sitemap.xml: {}\n\n",
        if report.seo.sitemap_present {
            "found"
        } else {
            "not found"
        }
    ));

    out.push_str("Security headers:\n");
    for (name, value) in &report.security.headers {
        out.push_str(&format!(
            "  {}: {}\n",
            name,
            value.as_deref().unwrap_or("missing")
        ));
    }
    if !report.security.cookies.is_empty() {
        let names: Vec<&str> = report.security.cookies.keys().map(String::as_str).collect();
        out.push_str(&format!("  Cookies: {}\n", names.join(", ")));
    }
    out.push('\n');

    out.push_str("Summary:\n");
    out.push_str(report.summary_text.trim_end());
    out.push_str("\n\n");

    out.push_str("Keywords:\n");
    out.push_str(&format!("  {}\n", keyword_line(&report.keywords)));

    out
}
