//! Short HTML report
//!
//! Only the headline values are rendered: URL, load time, TLS status,
//! keywords and description. The JSON export carries everything else.

use crate::output::{keyword_line, tls_status, OutputResult};
use crate::report::InspectionReport;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes the HTML report
///
/// # Arguments
///
/// * `report` - The finished report
/// * `output_path` - Destination file, created or truncated
pub fn write_html_report(report: &InspectionReport, output_path: &Path) -> OutputResult<()> {
    let html = format_html_report(report);

    let mut file = File::create(output_path)?;
    file.write_all(html.as_bytes())?;

    Ok(())
}

/// Renders the HTML report; every interpolated value is escaped
pub fn format_html_report(report: &InspectionReport) -> String {
    let url = escape_html(&report.url);
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str(&format!("<title>Parslink Report - {}</title>\n", url));
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("<h1>Site analysis: {}</h1>\n", url));

    html.push_str("<h2>Key metrics</h2>\n");
    html.push_str(&format!(
        "<p>Load time: {:.2} sec</p>\n",
        report.load_time_seconds
    ));
    html.push_str(&format!("<p>TLS: {}</p>\n", escape_html(&tls_status(report))));

    html.push_str("<h2>SEO</h2>\n");
    html.push_str(&format!(
        "<p>Keywords: {}</p>\n",
        escape_html(&keyword_line(&report.keywords))
    ));
    html.push_str(&format!(
        "<p>Description: {}</p>\n",
        escape_html(&report.description)
    ));

    html.push_str("</body>\n</html>\n");
    html
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
