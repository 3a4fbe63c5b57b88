//! Output module for presenting inspection reports
//!
//! This module handles:
//! - Printing a report to the console
//! - Exporting the full report as JSON
//! - Writing the short HTML report

mod console;
mod html;
mod json;

pub use console::{format_report, print_report};
pub use html::{format_html_report, write_html_report};
pub use json::{format_json_report, write_json_report};

use thiserror::Error;

/// Errors that can occur while writing a report
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("Failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize report: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Placeholder shown when the page declares no keywords
pub(crate) const NO_KEYWORDS: &str = "none found";

/// Human-readable TLS status: `Valid` or `Invalid (<error>)`
pub(crate) fn tls_status(report: &crate::report::InspectionReport) -> String {
    if report.tls.is_valid() {
        "Valid".to_string()
    } else {
        format!("Invalid ({})", report.tls.error().unwrap_or("unknown error"))
    }
}

/// Keywords joined with `, `, or the placeholder
pub(crate) fn keyword_line(keywords: &[String]) -> String {
    if keywords.is_empty() {
        NO_KEYWORDS.to_string()
    } else {
        keywords.join(", ")
    }
}
