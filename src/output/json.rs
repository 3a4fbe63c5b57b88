//! JSON export of the full report

use crate::output::OutputResult;
use crate::report::InspectionReport;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Writes the report as pretty-printed JSON
///
/// # Arguments
///
/// * `report` - The finished report
/// * `output_path` - Destination file, created or truncated
pub fn write_json_report(report: &InspectionReport, output_path: &Path) -> OutputResult<()> {
    let json = format_json_report(report)?;

    let mut file = File::create(output_path)?;
    file.write_all(json.as_bytes())?;
    file.write_all(b"\n")?;

    Ok(())
}

/// Serializes the report to pretty JSON with camelCase keys
pub fn format_json_report(report: &InspectionReport) -> OutputResult<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
