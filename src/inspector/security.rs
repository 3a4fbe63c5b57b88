//! Security headers and cookies of the primary response
//!
//! Headers are copied verbatim; no judgement is made about their values.

use crate::report::{SecurityData, SECURITY_HEADERS};
use reqwest::header::HeaderMap;
use std::collections::BTreeMap;

/// Builds the security section from the response headers and cookie jar
pub fn analyze_security(headers: &HeaderMap, cookies: &BTreeMap<String, String>) -> SecurityData {
    SecurityData {
        headers: collect_security_headers(headers),
        cookies: cookies.clone(),
    }
}

/// Reads the fixed set of security headers; every key is present
pub fn collect_security_headers(headers: &HeaderMap) -> BTreeMap<String, Option<String>> {
    SECURITY_HEADERS
        .iter()
        .map(|(key, header_name)| {
            let value = headers
                .get(*header_name)
                .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned());
            (key.to_string(), value)
        })
        .collect()
}
