use crate::UrlError;
use url::Url;

/// Adds `https://` to a URL that has no `http://` or `https://` prefix
///
/// Applying it twice gives the same result as applying it once.
///
/// # Examples
///
/// ```
/// use parslink::url::ensure_scheme;
///
/// assert_eq!(ensure_scheme("example.com"), "https://example.com");
/// assert_eq!(ensure_scheme("http://example.com"), "http://example.com");
/// assert_eq!(ensure_scheme(&ensure_scheme("example.com")), "https://example.com");
/// ```
pub fn ensure_scheme(raw: &str) -> String {
    let raw = raw.trim();
    if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("https://{}", raw)
    }
}

/// Normalizes an inspection target into a parsed URL
///
/// # Normalization Steps
///
/// 1. Trim surrounding whitespace
/// 2. Prepend `https://` when no HTTP(S) scheme is present
/// 3. Parse the URL; reject if malformed
/// 4. Reject URLs without a host
///
/// Path, query and fragment are kept as given: the fetched page must be the
/// page the caller asked for.
///
/// # Examples
///
/// ```
/// use parslink::url::normalize_url;
///
/// let url = normalize_url("example.com/about").unwrap();
/// assert_eq!(url.as_str(), "https://example.com/about");
/// ```
pub fn normalize_url(raw: &str) -> Result<Url, UrlError> {
    let with_scheme = ensure_scheme(raw);

    let url = Url::parse(&with_scheme).map_err(|e| UrlError::Parse(e.to_string()))?;

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(url),
        _ => Err(UrlError::MissingHost),
    }
}
