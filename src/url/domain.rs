use url::Url;

/// Extracts the host from a URL
///
/// The host is lowercased and carries no port. Returns `None` for URLs
/// without a host, which `normalize_url` never produces.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use parslink::url::extract_host;
///
/// let url = Url::parse("https://EXAMPLE.com:8443/path").unwrap();
/// assert_eq!(extract_host(&url), Some("example.com".to_string()));
/// ```
pub fn extract_host(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

/// Returns `scheme://host[:port]` for a URL, without a trailing slash
///
/// Auxiliary files such as `robots.txt` are resolved against this base.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use parslink::url::base_url;
///
/// let url = Url::parse("https://example.com/blog/post?id=1").unwrap();
/// assert_eq!(base_url(&url), "https://example.com");
/// ```
pub fn base_url(url: &Url) -> String {
    url.origin().ascii_serialization()
}
