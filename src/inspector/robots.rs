//! robots.txt evaluation using the robotstxt crate

use robotstxt::DefaultMatcher;

/// Checks whether `robots_txt` lets `user_agent` fetch `url`
///
/// An empty robots.txt allows everything.
///
/// # Arguments
///
/// * `robots_txt` - The raw robots.txt body
/// * `user_agent` - The user agent string sent with requests
/// * `url` - The absolute URL being checked
pub fn is_allowed(robots_txt: &str, user_agent: &str, url: &str) -> bool {
    if robots_txt.trim().is_empty() {
        return true;
    }

    let mut matcher = DefaultMatcher::default();
    matcher.one_agent_allowed_by_robots(robots_txt, user_agent, url)
}
