//! Domain extraction from raw URL strings.

use std::sync::OnceLock;

use regex::Regex;

/// Optional scheme, optional userinfo, optional `www.`, then the host up to
/// the first port, path or query delimiter.
const DOMAIN_PATTERN: &str = r"^(?:(?i:https?)://)?(?:[^@\n]+@)?(?:www\.)?([^:/\n?]+)";

fn domain_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(DOMAIN_PATTERN).expect("regex is valid"))
}

/// Extract the domain a URL is aggregated under.
///
/// No validation is performed: malformed input yields a best-effort string,
/// and input with no host-like prefix yields `""`.
///
/// # Examples
///
/// ```
/// use analyzer_core::domain::extract_domain;
///
/// assert_eq!(extract_domain("https://www.rte.ie/news"), "rte.ie");
/// assert_eq!(extract_domain("bbc.com:8080/x"), "bbc.com");
/// assert_eq!(extract_domain("/relative/path"), "");
/// ```
pub fn extract_domain(url: &str) -> String {
    domain_regex()
        .captures(url)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}
