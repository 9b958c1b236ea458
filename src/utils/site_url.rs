//! Site URL validation and input normalization.
//!
//! The landing form accepts whatever the visitor typed. Before submission the
//! value is completed with a default scheme (see [`with_default_scheme`]),
//! and on submission it must parse as an absolute HTTP(S) URL.

use url::Url;

const DEFAULT_SCHEME_PREFIX: &str = "https://";

/// Reasons a site URL is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SiteUrlError {
    #[error("Site URL is empty")]
    Empty,

    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed, got '{0}'")]
    UnsupportedScheme(String),
}

/// Parses `input` as an absolute `http`/`https` URL.
///
/// Parsing requires a non-empty host for both schemes, so `https://` alone
/// is rejected as [`SiteUrlError::InvalidFormat`].
///
/// # Errors
///
/// - [`SiteUrlError::Empty`] for blank input
/// - [`SiteUrlError::InvalidFormat`] when the string is not a URL
/// - [`SiteUrlError::UnsupportedScheme`] for `ftp:`, `javascript:`, `data:` and friends
pub fn validate_site_url(input: &str) -> Result<Url, SiteUrlError> {
    if input.trim().is_empty() {
        return Err(SiteUrlError::Empty);
    }

    let url = Url::parse(input).map_err(|e| SiteUrlError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(SiteUrlError::UnsupportedScheme(other.to_string())),
    }
}

/// Returns `true` when `input` is an absolute `http`/`https` URL.
pub fn is_valid_site_url(input: &str) -> bool {
    validate_site_url(input).is_ok()
}

/// Completes a typed value with `https://` when it has no HTTP(S) scheme.
///
/// Applied when the URL field loses focus. Blank values are returned as-is;
/// a value already starting with `http://` or `https://` (any case) is only
/// trimmed.
///
/// ```ignore
/// assert_eq!(with_default_scheme("example.ru"), "https://example.ru");
/// assert_eq!(with_default_scheme("HTTP://example.ru"), "HTTP://example.ru");
/// ```
pub fn with_default_scheme(input: &str) -> String {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return input.to_string();
    }

    if has_http_scheme(trimmed) {
        return trimmed.to_string();
    }

    format!("{DEFAULT_SCHEME_PREFIX}{trimmed}")
}

fn has_http_scheme(value: &str) -> bool {
    let starts_with_ci = |prefix: &str| {
        value
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    };

    starts_with_ci("http://") || starts_with_ci("https://")
}
