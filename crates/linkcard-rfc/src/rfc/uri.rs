//! Deep link URI formatting.
//!
//! ## Summary
//! Small formatters for the URI schemes the link table emits: `tel:` (RFC 3966),
//! `mailto:` (RFC 6068) and plain `https` web URLs.

use url::Url;

pub const TEL_SCHEME: &str = "tel:";
pub const MAILTO_SCHEME: &str = "mailto:";
pub const HTTPS_PREFIX: &str = "https://";
pub const HTTP_PREFIX: &str = "http://";

/// Formats a global `tel:` URI from an E.164 digit string (without the `+`).
#[must_use]
pub fn tel_uri(digits: &str) -> String {
    format!("{TEL_SCHEME}+{digits}")
}

/// Formats a `mailto:` URI. The address is written as given.
#[must_use]
pub fn mailto_uri(address: &str) -> String {
    format!("{MAILTO_SCHEME}{address}")
}

/// Returns true if the value starts with `http://` or `https://`, ignoring case.
#[must_use]
pub fn has_http_scheme(value: &str) -> bool {
    starts_with_ignore_case(value, HTTP_PREFIX) || starts_with_ignore_case(value, HTTPS_PREFIX)
}

/// Prefixes `https://` unless the value already carries an http(s) scheme.
#[must_use]
pub fn ensure_https(value: &str) -> String {
    if has_http_scheme(value) {
        value.to_string()
    } else {
        format!("{HTTPS_PREFIX}{value}")
    }
}

/// Appends form-encoded query pairs to a base URL.
///
/// Returns `None` if the base is not an absolute URL.
#[must_use]
pub fn with_query(base: &str, pairs: &[(&str, &str)]) -> Option<String> {
    Url::parse_with_params(base, pairs).ok().map(String::from)
}

fn starts_with_ignore_case(value: &str, prefix: &str) -> bool {
    value
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
}
