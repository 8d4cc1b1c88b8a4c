//! Validators, normalizers and URI builders referenced by the link table.

use linkcard_rfc::rfc::uri;

use super::rule::{LinkContext, Normalized};

/// Fewest digits accepted for a mobile number.
pub(super) const MOBILE_MIN_DIGITS: usize = 8;
/// Fewest digits accepted for a landline number.
pub(super) const LANDLINE_MIN_DIGITS: usize = 6;

pub(super) const MAPS_SEARCH_BASE: &str = "https://www.google.com/maps/search/";

// Validators

pub(super) fn accept_any(_value: &str) -> bool {
    true
}

pub(super) fn looks_like_email(value: &str) -> bool {
    value.contains('@')
}

pub(super) fn contains_digit(value: &str) -> bool {
    value.chars().any(|c| c.is_ascii_digit())
}

// Normalizers

pub(super) fn keep_as_is(value: &str, _ctx: &LinkContext) -> Option<Normalized> {
    Some(Normalized::new(value))
}

pub(super) fn digits_only(value: &str, _ctx: &LinkContext) -> Option<Normalized> {
    Some(Normalized::new(extract_digits(value)))
}

pub(super) fn strip_handle_prefix(value: &str, _ctx: &LinkContext) -> Option<Normalized> {
    Some(Normalized::new(value.trim_start_matches('@').trim()))
}

pub(super) fn mobile_number(value: &str, ctx: &LinkContext) -> Option<Normalized> {
    phone_number(value, ctx, MOBILE_MIN_DIGITS)
}

pub(super) fn landline_number(value: &str, ctx: &LinkContext) -> Option<Normalized> {
    phone_number(value, ctx, LANDLINE_MIN_DIGITS)
}

/// Reduces a phone number to international digits.
///
/// A leading `+` (optionally behind a `tel:` scheme) marks the number as
/// already international. Otherwise the context's default country code is
/// prefixed and reported back; without one the number is rejected.
fn phone_number(value: &str, ctx: &LinkContext, min_digits: usize) -> Option<Normalized> {
    let value = strip_tel_scheme(value).trim_start();
    let digits = extract_digits(value);
    if digits.len() < min_digits {
        return None;
    }

    if value.starts_with('+') {
        return Some(Normalized::new(digits));
    }

    let country_code = ctx.default_country_code.as_deref()?;
    Some(Normalized {
        value: format!("{country_code}{digits}"),
        assumed_country_code: Some(country_code.to_string()),
    })
}

fn strip_tel_scheme(value: &str) -> &str {
    match value.get(..uri::TEL_SCHEME.len()) {
        Some(head) if head.eq_ignore_ascii_case(uri::TEL_SCHEME) => &value[uri::TEL_SCHEME.len()..],
        _ => value,
    }
}

fn extract_digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

// Builders

pub(super) fn tel(digits: &str) -> String {
    uri::tel_uri(digits)
}

pub(super) fn mailto(address: &str) -> String {
    uri::mailto_uri(address)
}

pub(super) fn whatsapp(digits: &str) -> String {
    format!("https://wa.me/{digits}")
}

pub(super) fn telegram(handle: &str) -> String {
    format!("https://t.me/{handle}")
}

pub(super) fn snapchat(handle: &str) -> String {
    format!("https://www.snapchat.com/add/{handle}")
}

pub(super) fn pinterest(handle: &str) -> String {
    format!("https://www.pinterest.com/{handle}/")
}

pub(super) fn github(handle: &str) -> String {
    format!("https://github.com/{handle}")
}

pub(super) fn youtube(handle: &str) -> String {
    format!("https://www.youtube.com/@{handle}")
}

pub(super) fn instagram(handle: &str) -> String {
    format!("https://www.instagram.com/{handle}")
}

pub(super) fn twitter(handle: &str) -> String {
    format!("https://twitter.com/{handle}")
}

pub(super) fn website(value: &str) -> String {
    uri::ensure_https(value)
}

pub(super) fn maps_search(address: &str) -> String {
    uri::with_query(MAPS_SEARCH_BASE, &[("api", "1"), ("query", address)]).unwrap_or_default()
}

pub(super) fn facebook(value: &str) -> String {
    profile_or_url("https://www.facebook.com/", value)
}

pub(super) fn linkedin(value: &str) -> String {
    profile_or_url("https://www.linkedin.com/in/", value)
}

fn profile_or_url(base: &str, value: &str) -> String {
    if uri::has_http_scheme(value) {
        value.to_string()
    } else {
        format!("{base}{value}")
    }
}
