//! Email address rules for user records.
//!
//! Addresses are checked against a deliberately loose pattern (something,
//! `@`, something, `.`, something, with no whitespace) and stored
//! lowercased so the unique index behaves case-insensitively.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Pattern every accepted email must match.
pub const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Longest email accepted, in characters (RFC 5321 path limit).
pub const MAX_EMAIL_LEN: usize = 254;

/// Message returned to clients for any rejected email.
pub const INVALID_EMAIL_MESSAGE: &str = "Invalid email";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

/// Returns `true` if `s` looks like an email address.
pub fn is_valid_email(s: &str) -> bool {
    EMAIL_RE.is_match(s)
}

/// Canonical stored form: trimmed and lowercased.
pub fn normalize_email(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Validate a raw email from a request and return its normalized form.
///
/// The pattern is applied to the value as received, so leading or trailing
/// whitespace is rejected rather than silently trimmed.
pub fn validate_email(raw: Option<&str>) -> Result<String, CoreError> {
    let raw = raw.unwrap_or_default();
    if raw.is_empty() || raw.chars().count() > MAX_EMAIL_LEN || !is_valid_email(raw) {
        return Err(CoreError::Validation(INVALID_EMAIL_MESSAGE.to_string()));
    }
    Ok(normalize_email(raw))
}
