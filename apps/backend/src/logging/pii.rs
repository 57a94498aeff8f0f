//! Redaction helpers for values that must not reach logs verbatim.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

// Vetted literals; a failure here is a programming error caught by the tests below.
#[allow(clippy::unwrap_used)]
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap());

#[allow(clippy::unwrap_used)]
static OPAQUE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[A-Za-z0-9+/_.-]{24,}={0,2}").unwrap());

/// Mask emails and long opaque tokens (JWTs, hashes) in free text.
///
/// Emails keep the first character of the local part and the full domain.
pub fn redact(input: &str) -> String {
    let emails_masked = EMAIL.replace_all(input, |caps: &regex::Captures| {
        let full = &caps[0];
        match full.split_once('@') {
            Some((local, domain)) if !local.is_empty() => {
                format!("{}***@{domain}", &local[..1])
            }
            _ => full.to_string(),
        }
    });

    OPAQUE_TOKEN
        .replace_all(&emails_masked, "[REDACTED_TOKEN]")
        .into_owned()
}

/// Shorten an identity-provider subject to a loggable prefix.
pub fn redact_sub(sub: &str) -> String {
    let prefix: String = sub.chars().take(4).collect();
    if prefix.chars().count() == sub.chars().count() {
        "*".repeat(prefix.chars().count())
    } else {
        format!("{prefix}***")
    }
}

/// Display wrapper that applies [`redact`] when formatted.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}
