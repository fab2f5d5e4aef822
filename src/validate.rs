//! Format validators
//!
//! Shape checks for URLs, email addresses and hex hashes. Patterns are
//! compiled once into process-wide statics on first use.

use regex::Regex;
use std::sync::OnceLock;

/// Host, optional port and optional path; shared by both URL patterns.
const URL_TAIL: &str = r"[a-z0-9]([-a-z0-9.]*[a-z0-9])?\.[a-z]{2,10}(:\d{1,5})?(/.*)?$";

/// Dot-atom local part at an LDH domain.
/// See <http://www.regular-expressions.info/email.html>.
const EMAIL_PATTERN: &str = r"(?x)
    ^[a-zA-Z0-9!\#$%&'*+/=?^_`{|}~-]+
    (?:\.[a-zA-Z0-9!\#$%&'*+/=?^_`{|}~-]+)*
    @
    (?:[a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?\.)+
    [a-zA-Z0-9](?:[a-zA-Z0-9-]*[a-zA-Z0-9])?$";

fn url_any() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!("(?i)^((https?:)?//)?{URL_TAIL}")).expect("static pattern compiles")
    })
}

fn url_with_scheme() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(&format!("(?i)^https?://{URL_TAIL}")).expect("static pattern compiles")
    })
}

fn email() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("static pattern compiles"))
}

/// Whether `url` looks like a web URL. With `require_scheme` an explicit
/// `http://` or `https://` prefix is mandatory; otherwise both the scheme
/// and the leading `//` are optional.
///
/// ```
/// assert!(strkit::is_url("www.google.com", false));
/// assert!(!strkit::is_url("www.google.com", true));
/// ```
pub fn is_url(url: &str, require_scheme: bool) -> bool {
    if require_scheme {
        url_with_scheme().is_match(url)
    } else {
        url_any().is_match(url)
    }
}

/// Whether `email` is a plausible email address (dot-atom local part,
/// letter-digit-hyphen domain labels).
pub fn is_email(email_addr: &str) -> bool {
    email().is_match(email_addr)
}

/// Whether `hash` is exactly `length` hex digits, case-insensitive.
///
/// Takes a string only; callers holding an integer format it first
/// (`format!("{:x}", n)` or similar).
pub fn is_hash(hash: &str, length: usize) -> bool {
    hash.len() == length && hash.bytes().all(|b| b.is_ascii_hexdigit())
}
