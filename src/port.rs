//! Scheme and port resolution.
//!
//! Neither lookup decomposes the authority. The scheme is the alphanumeric
//! token before a leading `://`. The explicit port is the first `:` followed
//! by one to five digits anywhere in the text, so a `:NNNN` shaped substring
//! in a path or query is also picked up when no authority port precedes it.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::DEFAULT_PORTS;

static SCHEME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<scheme>[A-Za-z0-9]*)://").expect("scheme pattern is valid")
});

static EXPLICIT_PORT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r":(?P<port>[0-9]{1,5})").expect("port pattern is valid"));

/// Returns the scheme token at the start of `text`, or `""` if there is none.
pub(crate) fn scheme_of(text: &str) -> &str {
    SCHEME
        .captures(text)
        .and_then(|caps| caps.name("scheme"))
        .map_or("", |m| m.as_str())
}

/// Returns the byte length of the leading `scheme://` token, if present.
pub(crate) fn scheme_prefix_len(text: &str) -> Option<usize> {
    SCHEME.find(text).map(|m| m.end())
}

/// Returns the first `:port` token in `text`.
///
/// The matched digits are returned as written, so a five-digit token above
/// 65535 is still reported rather than treated as absent.
pub(crate) fn explicit_port_of(text: &str) -> Option<u32> {
    EXPLICIT_PORT
        .captures(text)
        .and_then(|caps| caps.name("port"))
        .and_then(|m| m.as_str().parse().ok())
}

/// Returns the well-known port for `scheme`, ignoring ASCII case.
///
/// # Examples
///
/// ```
/// use url_helper::default_port;
///
/// assert_eq!(default_port("https"), Some(443));
/// assert_eq!(default_port("NTP"), Some(123));
/// assert_eq!(default_port("gopher"), None);
/// ```
#[must_use]
pub fn default_port(scheme: &str) -> Option<u16> {
    DEFAULT_PORTS
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(scheme))
        .map(|&(_, port)| port)
}
