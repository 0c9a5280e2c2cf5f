//! Main URL value type.

use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt;
use std::ops::Deref;
use std::str::FromStr;

use tracing::trace;

use crate::components::Components;
use crate::constants::{PAIR_SEPARATOR, QUERY_SEPARATOR, SCHEME_DELIMITER, VALUE_SEPARATOR};
use crate::port::{default_port, explicit_port_of, scheme_of, scheme_prefix_len};
use crate::query::{
    QueryParams, QueryValue, decode_component, decode_value, encode_component, pair_name,
    raw_value,
};

/// An immutable, string-backed URL.
///
/// The text is kept verbatim and is never validated. Accessors derive the
/// scheme, port, query, and fragment from it on demand, and every edit
/// returns a new `Url`, leaving the original untouched.
///
/// # Structure
///
/// ```text
/// scheme://host[:port][/path][?query][#fragment]
/// ```
///
/// # Examples
///
/// ```
/// use url_helper::{QueryValue, Url};
///
/// let url = Url::new("http://example.com/?bar=baz");
/// let url = url.add_query_parameter("foo", "bar");
/// assert_eq!(url.as_str(), "http://example.com/?bar=baz&foo=bar");
///
/// let url = url.remove_query_parameter("bar").set_fragment(Some("top"));
/// assert_eq!(url.as_str(), "http://example.com/?foo=bar#top");
/// assert_eq!(url.query_parameter("foo"), Some(QueryValue::Str("bar".into())));
/// assert_eq!(url.port_or_default(), Some(80));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Url {
    text: String,
}

impl Url {
    /// Wraps `text` as a URL. Never fails; malformed input simply yields
    /// empty or `None` results from the accessors.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    /// Returns the URL text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Consumes the URL and returns its text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.text
    }

    fn components(&self) -> Components<'_> {
        Components::split(&self.text)
    }

    // ------------------------------------------------------------------
    // Scheme and port
    // ------------------------------------------------------------------

    /// Returns the scheme, or `""` when the text has no leading `scheme://`.
    ///
    /// The scheme is returned as written; it is not lower-cased.
    #[must_use]
    pub fn scheme(&self) -> &str {
        scheme_of(&self.text)
    }

    /// Returns the port written in the URL, if any.
    ///
    /// This is the first `:` followed by up to five digits anywhere in the
    /// text, not only in the authority. The digits are not range-checked, so
    /// `:99999` yields `Some(99999)`.
    #[must_use]
    pub fn explicit_port(&self) -> Option<u32> {
        explicit_port_of(&self.text)
    }

    /// Returns the well-known port of the scheme, ignoring case.
    ///
    /// # Examples
    ///
    /// ```
    /// use url_helper::Url;
    ///
    /// assert_eq!(Url::new("NTP://x/path").default_port_for_scheme(), Some(123));
    /// assert_eq!(Url::new("custom://x").default_port_for_scheme(), None);
    /// ```
    #[must_use]
    pub fn default_port_for_scheme(&self) -> Option<u16> {
        default_port(self.scheme())
    }

    /// Returns the explicit port unless it is implied by the scheme.
    ///
    /// A port equal to the scheme's default is suppressed.
    ///
    /// # Examples
    ///
    /// ```
    /// use url_helper::Url;
    ///
    /// assert_eq!(Url::new("https://example.com/path").port(), None);
    /// assert_eq!(Url::new("https://example.com:443/path").port(), None);
    /// assert_eq!(Url::new("https://example.com:8443/path").port(), Some(8443));
    /// ```
    #[must_use]
    pub fn port(&self) -> Option<u32> {
        let explicit = self.explicit_port();
        if explicit == self.default_port_for_scheme().map(u32::from) {
            return None;
        }
        explicit
    }

    /// Returns the explicit port, falling back to the scheme's default.
    ///
    /// The default is only used when no port token is written at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use url_helper::Url;
    ///
    /// assert_eq!(Url::new("https://example.com/path").port_or_default(), Some(443));
    /// assert_eq!(Url::new("https://example.com:8443").port_or_default(), Some(8443));
    /// assert_eq!(Url::new("gopher://example.com").port_or_default(), None);
    /// ```
    #[must_use]
    pub fn port_or_default(&self) -> Option<u32> {
        self.explicit_port()
            .or_else(|| self.default_port_for_scheme().map(u32::from))
    }

    /// Returns a new URL with its leading scheme replaced.
    ///
    /// A URL without a scheme gets one prepended. An empty `scheme` removes
    /// the leading `scheme://` token.
    #[must_use]
    pub fn with_scheme(&self, scheme: &str) -> Self {
        trace!(url = %self.text, scheme, "replacing scheme");
        let rest = scheme_prefix_len(&self.text)
            .and_then(|len| self.text.get(len..))
            .unwrap_or(&self.text);

        if scheme.is_empty() {
            return Self::new(rest);
        }
        Self::new(format!("{scheme}{SCHEME_DELIMITER}{rest}"))
    }

    // ------------------------------------------------------------------
    // Query
    // ------------------------------------------------------------------

    /// Returns the raw query string without its leading `?`.
    ///
    /// `Some("")` means the URL ends its head with a bare `?`.
    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.components().query
    }

    /// Returns every query parameter, in the order names first appear.
    ///
    /// Each value is decoded as by [`query_parameter`](Self::query_parameter).
    #[must_use]
    pub fn all_query_parameters(&self) -> QueryParams {
        self.query().map_or_else(QueryParams::new, QueryParams::from_query)
    }

    /// Returns the decoded value of the first `name=value` pair.
    ///
    /// Returns `None` when `name` is absent or only present as a bare flag.
    /// An empty value (`name=`) is `Some(QueryValue::Str(""))`.
    ///
    /// # Examples
    ///
    /// ```
    /// use url_helper::{QueryValue, Url};
    ///
    /// let url = Url::new("http://x/?int=3&empty=&null#frag");
    /// assert_eq!(url.query_parameter("int"), Some(QueryValue::Int(3)));
    /// assert_eq!(url.query_parameter("empty"), Some(QueryValue::Str(String::new())));
    /// assert_eq!(url.query_parameter("null"), None);
    /// assert_eq!(url.query_parameter("missing"), None);
    /// ```
    #[must_use]
    pub fn query_parameter(&self, name: &str) -> Option<QueryValue> {
        self.query()
            .and_then(|query| raw_value(query, name))
            .map(decode_value)
    }

    /// Returns a new URL with `name=value` appended to the query.
    ///
    /// Name and value are percent-encoded. The pair is always appended, even
    /// if `name` is already present, and any fragment is kept.
    #[must_use]
    pub fn add_query_parameter(&self, name: &str, value: impl fmt::Display) -> Self {
        trace!(url = %self.text, name, "adding query parameter");
        let parts = self.components();
        let pair = format!(
            "{}{VALUE_SEPARATOR}{}",
            encode_component(name),
            encode_component(&value.to_string())
        );

        let query = match parts.query {
            Some(existing) if !existing.is_empty() => {
                format!("{existing}{PAIR_SEPARATOR}{pair}")
            }
            _ => pair,
        };

        Self::new(
            Components {
                query: Some(&query),
                ..parts
            }
            .join(),
        )
    }

    /// Returns a new URL without any `name` parameter.
    ///
    /// Every `name=value` pair and every bare `name` flag is removed together
    /// with its adjacent `&`, and runs of `&` left in the query collapse to
    /// one. A query left empty loses its `?`, so `http://x/?a=1#f` becomes
    /// `http://x/#f`.
    #[must_use]
    pub fn remove_query_parameter(&self, name: &str) -> Self {
        trace!(url = %self.text, name, "removing query parameter");
        self.retain_query_pairs(|pair| pair_name(pair) != name)
    }

    /// Returns a new URL with every query parameter removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use url_helper::Url;
    ///
    /// let url = Url::new("https://x?query=123&other=1243#test=123");
    /// assert_eq!(url.clear_query().as_str(), "https://x#test=123");
    /// ```
    #[must_use]
    pub fn clear_query(&self) -> Self {
        trace!(url = %self.text, "clearing query");
        self.all_query_parameters()
            .keys()
            .fold(self.clone(), |url, name| url.remove_query_parameter(name))
            .retain_query_pairs(|_| true)
    }

    /// Returns a new URL whose query is replaced by `query`.
    ///
    /// Pairs are split on `&` and `=`, percent-decoded, and re-added through
    /// [`add_query_parameter`](Self::add_query_parameter), so the result is
    /// encoded consistently. A leading `?` is ignored and an empty `query`
    /// removes the query entirely. A bare name becomes `name=`.
    ///
    /// # Examples
    ///
    /// ```
    /// use url_helper::Url;
    ///
    /// let url = Url::new("http://x/?old=1#top");
    /// assert_eq!(url.with_query("a=1&b=two%20words").as_str(), "http://x/?a=1&b=two+words#top");
    /// assert_eq!(url.with_query("").as_str(), "http://x/#top");
    /// ```
    #[must_use]
    pub fn with_query(&self, query: &str) -> Self {
        trace!(url = %self.text, query, "replacing query");
        let query = query.strip_prefix(QUERY_SEPARATOR).unwrap_or(query);

        query
            .split(PAIR_SEPARATOR)
            .filter(|pair| !pair.is_empty())
            .fold(self.clear_query(), |url, pair| {
                let (name, value) = pair.split_once(VALUE_SEPARATOR).unwrap_or((pair, ""));
                url.add_query_parameter(&decode_component(name), decode_component(value))
            })
    }

    /// Rebuilds the query from the non-empty pairs accepted by `keep`.
    ///
    /// An empty result drops the query along with its `?`.
    fn retain_query_pairs(&self, keep: impl Fn(&str) -> bool) -> Self {
        let parts = self.components();
        let Some(existing) = parts.query else {
            return self.clone();
        };

        let separator = PAIR_SEPARATOR.to_string();
        let kept: Vec<&str> = existing
            .split(PAIR_SEPARATOR)
            .filter(|&pair| !pair.is_empty() && keep(pair))
            .collect();
        let query = kept.join(separator.as_str());

        Self::new(
            Components {
                query: (!query.is_empty()).then_some(query.as_str()),
                ..parts
            }
            .join(),
        )
    }

    // ------------------------------------------------------------------
    // Fragment
    // ------------------------------------------------------------------

    /// Returns the fragment without its leading `#`.
    #[must_use]
    pub fn fragment(&self) -> Option<&str> {
        self.components().fragment
    }

    /// Returns a new URL with its fragment replaced.
    ///
    /// Everything from the first `#` is dropped; `Some(value)` then appends
    /// `#value`. `Some("")` leaves a bare `#`.
    #[must_use]
    pub fn set_fragment(&self, fragment: Option<&str>) -> Self {
        trace!(url = %self.text, ?fragment, "setting fragment");
        Self::new(
            Components {
                fragment,
                ..self.components()
            }
            .join(),
        )
    }

    /// Returns a new URL with the given fragment, or none if it is empty.
    #[must_use]
    pub fn with_fragment(&self, fragment: &str) -> Self {
        self.set_fragment((!fragment.is_empty()).then_some(fragment))
    }

    /// Returns a new URL with everything from the first `#` removed.
    #[must_use]
    pub fn clear_fragment(&self) -> Self {
        self.set_fragment(None)
    }

    // ------------------------------------------------------------------
    // Trailing slash
    // ------------------------------------------------------------------

    /// Returns a new URL with one trailing `/` removed, if the text ends in one.
    #[must_use]
    pub fn trim_trailing_slash(&self) -> Self {
        trace!(url = %self.text, "trimming trailing slash");
        Self::new(self.text.strip_suffix('/').unwrap_or(&self.text))
    }

    /// Returns a new URL with `/` appended.
    ///
    /// This is a raw append: calling it twice yields two slashes.
    #[must_use]
    pub fn append_trailing_slash(&self) -> Self {
        trace!(url = %self.text, "appending trailing slash");
        Self::new(format!("{}/", self.text))
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl FromStr for Url {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

impl From<&str> for Url {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Url {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<Url> for String {
    fn from(url: Url) -> Self {
        url.text
    }
}

impl AsRef<str> for Url {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl Deref for Url {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.text
    }
}

impl PartialOrd for Url {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Url {
    fn cmp(&self, other: &Self) -> Ordering {
        self.text.cmp(&other.text)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Url {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.text)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Url {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer).map(Self::new)
    }
}
