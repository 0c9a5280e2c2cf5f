//! Query string codec.
//!
//! Values are decoded to the narrowest matching type: an all-digit value is
//! an integer, any other numeric literal is a float, and everything else is a
//! percent-decoded string. Parameter names are matched literally against the
//! raw query text.

use std::fmt;
use std::sync::LazyLock;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use regex::Regex;

use crate::constants::{PAIR_SEPARATOR, VALUE_SEPARATOR};

/// Characters left unescaped by [`encode_component`]: ASCII alphanumerics and `-_.`.
const FORM_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.');

static INTEGER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+$").expect("integer pattern is valid"));

static NUMERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$")
        .expect("numeric pattern is valid")
});

/// A decoded query parameter value.
///
/// A parameter written without `=` (a bare flag such as `?debug`) has no
/// value at all and is represented as `None` by the accessors that return
/// `Option<QueryValue>`.
///
/// # Examples
///
/// ```
/// use url_helper::{QueryValue, Url};
///
/// let url = Url::new("https://example.com/?page=2&pi=3.141&q=hello%20world");
/// assert_eq!(url.query_parameter("page"), Some(QueryValue::Int(2)));
/// assert_eq!(url.query_parameter("pi"), Some(QueryValue::Float(3.141)));
/// assert_eq!(url.query_parameter("q"), Some(QueryValue::Str("hello world".into())));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum QueryValue {
    /// Digits only.
    Int(i64),
    /// Numeric literal with a sign, decimal point, or exponent.
    Float(f64),
    /// Anything else, percent-decoded.
    Str(String),
}

impl QueryValue {
    /// Returns the integer value, if this is an `Int`.
    #[must_use]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the value as a float, widening an `Int`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            Self::Str(_) => None,
        }
    }

    /// Returns the string value, if this is a `Str`.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// Query parameters of a URL, in the order their names first appear.
///
/// Repeated names collapse onto their first position and carry the value of
/// the first `name=value` occurrence.
///
/// # Examples
///
/// ```
/// use url_helper::{QueryValue, Url};
///
/// let params = Url::new("http://x/?b=2&a=1&flag").all_query_parameters();
/// let names: Vec<_> = params.keys().collect();
/// assert_eq!(names, ["b", "a", "flag"]);
/// assert_eq!(params.get("a"), Some(&QueryValue::Int(1)));
/// assert!(params.contains("flag"));
/// assert_eq!(params.get("flag"), None);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QueryParams {
    params: Vec<(String, Option<QueryValue>)>,
}

impl QueryParams {
    /// Creates an empty parameter list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects the parameters of a raw query string (without leading `?`).
    pub(crate) fn from_query(query: &str) -> Self {
        let mut params = Self::new();

        for pair in query.split(PAIR_SEPARATOR).filter(|pair| !pair.is_empty()) {
            let name = pair_name(pair);
            if params.contains(name) {
                continue;
            }
            let value = raw_value(query, name).map(decode_value);
            params.params.push((name.to_string(), value));
        }

        params
    }

    /// Returns the value for `name`.
    ///
    /// `None` covers both a missing name and a bare flag; use
    /// [`contains`](Self::contains) to tell them apart.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&QueryValue> {
        self.params
            .iter()
            .find(|(key, _)| key == name)
            .and_then(|(_, value)| value.as_ref())
    }

    /// Returns true if `name` appears in the query, with or without a value.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.params.iter().any(|(key, _)| key == name)
    }

    /// Returns the parameter names in query order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.params.iter().map(|(key, _)| key.as_str())
    }

    /// Returns the parameters in query order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Option<&QueryValue>)> {
        self.params
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_ref()))
    }

    /// Returns the number of distinct parameter names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns true if there are no parameters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}

impl IntoIterator for QueryParams {
    type Item = (String, Option<QueryValue>);
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.params.into_iter()
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for QueryParams {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.params.len()))?;
        for (key, value) in &self.params {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Returns the name part of a `name=value` pair, or the whole pair for a bare flag.
pub(crate) fn pair_name(pair: &str) -> &str {
    pair.split_once(VALUE_SEPARATOR).map_or(pair, |(name, _)| name)
}

/// Returns the raw value of the first `name=value` pair in `query`.
pub(crate) fn raw_value<'a>(query: &'a str, name: &str) -> Option<&'a str> {
    query.split(PAIR_SEPARATOR).find_map(|pair| {
        pair.split_once(VALUE_SEPARATOR)
            .filter(|(key, _)| *key == name)
            .map(|(_, value)| value)
    })
}

/// Decodes a raw query value into its narrowest type.
pub(crate) fn decode_value(raw: &str) -> QueryValue {
    if INTEGER.is_match(raw) {
        if let Ok(int) = raw.parse() {
            return QueryValue::Int(int);
        }
    }

    if NUMERIC.is_match(raw) {
        if let Ok(float) = raw.parse() {
            return QueryValue::Float(float);
        }
    }

    QueryValue::Str(decode_component(raw))
}

/// Percent-decodes a form component, reading `+` as a space.
///
/// Invalid UTF-8 after decoding is replaced with U+FFFD.
pub(crate) fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    percent_decode_str(&spaced).decode_utf8_lossy().into_owned()
}

/// Percent-encodes a form component, writing a space as `+`.
pub(crate) fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, FORM_COMPONENT)
        .to_string()
        .replace("%20", "+")
}
