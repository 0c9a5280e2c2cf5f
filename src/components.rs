//! Decomposition of URL text into head, query, and fragment.
//!
//! The head is everything before the first `?` or `#`: scheme, authority,
//! and path, left undivided. A query exists only when that first separator
//! is `?`, and runs up to the first `#`. The fragment is everything after
//! the first `#`.

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{FRAGMENT_SEPARATOR, QUERY_SEPARATOR};

static COMPONENTS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)^(?P<head>[^?#]*)(?:\?(?P<query>[^#]*))?(?:#(?P<fragment>.*))?$")
        .expect("component pattern is valid")
});

/// Borrowed view of the three top-level parts of a URL string.
///
/// `None` means the separator is absent; `Some("")` means the separator is
/// present with nothing after it. Joining the parts reproduces the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Components<'a> {
    pub head: &'a str,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

impl<'a> Components<'a> {
    pub fn split(text: &'a str) -> Self {
        COMPONENTS.captures(text).map_or(
            Self {
                head: text,
                query: None,
                fragment: None,
            },
            |caps| Self {
                head: caps.name("head").map_or("", |m| m.as_str()),
                query: caps.name("query").map(|m| m.as_str()),
                fragment: caps.name("fragment").map(|m| m.as_str()),
            },
        )
    }

    pub fn join(&self) -> String {
        let capacity = self.head.len()
            + self.query.map_or(0, |q| q.len() + 1)
            + self.fragment.map_or(0, |f| f.len() + 1);
        let mut result = String::with_capacity(capacity);
        result.push_str(self.head);

        if let Some(query) = self.query {
            result.push(QUERY_SEPARATOR);
            result.push_str(query);
        }

        if let Some(fragment) = self.fragment {
            result.push(FRAGMENT_SEPARATOR);
            result.push_str(fragment);
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_full_url() {
        let parts = Components::split("https://x.com/a?b=1&c=2#top");
        assert_eq!(parts.head, "https://x.com/a");
        assert_eq!(parts.query, Some("b=1&c=2"));
        assert_eq!(parts.fragment, Some("top"));
    }

    #[test]
    fn split_without_query_or_fragment() {
        let parts = Components::split("https://x.com/a");
        assert_eq!(parts.head, "https://x.com/a");
        assert_eq!(parts.query, None);
        assert_eq!(parts.fragment, None);
    }

    #[test]
    fn empty_query_is_distinct_from_missing() {
        let parts = Components::split("http://x/?#frag");
        assert_eq!(parts.query, Some(""));
        assert_eq!(parts.fragment, Some("frag"));
    }

    #[test]
    fn question_mark_inside_fragment_is_not_a_query() {
        let parts = Components::split("http://x/#a?b=1");
        assert_eq!(parts.query, None);
        assert_eq!(parts.fragment, Some("a?b=1"));
    }

    #[test]
    fn second_question_mark_stays_in_query() {
        let parts = Components::split("http://x/?a=?&b");
        assert_eq!(parts.query, Some("a=?&b"));
    }

    #[test]
    fn join_reproduces_input() {
        for input in [
            "",
            "http://x",
            "http://x/?",
            "http://x/#",
            "http://x/?a=1#f#g",
            "line\nbreak?q=1#frag\nment",
        ] {
            assert_eq!(Components::split(input).join(), input);
        }
    }
}
