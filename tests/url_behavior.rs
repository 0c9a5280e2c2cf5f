//! Behavioural tests for the URL value type.
//!
//! Covers the documented edit sequences end to end, one scenario per test.

#![allow(clippy::approx_constant)]

use url_helper::{HierarchicalComponents, QueryValue, Url, UrlError};

#[test]
fn edit_sequence() {
    let url = Url::new("http://example.com/?bar=baz");

    let url = url.add_query_parameter("foo", "bar");
    assert_eq!(url.as_str(), "http://example.com/?bar=baz&foo=bar");

    let url = url.remove_query_parameter("bar");
    assert_eq!(url.as_str(), "http://example.com/?foo=bar");

    let url = url.remove_query_parameter("foo");
    assert_eq!(url.as_str(), "http://example.com/");

    let url = url.trim_trailing_slash();
    assert_eq!(url.as_str(), "http://example.com");

    let url = url.append_trailing_slash();
    assert_eq!(url.as_str(), "http://example.com/");

    let url = url.append_trailing_slash();
    assert_eq!(url.as_str(), "http://example.com//");

    let url = url.set_fragment(Some("some=test"));
    assert_eq!(url.as_str(), "http://example.com//#some=test");

    let url = url.set_fragment(Some("title"));
    assert_eq!(url.as_str(), "http://example.com//#title");

    let url = url.clear_fragment();
    assert_eq!(url.as_str(), "http://example.com//");

    let url = url.set_fragment(Some("title2"));
    assert_eq!(url.as_str(), "http://example.com//#title2");

    let url = url.set_fragment(None);
    assert_eq!(url.as_str(), "http://example.com//");
}

#[test]
fn query_parameter_values() {
    let cases = [
        ("http://example.com/?bar=baz&foo=bar", "bar", Some(QueryValue::Str("baz".into()))),
        ("http://example.com/?bar=baz&foo=bar", "foo", Some(QueryValue::Str("bar".into()))),
        ("http://example.com/?pi=3.141", "pi", Some(QueryValue::Float(3.141))),
        ("http://example.com/?int=3", "int", Some(QueryValue::Int(3))),
        ("http://example.com/?empty=", "empty", Some(QueryValue::Str(String::new()))),
        ("http://example.com/?null", "null", None),
        ("http://example.com/?a=1", "missing", None),
        ("http://example.com/?a=1#b=2", "b", None),
    ];

    for (url, key, expected) in cases {
        assert_eq!(Url::new(url).query_parameter(key), expected, "{url} / {key}");
    }
}

#[test]
fn all_query_parameters_are_ordered_and_typed() {
    let params = Url::new("http://x/?a=1&b=2").all_query_parameters();
    let items: Vec<_> = params.into_iter().collect();
    assert_eq!(
        items,
        vec![
            ("a".to_string(), Some(QueryValue::Int(1))),
            ("b".to_string(), Some(QueryValue::Int(2))),
        ]
    );
}

#[test]
fn fragment_survives_query_edits() {
    let url = Url::new("http://x/?bar=baz&foo=bar#test=23");
    assert_eq!(url.remove_query_parameter("bar").as_str(), "http://x/?foo=bar#test=23");
    assert_eq!(
        url.add_query_parameter("n", 1).as_str(),
        "http://x/?bar=baz&foo=bar&n=1#test=23"
    );
}

#[test]
fn clear_query_keeps_fragment() {
    let url = Url::new("https://x?query=123&other=1243#test=123");
    assert_eq!(url.clear_query().as_str(), "https://x#test=123");
}

#[test]
fn replace_parameter_by_remove_then_add() {
    let url = Url::new("https://shop.example/list?page=1&sort=asc");
    let next = url.remove_query_parameter("page").add_query_parameter("page", 2);
    assert_eq!(next.as_str(), "https://shop.example/list?sort=asc&page=2");
    assert_eq!(next.query_parameter("page"), Some(QueryValue::Int(2)));
}

#[test]
fn port_defaulting() {
    let url = Url::new("https://example.com/path");
    assert_eq!(url.port_or_default(), Some(443));
    assert_eq!(url.port(), None);

    let url = Url::new("https://example.com:8443/path");
    assert_eq!(url.port(), Some(8443));
    assert_eq!(url.port_or_default(), Some(8443));
}

#[test]
fn oversized_port_is_not_replaced_by_default() {
    let url = Url::new("http://x:99999/path");
    assert_eq!(url.explicit_port(), Some(99_999));
    assert_eq!(url.port_or_default(), Some(99_999));
}

#[test]
fn separator_runs_vanish_with_removed_parameter() {
    let url = Url::new("http://x/?a=1&&b=2&&#top").remove_query_parameter("a");
    assert_eq!(url.as_str(), "http://x/?b=2#top");
}

#[test]
fn scheme_lookup_is_case_insensitive() {
    assert_eq!(Url::new("NTP://x/path").default_port_for_scheme(), Some(123));
    assert_eq!(Url::new("MongoDB://db").port_or_default(), Some(27017));
}

#[test]
fn malformed_input_degrades_to_empty() {
    let url = Url::new("definitely not a url");
    assert_eq!(url.scheme(), "");
    assert_eq!(url.explicit_port(), None);
    assert_eq!(url.port_or_default(), None);
    assert_eq!(url.query(), None);
    assert_eq!(url.fragment(), None);
    assert!(url.all_query_parameters().is_empty());
    assert_eq!(url.to_string(), "definitely not a url");
}

#[test]
fn unsupported_operations_are_distinct_from_absence() {
    let url = Url::new("https://example.com/path");
    let err = url.host().unwrap_err();
    assert_eq!(err, UrlError::NotImplemented { operation: "host" });
    assert!(err.to_string().contains("not implemented"));
}

#[test]
fn with_query_then_with_fragment() {
    let url = Url::new("https://example.com/a?x=1#old")
        .with_query("q=hello world&lang=en")
        .with_fragment("results");
    assert_eq!(url.as_str(), "https://example.com/a?q=hello+world&lang=en#results");
    assert_eq!(url.query_parameter("q"), Some(QueryValue::Str("hello world".into())));
}

#[test]
fn with_scheme_keeps_rest() {
    let url = Url::new("http://example.com:8080/a?b=1");
    let url = url.with_scheme("https");
    assert_eq!(url.as_str(), "https://example.com:8080/a?b=1");
    assert_eq!(url.port(), Some(8080));
}
