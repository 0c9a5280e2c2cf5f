//! Immutable, string-backed URL values with typed query, fragment, and port
//! helpers.
//!
//! A [`Url`] wraps the URL text verbatim. It never fails to construct and
//! never validates; accessors derive the scheme, port, query parameters, and
//! fragment from the text when asked, and every edit returns a new `Url`.
//!
//! # Quick Start
//!
//! ```rust
//! use url_helper::{QueryValue, Url};
//!
//! let url = Url::new("https://example.com/search?q=rust&page=2#results");
//!
//! // Typed query access
//! assert_eq!(url.query_parameter("page"), Some(QueryValue::Int(2)));
//! assert_eq!(url.query_parameter("q"), Some(QueryValue::Str("rust".into())));
//!
//! // Structural edits return new values
//! let next = url
//!     .remove_query_parameter("page")
//!     .add_query_parameter("page", 3)
//!     .clear_fragment();
//! assert_eq!(next.as_str(), "https://example.com/search?q=rust&page=3");
//! assert_eq!(url.fragment(), Some("results"));
//! ```
//!
//! # Ports
//!
//! ```rust
//! use url_helper::Url;
//!
//! let url = Url::new("https://example.com/path");
//! assert_eq!(url.port(), None);
//! assert_eq!(url.port_or_default(), Some(443));
//!
//! let url = Url::new("https://example.com:8443/path");
//! assert_eq!(url.port(), Some(8443));
//! ```
//!
//! # Decomposition
//!
//! | Part | Rule |
//! |------|------|
//! | Scheme | alphanumeric token before a leading `://` |
//! | Explicit port | first `:` followed by 1-5 digits anywhere in the text |
//! | Query | from the first `?` (if it precedes any `#`) to the first `#` |
//! | Fragment | everything after the first `#` |
//!
//! Authority, host, user-info, and path are not decomposed. The
//! [`HierarchicalComponents`] methods on `Url` return
//! [`UrlError::NotImplemented`].

#![deny(missing_docs)]
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

mod components;
mod constants;
mod error;
#[cfg(kani)]
mod kani_impls;
mod port;
pub mod prelude;
mod query;
mod traits;
mod url;

pub use constants::{
    DEFAULT_PORTS, FRAGMENT_SEPARATOR, PAIR_SEPARATOR, QUERY_SEPARATOR, SCHEME_DELIMITER,
    VALUE_SEPARATOR,
};
pub use error::UrlError;
pub use port::default_port;
pub use query::{QueryParams, QueryValue};
pub use traits::{HierarchicalComponents, ResourceIdentifier};
pub use url::Url;
