//! Convenient re-exports for glob imports.
//!
//! ```rust
//! use url_helper::prelude::*;
//!
//! let url = Url::new("http://example.com/?page=1").add_query_parameter("sort", "asc");
//! assert_eq!(url.query_parameter("page"), Some(QueryValue::Int(1)));
//! ```
//!
//! The separator constants are left out; import them from the crate root.

pub use crate::{
    // Core types
    QueryParams, QueryValue, Url,
    // Contract
    HierarchicalComponents, ResourceIdentifier,
    // Errors
    UrlError,
    // Port table
    DEFAULT_PORTS, default_port,
};
