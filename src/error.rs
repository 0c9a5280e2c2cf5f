//! Error types for URL operations.

use std::fmt;

/// Errors returned by URL operations.
///
/// Missing parts of a URL (no query parameter, no fragment, no port) are
/// reported as `None`, never as an error. The only failure is asking for a
/// component this string-backed type does not decompose.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UrlError {
    /// The operation needs authority, host, user-info, or path decomposition.
    NotImplemented {
        /// Name of the requested operation
        operation: &'static str,
    },
}

impl fmt::Display for UrlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotImplemented { operation } => write!(
                f,
                "operation '{operation}' is not implemented; this URL type does not decompose authority or path"
            ),
        }
    }
}

impl std::error::Error for UrlError {}
