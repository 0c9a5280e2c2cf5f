//! URI contract split by capability.
//!
//! [`ResourceIdentifier`] is the part of a generic URI interface that a
//! string-backed URL can honour without decomposing its authority.
//! [`HierarchicalComponents`] is the remainder; [`Url`] implements it only to
//! report each operation as [`UrlError::NotImplemented`].

use tracing::debug;

use crate::error::UrlError;
use crate::url::Url;

/// Scheme, port, query, and fragment access with immutable updates.
///
/// Every `with_*` method returns a new value and leaves `self` unchanged.
pub trait ResourceIdentifier: Sized {
    /// Returns the scheme, or `""` if there is none.
    fn scheme(&self) -> &str;

    /// Returns the port, with a port equal to the scheme default suppressed.
    fn port(&self) -> Option<u32>;

    /// Returns the raw query string without its leading `?`.
    fn query(&self) -> Option<&str>;

    /// Returns the fragment without its leading `#`.
    fn fragment(&self) -> Option<&str>;

    /// Returns a copy with the scheme replaced.
    #[must_use]
    fn with_scheme(&self, scheme: &str) -> Self;

    /// Returns a copy with the query replaced; `""` removes it.
    #[must_use]
    fn with_query(&self, query: &str) -> Self;

    /// Returns a copy with the fragment replaced; `""` removes it.
    #[must_use]
    fn with_fragment(&self, fragment: &str) -> Self;
}

/// Authority, user-info, host, and path access.
///
/// # Errors
///
/// Implementations that do not decompose these components return
/// [`UrlError::NotImplemented`] from every method.
pub trait HierarchicalComponents: Sized {
    /// Returns the authority (`[user-info@]host[:port]`).
    ///
    /// # Errors
    ///
    /// Returns `UrlError` if the implementation does not decompose the authority.
    fn authority(&self) -> Result<&str, UrlError>;

    /// Returns the user-info part of the authority.
    ///
    /// # Errors
    ///
    /// Returns `UrlError` if the implementation does not decompose the authority.
    fn user_info(&self) -> Result<&str, UrlError>;

    /// Returns the host.
    ///
    /// # Errors
    ///
    /// Returns `UrlError` if the implementation does not decompose the authority.
    fn host(&self) -> Result<&str, UrlError>;

    /// Returns the path.
    ///
    /// # Errors
    ///
    /// Returns `UrlError` if the implementation does not decompose the path.
    fn path(&self) -> Result<&str, UrlError>;

    /// Returns a copy with the user-info replaced.
    ///
    /// # Errors
    ///
    /// Returns `UrlError` if the implementation does not decompose the authority.
    fn with_user_info(&self, user: &str, password: Option<&str>) -> Result<Self, UrlError>;

    /// Returns a copy with the host replaced.
    ///
    /// # Errors
    ///
    /// Returns `UrlError` if the implementation does not decompose the authority.
    fn with_host(&self, host: &str) -> Result<Self, UrlError>;

    /// Returns a copy with the port replaced, or removed for `None`.
    ///
    /// # Errors
    ///
    /// Returns `UrlError` if the implementation does not decompose the authority.
    fn with_port(&self, port: Option<u16>) -> Result<Self, UrlError>;

    /// Returns a copy with the path replaced.
    ///
    /// # Errors
    ///
    /// Returns `UrlError` if the implementation does not decompose the path.
    fn with_path(&self, path: &str) -> Result<Self, UrlError>;
}

impl ResourceIdentifier for Url {
    fn scheme(&self) -> &str {
        Self::scheme(self)
    }

    fn port(&self) -> Option<u32> {
        Self::port(self)
    }

    fn query(&self) -> Option<&str> {
        Self::query(self)
    }

    fn fragment(&self) -> Option<&str> {
        Self::fragment(self)
    }

    fn with_scheme(&self, scheme: &str) -> Self {
        Self::with_scheme(self, scheme)
    }

    fn with_query(&self, query: &str) -> Self {
        Self::with_query(self, query)
    }

    fn with_fragment(&self, fragment: &str) -> Self {
        Self::with_fragment(self, fragment)
    }
}

fn not_implemented<T>(operation: &'static str) -> Result<T, UrlError> {
    debug!(operation, "unsupported URI operation requested");
    Err(UrlError::NotImplemented { operation })
}

impl HierarchicalComponents for Url {
    fn authority(&self) -> Result<&str, UrlError> {
        not_implemented("authority")
    }

    fn user_info(&self) -> Result<&str, UrlError> {
        not_implemented("user_info")
    }

    fn host(&self) -> Result<&str, UrlError> {
        not_implemented("host")
    }

    fn path(&self) -> Result<&str, UrlError> {
        not_implemented("path")
    }

    fn with_user_info(&self, _user: &str, _password: Option<&str>) -> Result<Self, UrlError> {
        not_implemented("with_user_info")
    }

    fn with_host(&self, _host: &str) -> Result<Self, UrlError> {
        not_implemented("with_host")
    }

    fn with_port(&self, _port: Option<u16>) -> Result<Self, UrlError> {
        not_implemented("with_port")
    }

    fn with_path(&self, _path: &str) -> Result<Self, UrlError> {
        not_implemented("with_path")
    }
}
