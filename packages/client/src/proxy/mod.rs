//! Proxy URL parsing
//!
//! A [`Proxy`] is whatever parses as an absolute URL. Input that does not is
//! a [`ProxyError`] which the configuration layer records as a deferred
//! failure. Whether the engine can tunnel through the scheme is decided when
//! it connects.

pub mod into_proxy;

pub use into_proxy::{IntoProxy, ProxyError};

use std::fmt;

use crate::Url;

/// A parsed proxy endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct Proxy {
    url: Url,
}

impl Proxy {
    /// Parse a proxy URL.
    ///
    /// # Errors
    ///
    /// Returns [`ProxyError::Parse`] if the input is not an absolute URL.
    pub fn parse<U: IntoProxy>(proxy_url: U) -> Result<Self, ProxyError> {
        let url = proxy_url.into_proxy()?;
        Ok(Self { url })
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    #[must_use]
    pub fn scheme(&self) -> &str {
        self.url.scheme()
    }

    /// Credentials embedded in the proxy URL, if any.
    #[must_use]
    pub fn basic_auth(&self) -> Option<(&str, &str)> {
        let user = self.url.username();
        if user.is_empty() {
            return None;
        }
        Some((user, self.url.password().unwrap_or("")))
    }
}

impl fmt::Debug for Proxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // credentials stay out of logs
        let mut redacted = self.url.clone();
        match redacted.set_password(None) {
            Ok(()) => {}
            // only URLs without an authority refuse, and those hold no password
            Err(()) => debug_assert!(self.url.password().is_none()),
        }
        f.debug_tuple("Proxy").field(&redacted.as_str()).finish()
    }
}
