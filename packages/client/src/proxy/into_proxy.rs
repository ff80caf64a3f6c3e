//! IntoProxy trait and implementations for URL conversion

use crate::Url;

/// A trait for converting types into proxy URLs
pub trait IntoProxy: IntoProxySealed {
    /// # Errors
    ///
    /// Returns [`ProxyError::Parse`] when the value is not a URL.
    fn into_proxy(self) -> Result<Url, ProxyError>;
}

/// Sealed trait to prevent external implementations
pub trait IntoProxySealed {}

impl IntoProxySealed for &str {}
impl IntoProxySealed for &String {}
impl IntoProxySealed for String {}
impl IntoProxySealed for Url {}

impl IntoProxy for &str {
    fn into_proxy(self) -> Result<Url, ProxyError> {
        Ok(Url::parse(self)?)
    }
}

impl IntoProxy for &String {
    fn into_proxy(self) -> Result<Url, ProxyError> {
        self.as_str().into_proxy()
    }
}

impl IntoProxy for String {
    fn into_proxy(self) -> Result<Url, ProxyError> {
        self.as_str().into_proxy()
    }
}

impl IntoProxy for Url {
    fn into_proxy(self) -> Result<Url, ProxyError> {
        Ok(self)
    }
}

/// Error type for proxy URL parsing failures
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProxyError {
    #[error(transparent)]
    Parse(#[from] url::ParseError),
}
