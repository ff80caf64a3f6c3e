//! Transport descriptors
//!
//! The engine either uses its own default-shaped transport ([`HttpTransport`],
//! which exposes a settable proxy) or a caller-substituted [`RoundTrip`]
//! implementation that this layer cannot look inside.

mod resolver;

pub use resolver::resolve_proxy;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;

use crate::error::BoxError;
use crate::proxy::Proxy;

/// A caller-supplied transport.
///
/// The configuration layer only stores it; the HTTP engine invokes it once
/// the finished client sends requests.
pub trait RoundTrip: fmt::Debug + Send + Sync {
    /// Execute a single HTTP exchange.
    ///
    /// # Errors
    ///
    /// Any failure the transport wants to surface to the engine.
    fn round_trip(&self, request: http::Request<Bytes>) -> Result<http::Response<Bytes>, BoxError>;
}

/// The transport installed on an engine handle.
#[derive(Debug, Clone)]
pub enum Transport {
    /// The engine's standard transport, recognized by its proxy field
    Default(HttpTransport),
    /// An opaque caller-supplied transport
    Custom(Arc<dyn RoundTrip>),
}

impl Transport {
    pub fn custom<T: RoundTrip + 'static>(transport: T) -> Self {
        Self::Custom(Arc::new(transport))
    }

    /// The default-shaped transport, if that is what is installed.
    #[must_use]
    pub fn as_default(&self) -> Option<&HttpTransport> {
        match self {
            Self::Default(transport) => Some(transport),
            Self::Custom(_) => None,
        }
    }

    #[must_use]
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }

    /// Proxy of a default-shaped transport. Custom transports never report one.
    #[must_use]
    pub fn proxy(&self) -> Option<&Proxy> {
        self.as_default().and_then(HttpTransport::proxy)
    }
}

impl From<HttpTransport> for Transport {
    fn from(transport: HttpTransport) -> Self {
        Self::Default(transport)
    }
}

/// Minimum TLS protocol version
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum TlsVersion {
    Tls12,
    Tls13,
}

/// TLS knobs carried by the default transport
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TlsSettings {
    pub danger_accept_invalid_certs: bool,
    pub min_version: Option<TlsVersion>,
}

/// The engine's default-shaped transport.
///
/// Every field is optional; an unset field leaves the engine's own default in
/// effect.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpTransport {
    proxy: Option<Proxy>,
    connect_timeout: Option<Duration>,
    pool_idle_timeout: Option<Duration>,
    pool_max_idle_per_host: Option<usize>,
    http2_prior_knowledge: bool,
    tls: TlsSettings,
}

impl HttpTransport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A transport whose only configured field is `proxy`.
    #[must_use]
    pub fn with_proxy(proxy: Proxy) -> Self {
        Self {
            proxy: Some(proxy),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn proxy(&self) -> Option<&Proxy> {
        self.proxy.as_ref()
    }

    pub fn set_proxy(&mut self, proxy: Proxy) {
        self.proxy = Some(proxy);
    }

    #[must_use]
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn pool_idle_timeout(mut self, timeout: Duration) -> Self {
        self.pool_idle_timeout = Some(timeout);
        self
    }

    #[must_use]
    pub fn pool_max_idle_per_host(mut self, max: usize) -> Self {
        self.pool_max_idle_per_host = Some(max);
        self
    }

    #[must_use]
    pub fn http2_prior_knowledge(mut self) -> Self {
        self.http2_prior_knowledge = true;
        self
    }

    #[must_use]
    pub fn tls(mut self, tls: TlsSettings) -> Self {
        self.tls = tls;
        self
    }

    #[must_use]
    pub fn get_connect_timeout(&self) -> Option<Duration> {
        self.connect_timeout
    }

    #[must_use]
    pub fn get_pool_idle_timeout(&self) -> Option<Duration> {
        self.pool_idle_timeout
    }

    #[must_use]
    pub fn get_pool_max_idle_per_host(&self) -> Option<usize> {
        self.pool_max_idle_per_host
    }

    #[must_use]
    pub fn is_http2_prior_knowledge(&self) -> bool {
        self.http2_prior_knowledge
    }

    #[must_use]
    pub fn tls_settings(&self) -> &TlsSettings {
        &self.tls
    }
}
