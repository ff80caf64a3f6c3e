//! Client-scoped target
//!
//! [`ClientBuilder`] owns the header set, engine handle and validation ledger
//! of a client under construction. Scopes opened with [`ClientBuilder::auth`],
//! [`ClientBuilder::config`] and [`ClientBuilder::header`] write into it and
//! hand it back. [`ClientBuilder::build`] drains the ledger and, if it is
//! empty, produces an immutable [`Client`].

use std::sync::Arc;
use std::time::Duration;

use fastchain_client::header::names;
use fastchain_client::{
    ClientConfig, ConfigDefaults, Engine, HeaderMap, Headers, Method, Policy, Result,
    Transport, Url, Validations, error,
};

use crate::builder::auth::AuthBuilder;
use crate::builder::config::ConfigBuilder;
use crate::builder::core::Target;
use crate::builder::headers::HeaderBuilder;
use crate::builder::request::RequestBuilder;

/// Progressive configuration of a [`Client`].
///
/// # Examples
/// ```
/// use std::time::Duration;
/// use fastchain::ClientBuilder;
///
/// let client = ClientBuilder::new("https://api.example.com/v1")
///     .auth()
///     .bearer_token("abc")
///     .config()
///     .set_timeout(Duration::from_secs(5))
///     .build()?;
///
/// assert_eq!(client.headers()["authorization"], "Bearer abc");
/// assert_eq!(client.timeout(), Some(Duration::from_secs(5)));
/// # Ok::<(), fastchain::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct ClientBuilder {
    base_url: Option<Url>,
    headers: Headers,
    engine: Engine,
    validations: Validations,
}

impl ClientBuilder {
    /// Start configuring a client whose requests are relative to `base_url`.
    ///
    /// A base URL that does not parse is recorded as a configuration error
    /// and reported by [`build`](Self::build).
    pub fn new(base_url: &str) -> Self {
        let mut builder = Self::default();
        match Url::parse(base_url) {
            Ok(url) => builder.base_url = Some(url),
            Err(e) => {
                log::warn!("deferring invalid base URL '{base_url}': {e}");
                builder.validations.push(error::invalid_url(base_url, e));
            }
        }
        builder
    }

    /// Replay a [`ClientConfig`] through the builder's scopes.
    ///
    /// Failures (bad base URL, bad proxy) land in the ledger exactly as they
    /// would from a hand-written chain.
    pub fn from_config(config: &ClientConfig) -> Self {
        let mut builder = match config.base_url.as_deref() {
            Some(base_url) => Self::new(base_url),
            None => Self::default(),
        };

        builder.header().set_all(&config.headers);
        if let Some(user_agent) = config.user_agent.as_deref() {
            builder.header().set(names::USER_AGENT, user_agent);
        }
        if let Some(timeout) = config.timeout() {
            builder.config().set_timeout(timeout);
        }
        if let Some(max) = config.max_redirects {
            builder.config().set_redirect_policy(Policy::limited(max));
        }
        builder.config().set_follow_redirects(config.follow_redirects);
        if let Some(proxy) = config.proxy.as_deref() {
            builder.config().set_proxy(proxy);
        }
        builder
    }

    /// Open the authentication scope.
    pub fn auth(&mut self) -> AuthBuilder<'_, Self> {
        AuthBuilder::new(self)
    }

    /// Open the engine configuration scope.
    pub fn config(&mut self) -> ConfigBuilder<'_, Self> {
        ConfigBuilder::new(self)
    }

    /// Open the header scope.
    pub fn header(&mut self) -> HeaderBuilder<'_, Self> {
        HeaderBuilder::new(self)
    }

    #[must_use]
    pub fn base_url(&self) -> Option<&Url> {
        self.base_url.as_ref()
    }

    #[must_use]
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// Failures recorded so far. Only [`build`](Self::build) acts on them.
    #[must_use]
    pub fn validations(&self) -> &Validations {
        &self.validations
    }

    /// Finalize the chain.
    ///
    /// The builder is drained and left in its default state. A `User-Agent`
    /// is added when the chain did not set one.
    ///
    /// # Errors
    ///
    /// Returns a single [`Kind::Validation`](fastchain_client::Kind::Validation)
    /// error carrying every failure recorded during the chain. Header values
    /// are not checked here; see [`PreparedRequest::to_http_request`].
    ///
    /// [`PreparedRequest::to_http_request`]: crate::PreparedRequest::to_http_request
    pub fn build(&mut self) -> Result<Client> {
        let Self {
            base_url,
            mut headers,
            engine,
            validations,
        } = std::mem::take(self);

        if !headers.contains(names::USER_AGENT) {
            headers.set(names::USER_AGENT, ConfigDefaults::USER_AGENT);
        }

        validations.into_result().inspect_err(|e| {
            log::debug!("client build failed: {e}");
        })?;
        let header_map = headers.to_header_map_lossy();

        log::debug!(
            "client built: base_url={:?}, headers={}, timeout={:?}",
            base_url.as_ref().map(Url::as_str),
            header_map.len(),
            engine.timeout()
        );

        Ok(Client {
            inner: Arc::new(ClientRef {
                base_url,
                headers,
                header_map,
                engine,
            }),
        })
    }
}

impl Target for ClientBuilder {
    fn headers_mut(&mut self) -> &mut Headers {
        &mut self.headers
    }

    fn engine_mut(&mut self) -> &mut Engine {
        &mut self.engine
    }

    fn validations_mut(&mut self) -> &mut Validations {
        &mut self.validations
    }
}

/// A finished, validated client.
///
/// Cheap to clone and safe to share across threads; requests created from it
/// start from a copy of its headers and engine settings.
#[derive(Debug, Clone)]
pub struct Client {
    inner: Arc<ClientRef>,
}

#[derive(Debug)]
struct ClientRef {
    base_url: Option<Url>,
    headers: Headers,
    header_map: HeaderMap,
    engine: Engine,
}

impl Client {
    /// Start configuring a client.
    pub fn builder(base_url: &str) -> ClientBuilder {
        ClientBuilder::new(base_url)
    }

    #[must_use]
    pub fn base_url(&self) -> Option<&Url> {
        self.inner.base_url.as_ref()
    }

    /// Default headers sent with every request. Entries HTTP cannot carry
    /// are left out of this view.
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.inner.header_map
    }

    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.inner.engine
    }

    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.inner.engine.timeout()
    }

    #[must_use]
    pub fn transport(&self) -> Option<&Transport> {
        self.inner.engine.transport()
    }

    #[must_use]
    pub fn redirect_policy(&self) -> Option<&Policy> {
        self.inner.engine.redirect_policy()
    }

    /// Start a request with `method` for `path`.
    ///
    /// `path` is appended to the base URL; an absolute URL is used as is.
    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        RequestBuilder::new(
            self.inner.base_url.as_ref(),
            method,
            path,
            self.inner.headers.clone(),
            self.inner.engine.clone(),
        )
    }
}
