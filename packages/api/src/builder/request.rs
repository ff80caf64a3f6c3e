//! Request-scoped target
//!
//! A [`RequestBuilder`] starts from a copy of its client's headers and engine
//! settings and is configured through the same scopes as a client. Nothing it
//! does changes the client. [`RequestBuilder::build`] drains its ledger and
//! yields a [`PreparedRequest`] for the HTTP engine to send.

use std::time::Duration;

use fastchain_client::{
    Engine, Error, HeaderMap, Headers, Method, Policy, Result, Transport, Url, Validations, error,
};

use crate::builder::auth::AuthBuilder;
use crate::builder::config::ConfigBuilder;
use crate::builder::core::Target;
use crate::builder::headers::HeaderBuilder;

/// Progressive configuration of one request.
#[derive(Debug)]
pub struct RequestBuilder {
    method: Method,
    url: Option<Url>,
    headers: Headers,
    engine: Engine,
    validations: Validations,
}

impl RequestBuilder {
    pub(crate) fn new(
        base_url: Option<&Url>,
        method: Method,
        path: &str,
        headers: Headers,
        engine: Engine,
    ) -> Self {
        let mut validations = Validations::new();
        let url = match resolve_url(base_url, path) {
            Ok(url) => Some(url),
            Err(e) => {
                log::warn!("deferring invalid request URL '{path}': {e}");
                validations.push(e);
                None
            }
        };

        Self {
            method,
            url,
            headers,
            engine,
            validations,
        }
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
    pub fn method(&self) -> &Method {
        &self.method
    }

    /// The resolved URL, `None` when resolution failed.
    #[must_use]
    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    #[must_use]
    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    #[must_use]
    pub fn validations(&self) -> &Validations {
        &self.validations
    }

    /// Finalize the chain.
    ///
    /// The builder's headers, engine settings and ledger are drained.
    ///
    /// # Errors
    ///
    /// Returns a single [`Kind::Validation`](fastchain_client::Kind::Validation)
    /// error carrying every failure recorded during the chain.
    pub fn build(&mut self) -> Result<PreparedRequest> {
        let headers = std::mem::take(&mut self.headers);
        let engine = std::mem::take(&mut self.engine);
        let validations = std::mem::take(&mut self.validations);
        let url = self.url.take();

        validations.into_result()?;

        let Some(url) = url else {
            // resolution failures are always in the ledger; reaching here means
            // the builder was already drained by an earlier build
            return Err(error::validation(vec![error::builder(
                "request has no URL",
                "builder already consumed",
            )]));
        };

        log::debug!("request built: {} {}", self.method, url);

        Ok(PreparedRequest {
            method: self.method.clone(),
            url,
            header_map: headers.to_header_map_lossy(),
            headers,
            engine,
        })
    }
}

impl Target for RequestBuilder {
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

/// Join `path` onto `base`.
///
/// An absolute URL in `path` wins. Otherwise `path` is appended to the base
/// URL's path with exactly one `/` between them, so `https://h/v1` + `users`
/// is `https://h/v1/users`. The base's query and fragment are dropped; the
/// ones written in `path` are kept.
fn resolve_url(base: Option<&Url>, path: &str) -> std::result::Result<Url, Error> {
    match Url::parse(path) {
        Ok(url) => Ok(url),
        Err(url::ParseError::RelativeUrlWithoutBase) => {
            let Some(base) = base else {
                return Err(error::invalid_url(path, url::ParseError::RelativeUrlWithoutBase));
            };
            if path.is_empty() {
                return Ok(base.clone());
            }
            let reference = format!(
                "{}/{}",
                base.path().trim_end_matches('/'),
                path.trim_start_matches('/')
            );
            base.join(&reference)
                .map_err(|e| error::invalid_url(path, e))
        }
        Err(e) => Err(error::invalid_url(path, e)),
    }
}

/// A finished, validated request ready to hand to the HTTP engine.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    method: Method,
    url: Url,
    headers: Headers,
    header_map: HeaderMap,
    engine: Engine,
}

impl PreparedRequest {
    #[must_use]
    pub fn method(&self) -> &Method {
        &self.method
    }

    #[must_use]
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Headers that will be sent. Entries HTTP cannot carry are left out of
    /// this view and refused by [`to_http_request`](Self::to_http_request).
    #[must_use]
    pub fn headers(&self) -> &HeaderMap {
        &self.header_map
    }

    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.engine.timeout()
    }

    #[must_use]
    pub fn transport(&self) -> Option<&Transport> {
        self.engine.transport()
    }

    #[must_use]
    pub fn redirect_policy(&self) -> Option<&Policy> {
        self.engine.redirect_policy()
    }

    /// Convert into an [`http::Request`] with an empty body.
    ///
    /// # Errors
    ///
    /// Returns a builder error if the URL is not a valid HTTP URI or a header
    /// name or value cannot be carried by HTTP.
    pub fn to_http_request(&self) -> Result<http::Request<()>> {
        let headers = self.headers.to_header_map().map_err(|failures| {
            log::warn!("refusing request with {} invalid header(s)", failures.len());
            error::builder("request carries headers HTTP cannot send", error::validation(failures))
        })?;
        let mut request = http::Request::builder()
            .method(self.method.clone())
            .uri(self.url.as_str())
            .body(())
            .map_err(|e| error::builder(format!("invalid request URI `{}`", self.url), e))?;
        *request.headers_mut() = headers;
        Ok(request)
    }
}
