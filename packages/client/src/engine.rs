//! Engine handle
//!
//! The knobs the underlying HTTP engine reads when it sends: transport,
//! whole-request timeout and redirect policy. Each knob starts unconfigured
//! (`None`, engine default in effect) and is overwritten by every later set.

use std::time::Duration;

use http::StatusCode;

use crate::Url;
use crate::proxy::Proxy;
use crate::redirect::{ActionKind, Policy};
use crate::transport::{Transport, resolve_proxy};

#[derive(Debug, Clone, Default)]
pub struct Engine {
    transport: Option<Transport>,
    timeout: Option<Duration>,
    redirect: Option<Policy>,
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the transport unconditionally.
    pub fn set_transport(&mut self, transport: Transport) {
        self.transport = Some(transport);
    }

    /// Replace the timeout unconditionally. Zero is stored as given; what it
    /// means is up to the engine.
    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = Some(timeout);
    }

    pub fn set_redirect_policy(&mut self, policy: Policy) {
        self.redirect = Some(policy);
    }

    /// Apply `proxy` to the installed transport.
    ///
    /// See [`resolve_proxy`] for when the transport is mutated and when it is
    /// replaced.
    pub fn set_proxy(&mut self, proxy: Proxy) {
        let current = self.transport.take();
        self.transport = Some(resolve_proxy(current, proxy));
    }

    #[must_use]
    pub fn transport(&self) -> Option<&Transport> {
        self.transport.as_ref()
    }

    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// The installed redirect policy, `None` when the engine default applies.
    #[must_use]
    pub fn redirect_policy(&self) -> Option<&Policy> {
        self.redirect.as_ref()
    }

    /// Per-redirect hook: decide what to do with a redirect response.
    pub fn check_redirect(&self, status: StatusCode, next: &Url, previous: &[Url]) -> ActionKind {
        match self.redirect {
            Some(ref policy) => policy.check(status, next, previous),
            None => Policy::default().check(status, next, previous),
        }
    }
}
