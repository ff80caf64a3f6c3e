//! Configuration scope
//!
//! `target.config()` opens a short-lived scope over the target's engine
//! handle. Setters that cannot fail overwrite the previous value. Setters that
//! can fail record the failure in the target's validation ledger and leave the
//! engine untouched; the chain is never interrupted.

use std::time::Duration;

use fastchain_client::error;
use fastchain_client::{Policy, Proxy, Transport};

use crate::builder::core::Target;

/// Scope for engine-level settings: transport, timeout, redirects, proxy.
#[must_use = "a config scope does nothing until one of its methods is called"]
pub struct ConfigBuilder<'a, T: Target> {
    parent: &'a mut T,
}

impl<'a, T: Target> ConfigBuilder<'a, T> {
    pub(crate) fn new(parent: &'a mut T) -> Self {
        Self { parent }
    }

    /// Replace the transport.
    ///
    /// Accepts a default-shaped [`HttpTransport`](fastchain_client::HttpTransport)
    /// or a custom one wrapped with [`Transport::custom`]. Always succeeds.
    pub fn set_custom_transport(self, transport: impl Into<Transport>) -> &'a mut T {
        self.parent.engine_mut().set_transport(transport.into());
        self.parent
    }

    /// Set the whole-request timeout.
    ///
    /// Applies to the later network operation, not to configuration. A zero
    /// duration is stored as given.
    pub fn set_timeout(self, duration: Duration) -> &'a mut T {
        self.parent.engine_mut().set_timeout(duration);
        self.parent
    }

    /// Control whether redirects are followed.
    ///
    /// `false` installs a policy that stops at the first redirect and hands
    /// back that response. `true` changes nothing: the engine follows by
    /// default, and a stop policy installed earlier in the same chain stays
    /// in place.
    // TODO: decide whether `true` should restore the default policy after an earlier `false`
    pub fn set_follow_redirects(self, follow: bool) -> &'a mut T {
        if !follow {
            self.parent.engine_mut().set_redirect_policy(Policy::none());
        }
        self.parent
    }

    /// Install an arbitrary redirect policy.
    pub fn set_redirect_policy(self, policy: Policy) -> &'a mut T {
        self.parent.engine_mut().set_redirect_policy(policy);
        self.parent
    }

    /// Route traffic through the proxy at `proxy_url`.
    ///
    /// If the installed transport is default-shaped only its proxy changes;
    /// otherwise a fresh default transport carrying just this proxy replaces
    /// it. An unparsable URL is recorded as a configuration error and the
    /// transport is left as it was.
    ///
    /// # Examples
    /// ```
    /// use fastchain::ClientBuilder;
    ///
    /// let result = ClientBuilder::new("https://api.example.com")
    ///     .config()
    ///     .set_proxy("://bad")
    ///     .build();
    /// assert_eq!(result.unwrap_err().errors().len(), 1);
    /// ```
    pub fn set_proxy(self, proxy_url: &str) -> &'a mut T {
        match Proxy::parse(proxy_url) {
            Ok(proxy) => self.parent.engine_mut().set_proxy(proxy),
            Err(e) => {
                log::warn!("deferring invalid proxy URL '{proxy_url}': {e}");
                self.parent
                    .validations_mut()
                    .push(error::config(format!("failed to parse proxy URL `{proxy_url}`"), e));
            }
        }
        self.parent
    }
}
