//! Proxy installation onto an existing transport

use super::{HttpTransport, Transport};
use crate::proxy::Proxy;

/// Produce the transport that should be installed after setting `proxy`.
///
/// A default-shaped transport keeps every other field and only has its proxy
/// replaced. An absent transport, or a custom one this layer cannot look
/// inside, is replaced by a fresh default-shaped transport carrying only the
/// proxy; whatever the custom transport held is dropped.
#[must_use]
pub fn resolve_proxy(current: Option<Transport>, proxy: Proxy) -> Transport {
    match current {
        Some(Transport::Default(mut transport)) => {
            tracing::debug!(proxy = ?proxy, "setting proxy on existing default transport");
            transport.set_proxy(proxy);
            Transport::Default(transport)
        }
        Some(Transport::Custom(custom)) => {
            tracing::warn!(
                transport = ?custom,
                proxy = ?proxy,
                "custom transport replaced by default transport to apply proxy"
            );
            Transport::Default(HttpTransport::with_proxy(proxy))
        }
        None => {
            tracing::debug!(proxy = ?proxy, "installing default transport with proxy");
            Transport::Default(HttpTransport::with_proxy(proxy))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use bytes::Bytes;

    use super::*;
    use crate::error::BoxError;
    use crate::transport::{RoundTrip, TlsSettings, TlsVersion};

    #[derive(Debug)]
    struct Recording;

    impl RoundTrip for Recording {
        fn round_trip(
            &self,
            _request: http::Request<Bytes>,
        ) -> Result<http::Response<Bytes>, BoxError> {
            Err("never called".into())
        }
    }

    fn proxy(url: &str) -> Proxy {
        Proxy::parse(url).expect("test proxy should parse")
    }

    #[test]
    fn absent_transport_gets_fresh_default() {
        let resolved = resolve_proxy(None, proxy("http://a.proxy:1"));
        let transport = resolved.as_default().expect("default transport");
        assert_eq!(transport, &HttpTransport::with_proxy(proxy("http://a.proxy:1")));
    }

    #[test]
    fn default_transport_keeps_other_fields() {
        let tls = TlsSettings {
            danger_accept_invalid_certs: true,
            min_version: Some(TlsVersion::Tls13),
        };
        let existing = HttpTransport::new()
            .connect_timeout(Duration::from_secs(3))
            .pool_max_idle_per_host(4)
            .tls(tls.clone());

        let once = resolve_proxy(Some(existing.into()), proxy("http://first.proxy"));
        let twice = resolve_proxy(Some(once), proxy("http://second.proxy"));

        let transport = twice.as_default().expect("default transport");
        assert_eq!(transport.proxy(), Some(&proxy("http://second.proxy")));
        assert_eq!(transport.get_connect_timeout(), Some(Duration::from_secs(3)));
        assert_eq!(transport.get_pool_max_idle_per_host(), Some(4));
        assert_eq!(transport.tls_settings(), &tls);
    }

    #[test]
    fn custom_transport_is_replaced() {
        let resolved = resolve_proxy(Some(Transport::custom(Recording)), proxy("socks5://s.proxy:1080"));
        assert!(!resolved.is_custom());
        assert_eq!(
            resolved.as_default(),
            Some(&HttpTransport::with_proxy(proxy("socks5://s.proxy:1080")))
        );
    }
}
