//! Configuration scope tests
//!
//! Proxy resolution against default and custom transports, redirect
//! following, timeouts and deferred failure reporting.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use bytes::Bytes;
use fastchain::error::BoxError;
use fastchain::redirect::ActionKind;
use fastchain::{ClientBuilder, HttpTransport, Kind, Proxy, RoundTrip, Transport};
use http::StatusCode;
use url::Url;

#[derive(Debug, Default)]
struct CountingTransport {
    calls: AtomicUsize,
}

impl RoundTrip for CountingTransport {
    fn round_trip(&self, _request: http::Request<Bytes>) -> Result<http::Response<Bytes>, BoxError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(http::Response::new(Bytes::new()))
    }
}

fn proxy(url: &str) -> Proxy {
    Proxy::parse(url).expect("test proxy should parse")
}

#[cfg(test)]
mod config_tests {
    use super::*;

    #[test]
    fn invalid_proxy_is_recorded_and_chain_continues() {
        env_logger::try_init().ok(); // Ignore error if already initialized

        let transport = HttpTransport::new().connect_timeout(Duration::from_secs(2));
        let mut builder = ClientBuilder::new("https://api.example.com");
        builder
            .config()
            .set_custom_transport(transport.clone())
            .config()
            .set_proxy("://not a url")
            .config()
            .set_timeout(Duration::from_secs(9));

        assert_eq!(builder.validations().len(), 1);
        assert_eq!(
            builder.engine().transport().and_then(Transport::as_default),
            Some(&transport)
        );
        assert_eq!(builder.engine().timeout(), Some(Duration::from_secs(9)));

        let err = builder.build().expect_err("ledger is not empty");
        assert_eq!(err.kind(), Kind::Validation);
        assert_eq!(err.errors().len(), 1);
        assert_eq!(err.errors()[0].kind(), Kind::Config);
        assert!(err.errors()[0].to_string().contains("://not a url"));
    }

    #[test]
    fn every_bad_proxy_gets_its_own_entry() {
        let result = ClientBuilder::new("https://api.example.com")
            .config()
            .set_proxy("://one")
            .config()
            .set_proxy("http://[::1")
            .config()
            .set_proxy("http://good.proxy:3128")
            .build();

        let err = result.expect_err("two bad proxies");
        assert_eq!(err.errors().len(), 2);
        assert!(err.errors()[0].to_string().contains("://one"));
        assert!(err.errors()[1].to_string().contains("http://[::1"));
    }

    #[test]
    fn proxy_scheme_is_not_checked_when_configuring() {
        let client = ClientBuilder::new("https://api.example.com")
            .config()
            .set_proxy("ftp://proxy.local:21")
            .build()
            .expect("any URL that parses is accepted");

        assert_eq!(
            client.transport().and_then(Transport::proxy).map(Proxy::scheme),
            Some("ftp")
        );
    }

    #[test]
    fn ledger_entries_keep_message_and_cause() {
        let mut builder = ClientBuilder::new("https://api.example.com");
        builder.config().set_proxy("://first").config().set_proxy("://second");

        let messages = builder
            .validations()
            .iter()
            .filter_map(fastchain::Error::message)
            .collect::<Vec<_>>();
        assert_eq!(
            messages,
            [
                "failed to parse proxy URL `://first`",
                "failed to parse proxy URL `://second`"
            ]
        );
        assert!(
            builder
                .validations()
                .iter()
                .all(|e| std::error::Error::source(e).is_some())
        );
    }

    #[test]
    fn proxy_mutates_default_transport_in_place() {
        let transport = HttpTransport::new()
            .connect_timeout(Duration::from_secs(3))
            .pool_idle_timeout(Duration::from_secs(30))
            .http2_prior_knowledge();

        let client = ClientBuilder::new("https://api.example.com")
            .config()
            .set_custom_transport(transport)
            .config()
            .set_proxy("http://first.proxy:8080")
            .config()
            .set_proxy("http://second.proxy:8080")
            .build()
            .expect("valid chain");

        let installed = client
            .transport()
            .and_then(Transport::as_default)
            .expect("default transport stays installed");
        assert_eq!(installed.proxy(), Some(&proxy("http://second.proxy:8080")));
        assert_eq!(installed.get_connect_timeout(), Some(Duration::from_secs(3)));
        assert_eq!(installed.get_pool_idle_timeout(), Some(Duration::from_secs(30)));
        assert!(installed.is_http2_prior_knowledge());
    }

    #[test]
    fn proxy_replaces_custom_transport() {
        let custom = CountingTransport::default();
        let client = ClientBuilder::new("https://api.example.com")
            .config()
            .set_custom_transport(Transport::custom(custom))
            .config()
            .set_proxy("socks5://127.0.0.1:1080")
            .build()
            .expect("valid chain");

        let transport = client.transport().expect("transport installed");
        assert!(!transport.is_custom());
        assert_eq!(
            transport.as_default(),
            Some(&HttpTransport::with_proxy(proxy("socks5://127.0.0.1:1080")))
        );
    }

    #[test]
    fn proxy_without_transport_installs_default() {
        let client = ClientBuilder::new("https://api.example.com")
            .config()
            .set_proxy("http://user:pw@proxy.local:3128")
            .build()
            .expect("valid chain");

        let transport = client.transport().expect("transport installed");
        assert_eq!(
            transport.proxy().and_then(Proxy::basic_auth),
            Some(("user", "pw"))
        );
    }

    #[test]
    fn custom_transport_is_stored_as_given() {
        let custom = Arc::new(CountingTransport::default());
        let client = ClientBuilder::new("https://api.example.com")
            .config()
            .set_custom_transport(Transport::Custom(custom.clone()))
            .build()
            .expect("valid chain");

        let Some(Transport::Custom(installed)) = client.transport() else {
            panic!("custom transport should be installed");
        };
        installed
            .round_trip(http::Request::new(Bytes::new()))
            .expect("counting transport never fails");
        assert_eq!(custom.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn follow_redirects_false_stops_at_first_redirect() {
        let client = ClientBuilder::new("https://api.example.com")
            .config()
            .set_follow_redirects(false)
            .build()
            .expect("valid chain");

        let next = Url::parse("https://api.example.com/moved").expect("test URL should parse");
        assert!(matches!(
            client.engine().check_redirect(StatusCode::FOUND, &next, &[]),
            ActionKind::Stop
        ));
        assert!(client.redirect_policy().is_some_and(fastchain::Policy::is_none));
    }

    #[test]
    fn follow_redirects_true_leaves_engine_default() {
        let client = ClientBuilder::new("https://api.example.com")
            .config()
            .set_follow_redirects(true)
            .build()
            .expect("valid chain");

        assert!(client.redirect_policy().is_none());
        let next = Url::parse("https://api.example.com/moved").expect("test URL should parse");
        assert!(matches!(
            client.engine().check_redirect(StatusCode::FOUND, &next, &[]),
            ActionKind::Follow
        ));
    }

    #[test]
    fn follow_redirects_true_does_not_undo_false() {
        let client = ClientBuilder::new("https://api.example.com")
            .config()
            .set_follow_redirects(false)
            .config()
            .set_follow_redirects(true)
            .build()
            .expect("valid chain");

        assert!(client.redirect_policy().is_some_and(fastchain::Policy::is_none));
    }

    #[test]
    fn zero_timeout_is_stored() {
        let client = ClientBuilder::new("https://api.example.com")
            .config()
            .set_timeout(Duration::ZERO)
            .build()
            .expect("valid chain");
        assert_eq!(client.timeout(), Some(Duration::ZERO));
    }

    #[test]
    fn full_chain_reports_only_the_proxy() {
        let result = ClientBuilder::new("https://api.example.com")
            .auth()
            .bearer_token("abc")
            .config()
            .set_timeout(Duration::from_secs(5))
            .config()
            .set_proxy("://bad")
            .build();

        let err = result.expect_err("bad proxy is reported at build");
        assert_eq!(err.kind(), Kind::Validation);
        assert_eq!(err.errors().len(), 1);
        assert!(err.to_string().contains("://bad"));
        assert!(std::error::Error::source(&err.errors()[0]).is_some());
    }

    #[test]
    fn build_drains_the_builder() {
        let mut builder = ClientBuilder::new("https://api.example.com");
        builder.config().set_proxy("://bad");
        assert!(builder.build().is_err());

        assert!(builder.validations().is_empty());
        assert!(builder.base_url().is_none());
    }
}
