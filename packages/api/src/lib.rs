//! Fastchain
//!
//! Fluent configuration for HTTP clients and requests. A chain of small calls
//! mutates one target; anything that can go wrong along the way is recorded
//! and reported all at once when the chain is built.
//!
//! ```
//! use std::time::Duration;
//!
//! let result = fastchain::client("https://api.example.com")
//!     .auth()
//!     .bearer_token("abc")
//!     .config()
//!     .set_timeout(Duration::from_secs(5))
//!     .config()
//!     .set_proxy("://bad")
//!     .build();
//!
//! let err = result.unwrap_err();
//! assert_eq!(err.errors().len(), 1);
//! assert!(err.to_string().contains("://bad"));
//! ```

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]

pub mod builder;

// Re-export all public API components
pub use builder::{
    AcceptValue, AuthBuilder, Client, ClientBuilder, ConfigBuilder, ContentType, HeaderBuilder,
    PreparedRequest, RequestBuilder, Target,
};

// Re-export important types from client package
pub use fastchain_client::{
    ClientConfig, Credentials, Engine, Error, HttpTransport, Kind, Policy, Proxy, Result,
    RoundTrip, TlsSettings, TlsVersion, Transport,
};
pub use fastchain_client::{error, redirect, transport};

/// Start configuring a client whose requests are relative to `base_url`.
///
/// Shorthand for [`ClientBuilder::new`].
pub fn client(base_url: &str) -> ClientBuilder {
    ClientBuilder::new(base_url)
}

/// Start configuring a client from a [`ClientConfig`].
///
/// Shorthand for [`ClientBuilder::from_config`].
pub fn from_config(config: &ClientConfig) -> ClientBuilder {
    ClientBuilder::from_config(config)
}
