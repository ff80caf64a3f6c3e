//! Fastchain client prelude
//!
//! The types a chain touches directly.

pub use crate::auth::Credentials;
pub use crate::config::{ClientConfig, ConfigDefaults};
pub use crate::engine::Engine;
pub use crate::error::{Error, Kind, Result};
pub use crate::header::Headers;
pub use crate::proxy::{Proxy, ProxyError};
pub use crate::redirect::Policy;
pub use crate::transport::{HttpTransport, RoundTrip, TlsSettings, TlsVersion, Transport};
pub use crate::validation::Validations;

// HTTP standard types from http crate
pub use ::http::{HeaderMap, HeaderName, HeaderValue, Method, StatusCode};

// URL handling
pub use url::Url;
