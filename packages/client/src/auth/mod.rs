//! Authorization header composition
//!
//! Turns credential inputs into a single `Authorization` header value. Every
//! composition is total: any string is accepted and well-formedness is the
//! caller's responsibility.

pub mod basic_auth;

pub use basic_auth::encode_basic_auth;

use crate::header::{Headers, names};

/// Credentials that can be written into an `Authorization` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credentials {
    /// Written verbatim
    Raw(String),
    /// `Bearer <token>`
    Bearer(String),
    /// `Basic base64(<username>:<password>)`
    Basic { username: String, password: String },
}

impl Credentials {
    pub fn raw(value: impl Into<String>) -> Self {
        Self::Raw(value.into())
    }

    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer(token.into())
    }

    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// The `Authorization` header value for these credentials.
    ///
    /// An empty bearer token yields `"Bearer "`. A colon inside a basic-auth
    /// username is not escaped, so it shifts the boundary a server sees when
    /// it decodes the pair.
    #[must_use]
    pub fn header_value(&self) -> String {
        match self {
            Self::Raw(value) => value.clone(),
            Self::Bearer(token) => format!("Bearer {token}"),
            Self::Basic { username, password } => {
                format!("Basic {}", encode_basic_auth(username, password))
            }
        }
    }

    /// Overwrite the `Authorization` header in `headers`.
    ///
    /// Exactly one header name is touched; previous values are replaced.
    pub fn apply(&self, headers: &mut Headers) {
        headers.set(names::AUTHORIZATION, self.header_value());
    }

    #[must_use]
    pub fn auth_type(&self) -> &'static str {
        match self {
            Self::Raw(_) => "Raw",
            Self::Bearer(_) => "Bearer",
            Self::Basic { .. } => "Basic",
        }
    }
}
