//! Fluent builder modules
//!
//! Targets ([`ClientBuilder`], [`RequestBuilder`]) and the scopes that
//! configure them ([`AuthBuilder`], [`ConfigBuilder`], [`HeaderBuilder`]).

pub mod auth;
pub mod client;
pub mod config;
pub mod core;
pub mod headers;
pub mod methods;
pub mod request;

pub use auth::AuthBuilder;
pub use client::{Client, ClientBuilder};
pub use config::ConfigBuilder;
pub use self::core::{ContentType, Target};
pub use headers::{AcceptValue, HeaderBuilder};
pub use request::{PreparedRequest, RequestBuilder};
