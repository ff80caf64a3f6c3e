//! # Fastchain client model
//!
//! The engine-facing half of fastchain: the values a fluent chain writes into
//! and the rules for combining them.
//!
//! - [`header::Headers`]: case-insensitive header set owned by a target
//! - [`auth::Credentials`]: `Authorization` header composition
//! - [`validation::Validations`]: deferred configuration errors, drained at finalize
//! - [`transport`]: default-shaped vs. custom transports and proxy resolution
//! - [`redirect::Policy`]: the engine's per-redirect decision hook
//! - [`engine::Engine`]: transport, timeout and redirect policy for one target
//!
//! Nothing here performs network I/O; a finished client is handed to an HTTP
//! engine that does.

#![deny(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod auth;
pub mod config;
pub mod engine;
pub mod error;
pub mod header;
pub mod proxy;
pub mod redirect;
pub mod transport;
pub mod validation;

pub mod prelude;

pub use crate::prelude::*;
