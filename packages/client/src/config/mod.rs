//! Configuration defaults and file-backed client configuration

pub mod client;
pub mod defaults;

pub use client::ClientConfig;
pub use defaults::ConfigDefaults;
