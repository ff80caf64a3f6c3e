//! Serializable client configuration
//!
//! Lets a client be described in a config file instead of a chain. Values are
//! kept as plain strings so that loading never fails on a bad URL; the
//! builder replays them through its scopes and defers any failure.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClientConfig {
    pub base_url: Option<String>,
    /// Whole-request timeout in milliseconds
    pub timeout_ms: Option<u64>,
    pub follow_redirects: bool,
    pub max_redirects: Option<usize>,
    pub proxy: Option<String>,
    pub user_agent: Option<String>,
    pub headers: BTreeMap<String, String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_ms: None,
            follow_redirects: true,
            max_redirects: None,
            proxy: None,
            user_agent: None,
            headers: BTreeMap::new(),
        }
    }
}

impl ClientConfig {
    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }
}
