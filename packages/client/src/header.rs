//! Header set owned by a configuration target
//!
//! Names are case-insensitive and stored lowercase. Values are kept as the
//! caller supplied them. Finished targets carry a lossy [`http::HeaderMap`]
//! view; the strict conversion happens when a request is handed to the
//! engine, which is where a value HTTP cannot carry is refused.

use hashbrown::HashMap;
use http::header::{AUTHORIZATION, PROXY_AUTHORIZATION};
use http::{HeaderMap, HeaderName, HeaderValue};

use crate::error::{self, Error};

/// Header constants for common HTTP headers
pub mod names {
    pub use http::header::*;
}

/// Case-insensitive multi-map from header name to values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Headers {
    entries: HashMap<String, Vec<String>>,
}

impl Headers {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every value stored under `name` with `value`.
    pub fn set(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        self.entries
            .insert(name.as_ref().to_ascii_lowercase(), vec![value.into()]);
    }

    /// Add `value` under `name`, keeping the values already present.
    pub fn append(&mut self, name: impl AsRef<str>, value: impl Into<String>) {
        self.entries
            .entry(name.as_ref().to_ascii_lowercase())
            .or_default()
            .push(value.into());
    }

    /// First value stored under `name`.
    #[must_use]
    pub fn get(&self, name: impl AsRef<str>) -> Option<&str> {
        self.entries
            .get(&name.as_ref().to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Every value stored under `name`, in insertion order.
    #[must_use]
    pub fn get_all(&self, name: impl AsRef<str>) -> &[String] {
        self.entries
            .get(&name.as_ref().to_ascii_lowercase())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    #[must_use]
    pub fn contains(&self, name: impl AsRef<str>) -> bool {
        self.entries.contains_key(&name.as_ref().to_ascii_lowercase())
    }

    /// Number of distinct header names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Convert into the engine's header map.
    ///
    /// Credentials headers are marked sensitive.
    ///
    /// # Errors
    ///
    /// Returns one builder error per name or value that HTTP cannot carry.
    pub fn to_header_map(&self) -> Result<HeaderMap, Vec<Error>> {
        let (map, failures) = self.convert();
        if failures.is_empty() {
            Ok(map)
        } else {
            Err(failures)
        }
    }

    /// Convert into the engine's header map, leaving out every entry HTTP
    /// cannot carry.
    #[must_use]
    pub fn to_header_map_lossy(&self) -> HeaderMap {
        let (map, failures) = self.convert();
        for failure in &failures {
            tracing::warn!(error = %failure, "header left out of header map");
        }
        map
    }

    fn convert(&self) -> (HeaderMap, Vec<Error>) {
        let mut map = HeaderMap::with_capacity(self.entries.len());
        let mut failures = Vec::new();

        for (name, values) in &self.entries {
            let header_name = match HeaderName::from_bytes(name.as_bytes()) {
                Ok(header_name) => header_name,
                Err(e) => {
                    failures.push(error::builder(format!("invalid header name `{name}`"), e));
                    continue;
                }
            };
            let sensitive = header_name == AUTHORIZATION || header_name == PROXY_AUTHORIZATION;
            for value in values {
                match HeaderValue::from_str(value) {
                    Ok(mut header_value) => {
                        header_value.set_sensitive(sensitive);
                        map.append(header_name.clone(), header_value);
                    }
                    Err(e) => {
                        failures.push(error::builder(
                            format!("invalid value for header `{name}`"),
                            e,
                        ));
                    }
                }
            }
        }

        (map, failures)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_case_insensitive_and_last_set_wins() {
        let mut headers = Headers::new();
        headers.set("Authorization", "Bearer one");
        headers.set("AUTHORIZATION", "Bearer two");

        assert_eq!(headers.len(), 1);
        assert_eq!(headers.get("authorization"), Some("Bearer two"));
        assert_eq!(headers.get_all("Authorization"), ["Bearer two".to_string()]);
    }

    #[test]
    fn append_keeps_previous_values() {
        let mut headers = Headers::new();
        headers.append("Accept", "application/json");
        headers.append("accept", "text/plain");

        assert_eq!(headers.get_all("ACCEPT").len(), 2);
        assert_eq!(headers.get("accept"), Some("application/json"));
    }

    #[test]
    fn conversion_marks_credentials_sensitive() {
        let mut headers = Headers::new();
        headers.set("authorization", "Bearer abc");
        headers.set("x-trace", "1");

        let map = headers.to_header_map().expect("valid headers");
        assert!(map[AUTHORIZATION].is_sensitive());
        assert!(!map["x-trace"].is_sensitive());
    }

    #[test]
    fn conversion_reports_invalid_entries() {
        let mut headers = Headers::new();
        headers.set("bad header", "x");
        headers.set("x-ok", "fine");
        headers.set("x-newline", "a\nb");

        let failures = headers.to_header_map().expect_err("two invalid entries");
        assert_eq!(failures.len(), 2);
    }

    #[test]
    fn lossy_conversion_keeps_valid_entries() {
        let mut headers = Headers::new();
        headers.set("authorization", "Bearer a\nb");
        headers.append("accept", "application/json");
        headers.append("accept", "bad\rvalue");

        let map = headers.to_header_map_lossy();
        assert!(map.get(AUTHORIZATION).is_none());
        assert_eq!(map.get_all("accept").iter().count(), 1);
        assert_eq!(map["accept"], "application/json");
    }
}
