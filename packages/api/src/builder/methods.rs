//! HTTP method shorthands
//!
//! Entry points that open a request-scoped chain on a finished [`Client`].

use fastchain_client::Method;

use crate::builder::client::Client;
use crate::builder::request::RequestBuilder;

impl Client {
    /// Start a GET request
    ///
    /// # Examples
    /// ```
    /// use fastchain::ClientBuilder;
    ///
    /// let client = ClientBuilder::new("https://api.example.com/v1").build()?;
    /// let request = client
    ///     .get("users")
    ///     .auth()
    ///     .bearer_token("per-request")
    ///     .build()?;
    /// assert_eq!(request.url().as_str(), "https://api.example.com/v1/users");
    /// # Ok::<(), fastchain::Error>(())
    /// ```
    pub fn get(&self, path: &str) -> RequestBuilder {
        self.request(Method::GET, path)
    }

    /// Start a POST request
    pub fn post(&self, path: &str) -> RequestBuilder {
        self.request(Method::POST, path)
    }

    /// Start a PUT request
    pub fn put(&self, path: &str) -> RequestBuilder {
        self.request(Method::PUT, path)
    }

    /// Start a PATCH request
    pub fn patch(&self, path: &str) -> RequestBuilder {
        self.request(Method::PATCH, path)
    }

    /// Start a DELETE request
    pub fn delete(&self, path: &str) -> RequestBuilder {
        self.request(Method::DELETE, path)
    }

    /// Start a HEAD request
    pub fn head(&self, path: &str) -> RequestBuilder {
        self.request(Method::HEAD, path)
    }
}
