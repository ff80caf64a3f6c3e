//! Header scope
//!
//! Provides methods for setting and adding HTTP headers including common
//! headers like Content-Type, Accept and User-Agent. Values are not checked
//! here; a request refuses anything HTTP cannot carry when it is sent.

use fastchain_client::header::names;

use crate::builder::core::{ContentType, Target};

/// Helper type for accept method that can handle both strings and ContentType enums
pub enum AcceptValue {
    /// String representation of content type
    String(String),
    /// ContentType enum variant
    ContentType(ContentType),
}

impl AcceptValue {
    /// Convert to string representation
    pub fn as_str(&self) -> &str {
        match self {
            AcceptValue::String(s) => s,
            AcceptValue::ContentType(ct) => ct.as_str(),
        }
    }
}

impl From<&str> for AcceptValue {
    fn from(s: &str) -> Self {
        AcceptValue::String(s.to_string())
    }
}

impl From<String> for AcceptValue {
    fn from(s: String) -> Self {
        AcceptValue::String(s)
    }
}

impl From<ContentType> for AcceptValue {
    fn from(ct: ContentType) -> Self {
        AcceptValue::ContentType(ct)
    }
}

/// Scope for adding and replacing headers on a client or request.
#[must_use = "a header scope does nothing until one of its methods is called"]
pub struct HeaderBuilder<'a, T: Target> {
    parent: &'a mut T,
}

impl<'a, T: Target> HeaderBuilder<'a, T> {
    pub(crate) fn new(parent: &'a mut T) -> Self {
        Self { parent }
    }

    /// Add a value for `name`, keeping values already present.
    pub fn add(self, name: impl AsRef<str>, value: impl Into<String>) -> &'a mut T {
        self.parent.headers_mut().append(name, value);
        self.parent
    }

    /// Replace every value of `name` with `value`.
    pub fn set(self, name: impl AsRef<str>, value: impl Into<String>) -> &'a mut T {
        self.parent.headers_mut().set(name, value);
        self.parent
    }

    /// Add multiple headers without overwriting existing ones
    ///
    /// # Examples
    /// ```
    /// use fastchain::ClientBuilder;
    ///
    /// let client = ClientBuilder::new("https://api.example.com")
    ///     .header()
    ///     .add_all([("x-api-version", "v1"), ("x-api-version", "v2")])
    ///     .build()?;
    /// assert_eq!(client.headers().get_all("x-api-version").iter().count(), 2);
    /// # Ok::<(), fastchain::Error>(())
    /// ```
    pub fn add_all<I, K, V>(self, headers: I) -> &'a mut T
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let target = self.parent.headers_mut();
        for (name, value) in headers {
            target.append(name, value);
        }
        self.parent
    }

    /// Replace the values of every name in `headers`.
    pub fn set_all<I, K, V>(self, headers: I) -> &'a mut T
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let target = self.parent.headers_mut();
        for (name, value) in headers {
            target.set(name, value);
        }
        self.parent
    }

    /// Add an Accept header - supports both string and ContentType enum
    pub fn add_accept<A: Into<AcceptValue>>(self, accept: A) -> &'a mut T {
        let accept = accept.into();
        self.add(names::ACCEPT, accept.as_str())
    }

    /// Add a Content-Type header using the `ContentType` enum
    pub fn add_content_type(self, content_type: ContentType) -> &'a mut T {
        self.add(names::CONTENT_TYPE, content_type.as_str())
    }

    /// Add a User-Agent header
    pub fn add_user_agent(self, user_agent: impl Into<String>) -> &'a mut T {
        self.add(names::USER_AGENT, user_agent)
    }
}
