use std::borrow::Cow;
use std::error::Error as StdError;
use std::fmt;

/// A Result alias where the Err case is `fastchain_client::Error`.
pub type Result<T> = std::result::Result<T, Error>;

/// Boxed error used for caller-supplied causes.
pub type BoxError = Box<dyn StdError + Send + Sync>;

/// Represents errors collected while configuring a client or request.
pub struct Error {
    inner: Box<Inner>,
}

struct Inner {
    kind: Kind,
    message: Option<Cow<'static, str>>,
    source: Option<BoxError>,
    errors: Vec<Error>,
}

/// The category of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    /// A finished target could not be handed to the HTTP engine
    Builder,
    /// A deferred configuration failure recorded during a chain
    Config,
    /// Every failure collected by one chain, reported together at finalize
    Validation,
}

impl Error {
    pub fn new(kind: Kind) -> Error {
        Error {
            inner: Box::new(Inner {
                kind,
                message: None,
                source: None,
                errors: Vec::new(),
            }),
        }
    }

    #[must_use = "Error builder methods return a new Error and should be used"]
    pub fn with<E: Into<BoxError>>(mut self, source: E) -> Error {
        self.inner.source = Some(source.into());
        self
    }

    #[must_use = "Error builder methods return a new Error and should be used"]
    pub fn with_message(mut self, message: impl Into<Cow<'static, str>>) -> Error {
        self.inner.message = Some(message.into());
        self
    }

    #[must_use]
    pub(crate) fn with_errors(mut self, errors: Vec<Error>) -> Self {
        self.inner.errors = errors;
        self
    }

    /// The category of this error.
    #[must_use]
    pub fn kind(&self) -> Kind {
        self.inner.kind
    }

    /// The descriptive message attached when the error was recorded, if any.
    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.inner.message.as_deref()
    }

    /// The individual failures carried by a [`Kind::Validation`] error, in the
    /// order they were recorded. Empty for every other kind.
    #[must_use]
    pub fn errors(&self) -> &[Error] {
        &self.inner.errors
    }

    pub fn is_config(&self) -> bool {
        self.inner.kind == Kind::Config
    }

    pub fn is_validation(&self) -> bool {
        self.inner.kind == Kind::Validation
    }
}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut f = f.debug_struct("fastchain::Error");

        f.field("kind", &self.inner.kind);

        if let Some(ref message) = self.inner.message {
            f.field("message", message);
        }

        if let Some(ref source) = self.inner.source {
            f.field("source", source);
        }

        if !self.inner.errors.is_empty() {
            f.field("errors", &self.inner.errors);
        }

        f.finish()
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner.kind {
            Kind::Builder => f.write_str("builder error")?,
            Kind::Config => f.write_str("configuration error")?,
            Kind::Validation => {
                let count = self.inner.errors.len();
                let noun = if count == 1 { "error" } else { "errors" };
                write!(f, "{count} configuration {noun}")?;
                for (index, error) in self.inner.errors.iter().enumerate() {
                    let sep = if index == 0 { ": " } else { "; " };
                    write!(f, "{sep}{error}")?;
                }
                return Ok(());
            }
        }

        if let Some(ref message) = self.inner.message {
            write!(f, ": {message}")?;
        }
        if let Some(ref source) = self.inner.source {
            write!(f, ": {source}")?;
        }
        Ok(())
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner
            .source
            .as_ref()
            .map(|err| &**err as &(dyn StdError + 'static))
    }
}
