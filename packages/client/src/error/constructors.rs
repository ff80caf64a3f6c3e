use std::borrow::Cow;

use super::types::{BoxError, Error, Kind};

/// Creates an `Error` for a deferred configuration failure.
///
/// Both the descriptive message and the underlying cause are preserved: the
/// message is part of `Display`, the cause is reachable through `source()`.
pub fn config<E: Into<BoxError>>(message: impl Into<Cow<'static, str>>, e: E) -> Error {
    Error::new(Kind::Config).with_message(message).with(e.into())
}

/// Creates an `Error` for a value the HTTP engine cannot carry.
pub fn builder<E: Into<BoxError>>(message: impl Into<Cow<'static, str>>, e: E) -> Error {
    Error::new(Kind::Builder).with_message(message).with(e.into())
}

/// Creates an `Error` for a URL that failed to parse.
pub fn invalid_url(input: &str, e: url::ParseError) -> Error {
    config(format!("failed to parse URL `{input}`"), e)
}

/// Aggregates every collected failure into a single report.
pub fn validation(errors: Vec<Error>) -> Error {
    Error::new(Kind::Validation).with_errors(errors)
}
