//! Shared pieces of the fluent surface
//!
//! Contains the [`Target`] trait every configurable object implements and the
//! [`ContentType`] enumeration used by the header scope.

use fastchain_client::{Engine, Headers, Validations};

mod sealed {
    pub trait Sealed {}
}

/// An object a chain progressively configures: a client or a single request.
///
/// Scopes reach the target's header set, engine handle and validation ledger
/// through this trait and never hold on to the target beyond one call.
pub trait Target: sealed::Sealed {
    #[doc(hidden)]
    fn headers_mut(&mut self) -> &mut Headers;

    #[doc(hidden)]
    fn engine_mut(&mut self) -> &mut Engine;

    #[doc(hidden)]
    fn validations_mut(&mut self) -> &mut Validations;
}

impl sealed::Sealed for crate::builder::client::ClientBuilder {}
impl sealed::Sealed for crate::builder::request::RequestBuilder {}

/// Content type enumeration for elegant API
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    /// application/json content type
    ApplicationJson,
    /// application/x-www-form-urlencoded content type
    ApplicationFormUrlEncoded,
    /// application/octet-stream content type
    ApplicationOctetStream,
    /// text/plain content type
    TextPlain,
    /// text/html content type
    TextHtml,
    /// multipart/form-data content type
    MultipartFormData,
}

impl ContentType {
    /// Convert content type to string representation
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::ApplicationJson => "application/json",
            ContentType::ApplicationFormUrlEncoded => "application/x-www-form-urlencoded",
            ContentType::ApplicationOctetStream => "application/octet-stream",
            ContentType::TextPlain => "text/plain",
            ContentType::TextHtml => "text/html",
            ContentType::MultipartFormData => "multipart/form-data",
        }
    }
}
