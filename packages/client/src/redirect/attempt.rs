//! One redirect decision
//!
//! The engine builds an [`Attempt`] for every redirect response it receives
//! and asks the installed [`Policy`](super::Policy) to turn it into an
//! [`Action`].

use std::error::Error as StdError;

use http::StatusCode;

use crate::Url;

/// The redirect response being decided on, and the chain that led to it.
///
/// Custom policies read the status to tell permanent from temporary moves and
/// the previous hops to bound or inspect the chain.
#[derive(Debug)]
pub struct Attempt<'a> {
    status: StatusCode,
    next: &'a Url,
    previous: &'a [Url],
}

/// The verdict a policy hands back for an [`Attempt`].
#[derive(Debug)]
pub struct Action {
    inner: ActionKind,
}

/// What the engine does with the redirect response.
#[derive(Debug)]
pub enum ActionKind {
    /// Issue a request to the next URL
    Follow,
    /// Stop and hand the redirect response itself back as the result
    Stop,
    /// Fail the request
    Error(Box<dyn StdError + Send + Sync>),
}

impl<'a> Attempt<'a> {
    pub(crate) fn new(status: StatusCode, next: &'a Url, previous: &'a [Url]) -> Self {
        Self {
            status,
            next,
            previous,
        }
    }

    /// Status code of the redirect response.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Location the response points at.
    #[must_use]
    pub fn url(&self) -> &Url {
        self.next
    }

    /// URLs already requested in this chain, oldest first.
    #[must_use]
    pub fn previous(&self) -> &[Url] {
        self.previous
    }

    #[must_use]
    pub fn follow(self) -> Action {
        Action::from(ActionKind::Follow)
    }

    /// Hand the redirect response back as the final response.
    #[must_use]
    pub fn stop(self) -> Action {
        Action::from(ActionKind::Stop)
    }

    /// Fail the request with `error`.
    pub fn error<E: Into<Box<dyn StdError + Send + Sync>>>(self, error: E) -> Action {
        Action::from(ActionKind::Error(error.into()))
    }
}

impl Action {
    #[must_use]
    pub fn kind(&self) -> &ActionKind {
        &self.inner
    }

    #[must_use]
    pub fn into_kind(self) -> ActionKind {
        self.inner
    }
}

impl From<ActionKind> for Action {
    fn from(inner: ActionKind) -> Self {
        Self { inner }
    }
}
