//! Redirect policies

use std::fmt;
use std::sync::Arc;

use http::StatusCode;

use super::attempt::{Action, ActionKind, Attempt};
use crate::Url;
use crate::config::ConfigDefaults;

/// A type that controls the policy on how to handle the following of redirects.
///
/// The default value will catch redirect loops, and has a maximum of 10
/// redirects it will follow in a chain before returning an error.
#[derive(Clone)]
pub struct Policy {
    inner: PolicyKind,
}

#[derive(Clone)]
enum PolicyKind {
    Custom(Arc<dyn Fn(Attempt<'_>) -> Action + Send + Sync + 'static>),
    Limit(usize),
    None,
}

/// Error returned when a chain exceeds its hop limit.
#[derive(Debug, thiserror::Error)]
#[error("too many redirects")]
pub struct TooManyRedirects;

/// Error returned when a redirect points back into the chain.
#[derive(Debug, thiserror::Error)]
#[error("infinite redirect loop detected")]
pub struct RedirectLoop;

impl Policy {
    /// Create a `Policy` with a maximum number of redirects.
    ///
    /// An `Error` will be returned if the max is reached.
    #[must_use]
    pub fn limited(max: usize) -> Self {
        Self {
            inner: PolicyKind::Limit(max),
        }
    }

    /// Create a `Policy` that does not follow any redirect.
    ///
    /// The redirect response is handed back as the final response.
    #[must_use]
    pub fn none() -> Self {
        Self {
            inner: PolicyKind::None,
        }
    }

    /// Create a custom `Policy` using the passed function.
    pub fn custom<T>(policy: T) -> Self
    where
        T: Fn(Attempt<'_>) -> Action + Send + Sync + 'static,
    {
        Self {
            inner: PolicyKind::Custom(Arc::new(policy)),
        }
    }

    /// Apply this policy to a given [`Attempt`] to produce a [`Action`].
    pub fn redirect(&self, attempt: Attempt<'_>) -> Action {
        match self.inner {
            PolicyKind::Custom(ref custom) => custom(attempt),
            PolicyKind::Limit(max) => {
                if attempt.previous().len() >= max {
                    attempt.error(TooManyRedirects)
                } else if attempt.previous().contains(attempt.url()) {
                    attempt.error(RedirectLoop)
                } else {
                    attempt.follow()
                }
            }
            PolicyKind::None => attempt.stop(),
        }
    }

    /// The redirect-decision hook the engine calls once per redirect response.
    pub fn check(&self, status: StatusCode, next: &Url, previous: &[Url]) -> ActionKind {
        let kind = self
            .redirect(Attempt::new(status, next, previous))
            .into_kind();
        if matches!(kind, ActionKind::Stop) {
            tracing::debug!(%status, next = %next, "redirect not followed, using last response");
        }
        kind
    }

    /// Whether this policy never follows.
    #[must_use]
    pub fn is_none(&self) -> bool {
        matches!(self.inner, PolicyKind::None)
    }
}

impl Default for Policy {
    fn default() -> Policy {
        Policy::limited(ConfigDefaults::MAX_REDIRECTS)
    }
}

impl fmt::Debug for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.inner {
            PolicyKind::Custom(..) => f.pad("Custom"),
            PolicyKind::Limit(max) => f.debug_struct("Limit").field("max", &max).finish(),
            PolicyKind::None => f.pad("None"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).expect("test URL should parse")
    }

    #[test]
    fn default_policy_limits_chain() {
        let policy = Policy::default();
        let next = url("http://x.y/z");
        let mut previous = (0..9)
            .map(|i| url(&format!("http://a.b/c/{i}")))
            .collect::<Vec<_>>();

        match policy.check(StatusCode::FOUND, &next, &previous) {
            ActionKind::Follow => (),
            other => panic!("unexpected {other:?}"),
        }

        previous.push(url("http://a.b.d/e/33"));

        match policy.check(StatusCode::FOUND, &next, &previous) {
            ActionKind::Error(err) if err.to_string().contains("too many redirects") => (),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn none_policy_stops_instead_of_failing() {
        let policy = Policy::none();
        let next = url("http://x.y/z");

        match policy.check(StatusCode::MOVED_PERMANENTLY, &next, &[url("http://a.b/")]) {
            ActionKind::Stop => (),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn loop_is_an_error() {
        let policy = Policy::default();
        let next = url("http://a.b/c");
        match policy.check(StatusCode::FOUND, &next, &[next.clone()]) {
            ActionKind::Error(err) if err.to_string().contains("loop") => (),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn custom_policy_decides() {
        let policy = Policy::custom(|attempt| {
            if attempt.url().host_str() == Some("foo") {
                attempt.stop()
            } else {
                attempt.follow()
            }
        });

        assert!(matches!(
            policy.check(StatusCode::FOUND, &url("http://bar/baz"), &[]),
            ActionKind::Follow
        ));
        assert!(matches!(
            policy.check(StatusCode::FOUND, &url("http://foo/baz"), &[]),
            ActionKind::Stop
        ));
    }

    #[test]
    fn custom_policy_sees_status_and_chain() {
        let policy = Policy::custom(|attempt| {
            if attempt.status() == StatusCode::MOVED_PERMANENTLY {
                attempt.stop()
            } else if attempt.previous().len() > 1 {
                attempt.error("chain too long")
            } else {
                attempt.follow()
            }
        });
        let next = url("http://a.b/next");

        assert!(matches!(
            policy.check(StatusCode::MOVED_PERMANENTLY, &next, &[]),
            ActionKind::Stop
        ));
        assert!(matches!(
            policy.check(StatusCode::FOUND, &next, &[url("http://a.b/1")]),
            ActionKind::Follow
        ));
        assert!(matches!(
            policy.check(
                StatusCode::FOUND,
                &next,
                &[url("http://a.b/1"), url("http://a.b/2")]
            ),
            ActionKind::Error(_)
        ));
    }
}
