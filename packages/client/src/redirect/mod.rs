//! Redirect Handling
//!
//! By default the engine follows redirects with a maximum chain of
//! [`ConfigDefaults::MAX_REDIRECTS`](crate::config::ConfigDefaults::MAX_REDIRECTS)
//! hops. A [`Policy`] installed on the engine handle is consulted once per
//! redirect response and decides whether to follow, stop, or fail.

pub mod attempt;
pub mod policy;

pub use attempt::{Action, ActionKind, Attempt};
pub use policy::Policy;
