//! Deferred validation ledger
//!
//! Failures produced while a chain is configuring a target are appended here
//! instead of interrupting the chain. The ledger is read exactly once, at
//! finalize, and turned into a single aggregated error.

use crate::error::{self, Error};

/// Ordered, append-only collection of deferred configuration errors.
#[derive(Debug, Default)]
pub struct Validations {
    errors: Vec<Error>,
}

impl Validations {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure. Arrival order is preserved.
    pub fn push(&mut self, error: Error) {
        tracing::debug!(error = %error, position = self.errors.len(), "deferred configuration error");
        self.errors.push(error);
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Error> {
        self.errors.iter()
    }

    /// Drain the ledger into a result.
    ///
    /// # Errors
    ///
    /// Returns a [`Kind::Validation`](crate::error::Kind::Validation) error
    /// carrying every recorded failure when the ledger is not empty.
    pub fn into_result(self) -> error::Result<()> {
        if self.errors.is_empty() {
            return Ok(());
        }
        tracing::warn!(count = self.errors.len(), "configuration failed validation");
        Err(error::validation(self.errors))
    }
}
