//! Store error taxonomy shared by all implementations.

use thiserror::Error;

/// Failure of a single store operation.
///
/// `NotFound` and `Conflict` are the only cases callers branch on; anything
/// else (connection loss, timeout, unexpected driver error) collapses into
/// `Unavailable` and is terminal for the request. No retries.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested row is absent.
    #[error("row not found")]
    NotFound,

    /// A unique field already holds the given value. Carries the field name.
    #[error("unique field already taken: {0}")]
    Conflict(String),

    /// Any other storage failure.
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    pub fn conflict(field: impl Into<String>) -> Self {
        Self::Conflict(field.into())
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    /// True when the failure is a unique-field collision.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict(_))
    }
}
