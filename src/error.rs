//! Error types for semaq semantic analysis.

use thiserror::Error;

use crate::scope::AliasCollisionError;

/// Result type alias using [`SemaqError`].
pub type Result<T> = std::result::Result<T, SemaqError>;

/// Error types for semaq semantic analysis.
///
/// Every variant fails synchronously at the point of detection and aborts
/// the current binding attempt; there is no retry or partial rollback.
/// Contract breaches in the calling binder (unboxing a non-wrapper type,
/// presenting a stale scope handle) are panics, not variants of this enum.
#[derive(Debug, Error)]
pub enum SemaqError {
    /// An alias was reused illegally within one scope.
    ///
    /// The payload keeps the offending alias and the conflicting types so
    /// the surrounding binder can build a user-facing diagnostic.
    #[error(transparent)]
    AliasCollision(#[from] AliasCollisionError),
}
