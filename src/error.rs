use thiserror::Error;

/// Failure reported by the storage boundary.
///
/// Wraps whatever the storage engine surfaced: connectivity failure,
/// constraint violation, malformed statement. Repository operations contain
/// these; the presentation layer decides how to display them.
#[derive(Debug, Error)]
#[error("storage error: {0}")]
pub struct StorageError(#[from] sqlx::Error);
