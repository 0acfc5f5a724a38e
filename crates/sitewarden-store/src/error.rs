use thiserror::Error;

/// Failure modes surfaced to callers. Persistence failures are not here:
/// they are logged and swallowed inside the store, never returned.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Internal(String),
}
