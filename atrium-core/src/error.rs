/// Failures crossing the store boundary.
///
/// "Not found" is never an error at this layer: point reads return
/// `Ok(None)` and callers translate that into their own 404-equivalent.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Connectivity or query failure in the backing store. Never retried
    /// here; surfaced to callers as a generic internal failure.
    #[error("store backend error: {0}")]
    Backend(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::Backend(err.to_string())
    }
}
