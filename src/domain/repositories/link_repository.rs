//! Repository trait for shortened URL storage.

use crate::domain::entities::ShortenedUrl;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for stored URLs.
///
/// Storage owns id assignment: ids are unique, increase monotonically and are
/// never reused or supplied by the caller.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::InMemoryLinkRepository`] - Process-local implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Stores a normalized URL and returns the record with its new id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is longer than
    /// [`crate::domain::entities::MAX_URL_LENGTH`].
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn create(&self, real_url: String) -> Result<ShortenedUrl, AppError>;

    /// Finds a record by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(ShortenedUrl))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn find_by_id(&self, id: i64) -> Result<Option<ShortenedUrl>, AppError>;

    /// Counts stored records.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    async fn count(&self) -> Result<i64, AppError>;

    /// Checks if the storage backend is reachable.
    async fn health_check(&self) -> bool;
}
