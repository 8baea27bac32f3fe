//! Link shortening and resolution service.

use std::sync::Arc;

use crate::domain::entities::ShortenedUrl;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::codec;
use crate::utils::url_normalizer::normalize_url;
use serde_json::json;
use tracing::{debug, info};

/// Service for creating shortened links and resolving short codes.
///
/// Short codes are derived from the id storage assigns, so creating a link is
/// a single insert and resolving a code is a single lookup by id.
pub struct LinkService<R: LinkRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: LinkRepository + ?Sized> LinkService<R> {
    /// Creates a new link service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Normalizes and stores a URL, returning the stored record.
    ///
    /// The short code is available through [`ShortenedUrl::code`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is empty, uses an
    /// unsupported scheme, is not an absolute URL, or is too long to store.
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn shorten(&self, link: &str) -> Result<ShortenedUrl, AppError> {
        let real_url = normalize_url(link)?;

        let record = self.repository.create(real_url).await?;
        info!(id = record.id, code = %record.code(), "Created short link");

        Ok(record)
    }

    /// Resolves a short code to its stored record.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the code is malformed, out of range,
    /// or does not belong to a stored record.
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn resolve(&self, code: &str) -> Result<ShortenedUrl, AppError> {
        let id = codec::decode(code)?;

        let Ok(id) = i64::try_from(id) else {
            debug!(code, "Short code is beyond the id range");
            return Err(Self::not_found(code));
        };

        match self.repository.find_by_id(id).await? {
            Some(record) => Ok(record),
            None => {
                debug!(code, id, "No link stored for short code");
                Err(Self::not_found(code))
            }
        }
    }

    /// Returns the number of stored links.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn count(&self) -> Result<i64, AppError> {
        self.repository.count().await
    }

    /// Checks if the storage backend is reachable.
    pub async fn is_healthy(&self) -> bool {
        self.repository.health_check().await
    }

    fn not_found(code: &str) -> AppError {
        AppError::not_found("Short link not found", json!({ "code": code }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::MockLinkRepository;

    fn service(repository: MockLinkRepository) -> LinkService<MockLinkRepository> {
        LinkService::new(Arc::new(repository))
    }

    #[tokio::test]
    async fn test_shorten_stores_normalized_url() {
        let mut mock_repo = MockLinkRepository::new();

        mock_repo
            .expect_create()
            .withf(|url| url == "http://www.something.com")
            .times(1)
            .returning(|url| Ok(ShortenedUrl::new(250, url)));

        let record = service(mock_repo)
            .shorten("www.something.com")
            .await
            .unwrap();

        assert_eq!(record.id, 250);
        assert_eq!(record.real_url, "http://www.something.com");
        assert_eq!(record.code(), "ec");
    }

    #[tokio::test]
    async fn test_shorten_empty_url() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_create().times(0);

        let result = service(mock_repo).shorten("").await;

        let err = result.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.to_string(), "URL is required");
    }

    #[tokio::test]
    async fn test_shorten_unsupported_scheme() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_create().times(0);

        let result = service(mock_repo)
            .shorten("foo://www.something.com")
            .await;

        let err = result.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
        assert_eq!(err.to_string(), "URL scheme not supported");
    }

    #[tokio::test]
    async fn test_shorten_propagates_storage_errors() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_create()
            .times(1)
            .returning(|_| Err(AppError::internal("Database error", json!({}))));

        let result = service(mock_repo).shorten("https://example.com").await;

        assert!(matches!(result.unwrap_err(), AppError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_resolve_decodes_code_to_id() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_find_by_id()
            .withf(|id| *id == 20353)
            .times(1)
            .returning(|id| Ok(Some(ShortenedUrl::new(id, "https://example.com".to_string()))));

        let record = service(mock_repo).resolve("fsr").await.unwrap();

        assert_eq!(record.id, 20353);
        assert_eq!(record.real_url, "https://example.com");
    }

    #[tokio::test]
    async fn test_resolve_unknown_code() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo
            .expect_find_by_id()
            .times(1)
            .returning(|_| Ok(None));

        let result = service(mock_repo).resolve("ab2").await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_resolve_malformed_code_skips_storage() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_find_by_id().times(0);

        let service = service(mock_repo);

        assert!(matches!(
            service.resolve("not-a-code").await.unwrap_err(),
            AppError::NotFound { .. }
        ));
        assert!(matches!(
            service.resolve("").await.unwrap_err(),
            AppError::NotFound { .. }
        ));
    }

    #[tokio::test]
    async fn test_resolve_code_beyond_id_range() {
        let mut mock_repo = MockLinkRepository::new();
        mock_repo.expect_find_by_id().times(0);

        let code = codec::encode(i64::MAX as u64 + 1);
        let result = service(mock_repo).resolve(&code).await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
