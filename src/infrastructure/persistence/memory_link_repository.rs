//! In-memory implementation of link repository.

use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::json;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::entities::{MAX_URL_LENGTH, ShortenedUrl};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Process-local repository backed by a [`DashMap`].
///
/// Ids come from an atomic counter starting at 1, mirroring a database
/// sequence. Contents are lost when the process exits.
#[derive(Debug)]
pub struct InMemoryLinkRepository {
    storage: DashMap<i64, String>,
    next_id: AtomicI64,
}

impl InMemoryLinkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self {
            storage: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryLinkRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkRepository for InMemoryLinkRepository {
    async fn create(&self, real_url: String) -> Result<ShortenedUrl, AppError> {
        if real_url.chars().count() > MAX_URL_LENGTH {
            return Err(AppError::bad_request(
                "URL is too long",
                json!({ "max_length": MAX_URL_LENGTH }),
            ));
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.storage.insert(id, real_url.clone());

        Ok(ShortenedUrl::new(id, real_url))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ShortenedUrl>, AppError> {
        Ok(self
            .storage
            .get(&id)
            .map(|entry| ShortenedUrl::new(id, entry.value().clone())))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Ok(self.storage.len() as i64)
    }

    async fn health_check(&self) -> bool {
        true
    }
}
