#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use serde_json::json;
use shorturls::AppError;
use shorturls::api::routes::routes;
use shorturls::domain::entities::ShortenedUrl;
use shorturls::domain::repositories::LinkRepository;
use shorturls::infrastructure::persistence::InMemoryLinkRepository;
use shorturls::state::AppState;
use std::sync::Arc;

pub fn create_test_state() -> (AppState, Arc<InMemoryLinkRepository>) {
    let repository = Arc::new(InMemoryLinkRepository::new());
    let state = AppState::new(repository.clone());

    (state, repository)
}

pub fn create_test_server(state: AppState) -> TestServer {
    TestServer::new(routes().with_state(state)).unwrap()
}

/// Inserts `count` placeholder links so the next id is `count + 1`.
pub async fn seed_links(repository: &InMemoryLinkRepository, count: usize) {
    for i in 0..count {
        repository
            .create(format!("http://seed.example.com/{i}"))
            .await
            .unwrap();
    }
}

/// Storage backend that is always down.
pub struct UnreachableRepository;

#[async_trait]
impl LinkRepository for UnreachableRepository {
    async fn create(&self, _real_url: String) -> Result<ShortenedUrl, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<ShortenedUrl>, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }

    async fn count(&self) -> Result<i64, AppError> {
        Err(AppError::internal("Database error", json!({})))
    }

    async fn health_check(&self) -> bool {
        false
    }
}
