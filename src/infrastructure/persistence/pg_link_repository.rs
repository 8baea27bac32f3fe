//! PostgreSQL implementation of link repository.

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use std::sync::Arc;

use crate::domain::entities::ShortenedUrl;
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// PostgreSQL repository for stored URLs.
///
/// Ids come from the `BIGSERIAL` sequence of the `shortened_urls` table,
/// which keeps them unique under concurrent inserts.
pub struct PgLinkRepository {
    pool: Arc<PgPool>,
}

impl PgLinkRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
struct ShortenedUrlRow {
    id: i64,
    real_url: String,
}

impl From<ShortenedUrlRow> for ShortenedUrl {
    fn from(row: ShortenedUrlRow) -> Self {
        ShortenedUrl::new(row.id, row.real_url)
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    async fn create(&self, real_url: String) -> Result<ShortenedUrl, AppError> {
        let row = sqlx::query_as::<_, ShortenedUrlRow>(
            r#"
            INSERT INTO shortened_urls (real_url)
            VALUES ($1)
            RETURNING id, real_url
            "#,
        )
        .bind(real_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<ShortenedUrl>, AppError> {
        let row = sqlx::query_as::<_, ShortenedUrlRow>(
            r#"
            SELECT id, real_url
            FROM shortened_urls
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(row.map(Into::into))
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM shortened_urls")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
