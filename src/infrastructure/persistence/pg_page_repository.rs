//! PostgreSQL implementation of the page repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewPage, Page, PagePatch, Status};
use crate::domain::repositories::PageRepository;
use crate::error::AppError;

/// PostgreSQL repository for content pages.
pub struct PgPageRepository {
    pool: Arc<PgPool>,
}

impl PgPageRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PageRepository for PgPageRepository {
    async fn create(&self, new_page: NewPage) -> Result<Page, AppError> {
        let page = sqlx::query_as::<_, Page>(
            r#"
            INSERT INTO pages (title, slug, content)
            VALUES ($1, $2, $3)
            RETURNING id, title, slug, content, created_at, updated_at, deleted_at, status
            "#,
        )
        .bind(new_page.title)
        .bind(new_page.slug)
        .bind(new_page.content)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(page)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Page>, AppError> {
        let page = sqlx::query_as::<_, Page>(
            r#"
            SELECT id, title, slug, content, created_at, updated_at, deleted_at, status
            FROM pages
            WHERE id = $1 AND status <> $2
            "#,
        )
        .bind(id)
        .bind(Status::Passive)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(page)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Page>, AppError> {
        let page = sqlx::query_as::<_, Page>(
            r#"
            SELECT id, title, slug, content, created_at, updated_at, deleted_at, status
            FROM pages
            WHERE slug = $1 AND status <> $2
            "#,
        )
        .bind(slug)
        .bind(Status::Passive)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(page)
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Page>, AppError> {
        let pages = sqlx::query_as::<_, Page>(
            r#"
            SELECT id, title, slug, content, created_at, updated_at, deleted_at, status
            FROM pages
            WHERE status <> $1
            ORDER BY title, id
            OFFSET $2 LIMIT $3
            "#,
        )
        .bind(Status::Passive)
        .bind(offset)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(pages)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pages WHERE status <> $1")
            .bind(Status::Passive)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn update(&self, id: i64, patch: PagePatch) -> Result<Page, AppError> {
        let page = sqlx::query_as::<_, Page>(
            r#"
            UPDATE pages SET
                title      = COALESCE($2::TEXT, title),
                slug       = COALESCE($3::TEXT, slug),
                content    = COALESCE($4::TEXT, content),
                status     = $5,
                updated_at = NOW()
            WHERE id = $1 AND status <> $6
            RETURNING id, title, slug, content, created_at, updated_at, deleted_at, status
            "#,
        )
        .bind(id)
        .bind(patch.title)
        .bind(patch.slug)
        .bind(patch.content)
        .bind(Status::Modified)
        .bind(Status::Passive)
        .fetch_optional(self.pool.as_ref())
        .await?;

        page.ok_or_else(|| AppError::not_found("Page not found", json!({ "id": id })))
    }

    async fn soft_delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE pages SET status = $2, deleted_at = NOW()
            WHERE id = $1 AND status <> $2
            "#,
        )
        .bind(id)
        .bind(Status::Passive)
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Page not found or already deleted",
                json!({ "id": id }),
            ));
        }

        Ok(())
    }
}
