//! PostgreSQL implementation of the category repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Category, CategoryPatch, NewCategory, Status};
use crate::domain::repositories::CategoryRepository;
use crate::error::AppError;

/// PostgreSQL repository for categories.
pub struct PgCategoryRepository {
    pool: Arc<PgPool>,
}

impl PgCategoryRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CategoryRepository for PgCategoryRepository {
    async fn create(&self, new_category: NewCategory) -> Result<Category, AppError> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            INSERT INTO categories (name, slug, description)
            VALUES ($1, $2, $3)
            RETURNING id, name, slug, description, created_at, updated_at, deleted_at, status
            "#,
        )
        .bind(new_category.name)
        .bind(new_category.slug)
        .bind(new_category.description)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(category)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, AppError> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, slug, description, created_at, updated_at, deleted_at, status
            FROM categories
            WHERE id = $1 AND status <> $2
            "#,
        )
        .bind(id)
        .bind(Status::Passive)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(category)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, AppError> {
        let category = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, slug, description, created_at, updated_at, deleted_at, status
            FROM categories
            WHERE slug = $1 AND status <> $2
            "#,
        )
        .bind(slug)
        .bind(Status::Passive)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(category)
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Category>, AppError> {
        let categories = sqlx::query_as::<_, Category>(
            r#"
            SELECT id, name, slug, description, created_at, updated_at, deleted_at, status
            FROM categories
            WHERE status <> $1
            ORDER BY name, id
            OFFSET $2 LIMIT $3
            "#,
        )
        .bind(Status::Passive)
        .bind(offset)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(categories)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM categories WHERE status <> $1")
            .bind(Status::Passive)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn update(&self, id: i64, patch: CategoryPatch) -> Result<Category, AppError> {
        let update_description = patch.description.is_some();
        let new_description = patch.description.flatten();

        let category = sqlx::query_as::<_, Category>(
            r#"
            UPDATE categories SET
                name        = COALESCE($2::TEXT, name),
                slug        = COALESCE($3::TEXT, slug),
                description = CASE WHEN $4::BOOLEAN THEN $5::TEXT ELSE description END,
                status      = $6,
                updated_at  = NOW()
            WHERE id = $1 AND status <> $7
            RETURNING id, name, slug, description, created_at, updated_at, deleted_at, status
            "#,
        )
        .bind(id)
        .bind(patch.name)
        .bind(patch.slug)
        .bind(update_description)
        .bind(new_description)
        .bind(Status::Modified)
        .bind(Status::Passive)
        .fetch_optional(self.pool.as_ref())
        .await?;

        category.ok_or_else(|| AppError::not_found("Category not found", json!({ "id": id })))
    }

    async fn soft_delete(&self, id: i64) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        // Product writes take FOR SHARE on their category, so this lock
        // serializes the emptiness check against concurrent inserts and moves.
        let locked: Option<i64> = sqlx::query_scalar(
            "SELECT id FROM categories WHERE id = $1 AND status <> $2 FOR UPDATE",
        )
        .bind(id)
        .bind(Status::Passive)
        .fetch_optional(&mut *tx)
        .await?;

        if locked.is_none() {
            tx.rollback().await?;
            return Err(AppError::not_found(
                "Category not found or already deleted",
                json!({ "id": id }),
            ));
        }

        let products: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM products WHERE category_id = $1 AND status <> $2",
        )
        .bind(id)
        .bind(Status::Passive)
        .fetch_one(&mut *tx)
        .await?;

        if products > 0 {
            tx.rollback().await?;
            return Err(AppError::conflict(
                "Cannot delete category with existing products",
                json!({ "id": id, "products_count": products }),
            ));
        }

        sqlx::query("UPDATE categories SET status = $2, deleted_at = NOW() WHERE id = $1")
            .bind(id)
            .bind(Status::Passive)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}
