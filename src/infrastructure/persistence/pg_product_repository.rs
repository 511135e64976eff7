//! PostgreSQL implementation of the product repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::{PgPool, Postgres, Transaction};
use std::sync::Arc;

use crate::domain::entities::{NewProduct, Product, ProductPatch, Status};
use crate::domain::repositories::ProductRepository;
use crate::error::AppError;

/// PostgreSQL repository for products.
///
/// Inserts and category moves hold `FOR SHARE` on the target category until
/// commit. A missing or soft-deleted category surfaces as
/// [`AppError::Validation`].
pub struct PgProductRepository {
    pool: Arc<PgPool>,
}

impl PgProductRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

async fn lock_active_category(
    tx: &mut Transaction<'_, Postgres>,
    category_id: i64,
) -> Result<(), AppError> {
    let locked: Option<i64> = sqlx::query_scalar(
        "SELECT id FROM categories WHERE id = $1 AND status <> $2 FOR SHARE",
    )
    .bind(category_id)
    .bind(Status::Passive)
    .fetch_optional(&mut **tx)
    .await?;

    match locked {
        Some(_) => Ok(()),
        None => Err(AppError::bad_request(
            "Category does not exist",
            json!({ "category_id": category_id }),
        )),
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn create(&self, new_product: NewProduct) -> Result<Product, AppError> {
        let mut tx = self.pool.begin().await?;
        lock_active_category(&mut tx, new_product.category_id).await?;

        let product = sqlx::query_as::<_, Product>(
            r#"
            INSERT INTO products
                (name, slug, description, unit_price, units_in_stock, image_path, category_id)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, name, slug, description, unit_price, units_in_stock, image_path,
                      category_id, created_at, updated_at, deleted_at, status
            "#,
        )
        .bind(new_product.name)
        .bind(new_product.slug)
        .bind(new_product.description)
        .bind(new_product.unit_price)
        .bind(new_product.units_in_stock)
        .bind(new_product.image_path)
        .bind(new_product.category_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(product)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, slug, description, unit_price, units_in_stock, image_path,
                   category_id, created_at, updated_at, deleted_at, status
            FROM products
            WHERE id = $1 AND status <> $2
            "#,
        )
        .bind(id)
        .bind(Status::Passive)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(product)
    }

    async fn find_by_slug(&self, slug: &str) -> Result<Option<Product>, AppError> {
        let product = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, slug, description, unit_price, units_in_stock, image_path,
                   category_id, created_at, updated_at, deleted_at, status
            FROM products
            WHERE slug = $1 AND status <> $2
            "#,
        )
        .bind(slug)
        .bind(Status::Passive)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(product)
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Product>, AppError> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, slug, description, unit_price, units_in_stock, image_path,
                   category_id, created_at, updated_at, deleted_at, status
            FROM products
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

        Ok(products)
    }

    async fn list_by_category(
        &self,
        category_id: i64,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Product>, AppError> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT id, name, slug, description, unit_price, units_in_stock, image_path,
                   category_id, created_at, updated_at, deleted_at, status
            FROM products
            WHERE category_id = $1 AND status <> $2
            ORDER BY name, id
            OFFSET $3 LIMIT $4
            "#,
        )
        .bind(category_id)
        .bind(Status::Passive)
        .bind(offset)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(products)
    }

    async fn count(&self, category_id: Option<i64>) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*) FROM products
            WHERE status <> $1
              AND ($2::BIGINT IS NULL OR category_id = $2)
            "#,
        )
        .bind(Status::Passive)
        .bind(category_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }

    async fn update(&self, id: i64, patch: ProductPatch) -> Result<Product, AppError> {
        let update_description = patch.description.is_some();
        let new_description = patch.description.flatten();
        let update_image = patch.image_path.is_some();
        let new_image = patch.image_path.flatten();

        let mut tx = self.pool.begin().await?;
        if let Some(category_id) = patch.category_id {
            lock_active_category(&mut tx, category_id).await?;
        }

        let product = sqlx::query_as::<_, Product>(
            r#"
            UPDATE products SET
                name           = COALESCE($2::TEXT, name),
                slug           = COALESCE($3::TEXT, slug),
                description    = CASE WHEN $4::BOOLEAN THEN $5::TEXT ELSE description END,
                unit_price     = COALESCE($6::NUMERIC, unit_price),
                units_in_stock = COALESCE($7::INTEGER, units_in_stock),
                image_path     = CASE WHEN $8::BOOLEAN THEN $9::TEXT ELSE image_path END,
                category_id    = COALESCE($10::BIGINT, category_id),
                status         = $11,
                updated_at     = NOW()
            WHERE id = $1 AND status <> $12
            RETURNING id, name, slug, description, unit_price, units_in_stock, image_path,
                      category_id, created_at, updated_at, deleted_at, status
            "#,
        )
        .bind(id)
        .bind(patch.name)
        .bind(patch.slug)
        .bind(update_description)
        .bind(new_description)
        .bind(patch.unit_price)
        .bind(patch.units_in_stock)
        .bind(update_image)
        .bind(new_image)
        .bind(patch.category_id)
        .bind(Status::Modified)
        .bind(Status::Passive)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(product) = product else {
            tx.rollback().await?;
            return Err(AppError::not_found("Product not found", json!({ "id": id })));
        };

        tx.commit().await?;
        Ok(product)
    }

    async fn soft_delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE products SET status = $2, deleted_at = NOW()
            WHERE id = $1 AND status <> $2
            "#,
        )
        .bind(id)
        .bind(Status::Passive)
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "Product not found or already deleted",
                json!({ "id": id }),
            ));
        }

        Ok(())
    }
}
