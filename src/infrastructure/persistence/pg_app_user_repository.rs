//! PostgreSQL implementation of the user repository.

use async_trait::async_trait;
use serde_json::json;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{AppUser, AppUserPatch, NewAppUser, Status};
use crate::domain::repositories::AppUserRepository;
use crate::error::AppError;

/// PostgreSQL repository for back-office users.
pub struct PgAppUserRepository {
    pool: Arc<PgPool>,
}

impl PgAppUserRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AppUserRepository for PgAppUserRepository {
    async fn create(&self, new_user: NewAppUser) -> Result<AppUser, AppError> {
        let user = sqlx::query_as::<_, AppUser>(
            r#"
            INSERT INTO app_users (first_name, last_name, user_name, email, password_hash, image_path)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, first_name, last_name, user_name, email, password_hash, image_path,
                      created_at, updated_at, deleted_at, status
            "#,
        )
        .bind(new_user.first_name)
        .bind(new_user.last_name)
        .bind(new_user.user_name)
        .bind(new_user.email)
        .bind(new_user.password_hash)
        .bind(new_user.image_path)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(user)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<AppUser>, AppError> {
        let user = sqlx::query_as::<_, AppUser>(
            r#"
            SELECT id, first_name, last_name, user_name, email, password_hash, image_path,
                   created_at, updated_at, deleted_at, status
            FROM app_users
            WHERE id = $1 AND status <> $2
            "#,
        )
        .bind(id)
        .bind(Status::Passive)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<AppUser>, AppError> {
        let user = sqlx::query_as::<_, AppUser>(
            r#"
            SELECT id, first_name, last_name, user_name, email, password_hash, image_path,
                   created_at, updated_at, deleted_at, status
            FROM app_users
            WHERE LOWER(email) = LOWER($1) AND status <> $2
            "#,
        )
        .bind(email)
        .bind(Status::Passive)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(user)
    }

    async fn find_by_user_name(&self, user_name: &str) -> Result<Option<AppUser>, AppError> {
        let user = sqlx::query_as::<_, AppUser>(
            r#"
            SELECT id, first_name, last_name, user_name, email, password_hash, image_path,
                   created_at, updated_at, deleted_at, status
            FROM app_users
            WHERE user_name = $1 AND status <> $2
            "#,
        )
        .bind(user_name)
        .bind(Status::Passive)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(user)
    }

    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<AppUser>, AppError> {
        let users = sqlx::query_as::<_, AppUser>(
            r#"
            SELECT id, first_name, last_name, user_name, email, password_hash, image_path,
                   created_at, updated_at, deleted_at, status
            FROM app_users
            WHERE status <> $1
            ORDER BY id
            OFFSET $2 LIMIT $3
            "#,
        )
        .bind(Status::Passive)
        .bind(offset)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(users)
    }

    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM app_users WHERE status <> $1")
            .bind(Status::Passive)
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }

    async fn update(&self, id: i64, patch: AppUserPatch) -> Result<AppUser, AppError> {
        let update_image = patch.image_path.is_some();
        let new_image = patch.image_path.flatten();

        let user = sqlx::query_as::<_, AppUser>(
            r#"
            UPDATE app_users SET
                first_name    = COALESCE($2::TEXT, first_name),
                last_name     = COALESCE($3::TEXT, last_name),
                user_name     = COALESCE($4::TEXT, user_name),
                email         = COALESCE($5::TEXT, email),
                password_hash = COALESCE($6::TEXT, password_hash),
                image_path    = CASE WHEN $7::BOOLEAN THEN $8::TEXT ELSE image_path END,
                status        = $9,
                updated_at    = NOW()
            WHERE id = $1 AND status <> $10
            RETURNING id, first_name, last_name, user_name, email, password_hash, image_path,
                      created_at, updated_at, deleted_at, status
            "#,
        )
        .bind(id)
        .bind(patch.first_name)
        .bind(patch.last_name)
        .bind(patch.user_name)
        .bind(patch.email)
        .bind(patch.password_hash)
        .bind(update_image)
        .bind(new_image)
        .bind(Status::Modified)
        .bind(Status::Passive)
        .fetch_optional(self.pool.as_ref())
        .await?;

        user.ok_or_else(|| AppError::not_found("User not found", json!({ "id": id })))
    }

    async fn soft_delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query(
            r#"
            UPDATE app_users SET status = $2, deleted_at = NOW()
            WHERE id = $1 AND status <> $2
            "#,
        )
        .bind(id)
        .bind(Status::Passive)
        .execute(self.pool.as_ref())
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(
                "User not found or already deleted",
                json!({ "id": id }),
            ));
        }

        Ok(())
    }
}
