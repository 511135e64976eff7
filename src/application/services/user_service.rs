//! Back-office user management.

use serde_json::json;
use std::sync::Arc;

use crate::domain::entities::{AppUser, AppUserPatch, NewAppUser};
use crate::domain::repositories::AppUserRepository;
use crate::error::AppError;
use crate::utils::password::hash_password;

/// Input for creating a user. Carries the plain password, which is hashed
/// before it reaches the repository.
#[derive(Debug, Clone)]
pub struct UserRegistration {
    pub first_name: String,
    pub last_name: String,
    pub user_name: String,
    pub email: String,
    pub password: String,
    pub image_path: Option<String>,
}

/// Partial update for a user. `password` is plain text when present.
#[derive(Debug, Clone, Default)]
pub struct UserChanges {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub user_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub image_path: Option<Option<String>>,
}

pub struct UserService<R: AppUserRepository> {
    repository: Arc<R>,
}

impl<R: AppUserRepository> UserService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a user with a hashed password.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the user name or e-mail is taken.
    pub async fn create(&self, registration: UserRegistration) -> Result<AppUser, AppError> {
        let email = registration.email.trim().to_lowercase();
        let user_name = registration.user_name.trim().to_string();
        validate_user_name(&user_name)?;

        self.ensure_user_name_free(&user_name, None).await?;
        self.ensure_email_free(&email, None).await?;

        let new_user = NewAppUser {
            first_name: registration.first_name,
            last_name: registration.last_name,
            user_name,
            email,
            password_hash: hash_password(&registration.password)?,
            image_path: registration.image_path,
        };

        let user = self.repository.create(new_user).await?;
        tracing::info!(user_id = user.id, user_name = %user.user_name, "User created");

        Ok(user)
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist or is deleted.
    pub async fn get(&self, id: i64) -> Result<AppUser, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| user_not_found(id))
    }

    /// Returns one page of users and the total number of active users.
    pub async fn list(&self, offset: i64, limit: i64) -> Result<(Vec<AppUser>, i64), AppError> {
        let items = self.repository.list(offset, limit).await?;
        let total = self.repository.count().await?;
        Ok((items, total))
    }

    /// Applies `changes` to a user. A new password is re-hashed.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Conflict`] if the new user name or e-mail is taken.
    pub async fn update(&self, id: i64, changes: UserChanges) -> Result<AppUser, AppError> {
        let user_name = changes.user_name.map(|n| n.trim().to_string());
        let email = changes.email.map(|e| e.trim().to_lowercase());

        if let Some(user_name) = &user_name {
            validate_user_name(user_name)?;
            self.ensure_user_name_free(user_name, Some(id)).await?;
        }
        if let Some(email) = &email {
            self.ensure_email_free(email, Some(id)).await?;
        }

        let patch = AppUserPatch {
            first_name: changes.first_name,
            last_name: changes.last_name,
            user_name,
            email,
            password_hash: changes.password.as_deref().map(hash_password).transpose()?,
            image_path: changes.image_path,
        };

        self.repository.update(id, patch).await
    }

    /// Soft-deletes a user. Their tokens stop working immediately.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.repository.soft_delete(id).await?;
        tracing::info!(user_id = id, "User deleted");
        Ok(())
    }

    async fn ensure_user_name_free(&self, user_name: &str, owner: Option<i64>) -> Result<(), AppError> {
        match self.repository.find_by_user_name(user_name).await? {
            Some(existing) if Some(existing.id) != owner => Err(AppError::conflict(
                "User name already exists",
                json!({"user_name": user_name}),
            )),
            _ => Ok(()),
        }
    }

    async fn ensure_email_free(&self, email: &str, owner: Option<i64>) -> Result<(), AppError> {
        match self.repository.find_by_email(email).await? {
            Some(existing) if Some(existing.id) != owner => Err(AppError::conflict(
                "E-mail already exists",
                json!({"email": email}),
            )),
            _ => Ok(()),
        }
    }
}

/// User names are 3-50 characters once trimmed.
fn validate_user_name(user_name: &str) -> Result<(), AppError> {
    if (3..=50).contains(&user_name.chars().count()) {
        return Ok(());
    }

    Err(AppError::bad_request(
        "User name must be 3-50 characters",
        json!({"fields": {"user_name": ["User name must be 3-50 characters"]}}),
    ))
}

fn user_not_found(id: i64) -> AppError {
    AppError::not_found("User not found", json!({"id": id}))
}
