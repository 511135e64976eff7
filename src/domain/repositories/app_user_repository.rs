//! Repository trait for back-office users.

use crate::domain::entities::{AppUser, AppUserPatch, NewAppUser};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for [`AppUser`] records.
///
/// Reads never return soft-deleted users.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAppUserRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AppUserRepository: Send + Sync {
    /// Creates a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the user name or email is taken.
    async fn create(&self, new_user: NewAppUser) -> Result<AppUser, AppError>;

    /// Finds an active user by ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<AppUser>, AppError>;

    /// Finds an active user by email (case-insensitive).
    async fn find_by_email(&self, email: &str) -> Result<Option<AppUser>, AppError>;

    /// Finds an active user by user name.
    async fn find_by_user_name(&self, user_name: &str) -> Result<Option<AppUser>, AppError>;

    /// Lists active users ordered by ID.
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<AppUser>, AppError>;

    /// Counts active users.
    async fn count(&self) -> Result<i64, AppError>;

    /// Applies a partial update and marks the user as modified.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist or is deleted.
    async fn update(&self, id: i64, patch: AppUserPatch) -> Result<AppUser, AppError>;

    /// Soft-deletes a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist or is already deleted.
    async fn soft_delete(&self, id: i64) -> Result<(), AppError>;
}
