//! Repository trait for categories.

use crate::domain::entities::{Category, CategoryPatch, NewCategory};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for [`Category`] records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgCategoryRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CategoryRepository: Send + Sync {
    /// Creates a category.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the slug is taken.
    async fn create(&self, new_category: NewCategory) -> Result<Category, AppError>;

    /// Finds an active category by ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Category>, AppError>;

    /// Finds an active category by slug.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Category>, AppError>;

    /// Lists active categories ordered by name.
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Category>, AppError>;

    /// Counts active categories.
    async fn count(&self) -> Result<i64, AppError>;

    /// Applies a partial update and marks the category as modified.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the category does not exist or is deleted.
    async fn update(&self, id: i64, patch: CategoryPatch) -> Result<Category, AppError>;

    /// Soft-deletes a category that holds no active products.
    ///
    /// The category row is locked for the duration of the check, so a
    /// concurrent product insert either lands first and blocks the delete or
    /// waits and then sees the category gone.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the category does not exist or is already deleted.
    /// Returns [`AppError::Conflict`] with `products_count` if active products remain.
    async fn soft_delete(&self, id: i64) -> Result<(), AppError>;
}
