//! Repository trait for content pages.

use crate::domain::entities::{NewPage, Page, PagePatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for [`Page`] records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgPageRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageRepository: Send + Sync {
    /// Creates a page.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the slug is taken.
    async fn create(&self, new_page: NewPage) -> Result<Page, AppError>;

    /// Finds an active page by ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Page>, AppError>;

    /// Finds an active page by slug.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Page>, AppError>;

    /// Lists active pages ordered by title.
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Page>, AppError>;

    /// Counts active pages.
    async fn count(&self) -> Result<i64, AppError>;

    /// Applies a partial update and marks the page as modified.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the page does not exist or is deleted.
    async fn update(&self, id: i64, patch: PagePatch) -> Result<Page, AppError>;

    /// Soft-deletes a page.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the page does not exist or is already deleted.
    async fn soft_delete(&self, id: i64) -> Result<(), AppError>;
}
