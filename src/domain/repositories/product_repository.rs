//! Repository trait for products.

use crate::domain::entities::{NewProduct, Product, ProductPatch};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for [`Product`] records.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgProductRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductRepository: Send + Sync {
    /// Creates a product.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the slug is taken.
    /// Returns [`AppError::Validation`] if the category does not exist.
    async fn create(&self, new_product: NewProduct) -> Result<Product, AppError>;

    /// Finds an active product by ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Product>, AppError>;

    /// Finds an active product by slug.
    async fn find_by_slug(&self, slug: &str) -> Result<Option<Product>, AppError>;

    /// Lists active products ordered by name.
    async fn list(&self, offset: i64, limit: i64) -> Result<Vec<Product>, AppError>;

    /// Lists active products of one category ordered by name.
    async fn list_by_category(
        &self,
        category_id: i64,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<Product>, AppError>;

    /// Counts active products, optionally restricted to one category.
    async fn count(&self, category_id: Option<i64>) -> Result<i64, AppError>;

    /// Applies a partial update and marks the product as modified.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the product does not exist or is deleted.
    async fn update(&self, id: i64, patch: ProductPatch) -> Result<Product, AppError>;

    /// Soft-deletes a product.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the product does not exist or is already deleted.
    async fn soft_delete(&self, id: i64) -> Result<(), AppError>;
}
