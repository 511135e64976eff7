//! Category management service.

use serde_json::json;
use std::sync::Arc;

use super::{resolve_slug, slug_taken};
use crate::domain::entities::{Category, CategoryPatch, NewCategory};
use crate::domain::repositories::CategoryRepository;
use crate::error::AppError;

/// Service for managing product categories.
///
/// Slugs are derived from the name when not supplied and must be unique among
/// active categories. A category that still holds active products cannot be
/// deleted.
pub struct CategoryService<R: CategoryRepository> {
    repository: Arc<R>,
}

impl<R: CategoryRepository> CategoryService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a category. An empty `slug` is derived from `name`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the slug is malformed.
    /// Returns [`AppError::Conflict`] if the slug is already in use.
    pub async fn create(&self, new_category: NewCategory) -> Result<Category, AppError> {
        let slug = resolve_slug(Some(&new_category.slug), &new_category.name)?;
        self.ensure_slug_free(&slug, None).await?;

        let category = self
            .repository
            .create(NewCategory {
                slug,
                ..new_category
            })
            .await?;

        tracing::info!(category_id = category.id, slug = %category.slug, "Category created");
        Ok(category)
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the category does not exist or is deleted.
    pub async fn get(&self, id: i64) -> Result<Category, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| category_not_found(id))
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Category, AppError> {
        self.repository
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::not_found("Category not found", json!({"slug": slug})))
    }

    pub async fn list(&self, offset: i64, limit: i64) -> Result<(Vec<Category>, i64), AppError> {
        let items = self.repository.list(offset, limit).await?;
        let total = self.repository.count().await?;
        Ok((items, total))
    }

    /// Applies a partial update.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the category does not exist.
    /// Returns [`AppError::Conflict`] if the new slug belongs to another category.
    pub async fn update(&self, id: i64, patch: CategoryPatch) -> Result<Category, AppError> {
        let slug = match &patch.slug {
            Some(slug) => {
                let fallback = patch.name.as_deref().unwrap_or_default();
                let slug = resolve_slug(Some(slug), fallback)?;
                self.ensure_slug_free(&slug, Some(id)).await?;
                Some(slug)
            }
            None => None,
        };

        self.repository
            .update(id, CategoryPatch { slug, ..patch })
            .await
    }

    /// Soft-deletes a category.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the category does not exist.
    /// Returns [`AppError::Conflict`] if it still has active products.
    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.repository.soft_delete(id).await.inspect_err(|e| {
            if matches!(e, AppError::Conflict { .. }) {
                tracing::warn!(category_id = id, "Refused to delete non-empty category");
            }
        })?;

        tracing::info!(category_id = id, "Category deleted");
        Ok(())
    }

    async fn ensure_slug_free(&self, slug: &str, owner: Option<i64>) -> Result<(), AppError> {
        match self.repository.find_by_slug(slug).await? {
            Some(existing) if Some(existing.id) != owner => Err(slug_taken("Category", slug)),
            _ => Ok(()),
        }
    }
}

fn category_not_found(id: i64) -> AppError {
    AppError::not_found("Category not found", json!({"id": id}))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Audit;
    use crate::domain::repositories::MockCategoryRepository;
    use chrono::Utc;

    fn category(id: i64, slug: &str) -> Category {
        Category {
            id,
            name: "Garden Tools".to_string(),
            slug: slug.to_string(),
            description: None,
            audit: Audit::created(Utc::now()),
        }
    }

    fn new_category(slug: &str) -> NewCategory {
        NewCategory {
            name: "Garden Tools".to_string(),
            slug: slug.to_string(),
            description: Some("Shovels and rakes".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_derives_slug() {
        let mut mock_repo = MockCategoryRepository::new();

        mock_repo
            .expect_find_by_slug()
            .withf(|slug| slug == "garden-tools")
            .returning(|_| Ok(None));
        mock_repo
            .expect_create()
            .withf(|c| c.slug == "garden-tools" && c.description.is_some())
            .times(1)
            .returning(|c| Ok(category(1, &c.slug)));

        let service = CategoryService::new(Arc::new(mock_repo));

        let created = service.create(new_category("")).await.unwrap();
        assert_eq!(created.slug, "garden-tools");
    }

    #[tokio::test]
    async fn test_create_slug_conflict() {
        let mut mock_repo = MockCategoryRepository::new();

        mock_repo
            .expect_find_by_slug()
            .returning(|slug| Ok(Some(category(2, slug))));
        mock_repo.expect_create().times(0);

        let service = CategoryService::new(Arc::new(mock_repo));

        let err = service.create(new_category("tools")).await.unwrap_err();
        assert!(matches!(err, AppError::Conflict { .. }));
    }

    #[tokio::test]
    async fn test_create_invalid_slug() {
        let mock_repo = MockCategoryRepository::new();
        let service = CategoryService::new(Arc::new(mock_repo));

        let err = service.create(new_category("Bad Slug")).await.unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_update_keeps_own_slug() {
        let mut mock_repo = MockCategoryRepository::new();

        mock_repo
            .expect_find_by_slug()
            .returning(|slug| Ok(Some(category(4, slug))));
        mock_repo
            .expect_update()
            .withf(|id, patch| *id == 4 && patch.slug.as_deref() == Some("tools"))
            .times(1)
            .returning(|id, _| Ok(category(id, "tools")));

        let service = CategoryService::new(Arc::new(mock_repo));

        let patch = CategoryPatch {
            slug: Some("tools".to_string()),
            ..Default::default()
        };
        assert!(service.update(4, patch).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_with_products_is_refused() {
        let mut mock_repo = MockCategoryRepository::new();

        mock_repo.expect_soft_delete().times(1).returning(|id| {
            Err(AppError::conflict(
                "Cannot delete category with existing products",
                json!({"id": id, "products_count": 3}),
            ))
        });

        let service = CategoryService::new(Arc::new(mock_repo));

        let err = service.delete(1).await.unwrap_err();
        match err {
            AppError::Conflict { details, .. } => assert_eq!(details["products_count"], 3),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_delete_empty_category() {
        let mut mock_repo = MockCategoryRepository::new();

        mock_repo
            .expect_soft_delete()
            .withf(|id| *id == 1)
            .times(1)
            .returning(|_| Ok(()));

        let service = CategoryService::new(Arc::new(mock_repo));

        assert!(service.delete(1).await.is_ok());
    }

    #[tokio::test]
    async fn test_delete_missing_category() {
        let mut mock_repo = MockCategoryRepository::new();
        mock_repo
            .expect_soft_delete()
            .returning(|id| Err(AppError::not_found("Category not found", json!({"id": id}))));

        let service = CategoryService::new(Arc::new(mock_repo));

        let err = service.delete(99).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound { .. }));
    }
}
