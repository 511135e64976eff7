//! Content page service.

use serde_json::json;
use std::sync::Arc;

use super::{resolve_slug, slug_taken};
use crate::domain::entities::{NewPage, Page, PagePatch};
use crate::domain::repositories::PageRepository;
use crate::error::AppError;

pub struct PageService<R: PageRepository> {
    repository: Arc<R>,
}

impl<R: PageRepository> PageService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Creates a page. An empty `slug` is derived from `title`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the slug is already in use.
    pub async fn create(&self, new_page: NewPage) -> Result<Page, AppError> {
        let slug = resolve_slug(Some(&new_page.slug), &new_page.title)?;
        self.ensure_slug_free(&slug, None).await?;

        let page = self.repository.create(NewPage { slug, ..new_page }).await?;
        tracing::info!(page_id = page.id, slug = %page.slug, "Page created");
        Ok(page)
    }

    pub async fn get(&self, id: i64) -> Result<Page, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Page not found", json!({"id": id})))
    }

    /// Looks a page up by its public slug.
    pub async fn get_by_slug(&self, slug: &str) -> Result<Page, AppError> {
        self.repository
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::not_found("Page not found", json!({"slug": slug})))
    }

    pub async fn list(&self, offset: i64, limit: i64) -> Result<(Vec<Page>, i64), AppError> {
        let items = self.repository.list(offset, limit).await?;
        let total = self.repository.count().await?;
        Ok((items, total))
    }

    pub async fn update(&self, id: i64, patch: PagePatch) -> Result<Page, AppError> {
        let slug = match &patch.slug {
            Some(slug) => {
                let fallback = patch.title.as_deref().unwrap_or_default();
                let slug = resolve_slug(Some(slug), fallback)?;
                self.ensure_slug_free(&slug, Some(id)).await?;
                Some(slug)
            }
            None => None,
        };

        self.repository.update(id, PagePatch { slug, ..patch }).await
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.repository.soft_delete(id).await?;
        tracing::info!(page_id = id, "Page deleted");
        Ok(())
    }

    async fn ensure_slug_free(&self, slug: &str, owner: Option<i64>) -> Result<(), AppError> {
        match self.repository.find_by_slug(slug).await? {
            Some(existing) if Some(existing.id) != owner => Err(slug_taken("Page", slug)),
            _ => Ok(()),
        }
    }
}
