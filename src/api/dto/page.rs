//! Page transfer objects.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::audit::AuditDto;
use super::trimmed;
use crate::domain::entities::{NewPage, Page, PagePatch};

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PageDto {
    pub id: i64,
    #[schema(example = "About Us")]
    pub title: String,
    #[schema(example = "about-us")]
    pub slug: String,
    pub content: String,
    #[serde(flatten)]
    pub audit: AuditDto,
}

impl From<Page> for PageDto {
    fn from(page: Page) -> Self {
        Self {
            id: page.id,
            title: page.title,
            slug: page.slug,
            content: page.content,
            audit: page.audit.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreatePageRequest {
    #[serde(deserialize_with = "trimmed::string")]
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,
    /// Derived from `title` when omitted.
    pub slug: Option<String>,
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
}

impl From<CreatePageRequest> for NewPage {
    fn from(req: CreatePageRequest) -> Self {
        Self {
            title: req.title,
            slug: req.slug.unwrap_or_default(),
            content: req.content,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdatePageRequest {
    #[serde(default, deserialize_with = "trimmed::option")]
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,
    pub slug: Option<String>,
    #[validate(length(min = 1, message = "Content cannot be empty"))]
    pub content: Option<String>,
}

impl From<UpdatePageRequest> for PagePatch {
    fn from(req: UpdatePageRequest) -> Self {
        Self {
            title: req.title,
            slug: req.slug,
            content: req.content,
        }
    }
}
