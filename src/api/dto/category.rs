//! Category transfer objects.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::audit::AuditDto;
use super::trimmed;
use crate::domain::entities::{Category, CategoryPatch, NewCategory};

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CategoryDto {
    pub id: i64,
    #[schema(example = "Garden Tools")]
    pub name: String,
    #[schema(example = "garden-tools")]
    pub slug: String,
    pub description: Option<String>,
    #[serde(flatten)]
    pub audit: AuditDto,
}

impl From<Category> for CategoryDto {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
            slug: category.slug,
            description: category.description,
            audit: category.audit.into(),
        }
    }
}

/// Request body for `POST /api/category`.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateCategoryRequest {
    #[serde(deserialize_with = "trimmed::string")]
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: String,
    /// Derived from `name` when omitted.
    pub slug: Option<String>,
    pub description: Option<String>,
}

impl From<CreateCategoryRequest> for NewCategory {
    fn from(req: CreateCategoryRequest) -> Self {
        Self {
            name: req.name,
            slug: req.slug.unwrap_or_default(),
            description: req.description,
        }
    }
}

/// Request body for `PUT /api/category/{id}`. Omitted fields are kept;
/// `"description": null` clears the description.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateCategoryRequest {
    #[serde(default, deserialize_with = "trimmed::option")]
    #[validate(length(min = 1, max = 100, message = "Name must be 1-100 characters"))]
    pub name: Option<String>,
    pub slug: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
}

impl From<UpdateCategoryRequest> for CategoryPatch {
    fn from(req: UpdateCategoryRequest) -> Self {
        Self {
            name: req.name,
            slug: req.slug,
            description: req.description,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::{Audit, Status};
    use chrono::Utc;

    #[test]
    fn test_update_request_distinguishes_null_from_absent() {
        let absent: UpdateCategoryRequest = serde_json::from_str(r#"{"name": "Tools"}"#).unwrap();
        assert_eq!(absent.description, None);

        let cleared: UpdateCategoryRequest =
            serde_json::from_str(r#"{"description": null}"#).unwrap();
        assert_eq!(cleared.description, Some(None));

        let patch = CategoryPatch::from(cleared);
        assert_eq!(patch.description, Some(None));
    }

    #[test]
    fn test_dto_flattens_audit() {
        let dto = CategoryDto::from(Category {
            id: 1,
            name: "Tools".to_string(),
            slug: "tools".to_string(),
            description: None,
            audit: Audit::created(Utc::now()),
        });

        let value = serde_json::to_value(&dto).unwrap();
        assert_eq!(value["status"], "active");
        assert!(value.get("created_at").is_some());
        assert!(value.get("updated_at").is_none());
        assert_eq!(dto.audit.status, Status::Active);
    }

    #[test]
    fn test_create_request_validation() {
        let req = CreateCategoryRequest {
            name: String::new(),
            slug: None,
            description: None,
        };
        assert!(req.validate().is_err());
    }
}
