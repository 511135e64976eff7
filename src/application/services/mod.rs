//! Business logic services for the application layer.

pub mod auth_service;
pub mod category_service;
pub mod page_service;
pub mod product_service;
pub mod user_service;

pub use auth_service::{AuthService, AuthenticatedUser, Claims, IssuedToken};
pub use category_service::CategoryService;
pub use page_service::PageService;
pub use product_service::ProductService;
pub use user_service::{UserChanges, UserRegistration, UserService};

use serde_json::json;

use crate::error::AppError;
use crate::utils::slug::{MAX_SLUG_LEN, is_valid_slug, slugify};

/// Returns the slug to store for a record.
///
/// An explicit slug must already be in canonical form. Without one, the slug
/// is derived from `source` (the record's name or title).
pub(crate) fn resolve_slug(explicit: Option<&str>, source: &str) -> Result<String, AppError> {
    match explicit.map(str::trim).filter(|s| !s.is_empty()) {
        Some(slug) => {
            if !is_valid_slug(slug) {
                return Err(AppError::bad_request(
                    "Invalid slug",
                    json!({
                        "slug": slug,
                        "allowed": "a-z, 0-9, single hyphens",
                        "max_length": MAX_SLUG_LEN,
                    }),
                ));
            }
            Ok(slug.to_string())
        }
        None => {
            let derived = slugify(source);
            if derived.is_empty() {
                return Err(AppError::bad_request(
                    "Cannot derive a slug",
                    json!({"source": source}),
                ));
            }
            Ok(derived)
        }
    }
}

/// Returns a conflict error for a slug already used by another record.
pub(crate) fn slug_taken(entity: &str, slug: &str) -> AppError {
    AppError::conflict(
        format!("{entity} slug already exists"),
        json!({"slug": slug}),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_slug_derives_from_source() {
        assert_eq!(resolve_slug(None, "Garden Tools").unwrap(), "garden-tools");
        assert_eq!(resolve_slug(Some("  "), "Garden Tools").unwrap(), "garden-tools");
    }

    #[test]
    fn test_resolve_slug_keeps_valid_explicit() {
        assert_eq!(resolve_slug(Some("tools"), "Garden Tools").unwrap(), "tools");
    }

    #[test]
    fn test_resolve_slug_rejects_invalid_explicit() {
        let err = resolve_slug(Some("Not A Slug"), "x").unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn test_resolve_slug_rejects_empty_derivation() {
        assert!(resolve_slug(None, "!!!").is_err());
    }
}
