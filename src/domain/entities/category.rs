//! Category entity.

use super::audit::{Audit, BaseEntity};

/// A product category.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    #[sqlx(flatten)]
    pub audit: Audit,
}

impl BaseEntity for Category {
    const TABLE: &'static str = "categories";

    fn id(&self) -> i64 {
        self.id
    }

    fn audit(&self) -> &Audit {
        &self.audit
    }
}

/// Input data for creating a category.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCategory {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
}

/// Partial update for a category.
///
/// `description: Some(None)` clears the description.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryPatch {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<Option<String>>,
}
