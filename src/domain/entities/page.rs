//! Content page entity.

use super::audit::{Audit, BaseEntity};

/// A static content page addressed by its slug.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Page {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub content: String,
    #[sqlx(flatten)]
    pub audit: Audit,
}

impl BaseEntity for Page {
    const TABLE: &'static str = "pages";

    fn id(&self) -> i64 {
        self.id
    }

    fn audit(&self) -> &Audit {
        &self.audit
    }
}

/// Input data for creating a page.
#[derive(Debug, Clone, PartialEq)]
pub struct NewPage {
    pub title: String,
    pub slug: String,
    pub content: String,
}

/// Partial update for a page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PagePatch {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub content: Option<String>,
}
