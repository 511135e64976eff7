//! Product entity.

use rust_decimal::Decimal;

use super::audit::{Audit, BaseEntity};

/// A catalogue item. Always belongs to exactly one [`super::Category`].
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub unit_price: Decimal,
    pub units_in_stock: i32,
    pub image_path: Option<String>,
    pub category_id: i64,
    #[sqlx(flatten)]
    pub audit: Audit,
}

impl Product {
    /// Returns true if at least one unit is available.
    pub fn in_stock(&self) -> bool {
        self.units_in_stock > 0
    }
}

impl BaseEntity for Product {
    const TABLE: &'static str = "products";

    fn id(&self) -> i64 {
        self.id
    }

    fn audit(&self) -> &Audit {
        &self.audit
    }
}

/// Input data for creating a product.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub unit_price: Decimal,
    pub units_in_stock: i32,
    pub image_path: Option<String>,
    pub category_id: i64,
}

/// Partial update for a product.
///
/// `description`/`image_path: Some(None)` clear the value.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub slug: Option<String>,
    pub description: Option<Option<String>>,
    pub unit_price: Option<Decimal>,
    pub units_in_stock: Option<i32>,
    pub image_path: Option<Option<String>>,
    pub category_id: Option<i64>,
}
