//! Product transfer objects.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use super::audit::AuditDto;
use super::trimmed;
use crate::domain::entities::{NewProduct, Product, ProductPatch};

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ProductDto {
    pub id: i64,
    #[schema(example = "Standing Desk")]
    pub name: String,
    #[schema(example = "standing-desk")]
    pub slug: String,
    pub description: Option<String>,
    /// Decimal encoded as a string, e.g. `"499.00"`.
    #[schema(value_type = String, example = "499.00")]
    pub unit_price: Decimal,
    pub units_in_stock: i32,
    pub in_stock: bool,
    pub image_path: Option<String>,
    pub category_id: i64,
    #[serde(flatten)]
    pub audit: AuditDto,
}

impl From<Product> for ProductDto {
    fn from(product: Product) -> Self {
        Self {
            in_stock: product.in_stock(),
            id: product.id,
            name: product.name,
            slug: product.slug,
            description: product.description,
            unit_price: product.unit_price,
            units_in_stock: product.units_in_stock,
            image_path: product.image_path,
            category_id: product.category_id,
            audit: product.audit.into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateProductRequest {
    #[serde(deserialize_with = "trimmed::string")]
    #[validate(length(min = 1, max = 150, message = "Name must be 1-150 characters"))]
    pub name: String,
    /// Derived from `name` when omitted.
    pub slug: Option<String>,
    pub description: Option<String>,
    /// Accepts a JSON number or a decimal string.
    #[schema(value_type = String, example = "499.00")]
    pub unit_price: Decimal,
    #[serde(default)]
    #[validate(range(min = 0, message = "Units in stock cannot be negative"))]
    pub units_in_stock: i32,
    pub image_path: Option<String>,
    pub category_id: i64,
}

impl From<CreateProductRequest> for NewProduct {
    fn from(req: CreateProductRequest) -> Self {
        Self {
            name: req.name,
            slug: req.slug.unwrap_or_default(),
            description: req.description,
            unit_price: req.unit_price,
            units_in_stock: req.units_in_stock,
            image_path: req.image_path,
            category_id: req.category_id,
        }
    }
}

/// Omitted fields are kept; `null` clears `description` or `image_path`.
#[derive(Debug, Clone, Default, Deserialize, Validate, ToSchema)]
pub struct UpdateProductRequest {
    #[serde(default, deserialize_with = "trimmed::option")]
    #[validate(length(min = 1, max = 150, message = "Name must be 1-150 characters"))]
    pub name: Option<String>,
    pub slug: Option<String>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[schema(value_type = Option<String>)]
    pub unit_price: Option<Decimal>,
    #[validate(range(min = 0, message = "Units in stock cannot be negative"))]
    pub units_in_stock: Option<i32>,
    #[serde(default, with = "::serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    pub image_path: Option<Option<String>>,
    pub category_id: Option<i64>,
}

impl From<UpdateProductRequest> for ProductPatch {
    fn from(req: UpdateProductRequest) -> Self {
        Self {
            name: req.name,
            slug: req.slug,
            description: req.description,
            unit_price: req.unit_price,
            units_in_stock: req.units_in_stock,
            image_path: req.image_path,
            category_id: req.category_id,
        }
    }
}
