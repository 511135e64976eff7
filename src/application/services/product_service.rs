//! Catalogue product service.

use rust_decimal::Decimal;
use serde_json::json;
use std::sync::Arc;

use super::{resolve_slug, slug_taken};
use crate::domain::entities::{NewProduct, Product, ProductPatch};
use crate::domain::repositories::{CategoryRepository, ProductRepository};
use crate::error::AppError;

/// Service for managing products.
///
/// Every product must reference an active category. Prices and stock counts
/// cannot be negative.
pub struct ProductService<P: ProductRepository, C: CategoryRepository> {
    products: Arc<P>,
    categories: Arc<C>,
}

impl<P: ProductRepository, C: CategoryRepository> ProductService<P, C> {
    pub fn new(products: Arc<P>, categories: Arc<C>) -> Self {
        Self {
            products,
            categories,
        }
    }

    /// Creates a product. An empty `slug` is derived from `name`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the price or stock is out of range or
    /// the category does not exist or is deleted.
    /// Returns [`AppError::Conflict`] if the slug is already in use.
    pub async fn create(&self, new_product: NewProduct) -> Result<Product, AppError> {
        validate_amounts(Some(new_product.unit_price), Some(new_product.units_in_stock))?;

        let slug = resolve_slug(Some(&new_product.slug), &new_product.name)?;
        self.ensure_slug_free(&slug, None).await?;

        let product = self
            .products
            .create(NewProduct {
                slug,
                ..new_product
            })
            .await?;

        tracing::info!(
            product_id = product.id,
            category_id = product.category_id,
            slug = %product.slug,
            "Product created"
        );
        Ok(product)
    }

    pub async fn get(&self, id: i64) -> Result<Product, AppError> {
        self.products
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found("Product not found", json!({"id": id})))
    }

    pub async fn get_by_slug(&self, slug: &str) -> Result<Product, AppError> {
        self.products
            .find_by_slug(slug)
            .await?
            .ok_or_else(|| AppError::not_found("Product not found", json!({"slug": slug})))
    }

    pub async fn list(&self, offset: i64, limit: i64) -> Result<(Vec<Product>, i64), AppError> {
        let items = self.products.list(offset, limit).await?;
        let total = self.products.count(None).await?;
        Ok((items, total))
    }

    /// Lists the active products of one category.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the category does not exist.
    pub async fn list_by_category(
        &self,
        category_id: i64,
        offset: i64,
        limit: i64,
    ) -> Result<(Vec<Product>, i64), AppError> {
        if self.categories.find_by_id(category_id).await?.is_none() {
            return Err(AppError::not_found(
                "Category not found",
                json!({"id": category_id}),
            ));
        }

        let items = self
            .products
            .list_by_category(category_id, offset, limit)
            .await?;
        let total = self.products.count(Some(category_id)).await?;
        Ok((items, total))
    }

    pub async fn update(&self, id: i64, patch: ProductPatch) -> Result<Product, AppError> {
        validate_amounts(patch.unit_price, patch.units_in_stock)?;

        let slug = match &patch.slug {
            Some(slug) => {
                let fallback = patch.name.as_deref().unwrap_or_default();
                let slug = resolve_slug(Some(slug), fallback)?;
                self.ensure_slug_free(&slug, Some(id)).await?;
                Some(slug)
            }
            None => None,
        };

        self.products
            .update(id, ProductPatch { slug, ..patch })
            .await
    }

    pub async fn delete(&self, id: i64) -> Result<(), AppError> {
        self.products.soft_delete(id).await?;
        tracing::info!(product_id = id, "Product deleted");
        Ok(())
    }

    async fn ensure_slug_free(&self, slug: &str, owner: Option<i64>) -> Result<(), AppError> {
        match self.products.find_by_slug(slug).await? {
            Some(existing) if Some(existing.id) != owner => Err(slug_taken("Product", slug)),
            _ => Ok(()),
        }
    }
}

/// `10^10`, the exclusive upper bound of `NUMERIC(12, 2)`.
const MAX_UNIT_PRICE: Decimal = Decimal::from_parts(1_410_065_408, 2, 0, false, 0);
const UNIT_PRICE_SCALE: u32 = 2;

fn validate_amounts(unit_price: Option<Decimal>, units_in_stock: Option<i32>) -> Result<(), AppError> {
    if let Some(price) = unit_price {
        validate_unit_price(price)?;
    }

    if units_in_stock.is_some_and(|u| u < 0) {
        return Err(AppError::bad_request(
            "Units in stock cannot be negative",
            json!({"units_in_stock": units_in_stock}),
        ));
    }

    Ok(())
}

fn validate_unit_price(price: Decimal) -> Result<(), AppError> {
    let message = if price.is_sign_negative() && !price.is_zero() {
        "Unit price cannot be negative"
    } else if price >= MAX_UNIT_PRICE {
        "Unit price must be less than 10000000000"
    } else if price.normalize().scale() > UNIT_PRICE_SCALE {
        "Unit price cannot have more than two decimal places"
    } else {
        return Ok(());
    };

    Err(AppError::bad_request(
        message,
        json!({"unit_price": price.to_string()}),
    ))
}
