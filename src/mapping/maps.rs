//! Per-entity storage configurations.

use crate::domain::entities::{AppUser, BaseEntity, Category, Page, Product};
use crate::utils::slug::MAX_SLUG_LEN;

use super::base_map::EntityMap;
use super::builder::{ColumnType, EntityTypeBuilder};

pub struct AppUserMap;

impl EntityMap<AppUser> for AppUserMap {
    fn configure_entity(&self, builder: &mut EntityTypeBuilder<AppUser>) {
        builder.has_key("id");
        builder
            .property("first_name")
            .column_type(ColumnType::VarChar(50))
            .is_required(true);
        builder
            .property("last_name")
            .column_type(ColumnType::VarChar(50))
            .is_required(true);
        builder
            .property("user_name")
            .column_type(ColumnType::VarChar(50))
            .is_required(true)
            .is_unique();
        builder
            .property("email")
            .column_type(ColumnType::VarChar(254))
            .is_required(true)
            .is_unique();
        builder
            .property("password_hash")
            .column_type(ColumnType::Text)
            .is_required(true);
        builder
            .property("image_path")
            .column_type(ColumnType::Text)
            .is_required(false);
    }
}

pub struct CategoryMap;

impl EntityMap<Category> for CategoryMap {
    fn configure_entity(&self, builder: &mut EntityTypeBuilder<Category>) {
        builder.has_key("id");
        builder
            .property("name")
            .column_type(ColumnType::VarChar(100))
            .is_required(true);
        builder
            .property("slug")
            .column_type(ColumnType::VarChar(MAX_SLUG_LEN as u32))
            .is_required(true)
            .is_unique();
        builder
            .property("description")
            .column_type(ColumnType::Text)
            .is_required(false);
    }
}

pub struct PageMap;

impl EntityMap<Page> for PageMap {
    fn configure_entity(&self, builder: &mut EntityTypeBuilder<Page>) {
        builder.has_key("id");
        builder
            .property("title")
            .column_type(ColumnType::VarChar(200))
            .is_required(true);
        builder
            .property("slug")
            .column_type(ColumnType::VarChar(MAX_SLUG_LEN as u32))
            .is_required(true)
            .is_unique();
        builder
            .property("content")
            .column_type(ColumnType::Text)
            .is_required(true);
    }
}

pub struct ProductMap;

impl EntityMap<Product> for ProductMap {
    fn configure_entity(&self, builder: &mut EntityTypeBuilder<Product>) {
        builder.has_key("id");
        builder
            .property("name")
            .column_type(ColumnType::VarChar(150))
            .is_required(true);
        builder
            .property("slug")
            .column_type(ColumnType::VarChar(MAX_SLUG_LEN as u32))
            .is_required(true)
            .is_unique();
        builder
            .property("description")
            .column_type(ColumnType::Text)
            .is_required(false);
        builder
            .property("unit_price")
            .column_type(ColumnType::Numeric(12, 2))
            .is_required(true)
            .check("unit_price >= 0");
        builder
            .property("units_in_stock")
            .column_type(ColumnType::Integer)
            .is_required(true)
            .has_default("0")
            .check("units_in_stock >= 0");
        builder
            .property("image_path")
            .column_type(ColumnType::Text)
            .is_required(false);
        builder
            .property("category_id")
            .column_type(ColumnType::BigInt)
            .is_required(true)
            .references(Category::TABLE, "id");
        builder.has_index(&["category_id"]);
    }
}
