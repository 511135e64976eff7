//! Entity-to-table mapping layer.
//!
//! Every entity table is declared through an [`EntityMap`]. The provided
//! [`EntityMap::configure`] applies the shared audit contract
//! ([`base_map::configure_audit`]) before the entity's own columns, so every
//! registered table has:
//!
//! | column       | nullability |
//! |--------------|-------------|
//! | `created_at` | `NOT NULL`  |
//! | `updated_at` | nullable    |
//! | `deleted_at` | nullable    |
//! | `status`     | `NOT NULL`  |
//!
//! [`SchemaRegistry`] collects the tables, renders DDL, creates them at
//! startup and verifies a live database against the contract.
//!
//! # Example
//!
//! ```rust,ignore
//! let registry = SchemaRegistry::cms()?;
//! registry.apply(&pool).await?;
//! assert!(registry.verify().is_empty());
//! ```

pub mod base_map;
pub mod builder;
pub mod maps;
pub mod registry;

pub use base_map::{AuditViolation, EntityMap};
pub use builder::{ColumnSchema, ColumnType, EntityTypeBuilder, TableSchema};
pub use maps::{AppUserMap, CategoryMap, PageMap, ProductMap};
pub use registry::SchemaRegistry;

/// Errors raised while building or registering table schemas.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("table name must not be empty")]
    EmptyTableName,

    #[error("table {table} already has a primary key; cannot add {column}")]
    DuplicateKey { table: String, column: String },

    #[error("column {table}.{column} has no type")]
    MissingType { table: String, column: String },

    #[error("column {table}.{column} is {existing}; cannot change it to {requested}")]
    ConflictingType {
        table: String,
        column: String,
        existing: String,
        requested: String,
    },

    #[error("index on {table} references unknown column {column}")]
    UnknownIndexColumn { table: String, column: String },

    #[error("audit contract violated: {0}")]
    AuditConstraint(AuditViolation),

    #[error("table {0} is already registered")]
    DuplicateTable(String),

    #[error("table {table} references unregistered table {referenced}")]
    UnknownReference { table: String, referenced: String },
}
