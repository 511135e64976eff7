//! Registry of all entity tables.

use sqlx::PgPool;

use crate::domain::entities::{AppUser, BaseEntity, Category, Page, Product};

use super::base_map::{AuditViolation, EntityMap, audit_violations, check_audit};
use super::builder::{EntityTypeBuilder, TableSchema};
use super::maps::{AppUserMap, CategoryMap, PageMap, ProductMap};
use super::SchemaError;

/// Ordered collection of table schemas.
///
/// Tables are kept in registration order, which must respect foreign keys: a
/// table can only reference tables registered before it.
#[derive(Debug, Clone, Default)]
pub struct SchemaRegistry {
    tables: Vec<TableSchema>,
}

impl SchemaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every CMS entity.
    ///
    /// # Errors
    ///
    /// Returns [`SchemaError`] if an entity map is inconsistent.
    pub fn cms() -> Result<Self, SchemaError> {
        let mut registry = Self::new();
        registry
            .register::<AppUser, _>(&AppUserMap)?
            .register::<Category, _>(&CategoryMap)?
            .register::<Page, _>(&PageMap)?
            .register::<Product, _>(&ProductMap)?;
        Ok(registry)
    }

    /// Configures `T` through `map` and stores the resulting table.
    ///
    /// # Errors
    ///
    /// - [`SchemaError::DuplicateTable`] if `T::TABLE` is already registered
    /// - [`SchemaError::UnknownReference`] if a foreign key targets a table
    ///   that is not registered yet
    /// - any error from [`EntityTypeBuilder::build`]
    pub fn register<T, M>(&mut self, map: &M) -> Result<&mut Self, SchemaError>
    where
        T: BaseEntity,
        M: EntityMap<T>,
    {
        if self.table(T::TABLE).is_some() {
            return Err(SchemaError::DuplicateTable(T::TABLE.to_string()));
        }

        let mut builder = EntityTypeBuilder::<T>::new();
        map.configure(&mut builder);
        let schema = builder.build()?;

        if let Some(referenced) = schema
            .dependencies()
            .find(|dep| *dep != schema.name && self.table(dep).is_none())
        {
            return Err(SchemaError::UnknownReference {
                table: schema.name.clone(),
                referenced: referenced.to_string(),
            });
        }

        tracing::debug!(table = %schema.name, columns = schema.columns.len(), "Registered table");
        self.tables.push(schema);
        Ok(self)
    }

    /// Registered tables in registration order.
    pub fn tables(&self) -> &[TableSchema] {
        &self.tables
    }

    /// Looks up a table by name.
    pub fn table(&self, name: &str) -> Option<&TableSchema> {
        self.tables.iter().find(|t| t.name == name)
    }

    /// DDL statements for every table, in dependency order.
    pub fn to_ddl(&self) -> Vec<String> {
        self.tables.iter().flat_map(TableSchema::to_ddl).collect()
    }

    /// Audit contract violations across all registered tables.
    pub fn verify(&self) -> Vec<AuditViolation> {
        self.tables.iter().flat_map(audit_violations).collect()
    }

    /// Creates all tables and indexes in a single transaction.
    ///
    /// Statements use `IF NOT EXISTS`, so applying twice is harmless.
    ///
    /// # Errors
    ///
    /// Returns the first database error; nothing is committed in that case.
    pub async fn apply(&self, pool: &PgPool) -> Result<(), sqlx::Error> {
        let mut tx = pool.begin().await?;

        for statement in self.to_ddl() {
            sqlx::query(&statement).execute(&mut *tx).await?;
        }

        tx.commit().await?;
        tracing::info!(tables = self.tables.len(), "Schema applied");
        Ok(())
    }

    /// Compares the live database with the audit contract.
    ///
    /// Reads column nullability from `information_schema.columns` for every
    /// registered table in the current schema. Missing tables show up as
    /// missing columns.
    ///
    /// # Errors
    ///
    /// Returns database errors from the catalog query.
    pub async fn verify_database(&self, pool: &PgPool) -> Result<Vec<AuditViolation>, sqlx::Error> {
        let mut violations = Vec::new();

        for table in &self.tables {
            let columns: Vec<(String, String)> = sqlx::query_as(
                r#"
                SELECT column_name::TEXT, is_nullable::TEXT
                FROM information_schema.columns
                WHERE table_schema = current_schema()
                  AND table_name = $1
                "#,
            )
            .bind(&table.name)
            .fetch_all(pool)
            .await?;

            violations.extend(check_audit(&table.name, |name| {
                columns
                    .iter()
                    .find(|(column, _)| column == name)
                    .map(|(_, nullable)| nullable == "NO")
            }));
        }

        Ok(violations)
    }
}
