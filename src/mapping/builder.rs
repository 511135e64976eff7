//! Declarative table schema builder.
//!
//! [`EntityTypeBuilder`] collects column definitions for one entity type and
//! produces a [`TableSchema`] that can be rendered as PostgreSQL DDL.

use std::fmt;
use std::marker::PhantomData;

use crate::domain::entities::BaseEntity;
use crate::domain::entities::audit::{CREATED_AT, DELETED_AT, STATUS, UPDATED_AT};

use super::SchemaError;
use super::base_map::audit_violations;

/// PostgreSQL column types used by the CMS schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    BigSerial,
    BigInt,
    Integer,
    SmallInt,
    Text,
    VarChar(u32),
    Numeric(u8, u8),
    TimestampTz,
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColumnType::BigSerial => f.write_str("BIGSERIAL"),
            ColumnType::BigInt => f.write_str("BIGINT"),
            ColumnType::Integer => f.write_str("INTEGER"),
            ColumnType::SmallInt => f.write_str("SMALLINT"),
            ColumnType::Text => f.write_str("TEXT"),
            ColumnType::VarChar(len) => write!(f, "VARCHAR({len})"),
            ColumnType::Numeric(precision, scale) => write!(f, "NUMERIC({precision}, {scale})"),
            ColumnType::TimestampTz => f.write_str("TIMESTAMPTZ"),
        }
    }
}

/// Target of a foreign key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForeignKey {
    pub table: String,
    pub column: String,
}

/// One configured column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSchema {
    pub name: String,
    pub column_type: Option<ColumnType>,
    pub required: bool,
    pub primary_key: bool,
    pub unique: bool,
    pub default: Option<String>,
    pub references: Option<ForeignKey>,
    pub check: Option<String>,
}

impl ColumnSchema {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            column_type: None,
            required: false,
            primary_key: false,
            unique: false,
            default: None,
            references: None,
            check: None,
        }
    }

    fn is_audit(&self) -> bool {
        matches!(
            self.name.as_str(),
            CREATED_AT | UPDATED_AT | DELETED_AT | STATUS
        )
    }

    /// Column definition as it appears inside `CREATE TABLE`.
    pub fn to_sql(&self) -> String {
        let mut sql = self.name.clone();
        if let Some(ty) = self.column_type {
            sql.push(' ');
            sql.push_str(&ty.to_string());
        }
        if self.primary_key {
            sql.push_str(" PRIMARY KEY");
        } else if self.required {
            sql.push_str(" NOT NULL");
        }
        if self.unique {
            sql.push_str(" UNIQUE");
        }
        if let Some(default) = &self.default {
            sql.push_str(" DEFAULT ");
            sql.push_str(default);
        }
        if let Some(fk) = &self.references {
            sql.push_str(&format!(" REFERENCES {} ({})", fk.table, fk.column));
        }
        if let Some(check) = &self.check {
            sql.push_str(&format!(" CHECK ({check})"));
        }
        sql
    }
}

/// Secondary index on one or more columns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexSchema {
    pub name: String,
    pub columns: Vec<String>,
}

/// Storage schema of one entity table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableSchema {
    pub name: String,
    pub columns: Vec<ColumnSchema>,
    pub indexes: Vec<IndexSchema>,
}

impl TableSchema {
    /// Looks up a column by name.
    pub fn column(&self, name: &str) -> Option<&ColumnSchema> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Tables this one references through foreign keys.
    pub fn dependencies(&self) -> impl Iterator<Item = &str> {
        self.columns
            .iter()
            .filter_map(|c| c.references.as_ref().map(|fk| fk.table.as_str()))
    }

    /// `CREATE TABLE` followed by `CREATE INDEX` statements.
    pub fn to_ddl(&self) -> Vec<String> {
        let columns = self
            .columns
            .iter()
            .map(|c| format!("    {}", c.to_sql()))
            .collect::<Vec<_>>()
            .join(",\n");

        let mut statements = vec![format!(
            "CREATE TABLE IF NOT EXISTS {} (\n{}\n)",
            self.name, columns
        )];

        statements.extend(self.indexes.iter().map(|idx| {
            format!(
                "CREATE INDEX IF NOT EXISTS {} ON {} ({})",
                idx.name,
                self.name,
                idx.columns.join(", ")
            )
        }));

        statements
    }
}

/// Collects the schema of entity type `T`.
///
/// Columns are addressed by name; configuring the same column twice refines
/// the existing definition.
pub struct EntityTypeBuilder<T> {
    table: String,
    columns: Vec<ColumnSchema>,
    indexes: Vec<IndexSchema>,
    errors: Vec<SchemaError>,
    _entity: PhantomData<fn() -> T>,
}

impl<T: BaseEntity> EntityTypeBuilder<T> {
    /// Starts a builder for `T`'s table.
    pub fn new() -> Self {
        Self {
            table: T::TABLE.to_string(),
            columns: Vec::new(),
            indexes: Vec::new(),
            errors: Vec::new(),
            _entity: PhantomData,
        }
    }
}

impl<T: BaseEntity> Default for EntityTypeBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> EntityTypeBuilder<T> {
    /// Table name being configured.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Declares `name` as a `BIGSERIAL` primary key.
    pub fn has_key(&mut self, name: &str) -> &mut Self {
        if let Some(existing) = self.columns.iter().find(|c| c.primary_key) {
            if existing.name != name {
                self.errors.push(SchemaError::DuplicateKey {
                    table: self.table.clone(),
                    column: name.to_string(),
                });
                return self;
            }
        }

        let column = self
            .property(name)
            .column_type(ColumnType::BigSerial)
            .is_required(true)
            .column;
        column.primary_key = true;
        self
    }

    /// Configures the column `name`, creating it on first use.
    pub fn property(&mut self, name: &str) -> PropertyBuilder<'_> {
        let idx = match self.columns.iter().position(|c| c.name == name) {
            Some(idx) => idx,
            None => {
                self.columns.push(ColumnSchema::new(name));
                self.columns.len() - 1
            }
        };

        PropertyBuilder {
            table: &self.table,
            column: &mut self.columns[idx],
            errors: &mut self.errors,
        }
    }

    /// Adds a secondary index named `<table>_<columns>_idx`.
    pub fn has_index(&mut self, columns: &[&str]) -> &mut Self {
        let name = format!("{}_{}_idx", self.table, columns.join("_"));
        if !self.indexes.iter().any(|i| i.name == name) {
            self.indexes.push(IndexSchema {
                name,
                columns: columns.iter().map(|c| c.to_string()).collect(),
            });
        }
        self
    }

    /// Validates the configuration and returns the table schema.
    ///
    /// Column order: primary key, entity columns in declaration order, audit
    /// columns last.
    ///
    /// # Errors
    ///
    /// - [`SchemaError::EmptyTableName`]
    /// - any error recorded while configuring (duplicate key, conflicting type)
    /// - [`SchemaError::MissingType`] for a column without a type
    /// - [`SchemaError::AuditConstraint`] if the audit contract is not met
    /// - [`SchemaError::UnknownIndexColumn`] for an index on an unknown column
    pub fn build(self) -> Result<TableSchema, SchemaError> {
        if self.table.trim().is_empty() {
            return Err(SchemaError::EmptyTableName);
        }

        if let Some(err) = self.errors.into_iter().next() {
            return Err(err);
        }

        if let Some(column) = self.columns.iter().find(|c| c.column_type.is_none()) {
            return Err(SchemaError::MissingType {
                table: self.table,
                column: column.name.clone(),
            });
        }

        for index in &self.indexes {
            for column in &index.columns {
                if !self.columns.iter().any(|c| &c.name == column) {
                    return Err(SchemaError::UnknownIndexColumn {
                        table: self.table,
                        column: column.clone(),
                    });
                }
            }
        }

        let (mut ordered, rest): (Vec<_>, Vec<_>) =
            self.columns.into_iter().partition(|c| c.primary_key);
        let (audit, entity): (Vec<_>, Vec<_>) = rest.into_iter().partition(|c| c.is_audit());
        ordered.extend(entity);
        ordered.extend(audit);

        let schema = TableSchema {
            name: self.table,
            columns: ordered,
            indexes: self.indexes,
        };

        if let Some(violation) = audit_violations(&schema).into_iter().next() {
            return Err(SchemaError::AuditConstraint(violation));
        }

        Ok(schema)
    }
}

/// Configures one column. Returned by [`EntityTypeBuilder::property`].
pub struct PropertyBuilder<'a> {
    table: &'a str,
    column: &'a mut ColumnSchema,
    errors: &'a mut Vec<SchemaError>,
}

impl PropertyBuilder<'_> {
    /// Sets the column type. Setting a different type twice is an error.
    pub fn column_type(self, column_type: ColumnType) -> Self {
        match self.column.column_type {
            Some(existing) if existing != column_type => {
                self.errors.push(SchemaError::ConflictingType {
                    table: self.table.to_string(),
                    column: self.column.name.clone(),
                    existing: existing.to_string(),
                    requested: column_type.to_string(),
                });
            }
            _ => self.column.column_type = Some(column_type),
        }
        self
    }

    /// `NOT NULL` when `required`, nullable otherwise.
    pub fn is_required(self, required: bool) -> Self {
        self.column.required = required;
        self
    }

    /// Adds a `UNIQUE` constraint.
    pub fn is_unique(self) -> Self {
        self.column.unique = true;
        self
    }

    /// Sets a SQL default expression.
    pub fn has_default(self, expr: &str) -> Self {
        self.column.default = Some(expr.to_string());
        self
    }

    /// Adds a foreign key to `table(column)`.
    pub fn references(self, table: &str, column: &str) -> Self {
        self.column.references = Some(ForeignKey {
            table: table.to_string(),
            column: column.to_string(),
        });
        self
    }

    /// Adds a `CHECK` constraint.
    pub fn check(self, expr: &str) -> Self {
        self.column.check = Some(expr.to_string());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Page;
    use crate::mapping::base_map::configure_audit;

    fn page_builder() -> EntityTypeBuilder<Page> {
        let mut builder = EntityTypeBuilder::<Page>::new();
        configure_audit(&mut builder);
        builder.has_key("id");
        builder
            .property("title")
            .column_type(ColumnType::VarChar(200))
            .is_required(true);
        builder
    }

    #[test]
    fn test_build_orders_key_entity_audit() {
        let schema = page_builder().build().unwrap();

        let names: Vec<_> = schema.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["id", "title", "created_at", "updated_at", "deleted_at", "status"]
        );
    }

    #[test]
    fn test_column_sql() {
        let schema = page_builder().build().unwrap();

        assert_eq!(schema.column("id").unwrap().to_sql(), "id BIGSERIAL PRIMARY KEY");
        assert_eq!(
            schema.column("title").unwrap().to_sql(),
            "title VARCHAR(200) NOT NULL"
        );
        assert_eq!(
            schema.column("updated_at").unwrap().to_sql(),
            "updated_at TIMESTAMPTZ"
        );
    }

    #[test]
    fn test_missing_type_is_error() {
        let mut builder = page_builder();
        builder.property("content").is_required(true);

        assert!(matches!(
            builder.build(),
            Err(SchemaError::MissingType { column, .. }) if column == "content"
        ));
    }

    #[test]
    fn test_conflicting_type_is_error() {
        let mut builder = page_builder();
        builder.property("title").column_type(ColumnType::Text);

        assert!(matches!(
            builder.build(),
            Err(SchemaError::ConflictingType { .. })
        ));
    }

    #[test]
    fn test_second_key_is_error() {
        let mut builder = page_builder();
        builder.has_key("page_id");

        assert!(matches!(builder.build(), Err(SchemaError::DuplicateKey { .. })));
    }

    #[test]
    fn test_index_on_unknown_column_is_error() {
        let mut builder = page_builder();
        builder.has_index(&["nope"]);

        assert!(matches!(
            builder.build(),
            Err(SchemaError::UnknownIndexColumn { .. })
        ));
    }

    #[test]
    fn test_weakened_audit_column_is_rejected() {
        let mut builder = page_builder();
        builder.property(CREATED_AT).is_required(false);

        assert!(matches!(builder.build(), Err(SchemaError::AuditConstraint(_))));
    }

    #[test]
    fn test_without_audit_columns_is_rejected() {
        let mut builder = EntityTypeBuilder::<Page>::new();
        builder.has_key("id");

        assert!(matches!(builder.build(), Err(SchemaError::AuditConstraint(_))));
    }

    #[test]
    fn test_ddl_contains_index() {
        let mut builder = page_builder();
        builder.has_index(&["title"]);
        let ddl = builder.build().unwrap().to_ddl();

        assert_eq!(ddl.len(), 2);
        assert!(ddl[0].starts_with("CREATE TABLE IF NOT EXISTS pages ("));
        assert_eq!(
            ddl[1],
            "CREATE INDEX IF NOT EXISTS pages_title_idx ON pages (title)"
        );
    }
}
