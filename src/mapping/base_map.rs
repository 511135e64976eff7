//! Audit-field contract applied to every entity table.

use std::fmt;

use crate::domain::entities::BaseEntity;
use crate::domain::entities::audit::{CREATED_AT, DELETED_AT, STATUS, Status, UPDATED_AT};

use super::builder::{ColumnType, EntityTypeBuilder, TableSchema};

/// Expected nullability of each audit column.
pub const AUDIT_COLUMNS: [(&str, bool); 4] = [
    (CREATED_AT, true),
    (UPDATED_AT, false),
    (DELETED_AT, false),
    (STATUS, true),
];

/// Storage configuration of one entity type.
///
/// [`configure`](EntityMap::configure) applies the audit constraints and then
/// the entity's own [`configure_entity`](EntityMap::configure_entity) hook.
/// A hook that weakens an audit column makes
/// [`EntityTypeBuilder::build`] fail.
pub trait EntityMap<T: BaseEntity> {
    /// Entity-specific columns, keys and indexes.
    fn configure_entity(&self, _builder: &mut EntityTypeBuilder<T>) {}

    fn configure(&self, builder: &mut EntityTypeBuilder<T>) {
        configure_audit(builder);
        self.configure_entity(builder);
    }
}

/// Registers the four audit columns on `builder`.
///
/// `created_at` and `status` are `NOT NULL`; `updated_at` and `deleted_at`
/// are nullable.
pub fn configure_audit<T>(builder: &mut EntityTypeBuilder<T>) {
    let status_check = format!(
        "{STATUS} IN ({})",
        Status::ALL
            .iter()
            .map(|s| s.code().to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );

    builder
        .property(CREATED_AT)
        .column_type(ColumnType::TimestampTz)
        .is_required(true)
        .has_default("NOW()");
    builder
        .property(UPDATED_AT)
        .column_type(ColumnType::TimestampTz)
        .is_required(false);
    builder
        .property(DELETED_AT)
        .column_type(ColumnType::TimestampTz)
        .is_required(false);
    builder
        .property(STATUS)
        .column_type(ColumnType::SmallInt)
        .is_required(true)
        .has_default(&Status::Active.code().to_string())
        .check(&status_check);
}

/// An audit column whose nullability differs from the contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuditViolation {
    pub table: String,
    pub column: &'static str,
    pub expected_required: bool,
    /// `None` when the column is missing.
    pub found_required: Option<bool>,
}

impl fmt::Display for AuditViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let expected = if self.expected_required {
            "NOT NULL"
        } else {
            "nullable"
        };
        match self.found_required {
            None => write!(
                f,
                "{}.{} is missing (expected {expected})",
                self.table, self.column
            ),
            Some(found) => write!(
                f,
                "{}.{} is {} (expected {expected})",
                self.table,
                self.column,
                if found { "NOT NULL" } else { "nullable" }
            ),
        }
    }
}

/// Lists every audit column of `table` that breaks the contract.
pub fn audit_violations(table: &TableSchema) -> Vec<AuditViolation> {
    check_audit(&table.name, |name| {
        table.column(name).map(|c| c.required)
    })
}

/// Checks the contract against an arbitrary nullability lookup.
///
/// `lookup` returns `Some(required)` for an existing column, `None` otherwise.
pub fn check_audit(
    table: &str,
    lookup: impl Fn(&str) -> Option<bool>,
) -> Vec<AuditViolation> {
    AUDIT_COLUMNS
        .iter()
        .filter_map(|&(column, expected_required)| {
            let found_required = lookup(column);
            (found_required != Some(expected_required)).then(|| AuditViolation {
                table: table.to_string(),
                column,
                expected_required,
                found_required,
            })
        })
        .collect()
}
