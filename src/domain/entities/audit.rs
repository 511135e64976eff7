//! Audit metadata shared by every persisted entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Column holding the creation timestamp.
pub const CREATED_AT: &str = "created_at";
/// Column holding the last update timestamp.
pub const UPDATED_AT: &str = "updated_at";
/// Column holding the soft-delete timestamp.
pub const DELETED_AT: &str = "deleted_at";
/// Column holding the [`Status`] flag.
pub const STATUS: &str = "status";

/// Lifecycle status of a record.
///
/// Stored as `SMALLINT`. `Passive` rows are soft-deleted and never returned
/// by reads or lists.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema, sqlx::Type,
)]
#[repr(i16)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Active = 1,
    Modified = 2,
    Passive = 3,
}

impl Status {
    /// All status values, in storage order.
    pub const ALL: [Status; 3] = [Status::Active, Status::Modified, Status::Passive];

    /// Returns the stored representation.
    pub fn code(self) -> i16 {
        self as i16
    }
}

/// The four audit attributes every entity exposes.
///
/// `created_at` and `status` are mandatory; `updated_at` and `deleted_at`
/// stay `NULL` until the record is modified or soft-deleted.
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Audit {
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
    pub deleted_at: Option<DateTime<Utc>>,
    pub status: Status,
}

impl Audit {
    /// Audit fields of a record created at `created_at`.
    pub fn created(created_at: DateTime<Utc>) -> Self {
        Self {
            created_at,
            updated_at: None,
            deleted_at: None,
            status: Status::Active,
        }
    }

    /// Returns true if the record has been soft-deleted.
    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some() || self.status == Status::Passive
    }
}

/// Capability shared by every persisted entity.
///
/// The mapping layer registers one table per implementor and applies the
/// audit constraints to it; see [`crate::mapping::EntityMap`].
pub trait BaseEntity {
    /// Name of the backing table.
    const TABLE: &'static str;

    /// Primary key.
    fn id(&self) -> i64;

    /// Audit metadata.
    fn audit(&self) -> &Audit;

    /// Returns true if the record has been soft-deleted.
    fn is_deleted(&self) -> bool {
        self.audit().is_deleted()
    }
}
