//! Audit metadata shared by every response DTO.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::domain::entities::{Audit, Status};

/// Lifecycle timestamps and status of a record.
///
/// `deleted_at` is omitted: deleted records are never returned.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AuditDto {
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    pub status: Status,
}

impl From<Audit> for AuditDto {
    fn from(audit: Audit) -> Self {
        Self {
            created_at: audit.created_at,
            updated_at: audit.updated_at,
            status: audit.status,
        }
    }
}
