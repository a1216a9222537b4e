use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::shared::status::EntityStatus;

/// Service status stored as SMALLINT (0 = inactive, 1 = active)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Type)]
#[repr(i16)]
pub enum ServiceStatus {
    Inactive = 0,
    #[default]
    Active = 1,
}

impl EntityStatus for ServiceStatus {
    const ALL: &'static [Self] = &[ServiceStatus::Inactive, ServiceStatus::Active];

    fn code(self) -> i16 {
        self as i16
    }
}

/// Database model for service
#[derive(Debug, Clone, FromRow)]
pub struct Service {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub status: ServiceStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields written by create and full update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceData {
    pub name: String,
    pub description: String,
    pub status: ServiceStatus,
}

/// Shallow `{id, name}` projection of a service, embedded in blog and
/// contact listings and returned by the published-blogs join.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct ServiceRef {
    pub id: Uuid,
    pub name: String,
}
