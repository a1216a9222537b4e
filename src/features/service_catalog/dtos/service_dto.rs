use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::features::service_catalog::models::{Service, ServiceData, ServiceStatus};
use crate::core::error::Result;
use crate::shared::status::EntityStatus;
use crate::shared::validation::{status_code, text_value, validated_status, RequestBody};

fn validate_service_status(value: &Value) -> std::result::Result<(), ValidationError> {
    status_code::<ServiceStatus>(value)
}

/// Request body for creating or fully replacing a service
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ServiceRequestDto {
    #[validate(
        required(message = "Name is required"),
        custom(function = "crate::shared::validation::not_blank", message = "Name is required")
    )]
    #[schema(value_type = String, example = "Web Development")]
    pub name: Option<Value>,

    #[validate(
        required(message = "Description is required"),
        custom(
            function = "crate::shared::validation::not_blank",
            message = "Description is required"
        )
    )]
    #[schema(value_type = String)]
    pub description: Option<Value>,

    /// 0 = inactive, 1 = active
    #[validate(
        required(message = "Status must be 0 (inactive) or 1 (active)"),
        custom(
            function = "validate_service_status",
            message = "Status must be 0 (inactive) or 1 (active)"
        )
    )]
    #[schema(value_type = i16, example = 1)]
    pub status: Option<Value>,
}

impl RequestBody for ServiceRequestDto {
    const FIELDS: &'static [&'static str] = &["name", "description", "status"];
}

impl ServiceRequestDto {
    /// Convert a validated request into store fields. The name is trimmed.
    pub fn into_data(self) -> Result<ServiceData> {
        Ok(ServiceData {
            status: validated_status(self.status.as_ref())?,
            name: text_value(self.name).trim().to_string(),
            description: text_value(self.description),
        })
    }
}

/// Response DTO for service
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServiceResponseDto {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    /// 0 = inactive, 1 = active
    pub status: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Service> for ServiceResponseDto {
    fn from(s: Service) -> Self {
        Self {
            id: s.id,
            name: s.name,
            description: s.description,
            status: s.status.code(),
            created_at: s.created_at,
            updated_at: s.updated_at,
        }
    }
}
