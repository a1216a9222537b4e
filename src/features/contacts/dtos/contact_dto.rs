use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::features::contacts::models::{Contact, ContactStatus, ContactWithService, NewContact};
use crate::features::service_catalog::models::ServiceRef;
use crate::core::error::Result;
use crate::shared::status::EntityStatus;
use crate::shared::validation::{status_code, text_value, validated_status, RequestBody};

fn validate_contact_status(value: &Value) -> std::result::Result<(), ValidationError> {
    status_code::<ContactStatus>(value)
}

/// Contact request submitted from the public site. New requests always
/// start out pending; a status in the body is ignored.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct CreateContactDto {
    #[validate(
        required(message = "Name is required"),
        custom(function = "crate::shared::validation::not_blank", message = "Name is required")
    )]
    #[schema(value_type = String, example = "Ana Lopez")]
    pub name: Option<Value>,

    #[validate(
        required(message = "Email is required"),
        custom(function = "crate::shared::validation::not_blank", message = "Email is required")
    )]
    #[schema(value_type = String, example = "ana@example.com")]
    pub email: Option<Value>,

    #[validate(
        required(message = "Phone is required"),
        custom(function = "crate::shared::validation::not_blank", message = "Phone is required")
    )]
    #[schema(value_type = String, example = "+1 555 0100")]
    pub phone: Option<Value>,

    #[validate(
        required(message = "Message is required"),
        custom(
            function = "crate::shared::validation::not_blank",
            message = "Message is required"
        )
    )]
    #[schema(value_type = String)]
    pub message: Option<Value>,

    /// ID of the service the request is about
    #[validate(
        required(message = "Service is required"),
        custom(
            function = "crate::shared::validation::not_blank",
            message = "Service is required"
        )
    )]
    #[schema(value_type = String)]
    pub service: Option<Value>,
}

impl RequestBody for CreateContactDto {
    const FIELDS: &'static [&'static str] = &["name", "email", "phone", "message", "service"];
}

impl CreateContactDto {
    pub fn into_new_contact(self, service_id: Uuid) -> NewContact {
        NewContact {
            name: text_value(self.name),
            email: text_value(self.email),
            phone: text_value(self.phone),
            message: text_value(self.message),
            service_id,
            status: ContactStatus::Pending,
        }
    }

    /// Raw service reference, when it was sent as a string
    pub fn service_ref(&self) -> Option<&str> {
        self.service.as_ref().and_then(Value::as_str)
    }
}

#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct ContactStatusDto {
    /// 1 = fulfilled, 2 = pending
    #[validate(
        required(message = "Status must be 1 (fulfilled) or 2 (pending)"),
        custom(
            function = "validate_contact_status",
            message = "Status must be 1 (fulfilled) or 2 (pending)"
        )
    )]
    #[schema(value_type = i16, example = 1)]
    pub status: Option<Value>,
}

impl RequestBody for ContactStatusDto {
    const FIELDS: &'static [&'static str] = &["status"];
}

impl ContactStatusDto {
    pub fn status(&self) -> Result<ContactStatus> {
        validated_status(self.status.as_ref())
    }
}

/// Contact as returned on submission: the service is its id
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactResponseDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub service: Uuid,
    /// 1 = fulfilled, 2 = pending
    pub status: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Contact> for ContactResponseDto {
    fn from(c: Contact) -> Self {
        Self {
            id: c.id,
            name: c.name,
            email: c.email,
            phone: c.phone,
            message: c.message,
            service: c.service_id,
            status: c.status.code(),
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}

/// Contact with its service embedded as `{id, name}`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetailDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub service: Option<ServiceRef>,
    pub status: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ContactWithService> for ContactDetailDto {
    fn from(row: ContactWithService) -> Self {
        let c = row.contact;
        Self {
            id: c.id,
            name: c.name,
            email: c.email,
            phone: c.phone,
            message: c.message,
            service: row.service,
            status: c.status.code(),
            created_at: c.created_at,
            updated_at: c.updated_at,
        }
    }
}
