use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::{Validate, ValidationError};

use crate::features::blogs::models::{Blog, BlogData, BlogStatus, BlogWithService};
use crate::features::service_catalog::models::ServiceRef;
use crate::core::error::Result;
use crate::shared::status::EntityStatus;
use crate::shared::validation::{status_code, text_value, validated_status, RequestBody};

fn validate_blog_status(value: &Value) -> std::result::Result<(), ValidationError> {
    status_code::<BlogStatus>(value)
}

/// Request body for creating or fully replacing a blog.
/// The slug is derived from the title on create and never changes.
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct BlogRequestDto {
    #[validate(
        required(message = "Title is required"),
        custom(function = "crate::shared::validation::not_blank", message = "Title is required")
    )]
    #[schema(value_type = String, example = "Launching our new service")]
    pub title: Option<Value>,

    #[validate(custom(
        function = "crate::shared::validation::text",
        message = "Subtitle must be text"
    ))]
    #[schema(value_type = Option<String>)]
    pub subtitle: Option<Value>,

    #[validate(
        required(message = "Description is required"),
        custom(
            function = "crate::shared::validation::not_blank",
            message = "Description is required"
        )
    )]
    #[schema(value_type = String)]
    pub description: Option<Value>,

    #[validate(
        required(message = "Image URL is required"),
        custom(
            function = "crate::shared::validation::not_blank",
            message = "Image URL is required"
        )
    )]
    #[schema(value_type = String)]
    pub image_url: Option<Value>,

    /// ID of the service this blog belongs to
    #[validate(
        required(message = "Service ID is required"),
        custom(
            function = "crate::shared::validation::not_blank",
            message = "Service ID is required"
        )
    )]
    #[schema(value_type = String)]
    pub service: Option<Value>,

    /// 0 = draft, 1 = published, 2 = archived
    #[validate(
        required(message = "Status must be 0 (Draft), 1 (Published), or 2 (Archived)"),
        custom(
            function = "validate_blog_status",
            message = "Status must be 0 (Draft), 1 (Published), or 2 (Archived)"
        )
    )]
    #[schema(value_type = i16, example = 0)]
    pub status: Option<Value>,
}

impl RequestBody for BlogRequestDto {
    const FIELDS: &'static [&'static str] =
        &["title", "subtitle", "description", "image_url", "service", "status"];
}

impl BlogRequestDto {
    /// Convert a validated request into store fields once the service
    /// reference has been resolved. Title and subtitle are trimmed; a blank
    /// subtitle is stored as absent.
    pub fn into_data(self, service_id: Uuid) -> Result<BlogData> {
        Ok(BlogData {
            status: validated_status(self.status.as_ref())?,
            title: text_value(self.title).trim().to_string(),
            subtitle: Some(text_value(self.subtitle).trim().to_string())
                .filter(|s| !s.is_empty()),
            description: text_value(self.description),
            image_url: text_value(self.image_url),
            service_id,
        })
    }

    /// Raw service reference, when it was sent as a string
    pub fn service_ref(&self) -> Option<&str> {
        self.service.as_ref().and_then(Value::as_str)
    }
}

/// Request body for the status-only update
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
pub struct BlogStatusDto {
    #[validate(
        required(message = "Status must be 0 (Draft), 1 (Published), or 2 (Archived)"),
        custom(
            function = "validate_blog_status",
            message = "Status must be 0 (Draft), 1 (Published), or 2 (Archived)"
        )
    )]
    #[schema(value_type = i16, example = 1)]
    pub status: Option<Value>,
}

impl RequestBody for BlogStatusDto {
    const FIELDS: &'static [&'static str] = &["status"];
}

impl BlogStatusDto {
    pub fn status(&self) -> Result<BlogStatus> {
        validated_status(self.status.as_ref())
    }
}

/// Blog as returned by create and full update: the service is its id
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogResponseDto {
    pub id: Uuid,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: String,
    #[serde(rename = "image_url")]
    pub image_url: String,
    pub slug: String,
    pub service: Uuid,
    /// 0 = draft, 1 = published, 2 = archived
    pub status: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Blog> for BlogResponseDto {
    fn from(b: Blog) -> Self {
        Self {
            id: b.id,
            title: b.title,
            subtitle: b.subtitle,
            description: b.description,
            image_url: b.image_url,
            slug: b.slug,
            service: b.service_id,
            status: b.status.code(),
            created_at: b.created_at,
            updated_at: b.updated_at,
        }
    }
}

/// Blog with its service embedded as `{id, name}`, or null when the service
/// was deleted
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct BlogDetailDto {
    pub id: Uuid,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: String,
    #[serde(rename = "image_url")]
    pub image_url: String,
    pub slug: String,
    pub service: Option<ServiceRef>,
    /// 0 = draft, 1 = published, 2 = archived
    pub status: i16,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<BlogWithService> for BlogDetailDto {
    fn from(row: BlogWithService) -> Self {
        let b = row.blog;
        Self {
            id: b.id,
            title: b.title,
            subtitle: b.subtitle,
            description: b.description,
            image_url: b.image_url,
            slug: b.slug,
            service: row.service,
            status: b.status.code(),
            created_at: b.created_at,
            updated_at: b.updated_at,
        }
    }
}
