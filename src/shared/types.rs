use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::query::Pagination;

/// Response envelope shared by every endpoint
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub status: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<FieldError>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
}

/// A single field violation, e.g. `{"path": "title", "msg": "Title is required"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct FieldError {
    pub path: String,
    pub msg: String,
}

impl FieldError {
    pub fn new(path: impl Into<String>, msg: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            msg: msg.into(),
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: T, message: impl Into<String>) -> Self {
        Self {
            status: true,
            message: message.into(),
            data: Some(data),
            errors: None,
            pagination: None,
        }
    }

    pub fn paginated(data: T, message: impl Into<String>, pagination: Pagination) -> Self {
        Self {
            pagination: Some(pagination),
            ..Self::success(data, message)
        }
    }
}

impl ApiResponse<()> {
    /// Success envelope without a payload
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            status: true,
            message: message.into(),
            data: None,
            errors: None,
            pagination: None,
        }
    }

    pub fn error(message: impl Into<String>, errors: Option<Vec<FieldError>>) -> Self {
        Self {
            status: false,
            message: message.into(),
            data: None,
            errors,
            pagination: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_error_envelope_omits_empty_fields() {
        let body = ApiResponse::error(
            "Validation failed",
            Some(vec![FieldError::new("title", "Title is required")]),
        );
        let value = serde_json::to_value(body).unwrap();
        assert_eq!(
            value,
            json!({
                "status": false,
                "message": "Validation failed",
                "errors": [{"path": "title", "msg": "Title is required"}]
            })
        );
    }

    #[test]
    fn test_paginated_envelope_includes_pagination() {
        let pagination = Pagination {
            total: 11,
            page: 2,
            limit: 5,
            total_pages: 3,
        };
        let value =
            serde_json::to_value(ApiResponse::paginated(vec![1, 2], "ok", pagination)).unwrap();
        assert_eq!(value["status"], json!(true));
        assert_eq!(
            value["pagination"],
            json!({"total": 11, "page": 2, "limit": 5, "totalPages": 3})
        );
    }
}
