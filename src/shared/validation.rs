//! Request validation helpers.
//!
//! DTOs derive `validator::Validate`; [`validate_request`] flattens the
//! resulting errors into the `{path, msg}` list returned to clients, in the
//! order the DTO declares its fields. All violations are reported at once.

use std::borrow::Cow;

use serde_json::Value;
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::core::error::{AppError, Result};
use crate::shared::status::EntityStatus;
use crate::shared::types::FieldError;

/// A validated request body whose violations are reported in a fixed order
pub trait RequestBody: Validate {
    /// Field names in the order violations should be listed
    const FIELDS: &'static [&'static str];
}

pub fn validate_request<T: RequestBody>(dto: &T) -> Result<()> {
    match dto.validate() {
        Ok(()) => Ok(()),
        Err(errors) => Err(AppError::Validation(collect_violations(&errors, T::FIELDS))),
    }
}

pub fn collect_violations(errors: &ValidationErrors, order: &[&str]) -> Vec<FieldError> {
    let field_errors = errors.field_errors();

    order
        .iter()
        .filter_map(|field| field_errors.get(*field).map(|errs| (*field, errs)))
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| {
                let msg = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is invalid", field));
                FieldError::new(field, msg)
            })
        })
        .collect()
}

/// Text must be a JSON string containing something other than whitespace.
/// A number or other non-string value is reported like a missing field.
pub fn not_blank(value: &Value) -> std::result::Result<(), ValidationError> {
    match value.as_str() {
        Some(text) if !text.trim().is_empty() => Ok(()),
        _ => Err(ValidationError::new("blank")),
    }
}

/// Optional text: when present it must be a JSON string
pub fn text(value: &Value) -> std::result::Result<(), ValidationError> {
    if value.is_string() {
        Ok(())
    } else {
        Err(ValidationError::new("text"))
    }
}

/// Owned string of a validated text field
pub fn text_value(value: Option<Value>) -> String {
    match value {
        Some(Value::String(text)) => text,
        _ => String::new(),
    }
}

/// Status of a body that already passed validation. A value outside the
/// status set here means validation was skipped, which is a server fault.
pub fn validated_status<S: EntityStatus>(value: Option<&Value>) -> Result<S> {
    value
        .and_then(S::from_json)
        .ok_or_else(|| AppError::Internal("Status was not validated before use".to_string()))
}

/// Parse an id taken from a path segment or a reference field.
/// Anything that is not a UUID yields `None`, which callers treat as not found.
pub fn parse_id(raw: &str) -> Option<Uuid> {
    Uuid::parse_str(raw.trim()).ok()
}

/// Status must be a JSON number inside the entity's status set
pub fn status_code<S: EntityStatus>(value: &Value) -> std::result::Result<(), ValidationError> {
    match S::from_json(value) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new("status")
            .with_message(Cow::Borrowed("Status is not an allowed value"))),
    }
}
