use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::contacts::dtos::{
    ContactDetailDto, ContactResponseDto, ContactStatusDto, CreateContactDto,
};
use crate::features::contacts::services::ContactService;
use crate::shared::query::ListQuery;
use crate::shared::types::ApiResponse;

/// Submit a contact request
#[utoipa::path(
    post,
    path = "/api/contact",
    request_body = CreateContactDto,
    responses(
        (status = 201, description = "Contact request submitted successfully", body = ApiResponse<ContactResponseDto>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Service not found")
    ),
    tag = "contacts"
)]
pub async fn create_contact(
    State(service): State<Arc<ContactService>>,
    AppJson(dto): AppJson<CreateContactDto>,
) -> Result<(StatusCode, Json<ApiResponse<ContactResponseDto>>)> {
    let contact = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(
            contact,
            "Contact request submitted successfully",
        )),
    ))
}

/// List contact requests with pagination, search and status filter
#[utoipa::path(
    get,
    path = "/api/contact",
    params(ListQuery),
    responses(
        (status = 200, description = "Contacts fetched successfully", body = ApiResponse<Vec<ContactDetailDto>>)
    ),
    tag = "contacts"
)]
pub async fn list_contacts(
    State(service): State<Arc<ContactService>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<Vec<ContactDetailDto>>>> {
    let (contacts, pagination) = service.list(&query).await?;
    Ok(Json(ApiResponse::paginated(
        contacts,
        "Contacts fetched successfully",
        pagination,
    )))
}

/// Mark a contact request fulfilled or pending
#[utoipa::path(
    put,
    path = "/api/contact/status/{id}",
    params(
        ("id" = String, Path, description = "Contact ID")
    ),
    request_body = ContactStatusDto,
    responses(
        (status = 200, description = "Contact status updated successfully", body = ApiResponse<ContactDetailDto>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Contact not found")
    ),
    tag = "contacts"
)]
pub async fn update_contact_status(
    State(service): State<Arc<ContactService>>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<ContactStatusDto>,
) -> Result<Json<ApiResponse<ContactDetailDto>>> {
    let contact = service.update_status(&id, dto).await?;
    Ok(Json(ApiResponse::success(
        contact,
        "Contact status updated successfully",
    )))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{json, Value};

    use crate::shared::test_helpers::{contact_payload, create_service, test_server};

    #[tokio::test]
    async fn test_submit_contact_starts_pending() {
        let server = test_server();
        let service_id = create_service(&server, 1).await;

        let mut payload = contact_payload(&service_id);
        payload["status"] = json!(1);
        let response = server.post("/api/contact").json(&payload).await;
        response.assert_status(StatusCode::CREATED);

        let body: Value = response.json();
        assert_eq!(body["message"], "Contact request submitted successfully");
        assert_eq!(body["data"]["status"], 2);
        assert_eq!(body["data"]["service"], service_id.as_str());
    }

    #[tokio::test]
    async fn test_submit_contact_rejections() {
        let server = test_server();

        let response = server
            .post("/api/contact")
            .json(&json!({"name": "Ana", "email": "ana@example.com"}))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(
            body["errors"],
            json!([
                {"path": "phone", "msg": "Phone is required"},
                {"path": "message", "msg": "Message is required"},
                {"path": "service", "msg": "Service is required"},
            ])
        );

        let response = server
            .post("/api/contact")
            .json(&contact_payload("not-a-uuid"))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body["message"], "Service not found");
    }

    #[tokio::test]
    async fn test_non_string_fields_are_violations() {
        let server = test_server();

        let response = server
            .post("/api/contact")
            .json(&json!({"name": 1, "email": "ana@example.com", "phone": ["555"]}))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(
            body["errors"],
            json!([
                {"path": "name", "msg": "Name is required"},
                {"path": "phone", "msg": "Phone is required"},
                {"path": "message", "msg": "Message is required"},
                {"path": "service", "msg": "Service is required"},
            ])
        );
    }

    #[tokio::test]
    async fn test_page_far_past_the_data_is_empty() {
        let server = test_server();
        let service_id = create_service(&server, 1).await;
        server
            .post("/api/contact")
            .json(&contact_payload(&service_id))
            .await
            .assert_status(StatusCode::CREATED);

        let response = server
            .get("/api/contact")
            .add_query_param("page", "9223372036854775807")
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["data"], json!([]));
        assert_eq!(body["pagination"]["total"], 1);
        assert_eq!(body["pagination"]["page"], i64::MAX);
    }

    #[tokio::test]
    async fn test_list_and_update_status() {
        let server = test_server();
        let service_id = create_service(&server, 1).await;

        let mut ana = contact_payload(&service_id);
        ana["name"] = json!("Ana Lima");
        ana["phone"] = json!("+1 555 0100");
        let ana: Value = server.post("/api/contact").json(&ana).await.json();
        let ana_id = ana["data"]["id"].as_str().unwrap().to_string();

        let mut bob = contact_payload(&service_id);
        bob["name"] = json!("Bob Stone");
        bob["phone"] = json!("+1 444 0100");
        server.post("/api/contact").json(&bob).await;

        let body: Value = server
            .get("/api/contact")
            .add_query_param("search", "ana li")
            .await
            .json();
        assert_eq!(body["message"], "Contacts fetched successfully");
        assert_eq!(body["pagination"]["total"], 1);
        assert_eq!(body["data"][0]["id"], ana_id.as_str());
        assert!(body["data"][0]["service"]["name"].is_string());

        let response = server
            .put(&format!("/api/contact/status/{}", ana_id))
            .json(&json!({"status": 0}))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(
            body["errors"][0]["msg"],
            "Status must be 1 (fulfilled) or 2 (pending)"
        );

        let response = server
            .put(&format!("/api/contact/status/{}", ana_id))
            .json(&json!({"status": 1}))
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["message"], "Contact status updated successfully");
        assert_eq!(body["data"]["status"], 1);
        assert_eq!(body["data"]["service"]["id"], service_id.as_str());

        let body: Value = server
            .get("/api/contact")
            .add_query_param("status", "2")
            .await
            .json();
        assert_eq!(body["pagination"]["total"], 1);
        assert_eq!(body["data"][0]["name"], "Bob Stone");

        server
            .put("/api/contact/status/0190a6f0-0000-7000-8000-000000000000")
            .json(&json!({"status": 1}))
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
