use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::blogs::dtos::{BlogDetailDto, BlogRequestDto, BlogResponseDto, BlogStatusDto};
use crate::features::blogs::services::BlogService;
use crate::shared::query::ListQuery;
use crate::shared::types::ApiResponse;

/// Create a blog
///
/// The slug is derived from the title and suffixed when already in use.
#[utoipa::path(
    post,
    path = "/api/blog/create",
    request_body = BlogRequestDto,
    responses(
        (status = 201, description = "Blog created successfully", body = ApiResponse<BlogResponseDto>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Service not found"),
        (status = 409, description = "Slug conflict persisted after retry")
    ),
    tag = "blogs"
)]
pub async fn create_blog(
    State(service): State<Arc<BlogService>>,
    AppJson(dto): AppJson<BlogRequestDto>,
) -> Result<(StatusCode, Json<ApiResponse<BlogResponseDto>>)> {
    let blog = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(blog, "Blog created successfully")),
    ))
}

/// List blogs with pagination, search and status filter
#[utoipa::path(
    get,
    path = "/api/blog",
    params(ListQuery),
    responses(
        (status = 200, description = "Blogs fetched successfully", body = ApiResponse<Vec<BlogDetailDto>>)
    ),
    tag = "blogs"
)]
pub async fn list_blogs(
    State(service): State<Arc<BlogService>>,
    Query(query): Query<ListQuery>,
) -> Result<Json<ApiResponse<Vec<BlogDetailDto>>>> {
    let (blogs, pagination) = service.list(&query).await?;
    Ok(Json(ApiResponse::paginated(
        blogs,
        "Blogs fetched successfully",
        pagination,
    )))
}

/// Get blog by ID
#[utoipa::path(
    get,
    path = "/api/blog/{id}",
    params(
        ("id" = String, Path, description = "Blog ID")
    ),
    responses(
        (status = 200, description = "Blog fetched successfully", body = ApiResponse<BlogDetailDto>),
        (status = 404, description = "Blog not found")
    ),
    tag = "blogs"
)]
pub async fn get_blog(
    State(service): State<Arc<BlogService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<BlogDetailDto>>> {
    let blog = service.get(&id).await?;
    Ok(Json(ApiResponse::success(blog, "Blog fetched successfully")))
}

/// Get blog by slug
#[utoipa::path(
    get,
    path = "/api/blog/slug/{slug}",
    params(
        ("slug" = String, Path, description = "Blog slug")
    ),
    responses(
        (status = 200, description = "Blog fetched successfully", body = ApiResponse<BlogDetailDto>),
        (status = 404, description = "Blog not found with this slug")
    ),
    tag = "blogs"
)]
pub async fn get_blog_by_slug(
    State(service): State<Arc<BlogService>>,
    Path(slug): Path<String>,
) -> Result<Json<ApiResponse<BlogDetailDto>>> {
    let blog = service.get_by_slug(&slug).await?;
    Ok(Json(ApiResponse::success(blog, "Blog fetched successfully")))
}

/// Published blogs of a service, newest first
#[utoipa::path(
    get,
    path = "/api/services/by-service/{service_id}",
    params(
        ("service_id" = String, Path, description = "Service ID")
    ),
    responses(
        (status = 200, description = "Published blogs fetched successfully", body = ApiResponse<Vec<BlogDetailDto>>)
    ),
    tag = "services"
)]
pub async fn list_published_blogs_for_service(
    State(service): State<Arc<BlogService>>,
    Path(service_id): Path<String>,
) -> Result<Json<ApiResponse<Vec<BlogDetailDto>>>> {
    let blogs = service.list_published_for_service(&service_id).await?;
    Ok(Json(ApiResponse::success(
        blogs,
        "Published blogs fetched successfully",
    )))
}

/// Replace a blog; the slug is preserved
#[utoipa::path(
    put,
    path = "/api/blog/{id}",
    params(
        ("id" = String, Path, description = "Blog ID")
    ),
    request_body = BlogRequestDto,
    responses(
        (status = 200, description = "Blog updated successfully", body = ApiResponse<BlogResponseDto>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Blog or service not found")
    ),
    tag = "blogs"
)]
pub async fn update_blog(
    State(service): State<Arc<BlogService>>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<BlogRequestDto>,
) -> Result<Json<ApiResponse<BlogResponseDto>>> {
    let blog = service.update(&id, dto).await?;
    Ok(Json(ApiResponse::success(blog, "Blog updated successfully")))
}

/// Update only the status of a blog
#[utoipa::path(
    patch,
    path = "/api/blog/{id}/status",
    params(
        ("id" = String, Path, description = "Blog ID")
    ),
    request_body = BlogStatusDto,
    responses(
        (status = 200, description = "Blog status updated successfully", body = ApiResponse<BlogResponseDto>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Blog not found")
    ),
    tag = "blogs"
)]
pub async fn update_blog_status(
    State(service): State<Arc<BlogService>>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<BlogStatusDto>,
) -> Result<Json<ApiResponse<BlogResponseDto>>> {
    let blog = service.update_status(&id, dto).await?;
    Ok(Json(ApiResponse::success(
        blog,
        "Blog status updated successfully",
    )))
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{json, Value};

    use crate::shared::test_helpers::{
        blog_payload, create_blog, create_service, test_server,
    };

    fn assert_suffixed(slug: &str, base: &str) {
        let suffix = slug
            .strip_prefix(&format!("{}-", base))
            .unwrap_or_else(|| panic!("{} does not extend {}", slug, base));
        assert_eq!(suffix.len(), 4);
        assert!(suffix
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[tokio::test]
    async fn test_content_lifecycle() {
        let server = test_server();

        let response = server
            .post("/api/services")
            .json(&json!({"name": "Web Dev", "description": "Sites", "status": 1}))
            .await;
        response.assert_status(StatusCode::CREATED);
        let service: Value = response.json();
        let service_id = service["data"]["id"].as_str().unwrap().to_string();

        let response = server
            .post("/api/blog/create")
            .json(&blog_payload("Hello World", &service_id, 1))
            .await;
        response.assert_status(StatusCode::CREATED);
        let first: Value = response.json();
        assert_eq!(first["message"], "Blog created successfully");
        assert_eq!(first["data"]["slug"], "hello-world");
        assert_eq!(first["data"]["service"], service_id.as_str());

        let second = create_blog(&server, "Hello World", &service_id, 1).await;
        assert_suffixed(second["slug"].as_str().unwrap(), "hello-world");

        let with_blogs: Value = server.get("/api/services/with-blogs").await.json();
        assert_eq!(with_blogs["data"], json!([{"id": service_id, "name": "Web Dev"}]));

        server
            .delete(&format!("/api/services/{}", service_id))
            .await
            .assert_status_ok();

        let list: Value = server.get("/api/blog").await.json();
        assert_eq!(list["pagination"]["total"], 2);
        for blog in list["data"].as_array().unwrap() {
            assert!(blog["service"].is_null());
        }
    }

    #[tokio::test]
    async fn test_create_validation_and_missing_service() {
        let server = test_server();

        let response = server
            .post("/api/blog/create")
            .json(&json!({"title": "Only a title"}))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        let paths: Vec<&str> = body["errors"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["path"].as_str().unwrap())
            .collect();
        assert_eq!(paths, vec!["description", "image_url", "service", "status"]);

        let response = server
            .post("/api/blog/create")
            .json(&blog_payload("Orphan", "0190a6f0-0000-7000-8000-000000000000", 0))
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body["message"], "Service not found");
        assert_eq!(
            body["errors"],
            json!([{"path": "service", "msg": "Invalid Service ID"}])
        );

        let list: Value = server.get("/api/blog").await.json();
        assert_eq!(list["pagination"]["total"], 0);
    }

    #[tokio::test]
    async fn test_wrong_json_type_is_reported_with_other_violations() {
        let server = test_server();

        let response = server
            .post("/api/blog/create")
            .json(&json!({"title": 5, "description": ""}))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["message"], "Validation failed");
        assert_eq!(
            body["errors"],
            json!([
                {"path": "title", "msg": "Title is required"},
                {"path": "description", "msg": "Description is required"},
                {"path": "image_url", "msg": "Image URL is required"},
                {"path": "service", "msg": "Service ID is required"},
                {"path": "status", "msg": "Status must be 0 (Draft), 1 (Published), or 2 (Archived)"}
            ])
        );
    }

    #[tokio::test]
    async fn test_get_by_id_and_slug() {
        let server = test_server();
        let service_id = create_service(&server, 1).await;
        let blog = create_blog(&server, "Rust Tips", &service_id, 0).await;
        let id = blog["id"].as_str().unwrap();

        let body: Value = server.get(&format!("/api/blog/{}", id)).await.json();
        assert_eq!(body["message"], "Blog fetched successfully");
        assert_eq!(body["data"]["service"]["id"], service_id.as_str());
        assert!(body["data"]["image_url"].is_string());

        let body: Value = server.get("/api/blog/slug/rust-tips").await.json();
        assert_eq!(body["data"]["id"], id);

        let response = server.get("/api/blog/slug/nope").await;
        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body["message"], "Blog not found with this slug");

        server
            .get("/api/blog/not-an-id")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_listing_pagination_search_and_status() {
        let server = test_server();
        let service_id = create_service(&server, 1).await;
        for i in 0..5 {
            create_blog(&server, &format!("Post {}", i), &service_id, i % 2).await;
        }
        create_blog(&server, "Gardening", &service_id, 2).await;

        let body: Value = server
            .get("/api/blog")
            .add_query_param("page", "2")
            .add_query_param("limit", "2")
            .await
            .json();
        assert_eq!(body["message"], "Blogs fetched successfully");
        assert_eq!(
            body["pagination"],
            json!({"total": 6, "page": 2, "limit": 2, "totalPages": 3})
        );
        assert_eq!(body["data"].as_array().unwrap().len(), 2);

        let newest: Value = server.get("/api/blog").await.json();
        assert_eq!(newest["data"][0]["title"], "Gardening");

        let body: Value = server
            .get("/api/blog")
            .add_query_param("search", "post")
            .add_query_param("status", "1")
            .await
            .json();
        assert_eq!(body["pagination"]["total"], 2);

        let body: Value = server
            .get("/api/blog")
            .add_query_param("status", "7")
            .add_query_param("limit", "abc")
            .await
            .json();
        assert_eq!(body["pagination"]["total"], 6);
        assert_eq!(body["pagination"]["limit"], 10);
    }

    #[tokio::test]
    async fn test_page_far_past_the_data_is_empty() {
        let server = test_server();
        let service_id = create_service(&server, 1).await;
        create_blog(&server, "Only", &service_id, 1).await;

        for page in ["9223372036854775807", "1000000000000000000"] {
            let response = server
                .get("/api/blog")
                .add_query_param("page", page)
                .add_query_param("limit", "100")
                .await;
            response.assert_status_ok();
            let body: Value = response.json();
            assert_eq!(body["data"], json!([]));
            assert_eq!(body["pagination"]["total"], 1);
            assert_eq!(body["pagination"]["totalPages"], 1);
        }
    }

    #[tokio::test]
    async fn test_full_update_is_idempotent_and_keeps_slug() {
        let server = test_server();
        let service_id = create_service(&server, 1).await;
        let other_service = create_service(&server, 1).await;
        let blog = create_blog(&server, "Before", &service_id, 0).await;
        let id = blog["id"].as_str().unwrap();

        let update = json!({
            "title": "After",
            "subtitle": "New subtitle",
            "description": "Rewritten",
            "image_url": "https://cdn.example.com/b.png",
            "service": other_service,
            "status": 1,
        });
        let first: Value = server
            .put(&format!("/api/blog/{}", id))
            .json(&update)
            .await
            .json();
        let second: Value = server
            .put(&format!("/api/blog/{}", id))
            .json(&update)
            .await
            .json();

        assert_eq!(first["message"], "Blog updated successfully");
        assert_eq!(first["data"]["slug"], "before");
        for key in ["title", "subtitle", "description", "image_url", "service", "status", "slug", "createdAt"] {
            assert_eq!(first["data"][key], second["data"][key], "{} differs", key);
        }

        let response = server
            .put("/api/blog/0190a6f0-0000-7000-8000-000000000000")
            .json(&update)
            .await;
        response.assert_status(StatusCode::NOT_FOUND);
        let body: Value = response.json();
        assert_eq!(body["message"], "Blog not found");
    }

    #[tokio::test]
    async fn test_status_patch_drives_published_views() {
        let server = test_server();
        let service_id = create_service(&server, 1).await;
        let blog = create_blog(&server, "Soon", &service_id, 0).await;
        let id = blog["id"].as_str().unwrap();

        let with_blogs: Value = server.get("/api/services/with-blogs").await.json();
        assert_eq!(with_blogs["data"], json!([]));

        let response = server
            .patch(&format!("/api/blog/{}/status", id))
            .json(&json!({"status": "1"}))
            .await;
        response.assert_status(StatusCode::BAD_REQUEST);

        let response = server
            .patch(&format!("/api/blog/{}/status", id))
            .json(&json!({"status": 1}))
            .await;
        response.assert_status_ok();
        let body: Value = response.json();
        assert_eq!(body["message"], "Blog status updated successfully");
        assert_eq!(body["data"]["status"], 1);

        let with_blogs: Value = server.get("/api/services/with-blogs").await.json();
        assert_eq!(with_blogs["data"][0]["id"], service_id.as_str());

        let by_service: Value = server
            .get(&format!("/api/services/by-service/{}", service_id))
            .await
            .json();
        assert_eq!(by_service["message"], "Published blogs fetched successfully");
        assert_eq!(by_service["data"][0]["id"], id);
        assert!(by_service["data"][0]["service"]["name"].is_string());

        let empty: Value = server.get("/api/services/by-service/garbage").await.json();
        assert_eq!(empty["data"], json!([]));
    }
}
