use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::core::error::Result;
use crate::core::extractor::AppJson;
use crate::features::service_catalog::dtos::{ServiceRef, ServiceRequestDto, ServiceResponseDto};
use crate::features::service_catalog::services::ServiceCatalogService;
use crate::shared::types::ApiResponse;

/// Create a service
#[utoipa::path(
    post,
    path = "/api/services",
    request_body = ServiceRequestDto,
    responses(
        (status = 201, description = "Service created successfully", body = ApiResponse<ServiceResponseDto>),
        (status = 400, description = "Validation failed")
    ),
    tag = "services"
)]
pub async fn create_service(
    State(service): State<Arc<ServiceCatalogService>>,
    AppJson(dto): AppJson<ServiceRequestDto>,
) -> Result<(StatusCode, Json<ApiResponse<ServiceResponseDto>>)> {
    let created = service.create(dto).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(created, "Service created successfully")),
    ))
}

/// List all services in creation order
#[utoipa::path(
    get,
    path = "/api/services",
    responses(
        (status = 200, description = "Services fetched successfully", body = ApiResponse<Vec<ServiceResponseDto>>)
    ),
    tag = "services"
)]
pub async fn list_services(
    State(service): State<Arc<ServiceCatalogService>>,
) -> Result<Json<ApiResponse<Vec<ServiceResponseDto>>>> {
    let services = service.list().await?;
    Ok(Json(ApiResponse::success(
        services,
        "Services fetched successfully",
    )))
}

/// Active services that have at least one published blog
#[utoipa::path(
    get,
    path = "/api/services/with-blogs",
    responses(
        (status = 200, description = "Filtered services fetched successfully", body = ApiResponse<Vec<ServiceRef>>)
    ),
    tag = "services"
)]
pub async fn list_services_with_blogs(
    State(service): State<Arc<ServiceCatalogService>>,
) -> Result<Json<ApiResponse<Vec<ServiceRef>>>> {
    let services = service.list_with_published_blogs().await?;
    Ok(Json(ApiResponse::success(
        services,
        "Filtered services fetched successfully",
    )))
}

/// Get service by ID
#[utoipa::path(
    get,
    path = "/api/services/{id}",
    params(
        ("id" = String, Path, description = "Service ID")
    ),
    responses(
        (status = 200, description = "Service fetched successfully", body = ApiResponse<ServiceResponseDto>),
        (status = 404, description = "Service not found")
    ),
    tag = "services"
)]
pub async fn get_service(
    State(service): State<Arc<ServiceCatalogService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<ServiceResponseDto>>> {
    let found = service.get(&id).await?;
    Ok(Json(ApiResponse::success(found, "Service fetched successfully")))
}

/// Replace a service
#[utoipa::path(
    put,
    path = "/api/services/{id}",
    params(
        ("id" = String, Path, description = "Service ID")
    ),
    request_body = ServiceRequestDto,
    responses(
        (status = 200, description = "Service updated successfully", body = ApiResponse<ServiceResponseDto>),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Service not found")
    ),
    tag = "services"
)]
pub async fn update_service(
    State(service): State<Arc<ServiceCatalogService>>,
    Path(id): Path<String>,
    AppJson(dto): AppJson<ServiceRequestDto>,
) -> Result<Json<ApiResponse<ServiceResponseDto>>> {
    let updated = service.update(&id, dto).await?;
    Ok(Json(ApiResponse::success(updated, "Service updated successfully")))
}

/// Delete a service
///
/// Blogs and contacts referencing it are kept and show a null service.
#[utoipa::path(
    delete,
    path = "/api/services/{id}",
    params(
        ("id" = String, Path, description = "Service ID")
    ),
    responses(
        (status = 200, description = "Service deleted successfully"),
        (status = 404, description = "Service not found")
    ),
    tag = "services"
)]
pub async fn delete_service(
    State(service): State<Arc<ServiceCatalogService>>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<()>>> {
    service.delete(&id).await?;
    Ok(Json(ApiResponse::message("Service deleted successfully")))
}
