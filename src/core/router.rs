use std::sync::Arc;

use axum::{extract::DefaultBodyLimit, http::StatusCode, routing::get, Router};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::core::config::AppConfig;
use crate::core::middleware;
use crate::features::blogs::{routes as blogs_routes, BlogService};
use crate::features::contacts::{routes as contacts_routes, ContactService};
use crate::features::service_catalog::{routes as services_routes, ServiceCatalogService};
use crate::modules::store::ContentStore;

async fn root() -> &'static str {
    "API is running..."
}

async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Every API route, wired to feature services sharing one store
pub fn api_routes(store: Arc<dyn ContentStore>) -> Router {
    let catalog_service = Arc::new(ServiceCatalogService::new(Arc::clone(&store)));
    tracing::debug!("Service catalog initialized");

    let blog_service = Arc::new(BlogService::new(Arc::clone(&store)));
    tracing::debug!("Blog service initialized");

    let contact_service = Arc::new(ContactService::new(store));
    tracing::debug!("Contact service initialized");

    Router::new()
        .route("/", get(root))
        .route("/health", get(health_check))
        .merge(services_routes::routes(catalog_service))
        .merge(blogs_routes::routes(blog_service))
        .merge(contacts_routes::routes(contact_service))
}

/// Body limit, CORS, tracing and request id layers
pub fn with_layers(router: Router, config: &AppConfig) -> Router {
    router
        .layer(DefaultBodyLimit::max(config.max_request_body_size))
        .layer(middleware::cors_layer(config.cors_allowed_origins.clone()))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid))
}
